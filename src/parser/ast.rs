//! AST definitions for the C0 front end
//!
//! Every node belongs to exactly one of four closed families ([`Unit`],
//! [`Decl`], [`Stmt`], [`Expr`]), each a sum type whose variants carry their
//! own payload struct. A node's tag ([`DeclKind`], [`StmtKind`], ...) is
//! derived from the active variant, so it can never disagree with the
//! payload. The [`isa`] / [`try_narrow`] / [`narrow`] helpers recover a
//! concrete variant from a family value, the role `dyn_cast` plays in
//! compilers built without runtime type information.
//!
//! Ownership is strictly tree-shaped: parents own children by value
//! (`Box`/`Vec`), there are no child-to-parent back references, and nodes are
//! never mutated after construction.

use crate::parser::lexer::TokenKind;
use crate::source::SourceLocation;
use std::fmt;

/// Half-open range of token indices a node was built from, kept for
/// diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenSpan {
    pub start: usize,
    pub end: usize,
}

impl TokenSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

// ===== Declarations =====

/// Tags for the declaration family. One tag per variant, never reassigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    Function,
    Variable,
    Struct,
}

/// A top-level or statement-level declaration.
#[derive(Debug, Clone)]
pub enum Decl {
    Function(FunctionDecl),
    Variable(VariableDecl),
    Struct(StructDecl),
}

impl Decl {
    pub fn kind(&self) -> DeclKind {
        match self {
            Decl::Function(_) => DeclKind::Function,
            Decl::Variable(_) => DeclKind::Variable,
            Decl::Struct(_) => DeclKind::Struct,
        }
    }

    pub fn span(&self) -> TokenSpan {
        match self {
            Decl::Function(d) => d.span,
            Decl::Variable(d) => d.span,
            Decl::Struct(d) => d.span,
        }
    }

    pub fn location(&self) -> SourceLocation {
        match self {
            Decl::Function(d) => d.location,
            Decl::Variable(d) => d.location,
            Decl::Struct(d) => d.location,
        }
    }
}

/// `type name '(' params ')' body`
#[derive(Debug, Clone)]
pub struct FunctionDecl {
    pub name: String,
    pub return_type: String,
    pub params: Vec<VariableDecl>,
    pub body: CompoundStmt,
    pub span: TokenSpan,
    pub location: SourceLocation,
}

/// `type name ('=' init)?`, also used for parameters and struct members.
#[derive(Debug, Clone)]
pub struct VariableDecl {
    pub name: String,
    pub type_name: String,
    pub init: Option<Expr>,
    pub span: TokenSpan,
    pub location: SourceLocation,
}

/// `struct name '{' members '}' ';'`
#[derive(Debug, Clone)]
pub struct StructDecl {
    pub name: String,
    pub members: Vec<VariableDecl>,
    pub span: TokenSpan,
    pub location: SourceLocation,
}

// ===== Statements =====

/// Tags for the statement family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StmtKind {
    Compound,
    Expression,
    If,
    While,
    For,
    DoWhile,
    Return,
    Break,
    Continue,
    Decl,
    Null,
}

/// One statement.
#[derive(Debug, Clone)]
pub enum Stmt {
    Compound(CompoundStmt),
    Expression(ExpressionStmt),
    If(IfStmt),
    While(WhileStmt),
    For(ForStmt),
    DoWhile(DoWhileStmt),
    Return(ReturnStmt),
    Break(BreakStmt),
    Continue(ContinueStmt),
    Decl(DeclStmt),
    Null(NullStmt),
}

impl Stmt {
    pub fn kind(&self) -> StmtKind {
        match self {
            Stmt::Compound(_) => StmtKind::Compound,
            Stmt::Expression(_) => StmtKind::Expression,
            Stmt::If(_) => StmtKind::If,
            Stmt::While(_) => StmtKind::While,
            Stmt::For(_) => StmtKind::For,
            Stmt::DoWhile(_) => StmtKind::DoWhile,
            Stmt::Return(_) => StmtKind::Return,
            Stmt::Break(_) => StmtKind::Break,
            Stmt::Continue(_) => StmtKind::Continue,
            Stmt::Decl(_) => StmtKind::Decl,
            Stmt::Null(_) => StmtKind::Null,
        }
    }

    pub fn span(&self) -> TokenSpan {
        match self {
            Stmt::Compound(s) => s.span,
            Stmt::Expression(s) => s.span,
            Stmt::If(s) => s.span,
            Stmt::While(s) => s.span,
            Stmt::For(s) => s.span,
            Stmt::DoWhile(s) => s.span,
            Stmt::Return(s) => s.span,
            Stmt::Break(s) => s.span,
            Stmt::Continue(s) => s.span,
            Stmt::Decl(s) => s.span,
            Stmt::Null(s) => s.span,
        }
    }

    pub fn location(&self) -> SourceLocation {
        match self {
            Stmt::Compound(s) => s.location,
            Stmt::Expression(s) => s.location,
            Stmt::If(s) => s.location,
            Stmt::While(s) => s.location,
            Stmt::For(s) => s.location,
            Stmt::DoWhile(s) => s.location,
            Stmt::Return(s) => s.location,
            Stmt::Break(s) => s.location,
            Stmt::Continue(s) => s.location,
            Stmt::Decl(s) => s.location,
            Stmt::Null(s) => s.location,
        }
    }
}

/// `'{' statement* '}'`
#[derive(Debug, Clone)]
pub struct CompoundStmt {
    pub statements: Vec<Stmt>,
    pub span: TokenSpan,
    pub location: SourceLocation,
}

/// `expression ';'`
#[derive(Debug, Clone)]
pub struct ExpressionStmt {
    pub expression: Expr,
    pub span: TokenSpan,
    pub location: SourceLocation,
}

/// `if '(' condition ')' then (else stmt)?`
#[derive(Debug, Clone)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_branch: Box<Stmt>,
    pub else_branch: Option<Box<Stmt>>,
    pub span: TokenSpan,
    pub location: SourceLocation,
}

/// `while '(' condition ')' body`
#[derive(Debug, Clone)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: Box<Stmt>,
    pub span: TokenSpan,
    pub location: SourceLocation,
}

/// `for '(' init? ';' condition? ';' increment? ')' body`
///
/// `init` is a declaration or expression statement when present.
#[derive(Debug, Clone)]
pub struct ForStmt {
    pub init: Option<Box<Stmt>>,
    pub condition: Option<Expr>,
    pub increment: Option<Expr>,
    pub body: Box<Stmt>,
    pub span: TokenSpan,
    pub location: SourceLocation,
}

/// `do body while '(' condition ')' ';'`
#[derive(Debug, Clone)]
pub struct DoWhileStmt {
    pub body: Box<Stmt>,
    pub condition: Expr,
    pub span: TokenSpan,
    pub location: SourceLocation,
}

/// `return expression? ';'`
#[derive(Debug, Clone)]
pub struct ReturnStmt {
    pub value: Option<Expr>,
    pub span: TokenSpan,
    pub location: SourceLocation,
}

/// `break ';'`
#[derive(Debug, Clone)]
pub struct BreakStmt {
    pub span: TokenSpan,
    pub location: SourceLocation,
}

/// `continue ';'`
#[derive(Debug, Clone)]
pub struct ContinueStmt {
    pub span: TokenSpan,
    pub location: SourceLocation,
}

/// A declaration in statement position.
#[derive(Debug, Clone)]
pub struct DeclStmt {
    pub declaration: Decl,
    pub span: TokenSpan,
    pub location: SourceLocation,
}

/// A bare `';'`.
#[derive(Debug, Clone)]
pub struct NullStmt {
    pub span: TokenSpan,
    pub location: SourceLocation,
}

// ===== Expressions =====

/// Tags for the expression family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExprKind {
    Assignment,
    Binary,
    Unary,
    Conditional,
    ArraySubscript,
    MemberAccess,
    Call,
    Comma,
    Cast,
    Identifier,
    IntLiteral,
    StringLiteral,
    CharLiteral,
    BoolLiteral,
    FloatLiteral,
}

/// One expression.
#[derive(Debug, Clone)]
pub enum Expr {
    Assignment(AssignmentExpr),
    Binary(BinaryExpr),
    Unary(UnaryExpr),
    Conditional(ConditionalExpr),
    ArraySubscript(ArraySubscriptExpr),
    MemberAccess(MemberAccessExpr),
    Call(CallExpr),
    Comma(CommaExpr),
    Cast(CastExpr),
    Identifier(IdentifierExpr),
    IntLiteral(IntLiteralExpr),
    StringLiteral(StringLiteralExpr),
    CharLiteral(CharLiteralExpr),
    BoolLiteral(BoolLiteralExpr),
    FloatLiteral(FloatLiteralExpr),
}

impl Expr {
    pub fn kind(&self) -> ExprKind {
        match self {
            Expr::Assignment(_) => ExprKind::Assignment,
            Expr::Binary(_) => ExprKind::Binary,
            Expr::Unary(_) => ExprKind::Unary,
            Expr::Conditional(_) => ExprKind::Conditional,
            Expr::ArraySubscript(_) => ExprKind::ArraySubscript,
            Expr::MemberAccess(_) => ExprKind::MemberAccess,
            Expr::Call(_) => ExprKind::Call,
            Expr::Comma(_) => ExprKind::Comma,
            Expr::Cast(_) => ExprKind::Cast,
            Expr::Identifier(_) => ExprKind::Identifier,
            Expr::IntLiteral(_) => ExprKind::IntLiteral,
            Expr::StringLiteral(_) => ExprKind::StringLiteral,
            Expr::CharLiteral(_) => ExprKind::CharLiteral,
            Expr::BoolLiteral(_) => ExprKind::BoolLiteral,
            Expr::FloatLiteral(_) => ExprKind::FloatLiteral,
        }
    }

    pub fn span(&self) -> TokenSpan {
        match self {
            Expr::Assignment(e) => e.span,
            Expr::Binary(e) => e.span,
            Expr::Unary(e) => e.span,
            Expr::Conditional(e) => e.span,
            Expr::ArraySubscript(e) => e.span,
            Expr::MemberAccess(e) => e.span,
            Expr::Call(e) => e.span,
            Expr::Comma(e) => e.span,
            Expr::Cast(e) => e.span,
            Expr::Identifier(e) => e.span,
            Expr::IntLiteral(e) => e.span,
            Expr::StringLiteral(e) => e.span,
            Expr::CharLiteral(e) => e.span,
            Expr::BoolLiteral(e) => e.span,
            Expr::FloatLiteral(e) => e.span,
        }
    }

    pub fn location(&self) -> SourceLocation {
        match self {
            Expr::Assignment(e) => e.location,
            Expr::Binary(e) => e.location,
            Expr::Unary(e) => e.location,
            Expr::Conditional(e) => e.location,
            Expr::ArraySubscript(e) => e.location,
            Expr::MemberAccess(e) => e.location,
            Expr::Call(e) => e.location,
            Expr::Comma(e) => e.location,
            Expr::Cast(e) => e.location,
            Expr::Identifier(e) => e.location,
            Expr::IntLiteral(e) => e.location,
            Expr::StringLiteral(e) => e.location,
            Expr::CharLiteral(e) => e.location,
            Expr::BoolLiteral(e) => e.location,
            Expr::FloatLiteral(e) => e.location,
        }
    }
}

/// `left op right` where `op` is `=` or a compound assignment.
/// Right-associative.
#[derive(Debug, Clone)]
pub struct AssignmentExpr {
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub op: TokenKind,
    pub span: TokenSpan,
    pub location: SourceLocation,
}

/// `left op right` for the infix operator table.
#[derive(Debug, Clone)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub op: TokenKind,
    pub span: TokenSpan,
    pub location: SourceLocation,
}

/// `op operand`; `prefix` records which side the operator was written on.
#[derive(Debug, Clone)]
pub struct UnaryExpr {
    pub operand: Box<Expr>,
    pub op: TokenKind,
    pub prefix: bool,
    pub span: TokenSpan,
    pub location: SourceLocation,
}

/// `condition ? then_value : else_value`
#[derive(Debug, Clone)]
pub struct ConditionalExpr {
    pub condition: Box<Expr>,
    pub then_value: Box<Expr>,
    pub else_value: Box<Expr>,
    pub span: TokenSpan,
    pub location: SourceLocation,
}

/// `base '[' index ']'`
#[derive(Debug, Clone)]
pub struct ArraySubscriptExpr {
    pub base: Box<Expr>,
    pub index: Box<Expr>,
    pub span: TokenSpan,
    pub location: SourceLocation,
}

/// `base '.' member` (`arrow` marks `->` access).
#[derive(Debug, Clone)]
pub struct MemberAccessExpr {
    pub base: Box<Expr>,
    pub member: String,
    pub arrow: bool,
    pub span: TokenSpan,
    pub location: SourceLocation,
}

/// `callee '(' arguments ')'`
#[derive(Debug, Clone)]
pub struct CallExpr {
    pub callee: Box<Expr>,
    pub arguments: Vec<Expr>,
    pub span: TokenSpan,
    pub location: SourceLocation,
}

/// `expr (',' expr)+` in expression position.
#[derive(Debug, Clone)]
pub struct CommaExpr {
    pub operands: Vec<Expr>,
    pub span: TokenSpan,
    pub location: SourceLocation,
}

/// `'(' type ')' operand`
#[derive(Debug, Clone)]
pub struct CastExpr {
    pub type_name: String,
    pub operand: Box<Expr>,
    pub span: TokenSpan,
    pub location: SourceLocation,
}

/// A name in expression position.
#[derive(Debug, Clone)]
pub struct IdentifierExpr {
    pub name: String,
    pub span: TokenSpan,
    pub location: SourceLocation,
}

#[derive(Debug, Clone)]
pub struct IntLiteralExpr {
    pub value: i32,
    pub span: TokenSpan,
    pub location: SourceLocation,
}

#[derive(Debug, Clone)]
pub struct StringLiteralExpr {
    pub value: String,
    pub span: TokenSpan,
    pub location: SourceLocation,
}

#[derive(Debug, Clone)]
pub struct CharLiteralExpr {
    pub value: char,
    pub span: TokenSpan,
    pub location: SourceLocation,
}

#[derive(Debug, Clone)]
pub struct BoolLiteralExpr {
    pub value: bool,
    pub span: TokenSpan,
    pub location: SourceLocation,
}

#[derive(Debug, Clone)]
pub struct FloatLiteralExpr {
    pub value: f64,
    pub span: TokenSpan,
    pub location: SourceLocation,
}

// ===== Units =====

/// Tags for the unit family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    Translation,
}

/// The parse root family.
#[derive(Debug, Clone)]
pub enum Unit {
    Translation(TranslationUnit),
}

impl Unit {
    pub fn kind(&self) -> UnitKind {
        match self {
            Unit::Translation(_) => UnitKind::Translation,
        }
    }

    pub fn span(&self) -> TokenSpan {
        match self {
            Unit::Translation(u) => u.span,
        }
    }

    pub fn location(&self) -> SourceLocation {
        match self {
            Unit::Translation(u) => u.location,
        }
    }
}

/// The ordered top-level declarations of one source file.
#[derive(Debug, Clone)]
pub struct TranslationUnit {
    pub declarations: Vec<Decl>,
    pub span: TokenSpan,
    pub location: SourceLocation,
}

// ===== Narrowing =====

/// A closed node family with a per-variant tag.
pub trait NodeFamily {
    type Kind: fmt::Debug + Copy + PartialEq;

    /// Family name used in contract-violation reports.
    const FAMILY_NAME: &'static str;

    /// The tag of the active variant.
    fn family_kind(&self) -> Self::Kind;
}

impl NodeFamily for Decl {
    type Kind = DeclKind;
    const FAMILY_NAME: &'static str = "declaration";
    fn family_kind(&self) -> DeclKind {
        self.kind()
    }
}

impl NodeFamily for Stmt {
    type Kind = StmtKind;
    const FAMILY_NAME: &'static str = "statement";
    fn family_kind(&self) -> StmtKind {
        self.kind()
    }
}

impl NodeFamily for Expr {
    type Kind = ExprKind;
    const FAMILY_NAME: &'static str = "expression";
    fn family_kind(&self) -> ExprKind {
        self.kind()
    }
}

impl NodeFamily for Unit {
    type Kind = UnitKind;
    const FAMILY_NAME: &'static str = "unit";
    fn family_kind(&self) -> UnitKind {
        self.kind()
    }
}

/// Implemented by every concrete node variant: ties the variant to its
/// family and to the single tag it occupies there. No two variants of one
/// family share a tag; the narrowing helpers depend on that 1:1 mapping.
pub trait NodeVariant: Sized {
    type Family: NodeFamily;

    /// The tag this variant registers in its family.
    const KIND: <Self::Family as NodeFamily>::Kind;

    fn from_family(node: &Self::Family) -> Option<&Self>;
    fn into_variant(node: Self::Family) -> Result<Self, Self::Family>;
}

/// True if `node` currently holds the variant `T`.
pub fn isa<T: NodeVariant>(node: &T::Family) -> bool {
    node.family_kind() == T::KIND
}

/// Borrow `node` as the variant `T`, or `None` when the tag differs.
pub fn try_narrow<T: NodeVariant>(node: &T::Family) -> Option<&T> {
    T::from_family(node)
}

/// Asserting form of [`try_narrow`]. Calling this with a mismatched tag is
/// a contract violation; the panic names both kinds so the failure is
/// reportable in every build profile.
pub fn narrow<T: NodeVariant>(node: &T::Family) -> &T {
    match T::from_family(node) {
        Some(variant) => variant,
        None => panic!(
            "narrow: {} node is {:?}, expected {:?}",
            <T::Family as NodeFamily>::FAMILY_NAME,
            node.family_kind(),
            T::KIND
        ),
    }
}

/// Take ownership of the variant `T`, handing the node back unchanged when
/// the tag differs.
pub fn try_narrow_into<T: NodeVariant>(node: T::Family) -> Result<T, T::Family> {
    T::into_variant(node)
}

impl NodeVariant for FunctionDecl {
    type Family = Decl;
    const KIND: DeclKind = DeclKind::Function;

    fn from_family(node: &Decl) -> Option<&Self> {
        match node {
            Decl::Function(d) => Some(d),
            _ => None,
        }
    }

    fn into_variant(node: Decl) -> Result<Self, Decl> {
        match node {
            Decl::Function(d) => Ok(d),
            other => Err(other),
        }
    }
}

impl NodeVariant for VariableDecl {
    type Family = Decl;
    const KIND: DeclKind = DeclKind::Variable;

    fn from_family(node: &Decl) -> Option<&Self> {
        match node {
            Decl::Variable(d) => Some(d),
            _ => None,
        }
    }

    fn into_variant(node: Decl) -> Result<Self, Decl> {
        match node {
            Decl::Variable(d) => Ok(d),
            other => Err(other),
        }
    }
}

impl NodeVariant for StructDecl {
    type Family = Decl;
    const KIND: DeclKind = DeclKind::Struct;

    fn from_family(node: &Decl) -> Option<&Self> {
        match node {
            Decl::Struct(d) => Some(d),
            _ => None,
        }
    }

    fn into_variant(node: Decl) -> Result<Self, Decl> {
        match node {
            Decl::Struct(d) => Ok(d),
            other => Err(other),
        }
    }
}

impl NodeVariant for CompoundStmt {
    type Family = Stmt;
    const KIND: StmtKind = StmtKind::Compound;

    fn from_family(node: &Stmt) -> Option<&Self> {
        match node {
            Stmt::Compound(s) => Some(s),
            _ => None,
        }
    }

    fn into_variant(node: Stmt) -> Result<Self, Stmt> {
        match node {
            Stmt::Compound(s) => Ok(s),
            other => Err(other),
        }
    }
}

impl NodeVariant for ExpressionStmt {
    type Family = Stmt;
    const KIND: StmtKind = StmtKind::Expression;

    fn from_family(node: &Stmt) -> Option<&Self> {
        match node {
            Stmt::Expression(s) => Some(s),
            _ => None,
        }
    }

    fn into_variant(node: Stmt) -> Result<Self, Stmt> {
        match node {
            Stmt::Expression(s) => Ok(s),
            other => Err(other),
        }
    }
}

impl NodeVariant for IfStmt {
    type Family = Stmt;
    const KIND: StmtKind = StmtKind::If;

    fn from_family(node: &Stmt) -> Option<&Self> {
        match node {
            Stmt::If(s) => Some(s),
            _ => None,
        }
    }

    fn into_variant(node: Stmt) -> Result<Self, Stmt> {
        match node {
            Stmt::If(s) => Ok(s),
            other => Err(other),
        }
    }
}

impl NodeVariant for WhileStmt {
    type Family = Stmt;
    const KIND: StmtKind = StmtKind::While;

    fn from_family(node: &Stmt) -> Option<&Self> {
        match node {
            Stmt::While(s) => Some(s),
            _ => None,
        }
    }

    fn into_variant(node: Stmt) -> Result<Self, Stmt> {
        match node {
            Stmt::While(s) => Ok(s),
            other => Err(other),
        }
    }
}

impl NodeVariant for ForStmt {
    type Family = Stmt;
    const KIND: StmtKind = StmtKind::For;

    fn from_family(node: &Stmt) -> Option<&Self> {
        match node {
            Stmt::For(s) => Some(s),
            _ => None,
        }
    }

    fn into_variant(node: Stmt) -> Result<Self, Stmt> {
        match node {
            Stmt::For(s) => Ok(s),
            other => Err(other),
        }
    }
}

impl NodeVariant for DoWhileStmt {
    type Family = Stmt;
    const KIND: StmtKind = StmtKind::DoWhile;

    fn from_family(node: &Stmt) -> Option<&Self> {
        match node {
            Stmt::DoWhile(s) => Some(s),
            _ => None,
        }
    }

    fn into_variant(node: Stmt) -> Result<Self, Stmt> {
        match node {
            Stmt::DoWhile(s) => Ok(s),
            other => Err(other),
        }
    }
}

impl NodeVariant for ReturnStmt {
    type Family = Stmt;
    const KIND: StmtKind = StmtKind::Return;

    fn from_family(node: &Stmt) -> Option<&Self> {
        match node {
            Stmt::Return(s) => Some(s),
            _ => None,
        }
    }

    fn into_variant(node: Stmt) -> Result<Self, Stmt> {
        match node {
            Stmt::Return(s) => Ok(s),
            other => Err(other),
        }
    }
}

impl NodeVariant for BreakStmt {
    type Family = Stmt;
    const KIND: StmtKind = StmtKind::Break;

    fn from_family(node: &Stmt) -> Option<&Self> {
        match node {
            Stmt::Break(s) => Some(s),
            _ => None,
        }
    }

    fn into_variant(node: Stmt) -> Result<Self, Stmt> {
        match node {
            Stmt::Break(s) => Ok(s),
            other => Err(other),
        }
    }
}

impl NodeVariant for ContinueStmt {
    type Family = Stmt;
    const KIND: StmtKind = StmtKind::Continue;

    fn from_family(node: &Stmt) -> Option<&Self> {
        match node {
            Stmt::Continue(s) => Some(s),
            _ => None,
        }
    }

    fn into_variant(node: Stmt) -> Result<Self, Stmt> {
        match node {
            Stmt::Continue(s) => Ok(s),
            other => Err(other),
        }
    }
}

impl NodeVariant for DeclStmt {
    type Family = Stmt;
    const KIND: StmtKind = StmtKind::Decl;

    fn from_family(node: &Stmt) -> Option<&Self> {
        match node {
            Stmt::Decl(s) => Some(s),
            _ => None,
        }
    }

    fn into_variant(node: Stmt) -> Result<Self, Stmt> {
        match node {
            Stmt::Decl(s) => Ok(s),
            other => Err(other),
        }
    }
}

impl NodeVariant for NullStmt {
    type Family = Stmt;
    const KIND: StmtKind = StmtKind::Null;

    fn from_family(node: &Stmt) -> Option<&Self> {
        match node {
            Stmt::Null(s) => Some(s),
            _ => None,
        }
    }

    fn into_variant(node: Stmt) -> Result<Self, Stmt> {
        match node {
            Stmt::Null(s) => Ok(s),
            other => Err(other),
        }
    }
}

impl NodeVariant for AssignmentExpr {
    type Family = Expr;
    const KIND: ExprKind = ExprKind::Assignment;

    fn from_family(node: &Expr) -> Option<&Self> {
        match node {
            Expr::Assignment(e) => Some(e),
            _ => None,
        }
    }

    fn into_variant(node: Expr) -> Result<Self, Expr> {
        match node {
            Expr::Assignment(e) => Ok(e),
            other => Err(other),
        }
    }
}

impl NodeVariant for BinaryExpr {
    type Family = Expr;
    const KIND: ExprKind = ExprKind::Binary;

    fn from_family(node: &Expr) -> Option<&Self> {
        match node {
            Expr::Binary(e) => Some(e),
            _ => None,
        }
    }

    fn into_variant(node: Expr) -> Result<Self, Expr> {
        match node {
            Expr::Binary(e) => Ok(e),
            other => Err(other),
        }
    }
}

impl NodeVariant for UnaryExpr {
    type Family = Expr;
    const KIND: ExprKind = ExprKind::Unary;

    fn from_family(node: &Expr) -> Option<&Self> {
        match node {
            Expr::Unary(e) => Some(e),
            _ => None,
        }
    }

    fn into_variant(node: Expr) -> Result<Self, Expr> {
        match node {
            Expr::Unary(e) => Ok(e),
            other => Err(other),
        }
    }
}

impl NodeVariant for ConditionalExpr {
    type Family = Expr;
    const KIND: ExprKind = ExprKind::Conditional;

    fn from_family(node: &Expr) -> Option<&Self> {
        match node {
            Expr::Conditional(e) => Some(e),
            _ => None,
        }
    }

    fn into_variant(node: Expr) -> Result<Self, Expr> {
        match node {
            Expr::Conditional(e) => Ok(e),
            other => Err(other),
        }
    }
}

impl NodeVariant for ArraySubscriptExpr {
    type Family = Expr;
    const KIND: ExprKind = ExprKind::ArraySubscript;

    fn from_family(node: &Expr) -> Option<&Self> {
        match node {
            Expr::ArraySubscript(e) => Some(e),
            _ => None,
        }
    }

    fn into_variant(node: Expr) -> Result<Self, Expr> {
        match node {
            Expr::ArraySubscript(e) => Ok(e),
            other => Err(other),
        }
    }
}

impl NodeVariant for MemberAccessExpr {
    type Family = Expr;
    const KIND: ExprKind = ExprKind::MemberAccess;

    fn from_family(node: &Expr) -> Option<&Self> {
        match node {
            Expr::MemberAccess(e) => Some(e),
            _ => None,
        }
    }

    fn into_variant(node: Expr) -> Result<Self, Expr> {
        match node {
            Expr::MemberAccess(e) => Ok(e),
            other => Err(other),
        }
    }
}

impl NodeVariant for CallExpr {
    type Family = Expr;
    const KIND: ExprKind = ExprKind::Call;

    fn from_family(node: &Expr) -> Option<&Self> {
        match node {
            Expr::Call(e) => Some(e),
            _ => None,
        }
    }

    fn into_variant(node: Expr) -> Result<Self, Expr> {
        match node {
            Expr::Call(e) => Ok(e),
            other => Err(other),
        }
    }
}

impl NodeVariant for CommaExpr {
    type Family = Expr;
    const KIND: ExprKind = ExprKind::Comma;

    fn from_family(node: &Expr) -> Option<&Self> {
        match node {
            Expr::Comma(e) => Some(e),
            _ => None,
        }
    }

    fn into_variant(node: Expr) -> Result<Self, Expr> {
        match node {
            Expr::Comma(e) => Ok(e),
            other => Err(other),
        }
    }
}

impl NodeVariant for CastExpr {
    type Family = Expr;
    const KIND: ExprKind = ExprKind::Cast;

    fn from_family(node: &Expr) -> Option<&Self> {
        match node {
            Expr::Cast(e) => Some(e),
            _ => None,
        }
    }

    fn into_variant(node: Expr) -> Result<Self, Expr> {
        match node {
            Expr::Cast(e) => Ok(e),
            other => Err(other),
        }
    }
}

impl NodeVariant for IdentifierExpr {
    type Family = Expr;
    const KIND: ExprKind = ExprKind::Identifier;

    fn from_family(node: &Expr) -> Option<&Self> {
        match node {
            Expr::Identifier(e) => Some(e),
            _ => None,
        }
    }

    fn into_variant(node: Expr) -> Result<Self, Expr> {
        match node {
            Expr::Identifier(e) => Ok(e),
            other => Err(other),
        }
    }
}

impl NodeVariant for IntLiteralExpr {
    type Family = Expr;
    const KIND: ExprKind = ExprKind::IntLiteral;

    fn from_family(node: &Expr) -> Option<&Self> {
        match node {
            Expr::IntLiteral(e) => Some(e),
            _ => None,
        }
    }

    fn into_variant(node: Expr) -> Result<Self, Expr> {
        match node {
            Expr::IntLiteral(e) => Ok(e),
            other => Err(other),
        }
    }
}

impl NodeVariant for StringLiteralExpr {
    type Family = Expr;
    const KIND: ExprKind = ExprKind::StringLiteral;

    fn from_family(node: &Expr) -> Option<&Self> {
        match node {
            Expr::StringLiteral(e) => Some(e),
            _ => None,
        }
    }

    fn into_variant(node: Expr) -> Result<Self, Expr> {
        match node {
            Expr::StringLiteral(e) => Ok(e),
            other => Err(other),
        }
    }
}

impl NodeVariant for CharLiteralExpr {
    type Family = Expr;
    const KIND: ExprKind = ExprKind::CharLiteral;

    fn from_family(node: &Expr) -> Option<&Self> {
        match node {
            Expr::CharLiteral(e) => Some(e),
            _ => None,
        }
    }

    fn into_variant(node: Expr) -> Result<Self, Expr> {
        match node {
            Expr::CharLiteral(e) => Ok(e),
            other => Err(other),
        }
    }
}

impl NodeVariant for BoolLiteralExpr {
    type Family = Expr;
    const KIND: ExprKind = ExprKind::BoolLiteral;

    fn from_family(node: &Expr) -> Option<&Self> {
        match node {
            Expr::BoolLiteral(e) => Some(e),
            _ => None,
        }
    }

    fn into_variant(node: Expr) -> Result<Self, Expr> {
        match node {
            Expr::BoolLiteral(e) => Ok(e),
            other => Err(other),
        }
    }
}

impl NodeVariant for FloatLiteralExpr {
    type Family = Expr;
    const KIND: ExprKind = ExprKind::FloatLiteral;

    fn from_family(node: &Expr) -> Option<&Self> {
        match node {
            Expr::FloatLiteral(e) => Some(e),
            _ => None,
        }
    }

    fn into_variant(node: Expr) -> Result<Self, Expr> {
        match node {
            Expr::FloatLiteral(e) => Ok(e),
            other => Err(other),
        }
    }
}

impl NodeVariant for TranslationUnit {
    type Family = Unit;
    const KIND: UnitKind = UnitKind::Translation;

    fn from_family(node: &Unit) -> Option<&Self> {
        match node {
            Unit::Translation(u) => Some(u),
        }
    }

    fn into_variant(node: Unit) -> Result<Self, Unit> {
        match node {
            Unit::Translation(u) => Ok(u),
        }
    }
}
