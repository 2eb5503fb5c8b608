// Parser integration tests

use c0front::diagnostics::DiagnosticKind;
use c0front::parser::ast::{
    isa, narrow, try_narrow, AssignmentExpr, BinaryExpr, BoolLiteralExpr, CallExpr, CastExpr,
    CharLiteralExpr, CompoundStmt, DeclStmt, DoWhileStmt, Expr, ExpressionStmt, ForStmt,
    FunctionDecl, IdentifierExpr, IfStmt, IntLiteralExpr, MemberAccessExpr, NullStmt, ReturnStmt,
    Stmt, StringLiteralExpr, StructDecl, TranslationUnit, UnaryExpr, VariableDecl, WhileStmt,
};
use c0front::parser::lexer::TokenKind;
use c0front::Parser;
use pretty_assertions::assert_eq;

fn parse_clean(source: &str) -> TranslationUnit {
    let outcome = Parser::from_source(source).parse();
    assert!(
        outcome.is_clean(),
        "unexpected diagnostics: {:?}",
        outcome.diagnostics
    );
    outcome.unit
}

/// Parse a single statement inside a wrapper function body.
fn only_statement(body: &str) -> Stmt {
    let source = format!("void f() {{ {} }}", body);
    let unit = parse_clean(&source);
    let func = narrow::<FunctionDecl>(&unit.declarations[0]);
    assert_eq!(func.body.statements.len(), 1, "body: {}", body);
    func.body.statements[0].clone()
}

/// Parse a single expression statement and return its expression.
fn only_expression(body: &str) -> Expr {
    let stmt = only_statement(body);
    narrow::<ExpressionStmt>(&stmt).expression.clone()
}

fn identifier_name(expr: &Expr) -> &str {
    &narrow::<IdentifierExpr>(expr).name
}

// ===== Declarations =====

#[test]
fn test_function_declaration_with_params() {
    let unit = parse_clean("int f(int a, int b) { return a + b; }");
    assert_eq!(unit.declarations.len(), 1);

    let func = narrow::<FunctionDecl>(&unit.declarations[0]);
    assert_eq!(func.name, "f");
    assert_eq!(func.return_type, "int");
    assert_eq!(func.params.len(), 2);
    assert_eq!(func.params[0].name, "a");
    assert_eq!(func.params[0].type_name, "int");
    assert_eq!(func.params[1].name, "b");

    assert_eq!(func.body.statements.len(), 1);
    let ret = narrow::<ReturnStmt>(&func.body.statements[0]);
    let value = ret.value.as_ref().expect("return value");
    let sum = narrow::<BinaryExpr>(value);
    assert_eq!(sum.op, TokenKind::Plus);
}

#[test]
fn test_function_with_empty_parameter_list() {
    let unit = parse_clean("void noop() { }");
    let func = narrow::<FunctionDecl>(&unit.declarations[0]);
    assert!(func.params.is_empty());
    assert!(func.body.statements.is_empty());
}

#[test]
fn test_top_level_variable_with_initializer() {
    let unit = parse_clean("int x = 5;");
    let var = narrow::<VariableDecl>(&unit.declarations[0]);
    assert_eq!(var.name, "x");
    assert_eq!(var.type_name, "int");
    let init = var.init.as_ref().expect("initializer");
    assert_eq!(narrow::<IntLiteralExpr>(init).value, 5);
}

#[test]
fn test_top_level_variable_without_initializer() {
    let unit = parse_clean("bool done;");
    let var = narrow::<VariableDecl>(&unit.declarations[0]);
    assert_eq!(var.name, "done");
    assert!(var.init.is_none());
}

#[test]
fn test_struct_declaration() {
    let unit = parse_clean("struct Point { int x; int y; };");
    let decl = narrow::<StructDecl>(&unit.declarations[0]);
    assert_eq!(decl.name, "Point");
    assert_eq!(decl.members.len(), 2);
    assert_eq!(decl.members[0].name, "x");
    assert_eq!(decl.members[1].name, "y");
}

#[test]
fn test_mixed_top_level_declarations() {
    let unit = parse_clean(
        "struct Config { int max; };\n\
         int limit = 10;\n\
         int get_limit() { return limit; }\n",
    );
    assert_eq!(unit.declarations.len(), 3);
    assert!(isa::<StructDecl>(&unit.declarations[0]));
    assert!(isa::<VariableDecl>(&unit.declarations[1]));
    assert!(isa::<FunctionDecl>(&unit.declarations[2]));
}

// ===== Expression precedence and associativity =====

#[test]
fn test_multiplication_binds_tighter_than_addition_under_assignment() {
    // a = b + c * d  =>  a = (b + (c * d))
    let expr = only_expression("a = b + c * d;");
    let assign = narrow::<AssignmentExpr>(&expr);
    assert_eq!(assign.op, TokenKind::Assign);
    assert_eq!(identifier_name(&assign.left), "a");

    let sum = narrow::<BinaryExpr>(&assign.right);
    assert_eq!(sum.op, TokenKind::Plus);
    assert_eq!(identifier_name(&sum.left), "b");

    let product = narrow::<BinaryExpr>(&sum.right);
    assert_eq!(product.op, TokenKind::Star);
    assert_eq!(identifier_name(&product.left), "c");
    assert_eq!(identifier_name(&product.right), "d");
}

#[test]
fn test_assignment_is_right_associative() {
    // a = b = c  =>  a = (b = c), never (a = b) = c
    let expr = only_expression("a = b = c;");
    let outer = narrow::<AssignmentExpr>(&expr);
    assert_eq!(identifier_name(&outer.left), "a");
    let inner = narrow::<AssignmentExpr>(&outer.right);
    assert_eq!(identifier_name(&inner.left), "b");
    assert_eq!(identifier_name(&inner.right), "c");
}

#[test]
fn test_compound_assignment_builds_assignment_node() {
    let expr = only_expression("a += 1;");
    let assign = narrow::<AssignmentExpr>(&expr);
    assert_eq!(assign.op, TokenKind::PlusEq);
    assert_eq!(narrow::<IntLiteralExpr>(&assign.right).value, 1);
}

#[test]
fn test_compound_assignment_is_right_associative() {
    let expr = only_expression("a -= b -= c;");
    let outer = narrow::<AssignmentExpr>(&expr);
    assert_eq!(outer.op, TokenKind::MinusEq);
    let inner = narrow::<AssignmentExpr>(&outer.right);
    assert_eq!(inner.op, TokenKind::MinusEq);
    assert_eq!(identifier_name(&inner.left), "b");
}

#[test]
fn test_relational_binds_tighter_than_logical() {
    // x < 1 && y > 2  =>  (x < 1) && (y > 2)
    let expr = only_expression("x < 1 && y > 2;");
    let and = narrow::<BinaryExpr>(&expr);
    assert_eq!(and.op, TokenKind::AndAnd);
    assert_eq!(narrow::<BinaryExpr>(&and.left).op, TokenKind::Lt);
    assert_eq!(narrow::<BinaryExpr>(&and.right).op, TokenKind::Gt);
}

#[test]
fn test_logical_or_binds_looser_than_logical_and() {
    // a || b && c  =>  a || (b && c)
    let expr = only_expression("a || b && c;");
    let or = narrow::<BinaryExpr>(&expr);
    assert_eq!(or.op, TokenKind::OrOr);
    assert_eq!(narrow::<BinaryExpr>(&or.right).op, TokenKind::AndAnd);
}

#[test]
fn test_parentheses_override_precedence() {
    // (b + c) * d
    let expr = only_expression("x = (b + c) * d;");
    let assign = narrow::<AssignmentExpr>(&expr);
    let product = narrow::<BinaryExpr>(&assign.right);
    assert_eq!(product.op, TokenKind::Star);
    assert_eq!(narrow::<BinaryExpr>(&product.left).op, TokenKind::Plus);
}

#[test]
fn test_equality_chain_is_left_associative() {
    // a == b == c  =>  (a == b) == c
    let expr = only_expression("a == b == c;");
    let outer = narrow::<BinaryExpr>(&expr);
    assert_eq!(outer.op, TokenKind::EqEq);
    assert_eq!(identifier_name(&outer.right), "c");
    let inner = narrow::<BinaryExpr>(&outer.left);
    assert_eq!(identifier_name(&inner.left), "a");
    assert_eq!(identifier_name(&inner.right), "b");
}

// ===== Prefix, postfix, and primary forms =====

#[test]
fn test_prefix_chains_nest() {
    let expr = only_expression("x = !!ok;");
    let assign = narrow::<AssignmentExpr>(&expr);
    let outer = narrow::<UnaryExpr>(&assign.right);
    assert_eq!(outer.op, TokenKind::Bang);
    assert!(outer.prefix);
    let inner = narrow::<UnaryExpr>(&outer.operand);
    assert_eq!(inner.op, TokenKind::Bang);
    assert_eq!(identifier_name(&inner.operand), "ok");
}

#[test]
fn test_double_negation() {
    let expr = only_expression("x = - -y;");
    let assign = narrow::<AssignmentExpr>(&expr);
    let outer = narrow::<UnaryExpr>(&assign.right);
    assert_eq!(outer.op, TokenKind::Minus);
    let inner = narrow::<UnaryExpr>(&outer.operand);
    assert_eq!(inner.op, TokenKind::Minus);
}

#[test]
fn test_unary_binds_tighter_than_binary() {
    // -a * b  =>  (-a) * b
    let expr = only_expression("x = -a * b;");
    let assign = narrow::<AssignmentExpr>(&expr);
    let product = narrow::<BinaryExpr>(&assign.right);
    assert_eq!(product.op, TokenKind::Star);
    assert!(isa::<UnaryExpr>(&product.left));
}

#[test]
fn test_call_with_arguments() {
    let expr = only_expression("g(1, x);");
    let call = narrow::<CallExpr>(&expr);
    assert_eq!(identifier_name(&call.callee), "g");
    assert_eq!(call.arguments.len(), 2);
    assert_eq!(narrow::<IntLiteralExpr>(&call.arguments[0]).value, 1);
    assert_eq!(identifier_name(&call.arguments[1]), "x");
}

#[test]
fn test_chained_calls_nest_with_inner_call_as_callee() {
    let expr = only_expression("f()();");
    let outer = narrow::<CallExpr>(&expr);
    assert!(outer.arguments.is_empty());
    let inner = narrow::<CallExpr>(&outer.callee);
    assert_eq!(identifier_name(&inner.callee), "f");
}

#[test]
fn test_member_access_chain() {
    let expr = only_expression("cfg.limits.max = 3;");
    let assign = narrow::<AssignmentExpr>(&expr);
    let outer = narrow::<MemberAccessExpr>(&assign.left);
    assert_eq!(outer.member, "max");
    assert!(!outer.arrow);
    let inner = narrow::<MemberAccessExpr>(&outer.base);
    assert_eq!(inner.member, "limits");
    assert_eq!(identifier_name(&inner.base), "cfg");
}

#[test]
fn test_cast_expression() {
    let expr = only_expression("x = (int) c;");
    let assign = narrow::<AssignmentExpr>(&expr);
    let cast = narrow::<CastExpr>(&assign.right);
    assert_eq!(cast.type_name, "int");
    assert_eq!(identifier_name(&cast.operand), "c");
}

#[test]
fn test_parenthesized_identifier_is_not_a_cast() {
    let expr = only_expression("y = (x);");
    let assign = narrow::<AssignmentExpr>(&expr);
    assert_eq!(identifier_name(&assign.right), "x");
}

#[test]
fn test_literal_primaries() {
    let expr = only_expression("s = \"hi\";");
    let assign = narrow::<AssignmentExpr>(&expr);
    let s = narrow::<StringLiteralExpr>(&assign.right);
    assert_eq!(s.value, "hi");

    let expr = only_expression("ok = true;");
    let assign = narrow::<AssignmentExpr>(&expr);
    assert!(narrow::<BoolLiteralExpr>(&assign.right).value);

    let expr = only_expression("c = 'q';");
    let assign = narrow::<AssignmentExpr>(&expr);
    let ch = narrow::<CharLiteralExpr>(&assign.right);
    assert_eq!(ch.value, 'q');
}

// ===== Statements =====

#[test]
fn test_if_else_round_trip() {
    let stmt = only_statement("if (a < b) { x = 1; } else { x = 2; }");
    let if_stmt = narrow::<IfStmt>(&stmt);

    let condition = narrow::<BinaryExpr>(&if_stmt.condition);
    assert_eq!(condition.op, TokenKind::Lt);

    let then_block = narrow::<CompoundStmt>(&if_stmt.then_branch);
    assert_eq!(then_block.statements.len(), 1);
    let then_expr = narrow::<ExpressionStmt>(&then_block.statements[0]);
    assert!(isa::<AssignmentExpr>(&then_expr.expression));

    let else_branch = if_stmt.else_branch.as_ref().expect("else branch");
    let else_block = narrow::<CompoundStmt>(else_branch);
    assert_eq!(else_block.statements.len(), 1);
    let else_expr = narrow::<ExpressionStmt>(&else_block.statements[0]);
    assert!(isa::<AssignmentExpr>(&else_expr.expression));
}

#[test]
fn test_if_without_else() {
    let stmt = only_statement("if (ok) x = 1;");
    let if_stmt = narrow::<IfStmt>(&stmt);
    assert!(if_stmt.else_branch.is_none());
    assert!(isa::<ExpressionStmt>(&if_stmt.then_branch));
}

#[test]
fn test_while_statement() {
    let stmt = only_statement("while (i < n) { i = i + 1; }");
    let while_stmt = narrow::<WhileStmt>(&stmt);
    assert_eq!(narrow::<BinaryExpr>(&while_stmt.condition).op, TokenKind::Lt);
    assert!(isa::<CompoundStmt>(&while_stmt.body));
}

#[test]
fn test_do_while_statement() {
    let stmt = only_statement("do { n = n - 1; } while (n > 0);");
    let do_stmt = narrow::<DoWhileStmt>(&stmt);
    assert!(isa::<CompoundStmt>(&do_stmt.body));
    assert_eq!(narrow::<BinaryExpr>(&do_stmt.condition).op, TokenKind::Gt);
}

#[test]
fn test_for_statement_with_declaration_init() {
    let stmt = only_statement("for (int i = 0; i < 10; i += 1) { sum = sum + i; }");
    let for_stmt = narrow::<ForStmt>(&stmt);

    let init = for_stmt.init.as_ref().expect("init clause");
    let decl_stmt = narrow::<DeclStmt>(init);
    let var = narrow::<VariableDecl>(&decl_stmt.declaration);
    assert_eq!(var.name, "i");

    let condition = for_stmt.condition.as_ref().expect("condition");
    assert_eq!(narrow::<BinaryExpr>(condition).op, TokenKind::Lt);

    let increment = for_stmt.increment.as_ref().expect("increment");
    assert_eq!(narrow::<AssignmentExpr>(increment).op, TokenKind::PlusEq);

    assert!(isa::<CompoundStmt>(&for_stmt.body));
}

#[test]
fn test_for_statement_with_expression_init() {
    let stmt = only_statement("for (i = 0; i < 3; i = i + 1) ;");
    let for_stmt = narrow::<ForStmt>(&stmt);
    let init = for_stmt.init.as_ref().expect("init clause");
    assert!(isa::<ExpressionStmt>(init));
    assert!(isa::<NullStmt>(&for_stmt.body));
}

#[test]
fn test_for_statement_with_empty_clauses() {
    let stmt = only_statement("for (;;) ;");
    let for_stmt = narrow::<ForStmt>(&stmt);
    assert!(for_stmt.init.is_none());
    assert!(for_stmt.condition.is_none());
    assert!(for_stmt.increment.is_none());
}

#[test]
fn test_break_continue_and_return() {
    let unit = parse_clean(
        "int f(int n) {\n\
            while (true) {\n\
                if (n > 3) { break; }\n\
                if (n < 0) { continue; }\n\
                n = n + 1;\n\
            }\n\
            return n;\n\
            return;\n\
         }",
    );
    let func = narrow::<FunctionDecl>(&unit.declarations[0]);
    assert_eq!(func.body.statements.len(), 3);

    let with_value = narrow::<ReturnStmt>(&func.body.statements[1]);
    assert!(with_value.value.is_some());
    let bare = narrow::<ReturnStmt>(&func.body.statements[2]);
    assert!(bare.value.is_none());
}

#[test]
fn test_null_statement() {
    let stmt = only_statement(";");
    assert!(isa::<NullStmt>(&stmt));
}

#[test]
fn test_declaration_statement() {
    let stmt = only_statement("int local = 2 * 3;");
    let decl_stmt = narrow::<DeclStmt>(&stmt);
    let var = narrow::<VariableDecl>(&decl_stmt.declaration);
    assert_eq!(var.name, "local");
    let init = var.init.as_ref().expect("initializer");
    assert_eq!(narrow::<BinaryExpr>(init).op, TokenKind::Star);
}

// ===== Spans and locations =====

#[test]
fn test_node_spans_are_half_open_token_ranges() {
    let unit = parse_clean("int x = 5;");
    let var = narrow::<VariableDecl>(&unit.declarations[0]);
    // tokens: int x = 5 ;
    assert_eq!(var.span.start, 0);
    assert_eq!(var.span.end, 5);
    assert_eq!(unit.span.start, 0);
    assert_eq!(unit.span.end, 5);
}

#[test]
fn test_node_locations_point_at_first_token() {
    let unit = parse_clean("int x = 5;\nint y = 6;");
    let second = narrow::<VariableDecl>(&unit.declarations[1]);
    assert_eq!(second.location.line, 2);
    assert_eq!(second.location.column, 1);
}

// ===== Diagnostics and recovery =====

#[test]
fn test_missing_semicolon_recovers_at_next_statement() {
    let outcome = Parser::from_source("void f() { x = 1 y = 2; z = 3; }").parse();
    assert_eq!(outcome.diagnostics.len(), 1);

    // the broken statement is dropped, the rest of the block survives
    let func = narrow::<FunctionDecl>(&outcome.unit.declarations[0]);
    assert_eq!(func.body.statements.len(), 1);
    let stmt = narrow::<ExpressionStmt>(&func.body.statements[0]);
    let assign = narrow::<AssignmentExpr>(&stmt.expression);
    assert_eq!(narrow::<IdentifierExpr>(&assign.left).name, "z");
}

#[test]
fn test_top_level_recovery_keeps_later_declarations() {
    let outcome = Parser::from_source("int x = ;\nint y = 2;").parse();
    assert!(!outcome.diagnostics.is_empty());
    assert_eq!(outcome.unit.declarations.len(), 1);
    let var = narrow::<VariableDecl>(&outcome.unit.declarations[0]);
    assert_eq!(var.name, "y");
}

#[test]
fn test_missing_close_paren_is_reported() {
    let outcome = Parser::from_source("void f() { if (a < b { x = 1; } }").parse();
    assert!(!outcome.diagnostics.is_empty());
}

#[test]
fn test_lexical_diagnostics_flow_through_parse() {
    let outcome = Parser::from_source("int x = 1;\nint y = @;\n").parse();
    assert!(outcome
        .diagnostics
        .iter()
        .any(|d| d.kind == DiagnosticKind::Lexical));
}

#[test]
fn test_try_narrow_on_wrong_variant_returns_none() {
    let stmt = only_statement(";");
    assert!(try_narrow::<ReturnStmt>(&stmt).is_none());
    assert!(try_narrow::<NullStmt>(&stmt).is_some());
}

// ===== Entry point =====

#[test]
fn test_parse_file_round_trip() {
    let path = std::env::temp_dir().join(format!("c0front_test_{}.c0", std::process::id()));
    std::fs::write(&path, "int main() { return 0; }").expect("write temp file");

    let outcome = c0front::parse_file(&path).expect("parse_file");
    assert!(outcome.is_clean());
    assert_eq!(outcome.unit.declarations.len(), 1);

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_parse_file_missing_is_io_error() {
    assert!(c0front::parse_file("/no/such/file.c0").is_err());
}
