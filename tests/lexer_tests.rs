// Lexer integration tests

use c0front::parser::lexer::{Lexer, Token, TokenKind};
use pretty_assertions::assert_eq;

fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::from_source(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.is_eof();
        tokens.push(token);
        if done {
            break;
        }
    }
    tokens
}

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).into_iter().map(|t| t.kind).collect()
}

fn lexemes(source: &str) -> Vec<String> {
    tokenize(source).into_iter().map(|t| t.lexeme).collect()
}

#[test]
fn test_whitespace_and_comments_lex_to_single_eof() {
    assert_eq!(kinds("  \t\r\n  "), vec![TokenKind::Eof]);
    assert_eq!(kinds("// just a comment"), vec![TokenKind::Eof]);
    assert_eq!(kinds("/* block */ \n // line"), vec![TokenKind::Eof]);
    assert_eq!(kinds(""), vec![TokenKind::Eof]);
}

#[test]
fn test_comment_stripping_is_token_equivalent() {
    assert_eq!(kinds("a /* c */ b"), kinds("a b"));
    assert_eq!(lexemes("a /* c */ b"), lexemes("a b"));
}

#[test]
fn test_round_trip_kind_and_lexeme_sequence() {
    let tokens = tokenize("x_1 == 10 && (y <= 2)");
    let got_kinds: Vec<_> = tokens.iter().map(|t| t.kind.clone()).collect();
    assert_eq!(
        got_kinds,
        vec![
            TokenKind::Identifier,
            TokenKind::EqEq,
            TokenKind::IntLiteral(10),
            TokenKind::AndAnd,
            TokenKind::LParen,
            TokenKind::Identifier,
            TokenKind::Le,
            TokenKind::IntLiteral(2),
            TokenKind::RParen,
            TokenKind::Eof,
        ]
    );
    let got_lexemes: Vec<_> = tokens.iter().map(|t| t.lexeme.as_str()).collect();
    assert_eq!(
        got_lexemes,
        vec!["x_1", "==", "10", "&&", "(", "y", "<=", "2", ")", ""]
    );
}

#[test]
fn test_adjacent_integer_runs_are_separate_tokens() {
    assert_eq!(
        kinds("123 456"),
        vec![
            TokenKind::IntLiteral(123),
            TokenKind::IntLiteral(456),
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_keyword_needs_exact_spelling() {
    assert_eq!(
        kinds("int int_variable"),
        vec![TokenKind::KwInt, TokenKind::Identifier, TokenKind::Eof]
    );
}

#[test]
fn test_bool_literals_carry_decoded_values() {
    assert_eq!(
        kinds("true false"),
        vec![
            TokenKind::BoolLiteral(true),
            TokenKind::BoolLiteral(false),
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_null_is_a_keyword_but_lowercase_null_is_not() {
    assert_eq!(kinds("NULL"), vec![TokenKind::KwNull, TokenKind::Eof]);
    assert_eq!(kinds("null"), vec![TokenKind::Identifier, TokenKind::Eof]);
}

#[test]
fn test_delimiters_and_dot() {
    assert_eq!(
        kinds("; , ( ) { } ."),
        vec![
            TokenKind::Semicolon,
            TokenKind::Comma,
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::Dot,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_compound_assignment_does_not_split() {
    assert_eq!(
        kinds("a+=1"),
        vec![
            TokenKind::Identifier,
            TokenKind::PlusEq,
            TokenKind::IntLiteral(1),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_char_literal() {
    let tokens = tokenize("'x'");
    assert_eq!(tokens[0].kind, TokenKind::CharLiteral);
    assert_eq!(tokens[0].lexeme, "x");
}

#[test]
fn test_string_escapes_decode() {
    let tokens = tokenize(r#""a\tb\"c\\d""#);
    assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
    assert_eq!(tokens[0].lexeme, "a\tb\"c\\d");
}

#[test]
fn test_unterminated_string_is_one_unknown_token() {
    let mut lexer = Lexer::from_source("\"never closed");
    let token = lexer.next_token();
    assert_eq!(token.kind, TokenKind::Unknown);
    assert!(lexer.next_token().is_eof());
    assert_eq!(lexer.diagnostics().len(), 1);
}

#[test]
fn test_raw_newline_aborts_string_literal() {
    let mut lexer = Lexer::from_source("\"split\nrest\"");
    assert_eq!(lexer.next_token().kind, TokenKind::Unknown);
    assert_eq!(lexer.diagnostics().len(), 1);
    // lexing continues after the aborted literal
    let token = lexer.next_token();
    assert_eq!(token.kind, TokenKind::Identifier);
    assert_eq!(token.lexeme, "rest");
}

#[test]
fn test_unterminated_block_comment_is_reported() {
    let mut lexer = Lexer::from_source("int a; /* never");
    assert_eq!(lexer.diagnostics().len(), 1);
    // the prefix before the comment still lexes normally
    assert_eq!(lexer.next_token().kind, TokenKind::KwInt);
    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    assert_eq!(lexer.next_token().kind, TokenKind::Semicolon);
    assert!(lexer.next_token().is_eof());
}

#[test]
fn test_illegal_character_is_unknown_with_diagnostic() {
    let mut lexer = Lexer::from_source("@");
    let token = lexer.next_token();
    assert_eq!(token.kind, TokenKind::Unknown);
    assert_eq!(token.lexeme, "@");
    assert_eq!(lexer.diagnostics().len(), 1);
}

#[test]
fn test_integer_out_of_range_is_unknown_with_diagnostic() {
    let mut lexer = Lexer::from_source("99999999999999999999");
    assert_eq!(lexer.next_token().kind, TokenKind::Unknown);
    assert_eq!(lexer.diagnostics().len(), 1);
}

#[test]
fn test_eof_is_sticky() {
    let mut lexer = Lexer::from_source("x");
    lexer.next_token();
    for _ in 0..5 {
        assert!(lexer.next_token().is_eof());
    }
}

#[test]
fn test_locations_are_one_based_and_track_lines() {
    let tokens = tokenize("int\n  x;");
    assert_eq!((tokens[0].location.line, tokens[0].location.column), (1, 1));
    assert_eq!((tokens[1].location.line, tokens[1].location.column), (2, 3));
    assert_eq!((tokens[2].location.line, tokens[2].location.column), (2, 4));
}

#[test]
fn test_division_is_not_a_comment() {
    assert_eq!(
        kinds("a / b"),
        vec![
            TokenKind::Identifier,
            TokenKind::Slash,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
}
