//! Unit tests for the lexer module.
//!
//! Covers keywords and identifiers, numeric/string/char literals, operators,
//! comments, line tracking and error cases.

use super::{lexer::{tokenize, unescape}, tokens::TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source.to_string(), Some("test.expr".to_string()))
        .unwrap()
        .iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    assert_eq!(
        kinds("const var print true false"),
        vec![TokenKind::Const, TokenKind::Var, TokenKind::Print, TokenKind::True, TokenKind::False, TokenKind::EOF]
    );
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar baz_123 _underscore CamelCase int".to_string();
    let tokens = tokenize(source, Some("test.expr".to_string())).unwrap();

    let values: Vec<&str> = tokens.iter().take(6).map(|token| token.value.as_str()).collect();
    assert_eq!(values, vec!["foo", "bar", "baz_123", "_underscore", "CamelCase", "int"]);
    assert!(tokens.iter().take(6).all(|token| token.kind == TokenKind::Identifier));
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_keyword_prefix_is_identifier() {
    let tokens = tokenize("variable constant".to_string(), None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "variable");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
}

#[test]
fn test_tokenize_numbers() {
    let source = "42 3.14 0 100.5".to_string();
    let tokens = tokenize(source, Some("test.expr".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Integer);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::Float);
    assert_eq!(tokens[1].value, "3.14");
    assert_eq!(tokens[2].kind, TokenKind::Integer);
    assert_eq!(tokens[2].value, "0");
    assert_eq!(tokens[3].kind, TokenKind::Float);
    assert_eq!(tokens[3].value, "100.5");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_strings() {
    let source = r#""hello" "multiple words" """#.to_string();
    let tokens = tokenize(source, Some("test.expr".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "hello");
    assert_eq!(tokens[1].value, "multiple words");
    assert_eq!(tokens[2].kind, TokenKind::String);
    assert_eq!(tokens[2].value, "");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_string_escapes() {
    let source = r#""line\nbreak" "say \"hi\"" "tab\there""#.to_string();
    let tokens = tokenize(source, None).unwrap();

    assert_eq!(tokens[0].value, "line\nbreak");
    assert_eq!(tokens[1].value, "say \"hi\"");
    assert_eq!(tokens[2].value, "tab\there");
}

#[test]
fn test_unescape_hex_and_unknown() {
    assert_eq!(unescape("\\x41\\x4a"), "AJ");
    assert_eq!(unescape("\\xzz"), "\\xzz");
    assert_eq!(unescape("back\\q"), "back\\q");
}

#[test]
fn test_tokenize_chars() {
    let tokens = tokenize("'a' '\\n'".to_string(), None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Char);
    assert_eq!(tokens[0].value, "a");
    assert_eq!(tokens[1].kind, TokenKind::Char);
    assert_eq!(tokens[1].value, "\n");
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds("+ - * / = == != ! < <= > >= && || ( ) ;"),
        vec![
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Assignment,
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::Not,
            TokenKind::Less,
            TokenKind::LessEquals,
            TokenKind::Greater,
            TokenKind::GreaterEquals,
            TokenKind::And,
            TokenKind::Or,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_operators_without_spaces() {
    assert_eq!(
        kinds("a<=b==c"),
        vec![
            TokenKind::Identifier,
            TokenKind::LessEquals,
            TokenKind::Identifier,
            TokenKind::Equals,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_comments_are_skipped() {
    assert_eq!(
        kinds("// leading comment\nvar x int; // trailing\n"),
        vec![TokenKind::Var, TokenKind::Identifier, TokenKind::Identifier, TokenKind::Semicolon, TokenKind::EOF]
    );
}

#[test]
fn test_tokens_carry_lines() {
    let source = "const a = 1;\n\n// note\nvar b int;\n".to_string();
    let tokens = tokenize(source, Some("test.expr".to_string())).unwrap();

    assert_eq!(tokens[0].line(), 1);
    assert_eq!(tokens[4].kind, TokenKind::Semicolon);
    assert_eq!(tokens[4].line(), 1);
    assert_eq!(tokens[5].kind, TokenKind::Var);
    assert_eq!(tokens[5].line(), 4);
    assert_eq!(tokens[5].span.start.offset, 22);
    assert_eq!(tokens.last().unwrap().line(), 5);
}

#[test]
fn test_token_file_name() {
    let tokens = tokenize("x".to_string(), Some("main.expr".to_string())).unwrap();
    assert_eq!(tokens[0].span.start.file.as_str(), "main.expr");

    let tokens = tokenize("x".to_string(), None).unwrap();
    assert_eq!(tokens[0].span.start.file.as_str(), "shell");
}

#[test]
fn test_empty_source() {
    assert_eq!(kinds(""), vec![TokenKind::EOF]);
    assert_eq!(kinds("   \n\t "), vec![TokenKind::EOF]);
}

#[test]
fn test_unrecognised_token() {
    let error = tokenize("var a int = 3 @ 4;".to_string(), None).unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().offset, 14);
    assert_eq!(error.get_position().line, 1);
}

#[test]
fn test_unterminated_string_is_rejected() {
    let error = tokenize("\"open".to_string(), None).unwrap_err();
    assert_eq!(error.get_error_name(), "UnrecognisedToken");
}
