//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Numeric literals (integers and floats)
//! - Operators and punctuation
//! - Comments and whitespace
//! - Spans, including tab handling
//! - Error tokens
//! - Token stream lookahead

use crate::{Loc, Span};

use super::{
    lexer::{tokenize, Lexer},
    token_stream::TokenStream,
    tokens::{TokenKind, RESERVED_LOOKUP},
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).iter().map(|token| token.kind).collect()
}

#[test]
fn test_tokenize_record_declaration() {
    assert_eq!(
        kinds("record Point { x: Int, y: Int }"),
        vec![
            TokenKind::Record,
            TokenKind::Identifier,
            TokenKind::OpenCurly,
            TokenKind::Identifier,
            TokenKind::Colon,
            TokenKind::Identifier,
            TokenKind::Comma,
            TokenKind::Identifier,
            TokenKind::Colon,
            TokenKind::Identifier,
            TokenKind::CloseCurly,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("type record enum fn Fn");

    assert_eq!(tokens[0].kind, TokenKind::Type);
    assert_eq!(tokens[1].kind, TokenKind::Record);
    assert_eq!(tokens[2].kind, TokenKind::Enum);
    assert_eq!(tokens[3].kind, TokenKind::Fn);
    assert_eq!(tokens[4].kind, TokenKind::FnType);
    assert_eq!(tokens[5].kind, TokenKind::EOF);

    for token in &tokens[..5] {
        assert!(RESERVED_LOOKUP.values().any(|kind| *kind == token.kind));
        assert!(token.lexeme.is_empty());
    }
}

#[test]
fn test_keywords_are_case_sensitive_and_exact() {
    let tokens = tokenize("Record types enum_ FN");

    assert!(tokens[..4]
        .iter()
        .all(|token| token.kind == TokenKind::Identifier));
    assert_eq!(tokens[0].lexeme, "Record");
    assert_eq!(tokens[1].lexeme, "types");
    assert_eq!(tokens[2].lexeme, "enum_");
    assert_eq!(tokens[3].lexeme, "FN");
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar baz_123 _underscore CamelCase");

    let lexemes: Vec<&str> = tokens[..5].iter().map(|token| token.lexeme.as_str()).collect();
    assert_eq!(lexemes, vec!["foo", "bar", "baz_123", "_underscore", "CamelCase"]);
    assert!(tokens[..5]
        .iter()
        .all(|token| token.kind == TokenKind::Identifier));
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 3.14 0 100.");

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].lexeme, "42");
    assert_eq!(tokens[1].kind, TokenKind::Number);
    assert_eq!(tokens[1].lexeme, "3.14");
    assert_eq!(tokens[2].lexeme, "0");

    // The dot is only part of a number when a digit follows it
    assert_eq!(tokens[3].kind, TokenKind::Number);
    assert_eq!(tokens[3].lexeme, "100");
    assert_eq!(tokens[4].kind, TokenKind::Dot);
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_number_followed_by_field_access() {
    assert_eq!(
        kinds("1.x"),
        vec![TokenKind::Number, TokenKind::Dot, TokenKind::Identifier, TokenKind::EOF]
    );
}

#[test]
fn test_tokenize_single_char_punctuation() {
    assert_eq!(
        kinds("( ) { } [ ] , . : ; < > = + - * / % ! & | ^"),
        vec![
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::OpenBracket,
            TokenKind::CloseBracket,
            TokenKind::Comma,
            TokenKind::Dot,
            TokenKind::Colon,
            TokenKind::Semicolon,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::Assignment,
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Percent,
            TokenKind::Not,
            TokenKind::Ampersand,
            TokenKind::Pipe,
            TokenKind::Caret,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_two_char_operators() {
    assert_eq!(
        kinds("<= >= == != ->"),
        vec![
            TokenKind::LessEquals,
            TokenKind::GreaterEquals,
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::Arrow,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_operators_without_whitespace() {
    assert_eq!(
        kinds("a<=b->c=d"),
        vec![
            TokenKind::Identifier,
            TokenKind::LessEquals,
            TokenKind::Identifier,
            TokenKind::Arrow,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_nested_generics_close_separately() {
    assert_eq!(
        kinds("List<List<T>>"),
        vec![
            TokenKind::Identifier,
            TokenKind::Less,
            TokenKind::Identifier,
            TokenKind::Less,
            TokenKind::Identifier,
            TokenKind::Greater,
            TokenKind::Greater,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_comments() {
    let tokens = tokenize("# a comment\nfoo # trailing\n# last line without newline");

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].lexeme, "foo");
    assert_eq!(tokens[0].span.start, Loc::new(2, 1));
    assert_eq!(tokens[1].kind, TokenKind::EOF);
}

#[test]
fn test_empty_and_blank_input() {
    assert_eq!(kinds(""), vec![TokenKind::EOF]);
    assert_eq!(kinds("  \t\r\n\n  "), vec![TokenKind::EOF]);
    assert_eq!(kinds("# only a comment"), vec![TokenKind::EOF]);
}

#[test]
fn test_token_spans() {
    let tokens = tokenize("record Point");

    assert_eq!(tokens[0].span, Span::new(Loc::new(1, 1), Loc::new(1, 7)));
    assert_eq!(tokens[1].span, Span::new(Loc::new(1, 8), Loc::new(1, 13)));
    assert_eq!(tokens[2].span, Span::point(Loc::new(1, 13)));
}

#[test]
fn test_spans_across_lines() {
    let tokens = tokenize("a\n  bb\n");

    assert_eq!(tokens[0].span, Span::new(Loc::new(1, 1), Loc::new(1, 2)));
    assert_eq!(tokens[1].span, Span::new(Loc::new(2, 3), Loc::new(2, 5)));
    assert_eq!(tokens[2].span.start, Loc::new(3, 1));
}

#[test]
fn test_tab_advances_four_columns() {
    let tokens = tokenize("\tx\t: y");

    assert_eq!(tokens[0].span.start, Loc::new(1, 5));
    assert_eq!(tokens[1].span.start, Loc::new(1, 10));
    assert_eq!(tokens[2].span.start, Loc::new(1, 12));
}

#[test]
fn test_carriage_return_is_whitespace() {
    let tokens = tokenize("a\r\nb");

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].span.start, Loc::new(2, 1));
}

#[test]
fn test_unrecognised_character_becomes_error_token() {
    let tokens = tokenize("a $ b");

    assert_eq!(tokens[1].kind, TokenKind::Error);
    assert_eq!(tokens[1].lexeme, "$");
    assert_eq!(tokens[1].span, Span::new(Loc::new(1, 3), Loc::new(1, 4)));

    // Lexing carries on after the error
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_multibyte_error_token() {
    let tokens = tokenize("é");

    assert_eq!(tokens[0].kind, TokenKind::Error);
    assert_eq!(tokens[0].lexeme, "é");
    assert_eq!(tokens[0].span.end, Loc::new(1, 2));
}

#[test]
fn test_lexer_keeps_returning_eof() {
    let mut lexer = Lexer::new("x");

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    assert_eq!(lexer.next_token().kind, TokenKind::EOF);
    assert_eq!(lexer.next_token().kind, TokenKind::EOF);
    assert_eq!(lexer.next_token().kind, TokenKind::EOF);
}

#[test]
fn test_token_display() {
    let tokens = tokenize("record Point");

    assert_eq!(tokens[0].to_string(), "RECORD 1:1-1:7");
    assert_eq!(tokens[1].to_string(), "IDENTIFIER Point 1:8-1:13");
    assert_eq!(tokens[2].to_string(), "EOF 1:13-1:13");
}

#[test]
fn test_token_stream_lookahead() {
    let stream = TokenStream::new(Lexer::new("a b"));

    assert_eq!(stream.len(), 3);
    assert!(stream.peek_back().is_none());
    assert_eq!(stream.peek().lexeme, "a");
    assert_eq!(stream.peek_next().lexeme, "b");
    assert_eq!(stream.peek_ahead(2).kind, TokenKind::EOF);

    // Lookahead past the end stays on EOF
    assert_eq!(stream.peek_ahead(10).kind, TokenKind::EOF);
}

#[test]
fn test_token_stream_consume() {
    let mut stream = TokenStream::new(Lexer::new("a b"));

    assert_eq!(stream.consume().lexeme, "a");
    assert_eq!(stream.peek_back().map(|token| token.lexeme.as_str()), Some("a"));
    assert!(stream.expect(TokenKind::Identifier));
    assert!(!stream.expect(TokenKind::Identifier));
    assert!(stream.eof());

    assert_eq!(stream.consume().kind, TokenKind::EOF);
    assert_eq!(stream.consume().kind, TokenKind::EOF);
    assert!(stream.eof());
    assert_eq!(stream.peek_back().map(|token| token.kind), Some(TokenKind::EOF));
}

#[test]
fn test_token_stream_split_current() {
    let mut stream = TokenStream::new(Lexer::new("T>= x"));
    stream.consume();

    assert_eq!(stream.peek().kind, TokenKind::GreaterEquals);
    stream.split_current(TokenKind::Greater, TokenKind::Assignment);

    assert_eq!(stream.len(), 5);
    assert_eq!(stream.peek().kind, TokenKind::Greater);
    assert_eq!(stream.peek().span, Span::new(Loc::new(1, 2), Loc::new(1, 3)));
    assert_eq!(stream.peek_next().kind, TokenKind::Assignment);
    assert_eq!(stream.peek_next().span, Span::new(Loc::new(1, 3), Loc::new(1, 4)));
    assert_eq!(stream.peek_ahead(2).lexeme, "x");
}
