//! Unit tests for error handling.
//!
//! This module contains tests for error construction, naming and the
//! one-line diagnostic rendering.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::{Token, TokenKind};
use crate::{Loc, Span};

fn span() -> Span {
    Span::new(Loc::new(1, 8), Loc::new(1, 9))
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        span(),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
}

#[test]
fn test_error_span() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: "99999999999999999999".to_string(),
        },
        span(),
    );

    assert_eq!(error.get_span().start, Loc::new(1, 8));
    assert_eq!(error.get_span().end, Loc::new(1, 9));
}

#[test]
fn test_unexpected_token_diagnostic_line() {
    let found = Token {
        kind: TokenKind::OpenCurly,
        lexeme: String::new(),
        span: span(),
    };
    let error = Error::unexpected("expected a record name after 'record'", &found);

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(
        error.to_string(),
        "expected a record name after 'record' instead got L_BRACE [] 1:8-1:9"
    );
}

#[test]
fn test_unexpected_token_with_lexeme() {
    let found = Token {
        kind: TokenKind::Identifier,
        lexeme: "oops".to_string(),
        span: Span::new(Loc::new(2, 3), Loc::new(2, 7)),
    };
    let error = Error::unexpected("expected ';' after type alias", &found);

    assert_eq!(
        error.to_string(),
        "expected ';' after type alias instead got IDENTIFIER [oops] 2:3-2:7"
    );
}

#[test]
fn test_error_token_becomes_unrecognised() {
    let found = Token {
        kind: TokenKind::Error,
        lexeme: "@".to_string(),
        span: span(),
    };
    let error = Error::unexpected("expected a type", &found);

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert!(matches!(
        error.get_impl(),
        ErrorImpl::UnrecognisedToken { token } if token == "@"
    ));
    assert_eq!(
        error.to_string(),
        "unrecognised character instead got ERROR [@] 1:8-1:9"
    );
}

#[test]
fn test_unclosed_generic_list_error() {
    let error = Error::new(
        ErrorImpl::UnclosedGenericList {
            list: "generic argument".to_string(),
        },
        span(),
    );

    assert_eq!(error.get_error_name(), "UnclosedGenericList");
    assert!(error.to_string().starts_with("expected '>' to close the generic argument list"));
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        span(),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let found = Token {
        kind: TokenKind::CloseCurly,
        lexeme: String::new(),
        span: span(),
    };
    let error = Error::unexpected("expected ':' after field name", &found);

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "Expected ':' after field name"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_at_eof() {
    let found = Token {
        kind: TokenKind::EOF,
        lexeme: String::new(),
        span: span(),
    };
    let error = Error::unexpected("expected '}' to close record body", &found);

    assert!(error.get_tip().to_string().contains("end of the file"));
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_is_std_error() {
    fn assert_error<E: std::error::Error>(_: &E) {}

    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: "1".to_string(),
        },
        span(),
    );
    assert_error(&error);
}
