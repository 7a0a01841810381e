use std::fmt::Display;

use thiserror::Error;

use crate::{
    lexer::tokens::{Token, TokenKind},
    Span,
};

/// A front end failure together with the source range it refers to.
///
/// Displays as the single diagnostic line
/// `<message> instead got <TOKEN_KIND> [<lexeme>] <span>`.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error} {span}")]
pub struct Error {
    internal_error: ErrorImpl,
    span: Span,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, span: Span) -> Self {
        Error {
            internal_error: error_impl,
            span,
        }
    }

    /// Builds the error for finding `found` where `message` describes what
    /// the grammar required.
    pub fn unexpected(message: impl Into<String>, found: &Token) -> Self {
        let internal_error = match found.kind {
            TokenKind::Error => ErrorImpl::UnrecognisedToken {
                token: found.lexeme.clone(),
            },
            kind => ErrorImpl::UnexpectedToken {
                message: message.into(),
                kind,
                lexeme: found.lexeme.clone(),
            },
        };

        Error::new(internal_error, found.span)
    }

    pub fn get_span(&self) -> &Span {
        &self.span
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::UnclosedGenericList { .. } => "UnclosedGenericList",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken {
                kind: TokenKind::EOF,
                ..
            } => ErrorTip::Suggestion(String::from(
                "Reached the end of the file, is a closing delimiter missing?",
            )),
            ErrorImpl::UnexpectedToken { message, .. } => {
                ErrorTip::Suggestion(format!("Expected {}", message.trim_start_matches("expected ")))
            }
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::UnclosedGenericList { .. } => {
                ErrorTip::Suggestion(String::from("Close the list with `>`"))
            }
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised character instead got ERROR [{token}]")]
    UnrecognisedToken { token: String },
    #[error("{message} instead got {kind} [{lexeme}]")]
    UnexpectedToken {
        message: String,
        kind: TokenKind,
        lexeme: String,
    },
    #[error("integer literal out of range instead got NUMBER [{token}]")]
    NumberParseError { token: String },
    #[error("expected '>' to close the {list} list instead got EOF []")]
    UnclosedGenericList { list: String },
}
