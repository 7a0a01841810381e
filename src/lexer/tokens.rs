use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("type", TokenKind::Type);
        map.insert("record", TokenKind::Record);
        map.insert("enum", TokenKind::Enum);
        map.insert("fn", TokenKind::Fn);
        map.insert("Fn", TokenKind::FnType);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Error,
    Number,
    Identifier,

    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    OpenBracket,
    CloseBracket,

    Comma,
    Dot,
    Colon,
    Semicolon,

    Less,
    Greater,
    LessEquals,
    GreaterEquals,
    Equals,     // ==
    NotEquals,  // !=
    Assignment, // =

    Plus,
    Dash,
    Star,
    Slash,
    Percent,
    Not,
    Ampersand,
    Pipe,
    Caret,
    Arrow,

    // Reserved
    Type,
    Record,
    Enum,
    Fn,
    /// `Fn`, only meaningful in type position
    FnType,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::EOF => "EOF",
            TokenKind::Error => "ERROR",
            TokenKind::Number => "NUMBER",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::OpenParen => "L_PAREN",
            TokenKind::CloseParen => "R_PAREN",
            TokenKind::OpenCurly => "L_BRACE",
            TokenKind::CloseCurly => "R_BRACE",
            TokenKind::OpenBracket => "L_BRACKET",
            TokenKind::CloseBracket => "R_BRACKET",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::Colon => "COLON",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Less => "LT",
            TokenKind::Greater => "GT",
            TokenKind::LessEquals => "LE",
            TokenKind::GreaterEquals => "GE",
            TokenKind::Equals => "EQ",
            TokenKind::NotEquals => "NE",
            TokenKind::Assignment => "ASSIGN",
            TokenKind::Plus => "PLUS",
            TokenKind::Dash => "MINUS",
            TokenKind::Star => "STAR",
            TokenKind::Slash => "SLASH",
            TokenKind::Percent => "PERCENT",
            TokenKind::Not => "BANG",
            TokenKind::Ampersand => "AMP",
            TokenKind::Pipe => "PIPE",
            TokenKind::Caret => "CARET",
            TokenKind::Arrow => "ARROW",
            TokenKind::Type => "TYPE",
            TokenKind::Record => "RECORD",
            TokenKind::Enum => "ENUM",
            TokenKind::Fn => "FN",
            TokenKind::FnType => "FN_TYPE",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Source text of identifiers, numbers and error tokens. Empty otherwise.
    pub lexeme: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.lexeme.is_empty() {
            write!(f, "{} {}", self.kind, self.span)
        } else {
            write!(f, "{} {} {}", self.kind, self.lexeme, self.span)
        }
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }
}
