use lazy_static::lazy_static;
use regex::Regex;

use crate::{Loc, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::{
    token_stream::TokenStream,
    tokens::{Token, TokenKind, RESERVED_LOOKUP},
};

/// Builds a token from the text the lexer has just advanced over.
/// Returning `None` discards the text and lexing continues.
pub type RegexHandler = fn(&mut Lexer) -> Option<Token>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Patterns are tried in order, so two character operators come before
    // their one character prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^[ \t\r\n]+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^#[^\n]*\n?").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("^[0-9]+(\\.[0-9]+)?").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen) },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen) },
        RegexPattern { regex: Regex::new("^\\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly) },
        RegexPattern { regex: Regex::new("^\\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly) },
        RegexPattern { regex: Regex::new("^\\[").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenBracket) },
        RegexPattern { regex: Regex::new("^\\]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseBracket) },
        RegexPattern { regex: Regex::new("^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma) },
        RegexPattern { regex: Regex::new("^\\.").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dot) },
        RegexPattern { regex: Regex::new("^:").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Colon) },
        RegexPattern { regex: Regex::new("^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon) },
        RegexPattern { regex: Regex::new("^<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LessEquals) },
        RegexPattern { regex: Regex::new("^<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less) },
        RegexPattern { regex: Regex::new("^>=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals) },
        RegexPattern { regex: Regex::new("^>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater) },
        RegexPattern { regex: Regex::new("^==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals) },
        RegexPattern { regex: Regex::new("^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment) },
        RegexPattern { regex: Regex::new("^!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals) },
        RegexPattern { regex: Regex::new("^!").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Not) },
        RegexPattern { regex: Regex::new("^->").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Arrow) },
        RegexPattern { regex: Regex::new("^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash) },
        RegexPattern { regex: Regex::new("^\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus) },
        RegexPattern { regex: Regex::new("^\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star) },
        RegexPattern { regex: Regex::new("^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash) },
        RegexPattern { regex: Regex::new("^%").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Percent) },
        RegexPattern { regex: Regex::new("^&").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Ampersand) },
        RegexPattern { regex: Regex::new("^\\|").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Pipe) },
        RegexPattern { regex: Regex::new("^\\^").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Caret) },
    ];
}

/// Pull-based scanner. Each call to [`Lexer::next_token`] produces exactly one
/// token; once the input is exhausted every further call yields `EOF`.
pub struct Lexer {
    source: String,
    /// Byte offset of the first character of the current lexeme
    start: usize,
    /// Byte offset of the scan cursor
    current: usize,
    start_loc: Loc,
    loc: Loc,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer {
            source: source.to_string(),
            start: 0,
            current: 0,
            start_loc: Loc::origin(),
            loc: Loc::origin(),
        }
    }

    pub fn next_token(&mut self) -> Token {
        'scan: loop {
            self.start = self.current;
            self.start_loc = self.loc;

            if self.at_eof() {
                return MK_TOKEN!(TokenKind::EOF, String::new(), Span::point(self.loc));
            }

            for pattern in PATTERNS.iter() {
                let matched = match pattern.regex.find(self.remainder()) {
                    Some(found) if !found.is_empty() => found.end(),
                    _ => continue,
                };

                self.advance_n(matched);

                match (pattern.handler)(self) {
                    Some(token) => return token,
                    None => continue 'scan,
                }
            }

            let unknown = self.remainder().chars().next().map_or(1, char::len_utf8);
            self.advance_n(unknown);

            return MK_TOKEN!(TokenKind::Error, self.lexeme().to_string(), self.span());
        }
    }

    /// Moves the cursor `n` bytes forward, keeping line and column in step.
    pub fn advance_n(&mut self, n: usize) {
        let end = self.current + n;
        for c in self.source[self.current..end].chars() {
            self.loc = self.loc.step(c);
        }
        self.current = end;
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.current..]
    }

    /// The text between the start of the current token and the cursor.
    pub fn lexeme(&self) -> &str {
        &self.source[self.start..self.current]
    }

    /// The span from the start of the current token to the cursor.
    pub fn span(&self) -> Span {
        Span::new(self.start_loc, self.loc)
    }

    pub fn at_eof(&self) -> bool {
        self.current >= self.source.len()
    }
}

fn skip_handler(_lexer: &mut Lexer) -> Option<Token> {
    None
}

fn number_handler(lexer: &mut Lexer) -> Option<Token> {
    Some(MK_TOKEN!(
        TokenKind::Number,
        lexer.lexeme().to_string(),
        lexer.span()
    ))
}

fn symbol_handler(lexer: &mut Lexer) -> Option<Token> {
    if let Some(kind) = RESERVED_LOOKUP.get(lexer.lexeme()) {
        Some(MK_TOKEN!(*kind, String::new(), lexer.span()))
    } else {
        Some(MK_TOKEN!(
            TokenKind::Identifier,
            lexer.lexeme().to_string(),
            lexer.span()
        ))
    }
}

/// Lexes all of `source`, returning every token including the trailing `EOF`.
pub fn tokenize(source: &str) -> Vec<Token> {
    TokenStream::new(Lexer::new(source)).into_tokens()
}
