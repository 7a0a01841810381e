use crate::{Span, MK_TOKEN};

use super::{
    lexer::Lexer,
    tokens::{Token, TokenKind},
};

/// A fully buffered token sequence with random-access lookahead.
///
/// The lexer is driven to completion on construction, so lookahead never
/// lexes and never has side effects. The buffer always ends with an `EOF`
/// token, and reads past the end keep returning that token.
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: Vec<Token>,
    idx: usize,
}

impl TokenStream {
    pub fn new(mut lexer: Lexer) -> Self {
        let mut tokens = vec![];

        loop {
            let token = lexer.next_token();
            let done = token.kind == TokenKind::EOF;
            tokens.push(token);

            if done {
                break;
            }
        }

        log::debug!("buffered {} tokens", tokens.len());

        TokenStream { tokens, idx: 0 }
    }

    /// The most recently consumed token, if any has been consumed.
    pub fn peek_back(&self) -> Option<&Token> {
        self.idx.checked_sub(1).map(|idx| &self.tokens[idx])
    }

    pub fn peek(&self) -> &Token {
        self.peek_ahead(0)
    }

    pub fn peek_next(&self) -> &Token {
        self.peek_ahead(1)
    }

    pub fn peek_ahead(&self, n: usize) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[(self.idx + n).min(last)]
    }

    /// Returns the current token and moves past it. Consuming `EOF` leaves the
    /// stream positioned on `EOF`.
    pub fn consume(&mut self) -> Token {
        let token = self.peek().clone();
        if self.idx < self.tokens.len() - 1 {
            self.idx += 1;
        } else {
            self.idx = self.tokens.len();
        }
        token
    }

    /// Consumes the current token if it is of `kind`.
    pub fn expect(&mut self, kind: TokenKind) -> bool {
        if self.peek().kind == kind {
            self.consume();
            true
        } else {
            false
        }
    }

    /// Replaces the current token with two: a one column `first` token
    /// followed by a `rest` token covering the remaining columns. Used where
    /// the grammar needs the first character of a two character operator.
    pub fn split_current(&mut self, first: TokenKind, rest: TokenKind) {
        let idx = self.idx.min(self.tokens.len() - 1);
        let span = self.tokens[idx].span;
        let mid = span.start.add_column(1);

        self.tokens[idx] = MK_TOKEN!(first, String::new(), Span::new(span.start, mid));
        self.tokens
            .insert(idx + 1, MK_TOKEN!(rest, String::new(), Span::new(mid, span.end)));
    }

    pub fn eof(&self) -> bool {
        self.peek().kind == TokenKind::EOF
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}
