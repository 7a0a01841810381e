//! Lexical analysis module.
//!
//! This module turns source text into tokens for parsing. It handles:
//!
//! - Pull-based scanning of one token at a time
//! - Recognition of keywords, identifiers, numbers and operators
//! - Line/column tracking for every token
//! - `#` line comments and whitespace
//! - Buffering the whole token sequence for parser lookahead
//!
//! Lexing never fails: unrecognised characters become `Error` tokens which
//! the parser reports when it reaches them.

pub mod lexer;
pub mod token_stream;
pub mod tokens;

#[cfg(test)]
mod tests;
