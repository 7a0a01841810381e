//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the parsing entry points.
//! The parser is recursive descent over a buffered [`TokenStream`]; type
//! expressions use NUD/LED handlers so that sum types can be recognised
//! after their first variant has been parsed.
//!
//! It maintains lookup tables for:
//! - Declaration handlers, keyed by the leading keyword
//! - NUD (null denotation) handlers for expressions
//! - NUD and LED handlers for type expressions
//! - Binding powers for type operators
//!
//! Every rule returns `Result`; the first syntax error ends the parse and is
//! handed back to the caller.

use std::collections::HashMap;

use crate::{
    ast::ast::{Program, Spanned, TypeDecl},
    errors::errors::Error,
    lexer::{
        lexer::Lexer,
        token_stream::TokenStream,
        tokens::{Token, TokenKind},
    },
    Loc, Span,
};

use super::{
    decl::parse_decl,
    lookups::{create_token_lookups, BindingPower, DeclHandler, DeclLookup, NUDHandler, NUDLookup},
    types::{
        create_token_type_lookups, TypeBPLookup, TypeLEDHandler, TypeLEDLookup, TypeNUDHandler,
        TypeNUDLookup,
    },
};

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The buffered tokens being parsed
    tokens: TokenStream,
    /// Lookup table for declaration handlers
    decl_lookup: DeclLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for type null denotation handlers
    type_nud_lookup: TypeNUDLookup,
    /// Lookup table for type left denotation handlers
    type_led_lookup: TypeLEDLookup,
    /// Lookup table for type binding powers
    type_binding_power_lookup: TypeBPLookup,
}

impl Parser {
    /// Creates a parser over `tokens` with every grammar rule registered.
    pub fn new(tokens: TokenStream) -> Self {
        let mut parser = Parser {
            tokens,
            decl_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            type_nud_lookup: HashMap::new(),
            type_led_lookup: HashMap::new(),
            type_binding_power_lookup: HashMap::new(),
        };

        create_token_lookups(&mut parser);
        create_token_type_lookups(&mut parser);

        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        self.tokens.peek()
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.tokens.peek().kind
    }

    /// Returns the kind of the token after the current one.
    pub fn next_token_kind(&self) -> TokenKind {
        self.tokens.peek_next().kind
    }

    /// Returns the most recently consumed token.
    pub fn previous_token(&self) -> Option<&Token> {
        self.tokens.peek_back()
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> Token {
        self.tokens.consume()
    }

    /// Consumes the current token if it is of `kind`, reporting whether it did.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        self.tokens.expect(kind)
    }

    /// Expects a token of the specified kind.
    ///
    /// # Arguments
    ///
    /// * `expected_kind` - The expected TokenKind
    /// * `message` - What the grammar required, used in the diagnostic
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise returns an Error
    /// naming the token actually found.
    pub fn expect_error(&mut self, expected_kind: TokenKind, message: &str) -> Result<Token, Error> {
        if self.current_token_kind() == expected_kind {
            Ok(self.advance())
        } else {
            Err(self.unexpected(message))
        }
    }

    /// Expects a token of the specified kind with a default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        let message = format!("expected {}", expected_kind);
        self.expect_error(expected_kind, &message)
    }

    /// Builds the error for the current token not matching `message`.
    pub fn unexpected(&self, message: &str) -> Error {
        Error::unexpected(message, self.current_token())
    }

    /// Splits the current two character operator into `first` and `rest`.
    pub fn split_token(&mut self, first: TokenKind, rest: TokenKind) {
        self.tokens.split_current(first, rest);
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        !self.tokens.eof()
    }

    /// The span from `start` to the end of the most recently consumed token.
    pub fn span_from(&self, start: Loc) -> Span {
        let end = self
            .previous_token()
            .map(|token| token.span.end)
            .unwrap_or(start);

        Span::new(start, end.max(start))
    }

    /// Returns a reference to the declaration lookup table.
    pub fn get_decl_lookup(&self) -> &DeclLookup {
        &self.decl_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the type binding power lookup table.
    pub fn get_type_bp_lookup(&self) -> &TypeBPLookup {
        &self.type_binding_power_lookup
    }

    /// Returns a reference to the type NUD lookup table.
    pub fn get_type_nud_lookup(&self) -> &TypeNUDLookup {
        &self.type_nud_lookup
    }

    /// Returns a reference to the type LED lookup table.
    pub fn get_type_led_lookup(&self) -> &TypeLEDLookup {
        &self.type_led_lookup
    }

    /// Registers a declaration handler for its leading keyword.
    pub fn decl(&mut self, kind: TokenKind, decl_fn: DeclHandler) {
        self.decl_lookup.insert(kind, decl_fn);
    }

    /// Registers a null denotation (prefix) handler for an expression token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a type left denotation handler.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this type operator
    /// * `led_fn` - The handler function for this type operator
    pub fn type_led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: TypeLEDHandler) {
        self.type_binding_power_lookup.insert(kind, binding_power);
        self.type_led_lookup.insert(kind, led_fn);
    }

    /// Registers a type null denotation handler.
    pub fn type_nud(&mut self, kind: TokenKind, nud_fn: TypeNUDHandler) {
        self.type_nud_lookup.insert(kind, nud_fn);
    }

    /// Parses declarations until the end of input.
    pub fn parse_program(&mut self) -> Result<Program, Error> {
        let mut program = Program::new();

        while self.has_tokens() {
            let decl: TypeDecl = parse_decl(self)?;
            log::debug!("parsed {} at {}", decl.name(), decl.get_span());
            program.push(decl);
        }

        log::debug!("parsed program with {} declarations", program.len());

        Ok(program)
    }
}

/// Parses a buffered token stream into a [`Program`].
///
/// This is the main entry point for parsing. Declarations are returned in
/// source order; the first syntax error is returned instead of a program.
pub fn parse(tokens: TokenStream) -> Result<Program, Error> {
    Parser::new(tokens).parse_program()
}

/// Lexes and parses `source` in one step.
pub fn parse_source(source: &str) -> Result<Program, Error> {
    parse(TokenStream::new(Lexer::new(source)))
}
