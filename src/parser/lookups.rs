use std::collections::HashMap;

use crate::{
    ast::ast::{Expr, TypeDecl},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{decl::*, expr::*, parser::Parser};

/// How tightly an infix type operator binds. Parsing at a given power stops
/// at any operator that does not bind tighter.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Sum,
    Primary,
}

pub type DeclHandler = fn(&mut Parser) -> Result<TypeDecl, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Literals
    parser.nud(TokenKind::Number, parse_number_expr);

    // Declarations
    parser.decl(TokenKind::Record, parse_record_decl);
    parser.decl(TokenKind::Enum, parse_enum_decl);
    parser.decl(TokenKind::Type, parse_type_alias_decl);
}

// Lookup tables inside parser struct, so it's easier
pub type DeclLookup = HashMap<TokenKind, DeclHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
