//! Type parsing implementation.
//!
//! This module handles parsing of type expressions. It supports:
//!
//! - Symbol types, with optional generic arguments (`Map<K, V>`)
//! - Tuple types (`[i32, f64]`) and array types (`[i32; 4]`)
//! - Function types (`Fn(i32) -> bool`)
//! - Parenthesised types, used for grouping only
//! - Sum types (`i32 | f64`), with an optional leading `|`
//!
//! Similar to expression parsing, it uses NUD/LED handlers with
//! binding powers. `|` is the only infix type operator; each of its
//! operands is parsed at `BindingPower::Sum`, so `A | B | C` is one flat
//! sum rather than a nested one.

use std::collections::HashMap;

use crate::{
    ast::{
        ast::{Spanned, TypeExpr},
        types::{ArrayTypeExpr, FuncTypeExpr, SumTypeExpr, SymbolTypeExpr, TupleTypeExpr},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, lookups::BindingPower, parser::Parser};

/// Type alias for type null denotation handler functions.
pub type TypeNUDHandler = fn(&mut Parser) -> Result<TypeExpr, Error>;

/// Type alias for type left denotation handler functions.
pub type TypeLEDHandler = fn(&mut Parser, TypeExpr, BindingPower) -> Result<TypeExpr, Error>;

/// Type alias for type NUD lookup table.
pub type TypeNUDLookup = HashMap<TokenKind, TypeNUDHandler>;

/// Type alias for type LED lookup table.
pub type TypeLEDLookup = HashMap<TokenKind, TypeLEDHandler>;

/// Type alias for type binding power lookup table.
pub type TypeBPLookup = HashMap<TokenKind, BindingPower>;

/// Initializes the type parsing lookup tables.
///
/// Registers NUD and LED handlers for parsing type expressions.
///
/// # Arguments
///
/// * `parser` - Mutable reference to the parser to initialize
pub fn create_token_type_lookups(parser: &mut Parser) {
    parser.type_nud(TokenKind::Identifier, parse_symbol_type);
    parser.type_nud(TokenKind::OpenBracket, parse_bracketed_type);
    parser.type_nud(TokenKind::OpenParen, parse_paren_type);
    parser.type_nud(TokenKind::FnType, parse_func_type);

    parser.type_led(TokenKind::Pipe, BindingPower::Sum, parse_sum_type);
}

/// Parses a full type expression, including sums.
///
/// A leading `|` always produces a sum type, even with a single variant.
pub fn parse_type_expr(parser: &mut Parser) -> Result<TypeExpr, Error> {
    if parser.current_token_kind() == TokenKind::Pipe {
        return parse_prefixed_sum_type(parser);
    }

    parse_type(parser, BindingPower::Default)
}

/// Parses a type that cannot itself be a sum. Used for sum variants.
pub fn parse_simple_type(parser: &mut Parser) -> Result<TypeExpr, Error> {
    parse_type(parser, BindingPower::Sum)
}

pub fn parse_type(parser: &mut Parser, bp: BindingPower) -> Result<TypeExpr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let nud = match parser.get_type_nud_lookup().get(&token_kind) {
        Some(nud) => *nud,
        None => return Err(parser.unexpected("expected a type")),
    };

    let mut left = nud(parser)?;

    // While LED and current BP is less than BP of current token, continue parsing lhs
    loop {
        let token_kind = parser.current_token_kind();
        let token_bp = *parser
            .get_type_bp_lookup()
            .get(&token_kind)
            .unwrap_or(&BindingPower::Default);

        if token_bp <= bp {
            break;
        }

        let led = match parser.get_type_led_lookup().get(&token_kind) {
            Some(led) => *led,
            None => return Err(parser.unexpected("expected a type operator")),
        };

        left = led(parser, left, token_bp)?;
    }

    Ok(left)
}

/// Parses `IDENT ('<' type_expr (',' type_expr)* '>')?`.
pub fn parse_symbol(parser: &mut Parser) -> Result<SymbolTypeExpr, Error> {
    let token = parser.expect_error(TokenKind::Identifier, "expected a type name")?;

    let generic_args = if parser.current_token_kind() == TokenKind::Less {
        parse_generic_list(parser, "generic argument", parse_type_expr)?
    } else {
        vec![]
    };

    Ok(SymbolTypeExpr {
        symbol: token.lexeme,
        generic_args,
        span: parser.span_from(token.span.start),
    })
}

pub fn parse_symbol_type(parser: &mut Parser) -> Result<TypeExpr, Error> {
    Ok(TypeExpr::Symbol(parse_symbol(parser)?))
}

/// Parses the parameter list of a generic declaration, if there is one.
/// Parameters are bare names.
pub fn parse_generic_params(parser: &mut Parser) -> Result<Vec<SymbolTypeExpr>, Error> {
    if parser.current_token_kind() != TokenKind::Less {
        return Ok(vec![]);
    }

    parse_generic_list(parser, "generic parameter", |parser| {
        let token = parser.expect_error(TokenKind::Identifier, "expected a generic parameter name")?;
        Ok(SymbolTypeExpr::bare(token.lexeme, token.span))
    })
}

/// Parses `'<' item (',' item)* ','? '>'`. The current token must be `<`.
fn parse_generic_list<T>(
    parser: &mut Parser,
    list: &str,
    parse_item: impl Fn(&mut Parser) -> Result<T, Error>,
) -> Result<Vec<T>, Error> {
    parser.expect(TokenKind::Less)?;

    let mut items = vec![];
    loop {
        if parser.current_token_kind() == TokenKind::EOF {
            return Err(unclosed_generic_list(parser, list));
        }

        items.push(parse_item(parser)?);

        if parser.eat(TokenKind::Comma) {
            if close_generic_list(parser) {
                break;
            }
            continue;
        }

        if close_generic_list(parser) {
            break;
        }

        if parser.current_token_kind() == TokenKind::EOF {
            return Err(unclosed_generic_list(parser, list));
        }

        return Err(parser.unexpected(&format!("expected ',' or '>' in the {} list", list)));
    }

    Ok(items)
}

/// Consumes the `>` closing a generic list. A `>=` straight after the list,
/// as in `type F<T>= T;`, is split so that its `=` is left for the caller.
fn close_generic_list(parser: &mut Parser) -> bool {
    if !parser
        .current_token()
        .is_one_of_many(&[TokenKind::Greater, TokenKind::GreaterEquals])
    {
        return false;
    }

    if parser.current_token_kind() == TokenKind::GreaterEquals {
        parser.split_token(TokenKind::Greater, TokenKind::Assignment);
    }

    parser.eat(TokenKind::Greater)
}

fn unclosed_generic_list(parser: &Parser, list: &str) -> Error {
    Error::new(
        ErrorImpl::UnclosedGenericList {
            list: list.to_string(),
        },
        parser.current_token().span,
    )
}

/// Parses a tuple type `[T, U, ...]` or an array type `[T; N]`.
///
/// The token after the first element decides which: `,` makes a tuple and
/// `;` makes an array. A single bracketed type is an error.
pub fn parse_bracketed_type(parser: &mut Parser) -> Result<TypeExpr, Error> {
    let start = parser.expect(TokenKind::OpenBracket)?.span.start;
    let first = parse_type_expr(parser)?;

    match parser.current_token_kind() {
        TokenKind::Comma => {
            let mut fields = vec![first];
            while parser.eat(TokenKind::Comma) {
                fields.push(parse_type_expr(parser)?);
            }
            parser.expect_error(TokenKind::CloseBracket, "expected ',' or ']' in tuple type")?;

            Ok(TypeExpr::Tuple(TupleTypeExpr {
                fields,
                span: parser.span_from(start),
            }))
        }
        TokenKind::Semicolon => {
            parser.advance();
            let size = parse_expr(parser)?;
            parser.expect_error(TokenKind::CloseBracket, "expected ']' after the array size")?;

            Ok(TypeExpr::Array(ArrayTypeExpr {
                elem: Box::new(first),
                size: Box::new(size),
                span: parser.span_from(start),
            }))
        }
        _ => Err(parser.unexpected("expected ',' for a tuple type or ';' for an array type")),
    }
}

/// Parses `'(' type_expr ')'`. Parentheses only group: the inner type is
/// returned with its span widened to cover them.
pub fn parse_paren_type(parser: &mut Parser) -> Result<TypeExpr, Error> {
    let start = parser.expect(TokenKind::OpenParen)?.span.start;
    let mut inner = parse_type_expr(parser)?;
    parser.expect_error(TokenKind::CloseParen, "expected ')' to close the parenthesised type")?;

    *inner.span_mut() = parser.span_from(start);

    Ok(inner)
}

/// Parses `Fn '(' (type_expr (',' type_expr)* ','?)? ')' '->' type_expr`.
pub fn parse_func_type(parser: &mut Parser) -> Result<TypeExpr, Error> {
    let start = parser.expect(TokenKind::FnType)?.span.start;
    parser.expect_error(TokenKind::OpenParen, "expected '(' after 'Fn'")?;

    let mut params = vec![];
    while parser.current_token_kind() != TokenKind::CloseParen {
        params.push(parse_type_expr(parser)?);
        if !parser.eat(TokenKind::Comma) {
            break;
        }
    }

    parser.expect_error(TokenKind::CloseParen, "expected ',' or ')' in function parameters")?;
    parser.expect_error(TokenKind::Arrow, "expected '->' after function parameters")?;
    let ret = parse_type_expr(parser)?;

    Ok(TypeExpr::Func(FuncTypeExpr {
        params,
        ret: Box::new(ret),
        span: parser.span_from(start),
    }))
}

/// LED for `|`: `left` is the first variant.
pub fn parse_sum_type(
    parser: &mut Parser,
    left: TypeExpr,
    _bp: BindingPower,
) -> Result<TypeExpr, Error> {
    let start = left.get_span().start;
    let mut variants = vec![left];

    while parser.eat(TokenKind::Pipe) {
        variants.push(parse_simple_type(parser)?);
    }

    Ok(TypeExpr::Sum(SumTypeExpr {
        variants,
        span: parser.span_from(start),
    }))
}

fn parse_prefixed_sum_type(parser: &mut Parser) -> Result<TypeExpr, Error> {
    let start = parser.expect(TokenKind::Pipe)?.span.start;
    let mut variants = vec![parse_simple_type(parser)?];

    while parser.eat(TokenKind::Pipe) {
        variants.push(parse_simple_type(parser)?);
    }

    Ok(TypeExpr::Sum(SumTypeExpr {
        variants,
        span: parser.span_from(start),
    }))
}
