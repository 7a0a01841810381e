use crate::{
    ast::{
        ast::Expr,
        expressions::{FloatExpr, IntExpr},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// Parses an expression. Only literals are registered, so this is a single
/// NUD dispatch.
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token_kind = parser.current_token_kind();
    let nud = match parser.get_nud_lookup().get(&token_kind) {
        Some(nud) => *nud,
        None => return Err(parser.unexpected("expected an expression")),
    };

    nud(parser)
}

/// A NUMBER with a '.' is a float, anything else a 64-bit signed integer.
pub fn parse_number_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.expect(TokenKind::Number)?;

    if token.lexeme.contains('.') {
        return match token.lexeme.parse::<f64>() {
            Ok(value) => Ok(Expr::from(FloatExpr {
                value,
                span: token.span,
            })),
            Err(_) => Err(Error::new(
                ErrorImpl::NumberParseError {
                    token: token.lexeme,
                },
                token.span,
            )),
        };
    }

    match token.lexeme.parse::<i64>() {
        Ok(value) => Ok(Expr::from(IntExpr {
            value,
            span: token.span,
        })),
        Err(_) => Err(Error::new(
            ErrorImpl::NumberParseError {
                token: token.lexeme,
            },
            token.span,
        )),
    }
}
