//! Declaration parsing.
//!
//! ```text
//! record_decl := 'record' IDENT generic_params? '{' (IDENT ':' type_expr ','?)* '}' ';'?
//! enum_decl   := 'enum' IDENT generic_params? '{' (IDENT (':' type_expr)? ','?)* '}' ';'?
//! type_alias  := 'type' IDENT generic_params? '=' type_expr ';'
//! ```

use crate::{
    ast::{
        ast::TypeDecl,
        declarations::{EnumDecl, RecordDecl, TypeAliasDecl},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{
    parser::Parser,
    types::{parse_generic_params, parse_type_expr},
};

/// Dispatches on the leading keyword of a declaration.
pub fn parse_decl(parser: &mut Parser) -> Result<TypeDecl, Error> {
    let token_kind = parser.current_token_kind();
    match parser.get_decl_lookup().get(&token_kind) {
        Some(handler) => {
            let handler = *handler;
            handler(parser)
        }
        None => Err(parser.unexpected("expected 'record', 'enum' or 'type' at the start of a declaration")),
    }
}

pub fn parse_record_decl(parser: &mut Parser) -> Result<TypeDecl, Error> {
    let start = parser.expect(TokenKind::Record)?.span.start;
    let name = parser
        .expect_error(TokenKind::Identifier, "expected a record name after 'record'")?
        .lexeme;
    let generic_params = parse_generic_params(parser)?;

    parser.expect_error(TokenKind::OpenCurly, "expected '{' to open the record body")?;

    let mut fields = vec![];
    while parser.current_token_kind() != TokenKind::CloseCurly {
        let field = parser
            .expect_error(TokenKind::Identifier, "expected a field name or '}'")?
            .lexeme;
        parser.expect_error(TokenKind::Colon, "expected ':' after the field name")?;
        let type_ = parse_type_expr(parser)?;

        fields.push((field, type_));
        parser.eat(TokenKind::Comma);
    }

    parser.expect(TokenKind::CloseCurly)?;
    parser.eat(TokenKind::Semicolon);

    log::trace!("record {} has {} fields", name, fields.len());

    Ok(TypeDecl::Record(RecordDecl {
        name,
        generic_params,
        fields,
        span: parser.span_from(start),
    }))
}

pub fn parse_enum_decl(parser: &mut Parser) -> Result<TypeDecl, Error> {
    let start = parser.expect(TokenKind::Enum)?.span.start;
    let name = parser
        .expect_error(TokenKind::Identifier, "expected an enum name after 'enum'")?
        .lexeme;
    let generic_params = parse_generic_params(parser)?;

    parser.expect_error(TokenKind::OpenCurly, "expected '{' to open the enum body")?;

    let mut variants = vec![];
    while parser.current_token_kind() != TokenKind::CloseCurly {
        // A variant carries a payload only when its name is followed by ':'
        let has_payload = parser.next_token_kind() == TokenKind::Colon;
        let variant = parser
            .expect_error(TokenKind::Identifier, "expected a variant name or '}'")?
            .lexeme;

        let payload = if has_payload {
            parser.advance();
            Some(parse_type_expr(parser)?)
        } else {
            None
        };

        variants.push((variant, payload));
        parser.eat(TokenKind::Comma);
    }

    parser.expect(TokenKind::CloseCurly)?;
    parser.eat(TokenKind::Semicolon);

    log::trace!("enum {} has {} variants", name, variants.len());

    Ok(TypeDecl::Enum(EnumDecl {
        name,
        generic_params,
        variants,
        span: parser.span_from(start),
    }))
}

pub fn parse_type_alias_decl(parser: &mut Parser) -> Result<TypeDecl, Error> {
    let start = parser.expect(TokenKind::Type)?.span.start;
    let name = parser
        .expect_error(TokenKind::Identifier, "expected a type name after 'type'")?
        .lexeme;
    let generic_params = parse_generic_params(parser)?;

    parser.expect_error(TokenKind::Assignment, "expected '=' after the type name")?;
    let type_ = parse_type_expr(parser)?;
    parser.expect_error(TokenKind::Semicolon, "expected ';' after the type alias")?;

    Ok(TypeDecl::Alias(TypeAliasDecl {
        name,
        generic_params,
        type_,
        span: parser.span_from(start),
    }))
}
