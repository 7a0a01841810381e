//! Type declarations.
//!
//! The three kinds of top-level item a program is made of. Generic
//! parameters are kept as bare symbols; interpreting them is left to
//! semantic analysis.

use crate::Span;

use super::{ast::TypeExpr, types::SymbolTypeExpr};

/// Record Declaration
/// A product type with named fields, e.g. `record Point { x: i32, y: i32 }`.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordDecl {
    pub name: String,
    pub generic_params: Vec<SymbolTypeExpr>,
    /// Fields in declaration order.
    pub fields: Vec<(String, TypeExpr)>,
    pub span: Span,
}

impl RecordDecl {
    pub fn field(&self, name: &str) -> Option<&TypeExpr> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, type_)| type_)
    }
}

/// Enum Declaration
/// A discriminated union, e.g. `enum Option { Some: a, None }`. Variants
/// without a payload carry `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumDecl {
    pub name: String,
    pub generic_params: Vec<SymbolTypeExpr>,
    pub variants: Vec<(String, Option<TypeExpr>)>,
    pub span: Span,
}

impl EnumDecl {
    pub fn variant(&self, name: &str) -> Option<Option<&TypeExpr>> {
        self.variants
            .iter()
            .find(|(variant, _)| variant == name)
            .map(|(_, payload)| payload.as_ref())
    }
}

/// Type Alias Declaration
/// A new name for a type expression, e.g. `type Number = i32 | f32;`.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeAliasDecl {
    pub name: String,
    pub generic_params: Vec<SymbolTypeExpr>,
    pub type_: TypeExpr,
    pub span: Span,
}
