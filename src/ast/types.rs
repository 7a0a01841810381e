//! Type expression nodes.
//!
//! - Symbol types, optionally instantiated (`List<i32>`)
//! - Tuple types (`[i32, f64]`)
//! - Sum types (`i32 | f64`)
//! - Array types (`[i32; 4]`)
//! - Function types (`Fn(i32, f64) -> bool`)
//!
//! Children are boxed or stored in vectors and owned exclusively by their
//! parent, so `clone` produces a fully independent copy.

use crate::Span;

use super::ast::{Expr, TypeExpr};

/// Represents a named type reference that semantic analysis resolves later.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolTypeExpr {
    pub symbol: String,
    pub generic_args: Vec<TypeExpr>,
    pub span: Span,
}

impl SymbolTypeExpr {
    /// A symbol with no generic arguments.
    pub fn bare(symbol: impl Into<String>, span: Span) -> Self {
        SymbolTypeExpr {
            symbol: symbol.into(),
            generic_args: vec![],
            span,
        }
    }

    pub fn is_generic(&self) -> bool {
        !self.generic_args.is_empty()
    }
}

/// A positional product type.
#[derive(Debug, Clone, PartialEq)]
pub struct TupleTypeExpr {
    pub fields: Vec<TypeExpr>,
    pub span: Span,
}

/// A type that is one of several alternatives.
#[derive(Debug, Clone, PartialEq)]
pub struct SumTypeExpr {
    pub variants: Vec<TypeExpr>,
    pub span: Span,
}

/// A fixed size array. The size is an expression so that semantic analysis
/// can evaluate it.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayTypeExpr {
    pub elem: Box<TypeExpr>,
    pub size: Box<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FuncTypeExpr {
    pub params: Vec<TypeExpr>,
    pub ret: Box<TypeExpr>,
    pub span: Span,
}
