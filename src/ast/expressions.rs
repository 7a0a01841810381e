use crate::Span;

// LITERALS

/// Integer Expression
/// Represents an integer literal in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct IntExpr {
    pub value: i64,
    pub span: Span,
}

/// Float Expression
/// Represents a literal with a fractional part, e.g. `2.5`.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatExpr {
    pub value: f64,
    pub span: Span,
}
