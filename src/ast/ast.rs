use crate::Span;

use super::{
    declarations::{EnumDecl, RecordDecl, TypeAliasDecl},
    expressions::{FloatExpr, IntExpr},
    types::{ArrayTypeExpr, FuncTypeExpr, SumTypeExpr, SymbolTypeExpr, TupleTypeExpr},
    visitor::Visitor,
};

/// Spanned Trait
///
/// Every node in the tree records the source range it was parsed from.
pub trait Spanned {
    /// Returns the span of the node.
    fn get_span(&self) -> &Span;
}

/// The root of a parsed source file.
///
/// Declarations are kept in source order. Cloning a program deep-copies
/// every declaration it owns.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub body: Vec<TypeDecl>,
}

impl Program {
    pub fn new() -> Self {
        Program { body: vec![] }
    }

    pub fn push(&mut self, decl: TypeDecl) {
        self.body.push(decl);
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TypeDecl> {
        self.body.iter()
    }

    /// Looks up the first declaration named `name`.
    pub fn find(&self, name: &str) -> Option<&TypeDecl> {
        self.body.iter().find(|decl| decl.name() == name)
    }

    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_program(self);
    }
}

/// Type Declarations
///
/// The top-level items of a program.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDecl {
    Record(RecordDecl),
    Enum(EnumDecl),
    Alias(TypeAliasDecl),
}

impl TypeDecl {
    pub fn name(&self) -> &str {
        match self {
            TypeDecl::Record(decl) => &decl.name,
            TypeDecl::Enum(decl) => &decl.name,
            TypeDecl::Alias(decl) => &decl.name,
        }
    }

    pub fn generic_params(&self) -> &[SymbolTypeExpr] {
        match self {
            TypeDecl::Record(decl) => &decl.generic_params,
            TypeDecl::Enum(decl) => &decl.generic_params,
            TypeDecl::Alias(decl) => &decl.generic_params,
        }
    }

    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_type_decl(self);
    }
}

impl Spanned for TypeDecl {
    fn get_span(&self) -> &Span {
        match self {
            TypeDecl::Record(decl) => &decl.span,
            TypeDecl::Enum(decl) => &decl.span,
            TypeDecl::Alias(decl) => &decl.span,
        }
    }
}

/// Type Expressions
///
/// Anything that can appear where a type is expected.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeExpr {
    Symbol(SymbolTypeExpr),
    Tuple(TupleTypeExpr),
    Sum(SumTypeExpr),
    Array(ArrayTypeExpr),
    Func(FuncTypeExpr),
}

impl TypeExpr {
    pub fn as_symbol(&self) -> Option<&SymbolTypeExpr> {
        match self {
            TypeExpr::Symbol(symbol) => Some(symbol),
            _ => None,
        }
    }

    /// Mutable access to the span of whichever node this is.
    pub fn span_mut(&mut self) -> &mut Span {
        match self {
            TypeExpr::Symbol(type_) => &mut type_.span,
            TypeExpr::Tuple(type_) => &mut type_.span,
            TypeExpr::Sum(type_) => &mut type_.span,
            TypeExpr::Array(type_) => &mut type_.span,
            TypeExpr::Func(type_) => &mut type_.span,
        }
    }

    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_type_expr(self);
    }
}

impl Spanned for TypeExpr {
    fn get_span(&self) -> &Span {
        match self {
            TypeExpr::Symbol(type_) => &type_.span,
            TypeExpr::Tuple(type_) => &type_.span,
            TypeExpr::Sum(type_) => &type_.span,
            TypeExpr::Array(type_) => &type_.span,
            TypeExpr::Func(type_) => &type_.span,
        }
    }
}

/// Expressions
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(LiteralExpr),
}

impl Expr {
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_expr(self);
    }
}

impl Spanned for Expr {
    fn get_span(&self) -> &Span {
        match self {
            Expr::Literal(literal) => literal.get_span(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LiteralExpr {
    Number(NumberExpr),
}

impl Spanned for LiteralExpr {
    fn get_span(&self) -> &Span {
        match self {
            LiteralExpr::Number(number) => number.get_span(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NumberExpr {
    Int(IntExpr),
    Float(FloatExpr),
}

impl Spanned for NumberExpr {
    fn get_span(&self) -> &Span {
        match self {
            NumberExpr::Int(int) => &int.span,
            NumberExpr::Float(float) => &float.span,
        }
    }
}

impl From<RecordDecl> for TypeDecl {
    fn from(decl: RecordDecl) -> Self {
        TypeDecl::Record(decl)
    }
}

impl From<EnumDecl> for TypeDecl {
    fn from(decl: EnumDecl) -> Self {
        TypeDecl::Enum(decl)
    }
}

impl From<TypeAliasDecl> for TypeDecl {
    fn from(decl: TypeAliasDecl) -> Self {
        TypeDecl::Alias(decl)
    }
}

impl From<SymbolTypeExpr> for TypeExpr {
    fn from(type_: SymbolTypeExpr) -> Self {
        TypeExpr::Symbol(type_)
    }
}

impl From<TupleTypeExpr> for TypeExpr {
    fn from(type_: TupleTypeExpr) -> Self {
        TypeExpr::Tuple(type_)
    }
}

impl From<SumTypeExpr> for TypeExpr {
    fn from(type_: SumTypeExpr) -> Self {
        TypeExpr::Sum(type_)
    }
}

impl From<ArrayTypeExpr> for TypeExpr {
    fn from(type_: ArrayTypeExpr) -> Self {
        TypeExpr::Array(type_)
    }
}

impl From<FuncTypeExpr> for TypeExpr {
    fn from(type_: FuncTypeExpr) -> Self {
        TypeExpr::Func(type_)
    }
}

impl From<IntExpr> for Expr {
    fn from(expr: IntExpr) -> Self {
        Expr::Literal(LiteralExpr::Number(NumberExpr::Int(expr)))
    }
}

impl From<FloatExpr> for Expr {
    fn from(expr: FloatExpr) -> Self {
        Expr::Literal(LiteralExpr::Number(NumberExpr::Float(expr)))
    }
}
