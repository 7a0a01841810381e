//! Read-only traversal of the tree.
//!
//! Implement [`Visitor`] and override the `visit_*` methods for the nodes of
//! interest. Each default method calls the matching `walk_*` function, which
//! visits the node's children; an override that still wants the children
//! visited calls the `walk_*` function itself.
//!
//! Dispatch over node kinds is an exhaustive `match` in the `walk_*`
//! functions, so adding a node kind fails to compile until every walker
//! handles it.

use super::{
    ast::{Expr, LiteralExpr, NumberExpr, Program, TypeDecl, TypeExpr},
    declarations::{EnumDecl, RecordDecl, TypeAliasDecl},
    expressions::{FloatExpr, IntExpr},
    types::{ArrayTypeExpr, FuncTypeExpr, SumTypeExpr, SymbolTypeExpr, TupleTypeExpr},
};

pub trait Visitor {
    fn visit_program(&mut self, program: &Program) {
        walk_program(self, program);
    }

    fn visit_type_decl(&mut self, decl: &TypeDecl) {
        walk_type_decl(self, decl);
    }

    fn visit_record_decl(&mut self, decl: &RecordDecl) {
        walk_record_decl(self, decl);
    }

    fn visit_enum_decl(&mut self, decl: &EnumDecl) {
        walk_enum_decl(self, decl);
    }

    fn visit_type_alias_decl(&mut self, decl: &TypeAliasDecl) {
        walk_type_alias_decl(self, decl);
    }

    fn visit_type_expr(&mut self, type_: &TypeExpr) {
        walk_type_expr(self, type_);
    }

    fn visit_symbol_type(&mut self, type_: &SymbolTypeExpr) {
        walk_symbol_type(self, type_);
    }

    fn visit_tuple_type(&mut self, type_: &TupleTypeExpr) {
        walk_tuple_type(self, type_);
    }

    fn visit_sum_type(&mut self, type_: &SumTypeExpr) {
        walk_sum_type(self, type_);
    }

    fn visit_array_type(&mut self, type_: &ArrayTypeExpr) {
        walk_array_type(self, type_);
    }

    fn visit_func_type(&mut self, type_: &FuncTypeExpr) {
        walk_func_type(self, type_);
    }

    fn visit_expr(&mut self, expr: &Expr) {
        walk_expr(self, expr);
    }

    fn visit_int_expr(&mut self, _expr: &IntExpr) {}

    fn visit_float_expr(&mut self, _expr: &FloatExpr) {}
}

pub fn walk_program<V: Visitor + ?Sized>(visitor: &mut V, program: &Program) {
    for decl in &program.body {
        visitor.visit_type_decl(decl);
    }
}

pub fn walk_type_decl<V: Visitor + ?Sized>(visitor: &mut V, decl: &TypeDecl) {
    match decl {
        TypeDecl::Record(decl) => visitor.visit_record_decl(decl),
        TypeDecl::Enum(decl) => visitor.visit_enum_decl(decl),
        TypeDecl::Alias(decl) => visitor.visit_type_alias_decl(decl),
    }
}

pub fn walk_record_decl<V: Visitor + ?Sized>(visitor: &mut V, decl: &RecordDecl) {
    for param in &decl.generic_params {
        visitor.visit_symbol_type(param);
    }
    for (_, type_) in &decl.fields {
        visitor.visit_type_expr(type_);
    }
}

pub fn walk_enum_decl<V: Visitor + ?Sized>(visitor: &mut V, decl: &EnumDecl) {
    for param in &decl.generic_params {
        visitor.visit_symbol_type(param);
    }
    for (_, payload) in &decl.variants {
        if let Some(type_) = payload {
            visitor.visit_type_expr(type_);
        }
    }
}

pub fn walk_type_alias_decl<V: Visitor + ?Sized>(visitor: &mut V, decl: &TypeAliasDecl) {
    for param in &decl.generic_params {
        visitor.visit_symbol_type(param);
    }
    visitor.visit_type_expr(&decl.type_);
}

pub fn walk_type_expr<V: Visitor + ?Sized>(visitor: &mut V, type_: &TypeExpr) {
    match type_ {
        TypeExpr::Symbol(type_) => visitor.visit_symbol_type(type_),
        TypeExpr::Tuple(type_) => visitor.visit_tuple_type(type_),
        TypeExpr::Sum(type_) => visitor.visit_sum_type(type_),
        TypeExpr::Array(type_) => visitor.visit_array_type(type_),
        TypeExpr::Func(type_) => visitor.visit_func_type(type_),
    }
}

pub fn walk_symbol_type<V: Visitor + ?Sized>(visitor: &mut V, type_: &SymbolTypeExpr) {
    for arg in &type_.generic_args {
        visitor.visit_type_expr(arg);
    }
}

pub fn walk_tuple_type<V: Visitor + ?Sized>(visitor: &mut V, type_: &TupleTypeExpr) {
    for field in &type_.fields {
        visitor.visit_type_expr(field);
    }
}

pub fn walk_sum_type<V: Visitor + ?Sized>(visitor: &mut V, type_: &SumTypeExpr) {
    for variant in &type_.variants {
        visitor.visit_type_expr(variant);
    }
}

pub fn walk_array_type<V: Visitor + ?Sized>(visitor: &mut V, type_: &ArrayTypeExpr) {
    visitor.visit_type_expr(&type_.elem);
    visitor.visit_expr(&type_.size);
}

pub fn walk_func_type<V: Visitor + ?Sized>(visitor: &mut V, type_: &FuncTypeExpr) {
    for param in &type_.params {
        visitor.visit_type_expr(param);
    }
    visitor.visit_type_expr(&type_.ret);
}

pub fn walk_expr<V: Visitor + ?Sized>(visitor: &mut V, expr: &Expr) {
    match expr {
        Expr::Literal(LiteralExpr::Number(NumberExpr::Int(int))) => visitor.visit_int_expr(int),
        Expr::Literal(LiteralExpr::Number(NumberExpr::Float(float))) => {
            visitor.visit_float_expr(float)
        }
    }
}
