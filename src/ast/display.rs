// Deterministic textual rendering of the tree, for debugging output.
// The output is not guaranteed to parse back to the same tree.
use std::fmt;

use super::{
    ast::{Expr, LiteralExpr, NumberExpr, Program, TypeDecl, TypeExpr},
    declarations::{EnumDecl, RecordDecl, TypeAliasDecl},
    expressions::{FloatExpr, IntExpr},
    types::{ArrayTypeExpr, FuncTypeExpr, SumTypeExpr, SymbolTypeExpr, TupleTypeExpr},
};

/// One level of indentation.
pub const TAB: &str = "    ";

fn write_list<T: fmt::Display>(f: &mut fmt::Formatter, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

fn write_generic_params(f: &mut fmt::Formatter, params: &[SymbolTypeExpr]) -> fmt::Result {
    if !params.is_empty() {
        write!(f, "<")?;
        write_list(f, params)?;
        write!(f, ">")?;
    }
    Ok(())
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, decl) in self.body.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}", decl)?;
        }
        Ok(())
    }
}

impl fmt::Display for TypeDecl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TypeDecl::Record(decl) => write!(f, "{}", decl),
            TypeDecl::Enum(decl) => write!(f, "{}", decl),
            TypeDecl::Alias(decl) => write!(f, "{}", decl),
        }
    }
}

impl fmt::Display for RecordDecl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "record {}", self.name)?;
        write_generic_params(f, &self.generic_params)?;

        if self.fields.is_empty() {
            return write!(f, " {{}}");
        }

        writeln!(f, " {{")?;
        for (name, type_) in &self.fields {
            writeln!(f, "{}{}: {},", TAB, name, type_)?;
        }
        write!(f, "}}")
    }
}

impl fmt::Display for EnumDecl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "enum {}", self.name)?;
        write_generic_params(f, &self.generic_params)?;

        if self.variants.is_empty() {
            return write!(f, " {{}}");
        }

        writeln!(f, " {{")?;
        for (name, payload) in &self.variants {
            match payload {
                Some(type_) => writeln!(f, "{}{}: {},", TAB, name, type_)?,
                None => writeln!(f, "{}{},", TAB, name)?,
            }
        }
        write!(f, "}}")
    }
}

impl fmt::Display for TypeAliasDecl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "type {}", self.name)?;
        write_generic_params(f, &self.generic_params)?;
        write!(f, " = {};", self.type_)
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TypeExpr::Symbol(type_) => write!(f, "{}", type_),
            TypeExpr::Tuple(type_) => write!(f, "{}", type_),
            TypeExpr::Sum(type_) => write!(f, "{}", type_),
            TypeExpr::Array(type_) => write!(f, "{}", type_),
            TypeExpr::Func(type_) => write!(f, "{}", type_),
        }
    }
}

impl fmt::Display for SymbolTypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol)?;
        if self.is_generic() {
            write!(f, "<")?;
            write_list(f, &self.generic_args)?;
            write!(f, ">")?;
        }
        Ok(())
    }
}

impl fmt::Display for TupleTypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        write_list(f, &self.fields)?;
        write!(f, "]")
    }
}

impl fmt::Display for SumTypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, variant) in self.variants.iter().enumerate() {
            if i > 0 {
                write!(f, " | ")?;
            }
            // Nested sums and function types would otherwise read as part of
            // this sum.
            match variant {
                TypeExpr::Sum(_) | TypeExpr::Func(_) => write!(f, "({})", variant)?,
                _ => write!(f, "{}", variant)?,
            }
        }
        Ok(())
    }
}

impl fmt::Display for ArrayTypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}; {}]", self.elem, self.size)
    }
}

impl fmt::Display for FuncTypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Fn(")?;
        write_list(f, &self.params)?;
        write!(f, ") -> {}", self.ret)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Literal(LiteralExpr::Number(NumberExpr::Int(int))) => write!(f, "{}", int),
            Expr::Literal(LiteralExpr::Number(NumberExpr::Float(float))) => {
                write!(f, "{}", float)
            }
        }
    }
}

impl fmt::Display for IntExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl fmt::Display for FloatExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self.value)
    }
}
