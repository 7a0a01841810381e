//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. It handles:
//!
//! - Declaration parsing (records, enums, type aliases)
//! - Type parsing, including sum, tuple, array and function types
//! - Number literals used as array sizes
//!
//! Type expressions use NUD (null denotation) and LED (left denotation)
//! functions with binding power, so that `|` can extend a type that has
//! already been parsed.

pub mod decl;
pub mod expr;
pub mod lookups;
pub mod parser;
pub mod types;
