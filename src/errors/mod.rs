//! Error types and error handling for the front end.
//!
//! This module defines the errors produced while parsing. It includes:
//!
//! - Error structures carrying the offending source span
//! - Specific error variants for lexical and syntactic failures
//! - Error formatting as a single diagnostic line
//! - Helpful error messages and suggestions
//!
//! Parse routines return these errors instead of terminating; the caller
//! decides whether to abort.

pub mod errors;

#[cfg(test)]
mod tests;
