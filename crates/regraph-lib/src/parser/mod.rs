//! Regex parser.
//!
//! Grammar: alphabet symbols, implicit concatenation, `(` `)` grouping,
//! postfix `*` and infix `+` (union). `+` binds one atom on each side, so
//! `ab+c` reads as `a(b+c)`.

mod ast;
mod core;
mod error;

#[cfg(test)]
mod ast_tests;

pub use ast::Node;
pub use core::{DEFAULT_RECURSION_FUEL, Parser, START_MARKER};
pub use error::ParseError;

use crate::Alphabet;

/// Parse `regex` over `alphabet` with the default nesting limit.
pub fn parse(regex: &str, alphabet: &Alphabet) -> Result<Node, ParseError> {
    Parser::new(regex, alphabet).parse()
}
