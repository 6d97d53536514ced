//! Regraph: compile small regular expressions into finite automata.
//!
//! The pipeline is strictly linear:
//!
//! ```text
//! regex → Node (parser) → ε-NFA (thompson) → NFA (epsilon_elim) → DFA (subset)
//! ```
//!
//! Every stage clones its input before transforming it, so all three graphs
//! stay available for inspection.
//!
//! # Example
//!
//! ```
//! use regraph_lib::{Alphabet, compile};
//!
//! let automata = compile("(ab)*", &Alphabet::default()).expect("valid regex");
//! assert!(automata.accepts("abab"));
//! assert!(!automata.accepts("aba"));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod alphabet;
pub mod colors;
pub mod compile;
pub mod graph;
pub mod parser;
pub mod pipeline;

#[cfg(test)]
mod alphabet_tests;

pub use alphabet::{Alphabet, AlphabetError};
pub use colors::Colors;
pub use graph::{Graph, GraphPrinter, Label, Position, Snapshot, State, StateSet};
pub use parser::{Node, ParseError, parse};
pub use pipeline::{Automata, Compiler, compile};

/// Errors that can occur while configuring or running the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The regex does not belong to the grammar.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The alphabet could not be built from the given symbols.
    #[error(transparent)]
    Alphabet(#[from] AlphabetError),
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;
