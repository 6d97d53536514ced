//! Automaton construction passes.
//!
//! ```text
//! Node ─ThompsonBuilder→ ε-NFA ─eliminate_epsilons→ NFA ─determinize→ DFA
//! ```
//!
//! Each pass reads its input and returns a new graph.

mod epsilon_elim;
mod subset;
mod thompson;

#[cfg(test)]
mod subset_tests;

pub use epsilon_elim::{EliminationStats, eliminate_epsilons};
pub use subset::{SubsetStats, determinize};
pub use thompson::ThompsonBuilder;
