//! Labeled multigraph shared by every automaton in the pipeline.
//!
//! ```text
//! Node → Graph<State> (ε-NFA) → Graph<State> (NFA) → Graph<StateSet> (DFA)
//! ```
//!
//! The graph only changes through `add_vertex`, `remove_vertex`, `add_edge`,
//! `remove_edge`, final marking and layout hints, which keeps the incoming
//! index in sync with the outgoing one.

mod core;
mod dump;
mod layout;
mod snapshot;
mod vertex;

#[cfg(test)]
mod dump_tests;
#[cfg(test)]
mod layout_tests;

pub use core::{Graph, Vertex};
pub use dump::GraphPrinter;
pub use layout::{LAYER_GAP, SPREAD};
pub use snapshot::{EdgeSnapshot, Snapshot};
pub use vertex::{Edge, Label, Position, State, StateSet};
