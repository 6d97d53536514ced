//! Subset construction: NFA to DFA.
//!
//! Worklist driven, so only subsets reachable from `{start}` are ever
//! materialized. A DFA state is identified by its member set; the same set
//! reached twice is the same state.

use std::collections::VecDeque;

use indexmap::IndexSet;
use log::{debug, trace};

use crate::Alphabet;
use crate::graph::{Graph, Label, State, StateSet};

/// Statistics from subset construction.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SubsetStats {
    pub states: usize,
    pub transitions: usize,
    pub pruned: usize,
}

/// Determinize an ε-free NFA over `alphabet`.
///
/// Symbols outside the alphabet are never followed. An NFA without a
/// `start` vertex yields an empty DFA.
pub fn determinize(nfa: &Graph<State>, alphabet: &Alphabet) -> (Graph<StateSet>, SubsetStats) {
    let mut stats = SubsetStats::default();
    let mut dfa = Graph::new();

    if !nfa.contains(&State::Start) {
        debug!("subset construction: NFA has no start vertex");
        return (dfa, stats);
    }

    let initial = StateSet::from_iter([State::Start]);
    dfa.add_vertex(initial.clone());

    let mut seen: IndexSet<StateSet> = IndexSet::from([initial.clone()]);
    let mut worklist = VecDeque::from([initial.clone()]);

    while let Some(current) = worklist.pop_front() {
        if current.iter().any(|s| nfa.is_final(s)) {
            dfa.mark_final(current.clone());
        }

        for symbol in alphabet.symbols() {
            let label = Label::Symbol(symbol);
            let next: StateSet = current
                .iter()
                .flat_map(|s| nfa.targets(s, label))
                .collect();
            if next.is_empty() {
                continue;
            }

            trace!("{} -{}-> {}", current, symbol, next);
            dfa.add_edge(current.clone(), next.clone(), label);
            if seen.insert(next.clone()) {
                worklist.push_back(next);
            }
        }
    }

    stats.pruned = dfa.remove_inaccessible_vertices(&initial);
    stats.states = dfa.vertex_count();
    stats.transitions = dfa.edge_count();

    debug!("subset construction: {:?}", stats);
    (dfa, stats)
}
