//! Epsilon elimination: ε-NFA to NFA.
//!
//! # Algorithm
//!
//! 1. Compute the ε-closure of every vertex
//! 2. Mark a vertex final if anything in its closure is final
//! 3. For every `u` in closure(v) and symbol edge `u -c-> w`, add
//!    `v -c-> w'` for every `w'` in closure(w). Symbol edges are read from
//!    the input graph, so replicated edges never feed further replication
//! 4. Drop every ε edge
//! 5. Prune vertices unreachable from `start`
//!
//! The input graph is never modified.

use indexmap::{IndexMap, IndexSet};
use log::{debug, trace};

use crate::graph::{Graph, Label, State};

/// Statistics from epsilon elimination.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EliminationStats {
    /// Vertices that became final through their closure.
    pub finals_propagated: usize,
    /// Symbol edges added by replication.
    pub edges_added: usize,
    /// ε edges dropped.
    pub epsilons_removed: usize,
    /// Vertices unreachable from `start` after the ε edges were gone.
    pub vertices_pruned: usize,
}

pub fn eliminate_epsilons(enfa: &Graph<State>) -> (Graph<State>, EliminationStats) {
    let mut stats = EliminationStats::default();
    let mut nfa = enfa.clone();

    let closures: IndexMap<State, IndexSet<State>> = enfa
        .vertices()
        .map(|v| (*v, enfa.epsilon_closure(v)))
        .collect();

    for (vertex, closure) in &closures {
        if !enfa.is_final(vertex) && closure.iter().any(|u| enfa.is_final(u)) {
            nfa.mark_final(*vertex);
            stats.finals_propagated += 1;
        }
    }

    for (vertex, closure) in &closures {
        for u in closure {
            for (label, w) in enfa.outgoing(u) {
                if label.is_epsilon() {
                    continue;
                }
                let Some(landing) = closures.get(w) else {
                    continue;
                };
                for target in landing {
                    if nfa.add_edge(*vertex, *target, label) {
                        trace!("replicate {} -{}-> {}", vertex, label, target);
                        stats.edges_added += 1;
                    }
                }
            }
        }
    }

    let epsilons: Vec<(State, State)> = nfa
        .edges()
        .filter(|e| e.label.is_epsilon())
        .inspect(|e| trace!("drop {e}"))
        .map(|e| (*e.source, *e.target))
        .collect();
    for (source, target) in &epsilons {
        nfa.remove_edge(source, target, Label::Epsilon);
    }
    stats.epsilons_removed = epsilons.len();

    stats.vertices_pruned = nfa.remove_inaccessible_vertices(&State::Start);

    debug!(
        "epsilon elimination: {} vertices, {} edges, {:?}",
        nfa.vertex_count(),
        nfa.edge_count(),
        stats
    );
    (nfa, stats)
}
