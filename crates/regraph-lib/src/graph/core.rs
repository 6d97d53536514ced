//! Directed labeled multigraph with a mirrored incoming index.
//!
//! Storage is insertion ordered (`indexmap`), so iteration order only depends
//! on the sequence of mutations. All removals use `shift_remove` to keep it
//! that way.

use std::collections::VecDeque;
use std::hash::Hash;

use indexmap::{IndexMap, IndexSet};

use super::vertex::{Edge, Label, Position};

/// Requirements on a vertex identifier.
pub trait Vertex: Clone + Eq + Hash {}

impl<T: Clone + Eq + Hash> Vertex for T {}

/// Automaton graph.
///
/// Invariants:
/// - `incoming` mirrors `outgoing`: `(l, t)` in `outgoing[s]` iff `(l, s)` in `incoming[t]`
/// - both maps hold an entry for every vertex, possibly empty
/// - `finals` and `layout` only mention vertices of the graph
///
/// `Clone` is a deep copy; graphs never share storage.
#[derive(Debug, Clone)]
pub struct Graph<V: Vertex> {
    outgoing: IndexMap<V, IndexSet<(Label, V)>>,
    incoming: IndexMap<V, IndexSet<(Label, V)>>,
    finals: IndexSet<V>,
    layout: IndexMap<V, Position>,
}

impl<V: Vertex> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> Graph<V> {
    pub fn new() -> Self {
        Self {
            outgoing: IndexMap::new(),
            incoming: IndexMap::new(),
            finals: IndexSet::new(),
            layout: IndexMap::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Mutation
    // -------------------------------------------------------------------------

    /// Add a vertex. Returns `false` if it was already present.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.outgoing.contains_key(&vertex) {
            return false;
        }
        self.outgoing.insert(vertex.clone(), IndexSet::new());
        self.incoming.insert(vertex, IndexSet::new());
        true
    }

    /// Remove a vertex with every edge touching it, its final mark and its
    /// layout hint. Returns `false` if it was not present.
    pub fn remove_vertex(&mut self, vertex: &V) -> bool {
        let Some(outgoing) = self.outgoing.shift_remove(vertex) else {
            return false;
        };
        for (label, target) in outgoing {
            if let Some(sources) = self.incoming.get_mut(&target) {
                sources.shift_remove(&(label, vertex.clone()));
            }
        }

        if let Some(incoming) = self.incoming.shift_remove(vertex) {
            for (label, source) in incoming {
                if let Some(targets) = self.outgoing.get_mut(&source) {
                    targets.shift_remove(&(label, vertex.clone()));
                }
            }
        }

        self.finals.shift_remove(vertex);
        self.layout.shift_remove(vertex);
        true
    }

    /// Add an edge, creating missing endpoints. Duplicate edges merge;
    /// returns `false` if the edge already existed.
    pub fn add_edge(&mut self, source: V, target: V, label: Label) -> bool {
        self.add_vertex(source.clone());
        self.add_vertex(target.clone());

        let added = self
            .outgoing
            .get_mut(&source)
            .is_some_and(|targets| targets.insert((label, target.clone())));
        if added && let Some(sources) = self.incoming.get_mut(&target) {
            sources.insert((label, source));
        }
        added
    }

    /// Remove one edge. Endpoints stay. Returns `false` if there was no such edge.
    pub fn remove_edge(&mut self, source: &V, target: &V, label: Label) -> bool {
        let removed = self
            .outgoing
            .get_mut(source)
            .is_some_and(|targets| targets.shift_remove(&(label, target.clone())));
        if removed && let Some(sources) = self.incoming.get_mut(target) {
            sources.shift_remove(&(label, source.clone()));
        }
        removed
    }

    /// Mark a vertex as accepting. Unknown vertices are ignored.
    pub fn mark_final(&mut self, vertex: V) -> bool {
        if !self.contains(&vertex) {
            return false;
        }
        self.finals.insert(vertex)
    }

    /// Attach a layout hint. Unknown vertices are ignored.
    pub fn set_position(&mut self, vertex: V, position: Position) -> bool {
        if !self.contains(&vertex) {
            return false;
        }
        self.layout.insert(vertex, position);
        true
    }

    pub fn clear_layout(&mut self) {
        self.layout.clear();
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    pub fn contains(&self, vertex: &V) -> bool {
        self.outgoing.contains_key(vertex)
    }

    pub fn vertex_count(&self) -> usize {
        self.outgoing.len()
    }

    pub fn edge_count(&self) -> usize {
        self.outgoing.values().map(IndexSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.outgoing.is_empty()
    }

    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.outgoing.keys()
    }

    pub fn edges(&self) -> impl Iterator<Item = Edge<&V>> {
        self.outgoing.iter().flat_map(|(source, targets)| {
            targets.iter().map(move |(label, target)| Edge {
                source,
                target,
                label: *label,
            })
        })
    }

    /// Outgoing `(label, target)` pairs; empty for unknown vertices.
    pub fn outgoing(&self, vertex: &V) -> impl Iterator<Item = (Label, &V)> + use<'_, V> {
        self.outgoing
            .get(vertex)
            .into_iter()
            .flatten()
            .map(|(label, target)| (*label, target))
    }

    /// Incoming `(label, source)` pairs; empty for unknown vertices.
    pub fn incoming(&self, vertex: &V) -> impl Iterator<Item = (Label, &V)> + use<'_, V> {
        self.incoming
            .get(vertex)
            .into_iter()
            .flatten()
            .map(|(label, source)| (*label, source))
    }

    pub fn has_incoming(&self, vertex: &V) -> bool {
        self.incoming.get(vertex).is_some_and(|s| !s.is_empty())
    }

    pub fn has_edge(&self, source: &V, target: &V, label: Label) -> bool {
        self.outgoing
            .get(source)
            .is_some_and(|targets| targets.contains(&(label, target.clone())))
    }

    /// Targets reachable from `vertex` over one `label` edge.
    pub fn targets(&self, vertex: &V, label: Label) -> impl Iterator<Item = &V> + use<'_, V> {
        self.outgoing(vertex)
            .filter(move |(l, _)| *l == label)
            .map(|(_, target)| target)
    }

    pub fn is_final(&self, vertex: &V) -> bool {
        self.finals.contains(vertex)
    }

    pub fn final_states(&self) -> impl Iterator<Item = &V> {
        self.finals.iter()
    }

    pub fn position(&self, vertex: &V) -> Option<Position> {
        self.layout.get(vertex).copied()
    }

    pub fn layout(&self) -> impl Iterator<Item = (&V, Position)> {
        self.layout.iter().map(|(v, p)| (v, *p))
    }

    /// Vertices reachable from `vertex` over zero or more ε edges,
    /// `vertex` first. Empty for unknown vertices.
    pub fn epsilon_closure(&self, vertex: &V) -> IndexSet<V> {
        let mut closure = IndexSet::new();
        if !self.contains(vertex) {
            return closure;
        }

        let mut stack = vec![vertex.clone()];
        while let Some(current) = stack.pop() {
            if !closure.insert(current.clone()) {
                continue;
            }
            for target in self.targets(&current, Label::Epsilon) {
                if !closure.contains(target) {
                    stack.push(target.clone());
                }
            }
        }
        closure
    }

    /// Simulate the automaton from `start` over `input`.
    ///
    /// Works for every stage: ε edges are followed through closures, and a
    /// deterministic graph simply keeps a single state in the frontier.
    pub fn accepts(&self, start: &V, input: &str) -> bool {
        let mut current = self.epsilon_closure(start);

        for c in input.chars() {
            let mut next = IndexSet::new();
            for state in &current {
                for target in self.targets(state, Label::Symbol(c)) {
                    next.extend(self.epsilon_closure(target));
                }
            }
            if next.is_empty() {
                return false;
            }
            current = next;
        }

        current.iter().any(|state| self.is_final(state))
    }

    /// Vertices reachable from `start` over edges of any label, BFS order.
    pub fn reachable_from(&self, start: &V) -> IndexSet<V> {
        let mut seen = IndexSet::new();
        if !self.contains(start) {
            return seen;
        }

        let mut queue = VecDeque::from([start.clone()]);
        seen.insert(start.clone());
        while let Some(current) = queue.pop_front() {
            for (_, target) in self.outgoing(&current) {
                if seen.insert(target.clone()) {
                    queue.push_back(target.clone());
                }
            }
        }
        seen
    }

    /// Remove every vertex not reachable from `start` and return how many
    /// were removed. With an unknown `start` the graph ends up empty.
    pub fn remove_inaccessible_vertices(&mut self, start: &V) -> usize {
        let reachable = self.reachable_from(start);
        let doomed: Vec<V> = self
            .vertices()
            .filter(|v| !reachable.contains(*v))
            .cloned()
            .collect();

        for vertex in &doomed {
            self.remove_vertex(vertex);
        }
        doomed.len()
    }
}
