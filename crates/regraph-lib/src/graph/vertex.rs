//! Vertex, label and edge types shared by all automata.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

/// Vertex of the ε-NFA and NFA.
///
/// `Start` and `Final` are the reserved entry and accepting sink of the
/// Thompson construction; everything else is minted from a counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum State {
    Start,
    Fresh(u32),
    Final,
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            State::Start => write!(f, "start"),
            State::Fresh(n) => write!(f, "{}", n),
            State::Final => write!(f, "final"),
        }
    }
}

/// DFA vertex: the set of NFA states it stands for.
///
/// Equality is set equality, so the same subset reached along different
/// paths is the same DFA state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateSet(BTreeSet<State>);

impl StateSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, state: State) -> bool {
        self.0.insert(state)
    }

    pub fn contains(&self, state: &State) -> bool {
        self.0.contains(state)
    }

    pub fn iter(&self) -> impl Iterator<Item = &State> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<State> for StateSet {
    fn from_iter<I: IntoIterator<Item = State>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a State> for StateSet {
    fn from_iter<I: IntoIterator<Item = &'a State>>(iter: I) -> Self {
        Self(iter.into_iter().copied().collect())
    }
}

impl fmt::Display for StateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, state) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", state)?;
        }
        write!(f, "}}")
    }
}

/// Edge label: an input symbol or ε.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Label {
    Symbol(char),
    Epsilon,
}

impl Label {
    pub fn is_epsilon(self) -> bool {
        matches!(self, Label::Epsilon)
    }

    pub fn symbol(self) -> Option<char> {
        match self {
            Label::Symbol(c) => Some(c),
            Label::Epsilon => None,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Symbol(c) => write!(f, "{}", c),
            Label::Epsilon => write!(f, "ε"),
        }
    }
}

impl Serialize for Label {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A directed labeled edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge<V> {
    pub source: V,
    pub target: V,
    pub label: Label,
}

impl<V: fmt::Display> fmt::Display for Edge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -{}-> {}", self.source, self.label, self.target)
    }
}

/// Layout hint for presentation. Never read by the pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
