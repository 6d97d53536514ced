//! Thompson construction: syntax tree to ε-NFA.
//!
//! The graph grows backward from the accepting sink. Every node is built
//! "in front of" the vertex its caller hands it (`attach_to`) and returns
//! its own entry vertex, so a `Word` folds its children right to left.
//!
//! Invariants of the result:
//! - `start` is the unique entry and has no incoming edges
//! - `final` is the unique accepting vertex
//! - an entry returned to a caller has no incoming edges from outside the
//!   subtree that produced it

use log::{debug, trace};

use crate::graph::{Graph, Label, State};
use crate::parser::Node;

pub struct ThompsonBuilder {
    graph: Graph<State>,
    counter: u32,
}

impl Default for ThompsonBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ThompsonBuilder {
    pub fn new() -> Self {
        let mut graph = Graph::new();
        graph.add_vertex(State::Final);
        graph.mark_final(State::Final);
        Self { graph, counter: 0 }
    }

    pub fn build(mut self, ast: &Node) -> Graph<State> {
        let entry = self.attach(ast, State::Final);
        debug_assert_eq!(entry == State::Start, ast.has_start());
        if entry != State::Start {
            // no Start leaf, e.g. an empty regex or a leading `()`
            self.graph.add_edge(State::Start, entry, Label::Epsilon);
        }

        debug!(
            "thompson: {} vertices, {} edges",
            self.graph.vertex_count(),
            self.graph.edge_count()
        );
        self.graph
    }

    fn fresh(&mut self) -> State {
        let state = State::Fresh(self.counter);
        self.counter += 1;
        self.graph.add_vertex(state);
        state
    }

    fn attach(&mut self, node: &Node, attach_to: State) -> State {
        match node {
            Node::Start(symbol) => {
                self.graph
                    .add_edge(State::Start, attach_to, Label::Symbol(*symbol));
                State::Start
            }
            Node::Letter(symbol) => {
                let entry = self.fresh();
                self.graph.add_edge(entry, attach_to, Label::Symbol(*symbol));
                entry
            }
            Node::Word(children) if children.is_empty() => {
                let entry = self.fresh();
                self.graph.add_edge(entry, attach_to, Label::Epsilon);
                entry
            }
            Node::Word(children) => children
                .iter()
                .rev()
                .fold(attach_to, |next, child| self.attach(child, next)),
            Node::Union(left, right) => {
                let left = self.attach(left, attach_to);
                let right = self.attach(right, attach_to);
                self.join(left, right)
            }
            Node::Star(child) => self.repeat(child, attach_to),
        }
    }

    /// Single entry for two alternatives sharing an exit.
    fn join(&mut self, left: State, right: State) -> State {
        let entry = if left == State::Start || right == State::Start {
            let other = if left == State::Start { right } else { left };
            self.graph.add_edge(State::Start, other, Label::Epsilon);
            State::Start
        } else if !self.graph.has_incoming(&left) {
            self.graph.add_edge(left, right, Label::Epsilon);
            left
        } else if !self.graph.has_incoming(&right) {
            self.graph.add_edge(right, left, Label::Epsilon);
            right
        } else {
            // both entries sit on loops of their own branch
            let hub = self.fresh();
            self.graph.add_edge(hub, left, Label::Epsilon);
            self.graph.add_edge(hub, right, Label::Epsilon);
            hub
        };
        trace!("union {} | {} enters at {}", left, right, entry);
        entry
    }

    fn repeat(&mut self, child: &Node, attach_to: State) -> State {
        let repeat = self.fresh();
        let entry = self.attach(child, repeat);

        if entry != State::Start {
            self.graph.add_edge(repeat, entry, Label::Epsilon);
            self.graph.add_edge(repeat, attach_to, Label::Epsilon);
            return repeat;
        }

        // `start` must stay a pure source: `repeat` takes over its outgoing
        // edges to re-enter the body, and `start` gets the skip edge.
        let first: Vec<(Label, State)> = self
            .graph
            .outgoing(&State::Start)
            .map(|(label, target)| (label, *target))
            .collect();
        for (label, target) in first {
            self.graph.add_edge(repeat, target, label);
        }
        self.graph.add_edge(repeat, attach_to, Label::Epsilon);
        self.graph.add_edge(State::Start, attach_to, Label::Epsilon);
        State::Start
    }
}
