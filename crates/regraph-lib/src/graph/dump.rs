//! Text dumps for inspection and snapshot tests.
//!
//! One line per vertex in ascending vertex order, edges sorted by label then
//! target, followed by the accepting set:
//!
//! ```text
//! start: a → 0
//! 0: b → final
//! final: ∅
//! accept: final
//! ```

use std::fmt::{Display, Write};

use super::core::{Graph, Vertex};
use super::vertex::Label;
use crate::Colors;

/// Printer for `Graph` with configurable output options.
pub struct GraphPrinter<'a, V: Vertex> {
    graph: &'a Graph<V>,
    colors: Colors,
    show_layout: bool,
}

impl<'a, V: Vertex + Ord + Display> GraphPrinter<'a, V> {
    pub fn new(graph: &'a Graph<V>) -> Self {
        Self {
            graph,
            colors: Colors::OFF,
            show_layout: false,
        }
    }

    pub fn colored(mut self, enabled: bool) -> Self {
        self.colors = Colors::new(enabled);
        self
    }

    /// Append each vertex's layout hint, when it has one.
    pub fn show_layout(mut self, show: bool) -> Self {
        self.show_layout = show;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    fn format(&self, w: &mut String) -> std::fmt::Result {
        let c = self.colors;

        let mut vertices: Vec<&V> = self.graph.vertices().collect();
        vertices.sort();

        for vertex in vertices {
            write!(w, "{}{}{}: ", c.vertex, vertex, c.reset)?;

            let mut edges: Vec<(Label, &V)> = self.graph.outgoing(vertex).collect();
            edges.sort();
            if edges.is_empty() {
                write!(w, "{}∅{}", c.muted, c.reset)?;
            }
            for (i, (label, target)) in edges.into_iter().enumerate() {
                if i > 0 {
                    write!(w, ", ")?;
                }
                self.format_label(w, label)?;
                write!(w, " {}→{} {}{}{}", c.muted, c.reset, c.vertex, target, c.reset)?;
            }

            if self.show_layout
                && let Some(p) = self.graph.position(vertex)
            {
                write!(w, "  {}@ ({}, {}){}", c.muted, p.x, p.y, c.reset)?;
            }
            writeln!(w)?;
        }

        let mut finals: Vec<&V> = self.graph.final_states().collect();
        finals.sort();
        write!(w, "accept: ")?;
        if finals.is_empty() {
            write!(w, "{}∅{}", c.muted, c.reset)?;
        }
        for (i, vertex) in finals.into_iter().enumerate() {
            if i > 0 {
                write!(w, ", ")?;
            }
            write!(w, "{}{}{}", c.accept, vertex, c.reset)?;
        }
        writeln!(w)
    }

    fn format_label(&self, w: &mut String, label: Label) -> std::fmt::Result {
        let c = self.colors;
        match label {
            Label::Symbol(symbol) => write!(w, "{}{}{}", c.symbol, symbol, c.reset),
            Label::Epsilon => write!(w, "{}ε{}", c.muted, c.reset),
        }
    }
}

impl<V: Vertex + Ord + Display> Graph<V> {
    pub fn dump(&self) -> String {
        GraphPrinter::new(self).dump()
    }
}
