//! Read-only export of a graph for presentation layers.

use std::fmt::Display;

use indexmap::IndexMap;
use serde::Serialize;

use super::core::{Graph, Vertex};
use super::vertex::{Label, Position};

/// Vertices, labeled edges, accepting set and layout hints, with vertices
/// rendered to their display names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub vertices: Vec<String>,
    pub edges: Vec<EdgeSnapshot>,
    pub finals: Vec<String>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub layout: IndexMap<String, Position>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeSnapshot {
    pub source: String,
    pub target: String,
    pub label: Label,
}

impl<V: Vertex + Ord + Display> Graph<V> {
    /// Export in ascending vertex order; edges follow their source vertex.
    pub fn snapshot(&self) -> Snapshot {
        let mut vertices: Vec<&V> = self.vertices().collect();
        vertices.sort();

        let mut edges = Vec::with_capacity(self.edge_count());
        for source in &vertices {
            let mut outgoing: Vec<(Label, &V)> = self.outgoing(*source).collect();
            outgoing.sort();
            edges.extend(outgoing.into_iter().map(|(label, target)| EdgeSnapshot {
                source: source.to_string(),
                target: target.to_string(),
                label,
            }));
        }

        let mut finals: Vec<&V> = self.final_states().collect();
        finals.sort();

        let layout = vertices
            .iter()
            .filter_map(|v| self.position(*v).map(|p| (v.to_string(), p)))
            .collect();

        Snapshot {
            vertices: vertices.iter().map(|v| v.to_string()).collect(),
            edges,
            finals: finals.iter().map(|v| v.to_string()).collect(),
            layout,
        }
    }
}
