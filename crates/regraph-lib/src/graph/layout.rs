//! Layered layout hints for presentation.
//!
//! The anchor (usually the accepting sink) sits at the origin. Each step
//! backward along incoming edges moves one layer up; siblings of a layer
//! spread horizontally around their successor. Vertices with no path to the
//! anchor land in a row one layer below it.

use std::collections::VecDeque;

use indexmap::IndexMap;

use super::core::{Graph, Vertex};
use super::vertex::Position;

/// Vertical distance between layers.
pub const LAYER_GAP: f64 = 150.0;

/// Horizontal width shared by the predecessors of one vertex.
pub const SPREAD: f64 = 300.0;

impl<V: Vertex> Graph<V> {
    /// Replace all layout hints, anchoring the layout at `anchor`.
    pub fn assign_layout(&mut self, anchor: &V, origin: Position) {
        let mut placed: IndexMap<V, Position> = IndexMap::new();

        if self.contains(anchor) {
            placed.insert(anchor.clone(), origin);
            let mut queue = VecDeque::from([anchor.clone()]);

            while let Some(current) = queue.pop_front() {
                let Some(&at) = placed.get(&current) else {
                    continue;
                };

                let mut layer: Vec<V> = Vec::new();
                for (_, source) in self.incoming(&current) {
                    if !placed.contains_key(source) && !layer.contains(source) {
                        layer.push(source.clone());
                    }
                }

                let count = layer.len();
                for (i, source) in layer.into_iter().enumerate() {
                    let x = if count == 1 {
                        at.x
                    } else {
                        at.x - SPREAD / 2.0 + SPREAD * i as f64 / (count - 1) as f64
                    };
                    placed.insert(source.clone(), Position::new(x, at.y - LAYER_GAP));
                    queue.push_back(source);
                }
            }
        }

        let stragglers: Vec<V> = self
            .vertices()
            .filter(|v| !placed.contains_key(*v))
            .cloned()
            .collect();
        for (column, vertex) in stragglers.into_iter().enumerate() {
            let x = origin.x + SPREAD * column as f64;
            placed.insert(vertex, Position::new(x, origin.y + LAYER_GAP));
        }

        self.clear_layout();
        for (vertex, position) in placed {
            self.set_position(vertex, position);
        }
    }
}
