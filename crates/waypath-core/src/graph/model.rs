//! Adjacency-list graph with deterministic neighbor order

use std::collections::HashMap;

use crate::config::NeighborOrder;
use crate::error::{Result, SearchError};
use crate::graph::types::{LabelKey, Vertex, Weight};

/// Undirected weighted graph
///
/// Vertices are interned into dense indices; each adjacency list holds
/// `(neighbor index, weight)` pairs in the graph's [`NeighborOrder`].
/// Vertices added with [`Graph::add_integer_vertex`] remember their number
/// so they sort numerically.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    order: NeighborOrder,
    vertices: Vec<Vertex>,
    integers: Vec<Option<i64>>,
    index: HashMap<Vertex, usize>,
    adjacency: Vec<Vec<(usize, Weight)>>,
    edge_count: usize,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_order(order: NeighborOrder) -> Self {
        Self {
            order,
            ..Self::default()
        }
    }

    pub fn order(&self) -> NeighborOrder {
        self.order
    }

    /// Add a vertex; returns false if it was already present
    pub fn add_vertex(&mut self, vertex: impl Into<Vertex>) -> bool {
        self.intern(vertex.into(), None)
    }

    /// Add a vertex labelled by an integer; its label is the decimal string
    pub fn add_integer_vertex(&mut self, number: i64) -> bool {
        self.intern(number.to_string(), Some(number))
    }

    fn intern(&mut self, vertex: Vertex, integer: Option<i64>) -> bool {
        if self.index.contains_key(&vertex) {
            return false;
        }
        self.index.insert(vertex.clone(), self.vertices.len());
        self.vertices.push(vertex);
        self.integers.push(integer);
        self.adjacency.push(Vec::new());
        true
    }

    /// Add an undirected edge between two existing vertices.
    /// Re-adding an edge replaces its weight and keeps its position.
    pub fn add_edge(&mut self, u: &str, v: &str, weight: Weight) -> Result<()> {
        let ui = self.require_index(u)?;
        let vi = self.require_index(v)?;

        if self.link(ui, vi, weight) {
            self.edge_count += 1;
        }
        if ui != vi {
            self.link(vi, ui, weight);
        }
        Ok(())
    }

    /// Insert or update `to` in `from`'s adjacency; true if inserted
    fn link(&mut self, from: usize, to: usize, weight: Weight) -> bool {
        if let Some(entry) = self.adjacency[from].iter_mut().find(|(n, _)| *n == to) {
            entry.1 = weight;
            return false;
        }

        let position = match self.order {
            NeighborOrder::Insertion => self.adjacency[from].len(),
            NeighborOrder::Sorted => {
                let label = self.key_at(to);
                self.adjacency[from].partition_point(|(n, _)| self.key_at(*n) < label)
            }
        };
        self.adjacency[from].insert(position, (to, weight));
        true
    }

    fn key_at(&self, i: usize) -> LabelKey<'_> {
        match self.integers[i] {
            Some(number) => LabelKey::Integer(number),
            None => LabelKey::Text(&self.vertices[i]),
        }
    }

    /// Sort key of `vertex`; unknown vertices sort as text
    pub fn label_key<'a>(&'a self, vertex: &'a str) -> LabelKey<'a> {
        match self.index.get(vertex) {
            Some(&i) => self.key_at(i),
            None => LabelKey::Text(vertex),
        }
    }

    fn require_index(&self, vertex: &str) -> Result<usize> {
        self.index
            .get(vertex)
            .copied()
            .ok_or_else(|| SearchError::unknown_vertex(vertex))
    }

    /// The graph's own copy of a label
    pub fn vertex(&self, label: &str) -> Option<&str> {
        self.index.get(label).map(|&i| self.vertices[i].as_str())
    }

    pub fn contains(&self, vertex: &str) -> bool {
        self.index.contains_key(vertex)
    }

    /// Neighbors of `vertex` in the graph's neighbor order; empty for unknown vertices
    pub fn neighbors<'a>(&'a self, vertex: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.index
            .get(vertex)
            .map(|&i| self.adjacency[i].as_slice())
            .unwrap_or_default()
            .iter()
            .map(move |(n, _)| self.vertices[*n].as_str())
    }

    pub fn edge_weight(&self, u: &str, v: &str) -> Option<Weight> {
        let ui = *self.index.get(u)?;
        let vi = *self.index.get(v)?;
        self.adjacency[ui]
            .iter()
            .find(|(n, _)| *n == vi)
            .map(|(_, w)| *w)
    }

    /// Vertices in the order they were added
    pub fn vertices(&self) -> impl Iterator<Item = &str> {
        self.vertices.iter().map(String::as_str)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}
