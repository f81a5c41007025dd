use super::Graph;
use super::types::LabelKey;

/// Trait for providing adjacency to search strategies
///
/// Neighbor order must be stable across calls: several strategies break ties
/// by the order neighbors are reported.
pub trait GraphProvider {
    fn contains(&self, vertex: &str) -> bool;

    /// Neighbors of `vertex` in the provider's declared order; empty for unknown vertices
    fn neighbors(&self, vertex: &str) -> Vec<&str>;

    fn edge_weight(&self, from: &str, to: &str) -> Option<f64>;

    fn vertex_count(&self) -> usize;

    /// Key used by strategies that rank vertices by label
    fn label_key<'a>(&'a self, vertex: &'a str) -> LabelKey<'a> {
        LabelKey::Text(vertex)
    }
}

impl GraphProvider for Graph {
    fn contains(&self, vertex: &str) -> bool {
        Graph::contains(self, vertex)
    }

    fn neighbors(&self, vertex: &str) -> Vec<&str> {
        Graph::neighbors(self, vertex).collect()
    }

    fn edge_weight(&self, from: &str, to: &str) -> Option<f64> {
        Graph::edge_weight(self, from, to).map(|w| w.value())
    }

    fn vertex_count(&self) -> usize {
        Graph::vertex_count(self)
    }

    fn label_key<'a>(&'a self, vertex: &'a str) -> LabelKey<'a> {
        Graph::label_key(self, vertex)
    }
}
