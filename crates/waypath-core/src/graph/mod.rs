//! Graph model for search
//!
//! Provides the weighted undirected graph the strategies traverse:
//! - `model`: the concrete adjacency-list graph
//! - `traversal`: the `GraphProvider` capability strategies are written against
//! - `types`: edge weights and per-vertex tables (heuristic, cost)

pub mod model;
pub mod traversal;
pub mod types;

pub use model::Graph;
pub use traversal::GraphProvider;
pub use types::{LabelKey, Vertex, VertexTable, Weight};
