//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Beam width used when a request does not carry one
pub const DEFAULT_BEAM_WIDTH: usize = 2;

/// Per-vertex heuristic used when a request does not carry a table
pub const DEFAULT_HEURISTIC: f64 = 1.0;

/// Per-vertex cost used when a request does not carry a table
pub const DEFAULT_COST: f64 = 1.0;

/// Order in which a vertex reports its neighbors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NeighborOrder {
    /// The order the edges touching the vertex were first added
    #[default]
    Insertion,
    /// Lexicographic order of the neighbor labels
    Sorted,
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Beam width for `beam_search` when the request omits one
    #[serde(default = "default_beam_width")]
    pub default_beam_width: usize,

    /// Heuristic value assigned to every vertex when the request omits the table
    #[serde(default = "default_heuristic")]
    pub default_heuristic: f64,

    /// Cost value assigned to every vertex when the request omits the table
    #[serde(default = "default_cost")]
    pub default_cost: f64,

    /// Neighbor ordering for graphs built from requests
    #[serde(default)]
    pub neighbor_order: NeighborOrder,
}

fn default_beam_width() -> usize {
    DEFAULT_BEAM_WIDTH
}

fn default_heuristic() -> f64 {
    DEFAULT_HEURISTIC
}

fn default_cost() -> f64 {
    DEFAULT_COST
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_beam_width: DEFAULT_BEAM_WIDTH,
            default_heuristic: DEFAULT_HEURISTIC,
            default_cost: DEFAULT_COST,
            neighbor_order: NeighborOrder::default(),
        }
    }
}
