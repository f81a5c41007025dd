//! Search strategies
//!
//! Every strategy takes a graph, a start and a goal (plus the tables it needs)
//! and returns a [`SearchResult`]. None of them fail at runtime: an
//! unreachable goal is `NoPath`. Parameter validation happens in the
//! dispatcher before a strategy is invoked.
//!
//! - `exhaustive`: British Museum enumeration of every simple path
//! - `uninformed`: depth-first and breadth-first
//! - `hill_climbing`: lexicographic depth-first climb without reconsideration
//! - `beam`: fixed-width beam
//! - `branch_bound`: plain, extended-list, and heuristic-bounded branch and bound
//! - `informed`: best-first, "A*" and oracle over a priority frontier
//! - `ao_star`: shortest sub-path recursion labelled AO*

pub mod ao_star;
pub mod beam;
pub mod branch_bound;
pub mod exhaustive;
pub mod hill_climbing;
pub mod informed;
pub mod uninformed;

mod frame;

#[cfg(test)]
mod tests;

pub use ao_star::ao_star;
pub use beam::beam_search;
pub use branch_bound::{branch_and_bound, branch_and_bound_extended, branch_and_bound_heuristic};
pub use exhaustive::british_museum;
pub use hill_climbing::hill_climbing;
pub use informed::{a_star, best_first, oracle, Ranking};
pub use uninformed::{breadth_first, depth_first};

use serde::Serialize;

use crate::path::Path;

/// Outcome of one search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SearchResult {
    /// A single path from start to goal
    Path(Path),
    /// Every path found by an enumerating strategy, in discovery order
    Paths(Vec<Path>),
    /// The goal is unreachable under the strategy's rules
    NoPath,
}

impl SearchResult {
    pub fn from_path(path: Option<Path>) -> Self {
        path.map_or(SearchResult::NoPath, SearchResult::Path)
    }

    /// An empty enumeration collapses to `NoPath`
    pub fn from_paths(paths: Vec<Path>) -> Self {
        if paths.is_empty() {
            SearchResult::NoPath
        } else {
            SearchResult::Paths(paths)
        }
    }

    pub fn is_found(&self) -> bool {
        !matches!(self, SearchResult::NoPath)
    }

    /// The single path, or the first enumerated one
    pub fn path(&self) -> Option<&Path> {
        match self {
            SearchResult::Path(path) => Some(path),
            SearchResult::Paths(paths) => paths.first(),
            SearchResult::NoPath => None,
        }
    }

    /// All paths carried by the result
    pub fn paths(&self) -> Vec<&Path> {
        match self {
            SearchResult::Path(path) => vec![path],
            SearchResult::Paths(paths) => paths.iter().collect(),
            SearchResult::NoPath => Vec::new(),
        }
    }
}
