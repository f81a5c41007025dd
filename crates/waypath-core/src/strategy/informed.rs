//! Priority-queue strategies: best-first, "A*" and oracle
//!
//! All three run the same loop: pop the lowest key, skip it if its vertex is
//! already closed, close it, stop at the goal, push every unclosed neighbor.
//! They differ only in the key pushed with each path.
//!
//! The A* and oracle key is `path length (vertices) + heuristic[neighbor]`.
//! It counts vertices rather than summing edge weights, so it is not canonical
//! A*: edge weights play no part in the ranking.

use tracing::{debug, trace};

use super::SearchResult;
use crate::frontier::PriorityFrontier;
use crate::graph::{GraphProvider, VertexTable};
use crate::path::{trivial_path, PartialPath, Visited};

/// Ranking key used by the priority-queue strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ranking {
    /// `heuristic[v]`
    Heuristic,
    /// `vertices on the path + heuristic[v]`; the start is keyed `0 + heuristic[start]`
    PathLengthPlusHeuristic,
}

impl Ranking {
    fn start_key(self, heuristic: &VertexTable, start: &str) -> f64 {
        heuristic.value(start)
    }

    fn key(self, heuristic: &VertexTable, path: &PartialPath<'_>) -> f64 {
        let h = heuristic.value(path.terminal());
        match self {
            Ranking::Heuristic => h,
            Ranking::PathLengthPlusHeuristic => path.len() as f64 + h,
        }
    }
}

/// Greedy best-first search ranked by heuristic alone.
#[tracing::instrument(level = "debug", skip(graph, heuristic))]
pub fn best_first<'g>(
    graph: &'g dyn GraphProvider,
    start: &'g str,
    goal: &str,
    heuristic: &VertexTable,
) -> SearchResult {
    ranked_search(graph, start, goal, heuristic, Ranking::Heuristic)
}

/// "A*" ranked by path length plus heuristic.
#[tracing::instrument(level = "debug", skip(graph, heuristic))]
pub fn a_star<'g>(
    graph: &'g dyn GraphProvider,
    start: &'g str,
    goal: &str,
    heuristic: &VertexTable,
) -> SearchResult {
    ranked_search(
        graph,
        start,
        goal,
        heuristic,
        Ranking::PathLengthPlusHeuristic,
    )
}

/// Oracle search: the same ranking as [`a_star`], kept as its own identifier.
#[tracing::instrument(level = "debug", skip(graph, heuristic))]
pub fn oracle<'g>(
    graph: &'g dyn GraphProvider,
    start: &'g str,
    goal: &str,
    heuristic: &VertexTable,
) -> SearchResult {
    ranked_search(
        graph,
        start,
        goal,
        heuristic,
        Ranking::PathLengthPlusHeuristic,
    )
}

pub fn ranked_search<'g>(
    graph: &'g dyn GraphProvider,
    start: &'g str,
    goal: &str,
    heuristic: &VertexTable,
    ranking: Ranking,
) -> SearchResult {
    if let Some(path) = trivial_path(start, goal) {
        return SearchResult::Path(path);
    }

    let mut open = PriorityFrontier::new();
    open.push_with_key(
        ranking.start_key(heuristic, start),
        PartialPath::start(start),
    );
    let mut closed = Visited::global();

    while let Some((key, path)) = open.pop_with_key() {
        let vertex = path.terminal();
        if !closed.insert(vertex) {
            continue;
        }
        trace!(vertex, key, "expand");

        if vertex == goal {
            debug!(edges = path.len() - 1, closed = closed.len(), "goal reached");
            return SearchResult::Path(path.to_path());
        }

        for neighbor in graph.neighbors(vertex) {
            if closed.blocks(&path, neighbor) {
                continue;
            }
            let next = path.extend(neighbor);
            open.push_with_key(ranking.key(heuristic, &next), next);
        }
    }

    debug!(closed = closed.len(), "open set exhausted");
    SearchResult::NoPath
}
