use tracing::{debug, trace};

use super::SearchResult;
use crate::frontier::{Frontier, Stack};
use crate::graph::GraphProvider;
use crate::path::{trivial_path, PartialPath, Visited};

/// Hill climbing over a stack, ranking neighbors lexicographically.
///
/// The goal is tested when a path is popped. Neighbors are sorted by label
/// (integer labels numerically) and pushed in ascending order, so the lexicographically greatest unvisited
/// neighbor is tried first. A vertex is marked visited when expanded and is
/// never pushed again, even if a later path would reach it more cheaply:
/// the climb can settle on a local optimum.
#[tracing::instrument(level = "debug", skip(graph))]
pub fn hill_climbing<'g>(
    graph: &'g dyn GraphProvider,
    start: &'g str,
    goal: &str,
) -> SearchResult {
    if let Some(path) = trivial_path(start, goal) {
        return SearchResult::Path(path);
    }

    let mut visited = Visited::global();
    let mut stack = Stack::with_item(PartialPath::start(start));

    while let Some(path) = stack.pop() {
        let vertex = path.terminal();
        if vertex == goal {
            debug!(edges = path.len() - 1, expanded = visited.len(), "goal reached");
            return SearchResult::Path(path.to_path());
        }
        visited.insert(vertex);

        let mut neighbors = graph.neighbors(vertex);
        neighbors.sort_by(|a, b| graph.label_key(a).cmp(&graph.label_key(b)));
        trace!(vertex, ?neighbors, "climb");

        for neighbor in neighbors {
            if !visited.blocks(&path, neighbor) {
                stack.push(path.extend(neighbor));
            }
        }
    }

    debug!(expanded = visited.len(), "no path");
    SearchResult::NoPath
}
