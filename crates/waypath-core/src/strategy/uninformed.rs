use tracing::{debug, trace};

use super::SearchResult;
use crate::frontier::{FifoQueue, Frontier, Stack};
use crate::graph::GraphProvider;
use crate::path::{trivial_path, PartialPath, Visited};

/// What a first-reach search did besides answering
pub(crate) struct Exploration<'g> {
    pub result: SearchResult,
    /// Vertices in the order they were expanded
    pub expanded: Vec<&'g str>,
}

/// Depth-first search over a stack frontier.
///
/// The goal is tested when a vertex's neighbors are generated, so the first
/// neighbor equal to `goal` ends the search. Vertices already expanded are
/// skipped.
#[tracing::instrument(level = "debug", skip(graph))]
pub fn depth_first<'g>(graph: &'g dyn GraphProvider, start: &'g str, goal: &str) -> SearchResult {
    first_reach(graph, start, goal, Stack::new()).result
}

/// Breadth-first search over a FIFO frontier.
///
/// Same expansion rule as [`depth_first`]. On an unweighted graph the path
/// has the fewest possible edges.
#[tracing::instrument(level = "debug", skip(graph))]
pub fn breadth_first<'g>(
    graph: &'g dyn GraphProvider,
    start: &'g str,
    goal: &str,
) -> SearchResult {
    first_reach(graph, start, goal, FifoQueue::new()).result
}

pub(crate) fn first_reach<'g, F>(
    graph: &'g dyn GraphProvider,
    start: &'g str,
    goal: &str,
    mut frontier: F,
) -> Exploration<'g>
where
    F: Frontier<PartialPath<'g>>,
{
    let mut expanded = Vec::new();

    if let Some(path) = trivial_path(start, goal) {
        return Exploration {
            result: SearchResult::Path(path),
            expanded,
        };
    }

    let mut visited = Visited::global();
    frontier.push(PartialPath::start(start));

    while let Some(path) = frontier.pop() {
        let vertex = path.terminal();
        if !visited.insert(vertex) {
            continue;
        }
        expanded.push(vertex);
        trace!(vertex, frontier = frontier.len(), "expand");

        for neighbor in graph.neighbors(vertex) {
            if neighbor == goal {
                let found = path.extend(neighbor).to_path();
                debug!(edges = found.edge_count(), expanded = expanded.len(), "goal reached");
                return Exploration {
                    result: SearchResult::Path(found),
                    expanded,
                };
            }
            // Already-expanded vertices would be skipped on pop anyway
            if !visited.blocks(&path, neighbor) {
                frontier.push(path.extend(neighbor));
            }
        }
    }

    debug!(expanded = expanded.len(), "frontier exhausted");
    Exploration {
        result: SearchResult::NoPath,
        expanded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::Path;
    use crate::strategy::tests::{diamond, graph_of};

    #[test]
    fn test_bfs_diamond_follows_neighbor_order() {
        let graph = diamond();
        assert_eq!(
            breadth_first(&graph, "A", "D"),
            SearchResult::Path(Path::from(vec!["A", "B", "D"]))
        );
    }

    #[test]
    fn test_dfs_diamond_takes_last_pushed_branch() {
        let graph = diamond();
        // A pushes B then C; C pops first and sees D
        assert_eq!(
            depth_first(&graph, "A", "D"),
            SearchResult::Path(Path::from(vec!["A", "C", "D"]))
        );
    }

    #[test]
    fn test_bfs_prefers_fewest_edges() {
        let graph = graph_of(
            &["S", "A", "B", "C", "G"],
            &[("S", "A", 1), ("A", "B", 1), ("B", "G", 1), ("S", "C", 9), ("C", "G", 9)],
        );
        let result = breadth_first(&graph, "S", "G");
        assert_eq!(result.path().map(Path::edge_count), Some(2));
    }

    #[test]
    fn test_start_is_goal_expands_nothing() {
        let graph = diamond();
        let exploration = first_reach(&graph, "A", "A", Stack::new());
        assert_eq!(exploration.result, SearchResult::Path(Path::single("A")));
        assert!(exploration.expanded.is_empty());
    }

    #[test]
    fn test_unreachable_goal() {
        let graph = graph_of(&["A", "B", "C", "Z"], &[("A", "B", 1), ("B", "C", 1), ("C", "A", 1)]);
        assert_eq!(depth_first(&graph, "A", "Z"), SearchResult::NoPath);
        assert_eq!(breadth_first(&graph, "A", "Z"), SearchResult::NoPath);
    }

    #[test]
    fn test_no_vertex_expanded_twice() {
        let graph = graph_of(
            &["A", "B", "C", "D", "Z"],
            &[("A", "B", 1), ("A", "C", 1), ("B", "C", 1), ("C", "D", 1), ("B", "D", 1)],
        );
        for exploration in [
            first_reach(&graph, "A", "Z", Stack::new()),
            first_reach(&graph, "A", "Z", FifoQueue::new()),
        ] {
            let mut seen = exploration.expanded.clone();
            seen.sort_unstable();
            seen.dedup();
            assert_eq!(seen.len(), exploration.expanded.len());
            assert_eq!(seen.len(), 4);
        }
    }
}
