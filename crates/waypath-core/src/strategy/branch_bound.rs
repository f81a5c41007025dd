//! Branch and bound over per-vertex costs
//!
//! The cost of a path is the sum of `costs[v]` over every vertex after the
//! start. All three variants backtrack exhaustively over an explicit frame
//! stack and keep the cheapest complete path seen; a later path replaces the
//! incumbent only when strictly cheaper.

use tracing::{debug, trace};

use super::frame::Frame;
use super::SearchResult;
use crate::graph::{GraphProvider, VertexTable};
use crate::path::{trivial_path, PartialPath, Path, Visited};

/// Best complete solution found so far, threaded through the search
#[derive(Debug, Clone)]
pub struct BestSoFar {
    cost: f64,
    path: Option<Path>,
}

impl BestSoFar {
    pub fn new() -> Self {
        Self {
            cost: f64::INFINITY,
            path: None,
        }
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Replace the incumbent if `cost` is strictly lower; true if replaced
    pub fn offer(&mut self, cost: f64, path: &PartialPath<'_>) -> bool {
        if cost < self.cost {
            self.cost = cost;
            self.path = Some(path.to_path());
            true
        } else {
            false
        }
    }

    pub fn into_result(self) -> SearchResult {
        SearchResult::from_path(self.path)
    }
}

impl Default for BestSoFar {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy)]
enum Bound<'t> {
    /// Same-path membership only
    Plain,
    /// A global visited set, added on enter and removed on backtrack
    ExtendedList,
    /// Prune unless `cost + costs[n] + heuristic[n]` beats the incumbent
    Heuristic(&'t VertexTable),
}

/// Plain branch and bound: exhaustive backtracking over simple paths.
#[tracing::instrument(level = "debug", skip(graph, costs))]
pub fn branch_and_bound<'g>(
    graph: &'g dyn GraphProvider,
    start: &'g str,
    goal: &str,
    costs: &VertexTable,
) -> SearchResult {
    search(graph, start, goal, costs, Bound::Plain)
}

/// Branch and bound with an extended list.
///
/// Membership is checked against one visited set shared by the whole search
/// (seeded with the start) instead of the path being extended.
#[tracing::instrument(level = "debug", skip(graph, costs))]
pub fn branch_and_bound_extended<'g>(
    graph: &'g dyn GraphProvider,
    start: &'g str,
    goal: &str,
    costs: &VertexTable,
) -> SearchResult {
    search(graph, start, goal, costs, Bound::ExtendedList)
}

/// Branch and bound pruned by a heuristic projection.
///
/// A neighbor is entered only if `accumulated + costs[n] + heuristic[n]` is
/// strictly below the best complete cost at the moment the neighbor is
/// considered. This is a pruning rule, not an optimality guarantee.
#[tracing::instrument(level = "debug", skip(graph, costs, heuristic))]
pub fn branch_and_bound_heuristic<'g>(
    graph: &'g dyn GraphProvider,
    start: &'g str,
    goal: &str,
    costs: &VertexTable,
    heuristic: &VertexTable,
) -> SearchResult {
    search(graph, start, goal, costs, Bound::Heuristic(heuristic))
}

fn search<'g>(
    graph: &'g dyn GraphProvider,
    start: &'g str,
    goal: &str,
    costs: &VertexTable,
    bound: Bound<'_>,
) -> SearchResult {
    if let Some(path) = trivial_path(start, goal) {
        return SearchResult::Path(path);
    }

    let extended = matches!(bound, Bound::ExtendedList);
    let mut visited = if extended {
        Visited::global()
    } else {
        Visited::per_path()
    };
    visited.insert(start);

    let mut best = BestSoFar::new();
    let mut pruned = 0usize;
    let mut stack = vec![Frame::enter(graph, PartialPath::start(start), 0.0)];

    while let Some(frame) = stack.last_mut() {
        let Some(neighbor) = frame.next_neighbor() else {
            if let Some(done) = stack.pop() {
                if extended {
                    visited.remove(done.vertex());
                }
            }
            continue;
        };
        if visited.blocks(&frame.path, neighbor) {
            continue;
        }

        let cost = frame.state + costs.value(neighbor);
        if let Bound::Heuristic(heuristic) = bound {
            if cost + heuristic.value(neighbor) >= best.cost() {
                pruned += 1;
                continue;
            }
        }

        let path = frame.path.extend(neighbor);
        if neighbor == goal {
            if best.offer(cost, &path) {
                trace!(cost, path = ?path.vertices(), "new incumbent");
            }
            continue;
        }

        if extended {
            visited.insert(neighbor);
        }
        stack.push(Frame::enter(graph, path, cost));
    }

    debug!(best_cost = best.cost(), pruned, "branch and bound finished");
    best.into_result()
}
