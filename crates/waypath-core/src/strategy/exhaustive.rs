use tracing::{debug, trace};

use super::frame::Frame;
use super::SearchResult;
use crate::graph::GraphProvider;
use crate::path::{PartialPath, Visited};

/// British Museum search: enumerate every simple path from `start` to `goal`.
///
/// Paths are reported in depth-first discovery order following the graph's
/// neighbor order. The search never stops early; it keeps walking outward from
/// the goal too, so with `start == goal` the trivial path `[start]` is
/// recorded and the rest of the graph is still explored.
#[tracing::instrument(level = "debug", skip(graph))]
pub fn british_museum<'g>(
    graph: &'g dyn GraphProvider,
    start: &'g str,
    goal: &str,
) -> SearchResult {
    let visited = Visited::per_path();
    let mut found = Vec::new();
    let mut expanded = 0usize;

    let root = PartialPath::start(start);
    if start == goal {
        found.push(root.to_path());
    }

    let mut stack = vec![Frame::enter(graph, root, ())];
    while let Some(frame) = stack.last_mut() {
        let Some(neighbor) = frame.next_neighbor() else {
            stack.pop();
            continue;
        };
        if visited.blocks(&frame.path, neighbor) {
            continue;
        }

        let path = frame.path.extend(neighbor);
        if neighbor == goal {
            trace!(path = ?path.vertices(), "goal reached");
            found.push(path.to_path());
        }
        expanded += 1;
        stack.push(Frame::enter(graph, path, ()));
    }

    debug!(paths = found.len(), expanded, "enumeration finished");
    SearchResult::from_paths(found)
}
