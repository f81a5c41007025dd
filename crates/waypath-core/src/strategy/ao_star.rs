use tracing::{debug, trace};

use super::frame::Frame;
use super::SearchResult;
use crate::graph::GraphProvider;
use crate::path::{trivial_path, PartialPath, Path, Visited};

/// Search labelled "AO*": shortest path by vertex count, found by recursion.
///
/// For each vertex, every neighbor's shortest sub-path to the goal is computed
/// and the shortest `[vertex] + sub-path` kept (the first found wins ties, in
/// neighbor order). The goal itself answers `[goal]` without being explored
/// further. There are no AND nodes: this is plain shortest-path recursion.
/// Recursion runs on an explicit frame stack, and vertices already on the
/// current path are not re-entered.
#[tracing::instrument(level = "debug", skip(graph))]
pub fn ao_star<'g>(graph: &'g dyn GraphProvider, start: &'g str, goal: &str) -> SearchResult {
    if let Some(path) = trivial_path(start, goal) {
        return SearchResult::Path(path);
    }

    let visited = Visited::per_path();
    // Frame state: the best sub-path found so far from the frame's vertex to the goal
    let mut stack: Vec<Frame<'g, Option<Vec<&'g str>>>> =
        vec![Frame::enter(graph, PartialPath::start(start), None)];
    let mut entered = 1usize;

    while let Some(frame) = stack.last_mut() {
        if let Some(neighbor) = frame.next_neighbor() {
            if visited.blocks(&frame.path, neighbor) {
                continue;
            }
            if neighbor == goal {
                offer(frame, &[neighbor]);
                continue;
            }
            let path = frame.path.extend(neighbor);
            entered += 1;
            stack.push(Frame::enter(graph, path, None));
            continue;
        }

        // Frame exhausted: hand its answer to the caller frame
        let Some(done) = stack.pop() else { break };
        let vertex = done.vertex();
        match (stack.last_mut(), done.state) {
            (Some(parent), Some(sub_path)) => {
                trace!(vertex, length = sub_path.len(), "sub-path returned");
                offer(parent, &sub_path);
            }
            (Some(_), None) => {}
            (None, best) => {
                debug!(entered, found = best.is_some(), "recursion finished");
                return SearchResult::from_path(best.map(Path::from));
            }
        }
    }

    SearchResult::NoPath
}

/// Offer `[frame vertex] + sub_path` as the frame's answer if strictly shorter
fn offer<'g>(frame: &mut Frame<'g, Option<Vec<&'g str>>>, sub_path: &[&'g str]) {
    let candidate_len = sub_path.len() + 1;
    if frame
        .state
        .as_ref()
        .is_some_and(|best| best.len() <= candidate_len)
    {
        return;
    }
    let mut candidate = Vec::with_capacity(candidate_len);
    candidate.push(frame.vertex());
    candidate.extend_from_slice(sub_path);
    frame.state = Some(candidate);
}
