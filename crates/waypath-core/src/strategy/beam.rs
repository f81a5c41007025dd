use std::num::NonZeroUsize;

use tracing::{debug, trace};

use super::SearchResult;
use crate::frontier::{Beam, Frontier};
use crate::graph::GraphProvider;
use crate::path::{trivial_path, PartialPath, Visited};

/// Beam search with a fixed width.
///
/// Each round tests every beam path for the goal (in rank order), extends
/// every path by each neighbor not already on it, then keeps only the `width`
/// candidates whose terminal vertex sorts lowest, integer labels numerically
/// (ties keep generation order).
/// An emptied beam means no path. Deliberately lossy: a discarded candidate is
/// never revisited.
#[tracing::instrument(level = "debug", skip(graph))]
pub fn beam_search<'g>(
    graph: &'g dyn GraphProvider,
    start: &'g str,
    goal: &str,
    width: NonZeroUsize,
) -> SearchResult {
    if let Some(path) = trivial_path(start, goal) {
        return SearchResult::Path(path);
    }

    let visited = Visited::per_path();
    let mut beam = Beam::with_width(width);
    beam.seed(PartialPath::start(start));

    let mut round = 0usize;
    while !beam.is_empty() {
        while let Some(path) = beam.pop() {
            let vertex = path.terminal();
            if vertex == goal {
                debug!(round, edges = path.len() - 1, "goal reached");
                return SearchResult::Path(path.to_path());
            }
            for neighbor in graph.neighbors(vertex) {
                if !visited.blocks(&path, neighbor) {
                    beam.push(path.extend(neighbor));
                }
            }
        }

        let discarded = beam.advance(|path| graph.label_key(path.terminal()));
        round += 1;
        trace!(round, kept = beam.len(), discarded, "beam advanced");
    }

    debug!(round, "beam emptied");
    SearchResult::NoPath
}
