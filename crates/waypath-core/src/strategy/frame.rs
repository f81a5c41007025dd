//! Explicit call frames for the backtracking strategies
//!
//! A frame stands in for one level of recursion: the path that reached its
//! vertex, the vertex's neighbors, a cursor into them, and whatever per-level
//! state the strategy carries (accumulated cost, best sub-path).

use crate::graph::GraphProvider;
use crate::path::PartialPath;

pub(crate) struct Frame<'g, S> {
    pub path: PartialPath<'g>,
    pub state: S,
    neighbors: Vec<&'g str>,
    next: usize,
}

impl<'g, S> Frame<'g, S> {
    pub fn enter(graph: &'g dyn GraphProvider, path: PartialPath<'g>, state: S) -> Self {
        let neighbors = graph.neighbors(path.terminal());
        Self {
            path,
            state,
            neighbors,
            next: 0,
        }
    }

    pub fn vertex(&self) -> &'g str {
        self.path.terminal()
    }

    pub fn next_neighbor(&mut self) -> Option<&'g str> {
        let neighbor = self.neighbors.get(self.next).copied();
        if neighbor.is_some() {
            self.next += 1;
        }
        neighbor
    }
}
