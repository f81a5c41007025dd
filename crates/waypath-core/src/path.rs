//! Path bookkeeping shared by the strategies
//!
//! `PartialPath` is the frontier-side value: extending it copies, so two
//! frontier entries sharing a prefix never observe each other's growth.
//! `Path` is the owned result handed back to callers.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::graph::Vertex;

/// A completed vertex path (first = start, last = goal)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path(Vec<Vertex>);

impl Path {
    pub fn new(vertices: Vec<Vertex>) -> Self {
        Path(vertices)
    }

    pub fn single(vertex: &str) -> Self {
        Path(vec![vertex.to_string()])
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<Vertex> {
        self.0
    }
}

impl From<Vec<&str>> for Path {
    fn from(vertices: Vec<&str>) -> Self {
        Path(vertices.into_iter().map(str::to_string).collect())
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" -> "))
    }
}

/// A path under construction, borrowing labels from the graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialPath<'g> {
    vertices: Vec<&'g str>,
}

impl<'g> PartialPath<'g> {
    pub fn start(vertex: &'g str) -> Self {
        Self {
            vertices: vec![vertex],
        }
    }

    /// A new path one vertex longer; `self` is left untouched
    pub fn extend(&self, vertex: &'g str) -> Self {
        let mut vertices = Vec::with_capacity(self.vertices.len() + 1);
        vertices.extend_from_slice(&self.vertices);
        vertices.push(vertex);
        Self { vertices }
    }

    pub fn contains(&self, vertex: &str) -> bool {
        self.vertices.iter().any(|v| *v == vertex)
    }

    pub fn terminal(&self) -> &'g str {
        // A PartialPath is never empty: it is only built by `start` and `extend`
        self.vertices[self.vertices.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertices(&self) -> &[&'g str] {
        &self.vertices
    }

    pub fn to_path(&self) -> Path {
        Path::from(self.vertices.clone())
    }
}

/// How a strategy decides a vertex may not be entered again
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitDiscipline {
    /// Only the vertices on the path being extended are off limits
    PerPath,
    /// A set shared by the whole search decides
    Global,
}

/// Visited-set bookkeeping under a declared discipline
#[derive(Debug, Clone)]
pub struct Visited<'g> {
    discipline: VisitDiscipline,
    set: HashSet<&'g str>,
}

impl<'g> Visited<'g> {
    pub fn new(discipline: VisitDiscipline) -> Self {
        Self {
            discipline,
            set: HashSet::new(),
        }
    }

    pub fn per_path() -> Self {
        Self::new(VisitDiscipline::PerPath)
    }

    pub fn global() -> Self {
        Self::new(VisitDiscipline::Global)
    }

    pub fn discipline(&self) -> VisitDiscipline {
        self.discipline
    }

    /// Record a vertex in the shared set; false if it was already there
    pub fn insert(&mut self, vertex: &'g str) -> bool {
        self.set.insert(vertex)
    }

    pub fn remove(&mut self, vertex: &str) -> bool {
        self.set.remove(vertex)
    }

    pub fn contains(&self, vertex: &str) -> bool {
        self.set.contains(vertex)
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Whether `vertex` may not be appended to `path` under this discipline
    pub fn blocks(&self, path: &PartialPath<'_>, vertex: &str) -> bool {
        match self.discipline {
            VisitDiscipline::PerPath => path.contains(vertex),
            VisitDiscipline::Global => self.set.contains(vertex),
        }
    }
}

/// The single-vertex answer every non-exhaustive strategy gives when start is goal
pub fn trivial_path(start: &str, goal: &str) -> Option<Path> {
    (start == goal).then(|| Path::single(start))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extend_copies() {
        let root = PartialPath::start("A");
        let left = root.extend("B");
        let right = root.extend("C");

        assert_eq!(root.vertices(), &["A"]);
        assert_eq!(left.vertices(), &["A", "B"]);
        assert_eq!(right.vertices(), &["A", "C"]);
        assert_eq!(right.terminal(), "C");
    }

    #[test]
    fn test_contains() {
        let path = PartialPath::start("A").extend("B");
        assert!(path.contains("A"));
        assert!(path.contains("B"));
        assert!(!path.contains("C"));
    }

    #[test]
    fn test_to_path_and_display() {
        let path = PartialPath::start("A").extend("B").extend("D").to_path();
        assert_eq!(path.to_string(), "A -> B -> D");
        assert_eq!(path.edge_count(), 2);
        assert_eq!(path.first(), Some("A"));
        assert_eq!(path.last(), Some("D"));
    }

    #[test]
    fn test_path_serializes_as_array() {
        let path = Path::from(vec!["A", "C"]);
        assert_eq!(serde_json::to_string(&path).unwrap(), r#"["A","C"]"#);
    }

    #[test]
    fn test_per_path_discipline_consults_path() {
        let mut visited = Visited::per_path();
        visited.insert("C");
        let path = PartialPath::start("A").extend("B");

        assert!(visited.blocks(&path, "A"));
        assert!(!visited.blocks(&path, "C"));
    }

    #[test]
    fn test_global_discipline_consults_set() {
        let mut visited = Visited::global();
        let path = PartialPath::start("A");
        assert!(!visited.blocks(&path, "A"));

        assert!(visited.insert("C"));
        assert!(!visited.insert("C"));
        assert!(visited.blocks(&path, "C"));

        assert!(visited.remove("C"));
        assert!(!visited.blocks(&path, "C"));
        assert!(visited.is_empty());
    }

    #[test]
    fn test_trivial_path() {
        assert_eq!(trivial_path("A", "A"), Some(Path::single("A")));
        assert_eq!(trivial_path("A", "B"), None);
    }
}
