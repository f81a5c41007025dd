use std::collections::HashMap;

use crate::error::{Result, SearchError};

/// Vertex label
pub type Vertex = String;

/// Sort key of a vertex label
///
/// Labels given as integers order numerically and before textual labels;
/// textual labels order by their bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LabelKey<'a> {
    Integer(i64),
    Text(&'a str),
}

/// Weight of an undirected edge
///
/// Always finite and non-negative. Unweighted strategies ignore it.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Weight(f64);

impl Weight {
    pub const DEFAULT: Weight = Weight(1.0);

    pub fn new(weight: f64) -> Result<Self> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(SearchError::invalid_value("edge weight", weight));
        }
        Ok(Weight(weight))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<u32> for Weight {
    fn from(weight: u32) -> Self {
        Weight(weight as f64)
    }
}

/// Mapping from vertex to a non-negative number (heuristic or cost table)
///
/// A table may be partial while it is being assembled. Strategies that need it
/// receive it only after [`VertexTable::require_total`] has succeeded, so
/// [`VertexTable::value`] never has to guess.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VertexTable {
    values: HashMap<Vertex, f64>,
}

impl VertexTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The same value for every given vertex
    pub fn uniform<'a>(vertices: impl IntoIterator<Item = &'a str>, value: f64) -> Self {
        Self {
            values: vertices
                .into_iter()
                .map(|v| (v.to_string(), value))
                .collect(),
        }
    }

    pub fn insert(&mut self, vertex: impl Into<Vertex>, value: f64) -> Result<()> {
        if !value.is_finite() || value < 0.0 {
            return Err(SearchError::invalid_value("table value", value));
        }
        self.values.insert(vertex.into(), value);
        Ok(())
    }

    pub fn get(&self, vertex: &str) -> Option<f64> {
        self.values.get(vertex).copied()
    }

    /// Value for a vertex of a table already checked with `require_total`.
    /// Vertices outside the table read as zero.
    pub fn value(&self, vertex: &str) -> f64 {
        self.get(vertex).unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Fail with `MissingEntry` on the first vertex (in the given order) lacking a value
    pub fn require_total<'a>(
        &self,
        vertices: impl IntoIterator<Item = &'a str>,
        parameter: &str,
        algorithm: &str,
    ) -> Result<()> {
        for vertex in vertices {
            if !self.values.contains_key(vertex) {
                return Err(SearchError::missing_entry(parameter, algorithm, vertex));
            }
        }
        Ok(())
    }

    /// Fail with `UnknownVertex` if the table names a vertex `known` rejects
    pub fn require_known(&self, known: impl Fn(&str) -> bool) -> Result<()> {
        let mut unknown: Vec<&str> = self
            .values
            .keys()
            .map(String::as_str)
            .filter(|v| !known(v))
            .collect();
        unknown.sort_unstable();
        match unknown.first() {
            Some(vertex) => Err(SearchError::unknown_vertex(vertex)),
            None => Ok(()),
        }
    }
}
