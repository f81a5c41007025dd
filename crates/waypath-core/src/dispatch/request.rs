//! Request and response shapes of the engine's call contract

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::NeighborOrder;
use crate::error::{Result, SearchError};
use crate::graph::{Graph, Vertex, VertexTable, Weight};
use crate::path::Path;
use crate::strategy::SearchResult;

/// Vertex label as it appears in a request: a string or an integer
///
/// Integer labels keep their number so strategies that rank by label order
/// them numerically; everywhere else a label is its decimal string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawLabel", into = "RawLabel")]
pub struct VertexLabel {
    text: Vertex,
    integer: Option<i64>,
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawLabel {
    Integer(i64),
    Text(String),
}

impl From<RawLabel> for VertexLabel {
    fn from(raw: RawLabel) -> Self {
        match raw {
            RawLabel::Integer(n) => VertexLabel::from(n),
            RawLabel::Text(text) => VertexLabel {
                text,
                integer: None,
            },
        }
    }
}

impl From<VertexLabel> for RawLabel {
    fn from(label: VertexLabel) -> Self {
        match label.integer {
            Some(n) => RawLabel::Integer(n),
            None => RawLabel::Text(label.text),
        }
    }
}

impl From<&str> for VertexLabel {
    fn from(label: &str) -> Self {
        VertexLabel {
            text: label.to_string(),
            integer: None,
        }
    }
}

impl From<i64> for VertexLabel {
    fn from(n: i64) -> Self {
        VertexLabel {
            text: n.to_string(),
            integer: Some(n),
        }
    }
}

impl VertexLabel {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The number, if the label was given as an integer
    pub fn integer(&self) -> Option<i64> {
        self.integer
    }
}

/// Edge weight as it appears in a request: a number or a numeric string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawWeight {
    Number(f64),
    Text(String),
}

impl RawWeight {
    fn resolve(&self) -> Result<Weight> {
        let value = match self {
            RawWeight::Number(n) => *n,
            RawWeight::Text(text) => text
                .trim()
                .parse::<f64>()
                .map_err(|_| SearchError::invalid_value("edge weight", text))?,
        };
        Weight::new(value)
    }
}

/// One undirected edge: `[u, v, weight]`, `[u, v]`, or `{"from", "to", "weight"}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EdgeSpec {
    Weighted(VertexLabel, VertexLabel, RawWeight),
    Unweighted(VertexLabel, VertexLabel),
    Object {
        from: VertexLabel,
        to: VertexLabel,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        weight: Option<RawWeight>,
    },
}

impl EdgeSpec {
    pub fn new(from: &str, to: &str, weight: f64) -> Self {
        EdgeSpec::Weighted(from.into(), to.into(), RawWeight::Number(weight))
    }

    pub fn resolve(&self) -> Result<(Vertex, Vertex, Weight)> {
        match self {
            EdgeSpec::Weighted(u, v, w) => Ok((u.text.clone(), v.text.clone(), w.resolve()?)),
            EdgeSpec::Unweighted(u, v) => Ok((u.text.clone(), v.text.clone(), Weight::DEFAULT)),
            EdgeSpec::Object { from, to, weight } => {
                let weight = match weight {
                    Some(w) => w.resolve()?,
                    None => Weight::DEFAULT,
                };
                Ok((from.text.clone(), to.text.clone(), weight))
            }
        }
    }
}

/// A search request: graph description, endpoints, algorithm and optional tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub vertices: Vec<VertexLabel>,

    #[serde(default)]
    pub edges: Vec<EdgeSpec>,

    pub algorithm: String,

    pub start: VertexLabel,

    pub goal: VertexLabel,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heuristic: Option<BTreeMap<String, f64>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub costs: Option<BTreeMap<String, f64>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beam_width: Option<usize>,
}

impl SearchRequest {
    pub fn new(
        vertices: &[&str],
        edges: Vec<EdgeSpec>,
        algorithm: &str,
        start: &str,
        goal: &str,
    ) -> Self {
        Self {
            vertices: vertices.iter().map(|v| VertexLabel::from(*v)).collect(),
            edges,
            algorithm: algorithm.to_string(),
            start: start.into(),
            goal: goal.into(),
            heuristic: None,
            costs: None,
            beam_width: None,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(SearchError::invalid_request)
    }

    /// Build the immutable graph this request describes
    pub fn build_graph(&self, order: NeighborOrder) -> Result<Graph> {
        if self.vertices.is_empty() {
            return Err(SearchError::invalid_request("graph has no vertices"));
        }
        let edges = self
            .edges
            .iter()
            .map(EdgeSpec::resolve)
            .collect::<Result<Vec<_>>>()?;

        let mut graph = Graph::with_order(order);
        for label in &self.vertices {
            match label.integer {
                Some(n) => graph.add_integer_vertex(n),
                None => graph.add_vertex(label.as_str()),
            };
        }
        for (u, v, weight) in edges {
            graph.add_edge(&u, &v, weight)?;
        }
        Ok(graph)
    }
}

/// Convert a request table into a [`VertexTable`], rejecting negative values.
/// Membership is checked later, when the dispatcher resolves the table.
pub(crate) fn table_from_map(map: &BTreeMap<String, f64>) -> Result<VertexTable> {
    let mut table = VertexTable::new();
    for (vertex, value) in map {
        table.insert(vertex.clone(), *value)?;
    }
    Ok(table)
}

/// Path payload: one path, or a list of paths for enumerating strategies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathPayload {
    Single(Vec<Vertex>),
    Many(Vec<Path>),
}

/// Response of the call contract: `{"path": ...}` or `{"error": "..."}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SearchResponse {
    Found { path: PathPayload },
    Failed { error: String },
}

impl SearchResponse {
    pub fn is_error(&self) -> bool {
        matches!(self, SearchResponse::Failed { .. })
    }

    pub fn to_json(&self) -> serde_json::Value {
        // Both variants are plain maps of strings and arrays
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl From<SearchResult> for SearchResponse {
    fn from(result: SearchResult) -> Self {
        let path = match result {
            SearchResult::Path(path) => PathPayload::Single(path.into_vec()),
            SearchResult::Paths(paths) => PathPayload::Many(paths),
            SearchResult::NoPath => PathPayload::Single(Vec::new()),
        };
        SearchResponse::Found { path }
    }
}

impl From<&SearchError> for SearchResponse {
    fn from(err: &SearchError) -> Self {
        SearchResponse::Failed {
            error: err.to_string(),
        }
    }
}

impl From<Result<SearchResult>> for SearchResponse {
    fn from(outcome: Result<SearchResult>) -> Self {
        match outcome {
            Ok(result) => result.into(),
            Err(err) => (&err).into(),
        }
    }
}
