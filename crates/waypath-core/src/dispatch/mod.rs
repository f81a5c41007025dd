//! Strategy dispatch
//!
//! Maps an algorithm identifier and its parameters to a strategy call.
//! Every configuration problem (unknown identifier, unknown vertex, partial
//! table, zero beam width) is reported here, before any search runs.

mod algorithm;
mod request;


use std::num::NonZeroUsize;
use std::time::Instant;

use tracing::debug;

pub use algorithm::{Algorithm, Requirements};
pub use request::{EdgeSpec, PathPayload, RawWeight, SearchRequest, SearchResponse, VertexLabel};

use crate::config::EngineConfig;
use crate::error::{Result, SearchError};
use crate::graph::{Graph, VertexTable};
use crate::strategy::{self, SearchResult};
use crate::{ensure_vertex, trace_time};

/// Optional parameters supplied with a search
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchParams {
    pub heuristic: Option<VertexTable>,
    pub costs: Option<VertexTable>,
    pub beam_width: Option<usize>,
}

/// Parameters after defaults are applied and requirements checked
struct ResolvedParams {
    heuristic: VertexTable,
    costs: VertexTable,
    beam_width: NonZeroUsize,
}

/// Routes requests to strategies
///
/// Holds only configuration; every call builds its own graph and frontier
/// state, so one dispatcher can serve any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    config: EngineConfig,
}

impl Dispatcher {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Build the request's graph and run the requested strategy on it
    #[tracing::instrument(skip(self, request), fields(algorithm = %request.algorithm, start = %request.start.as_str(), goal = %request.goal.as_str()))]
    pub fn dispatch(&self, request: &SearchRequest) -> Result<SearchResult> {
        let algorithm: Algorithm = request.algorithm.parse()?;
        let graph = request.build_graph(self.config.neighbor_order)?;

        let params = SearchParams {
            heuristic: request
                .heuristic
                .as_ref()
                .map(request::table_from_map)
                .transpose()?,
            costs: request
                .costs
                .as_ref()
                .map(request::table_from_map)
                .transpose()?,
            beam_width: request.beam_width,
        };

        self.run(
            &graph,
            algorithm,
            request.start.as_str(),
            request.goal.as_str(),
            &params,
        )
    }

    /// Like [`Dispatcher::dispatch`], shaped as the call contract response
    pub fn respond(&self, request: &SearchRequest) -> SearchResponse {
        let outcome = self.dispatch(request);
        if let Err(e) = &outcome {
            debug!(error = %e, "request rejected");
        }
        outcome.into()
    }

    /// Run `algorithm` on an already-built graph
    pub fn run(
        &self,
        graph: &Graph,
        algorithm: Algorithm,
        start: &str,
        goal: &str,
        params: &SearchParams,
    ) -> Result<SearchResult> {
        ensure_vertex!(graph, start);
        ensure_vertex!(graph, goal);

        let resolved = self.resolve(graph, algorithm, params)?;
        let started = Instant::now();

        // Labels borrowed from the graph so paths can share its lifetime
        let (start, goal) = match (graph.vertex(start), graph.vertex(goal)) {
            (Some(s), Some(g)) => (s, g),
            _ => return Err(SearchError::unknown_vertex(start)),
        };

        let result = match algorithm {
            Algorithm::Bms => strategy::british_museum(graph, start, goal),
            Algorithm::Dfs => strategy::depth_first(graph, start, goal),
            Algorithm::Bfs => strategy::breadth_first(graph, start, goal),
            Algorithm::HillClimbing => strategy::hill_climbing(graph, start, goal),
            Algorithm::BeamSearch => {
                strategy::beam_search(graph, start, goal, resolved.beam_width)
            }
            Algorithm::BranchAndBound => {
                strategy::branch_and_bound(graph, start, goal, &resolved.costs)
            }
            Algorithm::BranchAndBoundExtended => {
                strategy::branch_and_bound_extended(graph, start, goal, &resolved.costs)
            }
            Algorithm::BranchAndBoundHeuristic => strategy::branch_and_bound_heuristic(
                graph,
                start,
                goal,
                &resolved.costs,
                &resolved.heuristic,
            ),
            Algorithm::BestFirst => {
                strategy::best_first(graph, start, goal, &resolved.heuristic)
            }
            Algorithm::AStar => strategy::a_star(graph, start, goal, &resolved.heuristic),
            Algorithm::Oracle => strategy::oracle(graph, start, goal, &resolved.heuristic),
            Algorithm::AoStar => strategy::ao_star(graph, start, goal),
        };

        trace_time!(started, "search", algorithm = algorithm.as_str());
        debug!(found = result.is_found(), paths = result.paths().len(), "search finished");
        Ok(result)
    }

    /// Apply defaults and check the tables the algorithm reads are total
    fn resolve(
        &self,
        graph: &Graph,
        algorithm: Algorithm,
        params: &SearchParams,
    ) -> Result<ResolvedParams> {
        let needs = algorithm.requirements();

        let heuristic = self.table_or_default(
            graph,
            params.heuristic.as_ref(),
            self.config.default_heuristic,
        )?;
        if needs.heuristic {
            require_table(graph, &heuristic, "heuristic", algorithm)?;
        }

        let costs =
            self.table_or_default(graph, params.costs.as_ref(), self.config.default_cost)?;
        if needs.costs {
            require_table(graph, &costs, "costs", algorithm)?;
        }

        let width = params.beam_width.unwrap_or(self.config.default_beam_width);
        let beam_width = match NonZeroUsize::new(width) {
            Some(width) => width,
            None if needs.beam_width => {
                return Err(SearchError::invalid_value(
                    "beam width",
                    "0 (must be at least 1)",
                ))
            }
            // Ignored by every other strategy
            None => NonZeroUsize::MIN,
        };

        Ok(ResolvedParams {
            heuristic,
            costs,
            beam_width,
        })
    }

    fn table_or_default(
        &self,
        graph: &Graph,
        supplied: Option<&VertexTable>,
        default: f64,
    ) -> Result<VertexTable> {
        match supplied {
            Some(table) => {
                table.require_known(|v| graph.contains(v))?;
                Ok(table.clone())
            }
            None => Ok(VertexTable::uniform(graph.vertices(), default)),
        }
    }
}

/// An empty table is a missing parameter; a partial one names its first gap
fn require_table(
    graph: &Graph,
    table: &VertexTable,
    parameter: &str,
    algorithm: Algorithm,
) -> Result<()> {
    if table.is_empty() {
        return Err(SearchError::missing_parameter(parameter, algorithm));
    }
    table.require_total(graph.vertices(), parameter, algorithm.as_str())
}
