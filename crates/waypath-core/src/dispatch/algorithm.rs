use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::SearchError;

/// Algorithm identifiers accepted by the dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// British Museum: every simple path
    Bms,
    Dfs,
    Bfs,
    HillClimbing,
    BeamSearch,
    BranchAndBound,
    BranchAndBoundExtended,
    BranchAndBoundHeuristic,
    BestFirst,
    AStar,
    Oracle,
    AoStar,
}

/// Parameters an algorithm reads
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Requirements {
    pub heuristic: bool,
    pub costs: bool,
    pub beam_width: bool,
}

impl Algorithm {
    pub const ALL: [Algorithm; 12] = [
        Algorithm::Bms,
        Algorithm::Dfs,
        Algorithm::Bfs,
        Algorithm::HillClimbing,
        Algorithm::BeamSearch,
        Algorithm::BranchAndBound,
        Algorithm::BranchAndBoundExtended,
        Algorithm::BranchAndBoundHeuristic,
        Algorithm::BestFirst,
        Algorithm::AStar,
        Algorithm::Oracle,
        Algorithm::AoStar,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Bms => "bms",
            Algorithm::Dfs => "dfs",
            Algorithm::Bfs => "bfs",
            Algorithm::HillClimbing => "hill_climbing",
            Algorithm::BeamSearch => "beam_search",
            Algorithm::BranchAndBound => "branch_and_bound",
            Algorithm::BranchAndBoundExtended => "branch_and_bound_extended",
            Algorithm::BranchAndBoundHeuristic => "branch_and_bound_heuristic",
            Algorithm::BestFirst => "best_first",
            Algorithm::AStar => "a_star",
            Algorithm::Oracle => "oracle",
            Algorithm::AoStar => "ao_star",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Bms => "British Museum: enumerate every simple path",
            Algorithm::Dfs => "depth-first search",
            Algorithm::Bfs => "breadth-first search (fewest edges)",
            Algorithm::HillClimbing => "lexicographic hill climbing",
            Algorithm::BeamSearch => "fixed-width beam search",
            Algorithm::BranchAndBound => "branch and bound",
            Algorithm::BranchAndBoundExtended => "branch and bound with extended list",
            Algorithm::BranchAndBoundHeuristic => "branch and bound with heuristic bound",
            Algorithm::BestFirst => "greedy best-first by heuristic",
            Algorithm::AStar => "path length plus heuristic ranking",
            Algorithm::Oracle => "oracle (same ranking as a_star)",
            Algorithm::AoStar => "shortest sub-path recursion",
        }
    }

    pub fn requirements(&self) -> Requirements {
        match self {
            Algorithm::Bms
            | Algorithm::Dfs
            | Algorithm::Bfs
            | Algorithm::HillClimbing
            | Algorithm::AoStar => Requirements::default(),
            Algorithm::BeamSearch => Requirements {
                beam_width: true,
                ..Requirements::default()
            },
            Algorithm::BranchAndBound | Algorithm::BranchAndBoundExtended => Requirements {
                costs: true,
                ..Requirements::default()
            },
            Algorithm::BranchAndBoundHeuristic => Requirements {
                heuristic: true,
                costs: true,
                ..Requirements::default()
            },
            Algorithm::BestFirst | Algorithm::AStar | Algorithm::Oracle => Requirements {
                heuristic: true,
                ..Requirements::default()
            },
        }
    }

    /// True for strategies that report every path instead of one
    pub fn enumerates(&self) -> bool {
        matches!(self, Algorithm::Bms)
    }
}

impl FromStr for Algorithm {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        match normalized.as_str() {
            "british_museum" => return Ok(Algorithm::Bms),
            "beam" => return Ok(Algorithm::BeamSearch),
            _ => {}
        }
        Algorithm::ALL
            .into_iter()
            .find(|a| a.as_str() == normalized)
            .ok_or_else(|| SearchError::unknown_algorithm(s))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
