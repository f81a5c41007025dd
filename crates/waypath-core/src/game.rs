//! Depth-bounded minimax with alpha-beta pruning
//!
//! Evaluates a complete binary game tree whose leaves are given left to
//! right. The maximizer moves at depth 0 and the players alternate. Every
//! step is reported as a `debug!` event so the pruning can be followed with
//! `--verbose`.

use tracing::debug;

use crate::error::{Result, SearchError};

/// Which side moves at a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    Maximizer,
    Minimizer,
}

impl Player {
    fn other(self) -> Self {
        match self {
            Player::Maximizer => Player::Minimizer,
            Player::Minimizer => Player::Maximizer,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Player::Maximizer => "maximizer",
            Player::Minimizer => "minimizer",
        }
    }
}

/// What an evaluation touched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MinimaxTrace {
    /// Leaf indices in the order they were evaluated
    pub visited_leaves: Vec<usize>,
    /// Number of cutoffs taken
    pub prunings: usize,
}

/// Depth of the complete binary tree with `values` as its leaves
pub fn tree_depth(values: &[i64]) -> Result<u32> {
    if values.is_empty() || !values.len().is_power_of_two() {
        return Err(SearchError::invalid_value(
            "leaf values",
            format!("{} leaves (must be a non-zero power of two)", values.len()),
        ));
    }
    Ok(values.len().trailing_zeros())
}

/// Optimal value for the maximizer
pub fn minimax_alpha_beta(values: &[i64], max_depth: u32) -> Result<i64> {
    evaluate(values, max_depth).map(|(value, _)| value)
}

/// Optimal value together with the trace of the evaluation
pub fn evaluate(values: &[i64], max_depth: u32) -> Result<(i64, MinimaxTrace)> {
    let depth = tree_depth(values)?;
    if depth != max_depth {
        return Err(SearchError::invalid_value(
            "max depth",
            format!("{max_depth} (a tree of {} leaves has depth {depth})", values.len()),
        ));
    }

    let mut search = AlphaBeta {
        values,
        max_depth,
        trace: MinimaxTrace::default(),
    };
    let value = search.node(0, 0, Player::Maximizer, i64::MIN, i64::MAX);
    debug!(value, prunings = search.trace.prunings, "optimal value");
    Ok((value, search.trace))
}

struct AlphaBeta<'a> {
    values: &'a [i64],
    max_depth: u32,
    trace: MinimaxTrace,
}

impl AlphaBeta<'_> {
    fn node(
        &mut self,
        depth: u32,
        index: usize,
        player: Player,
        mut alpha: i64,
        mut beta: i64,
    ) -> i64 {
        if depth == self.max_depth {
            let value = self.values[index];
            debug!(depth, index, value, "leaf reached");
            self.trace.visited_leaves.push(index);
            return value;
        }

        let side = player.label();
        debug!(side, depth, alpha, beta, "entering node");

        let mut best = match player {
            Player::Maximizer => i64::MIN,
            Player::Minimizer => i64::MAX,
        };
        for child in [index * 2, index * 2 + 1] {
            let value = self.node(depth + 1, child, player.other(), alpha, beta);
            debug!(side, depth, value, best, "comparing");
            match player {
                Player::Maximizer => {
                    best = best.max(value);
                    alpha = alpha.max(best);
                    debug!(side, depth, alpha, "alpha updated");
                }
                Player::Minimizer => {
                    best = best.min(value);
                    beta = beta.min(best);
                    debug!(side, depth, beta, "beta updated");
                }
            }

            if beta <= alpha {
                debug!(side, depth, alpha, beta, "pruning remaining branches");
                self.trace.prunings += 1;
                break;
            }
        }

        debug!(side, depth, best, "selected");
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_example() {
        let values = [3, 5, 6, 9, 1, 2, 0, 1];
        assert_eq!(minimax_alpha_beta(&values, 3).unwrap(), 5);
    }

    #[test]
    fn test_classic_example_trace() {
        let values = [3, 5, 6, 9, 1, 2, 0, 1];
        let (value, trace) = evaluate(&values, 3).unwrap();
        assert_eq!(value, 5);
        assert_eq!(trace.visited_leaves, vec![0, 1, 2, 4, 5]);
        assert_eq!(trace.prunings, 2);
    }

    #[test]
    fn test_single_leaf() {
        assert_eq!(minimax_alpha_beta(&[42], 0).unwrap(), 42);
        assert_eq!(tree_depth(&[42]).unwrap(), 0);
    }

    #[test]
    fn test_two_leaves_maximizer_picks_larger() {
        let (value, trace) = evaluate(&[-4, 7], 1).unwrap();
        assert_eq!(value, 7);
        assert_eq!(trace.prunings, 0);
    }

    #[test]
    fn test_rejects_non_power_of_two() {
        let err = minimax_alpha_beta(&[1, 2, 3], 2).unwrap_err();
        assert!(matches!(err, SearchError::InvalidValue { .. }));
        assert!(tree_depth(&[]).is_err());
    }

    #[test]
    fn test_rejects_mismatched_depth() {
        let err = minimax_alpha_beta(&[1, 2, 3, 4], 3).unwrap_err();
        assert!(err.to_string().contains("max depth"));
    }

    /// Plain minimax without pruning
    fn reference(values: &[i64], depth: u32, index: usize, max: bool, max_depth: u32) -> i64 {
        if depth == max_depth {
            return values[index];
        }
        let left = reference(values, depth + 1, index * 2, !max, max_depth);
        let right = reference(values, depth + 1, index * 2 + 1, !max, max_depth);
        if max {
            left.max(right)
        } else {
            left.min(right)
        }
    }

    proptest::proptest! {
        #[test]
        fn prop_pruning_preserves_value(depth in 0u32..6, seed in proptest::collection::vec(-50i64..50, 32)) {
            let values = &seed[..1usize << depth];
            let (value, trace) = evaluate(values, depth).unwrap();
            proptest::prop_assert_eq!(value, reference(values, 0, 0, true, depth));
            proptest::prop_assert!(trace.visited_leaves.len() <= values.len());
        }
    }
}
