//! `waypath minimax` - alpha-beta evaluation of a binary game tree

use serde_json::json;
use waypath_core::error::Result;
use waypath_core::game;

use crate::cli::{Cli, OutputFormat};

/// Execute the minimax command
pub fn execute(cli: &Cli, values: &[i64]) -> Result<()> {
    let depth = game::tree_depth(values)?;
    let (value, trace) = game::evaluate(values, depth)?;

    match cli.format {
        OutputFormat::Json => {
            let output = json!({
                "value": value,
                "depth": depth,
                "prunings": trace.prunings,
                "visited_leaves": trace.visited_leaves,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("Optimal value: {}", value);
            if !cli.quiet {
                println!(
                    "Leaves evaluated: {} of {}, prunings: {}",
                    trace.visited_leaves.len(),
                    values.len(),
                    trace.prunings
                );
            }
        }
    }
    Ok(())
}
