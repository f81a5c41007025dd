//! `waypath algorithms` - list supported identifiers

use serde_json::json;
use waypath_core::dispatch::{Algorithm, Requirements};
use waypath_core::error::Result;

use crate::cli::{Cli, OutputFormat};

/// Execute the algorithms command
pub fn execute(cli: &Cli) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            let entries: Vec<_> = Algorithm::ALL
                .iter()
                .map(|algorithm| {
                    json!({
                        "name": algorithm.as_str(),
                        "description": algorithm.description(),
                        "requires": required_parameters(&algorithm.requirements()),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        OutputFormat::Human => {
            for algorithm in Algorithm::ALL {
                let requires = required_parameters(&algorithm.requirements());
                if requires.is_empty() || cli.quiet {
                    println!("{:<28} {}", algorithm.as_str(), algorithm.description());
                } else {
                    println!(
                        "{:<28} {} (reads {})",
                        algorithm.as_str(),
                        algorithm.description(),
                        requires.join(", ")
                    );
                }
            }
        }
    }
    Ok(())
}

fn required_parameters(requirements: &Requirements) -> Vec<&'static str> {
    let mut names = Vec::new();
    if requirements.heuristic {
        names.push("heuristic");
    }
    if requirements.costs {
        names.push("costs");
    }
    if requirements.beam_width {
        names.push("beam_width");
    }
    names
}
