//! `waypath solve` - run one search request

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use tracing::debug;
use waypath_core::dispatch::{Dispatcher, SearchRequest, SearchResponse, VertexLabel};
use waypath_core::error::{Result, SearchError};
use waypath_core::strategy::SearchResult;

use crate::cli::{Cli, OutputFormat, SolveArgs};

/// Read a request from `path`, or from stdin when absent or `-`
pub fn read_request(path: Option<&Path>) -> Result<SearchRequest> {
    let content = match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path).map_err(|e| {
            SearchError::Other(format!(
                "failed to read request from {}: {}",
                path.display(),
                e
            ))
        })?,
        _ => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    SearchRequest::from_json(&content)
}

/// Replace request fields with the ones given on the command line
pub fn apply_overrides(mut request: SearchRequest, args: &SolveArgs) -> SearchRequest {
    if let Some(algorithm) = &args.algorithm {
        request.algorithm = algorithm.clone();
    }
    if let Some(start) = &args.start {
        request.start = VertexLabel::from(start.as_str());
    }
    if let Some(goal) = &args.goal {
        request.goal = VertexLabel::from(goal.as_str());
    }
    if args.beam_width.is_some() {
        request.beam_width = args.beam_width;
    }
    request
}

/// Execute the solve command
pub fn execute(cli: &Cli, dispatcher: &Dispatcher, request: &SearchRequest) -> Result<()> {
    let outcome = dispatcher.dispatch(request);

    match cli.format {
        OutputFormat::Json => {
            let response = match &outcome {
                Ok(result) => SearchResponse::from(result.clone()),
                Err(e) => SearchResponse::from(e),
            };
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Human => {
            if let Ok(result) = &outcome {
                print_human(result, cli.quiet);
            }
        }
    }

    let result = outcome?;
    debug!(found = result.is_found(), "solve finished");
    Ok(())
}

fn print_human(result: &SearchResult, quiet: bool) {
    match result {
        SearchResult::NoPath => {
            if !quiet {
                println!("no path found");
            }
        }
        _ => {
            for path in result.paths() {
                println!("{}", path);
            }
        }
    }
}
