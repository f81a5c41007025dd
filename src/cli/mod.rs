//! CLI argument parsing for waypath
//!
//! Global flags: --format, --config, --quiet, --verbose, --log-level, --log-json

pub mod output;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub use output::OutputFormat;

/// Waypath - classic graph search strategies from the command line
#[derive(Parser, Debug)]
#[command(name = "waypath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Engine configuration file (TOML)
    #[arg(long, global = true, env = "WAYPATH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Log search progress at debug level
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Explicit log level or filter directive (overrides --verbose)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a search request
    Solve(SolveArgs),

    /// List the supported algorithm identifiers
    Algorithms,

    /// Evaluate a binary game tree with alpha-beta minimax
    Minimax(MinimaxArgs),
}

#[derive(Args, Debug, Clone)]
pub struct SolveArgs {
    /// Request file (JSON); `-` or omitted reads stdin
    pub request: Option<PathBuf>,

    /// Override the request's algorithm
    #[arg(long, short)]
    pub algorithm: Option<String>,

    /// Override the start vertex
    #[arg(long)]
    pub start: Option<String>,

    /// Override the goal vertex
    #[arg(long)]
    pub goal: Option<String>,

    /// Override the beam width
    #[arg(long)]
    pub beam_width: Option<usize>,
}

#[derive(Args, Debug, Clone)]
pub struct MinimaxArgs {
    /// Leaf values, left to right, comma separated
    #[arg(long, required = true, value_delimiter = ',', allow_hyphen_values = true)]
    pub values: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_solve_overrides() {
        let cli = Cli::try_parse_from([
            "waypath",
            "solve",
            "req.json",
            "--algorithm",
            "bfs",
            "--start",
            "A",
            "--beam-width",
            "3",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Solve(args)) => {
                assert_eq!(args.request, Some(PathBuf::from("req.json")));
                assert_eq!(args.algorithm.as_deref(), Some("bfs"));
                assert_eq!(args.start.as_deref(), Some("A"));
                assert_eq!(args.goal, None);
                assert_eq!(args.beam_width, Some(3));
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["waypath", "algorithms", "--format", "human", "-v"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Human);
        assert!(cli.verbose);
    }

    #[test]
    fn test_minimax_values() {
        let cli = Cli::try_parse_from(["waypath", "minimax", "--values", "3,-5,6,9"]).unwrap();
        match cli.command {
            Some(Commands::Minimax(args)) => assert_eq!(args.values, vec![3, -5, 6, 9]),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_minimax_rejects_non_integers() {
        assert!(Cli::try_parse_from(["waypath", "minimax", "--values", "3,x"]).is_err());
        assert!(Cli::try_parse_from(["waypath", "minimax"]).is_err());
    }
}
