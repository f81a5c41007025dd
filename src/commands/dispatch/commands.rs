//! Command implementations for all waypath commands

use tracing::debug;
use waypath_core::error::Result;

use crate::cli::{Commands, MinimaxArgs, SolveArgs};
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{algorithms, minimax, solve};

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let result = match self {
            Commands::Solve(args) => execute_solve(ctx, args),
            Commands::Algorithms => algorithms::execute(ctx.cli),
            Commands::Minimax(args) => execute_minimax(ctx, args),
        };
        debug!(elapsed = ?ctx.start.elapsed(), "execute_command");
        result
    }
}

fn execute_solve(ctx: &CommandContext, args: &SolveArgs) -> Result<()> {
    let request = solve::read_request(args.request.as_deref())?;
    debug!(elapsed = ?ctx.start.elapsed(), "read_request");
    let request = solve::apply_overrides(request, args);
    solve::execute(ctx.cli, &ctx.dispatcher(), &request)
}

fn execute_minimax(ctx: &CommandContext, args: &MinimaxArgs) -> Result<()> {
    minimax::execute(ctx.cli, &args.values)
}
