//! Command dispatch logic for waypath

use std::time::Instant;

use tracing::debug;
use waypath_core::config::EngineConfig;
use waypath_core::error::Result;

use crate::cli::Cli;

mod command;
mod commands;

pub use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = EngineConfig::discover(cli.config.as_deref())?;

    debug!(elapsed = ?start.elapsed(), ?config, "load_config");

    let ctx = CommandContext::new(cli, config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
