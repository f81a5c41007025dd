//! Command trait and context for dispatching commands

use std::time::Instant;

use waypath_core::config::EngineConfig;
use waypath_core::dispatch::Dispatcher;
use waypath_core::error::Result;

use crate::cli::Cli;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: EngineConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: EngineConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }

    pub fn dispatcher(&self) -> Dispatcher {
        Dispatcher::new(self.config.clone())
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("waypath {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Classic graph search strategies over weighted graphs.");
        println!();
        println!("Run `waypath --help` for usage information.");
        Ok(())
    }
}
