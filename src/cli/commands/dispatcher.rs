//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::io::Write;

use crate::cli::args::{Cli, Commands, ScanArgs};
use crate::config::AuditConfig;
use crate::error::Result;
use crate::host::UserIdentity;

use super::completions::CompletionsCommand;
use super::list::ListCommand;
use super::scan::ScanCommand;
use super::view::ViewCommand;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command, writing its output to `out`.
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult>;
}

/// Result of command execution.
///
/// Findings never fail a command and fatal problems are returned as
/// errors, so a command that returns always exits 0.
#[derive(Debug)]
pub struct CommandResult {
    /// Exit code to use.
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self { exit_code: 0 }
    }
}

/// Shared state every command runs with.
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub config: AuditConfig,
    pub user: UserIdentity,
    pub use_color: bool,
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    settings: RunSettings,
}

impl CommandDispatcher {
    /// Create a new dispatcher.
    pub fn new(config: AuditConfig, user: UserIdentity, use_color: bool) -> Self {
        Self {
            settings: RunSettings {
                config,
                user,
                use_color,
            },
        }
    }

    /// Dispatch and execute a command.
    ///
    /// No subcommand runs `scan` with default arguments.
    pub fn dispatch(&self, cli: &Cli, out: &mut dyn Write) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Scan(args)) => {
                ScanCommand::new(args.clone(), self.settings.clone()).execute(out)
            }
            Some(Commands::View(args)) => {
                ViewCommand::new(args.clone(), self.settings.clone()).execute(out)
            }
            Some(Commands::List(_)) => ListCommand::new().execute(out),
            Some(Commands::Completions(args)) => {
                CompletionsCommand::new(args.clone()).execute(out)
            }
            None => ScanCommand::new(ScanArgs::default(), self.settings.clone()).execute(out),
        }
    }
}
