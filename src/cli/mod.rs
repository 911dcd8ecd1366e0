//! Command-line interface for rtcheck.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CompletionsArgs, ListArgs, ScanArgs, SelectionArgs, ViewArgs};
pub use commands::{Command, CommandDispatcher, CommandResult, RunSettings};
