//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Configuration and the invoking
//! user are resolved once in `main` and shared by every command.

pub mod completions;
pub mod dispatcher;
pub mod list;
pub mod scan;
pub mod view;

pub use dispatcher::{Command, CommandDispatcher, CommandResult, RunSettings};
