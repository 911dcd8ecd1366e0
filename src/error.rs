//! Error types for rtcheck operations.
//!
//! This module defines [`RtcheckError`], the error type for everything that
//! can stop a run before the check engine starts, and a [`Result`] alias.
//!
//! # Error Handling Strategy
//!
//! - Problems with a single probe never show up here. They are recorded as
//!   failing findings by the engine (see [`crate::checks::ProbeError`]).
//! - `RtcheckError` covers the few fatal paths: the invoking user cannot be
//!   resolved, a named config file is missing or invalid, or a selection
//!   names a check that does not exist.
//! - Use `anyhow::Error` (via `RtcheckError::Other`) for unexpected errors.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for rtcheck operations.
#[derive(Debug, Error)]
pub enum RtcheckError {
    /// The user running the scan could not be determined.
    #[error("Could not resolve the invoking user: {message}")]
    UserUnresolved { message: String },

    /// Configuration file named on the command line does not exist.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// A check key given to `--only` or `--skip` is not registered.
    #[error("Unknown check '{key}'. Run 'rtcheck list' to see available checks")]
    UnknownCheck { key: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for rtcheck operations.
pub type Result<T> = std::result::Result<T, RtcheckError>;
