//! Audit configuration.
//!
//! - Schema definitions and defaults in [`schema`]
//! - File loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use rtcheck::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("rtcheck.yml");
//! fs::write(&path, "max_swappiness: 20").unwrap();
//!
//! let config = load_config(Some(&path), None).unwrap();
//! assert_eq!(config.max_swappiness, 20);
//! assert_eq!(config.min_rtprio, 75);
//! ```

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_config_file, parse_config};
pub use schema::{AuditConfig, FilesystemRules, IrqPatterns};
