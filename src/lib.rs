//! rtcheck - real-time audio configuration scan for Linux hosts.
//!
//! rtcheck reads procfs, sysfs and the kernel build configuration and
//! reports, topic by topic, whether the machine is set up for low-latency
//! audio work. It never changes the host.
//!
//! # Modules
//!
//! - [`checks`] - Probes, their registry and the check engine
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Audit thresholds and optional YAML overrides
//! - [`error`] - Error types and result aliases
//! - [`host`] - Read-only access to host state
//! - [`report`] - Check results, the frozen report and its renderers
//! - [`ui`] - Colors, glyphs, progress and the interactive viewer
//!
//! # Example
//!
//! ```
//! use rtcheck::checks::{CheckEngine, ProbeRegistry};
//! use rtcheck::config::AuditConfig;
//! use rtcheck::host::{HostSnapshot, UserIdentity};
//!
//! let host = HostSnapshot::tuned();
//! let config = AuditConfig::default();
//! let user = UserIdentity::new("alice", 1000);
//!
//! let report = CheckEngine::new(&host, &config, &user).run(&ProbeRegistry::with_builtins());
//! assert!(report.all_passed());
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod host;
pub mod report;
pub mod ui;

pub use error::{Result, RtcheckError};
