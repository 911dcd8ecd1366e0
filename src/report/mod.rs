//! Audit results and their renderers.
//!
//! The check engine fills a [`ResultStore`] and freezes it into a
//! [`Report`]. Renderers read the report's [`ReportRecord`]s and never
//! re-derive a status from host data.
//!
//! # Modules
//!
//! - [`result`] - Status, findings and per-key results
//! - [`store`] - Append-only store and frozen report
//! - [`console`] - Line-oriented terminal output
//! - [`json`] - Machine-readable output

pub mod console;
pub mod json;
pub mod result;
pub mod store;

use serde::Serialize;
use std::io::Write;

pub use console::ConsoleRenderer;
pub use json::JsonRenderer;
pub use result::{CheckResult, Finding, Status};
pub use store::{Report, ResultStore, Summary};

/// One rendered unit of a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRecord {
    pub key: String,
    pub headline: String,
    pub status: Status,
    pub passed: bool,
    /// All finding messages, one per line.
    pub detail: String,
    pub findings: Vec<Finding>,
}

impl From<&CheckResult> for ReportRecord {
    fn from(result: &CheckResult) -> Self {
        let status = result.status();
        Self {
            key: result.key.clone(),
            headline: result.headline.clone(),
            status,
            passed: status.passed(),
            detail: result.detail(),
            findings: result.findings.clone(),
        }
    }
}

/// Trait for writing a report in some output format.
pub trait ReportRenderer {
    /// Render the report to the given writer.
    fn render<W: Write>(&self, report: &Report, writer: &mut W) -> std::io::Result<()>;
}
