//! JSON report renderer.
//!
//! Formats a report as machine-readable JSON for tooling integration.

use serde::Serialize;
use std::io::Write;

use super::{Report, ReportRecord, ReportRenderer, Summary};

/// Renders reports as JSON.
pub struct JsonRenderer {
    version: String,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    version: &'a str,
    checks: Vec<ReportRecord>,
    summary: Summary,
}

impl JsonRenderer {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self::new(env!("CARGO_PKG_VERSION"))
    }
}

impl ReportRenderer for JsonRenderer {
    fn render<W: Write>(&self, report: &Report, writer: &mut W) -> std::io::Result<()> {
        let output = JsonOutput {
            version: &self.version,
            checks: report.records(),
            summary: report.summary(),
        };
        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{CheckResult, Finding, ResultStore};

    fn render(report: &Report) -> serde_json::Value {
        let mut output = Vec::new();
        JsonRenderer::new("9.9.9").render(report, &mut output).unwrap();
        serde_json::from_slice(&output).unwrap()
    }

    #[test]
    fn renders_checks_and_summary() {
        let mut store = ResultStore::new();
        store.insert(CheckResult::new("root", "Root User").with_finding(Finding::pass("fine")));
        store.insert(
            CheckResult::new("swappiness", "Swappiness")
                .with_finding(Finding::fail("vm.swappiness is set to 60")),
        );

        let json = render(&store.freeze());
        assert_eq!(json["version"], "9.9.9");
        assert_eq!(json["checks"][0]["key"], "root");
        assert_eq!(json["checks"][0]["passed"], true);
        assert_eq!(json["checks"][1]["status"], "fail");
        assert_eq!(json["checks"][1]["findings"][0]["status"], "fail");
        assert_eq!(json["summary"]["total"], 2);
        assert_eq!(json["summary"]["failed"], 1);
        assert_eq!(json["summary"]["passed"], 1);
    }

    #[test]
    fn empty_report_is_valid_json() {
        let json = render(&ResultStore::new().freeze());
        assert_eq!(json["checks"].as_array().unwrap().len(), 0);
        assert_eq!(json["summary"]["not_applicable"], 0);
    }
}
