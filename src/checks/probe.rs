//! Probe definitions.
//!
//! This module provides the core trait and types for defining probes:
//!
//! - [`Probe`] - The trait that all probes must implement
//! - [`ProbeOutput`] - Collects the findings a probe makes during one run

use super::context::CheckContext;
use super::error::ProbeError;
use crate::report::{CheckResult, Finding};

/// One check against the host.
///
/// A probe reads the host through the [`CheckContext`] and records one or
/// more findings under its key. Errors returned from [`Probe::run`] become
/// a failing finding; they never stop other probes.
pub trait Probe: Send + Sync {
    /// Stable identifier, used for selection and as the report key.
    fn key(&self) -> &'static str;

    /// Title shown above the findings.
    fn headline(&self) -> &'static str;

    /// Description of what this probe checks.
    fn description(&self) -> &'static str;

    /// Whether this probe reads the kernel context and so must run after
    /// the kernel configuration probe.
    fn needs_kernel_context(&self) -> bool {
        false
    }

    /// Inspect the host and record findings.
    fn run(&self, ctx: &CheckContext<'_>, out: &mut ProbeOutput) -> Result<(), ProbeError>;
}

/// Findings recorded by one probe run.
///
/// Findings go under the probe's own key unless recorded with
/// [`ProbeOutput::satellite`], which files them under an extra key.
#[derive(Debug, Default)]
pub struct ProbeOutput {
    findings: Vec<Finding>,
    satellites: Vec<CheckResult>,
}

impl ProbeOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    pub fn pass(&mut self, message: impl Into<String>) {
        self.record(Finding::pass(message));
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.record(Finding::fail(message));
    }

    pub fn not_applicable(&mut self, message: impl Into<String>) {
        self.record(Finding::not_applicable(message));
    }

    /// Record a finding under an extra key.
    pub fn satellite(&mut self, key: &str, headline: &str, finding: Finding) {
        match self.satellites.iter_mut().find(|r| r.key == key) {
            Some(result) => result.findings.push(finding),
            None => self
                .satellites
                .push(CheckResult::new(key, headline).with_finding(finding)),
        }
    }

    /// Whether anything was recorded under the probe's own key.
    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    /// The probe's own result first, then satellites in first-use order.
    pub fn into_results(self, key: &str, headline: &str) -> Vec<CheckResult> {
        let mut primary = CheckResult::new(key, headline);
        primary.findings = self.findings;

        let mut results = Vec::with_capacity(1 + self.satellites.len());
        results.push(primary);
        results.extend(self.satellites);
        results
    }
}
