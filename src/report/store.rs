//! Append-only result storage and the frozen report handed to renderers.

use super::result::{CheckResult, Status};
use super::ReportRecord;

/// Results collected during a run, in insertion order.
///
/// A key can be written once. Later writes for the same key are dropped so
/// a result never changes after it is recorded.
#[derive(Debug, Default)]
pub struct ResultStore {
    results: Vec<CheckResult>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a result. Returns `false` if the key was already recorded.
    pub fn insert(&mut self, result: CheckResult) -> bool {
        if self.contains(&result.key) {
            tracing::warn!("result for '{}' already recorded; ignoring", result.key);
            return false;
        }
        self.results.push(result);
        true
    }

    pub fn contains(&self, key: &str) -> bool {
        self.results.iter().any(|r| r.key == key)
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Finish the run. The returned report cannot be modified.
    pub fn freeze(self) -> Report {
        Report {
            results: self.results,
        }
    }
}

/// Counts of check statuses in a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub not_applicable: usize,
}

/// Read-only results of a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    results: Vec<CheckResult>,
}

impl Report {
    /// Results in the order they were recorded.
    pub fn results(&self) -> &[CheckResult] {
        &self.results
    }

    pub fn get(&self, key: &str) -> Option<&CheckResult> {
        self.results.iter().find(|r| r.key == key)
    }

    /// Every key produced by the run, in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.results.iter().map(|r| r.key.as_str())
    }

    /// Records in the form renderers consume.
    pub fn records(&self) -> Vec<ReportRecord> {
        self.results.iter().map(ReportRecord::from).collect()
    }

    pub fn all_passed(&self) -> bool {
        self.results.iter().all(CheckResult::passed)
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn summary(&self) -> Summary {
        let mut summary = Summary {
            total: self.results.len(),
            ..Summary::default()
        };
        for result in &self.results {
            match result.status() {
                Status::Pass => summary.passed += 1,
                Status::Fail => summary.failed += 1,
                Status::NotApplicable => summary.not_applicable += 1,
            }
        }
        summary
    }
}
