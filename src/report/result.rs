//! Verdicts recorded by probes.

use serde::Serialize;

/// Tri-state verdict of a finding or check.
///
/// `NotApplicable` is kept distinct from `Pass` (a swappiness limit on a
/// host without swap) and only collapses to a boolean when rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Pass,
    Fail,
    NotApplicable,
}

impl Status {
    /// Boolean view used by renderers. Only `Fail` is a failure.
    pub fn passed(self) -> bool {
        !matches!(self, Self::Fail)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Pass => write!(f, "pass"),
            Status::Fail => write!(f, "fail"),
            Status::NotApplicable => write!(f, "not applicable"),
        }
    }
}

/// One statement a probe makes about the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub status: Status,
    pub message: String,
}

impl Finding {
    pub fn new(status: Status, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn pass(message: impl Into<String>) -> Self {
        Self::new(Status::Pass, message)
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self::new(Status::Fail, message)
    }

    pub fn not_applicable(message: impl Into<String>) -> Self {
        Self::new(Status::NotApplicable, message)
    }
}

/// Everything recorded under one check key.
///
/// A probe may make several statements under the same key (one per mount,
/// one per interrupt line). They are all kept, in recording order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub key: String,
    pub headline: String,
    pub findings: Vec<Finding>,
}

impl CheckResult {
    pub fn new(key: impl Into<String>, headline: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            headline: headline.into(),
            findings: Vec::new(),
        }
    }

    pub fn with_finding(mut self, finding: Finding) -> Self {
        self.findings.push(finding);
        self
    }

    /// Aggregate status: any failing finding fails the check, otherwise
    /// any passing finding passes it. A check with no findings, or only
    /// not-applicable ones, does not apply.
    pub fn status(&self) -> Status {
        let statuses = self.findings.iter().map(|f| f.status);
        if statuses.clone().any(|s| s == Status::Fail) {
            Status::Fail
        } else if statuses.into_iter().any(|s| s == Status::Pass) {
            Status::Pass
        } else {
            Status::NotApplicable
        }
    }

    pub fn passed(&self) -> bool {
        self.status().passed()
    }

    /// Finding messages joined by newlines.
    pub fn detail(&self) -> String {
        self.findings
            .iter()
            .map(|f| f.message.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_applicable_collapses_to_passed() {
        assert!(Status::Pass.passed());
        assert!(Status::NotApplicable.passed());
        assert!(!Status::Fail.passed());
    }

    #[test]
    fn status_serializes_snake_case() {
        let json = serde_json::to_string(&Status::NotApplicable).unwrap();
        assert_eq!(json, "\"not_applicable\"");
    }

    #[test]
    fn any_failure_fails_the_check() {
        let result = CheckResult::new("filesystems", "Filesystems")
            .with_finding(Finding::fail("/data is nfs"))
            .with_finding(Finding::pass("/home is btrfs"));
        assert_eq!(result.status(), Status::Fail);
        assert!(!result.passed());
    }

    #[test]
    fn pass_beats_not_applicable() {
        let result = CheckResult::new("irqs", "IRQs")
            .with_finding(Finding::not_applicable("no usb"))
            .with_finding(Finding::pass("card ok"));
        assert_eq!(result.status(), Status::Pass);
    }

    #[test]
    fn empty_check_does_not_apply() {
        let result = CheckResult::new("irqs", "IRQs");
        assert_eq!(result.status(), Status::NotApplicable);
        assert!(result.passed());
        assert_eq!(result.detail(), "");
    }

    #[test]
    fn detail_joins_messages_in_order() {
        let result = CheckResult::new("filesystems", "Filesystems")
            .with_finding(Finding::pass("first"))
            .with_finding(Finding::fail("second"));
        assert_eq!(result.detail(), "first\nsecond");
    }
}
