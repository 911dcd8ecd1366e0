//! Console report renderer.
//!
//! Each check is printed as its headline, an underline of `=` the same
//! width, one tagged line per finding and a blank separator:
//!
//! ```text
//! Swappiness
//! ==========
//! [ WARNING ] vm.swappiness is set to 60 which is too high. ...
//! ```

use std::io::Write;

use super::{Report, ReportRenderer, Status};
use crate::ui::icons::StatusKind;
use crate::ui::theme::RtcheckTheme;

/// Renders reports for a terminal or a pipe.
pub struct ConsoleRenderer {
    theme: RtcheckTheme,
}

impl ConsoleRenderer {
    pub fn new(theme: RtcheckTheme) -> Self {
        Self { theme }
    }

    /// A renderer without colors.
    pub fn plain() -> Self {
        Self::new(RtcheckTheme::plain())
    }

    fn tag(&self, status: Status) -> String {
        StatusKind::from(status).styled_tag(&self.theme)
    }
}

impl ReportRenderer for ConsoleRenderer {
    fn render<W: Write>(&self, report: &Report, writer: &mut W) -> std::io::Result<()> {
        for result in report.results() {
            writeln!(writer, "{}", self.theme.headline.apply_to(&result.headline))?;
            writeln!(writer, "{}", "=".repeat(result.headline.chars().count()))?;

            if result.findings.is_empty() {
                writeln!(writer, "{}", self.tag(result.status()))?;
            }
            for finding in &result.findings {
                writeln!(writer, "{} {}", self.tag(finding.status), finding.message)?;
            }

            writeln!(writer)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{CheckResult, Finding, ResultStore};

    fn render(report: &Report) -> String {
        let mut output = Vec::new();
        ConsoleRenderer::plain().render(report, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn renders_headline_underline_and_tag() {
        let mut store = ResultStore::new();
        store.insert(
            CheckResult::new("root", "Root User").with_finding(Finding::pass("Not running as root.")),
        );

        assert_eq!(
            render(&store.freeze()),
            "Root User\n=========\n[ OK ] Not running as root.\n\n"
        );
    }

    #[test]
    fn not_applicable_renders_as_ok() {
        let mut store = ResultStore::new();
        store.insert(
            CheckResult::new("swappiness", "Swappiness")
                .with_finding(Finding::not_applicable("no swap")),
        );
        assert!(render(&store.freeze()).contains("[ OK ] no swap"));
    }

    #[test]
    fn mixed_findings_each_get_their_own_tag() {
        let mut store = ResultStore::new();
        store.insert(
            CheckResult::new("filesystems", "Filesystems")
                .with_finding(Finding::pass("good: /home"))
                .with_finding(Finding::fail("bad: /data")),
        );
        let output = render(&store.freeze());
        assert!(output.contains("[ OK ] good: /home\n"));
        assert!(output.contains("[ WARNING ] bad: /data\n"));
    }

    #[test]
    fn underline_counts_characters_not_bytes() {
        let mut store = ResultStore::new();
        store.insert(CheckResult::new("x", "Spectre/Meltdown Mitigations").with_finding(Finding::pass("ok")));
        let output = render(&store.freeze());
        let underline = output.lines().nth(1).unwrap();
        assert_eq!(underline.len(), "Spectre/Meltdown Mitigations".len());
    }

    #[test]
    fn results_render_in_report_order() {
        let mut store = ResultStore::new();
        store.insert(CheckResult::new("b", "Second").with_finding(Finding::pass("2")));
        store.insert(CheckResult::new("a", "First").with_finding(Finding::pass("1")));
        let output = render(&store.freeze());
        assert!(output.find("Second").unwrap() < output.find("First").unwrap());
    }
}
