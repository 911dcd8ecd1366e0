//! Scan command implementation.
//!
//! The `rtcheck scan` command runs the selected checks once and prints
//! the report. Findings never change the exit code.

use std::io::Write;

use crate::checks::{CheckEngine, ProbeObserver, ProbeRegistry};
use crate::cli::args::{ScanArgs, SelectionArgs};
use crate::error::Result;
use crate::host::LinuxHost;
use crate::report::{ConsoleRenderer, JsonRenderer, Report, ReportRenderer};
use crate::ui::RtcheckTheme;

use super::dispatcher::{Command, CommandResult, RunSettings};

/// Registry of the built-in probes narrowed to `selection`.
pub(crate) fn select_probes(selection: &SelectionArgs) -> Result<ProbeRegistry> {
    ProbeRegistry::with_builtins().select(&selection.only, &selection.skip)
}

/// Run `registry` against the configured host.
pub(crate) fn run_probes(
    registry: &ProbeRegistry,
    settings: &RunSettings,
    observer: Option<&dyn ProbeObserver>,
) -> Report {
    let host = LinuxHost::with_root(settings.config.host_root.clone());
    tracing::debug!(
        "scanning {} with {} checks",
        host.root().display(),
        registry.len()
    );

    let engine = CheckEngine::new(&host, &settings.config, &settings.user);
    match observer {
        Some(observer) => engine.with_observer(observer).run(registry),
        None => engine.run(registry),
    }
}

/// Print the banner and the console report.
pub(crate) fn print_console(report: &Report, use_color: bool, out: &mut dyn Write) -> Result<()> {
    let theme = RtcheckTheme::for_output(use_color);
    writeln!(out, "{}", theme.format_banner(env!("CARGO_PKG_VERSION")))?;
    writeln!(out)?;
    ConsoleRenderer::new(theme).render(report, &mut &mut *out)?;
    Ok(())
}

/// The scan command implementation.
pub struct ScanCommand {
    args: ScanArgs,
    settings: RunSettings,
}

impl ScanCommand {
    /// Create a new scan command.
    pub fn new(args: ScanArgs, settings: RunSettings) -> Self {
        Self { args, settings }
    }
}

impl Command for ScanCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let registry = select_probes(&self.args.selection)?;
        let report = run_probes(&registry, &self.settings, None);

        if self.args.json {
            JsonRenderer::default().render(&report, &mut &mut *out)?;
        } else {
            print_console(&report, self.settings.use_color, out)?;
        }

        let summary = report.summary();
        tracing::debug!(
            "scan complete: {} passed, {} failed, {} not applicable",
            summary.passed,
            summary.failed,
            summary.not_applicable
        );
        Ok(CommandResult::success())
    }
}
