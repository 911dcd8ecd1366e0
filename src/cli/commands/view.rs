//! View command implementation.
//!
//! The `rtcheck view` command runs the checks behind a progress bar and
//! opens the interactive viewer. When stdout is not a terminal it prints
//! the console report instead.

use std::io::Write;

use console::Term;

use crate::cli::args::ViewArgs;
use crate::error::Result;
use crate::ui::{run_viewer, ProbeProgress, RtcheckTheme, ViewerModel};

use super::dispatcher::{Command, CommandResult, RunSettings};
use super::scan::{print_console, run_probes, select_probes};

/// The view command implementation.
pub struct ViewCommand {
    args: ViewArgs,
    settings: RunSettings,
}

impl ViewCommand {
    /// Create a new view command.
    pub fn new(args: ViewArgs, settings: RunSettings) -> Self {
        Self { args, settings }
    }

    fn is_interactive(&self) -> bool {
        Term::stdout().is_term()
    }
}

impl Command for ViewCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let registry = select_probes(&self.args.selection)?;

        if !self.is_interactive() {
            tracing::debug!("stdout is not a terminal, printing the console report");
            let report = run_probes(&registry, &self.settings, None);
            print_console(&report, self.settings.use_color, out)?;
            return Ok(CommandResult::success());
        }

        let progress = ProbeProgress::new(registry.len());
        let report = run_probes(&registry, &self.settings, Some(&progress));
        progress.finish();

        let model = ViewerModel::new(&report, env!("CARGO_PKG_VERSION"));
        let theme = RtcheckTheme::for_output(self.settings.use_color);
        run_viewer(&model, &Term::stdout(), &theme)?;
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::SelectionArgs;
    use crate::config::AuditConfig;
    use crate::host::UserIdentity;
    use tempfile::TempDir;

    #[test]
    fn falls_back_to_console_report_without_a_terminal() {
        let root = TempDir::new().unwrap();
        let settings = RunSettings {
            config: AuditConfig {
                host_root: root.path().to_path_buf(),
                ..AuditConfig::default()
            },
            user: UserIdentity::new("alice", 1000),
            use_color: false,
        };
        let command = ViewCommand::new(
            ViewArgs {
                selection: SelectionArgs {
                    only: vec!["mitigations".to_string()],
                    skip: Vec::new(),
                },
            },
            settings,
        );
        if command.is_interactive() {
            return;
        }

        let mut out = Vec::new();
        command.execute(&mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.starts_with("rtcheck - version"));
        assert!(output.contains("Spectre/Meltdown Mitigations"));
    }
}
