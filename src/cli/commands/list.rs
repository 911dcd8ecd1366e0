//! List command implementation.
//!
//! The `rtcheck list` command prints the registered checks in the order
//! they run, with the condition each one looks for.

use std::io::Write;

use crate::checks::ProbeRegistry;
use crate::error::Result;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    registry: ProbeRegistry,
}

impl ListCommand {
    /// Create a list command over the built-in probes.
    pub fn new() -> Self {
        Self {
            registry: ProbeRegistry::with_builtins(),
        }
    }
}

impl Default for ListCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for ListCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let width = self.registry.keys().iter().map(|k| k.len()).max().unwrap_or(0);

        for probe in self.registry.iter() {
            let marker = if probe.needs_kernel_context() {
                "  (needs kernel_config)"
            } else {
                ""
            };
            writeln!(
                out,
                "{:width$}  {}: {}{}",
                probe.key(),
                probe.headline(),
                probe.description(),
                marker,
                width = width
            )?;
        }
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output() -> String {
        let mut out = Vec::new();
        ListCommand::new().execute(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn lists_every_probe_in_order() {
        let output = output();
        let keys: Vec<&str> = output
            .lines()
            .filter_map(|line| line.split_whitespace().next())
            .collect();
        assert_eq!(keys, ProbeRegistry::with_builtins().keys());
    }

    #[test]
    fn marks_probes_that_need_the_kernel_context() {
        let output = output();
        let tickless = output.lines().find(|l| l.starts_with("tickless")).unwrap();
        assert!(tickless.ends_with("(needs kernel_config)"));
        let root = output.lines().find(|l| l.starts_with("root ")).unwrap();
        assert!(!root.contains("needs"));
    }

    #[test]
    fn shows_what_each_check_looks_for() {
        let output = output();
        let registry = ProbeRegistry::with_builtins();
        for probe in registry.iter() {
            let line = output
                .lines()
                .find(|l| l.split_whitespace().next() == Some(probe.key()))
                .unwrap();
            assert!(
                line.contains(&format!("{}: {}", probe.headline(), probe.description())),
                "{}",
                line
            );
        }
    }
}
