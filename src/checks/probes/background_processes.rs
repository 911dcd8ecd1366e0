//! Resource-intensive background process detection.

use regex::Regex;

use crate::checks::{see_also, CheckContext, Probe, ProbeError, ProbeOutput};

/// Looks for running daemons known to interfere with low-latency audio.
pub struct BackgroundProcessesProbe;

impl Probe for BackgroundProcessesProbe {
    fn key(&self) -> &'static str {
        "background_processes"
    }

    fn headline(&self) -> &'static str {
        "Background Processes"
    }

    fn description(&self) -> &'static str {
        "No resource-intensive daemons are running"
    }

    fn run(&self, ctx: &CheckContext<'_>, out: &mut ProbeOutput) -> Result<(), ProbeError> {
        let watched = &ctx.config.background_processes;
        if watched.is_empty() {
            out.not_applicable("No background processes are being watched.");
            return Ok(());
        }

        let alternatives: Vec<String> = watched.iter().map(|p| regex::escape(p)).collect();
        let pattern = Regex::new(&alternatives.join("|"))
            .map_err(|_| ProbeError::MalformedInput("the watched process list".into()))?;

        let commands = ctx
            .host
            .process_command_lines()
            .require("the process list")?;

        let mut found = false;
        for command in commands.iter().filter(|c| pattern.is_match(c)) {
            found = true;
            out.fail(format!(
                "Found resource-intensive process '{}'. Please try stopping and/or \
                 disabling this process. {}",
                command,
                see_also("disabling_resource-intensive_daemons_services_and_processes")
            ));
        }

        if !found {
            out.pass("No resource-intensive background processes found.");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::probes::testing::{primary, run_with};
    use crate::config::AuditConfig;
    use crate::host::{HostSnapshot, Outcome, UserIdentity};
    use crate::report::Status;

    fn host(commands: &[&str]) -> HostSnapshot {
        HostSnapshot {
            processes: Outcome::Found(commands.iter().map(|c| c.to_string()).collect()),
            ..HostSnapshot::default()
        }
    }

    #[test]
    fn quiet_host_passes() {
        let result = primary(
            &BackgroundProcessesProbe,
            &host(&["/sbin/init", "/usr/bin/pipewire"]),
        );
        assert_eq!(result.status(), Status::Pass);
    }

    #[test]
    fn each_watched_process_is_reported() {
        let result = primary(
            &BackgroundProcessesProbe,
            &host(&["/usr/sbin/powersaved -d", "bash", "kpowersave --tray"]),
        );
        assert_eq!(result.status(), Status::Fail);
        assert_eq!(result.findings.len(), 2);
        assert!(result.findings[0].message.contains("'/usr/sbin/powersaved -d'"));
        assert!(result.findings[1].message.contains("'kpowersave --tray'"));
    }

    #[test]
    fn watched_names_are_literal() {
        let config = AuditConfig {
            background_processes: vec!["a.b".to_string()],
            ..AuditConfig::default()
        };
        let results = run_with(
            &BackgroundProcessesProbe,
            &host(&["axb"]),
            &config,
            &UserIdentity::new("alice", 1000),
        );
        assert_eq!(results[0].status(), Status::Pass);
    }

    #[test]
    fn empty_watch_list_does_not_apply() {
        let config = AuditConfig {
            background_processes: Vec::new(),
            ..AuditConfig::default()
        };
        let results = run_with(
            &BackgroundProcessesProbe,
            &host(&["powersaved"]),
            &config,
            &UserIdentity::new("alice", 1000),
        );
        assert_eq!(results[0].status(), Status::NotApplicable);
    }

    #[test]
    fn unreadable_process_list_fails() {
        let result = primary(&BackgroundProcessesProbe, &HostSnapshot::default());
        assert_eq!(result.status(), Status::Fail);
        assert!(result.detail().contains("process list"));
    }
}
