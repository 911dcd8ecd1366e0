//! CPU frequency scaling governor check.

use crate::checks::{see_also, CheckContext, Probe, ProbeError, ProbeOutput};
use crate::host::Outcome;

/// Checks that every online CPU uses the expected frequency governor.
///
/// CPUs without a governor file (offline, or SMT siblings that were
/// disabled) are skipped rather than counted against the host.
pub struct GovernorProbe;

impl Probe for GovernorProbe {
    fn key(&self) -> &'static str {
        "governor"
    }

    fn headline(&self) -> &'static str {
        "CPU Frequency Scaling"
    }

    fn description(&self) -> &'static str {
        "All online CPUs use the performance governor"
    }

    fn run(&self, ctx: &CheckContext<'_>, out: &mut ProbeOutput) -> Result<(), ProbeError> {
        let cpus = ctx.host.cpu_ids().require("the CPU list")?;
        let expected = ctx.config.expected_governor.as_str();

        let mut reported = Vec::new();
        for cpu in cpus {
            match ctx.host.scaling_governor(cpu) {
                Outcome::Found(governor) => reported.push((cpu, governor)),
                Outcome::NotFound => tracing::debug!("cpu{} has no governor; skipping", cpu),
                Outcome::DeniedPermission(message) => {
                    return Err(ProbeError::PermissionDenied {
                        what: format!("the scaling governor of CPU {}", cpu),
                        message,
                    })
                }
            }
        }

        if reported.is_empty() {
            out.not_applicable("No CPU reports a scaling governor, frequency scaling is not in use.");
            return Ok(());
        }

        let offenders: Vec<String> = reported
            .iter()
            .filter(|(_, governor)| governor != expected)
            .map(|(cpu, governor)| format!("CPU {}: {}", cpu, governor))
            .collect();

        if offenders.is_empty() {
            out.pass(format!(
                "The scaling governor of all CPUs is set at {}.",
                expected
            ));
        } else {
            out.fail(format!(
                "The scaling governor of one or more CPUs is not set to '{expected}' ({}). \
                 You can set the scaling governor to '{expected}' with \
                 'cpupower frequency-set -g {expected}' or 'cpufreq-set -r -g {expected}' \
                 (Debian/Ubuntu). {}",
                offenders.join(", "),
                see_also("cpu_frequency_scaling")
            ));
        }
        Ok(())
    }
}
