//! High resolution timer support check.

use crate::checks::{see_also, CheckContext, Probe, ProbeError, ProbeOutput};

const FLAG: &str = "CONFIG_HIGH_RES_TIMERS=y";

/// Checks that the kernel was built with high resolution timers.
pub struct HighResTimersProbe;

impl Probe for HighResTimersProbe {
    fn key(&self) -> &'static str {
        "high_res_timers"
    }

    fn headline(&self) -> &'static str {
        "High Resolution Timers"
    }

    fn description(&self) -> &'static str {
        "The kernel supports high resolution timers"
    }

    fn needs_kernel_context(&self) -> bool {
        true
    }

    fn run(&self, ctx: &CheckContext<'_>, out: &mut ProbeOutput) -> Result<(), ProbeError> {
        let config = ctx.kernel.require_config()?;
        if config.contains(FLAG) {
            out.pass("High resolution timers are enabled.");
        } else {
            out.fail(format!(
                "High resolution timers are not enabled. Try enabling high-resolution timers \
                 (CONFIG_HIGH_RES_TIMERS under 'Processor type and features'). {}",
                see_also("installing_a_real-time_kernel")
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::probes::testing::primary;
    use crate::host::{HostSnapshot, Outcome};
    use crate::report::Status;

    fn host(lines: &[&str]) -> HostSnapshot {
        HostSnapshot {
            kernel_config: Outcome::Found(lines.iter().map(|l| l.to_string()).collect()),
            ..HostSnapshot::default()
        }
    }

    #[test]
    fn enabled_flag_passes() {
        let result = primary(&HighResTimersProbe, &host(&[FLAG]));
        assert_eq!(result.status(), Status::Pass);
    }

    #[test]
    fn absent_flag_fails() {
        let result = primary(
            &HighResTimersProbe,
            &host(&["# CONFIG_HIGH_RES_TIMERS is not set"]),
        );
        assert_eq!(result.status(), Status::Fail);
        assert!(result.detail().contains("Processor type and features"));
    }

    #[test]
    fn missing_config_fails_with_explanation() {
        let result = primary(&HighResTimersProbe, &HostSnapshot::default());
        assert_eq!(result.status(), Status::Fail);
        assert!(result.detail().starts_with("Could not find kernel configuration."));
    }
}
