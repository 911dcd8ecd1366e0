//! Real-time kernel check.

use crate::checks::{see_also, CheckContext, KernelLookup, Probe, ProbeError, ProbeOutput};

const RT_FLAGS: &[&str] = &["CONFIG_PREEMPT_RT=y", "CONFIG_PREEMPT_RT_FULL=y"];

/// Checks for a real-time capable kernel: a PREEMPT_RT build, threaded
/// interrupts, or full preemption selected on the command line.
///
/// The build configuration is required. The command line is optional;
/// without it only the build flags are considered.
pub struct PreemptRtProbe;

impl Probe for PreemptRtProbe {
    fn key(&self) -> &'static str {
        "preempt_rt"
    }

    fn headline(&self) -> &'static str {
        "Preempt RT"
    }

    fn description(&self) -> &'static str {
        "The kernel is real-time capable or uses threaded interrupts"
    }

    fn needs_kernel_context(&self) -> bool {
        true
    }

    fn run(&self, ctx: &CheckContext<'_>, out: &mut ProbeOutput) -> Result<(), ProbeError> {
        let config = ctx.kernel.require_config()?;
        let cmdline: &[String] = match ctx.kernel.cmdline() {
            KernelLookup::Loaded(tokens) => tokens,
            _ => &[],
        };
        let has = |token: &str| cmdline.iter().any(|t| t == token);
        let release = ctx.kernel.release_label();

        if config.contains_any(RT_FLAGS) {
            out.pass(format!("Kernel {} is a real-time kernel.", release));
        } else if has("threadirqs") {
            out.pass(format!("Kernel {} is using threaded IRQs.", release));
        } else if has("preempt=full") {
            out.pass(format!("Kernel {} is using full preemption.", release));
        } else {
            out.fail(format!(
                "Kernel {} without 'threadirqs' parameter or real-time capabilities found. {}",
                release,
                see_also("do_i_really_need_a_real-time_kernel")
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

    fn host(config: &[&str], cmdline: &[&str]) -> HostSnapshot {
        HostSnapshot {
            kernel_release: Outcome::Found("6.8.0".to_string()),
            kernel_config: Outcome::Found(config.iter().map(|l| l.to_string()).collect()),
            cmdline: Outcome::Found(cmdline.iter().map(|t| t.to_string()).collect()),
            ..HostSnapshot::default()
        }
    }

    #[test]
    fn rt_build_passes() {
        let result = primary(&PreemptRtProbe, &host(&["CONFIG_PREEMPT_RT=y"], &["ro"]));
        assert_eq!(result.status(), Status::Pass);
        assert_eq!(result.detail(), "Kernel 6.8.0 is a real-time kernel.");
    }

    #[test]
    fn legacy_rt_full_flag_passes() {
        let result = primary(&PreemptRtProbe, &host(&["CONFIG_PREEMPT_RT_FULL=y"], &[]));
        assert_eq!(result.status(), Status::Pass);
    }

    #[test]
    fn threadirqs_passes() {
        let result = primary(
            &PreemptRtProbe,
            &host(&["CONFIG_PREEMPT_VOLUNTARY=y"], &["quiet", "threadirqs"]),
        );
        assert_eq!(result.status(), Status::Pass);
        assert!(result.detail().contains("threaded IRQs"));
    }

    #[test]
    fn full_preemption_passes() {
        let result = primary(
            &PreemptRtProbe,
            &host(&["CONFIG_PREEMPT_DYNAMIC=y"], &["preempt=full"]),
        );
        assert_eq!(result.status(), Status::Pass);
    }

    #[test]
    fn generic_kernel_fails_naming_release() {
        let result = primary(
            &PreemptRtProbe,
            &host(&["CONFIG_PREEMPT_VOLUNTARY=y"], &["quiet", "splash"]),
        );
        assert_eq!(result.status(), Status::Fail);
        assert!(result.detail().starts_with("Kernel 6.8.0 without 'threadirqs'"));
    }

    #[test]
    fn missing_config_fails_even_with_threadirqs() {
        let host = HostSnapshot {
            kernel_config: Outcome::NotFound,
            ..host(&[], &["threadirqs"])
        };
        let result = primary(&PreemptRtProbe, &host);
        assert_eq!(result.status(), Status::Fail);
        assert!(result.detail().contains("kernel configuration"));
    }
}
