//! Real-time scheduling grant check.

use crate::checks::{see_also, CheckContext, Probe, ProbeError, ProbeOutput};
use crate::host::Outcome;

/// Tries to obtain FIFO real-time scheduling for this process.
///
/// A refusal is the expected result on a host without limits.conf set up
/// and is reported as a failing finding with the OS error text.
pub struct RtPrioProbe;

impl Probe for RtPrioProbe {
    fn key(&self) -> &'static str {
        "rt_prio"
    }

    fn headline(&self) -> &'static str {
        "RT Priorities"
    }

    fn description(&self) -> &'static str {
        "Real-time FIFO scheduling can be obtained"
    }

    fn run(&self, ctx: &CheckContext<'_>, out: &mut ProbeOutput) -> Result<(), ProbeError> {
        let priority = ctx.config.rt_priority;
        match ctx.host.attempt_elevated_scheduling(priority) {
            Outcome::Found(()) => out.pass("Realtime priorities can be set."),
            Outcome::DeniedPermission(error) => out.fail(format!(
                "Could not assign a {} rtprio SCHED_FIFO value due to the following error: {}. \
                 Set up limits.conf. {}",
                priority,
                error,
                see_also("limitsconfaudioconf")
            )),
            Outcome::NotFound => {
                return Err(ProbeError::SourceNotFound(
                    "support for SCHED_FIFO scheduling".into(),
                ))
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::probes::testing::primary;
    use crate::host::HostSnapshot;
    use crate::report::Status;

    fn host(scheduling: Outcome<()>) -> HostSnapshot {
        HostSnapshot {
            scheduling,
            ..HostSnapshot::default()
        }
    }

    #[test]
    fn granted_scheduling_passes() {
        let result = primary(&RtPrioProbe, &host(Outcome::Found(())));
        assert_eq!(result.status(), Status::Pass);
        assert_eq!(result.detail(), "Realtime priorities can be set.");
    }

    #[test]
    fn denied_scheduling_fails_with_error_text() {
        let result = primary(
            &RtPrioProbe,
            &host(Outcome::DeniedPermission(
                "Operation not permitted (os error 1)".into(),
            )),
        );
        assert_eq!(result.status(), Status::Fail);
        let detail = result.detail();
        assert!(detail.starts_with("Could not assign a 80 rtprio SCHED_FIFO value"));
        assert!(detail.contains("Operation not permitted (os error 1)"));
        assert!(detail.contains("#limitsconfaudioconf"));
    }

    #[test]
    fn unsupported_scheduling_fails() {
        let result = primary(&RtPrioProbe, &host(Outcome::NotFound));
        assert_eq!(result.status(), Status::Fail);
        assert!(result.detail().contains("SCHED_FIFO"));
    }
}
