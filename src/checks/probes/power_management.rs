//! CPU DMA latency control access check.

use crate::checks::{see_also, CheckContext, Probe, ProbeError, ProbeOutput};

/// Checks that the user may write the CPU DMA latency node, which audio
/// applications use to keep CPUs out of deep idle states.
pub struct PowerManagementProbe;

impl Probe for PowerManagementProbe {
    fn key(&self) -> &'static str {
        "power_management"
    }

    fn headline(&self) -> &'static str {
        "Power Management"
    }

    fn description(&self) -> &'static str {
        "/dev/cpu_dma_latency is writable by the user"
    }

    fn run(&self, ctx: &CheckContext<'_>, out: &mut ProbeOutput) -> Result<(), ProbeError> {
        if ctx.host.can_write_dma_latency_node() {
            out.pass(
                "Power management can be controlled from user space. This enables DAWs like \
                 Ardour and Reaper to set CPU DMA latency which could help prevent xruns.",
            );
        } else {
            out.fail(format!(
                "Power management can't be controlled from user space, the device node \
                 /dev/cpu_dma_latency can't be accessed by your user. This prohibits DAWs like \
                 Ardour and Reaper to set CPU DMA latency which could help prevent xruns. {}",
                see_also("quality_of_service_interface")
            ));
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

    #[test]
    fn writable_node_passes() {
        let host = HostSnapshot {
            dma_latency_writable: true,
            ..HostSnapshot::default()
        };
        assert_eq!(primary(&PowerManagementProbe, &host).status(), Status::Pass);
    }

    #[test]
    fn inaccessible_node_fails() {
        let result = primary(&PowerManagementProbe, &HostSnapshot::default());
        assert_eq!(result.status(), Status::Fail);
        assert!(result.detail().contains("/dev/cpu_dma_latency"));
        assert!(result.detail().contains("#quality_of_service_interface"));
    }
}
