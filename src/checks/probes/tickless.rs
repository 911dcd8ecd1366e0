//! Tickless timer check.

use crate::checks::{see_also, CheckContext, Probe, ProbeError, ProbeOutput};

const FLAGS: &[&str] = &["CONFIG_NO_HZ=y", "CONFIG_NO_HZ_IDLE=y", "CONFIG_NO_HZ_FULL=y"];

/// Checks for tickless timer support, from the build configuration or the
/// full-tickless sysfs node.
pub struct TicklessProbe;

impl Probe for TicklessProbe {
    fn key(&self) -> &'static str {
        "tickless"
    }

    fn headline(&self) -> &'static str {
        "Tickless Kernel"
    }

    fn description(&self) -> &'static str {
        "The kernel avoids a fixed periodic timer tick"
    }

    fn needs_kernel_context(&self) -> bool {
        true
    }

    fn run(&self, ctx: &CheckContext<'_>, out: &mut ProbeOutput) -> Result<(), ProbeError> {
        let config = ctx.kernel.require_config()?;
        if config.contains_any(FLAGS) || ctx.host.tickless_node_present() {
            out.pass("System is using a tickless kernel.");
        } else {
            out.fail(format!(
                "Tickless timer support is not set. Try enabling tickless timer support \
                 (CONFIG_NO_HZ_IDLE, or CONFIG_NO_HZ in older kernels). {}",
                see_also("installing_a_real-time_kernel")
            ));
        }
        Ok(())
    }
}
