//! Spectre/Meltdown mitigation check.

use crate::checks::{see_also, CheckContext, Probe, ProbeError, ProbeOutput};

/// Reports whether CPU vulnerability mitigations were turned off on the
/// boot command line. Passing here trades security for latency.
pub struct MitigationsProbe;

impl Probe for MitigationsProbe {
    fn key(&self) -> &'static str {
        "mitigations"
    }

    fn headline(&self) -> &'static str {
        "Spectre/Meltdown Mitigations"
    }

    fn description(&self) -> &'static str {
        "Spectre/Meltdown mitigations are disabled"
    }

    fn needs_kernel_context(&self) -> bool {
        true
    }

    fn run(&self, ctx: &CheckContext<'_>, out: &mut ProbeOutput) -> Result<(), ProbeError> {
        if ctx.kernel.cmdline_has("mitigations=off")? {
            out.pass(
                "Spectre/Meltdown mitigations are disabled. Be warned that this makes your \
                 system more vulnerable to Spectre/Meltdown attacks.",
            );
        } else {
            out.fail(format!(
                "Kernel with Spectre/Meltdown mitigations found. This could have a negative \
                 impact on the performance of your system. {}",
                see_also("disabling_spectre_and_meltdown_mitigations")
            ));
        }
        Ok(())
    }
}
