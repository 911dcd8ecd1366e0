//! Superuser detection.

use crate::checks::{CheckContext, Probe, ProbeError, ProbeOutput};

/// Warns when the scan runs as the superuser, since limits and scheduling
/// results then say nothing about the account doing audio work.
pub struct RootProbe;

impl Probe for RootProbe {
    fn key(&self) -> &'static str {
        "root"
    }

    fn headline(&self) -> &'static str {
        "Root User"
    }

    fn description(&self) -> &'static str {
        "The scan runs as a regular user"
    }

    fn run(&self, ctx: &CheckContext<'_>, out: &mut ProbeOutput) -> Result<(), ProbeError> {
        if ctx.user.is_superuser() {
            out.fail(
                "You are running this script as root. Please run it as a regular user \
                 for the most reliable results.",
            );
        } else {
            out.pass("Not running as root.");
        }
        Ok(())
    }
}
