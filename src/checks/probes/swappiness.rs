//! Swappiness check.

use crate::checks::{see_also, CheckContext, Probe, ProbeError, ProbeOutput};

/// Checks `vm.swappiness` when swap is configured.
pub struct SwappinessProbe;

impl Probe for SwappinessProbe {
    fn key(&self) -> &'static str {
        "swappiness"
    }

    fn headline(&self) -> &'static str {
        "Swappiness"
    }

    fn description(&self) -> &'static str {
        "Swappiness is low enough when swap is in use"
    }

    fn run(&self, ctx: &CheckContext<'_>, out: &mut ProbeOutput) -> Result<(), ProbeError> {
        // The swap table always has a header line.
        let entries = ctx.host.swap_entry_count().require("the swap table")?;
        if entries < 2 {
            out.not_applicable(
                "Your system is configured without swap, setting swappiness does not apply.",
            );
            return Ok(());
        }

        let swappiness = ctx.host.swappiness().require("vm.swappiness")?;
        let max = ctx.config.max_swappiness;
        if swappiness > max {
            out.fail(format!(
                "vm.swappiness is set to {} which is too high. Set swappiness to a lower value \
                 by adding 'vm.swappiness={}' to /etc/sysctl.conf and run 'sysctl --system'. {}",
                swappiness,
                max,
                see_also("sysctlconf")
            ));
        } else {
            out.pass(format!("Swappiness is set at {}.", swappiness));
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

    fn host(entries: usize, swappiness: Outcome<u32>) -> HostSnapshot {
        HostSnapshot {
            swap_entries: Outcome::Found(entries),
            swappiness,
            ..HostSnapshot::default()
        }
    }

    #[test]
    fn no_swap_does_not_apply_regardless_of_value() {
        for entries in [0, 1] {
            let result = primary(&SwappinessProbe, &host(entries, Outcome::Found(100)));
            assert_eq!(result.status(), Status::NotApplicable);
            assert!(result.passed());
            assert!(result.detail().contains("without swap"));
        }
    }

    #[test]
    fn boundary_value_passes() {
        let result = primary(&SwappinessProbe, &host(2, Outcome::Found(10)));
        assert_eq!(result.status(), Status::Pass);
        assert_eq!(result.detail(), "Swappiness is set at 10.");
    }

    #[test]
    fn value_above_boundary_fails() {
        let result = primary(&SwappinessProbe, &host(2, Outcome::Found(11)));
        assert_eq!(result.status(), Status::Fail);
        assert!(result.detail().contains("vm.swappiness is set to 11"));
        assert!(result.detail().contains("'vm.swappiness=10'"));
    }

    #[test]
    fn malformed_value_fails_the_probe() {
        let result = primary(&SwappinessProbe, &host(3, Outcome::NotFound));
        assert_eq!(result.status(), Status::Fail);
        assert!(result.detail().starts_with("Could not find vm.swappiness."));
    }

    #[test]
    fn unreadable_swap_table_fails() {
        let result = primary(&SwappinessProbe, &HostSnapshot::default());
        assert_eq!(result.status(), Status::Fail);
        assert!(result.detail().contains("swap table"));
    }
}
