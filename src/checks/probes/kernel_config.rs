//! Kernel build configuration lookup.
//!
//! Populates the shared kernel context every kernel-dependent check reads.

use crate::checks::{CheckContext, Probe, ProbeError, ProbeOutput};
use crate::host::Outcome;

/// Loads the kernel release, boot command line and build configuration
/// into the kernel context, and reports whether a configuration was found.
///
/// Must run before every probe that declares `needs_kernel_context`.
pub struct KernelConfigProbe;

impl Probe for KernelConfigProbe {
    fn key(&self) -> &'static str {
        "kernel_config"
    }

    fn headline(&self) -> &'static str {
        "Kernel Configuration"
    }

    fn description(&self) -> &'static str {
        "The kernel build configuration can be found"
    }

    fn run(&self, ctx: &CheckContext<'_>, out: &mut ProbeOutput) -> Result<(), ProbeError> {
        let release = ctx.host.kernel_release().found();
        let cmdline = ctx.host.boot_cmdline().found();
        let config = ctx.host.kernel_build_config(release.as_deref());

        ctx.kernel.set_release(release);
        ctx.kernel.set_cmdline(cmdline);

        match config {
            Outcome::Found(config) => {
                out.pass(format!(
                    "Valid kernel configuration found at {}.",
                    config.source().display()
                ));
                ctx.kernel.set_config(Some(config));
                Ok(())
            }
            Outcome::NotFound => {
                ctx.kernel.set_config(None);
                out.fail("Could not find kernel configuration.");
                Ok(())
            }
            Outcome::DeniedPermission(message) => {
                ctx.kernel.set_config(None);
                Err(ProbeError::PermissionDenied {
                    what: "the kernel configuration".into(),
                    message,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::{KernelContext, KernelLookup};
    use crate::config::AuditConfig;
    use crate::host::{HostSnapshot, UserIdentity};
    use crate::report::Status;

    fn run(host: &HostSnapshot, kernel: &KernelContext) -> ProbeOutput {
        let config = AuditConfig::default();
        let user = UserIdentity::new("alice", 1000);
        let ctx = CheckContext {
            host,
            config: &config,
            user: &user,
            kernel,
        };
        let mut out = ProbeOutput::new();
        KernelConfigProbe.run(&ctx, &mut out).unwrap();
        out
    }

    #[test]
    fn populates_context() {
        let kernel = KernelContext::new();
        let out = run(&HostSnapshot::tuned(), &kernel);

        let result = out.into_results("kernel_config", "Kernel Configuration").remove(0);
        assert_eq!(result.status(), Status::Pass);
        assert!(result.detail().contains("/proc/config.gz"));
        assert_eq!(kernel.release(), KernelLookup::Loaded("6.8.0-rt8"));
        assert!(kernel.cmdline_has("threadirqs").unwrap());
        assert!(kernel.require_config().unwrap().contains("CONFIG_PREEMPT_RT=y"));
    }

    #[test]
    fn missing_config_fails_and_marks_context() {
        let kernel = KernelContext::new();
        let host = HostSnapshot {
            kernel_config: Outcome::NotFound,
            ..HostSnapshot::tuned()
        };
        let out = run(&host, &kernel);

        let result = out.into_results("kernel_config", "Kernel Configuration").remove(0);
        assert_eq!(result.status(), Status::Fail);
        assert_eq!(result.detail(), "Could not find kernel configuration.");
        assert!(kernel.is_populated());
        assert_eq!(kernel.config(), KernelLookup::Missing);
        assert_eq!(kernel.release(), KernelLookup::Loaded("6.8.0-rt8"));
    }

    #[test]
    fn unreadable_release_and_cmdline_are_missing() {
        let kernel = KernelContext::new();
        let host = HostSnapshot {
            kernel_config: HostSnapshot::tuned().kernel_config,
            ..HostSnapshot::default()
        };
        run(&host, &kernel);
        assert_eq!(kernel.release(), KernelLookup::Missing);
        assert_eq!(kernel.cmdline(), KernelLookup::Missing);
        assert!(kernel.require_config().is_ok());
    }

    #[test]
    fn denied_config_is_an_error() {
        let kernel = KernelContext::new();
        let host = HostSnapshot {
            kernel_config: Outcome::DeniedPermission("Permission denied".into()),
            ..HostSnapshot::tuned()
        };
        let config = AuditConfig::default();
        let user = UserIdentity::new("alice", 1000);
        let ctx = CheckContext {
            host: &host,
            config: &config,
            user: &user,
            kernel: &kernel,
        };
        let err = KernelConfigProbe.run(&ctx, &mut ProbeOutput::new()).unwrap_err();
        assert!(matches!(err, ProbeError::PermissionDenied { .. }));
        assert_eq!(kernel.config(), KernelLookup::Missing);
    }
}
