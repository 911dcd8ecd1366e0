//! State shared between probes during one run.

use std::cell::OnceCell;

use super::error::ProbeError;
use crate::config::AuditConfig;
use crate::host::{HostEnvironment, KernelConfig, UserIdentity};

/// What a kernel context lookup found.
#[derive(Debug, PartialEq, Eq)]
pub enum KernelLookup<'a, T: ?Sized> {
    /// The kernel probe ran and stored a value.
    Loaded(&'a T),
    /// The kernel probe ran but the source was absent.
    Missing,
    /// The kernel probe has not run.
    Unpopulated,
}

/// Kernel release, boot parameters and build configuration.
///
/// Each field is set at most once, by the kernel configuration probe, and
/// is read by the probes registered after it.
#[derive(Debug, Default)]
pub struct KernelContext {
    release: OnceCell<Option<String>>,
    cmdline: OnceCell<Option<Vec<String>>>,
    config: OnceCell<Option<KernelConfig>>,
}

const CONFIG_SOURCE: &str = "kernel configuration";
const CMDLINE_SOURCE: &str = "kernel command line";

impl KernelContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the kernel release. Returns `false` if it was already set.
    pub fn set_release(&self, release: Option<String>) -> bool {
        set_once(&self.release, release, "release")
    }

    /// Store the boot command line. Returns `false` if it was already set.
    pub fn set_cmdline(&self, cmdline: Option<Vec<String>>) -> bool {
        set_once(&self.cmdline, cmdline, "cmdline")
    }

    /// Store the build configuration. Returns `false` if it was already set.
    pub fn set_config(&self, config: Option<KernelConfig>) -> bool {
        set_once(&self.config, config, "config")
    }

    /// Whether the kernel probe has stored its results.
    pub fn is_populated(&self) -> bool {
        self.config.get().is_some()
    }

    pub fn release(&self) -> KernelLookup<'_, str> {
        lookup(&self.release, |r| r.as_str())
    }

    pub fn cmdline(&self) -> KernelLookup<'_, [String]> {
        lookup(&self.cmdline, |c| c.as_slice())
    }

    pub fn config(&self) -> KernelLookup<'_, KernelConfig> {
        lookup(&self.config, |c| c)
    }

    /// The release, or `unknown` when it could not be read.
    pub fn release_label(&self) -> &str {
        match self.release() {
            KernelLookup::Loaded(release) => release,
            _ => "unknown",
        }
    }

    /// The build configuration, or an error explaining why there is none.
    pub fn require_config(&self) -> Result<&KernelConfig, ProbeError> {
        match self.config() {
            KernelLookup::Loaded(config) => Ok(config),
            KernelLookup::Missing => Err(ProbeError::SourceNotFound(CONFIG_SOURCE.to_string())),
            KernelLookup::Unpopulated => Err(unpopulated(CONFIG_SOURCE)),
        }
    }

    /// The boot command line, or an error explaining why there is none.
    pub fn require_cmdline(&self) -> Result<&[String], ProbeError> {
        match self.cmdline() {
            KernelLookup::Loaded(cmdline) => Ok(cmdline),
            KernelLookup::Missing => Err(ProbeError::SourceNotFound(CMDLINE_SOURCE.to_string())),
            KernelLookup::Unpopulated => Err(unpopulated(CMDLINE_SOURCE)),
        }
    }

    /// Whether the boot command line holds the exact token.
    pub fn cmdline_has(&self, token: &str) -> Result<bool, ProbeError> {
        Ok(self.require_cmdline()?.iter().any(|t| t == token))
    }
}

fn set_once<T>(cell: &OnceCell<Option<T>>, value: Option<T>, field: &str) -> bool {
    if cell.set(value).is_err() {
        tracing::warn!("kernel context {} already set; keeping first value", field);
        return false;
    }
    true
}

fn lookup<'a, T, U: ?Sized>(
    cell: &'a OnceCell<Option<T>>,
    view: impl FnOnce(&'a T) -> &'a U,
) -> KernelLookup<'a, U> {
    match cell.get() {
        Some(Some(value)) => KernelLookup::Loaded(view(value)),
        Some(None) => KernelLookup::Missing,
        None => KernelLookup::Unpopulated,
    }
}

fn unpopulated(what: &str) -> ProbeError {
    ProbeError::SourceNotFound(format!("{} (the kernel_config check did not run)", what))
}

/// Everything a probe may read.
pub struct CheckContext<'a> {
    pub host: &'a dyn HostEnvironment,
    pub config: &'a AuditConfig,
    pub user: &'a UserIdentity,
    pub kernel: &'a KernelContext,
}
