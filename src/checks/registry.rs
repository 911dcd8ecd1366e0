//! Probe registry.
//!
//! The [`ProbeRegistry`] holds probes in run order. Order is significant:
//! the kernel configuration probe populates the kernel context that the
//! probes after it read.

use super::probe::Probe;
use super::probes::{
    AudioGroupProbe, BackgroundProcessesProbe, FilesystemsProbe, GovernorProbe,
    HighResTimersProbe, IrqsProbe, KernelConfigProbe, MitigationsProbe, PowerManagementProbe,
    PreemptRtProbe, RootProbe, RtPrioProbe, SwappinessProbe, TicklessProbe,
};
use crate::error::{Result, RtcheckError};

/// Key of the probe that populates the kernel context.
pub const KERNEL_CONFIG_KEY: &str = "kernel_config";

/// Ordered collection of probes.
pub struct ProbeRegistry {
    probes: Vec<Box<dyn Probe>>,
}

impl ProbeRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self { probes: Vec::new() }
    }

    /// Create a registry with all built-in probes in run order.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(RootProbe));
        registry.register(Box::new(AudioGroupProbe));
        registry.register(Box::new(BackgroundProcessesProbe));
        registry.register(Box::new(GovernorProbe));
        registry.register(Box::new(KernelConfigProbe));
        registry.register(Box::new(HighResTimersProbe));
        registry.register(Box::new(TicklessProbe));
        registry.register(Box::new(PreemptRtProbe));
        registry.register(Box::new(MitigationsProbe));
        registry.register(Box::new(RtPrioProbe));
        registry.register(Box::new(SwappinessProbe));
        registry.register(Box::new(FilesystemsProbe));
        registry.register(Box::new(IrqsProbe));
        registry.register(Box::new(PowerManagementProbe));
        registry
    }

    /// Append a probe. A probe whose key is already registered is dropped.
    pub fn register(&mut self, probe: Box<dyn Probe>) {
        if self.get(probe.key()).is_some() {
            tracing::warn!("probe '{}' already registered; ignoring", probe.key());
            return;
        }
        self.probes.push(probe);
    }

    /// Get a probe by key.
    pub fn get(&self, key: &str) -> Option<&dyn Probe> {
        self.probes
            .iter()
            .find(|p| p.key() == key)
            .map(|p| p.as_ref())
    }

    /// Iterate over probes in run order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Probe> {
        self.probes.iter().map(|p| p.as_ref())
    }

    /// Registered keys in run order.
    pub fn keys(&self) -> Vec<&'static str> {
        self.probes.iter().map(|p| p.key()).collect()
    }

    /// Get the number of registered probes.
    pub fn len(&self) -> usize {
        self.probes.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.probes.is_empty()
    }

    /// Narrow the registry to a selection, keeping run order.
    ///
    /// An empty `only` keeps everything. Probes in `skip` are removed. If
    /// a kept probe needs the kernel context, the kernel configuration
    /// probe is kept too, even when skipped. Unknown keys are an error.
    pub fn select(self, only: &[String], skip: &[String]) -> Result<Self> {
        for key in only.iter().chain(skip) {
            if self.get(key).is_none() {
                return Err(RtcheckError::UnknownCheck { key: key.clone() });
            }
        }

        let wanted = |key: &str| {
            (only.is_empty() || only.iter().any(|k| k == key)) && !skip.iter().any(|k| k == key)
        };
        let needs_kernel = self
            .probes
            .iter()
            .any(|p| wanted(p.key()) && p.needs_kernel_context());

        let probes: Vec<_> = self
            .probes
            .into_iter()
            .filter(|p| wanted(p.key()) || (needs_kernel && p.key() == KERNEL_CONFIG_KEY))
            .collect();

        tracing::debug!(
            "selected probes: {}",
            probes.iter().map(|p| p.key()).collect::<Vec<_>>().join(", ")
        );
        Ok(Self { probes })
    }
}

impl Default for ProbeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
