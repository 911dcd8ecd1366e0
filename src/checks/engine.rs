//! Check execution.

use super::context::{CheckContext, KernelContext};
use super::probe::{Probe, ProbeOutput};
use super::registry::ProbeRegistry;
use crate::config::AuditConfig;
use crate::host::{HostEnvironment, UserIdentity};
use crate::report::{CheckResult, Report, ResultStore};

/// Receives progress notifications while the engine runs.
pub trait ProbeObserver {
    /// A probe is about to run. `index` is zero-based.
    fn probe_started(&self, _index: usize, _total: usize, _probe: &dyn Probe) {}

    /// A probe finished and its results were stored.
    fn probe_finished(&self, _probe: &dyn Probe, _results: &[CheckResult]) {}
}

/// Runs every registered probe once, in order.
///
/// A probe that returns an error gets a failing finding with the error
/// text; the next probe runs regardless.
pub struct CheckEngine<'a> {
    host: &'a dyn HostEnvironment,
    config: &'a AuditConfig,
    user: &'a UserIdentity,
    observer: Option<&'a dyn ProbeObserver>,
}

impl<'a> CheckEngine<'a> {
    pub fn new(
        host: &'a dyn HostEnvironment,
        config: &'a AuditConfig,
        user: &'a UserIdentity,
    ) -> Self {
        Self {
            host,
            config,
            user,
            observer: None,
        }
    }

    pub fn with_observer(mut self, observer: &'a dyn ProbeObserver) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Execute the registry and return the frozen report.
    pub fn run(&self, registry: &ProbeRegistry) -> Report {
        let kernel = KernelContext::new();
        let ctx = CheckContext {
            host: self.host,
            config: self.config,
            user: self.user,
            kernel: &kernel,
        };

        let mut store = ResultStore::new();
        let total = registry.len();

        for (index, probe) in registry.iter().enumerate() {
            if let Some(observer) = self.observer {
                observer.probe_started(index, total, probe);
            }

            let results = run_probe(probe, &ctx);
            if let Some(observer) = self.observer {
                observer.probe_finished(probe, &results);
            }
            for result in results {
                store.insert(result);
            }
        }

        tracing::debug!("engine finished: {} results", store.len());
        store.freeze()
    }
}

/// Appended to the text of a probe that could not complete.
pub const FAILURE_HINT: &str = "Run with --debug for more detail.";

/// Run one probe, turning an error into a failing finding.
pub(crate) fn run_probe(probe: &dyn Probe, ctx: &CheckContext<'_>) -> Vec<CheckResult> {
    tracing::debug!("running probe '{}'", probe.key());

    let mut out = ProbeOutput::new();
    if let Err(e) = probe.run(ctx, &mut out) {
        tracing::warn!("probe '{}' failed: {}", probe.key(), e);
        out.fail(format!("{} {}", e, FAILURE_HINT));
    }

    let results = out.into_results(probe.key(), probe.headline());
    tracing::debug!(
        "probe '{}' finished: {}",
        probe.key(),
        results[0].status()
    );
    results
}
