//! Check execution.
//!
//! Probes are registered in a [`ProbeRegistry`] and executed in order by
//! the [`CheckEngine`], which hands each one a [`CheckContext`] and stores
//! what it records.
//!
//! # Modules
//!
//! - [`context`] - Shared kernel context and the per-run check context
//! - [`engine`] - Runs probes and isolates their failures
//! - [`error`] - Errors a single probe can hit
//! - [`probe`] - The `Probe` trait and its output collector
//! - [`probes`] - Built-in probes, one per topic
//! - [`registry`] - Ordered probe registry and selection

pub mod context;
pub mod engine;
pub mod error;
pub mod probe;
pub mod probes;
pub mod registry;

pub use context::{CheckContext, KernelContext, KernelLookup};
pub use engine::{CheckEngine, ProbeObserver};
pub use error::ProbeError;
pub use probe::{Probe, ProbeOutput};
pub use registry::ProbeRegistry;

/// Page with remediation advice for every topic.
pub const WIKI_URL: &str = "https://wiki.linuxaudio.org/wiki/system_configuration";

/// Pointer to the section of the wiki covering `anchor`.
pub fn see_also(anchor: &str) -> String {
    format!("See also {}#{}", WIKI_URL, anchor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn see_also_links_to_anchor() {
        assert_eq!(
            see_also("sysctlconf"),
            "See also https://wiki.linuxaudio.org/wiki/system_configuration#sysctlconf"
        );
    }
}
