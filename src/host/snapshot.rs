//! In-memory host for tests.
//!
//! `HostSnapshot` implements [`HostEnvironment`] from plain fields so probe
//! and engine behaviour can be exercised against any host state.
//!
//! # Example
//!
//! ```
//! use rtcheck::host::{HostEnvironment, HostSnapshot, Outcome};
//!
//! let mut host = HostSnapshot::tuned();
//! host.swappiness = Outcome::Found(60);
//! assert_eq!(host.swappiness(), Outcome::Found(60));
//! ```

use super::types::{
    InterruptLine, KernelConfig, LimitValue, MountEntry, ResourceKind, ResourceLimit,
};
use super::{HostEnvironment, Outcome};

/// Fixed host state served through [`HostEnvironment`].
#[derive(Debug, Clone)]
pub struct HostSnapshot {
    /// One entry per CPU, indexed from 0 without gaps.
    pub governors: Vec<Outcome<String>>,
    pub kernel_release: Outcome<String>,
    pub cmdline: Outcome<Vec<String>>,
    /// Build config lines, reported as read from `/proc/config.gz`.
    pub kernel_config: Outcome<Vec<String>>,
    pub tickless_node: bool,
    pub rtprio_limit: Outcome<ResourceLimit>,
    pub memlock_limit: Outcome<ResourceLimit>,
    pub swap_entries: Outcome<usize>,
    pub swappiness: Outcome<u32>,
    pub mounts: Outcome<Vec<MountEntry>>,
    pub interrupts: Outcome<Vec<InterruptLine>>,
    pub processes: Outcome<Vec<String>>,
    pub dma_latency_writable: bool,
    pub scheduling: Outcome<()>,
}

impl Default for HostSnapshot {
    /// A host where nothing can be read.
    fn default() -> Self {
        Self {
            governors: Vec::new(),
            kernel_release: Outcome::NotFound,
            cmdline: Outcome::NotFound,
            kernel_config: Outcome::NotFound,
            tickless_node: false,
            rtprio_limit: Outcome::NotFound,
            memlock_limit: Outcome::NotFound,
            swap_entries: Outcome::NotFound,
            swappiness: Outcome::NotFound,
            mounts: Outcome::NotFound,
            interrupts: Outcome::NotFound,
            processes: Outcome::NotFound,
            dma_latency_writable: false,
            scheduling: Outcome::NotFound,
        }
    }
}

impl HostSnapshot {
    /// A host configured the way a real-time audio workstation should be.
    /// Every built-in check passes against it.
    pub fn tuned() -> Self {
        Self {
            governors: vec![Outcome::Found("performance".to_string()); 4],
            kernel_release: Outcome::Found("6.8.0-rt8".to_string()),
            cmdline: Outcome::Found(vec![
                "BOOT_IMAGE=/vmlinuz-6.8.0-rt8".to_string(),
                "ro".to_string(),
                "threadirqs".to_string(),
                "mitigations=off".to_string(),
            ]),
            kernel_config: Outcome::Found(vec![
                "CONFIG_HIGH_RES_TIMERS=y".to_string(),
                "CONFIG_NO_HZ_IDLE=y".to_string(),
                "CONFIG_PREEMPT_RT=y".to_string(),
                "CONFIG_HZ=1000".to_string(),
            ]),
            tickless_node: false,
            rtprio_limit: Outcome::Found(ResourceLimit::both(LimitValue::Value(95))),
            memlock_limit: Outcome::Found(ResourceLimit::both(LimitValue::Unlimited)),
            swap_entries: Outcome::Found(1),
            swappiness: Outcome::Found(60),
            mounts: Outcome::Found(vec![
                MountEntry::new("/dev/nvme0n1p2", "/", "ext4"),
                MountEntry::new("/dev/nvme0n1p3", "/home", "btrfs"),
                MountEntry::new("tmpfs", "/run", "tmpfs"),
            ]),
            interrupts: Outcome::Found(vec![
                InterruptLine::new("0", "timer"),
                InterruptLine::new("130", "snd_hda_intel:card0"),
            ]),
            processes: Outcome::Found(vec!["/usr/bin/jackd -d alsa".to_string()]),
            dma_latency_writable: true,
            scheduling: Outcome::Found(()),
        }
    }
}

impl HostEnvironment for HostSnapshot {
    fn cpu_ids(&self) -> Outcome<Vec<usize>> {
        Outcome::Found((0..self.governors.len()).collect())
    }

    fn scaling_governor(&self, cpu: usize) -> Outcome<String> {
        self.governors.get(cpu).cloned().unwrap_or(Outcome::NotFound)
    }

    fn kernel_release(&self) -> Outcome<String> {
        self.kernel_release.clone()
    }

    fn boot_cmdline(&self) -> Outcome<Vec<String>> {
        self.cmdline.clone()
    }

    fn kernel_build_config(&self, _release: Option<&str>) -> Outcome<KernelConfig> {
        self.kernel_config
            .clone()
            .map(|lines| KernelConfig::new("/proc/config.gz", lines))
    }

    fn tickless_node_present(&self) -> bool {
        self.tickless_node
    }

    fn resource_limits(&self, kind: ResourceKind) -> Outcome<ResourceLimit> {
        match kind {
            ResourceKind::RealtimePriority => self.rtprio_limit.clone(),
            ResourceKind::LockedMemory => self.memlock_limit.clone(),
        }
    }

    fn swap_entry_count(&self) -> Outcome<usize> {
        self.swap_entries.clone()
    }

    fn swappiness(&self) -> Outcome<u32> {
        self.swappiness.clone()
    }

    fn mount_table(&self) -> Outcome<Vec<MountEntry>> {
        self.mounts.clone()
    }

    fn interrupt_actions(&self) -> Outcome<Vec<InterruptLine>> {
        self.interrupts.clone()
    }

    fn process_command_lines(&self) -> Outcome<Vec<String>> {
        self.processes.clone()
    }

    fn can_write_dma_latency_node(&self) -> bool {
        self.dma_latency_writable
    }

    fn attempt_elevated_scheduling(&self, _priority: i32) -> Outcome<()> {
        self.scheduling.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_snapshot_reads_nothing() {
        let host = HostSnapshot::default();
        assert_eq!(host.cpu_ids(), Outcome::Found(Vec::new()));
        assert_eq!(host.kernel_build_config(Some("6.8.0")), Outcome::NotFound);
        assert!(!host.can_write_dma_latency_node());
    }

    #[test]
    fn governor_beyond_last_cpu_is_not_found() {
        let host = HostSnapshot::tuned();
        assert_eq!(host.scaling_governor(3), Outcome::Found("performance".into()));
        assert_eq!(host.scaling_governor(4), Outcome::NotFound);
    }

    #[test]
    fn limits_follow_resource_kind() {
        let host = HostSnapshot::tuned();
        assert_eq!(
            host.resource_limits(ResourceKind::LockedMemory),
            Outcome::Found(ResourceLimit::both(LimitValue::Unlimited))
        );
        assert_eq!(
            host.resource_limits(ResourceKind::RealtimePriority),
            Outcome::Found(ResourceLimit::both(LimitValue::Value(95)))
        );
    }
}
