//! Threshold and pattern settings used by the checks.
//!
//! Every field has a default, so an empty YAML document (or no file at all)
//! yields the stock audit. A file only needs the keys it changes:
//!
//! ```yaml
//! max_swappiness: 20
//! filesystems:
//!   ignored_prefixes: [/run, /snap, /mnt/scratch]
//! ```

use std::path::PathBuf;

use serde::Deserialize;

/// Settings for one audit run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    /// Directory the host's `/proc`, `/sys`, `/boot` and `/dev` are read from.
    pub host_root: PathBuf,

    /// Lowest acceptable real-time priority limit.
    pub min_rtprio: u64,

    /// Priority used when trying to obtain FIFO scheduling.
    pub rt_priority: i32,

    /// Highest acceptable `vm.swappiness` when swap is configured.
    pub max_swappiness: u32,

    /// Governor every online CPU must use.
    pub expected_governor: String,

    pub filesystems: FilesystemRules,

    pub irqs: IrqPatterns,

    /// Daemons known to interfere with low-latency audio.
    pub background_processes: Vec<String>,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            host_root: PathBuf::from("/"),
            min_rtprio: 75,
            rt_priority: 80,
            max_swappiness: 10,
            expected_governor: "performance".to_string(),
            filesystems: FilesystemRules::default(),
            irqs: IrqPatterns::default(),
            background_processes: vec!["powersaved".to_string(), "kpowersave".to_string()],
        }
    }
}

/// Which mounts are good or bad homes for audio data.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FilesystemRules {
    pub approved: Vec<String>,
    pub disapproved: Vec<String>,
    /// Mount points that should never hold audio data, whatever the type.
    pub disapproved_mounts: Vec<String>,
    /// Mounts at or under these paths are not considered at all.
    pub ignored_prefixes: Vec<String>,
}

impl Default for FilesystemRules {
    fn default() -> Self {
        Self {
            approved: strings(&["ext4", "xfs", "zfs", "btrfs"]),
            disapproved: strings(&["fuse", "reiserfs", "nfs", "nfs4"]),
            disapproved_mounts: strings(&["/boot"]),
            ignored_prefixes: strings(&["/run", "/snap", "/var/lib/docker"]),
        }
    }
}

/// Regular expressions selecting the interrupts worth inspecting.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IrqPatterns {
    pub sound: String,
    pub usb: String,
}

impl Default for IrqPatterns {
    fn default() -> Self {
        Self {
            sound: "audiodsp|snd_.*".to_string(),
            usb: "[eoux]hci_hcd".to_string(),
        }
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}
