//! Typed values produced by the environment reader.

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

/// A resource whose per-process limit is inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// Highest real-time scheduling priority the process may request.
    RealtimePriority,
    /// Amount of memory the process may lock into RAM.
    LockedMemory,
}

impl ResourceKind {
    /// Row label used by `/proc/<pid>/limits`.
    pub fn limits_label(self) -> &'static str {
        match self {
            Self::RealtimePriority => "Max realtime priority",
            Self::LockedMemory => "Max locked memory",
        }
    }
}

/// One side of a resource limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitValue {
    Unlimited,
    Value(u64),
}

impl LimitValue {
    /// Whether this limit is at least `min`. Unlimited satisfies everything.
    pub fn at_least(self, min: u64) -> bool {
        match self {
            Self::Unlimited => true,
            Self::Value(v) => v >= min,
        }
    }

    pub fn is_unlimited(self) -> bool {
        matches!(self, Self::Unlimited)
    }
}

impl fmt::Display for LimitValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unlimited => write!(f, "unlimited"),
            Self::Value(v) => write!(f, "{}", v),
        }
    }
}

/// Soft and hard limit pair for a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceLimit {
    pub soft: LimitValue,
    pub hard: LimitValue,
}

impl ResourceLimit {
    pub fn new(soft: LimitValue, hard: LimitValue) -> Self {
        Self { soft, hard }
    }

    /// Same value for soft and hard.
    pub fn both(value: LimitValue) -> Self {
        Self::new(value, value)
    }
}

/// One row of the mount table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountEntry {
    pub device: String,
    pub mount_point: String,
    pub fs_type: String,
}

impl MountEntry {
    pub fn new(
        device: impl Into<String>,
        mount_point: impl Into<String>,
        fs_type: impl Into<String>,
    ) -> Self {
        Self {
            device: device.into(),
            mount_point: mount_point.into(),
            fs_type: fs_type.into(),
        }
    }

    /// Filesystem type without its subtype (`fuse.sshfs` -> `fuse`).
    pub fn base_fs_type(&self) -> &str {
        self.fs_type.split('.').next().unwrap_or(&self.fs_type)
    }
}

/// An interrupt line and the device actions registered on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterruptLine {
    /// Interrupt identifier (`30`, `NMI`, ...).
    pub irq: String,
    /// Comma separated device action list as reported by the kernel.
    pub action: String,
}

impl InterruptLine {
    pub fn new(irq: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            irq: irq.into(),
            action: action.into(),
        }
    }

    /// Devices sharing this interrupt, in reported order.
    pub fn devices(&self) -> Vec<&str> {
        self.action
            .split(", ")
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .collect()
    }
}

/// Parsed kernel build configuration.
///
/// Holds the set of configuration lines (`CONFIG_HZ=1000`, ...) and the
/// file they were read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KernelConfig {
    source: PathBuf,
    lines: HashSet<String>,
}

impl KernelConfig {
    pub fn new<I, S>(source: impl Into<PathBuf>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            source: source.into(),
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse the text of a config file. Blank lines are dropped and
    /// surrounding whitespace is trimmed.
    pub fn parse(source: impl Into<PathBuf>, text: &str) -> Self {
        Self::new(
            source,
            text.lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string),
        )
    }

    /// Whether the exact line is present.
    pub fn contains(&self, line: &str) -> bool {
        self.lines.contains(line)
    }

    /// Whether any of the given lines is present.
    pub fn contains_any(&self, lines: &[&str]) -> bool {
        lines.iter().any(|l| self.contains(l))
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// The user the scan runs as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdentity {
    pub name: String,
    pub uid: u32,
}

impl UserIdentity {
    pub fn new(name: impl Into<String>, uid: u32) -> Self {
        Self {
            name: name.into(),
            uid,
        }
    }

    pub fn is_superuser(&self) -> bool {
        self.uid == 0
    }
}
