//! Host inspection.
//!
//! Every probe reads the machine through the [`HostEnvironment`] trait. Each
//! operation returns an [`Outcome`] instead of an error so that a missing
//! `/proc` entry or a refused syscall is an ordinary value the probe can
//! report on.
//!
//! # Modules
//!
//! - [`linux`] - Reads a live (or fixture) Linux host
//! - [`parse`] - Parsers for the `/proc` text formats
//! - [`snapshot`] - In-memory host used by tests
//! - [`types`] - Typed values returned by the reader
//! - [`user`] - Resolution of the invoking user

pub mod linux;
pub mod parse;
pub mod snapshot;
pub mod types;
pub mod user;

pub use linux::LinuxHost;
pub use snapshot::HostSnapshot;
pub use types::{
    InterruptLine, KernelConfig, LimitValue, MountEntry, ResourceKind, ResourceLimit,
    UserIdentity,
};
pub use user::resolve_user;

/// Result of reading one host source.
///
/// Malformed content is reported as `NotFound`: a value that cannot be
/// parsed is as useless to a probe as one that is absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The source exists and holds a usable value.
    Found(T),
    /// The source is absent, unreadable or malformed.
    NotFound,
    /// The operation was refused; carries the OS error text.
    DeniedPermission(String),
}

impl<T> Outcome<T> {
    /// Convert an IO result, classifying the error kind.
    pub fn from_io(result: std::io::Result<T>) -> Self {
        match result {
            Ok(value) => Self::Found(value),
            Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
                Self::DeniedPermission(e.to_string())
            }
            Err(e) => {
                tracing::debug!("host source unavailable: {}", e);
                Self::NotFound
            }
        }
    }

    /// Convert a parse result; `None` means malformed.
    pub fn from_parsed(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::Found(v),
            None => Self::NotFound,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The value, discarding why it is missing.
    pub fn found(self) -> Option<T> {
        match self {
            Self::Found(v) => Some(v),
            _ => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        match self {
            Self::Found(v) => Outcome::Found(f(v)),
            Self::NotFound => Outcome::NotFound,
            Self::DeniedPermission(msg) => Outcome::DeniedPermission(msg),
        }
    }

    pub fn and_then<U, F: FnOnce(T) -> Outcome<U>>(self, f: F) -> Outcome<U> {
        match self {
            Self::Found(v) => f(v),
            Self::NotFound => Outcome::NotFound,
            Self::DeniedPermission(msg) => Outcome::DeniedPermission(msg),
        }
    }
}

/// Read-only view of the host the checks run against.
///
/// [`LinuxHost`] reads the real machine; [`HostSnapshot`] serves fixed
/// values so probe logic can be tested without touching `/proc`.
pub trait HostEnvironment {
    /// Indices of the CPUs known to the kernel, online or not, ascending.
    /// The numbering can have gaps.
    fn cpu_ids(&self) -> Outcome<Vec<usize>>;

    /// Frequency scaling governor of one CPU. `NotFound` for CPUs without
    /// a governor file (offline or SMT-disabled cores).
    fn scaling_governor(&self, cpu: usize) -> Outcome<String>;

    /// Running kernel release string.
    fn kernel_release(&self) -> Outcome<String>;

    /// Boot command line, split into tokens.
    fn boot_cmdline(&self) -> Outcome<Vec<String>>;

    /// Kernel build configuration. Tries the live compressed config first,
    /// then the boot config file matching `release`.
    fn kernel_build_config(&self, release: Option<&str>) -> Outcome<KernelConfig>;

    /// Whether the full-tickless sysfs node exists.
    fn tickless_node_present(&self) -> bool;

    /// Limits granted to the current process for a resource.
    fn resource_limits(&self, kind: ResourceKind) -> Outcome<ResourceLimit>;

    /// Number of lines in the swap table, header included.
    fn swap_entry_count(&self) -> Outcome<usize>;

    /// Current `vm.swappiness` value.
    fn swappiness(&self) -> Outcome<u32>;

    /// Mounted filesystems in mount order.
    fn mount_table(&self) -> Outcome<Vec<MountEntry>>;

    /// Interrupt lines with their device action strings.
    fn interrupt_actions(&self) -> Outcome<Vec<InterruptLine>>;

    /// Command lines of all running processes that expose one.
    fn process_command_lines(&self) -> Outcome<Vec<String>>;

    /// Whether the current user may write the CPU DMA latency node.
    fn can_write_dma_latency_node(&self) -> bool;

    /// Request FIFO real-time scheduling at `priority` for this process.
    fn attempt_elevated_scheduling(&self, priority: i32) -> Outcome<()>;
}
