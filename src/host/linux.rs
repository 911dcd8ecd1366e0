//! Environment reader for a Linux host.
//!
//! All file-backed sources are resolved relative to a root directory,
//! `/` for the live system. Pointing the root at a directory tree with the
//! same layout (`proc/cmdline`, `sys/devices/system/cpu/...`) lets tests
//! and `--root` scans run against captured host state. The effective user
//! and the real-time scheduling request always go to the running kernel.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;

use super::parse;
use super::types::{InterruptLine, KernelConfig, MountEntry, ResourceKind, ResourceLimit};
use super::{HostEnvironment, Outcome};

const CPU_DIR: &str = "sys/devices/system/cpu";
const LIVE_CONFIG: &str = "proc/config.gz";
const DMA_LATENCY_NODE: &str = "dev/cpu_dma_latency";

/// Reads host state from procfs, sysfs and a handful of syscalls.
#[derive(Debug, Clone)]
pub struct LinuxHost {
    root: PathBuf,
}

impl Default for LinuxHost {
    fn default() -> Self {
        Self::new()
    }
}

impl LinuxHost {
    /// Reader for the live system.
    pub fn new() -> Self {
        Self::with_root("/")
    }

    /// Reader resolving every file source under `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative.trim_start_matches('/'))
    }

    fn read(&self, relative: &str) -> Outcome<String> {
        let path = self.path(relative);
        let outcome = Outcome::from_io(fs::read_to_string(&path));
        if !outcome.is_found() {
            tracing::debug!("could not read {}", path.display());
        }
        outcome
    }

    fn read_gzip(&self, relative: &str) -> Outcome<String> {
        let path = self.path(relative);
        Outcome::from_io(fs::File::open(&path).and_then(|file| {
            let mut text = String::new();
            GzDecoder::new(file).read_to_string(&mut text)?;
            Ok(text)
        }))
    }
}

impl HostEnvironment for LinuxHost {
    fn cpu_ids(&self) -> Outcome<Vec<usize>> {
        Outcome::from_io(fs::read_dir(self.path(CPU_DIR))).map(|entries| {
            let mut ids: Vec<usize> = entries
                .filter_map(|entry| entry.ok())
                .filter_map(|entry| cpu_index(&entry.file_name().to_string_lossy()))
                .collect();
            ids.sort_unstable();
            ids
        })
    }

    fn scaling_governor(&self, cpu: usize) -> Outcome<String> {
        self.read(&format!("{}/cpu{}/cpufreq/scaling_governor", CPU_DIR, cpu))
            .and_then(|text| Outcome::from_parsed(parse::first_line(&text)))
    }

    fn kernel_release(&self) -> Outcome<String> {
        self.read("proc/sys/kernel/osrelease")
            .and_then(|text| Outcome::from_parsed(parse::first_line(&text)))
    }

    fn boot_cmdline(&self) -> Outcome<Vec<String>> {
        self.read("proc/cmdline").map(|text| parse::parse_cmdline(&text))
    }

    fn kernel_build_config(&self, release: Option<&str>) -> Outcome<KernelConfig> {
        if let Outcome::Found(text) = self.read_gzip(LIVE_CONFIG) {
            return Outcome::Found(KernelConfig::parse(self.path(LIVE_CONFIG), &text));
        }

        let Some(release) = release else {
            return Outcome::NotFound;
        };
        let boot_config = format!("boot/config-{}", release);
        self.read(&boot_config)
            .map(|text| KernelConfig::parse(self.path(&boot_config), &text))
    }

    fn tickless_node_present(&self) -> bool {
        self.path(&format!("{}/nohz_full", CPU_DIR)).exists()
    }

    fn resource_limits(&self, kind: ResourceKind) -> Outcome<ResourceLimit> {
        self.read("proc/self/limits")
            .and_then(|text| Outcome::from_parsed(parse::parse_limits(&text, kind)))
    }

    fn swap_entry_count(&self) -> Outcome<usize> {
        self.read("proc/swaps")
            .map(|text| parse::count_swap_entries(&text))
    }

    fn swappiness(&self) -> Outcome<u32> {
        self.read("proc/sys/vm/swappiness")
            .and_then(|text| Outcome::from_parsed(parse::parse_swappiness(&text)))
    }

    fn mount_table(&self) -> Outcome<Vec<MountEntry>> {
        self.read("proc/mounts").map(|text| parse::parse_mounts(&text))
    }

    fn interrupt_actions(&self) -> Outcome<Vec<InterruptLine>> {
        self.read("proc/interrupts")
            .map(|text| parse::parse_interrupts(&text))
    }

    fn process_command_lines(&self) -> Outcome<Vec<String>> {
        let proc_dir = self.path("proc");
        Outcome::from_io(fs::read_dir(&proc_dir)).map(|entries| {
            let mut pids: Vec<u32> = entries
                .filter_map(|entry| entry.ok())
                .filter_map(|entry| entry.file_name().to_string_lossy().parse().ok())
                .collect();
            pids.sort_unstable();

            // Processes can exit between listing and reading; skip those.
            pids.into_iter()
                .filter_map(|pid| fs::read(proc_dir.join(pid.to_string()).join("cmdline")).ok())
                .map(|raw| parse::decode_process_cmdline(&raw))
                .filter(|cmd| !cmd.is_empty())
                .collect()
        })
    }

    fn can_write_dma_latency_node(&self) -> bool {
        is_writable(&self.path(DMA_LATENCY_NODE))
    }

    fn attempt_elevated_scheduling(&self, priority: i32) -> Outcome<()> {
        request_fifo_scheduling(priority)
    }
}

/// Index of a `cpuN` directory name.
fn cpu_index(name: &str) -> Option<usize> {
    let digits = name.strip_prefix("cpu")?;
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Check write access the way the kernel would for an `open(O_WRONLY)`.
#[cfg(unix)]
fn is_writable(path: &Path) -> bool {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let Ok(c_path) = CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };
    // SAFETY: access() only reads the NUL-terminated path we own.
    unsafe { libc::access(c_path.as_ptr(), libc::W_OK) == 0 }
}

#[cfg(not(unix))]
fn is_writable(_path: &Path) -> bool {
    false
}

/// Ask for SCHED_FIFO at `priority`, then drop back to SCHED_OTHER so the
/// scan itself does not keep running with real-time priority.
#[cfg(target_os = "linux")]
fn request_fifo_scheduling(priority: i32) -> Outcome<()> {
    // SAFETY: sched_param is a plain C struct; zeroed is a valid value.
    let mut param: libc::sched_param = unsafe { std::mem::zeroed() };
    param.sched_priority = priority;

    // SAFETY: pid 0 targets the calling thread; param outlives the call.
    let rc = unsafe { libc::sched_setscheduler(0, libc::SCHED_FIFO, &param) };
    if rc != 0 {
        let err = std::io::Error::last_os_error();
        return match err.raw_os_error() {
            Some(libc::EPERM) | Some(libc::EACCES) => Outcome::DeniedPermission(err.to_string()),
            _ => {
                tracing::debug!("sched_setscheduler failed: {}", err);
                Outcome::NotFound
            }
        };
    }

    let mut normal: libc::sched_param = unsafe { std::mem::zeroed() };
    normal.sched_priority = 0;
    // SAFETY: as above.
    if unsafe { libc::sched_setscheduler(0, libc::SCHED_OTHER, &normal) } != 0 {
        tracing::warn!(
            "could not restore normal scheduling: {}",
            std::io::Error::last_os_error()
        );
    }
    Outcome::Found(())
}

#[cfg(not(target_os = "linux"))]
fn request_fifo_scheduling(_priority: i32) -> Outcome<()> {
    Outcome::NotFound
}
