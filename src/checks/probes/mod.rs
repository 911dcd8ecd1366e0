//! Built-in probes.
//!
//! Each probe checks one aspect of real-time audio readiness:
//!
//! - [`RootProbe`] - The scan is not running as the superuser
//! - [`AudioGroupProbe`] - Real-time priority and memory locking limits
//! - [`BackgroundProcessesProbe`] - Known resource-hungry daemons
//! - [`GovernorProbe`] - CPU frequency scaling governor
//! - [`KernelConfigProbe`] - Loads the kernel context
//! - [`HighResTimersProbe`] - High resolution timer support
//! - [`TicklessProbe`] - Tickless timer support
//! - [`PreemptRtProbe`] - Threaded interrupts or full real-time preemption
//! - [`MitigationsProbe`] - Spectre/Meltdown mitigations
//! - [`RtPrioProbe`] - FIFO scheduling can be obtained
//! - [`SwappinessProbe`] - `vm.swappiness` when swap is in use
//! - [`FilesystemsProbe`] - Filesystems suitable for audio data
//! - [`IrqsProbe`] - Sound and USB interrupt sharing
//! - [`PowerManagementProbe`] - Access to the CPU DMA latency node

mod audio_group;
mod background_processes;
mod filesystems;
mod governor;
mod high_res_timers;
mod irqs;
mod kernel_config;
mod mitigations;
mod power_management;
mod preempt_rt;
mod root;
mod rt_prio;
mod swappiness;
mod tickless;

pub use audio_group::AudioGroupProbe;
pub use background_processes::BackgroundProcessesProbe;
pub use filesystems::FilesystemsProbe;
pub use governor::GovernorProbe;
pub use high_res_timers::HighResTimersProbe;
pub use irqs::IrqsProbe;
pub use kernel_config::KernelConfigProbe;
pub use mitigations::MitigationsProbe;
pub use power_management::PowerManagementProbe;
pub use preempt_rt::PreemptRtProbe;
pub use root::RootProbe;
pub use rt_prio::RtPrioProbe;
pub use swappiness::SwappinessProbe;
pub use tickless::TicklessProbe;
