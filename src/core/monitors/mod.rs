//! Memory monitors.
//!
//! Each monitor wraps one optional backend and turns its readings into
//! [`MemoryInfo`] records. Failures never escape a monitor: they are logged
//! and reported as `None`.

mod cpu;
mod gpu;

pub use cpu::CpuMonitor;
pub use gpu::GpuMonitor;

use once_cell::sync::OnceCell;
use std::fmt;

use super::memory_info::MemoryInfo;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorKind {
    Cpu,
    Gpu,
}

impl fmt::Display for MonitorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonitorKind::Cpu => f.write_str("CPU"),
            MonitorKind::Gpu => f.write_str("GPU"),
        }
    }
}

/// Common interface of the CPU and GPU monitors
pub trait MemoryMonitor: Send + Sync {
    fn kind(&self) -> MonitorKind;

    /// Query the backend for a fresh record
    fn memory_info(&self) -> Option<MemoryInfo>;

    /// Whether the first query produced a record (memoized)
    fn is_available(&self) -> bool;
}

/// Set-once availability flag.
///
/// Unknown until the first `resolve`, then fixed for the owner's lifetime.
#[derive(Debug, Default)]
pub struct Availability {
    cell: OnceCell<bool>,
}

impl Availability {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached flag, computing it with `probe` the first time
    pub fn resolve<F>(&self, probe: F) -> bool
    where
        F: FnOnce() -> bool,
    {
        *self.cell.get_or_init(probe)
    }

    /// Cached flag, `None` while still unknown
    pub fn get(&self) -> Option<bool> {
        self.cell.get().copied()
    }
}
