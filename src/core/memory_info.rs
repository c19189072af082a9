use serde::{Deserialize, Serialize};
use std::fmt;

use super::converter::{bytes_to_mb, MemoryUnit};

/// Memory usage record, both fields in megabytes
///
/// `used <= total` is expected but not enforced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryInfo {
    pub used: f64,
    pub total: f64,
}

impl MemoryInfo {
    pub fn new(used: f64, total: f64) -> Self {
        Self { used, total }
    }

    /// Build a record from raw byte counts
    pub fn from_bytes(used_bytes: u64, total_bytes: u64) -> Self {
        Self {
            used: bytes_to_mb(used_bytes),
            total: bytes_to_mb(total_bytes),
        }
    }

    /// Free memory in MB
    pub fn free(&self) -> f64 {
        self.total - self.used
    }

    /// Usage as a percentage, 0 when total is 0
    pub fn usage_percent(&self) -> f64 {
        if self.total == 0.0 {
            0.0
        } else {
            (self.used / self.total) * 100.0
        }
    }

    /// Render `used / total` in the given unit
    pub fn format_with(&self, unit: MemoryUnit) -> String {
        match unit {
            MemoryUnit::Mb => format!("{:.2} MB / {:.2} MB", self.used, self.total),
            MemoryUnit::Gb => format!(
                "{:.2} GB / {:.2} GB",
                self.used / 1024.0,
                self.total / 1024.0
            ),
        }
    }
}

impl fmt::Display for MemoryInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with(MemoryUnit::Mb))
    }
}

/// CPU and GPU records taken together
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemorySnapshot {
    pub cpu: Option<MemoryInfo>,
    pub gpu: Option<MemoryInfo>,
}
