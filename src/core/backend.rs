//! Capabilities the monitors query.
//!
//! Implementations live in the platform layer; monitors receive them as
//! explicit constructor arguments so that a missing backend is just `None`.

use crate::error::Result;

/// Host virtual memory reading, in bytes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HostMemory {
    pub used_bytes: u64,
    pub total_bytes: u64,
}

/// GPU memory held by the current process, in bytes
///
/// A `total_bytes` of 0 means nothing has been reserved yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolUsage {
    pub used_bytes: u64,
    pub total_bytes: u64,
}

/// Whole-device GPU memory counters, in bytes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeviceMemory {
    pub free_bytes: u64,
    pub total_bytes: u64,
}

/// Source of host memory statistics
pub trait HostMemoryBackend: Send + Sync {
    /// Short backend name for diagnostics
    fn name(&self) -> &str;

    fn virtual_memory(&self) -> Result<HostMemory>;
}

/// Source of GPU memory statistics
pub trait GpuMemoryBackend: Send + Sync {
    /// Device or backend description for diagnostics
    fn name(&self) -> String;

    /// Driver version reported by the vendor library, if it exposes one
    fn driver_version(&self) -> Option<String> {
        None
    }

    /// Memory reserved/used by this process on the device
    fn pool_usage(&self) -> Result<PoolUsage>;

    /// Raw device counters
    fn device_memory(&self) -> Result<DeviceMemory>;
}
