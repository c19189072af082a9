use crate::core::backend::GpuMemoryBackend;
use crate::core::memory_info::MemoryInfo;
use crate::error::Result;
use crate::platform::gpu::get_gpu_backend;

use super::{Availability, MemoryMonitor, MonitorKind};

/// GPU memory monitor
///
/// Reports the process pool when it has reserved anything, otherwise the
/// whole-device counters.
pub struct GpuMonitor {
    backend: Option<Box<dyn GpuMemoryBackend>>,
    availability: Availability,
}

impl GpuMonitor {
    pub fn new(backend: Option<Box<dyn GpuMemoryBackend>>) -> Self {
        Self {
            backend,
            availability: Availability::new(),
        }
    }

    /// Create a monitor for the given device, without a backend if none is usable
    pub fn detect(device_index: u32) -> Self {
        let backend = match get_gpu_backend(device_index) {
            Ok(backend) => Some(backend),
            Err(e) => {
                log::info!("GPU monitoring not available: {}", e);
                None
            }
        };
        Self::new(backend)
    }

    pub fn backend_name(&self) -> Option<String> {
        self.backend.as_ref().map(|b| b.name())
    }

    pub fn driver_version(&self) -> Option<String> {
        self.backend.as_ref().and_then(|b| b.driver_version())
    }

    fn query(backend: &dyn GpuMemoryBackend) -> Result<MemoryInfo> {
        let pool = backend.pool_usage()?;

        // Empty pool is not an absent device
        if pool.total_bytes == 0 {
            let device = backend.device_memory()?;
            let used = device.total_bytes.saturating_sub(device.free_bytes);
            return Ok(MemoryInfo::from_bytes(used, device.total_bytes));
        }

        Ok(MemoryInfo::from_bytes(pool.used_bytes, pool.total_bytes))
    }
}

impl MemoryMonitor for GpuMonitor {
    fn kind(&self) -> MonitorKind {
        MonitorKind::Gpu
    }

    fn memory_info(&self) -> Option<MemoryInfo> {
        let backend = self.backend.as_deref()?;

        match Self::query(backend) {
            Ok(info) => Some(info),
            Err(e) => {
                log::error!("Failed to get GPU memory info: {}", e);
                None
            }
        }
    }

    fn is_available(&self) -> bool {
        self.availability.resolve(|| self.memory_info().is_some())
    }
}
