use crate::core::backend::HostMemoryBackend;
use crate::core::memory_info::MemoryInfo;
use crate::platform::host::SysinfoBackend;

use super::{Availability, MemoryMonitor, MonitorKind};

/// Host (CPU side) memory monitor
pub struct CpuMonitor {
    backend: Option<Box<dyn HostMemoryBackend>>,
    availability: Availability,
}

impl CpuMonitor {
    /// Create a monitor around an explicit backend (or none)
    pub fn new(backend: Option<Box<dyn HostMemoryBackend>>) -> Self {
        if backend.is_none() {
            log::warn!("No host memory backend available for CPU monitoring");
        }

        Self {
            backend,
            availability: Availability::new(),
        }
    }

    /// Create a monitor using the sysinfo backend when the platform supports it
    pub fn detect() -> Self {
        let backend = SysinfoBackend::new()
            .ok()
            .map(|b| Box::new(b) as Box<dyn HostMemoryBackend>);
        Self::new(backend)
    }

    pub fn backend_name(&self) -> Option<&str> {
        self.backend.as_deref().map(|b| b.name())
    }
}

impl MemoryMonitor for CpuMonitor {
    fn kind(&self) -> MonitorKind {
        MonitorKind::Cpu
    }

    fn memory_info(&self) -> Option<MemoryInfo> {
        let backend = self.backend.as_ref()?;

        match backend.virtual_memory() {
            Ok(memory) => Some(MemoryInfo::from_bytes(memory.used_bytes, memory.total_bytes)),
            Err(e) => {
                log::error!("Failed to get CPU memory info: {}", e);
                None
            }
        }
    }

    fn is_available(&self) -> bool {
        self.availability.resolve(|| self.memory_info().is_some())
    }
}
