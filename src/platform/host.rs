//! Host memory statistics via sysinfo.

use parking_lot::Mutex;
use sysinfo::{MemoryRefreshKind, RefreshKind, System};

use crate::core::backend::{HostMemory, HostMemoryBackend};
use crate::error::{MemwatchError, Result};

/// Host memory backend backed by `sysinfo::System`
pub struct SysinfoBackend {
    system: Mutex<System>,
}

impl SysinfoBackend {
    /// Fails when sysinfo has no implementation for this OS
    pub fn new() -> Result<Self> {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return Err(MemwatchError::backend_unavailable(
                "sysinfo does not support this platform",
            ));
        }

        let refresh = RefreshKind::nothing().with_memory(MemoryRefreshKind::nothing().with_ram());
        Ok(Self {
            system: Mutex::new(System::new_with_specifics(refresh)),
        })
    }
}

impl HostMemoryBackend for SysinfoBackend {
    fn name(&self) -> &str {
        "sysinfo"
    }

    fn virtual_memory(&self) -> Result<HostMemory> {
        let mut system = self.system.lock();
        system.refresh_memory_specifics(MemoryRefreshKind::nothing().with_ram());

        let total = system.total_memory();
        if total == 0 {
            return Err(MemwatchError::metric_collection(
                "host reported zero total memory",
            ));
        }

        Ok(HostMemory {
            used_bytes: system.used_memory(),
            total_bytes: total,
        })
    }
}
