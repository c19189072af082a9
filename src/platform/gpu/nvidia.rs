#[cfg(feature = "nvml")]
use nvml_wrapper::{enums::device::UsedGpuMemory, Device, Nvml};

use crate::core::backend::{DeviceMemory, GpuMemoryBackend, PoolUsage};
use crate::error::{MemwatchError, Result};

/// NVIDIA GPU backend using NVML
pub struct NvmlBackend {
    #[cfg(feature = "nvml")]
    nvml: Nvml,
    device_index: u32,
}

impl NvmlBackend {
    /// Initialize NVML for a specific GPU index
    pub fn with_device_index(index: u32) -> Result<Self> {
        #[cfg(feature = "nvml")]
        {
            let nvml = Nvml::init().map_err(|e| {
                MemwatchError::backend_unavailable(format!("Failed to init NVML: {}", e))
            })?;

            // Verify device exists
            let _ = nvml.device_by_index(index).map_err(|e| {
                MemwatchError::backend_unavailable(format!("GPU {} not found: {}", index, e))
            })?;

            Ok(Self {
                nvml,
                device_index: index,
            })
        }
        #[cfg(not(feature = "nvml"))]
        {
            let _ = index;
            Err(MemwatchError::backend_unavailable(
                "NVIDIA GPU support not enabled",
            ))
        }
    }

    #[cfg(feature = "nvml")]
    fn get_device(&self) -> Result<Device<'_>> {
        self.nvml.device_by_index(self.device_index).map_err(|e| {
            MemwatchError::metric_collection(format!("Failed to get GPU device: {}", e))
        })
    }
}

impl GpuMemoryBackend for NvmlBackend {
    fn name(&self) -> String {
        #[cfg(feature = "nvml")]
        {
            self.get_device()
                .ok()
                .and_then(|device| device.name().ok())
                .unwrap_or_else(|| format!("NVIDIA GPU {}", self.device_index))
        }
        #[cfg(not(feature = "nvml"))]
        {
            format!("NVIDIA GPU {}", self.device_index)
        }
    }

    fn driver_version(&self) -> Option<String> {
        #[cfg(feature = "nvml")]
        {
            self.nvml.sys_driver_version().ok()
        }
        #[cfg(not(feature = "nvml"))]
        {
            None
        }
    }

    fn pool_usage(&self) -> Result<PoolUsage> {
        #[cfg(feature = "nvml")]
        {
            let device = self.get_device()?;
            let processes = device.running_compute_processes().map_err(|e| {
                MemwatchError::metric_collection(format!("Failed to list GPU processes: {}", e))
            })?;

            let pid = std::process::id();
            let held: u64 = processes
                .iter()
                .filter(|p| p.pid == pid)
                .map(|p| match p.used_gpu_memory {
                    UsedGpuMemory::Used(bytes) => bytes,
                    UsedGpuMemory::Unavailable => 0,
                })
                .sum();

            // NVML exposes no allocator split, the reservation is fully in use
            Ok(PoolUsage {
                used_bytes: held,
                total_bytes: held,
            })
        }
        #[cfg(not(feature = "nvml"))]
        {
            Err(MemwatchError::backend_unavailable(
                "NVIDIA GPU support not enabled",
            ))
        }
    }

    fn device_memory(&self) -> Result<DeviceMemory> {
        #[cfg(feature = "nvml")]
        {
            let memory_info = self.get_device()?.memory_info().map_err(|e| {
                MemwatchError::metric_collection(format!("Failed to get memory info: {}", e))
            })?;

            Ok(DeviceMemory {
                free_bytes: memory_info.free,
                total_bytes: memory_info.total,
            })
        }
        #[cfg(not(feature = "nvml"))]
        {
            Err(MemwatchError::backend_unavailable(
                "NVIDIA GPU support not enabled",
            ))
        }
    }
}
