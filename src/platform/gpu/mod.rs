//! GPU-specific platform code.
//!
//! Provides GPU memory backends. Only NVIDIA (via NVML) is supported.

mod nvidia;

pub use nvidia::NvmlBackend;

use crate::core::backend::GpuMemoryBackend;
use crate::error::Result;

/// Attempt to get a GPU backend for the given device index
pub fn get_gpu_backend(device_index: u32) -> Result<Box<dyn GpuMemoryBackend>> {
    let backend = NvmlBackend::with_device_index(device_index)?;
    Ok(Box::new(backend))
}

/// Whether the binary was built with NVML support
pub fn nvml_compiled_in() -> bool {
    cfg!(feature = "nvml")
}
