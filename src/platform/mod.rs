// Platform-specific code module

pub mod gpu;
pub mod host;

// Re-exports for cleaner imports
pub use gpu::{get_gpu_backend, nvml_compiled_in, NvmlBackend};
pub use host::SysinfoBackend;
