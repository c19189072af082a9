// Core business logic module

pub mod backend;
pub mod config;
pub mod converter;
pub mod environment;
pub mod logging;
pub mod memory_info;
pub mod monitors;
pub mod system;

// Re-export commonly used items
pub use backend::{DeviceMemory, GpuMemoryBackend, HostMemory, HostMemoryBackend, PoolUsage};
pub use config::Config;
pub use converter::{bytes_to_gb, bytes_to_mb, format_memory, MemoryUnit};
pub use environment::{Environment, EnvironmentKind};
pub use logging::{LogFormat, LoggingConfig};
pub use memory_info::{MemoryInfo, MemorySnapshot};
pub use monitors::{Availability, CpuMonitor, GpuMonitor, MemoryMonitor, MonitorKind};
pub use system::{ReportLine, SystemMonitor};
