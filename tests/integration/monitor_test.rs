use memwatch::core::{
    CpuMonitor, DeviceMemory, GpuMemoryBackend, GpuMonitor, HostMemory, HostMemoryBackend,
    MemoryMonitor, PoolUsage, SystemMonitor,
};
use memwatch::error::{MemwatchError, Result};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

const MB: u64 = 1024 * 1024;

struct MockHost {
    used: u64,
    total: u64,
}

impl HostMemoryBackend for MockHost {
    fn name(&self) -> &str {
        "mock"
    }

    fn virtual_memory(&self) -> Result<HostMemory> {
        Ok(HostMemory {
            used_bytes: self.used,
            total_bytes: self.total,
        })
    }
}

/// Pool reports nothing reserved, device counters hold the real numbers
struct EmptyPoolGpu {
    device_calls: Arc<AtomicUsize>,
}

impl GpuMemoryBackend for EmptyPoolGpu {
    fn name(&self) -> String {
        "mock gpu".to_string()
    }

    fn pool_usage(&self) -> Result<PoolUsage> {
        Ok(PoolUsage {
            used_bytes: 0,
            total_bytes: 0,
        })
    }

    fn device_memory(&self) -> Result<DeviceMemory> {
        self.device_calls.fetch_add(1, Ordering::SeqCst);
        Ok(DeviceMemory {
            free_bytes: 512 * MB,
            total_bytes: 1024 * MB,
        })
    }
}

struct BrokenGpu;

impl GpuMemoryBackend for BrokenGpu {
    fn name(&self) -> String {
        "broken".to_string()
    }

    fn pool_usage(&self) -> Result<PoolUsage> {
        Err(MemwatchError::backend_unavailable("driver missing"))
    }

    fn device_memory(&self) -> Result<DeviceMemory> {
        Err(MemwatchError::backend_unavailable("driver missing"))
    }
}

#[test]
fn test_end_to_end_cpu_record() {
    let cpu = CpuMonitor::new(Some(Box::new(MockHost {
        used: 1_073_741_824,
        total: 2_147_483_648,
    })));
    let monitor = SystemMonitor::with_monitors(Some(cpu), None);

    let info = monitor.cpu_memory().unwrap();
    assert_eq!(info.used, 1024.0);
    assert_eq!(info.total, 2048.0);
    assert_eq!(info.usage_percent(), 50.0);
    assert!(monitor.has_cpu());
}

#[test]
fn test_gpu_empty_pool_uses_device_counters() {
    let calls = Arc::new(AtomicUsize::new(0));
    let gpu = GpuMonitor::new(Some(Box::new(EmptyPoolGpu {
        device_calls: Arc::clone(&calls),
    })));

    let info = gpu.memory_info().unwrap();
    assert_eq!(info.used, 512.0);
    assert_eq!(info.total, 1024.0);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_broken_gpu_degrades_gracefully() {
    let monitor = SystemMonitor::with_monitors(
        Some(CpuMonitor::new(None)),
        Some(GpuMonitor::new(Some(Box::new(BrokenGpu)))),
    );

    assert!(monitor.gpu_memory().is_none());
    assert!(!monitor.has_gpu());
    assert!(!monitor.has_cpu());

    let snapshot = monitor.snapshot();
    assert!(snapshot.cpu.is_none());
    assert!(snapshot.gpu.is_none());
}

#[test]
fn test_report_lines_for_mixed_availability() {
    let monitor = SystemMonitor::with_monitors(
        Some(CpuMonitor::new(Some(Box::new(MockHost {
            used: 100 * MB,
            total: 200 * MB,
        })))),
        Some(GpuMonitor::new(Some(Box::new(BrokenGpu)))),
    );

    let lines: Vec<String> = monitor
        .memory_usage_report("Memory Status", true)
        .into_iter()
        .map(|l| l.text)
        .collect();

    assert_eq!(
        lines,
        vec![
            "Memory Status".to_string(),
            "  CPU: 100.00 MB / 200.00 MB".to_string(),
            "  GPU: Not available".to_string(),
        ]
    );
}

#[test]
fn test_gpu_disabled_by_config_leaves_no_gpu_line() {
    let config = memwatch::Config {
        use_gpu: false,
        ..memwatch::Config::default()
    };
    let monitor = SystemMonitor::new(&config);
    assert!(monitor.gpu_monitor().is_none());

    let lines = monitor.memory_usage_report("Memory Status", false);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].text, "Memory Status");
    assert_eq!(lines[0].level, log::Level::Info);
}

#[test]
fn test_detected_monitor_never_panics() {
    // Real backends: results depend on the host, but queries must not fail hard
    let monitor = SystemMonitor::new(&memwatch::Config::default());
    let _ = monitor.cpu_memory();
    let _ = monitor.gpu_memory();
    let _ = monitor.has_gpu();
}

#[test]
fn test_sysinfo_backend_reports_memory() {
    if let Ok(backend) = memwatch::platform::SysinfoBackend::new() {
        let memory = backend.virtual_memory().unwrap();
        assert!(memory.total_bytes > 0);
        assert!(memory.used_bytes <= memory.total_bytes);
    }
}
