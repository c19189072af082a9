//! CPU + GPU memory facade.

use log::Level;

use super::config::Config;
use super::converter::MemoryUnit;
use super::memory_info::{MemoryInfo, MemorySnapshot};
use super::monitors::{CpuMonitor, GpuMonitor, MemoryMonitor, MonitorKind};

pub const DEFAULT_CPU_LABEL: &str = "CPU Memory";
pub const DEFAULT_GPU_LABEL: &str = "GPU Memory";
pub const DEFAULT_STATUS_LABEL: &str = "Memory Status";

/// One line of a memory report together with the level it is logged at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub level: Level,
    pub text: String,
}

impl ReportLine {
    fn info(text: impl Into<String>) -> Self {
        Self {
            level: Level::Info,
            text: text.into(),
        }
    }

    fn warn(text: impl Into<String>) -> Self {
        Self {
            level: Level::Warn,
            text: text.into(),
        }
    }
}

/// Reports CPU and GPU memory usage.
///
/// Holds at most one monitor of each kind. Without a GPU monitor every GPU
/// query answers `None`.
pub struct SystemMonitor {
    cpu: Option<CpuMonitor>,
    gpu: Option<GpuMonitor>,
    unit: MemoryUnit,
}

impl SystemMonitor {
    /// Detect backends according to `config`
    pub fn new(config: &Config) -> Self {
        let cpu = Some(CpuMonitor::detect());
        let gpu = if config.use_gpu {
            Some(GpuMonitor::detect(config.gpu_device_index))
        } else {
            None
        };

        Self::with_monitors(cpu, gpu).with_unit(config.unit)
    }

    pub fn with_monitors(cpu: Option<CpuMonitor>, gpu: Option<GpuMonitor>) -> Self {
        Self {
            cpu,
            gpu,
            unit: MemoryUnit::default(),
        }
    }

    pub fn with_unit(mut self, unit: MemoryUnit) -> Self {
        self.unit = unit;
        self
    }

    pub fn cpu_monitor(&self) -> Option<&CpuMonitor> {
        self.cpu.as_ref()
    }

    pub fn gpu_monitor(&self) -> Option<&GpuMonitor> {
        self.gpu.as_ref()
    }

    pub fn has_cpu(&self) -> bool {
        self.cpu.as_ref().is_some_and(|m| m.is_available())
    }

    pub fn has_gpu(&self) -> bool {
        self.gpu.as_ref().is_some_and(|m| m.is_available())
    }

    pub fn cpu_memory(&self) -> Option<MemoryInfo> {
        self.cpu.as_ref()?.memory_info()
    }

    pub fn gpu_memory(&self) -> Option<MemoryInfo> {
        self.gpu.as_ref()?.memory_info()
    }

    pub fn snapshot(&self) -> MemorySnapshot {
        MemorySnapshot {
            cpu: self.cpu_memory(),
            gpu: self.gpu_memory(),
        }
    }

    pub fn cpu_report(&self, label: &str) -> Vec<ReportLine> {
        self.single_report(MonitorKind::Cpu, label, self.cpu_memory())
    }

    pub fn gpu_report(&self, label: &str) -> Vec<ReportLine> {
        self.single_report(MonitorKind::Gpu, label, self.gpu_memory())
    }

    /// Label line followed by one indented line per source
    ///
    /// The GPU line is left out when no GPU monitor was configured.
    pub fn memory_usage_report(&self, label: &str, include_cpu: bool) -> Vec<ReportLine> {
        let mut lines = vec![ReportLine::info(label)];

        if include_cpu {
            lines.push(self.summary_line(MonitorKind::Cpu, self.cpu_memory()));
        }
        if let Some(gpu) = &self.gpu {
            lines.push(self.summary_line(MonitorKind::Gpu, gpu.memory_info()));
        }

        lines
    }

    pub fn print_cpu_memory(&self, label: &str) {
        emit(&self.cpu_report(label));
    }

    pub fn print_gpu_memory(&self, label: &str) {
        emit(&self.gpu_report(label));
    }

    pub fn print_memory_usage(&self, label: &str, include_cpu: bool) {
        emit(&self.memory_usage_report(label, include_cpu));
    }

    fn single_report(
        &self,
        kind: MonitorKind,
        label: &str,
        info: Option<MemoryInfo>,
    ) -> Vec<ReportLine> {
        match info {
            Some(info) => vec![
                ReportLine::info(label),
                ReportLine::info(format!(
                    "  {}: {} (usage: {:.1}%)",
                    kind,
                    info.format_with(self.unit),
                    info.usage_percent()
                )),
            ],
            None => vec![ReportLine::warn(format!(
                "{}: {} memory info not available",
                label, kind
            ))],
        }
    }

    fn summary_line(&self, kind: MonitorKind, info: Option<MemoryInfo>) -> ReportLine {
        match info {
            Some(info) => ReportLine::info(format!("  {}: {}", kind, info.format_with(self.unit))),
            None => ReportLine::warn(format!("  {}: Not available", kind)),
        }
    }
}

fn emit(lines: &[ReportLine]) {
    for line in lines {
        log::log!(line.level, "{}", line.text);
    }
}
