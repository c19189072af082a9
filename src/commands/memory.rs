//! `memwatch cpu` and `memwatch gpu`: single-source reports.

use anyhow::Result;
use clap::ArgMatches;

use crate::core::system::{DEFAULT_CPU_LABEL, DEFAULT_GPU_LABEL};
use crate::core::{Config, CpuMonitor, GpuMonitor, SystemMonitor};

pub fn execute_cpu(matches: &ArgMatches, config: &Config) -> Result<()> {
    let label = matches
        .get_one::<String>("label")
        .map(String::as_str)
        .unwrap_or(DEFAULT_CPU_LABEL);

    let monitor = SystemMonitor::with_monitors(Some(CpuMonitor::detect()), None)
        .with_unit(config.unit);
    monitor.print_cpu_memory(label);
    Ok(())
}

pub fn execute_gpu(matches: &ArgMatches, config: &Config) -> Result<()> {
    let label = matches
        .get_one::<String>("label")
        .map(String::as_str)
        .unwrap_or(DEFAULT_GPU_LABEL);
    let device_index = matches
        .get_one::<u32>("device")
        .copied()
        .unwrap_or(config.gpu_device_index);

    let monitor = SystemMonitor::with_monitors(None, Some(GpuMonitor::detect(device_index)))
        .with_unit(config.unit);
    monitor.print_gpu_memory(label);
    Ok(())
}
