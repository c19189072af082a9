use colored::*;

use crate::core::{Environment, SystemMonitor};
use crate::platform::nvml_compiled_in;

fn yes_no(value: bool) -> ColoredString {
    if value {
        "yes".green()
    } else {
        "no".red()
    }
}

/// Render the detected environment and which memory sources are usable
pub fn format_environment_info(env: &Environment, monitor: &SystemMonitor) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", "Environment".bold().bright_cyan()));
    out.push_str(&format!("{}\n", "-".repeat(30)));
    out.push_str(&format!("  Detected:  {}\n", env.kind.to_string().bold()));
    out.push_str(&format!("  Platform:  {} ({})\n", env.os, env.arch));
    out.push_str(&format!(
        "  memwatch:  {}\n",
        env!("CARGO_PKG_VERSION")
    ));

    let cpu_line = match monitor.cpu_monitor().and_then(|m| m.backend_name()) {
        Some(name) => format!("{} (CPU monitoring available)", name),
        None => "not available (CPU monitoring disabled)".to_string(),
    };
    out.push_str(&format!("  CPU:       {}\n", cpu_line));

    let gpu_line = match monitor.gpu_monitor() {
        None => "disabled by configuration".to_string(),
        Some(gpu) => match (gpu.backend_name(), gpu.driver_version()) {
            (Some(name), Some(driver)) => format!(
                "{} via NVML, driver {} (GPU monitoring available)",
                name, driver
            ),
            (Some(name), None) => format!("{} via NVML (GPU monitoring available)", name),
            (None, _) if !nvml_compiled_in() => {
                "NVML support not compiled in (GPU monitoring disabled)".to_string()
            }
            (None, _) => "no NVIDIA device found (GPU monitoring disabled)".to_string(),
        },
    };
    out.push_str(&format!("  GPU:       {}\n", gpu_line));

    out.push_str(&format!(
        "  Monitoring: CPU {} / GPU {}\n",
        yes_no(monitor.has_cpu()),
        yes_no(monitor.has_gpu())
    ));

    out
}

pub fn print_environment_info(env: &Environment, monitor: &SystemMonitor) {
    print!("{}", format_environment_info(env, monitor));
}
