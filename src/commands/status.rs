//! `memwatch status`: combined CPU + GPU report.

use anyhow::{Context, Result};
use clap::ArgMatches;

use crate::core::system::DEFAULT_STATUS_LABEL;
use crate::core::{Config, MemoryUnit, SystemMonitor};

#[derive(Debug, Clone, Default)]
pub struct StatusOptions {
    pub label: Option<String>,
    pub no_cpu: bool,
    pub no_gpu: bool,
    pub unit: Option<MemoryUnit>,
    pub json: bool,
}

impl StatusOptions {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            label: matches.get_one::<String>("label").cloned(),
            no_cpu: matches.get_flag("no-cpu"),
            no_gpu: matches.get_flag("no-gpu"),
            unit: matches.get_one::<MemoryUnit>("unit").copied(),
            json: matches.get_flag("json"),
        }
    }

    /// Apply command line overrides on top of the loaded config
    pub fn effective_config(&self, config: &Config) -> Config {
        let mut config = config.clone();
        if self.no_gpu {
            config.use_gpu = false;
        }
        if self.no_cpu {
            config.include_cpu = false;
        }
        if let Some(unit) = self.unit {
            config.unit = unit;
        }
        config
    }
}

pub fn execute(matches: &ArgMatches, config: &Config) -> Result<()> {
    run(&StatusOptions::from_matches(matches), config)
}

pub fn run(options: &StatusOptions, config: &Config) -> Result<()> {
    let config = options.effective_config(config);
    let monitor = SystemMonitor::new(&config);

    if options.json {
        let json = serde_json::to_string_pretty(&monitor.snapshot())
            .context("Failed to serialize memory snapshot")?;
        println!("{}", json);
        return Ok(());
    }

    let label = options.label.as_deref().unwrap_or(DEFAULT_STATUS_LABEL);
    monitor.print_memory_usage(label, config.include_cpu);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_applied() {
        let options = StatusOptions {
            no_gpu: true,
            no_cpu: true,
            unit: Some(MemoryUnit::Gb),
            ..Default::default()
        };
        let config = options.effective_config(&Config::default());

        assert!(!config.use_gpu);
        assert!(!config.include_cpu);
        assert_eq!(config.unit, MemoryUnit::Gb);
    }

    #[test]
    fn test_no_overrides_keep_config() {
        let base = Config {
            use_gpu: false,
            gpu_device_index: 2,
            ..Default::default()
        };
        let config = StatusOptions::default().effective_config(&base);
        assert_eq!(config, base);
    }
}
