use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::converter::MemoryUnit;
use super::logging::LoggingConfig;
use crate::error::{MemwatchError, Result};

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Create a GPU monitor at all
    #[serde(default = "default_true")]
    pub use_gpu: bool,
    #[serde(default)]
    pub gpu_device_index: u32,
    /// Include the CPU line in `status`
    #[serde(default = "default_true")]
    pub include_cpu: bool,
    #[serde(default)]
    pub unit: MemoryUnit,
    /// Overrides the environment preset when set
    #[serde(default)]
    pub logging: Option<LoggingConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            use_gpu: true,
            gpu_device_index: 0,
            include_cpu: true,
            unit: MemoryUnit::default(),
            logging: None,
        }
    }
}

impl Config {
    /// Load from the default location, falling back to defaults when missing
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let data = fs::read_to_string(path)?;
        if data.trim().is_empty() {
            return Ok(Config::default());
        }

        serde_json::from_str(&data).map_err(|e| {
            MemwatchError::config(format!("Invalid config file {}: {}", path.display(), e))
        })
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let data = serde_json::to_string_pretty(self)?;
        fs::write(path, data)?;
        Ok(())
    }

    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| MemwatchError::config("Could not determine config directory"))?;

        Ok(config_dir.join("memwatch").join("config.json"))
    }
}
