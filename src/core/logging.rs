//! Log line layout and level configuration.
//!
//! The configuration is a plain value owned by the caller and handed to
//! [`crate::init_logging`] once at startup.

use chrono::{DateTime, Local};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{MemwatchError, Result};

/// Layout of a rendered log line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// `12:00:00 - [target] - INFO - message`
    #[default]
    Standard,
    /// `[INFO] message`
    Compact,
    /// `12:00:00 [INFO] message`
    Notebook,
    /// `2024-01-01 12:00:00 - target - INFO - message`
    Detailed,
}

impl LogFormat {
    /// chrono format string for the timestamp, `None` when the layout has none
    pub fn timestamp_format(&self) -> Option<&'static str> {
        match self {
            LogFormat::Standard | LogFormat::Notebook => Some("%H:%M:%S"),
            LogFormat::Detailed => Some("%Y-%m-%d %H:%M:%S"),
            LogFormat::Compact => None,
        }
    }

    pub fn render(
        &self,
        time: &DateTime<Local>,
        level: &str,
        target: &str,
        message: &str,
    ) -> String {
        let stamp = self
            .timestamp_format()
            .map(|fmt| time.format(fmt).to_string())
            .unwrap_or_default();

        match self {
            LogFormat::Standard => format!("{} - [{}] - {} - {}", stamp, target, level, message),
            LogFormat::Compact => format!("[{}] {}", level, message),
            LogFormat::Notebook => format!("{} [{}] {}", stamp, level, message),
            LogFormat::Detailed => format!("{} - {} - {} - {}", stamp, target, level, message),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
    /// Emit ANSI colors even when stdout is not a terminal
    #[serde(default)]
    pub force_color: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
            force_color: false,
        }
    }
}

impl LoggingConfig {
    pub fn with_format(format: LogFormat) -> Self {
        Self {
            format,
            ..Default::default()
        }
    }

    pub fn level_filter(&self) -> Result<LevelFilter> {
        LevelFilter::from_str(self.level.trim()).map_err(|_| {
            MemwatchError::config(format!("Invalid log level '{}'", self.level))
        })
    }
}
