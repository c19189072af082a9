//! Byte to megabyte/gigabyte conversion.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MemwatchError;

pub const BYTES_PER_MB: f64 = (1u64 << 20) as f64;
pub const BYTES_PER_GB: f64 = (1u64 << 30) as f64;

/// Display unit for memory values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemoryUnit {
    #[default]
    Mb,
    Gb,
}

impl MemoryUnit {
    pub fn suffix(&self) -> &'static str {
        match self {
            MemoryUnit::Mb => "MB",
            MemoryUnit::Gb => "GB",
        }
    }
}

impl fmt::Display for MemoryUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

impl FromStr for MemoryUnit {
    type Err = MemwatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mb" => Ok(MemoryUnit::Mb),
            "gb" => Ok(MemoryUnit::Gb),
            other => Err(MemwatchError::config(format!(
                "Unknown memory unit '{}' (expected MB or GB)",
                other
            ))),
        }
    }
}

/// Convert bytes to megabytes (2^20)
pub fn bytes_to_mb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_MB
}

/// Convert bytes to gigabytes (2^30)
pub fn bytes_to_gb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_GB
}

/// Format a byte count with two decimals in the requested unit
pub fn format_memory(bytes: u64, unit: MemoryUnit) -> String {
    match unit {
        MemoryUnit::Mb => format!("{:.2} MB", bytes_to_mb(bytes)),
        MemoryUnit::Gb => format!("{:.2} GB", bytes_to_gb(bytes)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_mb() {
        assert_eq!(bytes_to_mb(1024 * 1024), 1.0);
        assert_eq!(bytes_to_mb(0), 0.0);
    }

    #[test]
    fn test_to_gb() {
        assert_eq!(bytes_to_gb(1024 * 1024 * 1024), 1.0);
        assert_eq!(bytes_to_gb(0), 0.0);
    }

    #[test]
    fn test_mb_back_to_bytes() {
        for bytes in [1u64, 4096, 1_048_576, 123_456_789, 17_179_869_184] {
            let restored = bytes_to_mb(bytes) * BYTES_PER_MB;
            assert!((restored - bytes as f64).abs() < 1e-6);
        }
    }

    #[test]
    fn test_format_memory() {
        let bytes = 1536 * 1024 * 1024;
        assert_eq!(format_memory(bytes, MemoryUnit::Mb), "1536.00 MB");
        assert_eq!(format_memory(bytes, MemoryUnit::Gb), "1.50 GB");
        assert_eq!(format_memory(1024 * 1024, MemoryUnit::default()), "1.00 MB");
        assert_eq!(format_memory(0, MemoryUnit::default()), "0.00 MB");
    }

    #[test]
    fn test_unit_parse() {
        assert_eq!("GB".parse::<MemoryUnit>().unwrap(), MemoryUnit::Gb);
        assert_eq!(" mb ".parse::<MemoryUnit>().unwrap(), MemoryUnit::Mb);
        assert!("kb".parse::<MemoryUnit>().is_err());
    }
}
