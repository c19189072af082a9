use memwatch::core::{Config, LogFormat, LoggingConfig, MemoryUnit};
use memwatch::MemwatchError;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert!(config.use_gpu);
    assert!(config.include_cpu);
    assert_eq!(config.gpu_device_index, 0);
    assert!(config.logging.is_none());
}

#[test]
fn test_load_missing_file_returns_default() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.json");

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_empty_file_returns_default() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(&path, "  \n").unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}

#[test]
fn test_config_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("config.json");

    let config = Config {
        use_gpu: false,
        gpu_device_index: 1,
        include_cpu: false,
        unit: MemoryUnit::Gb,
        logging: Some(LoggingConfig {
            level: "debug".to_string(),
            format: LogFormat::Detailed,
            force_color: true,
        }),
    };
    config.save_to(&path).unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), config);
}

#[test]
fn test_malformed_config_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(&path, "{ use_gpu: nope").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, MemwatchError::Config(_)));
}
