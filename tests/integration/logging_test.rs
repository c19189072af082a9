use memwatch::core::{Environment, LoggingConfig};

#[test]
fn test_init_logging_is_idempotent() {
    let config = LoggingConfig::default();

    // Another test binary thread may have won the race; either way a
    // second call must not replace the installed logger.
    let _ = memwatch::init_logging(&config).unwrap();
    assert!(!memwatch::init_logging(&config).unwrap());

    log::info!("logger installed");
}

#[test]
fn test_invalid_level_rejected() {
    let config = LoggingConfig {
        level: "chatty".to_string(),
        ..Default::default()
    };
    assert!(memwatch::init_logging(&config).is_err());
}

#[test]
fn test_environment_preset_is_valid() {
    let config = Environment::detect().logging_config();
    assert!(config.level_filter().is_ok());
}
