// memwatch library - public API

// Re-export error types
pub mod error;
pub use error::{MemwatchError, Result};

// Module declarations
pub mod commands;
pub mod core;
pub mod platform;
pub mod ui;

// Re-export commonly used types
pub use core::{Config, Environment, LoggingConfig, MemoryInfo, SystemMonitor};

use std::io::Write;

/// Initialize logging.
///
/// Returns `Ok(false)` when a logger is already installed; the first
/// configuration stays in effect.
pub fn init_logging(config: &LoggingConfig) -> Result<bool> {
    let level = config.level_filter()?;
    let format = config.format;

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stdout)
        .format(move |buf, record| {
            let style = buf.default_level_style(record.level());
            let level = format!("{style}{}{style:#}", record.level());
            let line = format.render(
                &chrono::Local::now(),
                &level,
                record.target(),
                &record.args().to_string(),
            );
            writeln!(buf, "{}", line)
        });

    if config.force_color {
        builder.write_style(env_logger::WriteStyle::Always);
    }

    Ok(builder.try_init().is_ok())
}
