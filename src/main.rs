use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};

use memwatch::commands;
use memwatch::commands::status::StatusOptions;
use memwatch::core::{Config, Environment, MemoryUnit};

fn label_arg() -> Arg {
    Arg::new("label")
        .short('l')
        .long("label")
        .value_name("LABEL")
        .help("Label printed above the report")
}

fn build_cli() -> Command {
    Command::new("memwatch")
        .about("Report CPU and GPU memory usage")
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .short('v')
                .short_alias('V')
                .long("version")
                .help("Print version information")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("status")
                .about("Show CPU and GPU memory usage (default)")
                .arg(label_arg())
                .arg(
                    Arg::new("no-cpu")
                        .long("no-cpu")
                        .help("Leave out the CPU line")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("no-gpu")
                        .long("no-gpu")
                        .help("Do not try to monitor the GPU")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("unit")
                        .short('u')
                        .long("unit")
                        .value_name("UNIT")
                        .help("Display unit: MB or GB")
                        .value_parser(|s: &str| s.parse::<MemoryUnit>().map_err(|e| e.to_string())),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print a JSON snapshot instead of log lines")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("cpu")
                .about("Show host memory usage")
                .arg(label_arg()),
        )
        .subcommand(
            Command::new("gpu")
                .about("Show GPU memory usage")
                .arg(label_arg())
                .arg(
                    Arg::new("device")
                        .short('d')
                        .long("device")
                        .value_name("INDEX")
                        .help("GPU index (defaults to the configured device)")
                        .value_parser(clap::value_parser!(u32)),
                ),
        )
        .subcommand(
            Command::new("env").about("Show the detected environment and available backends"),
        )
        .subcommand(Command::new("version").about("Shows version information"))
}

fn main() -> Result<()> {
    let matches = build_cli().get_matches();

    if matches.get_flag("version") {
        return commands::version();
    }

    let config = Config::load().context("Failed to load configuration")?;
    let environment = Environment::detect();

    let logging = config
        .logging
        .clone()
        .unwrap_or_else(|| environment.logging_config());
    memwatch::init_logging(&logging).context("Failed to initialize logging")?;
    log::debug!("Running in {} environment", environment.kind);

    match matches.subcommand() {
        Some(("status", sub_matches)) => commands::status(sub_matches, &config),
        Some(("cpu", sub_matches)) => commands::cpu(sub_matches, &config),
        Some(("gpu", sub_matches)) => commands::gpu(sub_matches, &config),
        Some(("env", _)) => commands::env::execute(&environment, &config),
        Some(("version", _)) => commands::version(),
        _ => commands::status::run(&StatusOptions::default(), &config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_status_args_parse() {
        let matches = build_cli()
            .try_get_matches_from(["memwatch", "status", "--unit", "gb", "--no-gpu", "-l", "Now"])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        let options = StatusOptions::from_matches(sub);

        assert_eq!(options.unit, Some(MemoryUnit::Gb));
        assert!(options.no_gpu);
        assert!(!options.no_cpu);
        assert_eq!(options.label.as_deref(), Some("Now"));
    }

    #[test]
    fn test_bad_unit_rejected() {
        let result = build_cli().try_get_matches_from(["memwatch", "status", "--unit", "kb"]);
        assert!(result.is_err());
    }
}
