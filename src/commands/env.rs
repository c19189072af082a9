use anyhow::Result;

use crate::core::{Config, Environment, SystemMonitor};
use crate::ui::print_environment_info;

pub fn execute(env: &Environment, config: &Config) -> Result<()> {
    let monitor = SystemMonitor::new(config);
    print_environment_info(env, &monitor);
    Ok(())
}
