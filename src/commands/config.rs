//! Configuration commands
//!
//! - `config show`: Display the effective configuration
//! - `config path`: Display where the config file is read from

use owo_colors::OwoColorize;

use crate::config::Config;
use crate::error::Result;

/// Show the effective configuration as YAML
pub fn cmd_config_show(config: &Config) -> Result<()> {
    let path = Config::config_path()?;
    let source = if path.exists() {
        path.display().to_string()
    } else {
        format!("{} (not found, using defaults)", path.display())
    };

    println!("{} {}", "# Config file:".dimmed(), source.dimmed());
    print!("{}", config.to_yaml()?);
    Ok(())
}

/// Print the config file path
pub fn cmd_config_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}
