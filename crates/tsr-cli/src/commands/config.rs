//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use std::path::Path;

/// Execute the config command.
pub fn execute_config(
    args: ConfigArgs,
    config: &mut Config,
    path: &Path,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ConfigAction::Show => show_config(config, path),
        ConfigAction::SetEndpoint { url } => set_endpoint(config, path, url, formatter),
        ConfigAction::SetTimeout { seconds } => set_timeout(config, path, seconds, formatter),
    }
}

/// Show the effective configuration.
fn show_config(config: &Config, path: &Path) -> Result<()> {
    println!("Config file: {}", path.display());
    println!("  Endpoint: {}", config.channel.endpoint);
    println!("  Messages path: {}", config.channel.messages_path);
    match config.channel.timeout_secs {
        Some(seconds) => println!("  Timeout: {}s", seconds),
        None => println!("  Timeout: none"),
    }
    println!(
        "  API token: {}",
        if config.channel.api_token.is_some() {
            "set"
        } else {
            "not set"
        }
    );
    println!("  Format: {:?}", config.settings.format);
    println!("  Color: {}", config.settings.color);

    Ok(())
}

/// Set the analytics endpoint and persist it.
fn set_endpoint(config: &mut Config, path: &Path, url: String, formatter: &Formatter) -> Result<()> {
    config.set_endpoint(url)?;
    config.save_to(path)?;

    println!(
        "{}",
        formatter.success(&format!("Endpoint set to {}", config.channel.endpoint))
    );
    Ok(())
}

/// Set the request timeout and persist it.
fn set_timeout(config: &mut Config, path: &Path, seconds: u64, formatter: &Formatter) -> Result<()> {
    config.channel.timeout_secs = (seconds > 0).then_some(seconds);
    config.save_to(path)?;

    let message = match config.channel.timeout_secs {
        Some(seconds) => format!("Timeout set to {}s", seconds),
        None => "Timeout disabled".to_string(),
    };
    println!("{}", formatter.success(&message));
    Ok(())
}
