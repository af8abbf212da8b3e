//! TSR CLI - Command-line front end for the time-scoped relations connector.

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tsr_cli::commands;
use tsr_cli::{Cli, Command, Config, Formatter};

fn main() {
    // Initialize tracing (log to stderr, RUST_LOG overrides the default level)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> tsr_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load config, falling back to defaults when the file is missing
    let config_path = match &cli.config {
        Some(path) => PathBuf::from(path),
        None => Config::default_path()?,
    };
    let mut config = Config::load_from(&config_path)?;

    // Endpoint from the command line or TSR_ENDPOINT wins over the file
    if let Some(endpoint) = cli.endpoint.clone() {
        config.set_endpoint(endpoint)?;
    }

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Query(args) => commands::execute_query(args, &config, &formatter)?,
        Command::Columns => commands::execute_columns(&formatter)?,
        Command::Config(args) => {
            commands::execute_config(args, &mut config, &config_path, &formatter)?
        }
    }

    Ok(())
}
