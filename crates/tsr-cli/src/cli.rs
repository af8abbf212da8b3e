//! CLI command definitions and argument parsing.

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};

/// TSR CLI - Ask which parameters were related to a parameter during a time window.
#[derive(Debug, Parser)]
#[command(name = "tsr")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Analytics service endpoint, overriding the config file
    #[arg(short, long, global = true, env = "TSR_ENDPOINT")]
    pub endpoint: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (related parameter keys only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Query time-scoped relations of a parameter
    Query(QueryArgs),

    /// List the output columns
    Columns,

    /// Manage the configuration file
    Config(ConfigArgs),
}

/// Arguments for the query command.
///
/// Every argument is optional; a query with missing arguments yields no rows.
#[derive(Debug, Parser)]
pub struct QueryArgs {
    /// Parameter key (system/element/parameter[/index])
    #[arg(short, long)]
    pub parameter: Option<String>,

    /// Window start (RFC 3339, e.g. 2024-01-01T00:00:00Z)
    #[arg(short, long)]
    pub start: Option<DateTime<Utc>>,

    /// Window end (RFC 3339)
    #[arg(long)]
    pub end: Option<DateTime<Utc>>,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration management actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,

    /// Set the analytics service endpoint
    SetEndpoint {
        /// Base URL (e.g., http://localhost:8004)
        url: String,
    },

    /// Set the request timeout (0 disables it)
    SetTimeout {
        /// Timeout in seconds
        seconds: u64,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
