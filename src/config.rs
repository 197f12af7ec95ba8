//! Configuration

use std::path::PathBuf;

use clap::{Args, ValueEnum};

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// Settings shared by every command.
#[derive(Debug, Args)]
pub(crate) struct Config {
    /// Directory holding the product and invoice slot files
    #[arg(
        long,
        global = true,
        env = "STOCKBOOK_DATA_DIR",
        default_value = "./stockbook-data"
    )]
    pub data_dir: PathBuf,

    /// Log level (trace, debug, info, warn, error); `RUST_LOG` takes precedence
    #[arg(long, global = true, env = "STOCKBOOK_LOG", default_value = "warn")]
    pub log_level: String,

    /// Log output format
    #[arg(
        long,
        global = true,
        env = "STOCKBOOK_LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Compact
    )]
    pub log_format: LogFormat,
}
