//! CLI configuration

use std::path::PathBuf;

use clap::Args;

/// Log output format.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub(crate) struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "warn", global = true)]
    pub(crate) log_level: String,

    /// Log format (compact, json)
    #[arg(
        long,
        env = "LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Compact,
        global = true
    )]
    pub(crate) log_format: LogFormat,
}

/// Discount configuration file settings.
#[derive(Debug, Args)]
pub(crate) struct ConfigArgs {
    /// Discount configuration file (.json, or YAML for any other extension)
    #[arg(long = "config", env = "DISCOUNT_CONFIG", default_value = "discounts_config.json")]
    pub(crate) path: PathBuf,
}
