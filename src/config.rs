//! Configuration management for logdispatch
//!
//! This module defines the main `Config` struct and its sub-structs. It uses
//! the `figment` crate to layer defaults, a `logdispatch.toml` file,
//! environment variables and command-line arguments.

use crate::cli::Cli;
use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Config file read when `--config` is not given. A missing file is not an error.
pub const DEFAULT_CONFIG_FILE: &str = "logdispatch.toml";

/// The main configuration struct for the application.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// The logging level for the application.
    pub log_level: String,
    /// Channel used when none is requested on the command line.
    pub default_channel: String,
    /// Configuration for printing delivery receipts.
    pub output: OutputConfig,
    /// Configuration for the email channel.
    pub email: EmailConfig,
}

/// The format for stdout output.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    PlainText,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::PlainText => write!(f, "Plain Text"),
        }
    }
}

/// Configuration for output.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OutputConfig {
    /// The format to use for stdout output.
    pub format: OutputFormat,
}

/// Configuration for the email channel.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct EmailConfig {
    /// Subject line of report emails.
    pub subject: String,
}

impl Config {
    /// Loads the configuration by layering defaults, the TOML file,
    /// `LOGDISPATCH_`-prefixed environment variables and CLI arguments.
    ///
    /// Nested keys in the environment are separated by `__`,
    /// e.g. `LOGDISPATCH_EMAIL__SUBJECT`.
    pub fn load(cli: &Cli) -> Result<Self> {
        let config_path = cli
            .config
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_path))
            .merge(Env::prefixed("LOGDISPATCH_").split("__"))
            .merge(cli.clone())
            .extract()?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            default_channel: crate::notification::email::EMAIL_CHANNEL.to_string(),
            output: OutputConfig {
                format: OutputFormat::PlainText,
            },
            email: EmailConfig {
                subject: "Activity report".to_string(),
            },
        }
    }
}
