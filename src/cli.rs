//! Command-Line Interface (CLI) argument parsing.
//!
//! This module defines the command-line arguments for the application using the
//! `clap` crate. Arguments that correspond to settings are merged over the
//! configuration file and environment variables.

use crate::core::Recipient;
use clap::Parser;
use figment::{
    value::{Dict, Map, Value},
    Error, Metadata, Profile, Provider,
};
use std::path::PathBuf;

/// Formats an activity log into a report and delivers it through a channel.
#[derive(Parser, Debug, Default, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// CSV file with `actor,action,timestamp` rows.
    #[arg(short, long, value_name = "FILE")]
    pub rows: PathBuf,

    /// Delivery channel to use (overrides `default_channel`).
    #[arg(long, value_name = "NAME")]
    pub channel: Option<String>,

    /// Recipient email address.
    #[arg(long, value_name = "ADDR")]
    pub email: Option<String>,

    /// Recipient social-account id.
    #[arg(long, value_name = "ID")]
    pub social_id: Option<String>,

    /// Print the delivery receipt as JSON.
    #[arg(long)]
    pub json: bool,

    /// Logging level (e.g. "debug").
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

impl Cli {
    /// Builds the recipient from the address arguments.
    pub fn recipient(&self) -> Recipient {
        Recipient {
            email: self.email.clone(),
            social_id: self.social_id.clone(),
        }
    }
}

impl Provider for Cli {
    fn metadata(&self) -> Metadata {
        Metadata::named("Command-Line Arguments")
    }

    fn data(&self) -> Result<Map<Profile, Dict>, Error> {
        let mut dict = Dict::new();

        if let Some(channel) = &self.channel {
            dict.insert("default_channel".into(), Value::from(channel.clone()));
        }

        if let Some(level) = &self.log_level {
            dict.insert("log_level".into(), Value::from(level.clone()));
        }

        // `--json` can only turn JSON on; leaving it off keeps the configured format.
        if self.json {
            let mut output = Dict::new();
            output.insert("format".into(), Value::from("Json"));
            dict.insert("output".into(), Value::from(output));
        }

        let mut map = Map::new();
        map.insert(Profile::Default, dict);
        Ok(map)
    }
}
