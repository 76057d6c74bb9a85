//! Command-line argument parsing for the demo driver
//!
//! Supports:
//! - Loading an explicit config file
//! - Overriding the catalog from a JSON file
//! - Overriding the trigger set
//! - Seeding the buffer with initial text

use clap::Parser;
use std::path::PathBuf;

use crate::config::EngineConfig;

/// A trigger-character autocomplete engine
#[derive(Parser, Debug)]
#[command(name = "mention", version, about = "A trigger-character autocomplete engine")]
pub struct CliArgs {
    /// Config file to use instead of ~/.config/mention/config.yaml
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// JSON file with the suggestion catalog (an array of strings)
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Trigger characters, e.g. "#@" (overrides the config)
    #[arg(short, long, value_name = "CHARS")]
    pub triggers: Option<String>,

    /// Initial buffer text
    #[arg(long, value_name = "TEXT")]
    pub text: Option<String>,
}

impl CliArgs {
    /// Resolve CLI arguments into an engine configuration
    pub fn into_config(self) -> Result<EngineConfig, String> {
        let mut config = match &self.config {
            Some(path) => EngineConfig::from_file(path)?,
            None => EngineConfig::load(),
        };

        if let Some(triggers) = &self.triggers {
            if triggers.is_empty() {
                return Err("trigger set must not be empty".to_string());
            }
            config.trigger_characters = triggers.chars().collect();
            config = config.sanitized();
        }

        if let Some(path) = &self.catalog {
            config = config.with_catalog_file(path)?;
        }

        Ok(config)
    }
}
