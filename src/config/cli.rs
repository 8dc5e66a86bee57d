use crate::config::toml_config::TrackerConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "health-tracker")]
#[command(about = "Console health tracker: record activities, watch steps and reminders")]
pub struct CliConfig {
    /// Path to an optional TOML file overriding the simulation constants
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines on stderr")]
    pub log_json: bool,
}

impl CliConfig {
    /// Loads the TOML file when given, otherwise the defaults, and validates the result.
    pub fn load_tracker_config(&self) -> Result<TrackerConfig> {
        self.validate()?;

        let config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                TrackerConfig::from_file(path)?
            }
            None => TrackerConfig::default(),
        };

        config.validate()?;
        tracing::debug!("Tracker config: {:?}", config);
        Ok(config)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}
