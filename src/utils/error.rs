use thiserror::Error;

#[derive(Error, Debug)]
pub enum HealthError {
    #[error("Invalid menu choice: {input:?}")]
    InvalidChoice { input: char },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl HealthError {
    /// Short message for the terminal, without internal detail.
    pub fn user_friendly_message(&self) -> String {
        match self {
            HealthError::InvalidChoice { .. } => "Invalid choice. Try again.".to_string(),
            HealthError::IoError(e) => format!("Console I/O failed: {}", e),
            HealthError::ConfigParseError(_) => "The config file is not valid TOML".to_string(),
            HealthError::ConfigError { message } => format!("Configuration problem: {}", message),
            HealthError::InvalidConfigValueError { field, reason, .. } => {
                format!("Config value '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            HealthError::InvalidChoice { .. } => "Enter R, W or Q",
            HealthError::IoError(_) => "Check that stdin/stdout are attached to a terminal or pipe",
            HealthError::ConfigParseError(_) => "Fix the TOML syntax or run without --config",
            HealthError::ConfigError { .. } => "Check that the config path exists and is readable",
            HealthError::InvalidConfigValueError { .. } => {
                "Adjust the value in the config file or remove it to use the default"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, HealthError>;
