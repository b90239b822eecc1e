use thiserror::Error;

/// Process-level failures: loading configuration and wiring the server.
/// Request-time failures are domain errors, see [`crate::domain::errors`].
#[derive(Error, Debug)]
pub enum PokedexError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("HTTP client error: {0}")]
    HttpClientError(#[from] reqwest::Error),

    #[error("Configuration parsing error: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl PokedexError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            PokedexError::IoError(e) => format!("Could not read a required file: {}", e),
            PokedexError::HttpClientError(_) => "Could not initialise the HTTP client".to_string(),
            PokedexError::ConfigParseError(_) => "The configuration file is not valid TOML".to_string(),
            PokedexError::ConfigError { message } => message.clone(),
            PokedexError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PokedexError::IoError(_) => "Check that the --config path exists and is readable",
            PokedexError::HttpClientError(_) => "Check the TLS setup of the host",
            PokedexError::ConfigParseError(_) | PokedexError::ConfigError { .. } => {
                "Fix the configuration file syntax and try again"
            }
            PokedexError::InvalidConfigValueError { .. } => {
                "Correct the value in the configuration file or the matching CLI flag"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, PokedexError>;
