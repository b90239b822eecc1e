pub mod cli;
pub mod toml_config;

pub use cli::CliArgs;
pub use toml_config::{AppConfig, LoggingConfig, ServerConfig, UpstreamConfig};
