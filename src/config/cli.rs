use crate::config::toml_config::AppConfig;
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "pokedex")]
#[command(about = "Pokemon lookup service with fun description translations")]
pub struct CliArgs {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long)]
    pub host: Option<String>,

    #[arg(short, long)]
    pub port: Option<u16>,

    /// Base URL of the PokeAPI upstream
    #[arg(long)]
    pub pokeapi_url: Option<String>,

    /// Base URL of the FunTranslations upstream
    #[arg(long)]
    pub funtranslations_url: Option<String>,

    /// Timeout in seconds for each upstream call
    #[arg(long)]
    pub request_timeout: Option<u64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl CliArgs {
    /// Loads the configuration file (defaults when none is given) and applies
    /// the command line overrides on top of it.
    pub fn load_config(&self) -> Result<AppConfig> {
        let config = match &self.config {
            Some(path) => AppConfig::from_file(path)?,
            None => AppConfig::default(),
        };
        Ok(self.apply_overrides(config))
    }

    pub fn apply_overrides(&self, mut config: AppConfig) -> AppConfig {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(url) = &self.pokeapi_url {
            config.upstream.pokeapi_base_url = url.clone();
        }
        if let Some(url) = &self.funtranslations_url {
            config.upstream.funtranslations_base_url = url.clone();
        }
        if let Some(timeout) = self.request_timeout {
            config.upstream.request_timeout_seconds = timeout;
        }
        config.logging.verbose |= self.verbose;
        config.logging.json |= self.json_logs;
        config
    }
}
