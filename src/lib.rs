pub mod adapters;
pub mod api;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use app::{build_app, build_service};
pub use config::{AppConfig, CliArgs};
pub use core::PokemonService;
pub use domain::errors::{LookupError, PokemonServiceError, TranslationError, TranslationFailure};
pub use domain::model::{Pokemon, TranslationStyle};
pub use utils::error::{PokedexError, Result};
