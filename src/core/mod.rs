pub mod pokemon_service;

pub use crate::domain::errors::{LookupError, PokemonServiceError, TranslationError};
pub use crate::domain::model::{Pokemon, TranslationStyle};
pub use crate::domain::ports::{PokemonRepository, TranslationService};
pub use pokemon_service::PokemonService;
