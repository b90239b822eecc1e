use crate::domain::errors::{LookupError, PokemonServiceError};
use crate::domain::model::Pokemon;
use crate::domain::ports::{PokemonRepository, TranslationService};
use std::sync::Arc;

/// Looks pokemon up and, on request, translates their description.
///
/// Holds no per-request state, so one instance is shared by every request.
#[derive(Clone)]
pub struct PokemonService {
    repository: Arc<dyn PokemonRepository>,
    translator: Arc<dyn TranslationService>,
}

impl PokemonService {
    pub fn new(
        repository: Arc<dyn PokemonRepository>,
        translator: Arc<dyn TranslationService>,
    ) -> Self {
        Self {
            repository,
            translator,
        }
    }

    pub async fn get_by(&self, name: &str) -> Result<Pokemon, LookupError> {
        self.repository.find_by_name(name).await
    }

    /// Fetches the pokemon and rewrites its description in the style picked by
    /// [`Pokemon::translation_style`]. A pokemon without description is
    /// returned untouched and the translator is not called.
    pub async fn get_by_translated(&self, name: &str) -> Result<Pokemon, PokemonServiceError> {
        let pokemon = self.repository.find_by_name(name).await?;

        if pokemon.description().is_empty() {
            tracing::debug!("'{}' has no description, skipping translation", name);
            return Ok(pokemon);
        }

        let style = pokemon.translation_style();
        tracing::debug!("Translating description of '{}' to {}", name, style);

        let translated = self
            .translator
            .translate(style, pokemon.description())
            .await?;

        Ok(pokemon.with_description(translated))
    }
}
