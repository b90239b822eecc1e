use crate::domain::errors::{LookupError, TranslationError};
use crate::domain::model::{Pokemon, TranslationStyle};
use async_trait::async_trait;

/// Source of canonical pokemon records.
#[async_trait]
pub trait PokemonRepository: Send + Sync {
    /// One upstream call, no retry. A missing pokemon is
    /// [`LookupError::NotFound`], never a fetch failure.
    async fn find_by_name(&self, name: &str) -> Result<Pokemon, LookupError>;
}

/// Rewrites text in one of the supported [`TranslationStyle`]s.
#[async_trait]
pub trait TranslationService: Send + Sync {
    async fn translate(&self, style: TranslationStyle, text: &str)
        -> Result<String, TranslationError>;
}
