use thiserror::Error;

/// Rejected attempt to build a [`Pokemon`](crate::domain::model::Pokemon).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidPokemon {
    #[error("pokemon name cannot be empty")]
    EmptyName,

    #[error("habitat of '{name}' cannot be an empty string")]
    EmptyHabitat { name: String },
}

/// Outcome of a failed catalog lookup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("pokemon '{name}' not found")]
    NotFound { name: String },

    #[error("failed to fetch pokemon '{name}': {message}")]
    FetchFailed { name: String, message: String },
}

/// Why a translation call did not produce text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslationFailure {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("upstream returned HTTP {code}: {message}")]
    UnexpectedStatus { code: u16, message: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslationError {
    #[error("translation failed: {cause}")]
    Failed { cause: TranslationFailure },

    /// `retry_in` is the upstream's own wording, e.g. "Please wait for 59 minutes".
    #[error("translation rate limit exceeded: {retry_in}")]
    RateLimited { retry_in: String },
}

impl From<TranslationFailure> for TranslationError {
    fn from(cause: TranslationFailure) -> Self {
        TranslationError::Failed { cause }
    }
}

/// Everything [`PokemonService`](crate::core::pokemon_service::PokemonService)
/// can fail with. Callers match on the nested enums, which keeps the set of
/// error kinds closed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PokemonServiceError {
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Translation(#[from] TranslationError),
}
