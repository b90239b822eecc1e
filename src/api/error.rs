use crate::domain::errors::{LookupError, PokemonServiceError, TranslationError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

const GENERIC_FAILURE_MESSAGE: &str = "Sorry, something went wrong!";

/// Error body returned to clients: `{ "_tag": <kind>, "message": <text> }`.
///
/// Upstream failures are logged in full here and reach the client only as a
/// generic message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "_tag")]
pub enum ApiError {
    #[serde(rename = "NotFoundError")]
    NotFound { message: String },

    #[serde(rename = "InternalServerError")]
    InternalServerError { message: String },

    #[serde(rename = "TooManyRequest")]
    TooManyRequest { message: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::InternalServerError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::TooManyRequest { .. } => StatusCode::TOO_MANY_REQUESTS,
        }
    }

    fn internal() -> Self {
        ApiError::InternalServerError {
            message: GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }

    pub fn from_lookup(name: &str, error: LookupError) -> Self {
        match error {
            LookupError::NotFound { .. } => {
                tracing::info!("Pokemon '{}' not found", name);
                ApiError::NotFound {
                    message: format!("{} not found", name),
                }
            }
            LookupError::FetchFailed { .. } => {
                tracing::error!("❌ {}", error);
                Self::internal()
            }
        }
    }

    pub fn from_service(name: &str, error: PokemonServiceError) -> Self {
        match error {
            PokemonServiceError::Lookup(lookup) => Self::from_lookup(name, lookup),
            PokemonServiceError::Translation(TranslationError::Failed { cause }) => {
                tracing::error!("❌ Translation for '{}' failed: {}", name, cause);
                Self::internal()
            }
            PokemonServiceError::Translation(TranslationError::RateLimited { retry_in }) => {
                tracing::warn!("Translation rate limit hit for '{}': {}", name, retry_in);
                ApiError::TooManyRequest { message: retry_in }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}
