//! HTTP boundary: axum routes over [`PokemonService`].
//!
//! - `GET /pokemon/:name`
//! - `GET /pokemon/translated/:name`
//! - `GET /health-check`

pub mod error;
pub mod health;
pub mod pokemon;

use crate::core::PokemonService;
use axum::{routing::get, Router};
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub pokemon: Arc<PokemonService>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(pokemon: PokemonService) -> Self {
        Self {
            pokemon: Arc::new(pokemon),
            started_at: Instant::now(),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health-check", get(health::health_check))
        .route("/pokemon/translated/:name", get(pokemon::get_by_translated))
        .route("/pokemon/:name", get(pokemon::get_by))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any))
        .with_state(state)
}
