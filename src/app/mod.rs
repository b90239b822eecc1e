// Application wiring: builds the adapters, the service and the router from a
// validated configuration.

use crate::adapters::{http::build_client, FunTranslationsApi, PokeApi};
use crate::api::{self, AppState};
use crate::config::AppConfig;
use crate::core::PokemonService;
use crate::utils::error::Result;
use axum::Router;
use std::sync::Arc;

pub fn build_service(config: &AppConfig) -> Result<PokemonService> {
    let client = build_client(config.request_timeout())?;

    let repository = PokeApi::new(client.clone(), &config.upstream.pokeapi_base_url)?;
    let translator = FunTranslationsApi::new(client, &config.upstream.funtranslations_base_url)?;

    Ok(PokemonService::new(
        Arc::new(repository),
        Arc::new(translator),
    ))
}

pub fn build_app(config: &AppConfig) -> Result<Router> {
    let service = build_service(config)?;
    Ok(api::router(AppState::new(service)))
}
