use crate::adapters::http::{join_segments, parse_base_url};
use crate::domain::errors::{InvalidPokemon, LookupError};
use crate::domain::model::{Pokemon, UNKNOWN_HABITAT};
use crate::domain::ports::PokemonRepository;
use crate::utils::error::Result;
use crate::utils::sanitizer::replace_control_chars;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use url::Url;

const ENGLISH: &str = "en";

/// `GET /api/v2/pokemon-species/{name}`, ref: https://pokeapi.co/docs/v2
#[derive(Debug, Deserialize)]
struct SpeciesResponse {
    name: String,
    is_legendary: bool,
    flavor_text_entries: Vec<FlavorTextEntry>,
    habitat: Option<NamedResource>,
}

#[derive(Debug, Deserialize)]
struct FlavorTextEntry {
    flavor_text: String,
    language: NamedResource,
}

#[derive(Debug, Deserialize)]
struct NamedResource {
    name: String,
}

impl SpeciesResponse {
    fn into_pokemon(self) -> std::result::Result<Pokemon, InvalidPokemon> {
        let description = self
            .flavor_text_entries
            .iter()
            .find(|entry| entry.language.name == ENGLISH)
            .map(|entry| replace_control_chars(&entry.flavor_text))
            .unwrap_or_default();

        let habitat = self
            .habitat
            .map(|habitat| habitat.name)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| UNKNOWN_HABITAT.to_string());

        Pokemon::new(self.name, description, Some(habitat), self.is_legendary)
    }
}

/// [`PokemonRepository`] backed by PokeAPI's species endpoint.
#[derive(Debug, Clone)]
pub struct PokeApi {
    client: Client,
    base_url: Url,
}

impl PokeApi {
    pub fn new(client: Client, base_url: &str) -> Result<Self> {
        Ok(Self {
            client,
            base_url: parse_base_url("upstream.pokeapi_base_url", base_url)?,
        })
    }

    fn species_url(&self, name: &str) -> Url {
        join_segments(&self.base_url, &["api", "v2", "pokemon-species", name])
    }
}

fn fetch_failed(name: &str, message: String) -> LookupError {
    LookupError::FetchFailed {
        name: name.to_string(),
        message,
    }
}

#[async_trait]
impl PokemonRepository for PokeApi {
    async fn find_by_name(&self, name: &str) -> std::result::Result<Pokemon, LookupError> {
        let url = self.species_url(name);
        tracing::debug!("Making PokeAPI request to: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| fetch_failed(name, format!("Request failed: {}", e)))?;

        let status = response.status();
        tracing::debug!("PokeAPI response status for '{}': {}", name, status);

        match status {
            StatusCode::OK => {
                let body = response
                    .bytes()
                    .await
                    .map_err(|e| fetch_failed(name, format!("Response error: {}", e)))?;

                let species: SpeciesResponse = serde_json::from_slice(&body).map_err(|e| {
                    fetch_failed(name, format!("Failed to parse pokemon data: {}", e))
                })?;

                species.into_pokemon().map_err(|e| {
                    fetch_failed(name, format!("Failed to parse pokemon data: {}", e))
                })
            }
            StatusCode::NOT_FOUND => Err(LookupError::NotFound {
                name: name.to_string(),
            }),
            other => Err(fetch_failed(
                name,
                format!("API returned HTTP {}", other.as_u16()),
            )),
        }
    }
}
