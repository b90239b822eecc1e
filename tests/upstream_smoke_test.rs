// Calls the real PokeAPI and FunTranslations services.
// Run with: cargo test --test upstream_smoke_test -- --ignored

use pokedex::adapters::{http::build_client, FunTranslationsApi, PokeApi};
use pokedex::core::{PokemonRepository, TranslationService};
use pokedex::{AppConfig, LookupError, TranslationError, TranslationStyle};
use std::time::Duration;

const SMOKE_TIMEOUT: Duration = Duration::from_secs(10);

fn pokeapi() -> PokeApi {
    let config = AppConfig::default();
    let client = build_client(config.request_timeout()).unwrap();
    PokeApi::new(client, &config.upstream.pokeapi_base_url).unwrap()
}

fn funtranslations() -> FunTranslationsApi {
    let config = AppConfig::default();
    let client = build_client(config.request_timeout()).unwrap();
    FunTranslationsApi::new(client, &config.upstream.funtranslations_base_url).unwrap()
}

#[tokio::test]
#[ignore] // Needs network access to pokeapi.co
async fn test_live_pikachu() {
    let pokemon = tokio::time::timeout(SMOKE_TIMEOUT, pokeapi().find_by_name("pikachu"))
        .await
        .expect("PokeAPI did not answer within 10 seconds")
        .unwrap();

    assert_eq!(pokemon.name(), "pikachu");
    assert!(!pokemon.description().is_empty());
    assert!(!pokemon.is_legendary());
    assert!(pokemon.habitat().is_some_and(|habitat| !habitat.is_empty()));
}

#[tokio::test]
#[ignore] // Needs network access to pokeapi.co
async fn test_live_mewtwo_is_legendary() {
    let pokemon = tokio::time::timeout(SMOKE_TIMEOUT, pokeapi().find_by_name("mewtwo"))
        .await
        .expect("PokeAPI did not answer within 10 seconds")
        .unwrap();

    assert_eq!(pokemon.name(), "mewtwo");
    assert!(pokemon.is_legendary());
}

#[tokio::test]
#[ignore] // Needs network access to pokeapi.co
async fn test_live_unknown_pokemon_is_not_found() {
    let result = tokio::time::timeout(
        SMOKE_TIMEOUT,
        pokeapi().find_by_name("nonexistentpokemon999"),
    )
    .await
    .expect("PokeAPI did not answer within 10 seconds");

    assert_eq!(
        result,
        Err(LookupError::NotFound {
            name: "nonexistentpokemon999".to_string()
        })
    );
}

#[tokio::test]
#[ignore] // Needs network access; the public API allows 10 calls per hour
async fn test_live_translations() {
    let api = funtranslations();
    let cases = [
        (TranslationStyle::Shakespeare, "To be or not to be"),
        (TranslationStyle::Yoda, "Mastering Rust is fun"),
    ];

    for (style, text) in cases {
        let result = tokio::time::timeout(SMOKE_TIMEOUT, api.translate(style, text))
            .await
            .expect("FunTranslations did not answer within 10 seconds");

        match result {
            Ok(translated) => assert!(!translated.is_empty()),
            Err(TranslationError::RateLimited { retry_in }) => {
                eprintln!("{} translation rate limited: {}", style, retry_in);
            }
            Err(e) => panic!("{} translation failed: {}", style, e),
        }
    }
}
