use crate::utils::error::{PokedexError, Result};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Shared client for every upstream adapter. `timeout` bounds each call,
/// connect, headers and body included.
pub fn build_client(timeout: Duration) -> Result<Client> {
    let client = Client::builder()
        .timeout(timeout)
        .connect_timeout(timeout)
        .user_agent(concat!("pokedex/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

/// Parses an upstream base URL that path segments can be appended to.
pub fn parse_base_url(field_name: &str, base_url: &str) -> Result<Url> {
    let url = Url::parse(base_url).map_err(|e| PokedexError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: base_url.to_string(),
        reason: format!("Invalid URL format: {}", e),
    })?;

    if url.cannot_be_a_base() {
        return Err(PokedexError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: base_url.to_string(),
            reason: "URL cannot be used as a base".to_string(),
        });
    }
    Ok(url)
}

/// `base` with `segments` appended to its path, each one percent-encoded.
pub fn join_segments(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    // parse_base_url rejects cannot-be-a-base URLs, so this always succeeds
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_segments() {
        let base = parse_base_url("base", "https://pokeapi.co").unwrap();
        assert_eq!(
            join_segments(&base, &["api", "v2", "pokemon-species", "mr-mime"]).as_str(),
            "https://pokeapi.co/api/v2/pokemon-species/mr-mime"
        );

        let base = parse_base_url("base", "http://localhost:9000/proxy/").unwrap();
        assert_eq!(
            join_segments(&base, &["translate", "yoda.json"]).as_str(),
            "http://localhost:9000/proxy/translate/yoda.json"
        );
    }

    #[test]
    fn test_join_segments_encodes_names() {
        let base = parse_base_url("base", "https://pokeapi.co").unwrap();
        let url = join_segments(&base, &["pokemon-species", "a b/c?d"]);

        assert_eq!(url.path(), "/pokemon-species/a%20b%2Fc%3Fd");
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_parse_base_url_rejects_invalid() {
        assert!(parse_base_url("base", "not a url").is_err());
        assert!(parse_base_url("base", "mailto:ash@example.com").is_err());
    }

    #[test]
    fn test_build_client() {
        assert!(build_client(Duration::from_secs(10)).is_ok());
    }
}
