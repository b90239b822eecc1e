use crate::domain::errors::InvalidPokemon;
use serde::Serialize;
use std::fmt;

/// Habitat reported when the catalog does not know where a pokemon lives.
pub const UNKNOWN_HABITAT: &str = "unknown";

const CAVE_HABITAT: &str = "cave";

/// A pokemon as exposed by this service.
///
/// Fields are private so that a constructed value always holds the invariants:
/// the name is never empty and a present habitat is never an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pokemon {
    name: String,
    description: String,
    habitat: Option<String>,
    is_legendary: bool,
}

impl Pokemon {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        habitat: Option<String>,
        is_legendary: bool,
    ) -> Result<Self, InvalidPokemon> {
        let name = name.into();
        if name.is_empty() {
            return Err(InvalidPokemon::EmptyName);
        }
        if habitat.as_deref() == Some("") {
            return Err(InvalidPokemon::EmptyHabitat { name });
        }

        Ok(Self {
            name,
            description: description.into(),
            habitat,
            is_legendary,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn habitat(&self) -> Option<&str> {
        self.habitat.as_deref()
    }

    pub fn is_legendary(&self) -> bool {
        self.is_legendary
    }

    /// Copy of this pokemon with only the description replaced.
    pub fn with_description(self, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..self
        }
    }

    /// Legendary pokemon and cave dwellers speak like Yoda, everyone else
    /// gets the Shakespeare treatment.
    pub fn translation_style(&self) -> TranslationStyle {
        if self.habitat() == Some(CAVE_HABITAT) || self.is_legendary {
            TranslationStyle::Yoda
        } else {
            TranslationStyle::Shakespeare
        }
    }
}

/// Styles supported by the translation upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranslationStyle {
    Shakespeare,
    Yoda,
}

impl TranslationStyle {
    /// Name used by the upstream in its endpoint path.
    pub fn as_str(&self) -> &'static str {
        match self {
            TranslationStyle::Shakespeare => "shakespeare",
            TranslationStyle::Yoda => "yoda",
        }
    }
}

impl fmt::Display for TranslationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pokemon(habitat: Option<&str>, is_legendary: bool) -> Pokemon {
        Pokemon::new(
            "pikachu",
            "An electric mouse pokemon",
            habitat.map(str::to_string),
            is_legendary,
        )
        .unwrap()
    }

    #[test]
    fn test_new_valid_pokemon() {
        let pokemon = pokemon(Some("forest"), false);

        assert_eq!(pokemon.name(), "pikachu");
        assert_eq!(pokemon.description(), "An electric mouse pokemon");
        assert_eq!(pokemon.habitat(), Some("forest"));
        assert!(!pokemon.is_legendary());
    }

    #[test]
    fn test_new_accepts_absent_habitat() {
        assert_eq!(pokemon(None, false).habitat(), None);
    }

    #[test]
    fn test_new_rejects_empty_name() {
        let result = Pokemon::new("", "desc", Some("forest".to_string()), false);
        assert_eq!(result, Err(InvalidPokemon::EmptyName));
    }

    #[test]
    fn test_new_rejects_empty_habitat() {
        let result = Pokemon::new("pikachu", "desc", Some(String::new()), false);
        assert!(matches!(result, Err(InvalidPokemon::EmptyHabitat { .. })));
    }

    #[test]
    fn test_with_description_only_replaces_description() {
        let original = pokemon(Some("cave"), true);
        let translated = original.clone().with_description("Translated, hmm");

        assert_eq!(translated.description(), "Translated, hmm");
        assert_eq!(translated.name(), original.name());
        assert_eq!(translated.habitat(), original.habitat());
        assert_eq!(translated.is_legendary(), original.is_legendary());
    }

    #[test]
    fn test_translation_style_policy() {
        let cases = [
            (Some("cave"), false, TranslationStyle::Yoda),
            (Some("cave"), true, TranslationStyle::Yoda),
            (Some("rare"), true, TranslationStyle::Yoda),
            (None, true, TranslationStyle::Yoda),
            (Some("forest"), false, TranslationStyle::Shakespeare),
            (Some(UNKNOWN_HABITAT), false, TranslationStyle::Shakespeare),
            (Some("Cave"), false, TranslationStyle::Shakespeare),
            (None, false, TranslationStyle::Shakespeare),
        ];

        for (habitat, is_legendary, expected) in cases {
            assert_eq!(
                pokemon(habitat, is_legendary).translation_style(),
                expected,
                "habitat={:?} legendary={}",
                habitat,
                is_legendary
            );
        }
    }

    #[test]
    fn test_serializes_with_null_habitat() {
        let json = serde_json::to_value(pokemon(None, false)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "name": "pikachu",
                "description": "An electric mouse pokemon",
                "habitat": null,
                "is_legendary": false
            })
        );
    }

    #[test]
    fn test_style_names() {
        assert_eq!(TranslationStyle::Shakespeare.to_string(), "shakespeare");
        assert_eq!(TranslationStyle::Yoda.as_str(), "yoda");
    }
}
