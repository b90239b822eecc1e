// Adapters layer: concrete implementations of the domain ports against the
// real upstream services.

pub mod funtranslations;
pub mod http;
pub mod pokeapi;

pub use funtranslations::FunTranslationsApi;
pub use pokeapi::PokeApi;
