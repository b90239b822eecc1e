pub mod error;
pub mod logger;
pub mod sanitizer;
pub mod validation;
