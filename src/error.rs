//! Unified error types for cryptoglot.
//!
//! The analysis core never fails on malformed ciphertext: a bad Base64 string
//! or an empty block is reported as data inside the returned records. This
//! enum covers what is left, the surfaces around the core (reading input,
//! loading configuration, serialising results) and the one precondition the
//! core enforces, which is that only supported language tags are accepted.

use std::fmt;

/// Central error type for cryptoglot operations.
#[derive(Debug)]
pub enum CryptoglotError {
    /// I/O errors (reading the input file, stdin).
    Io(std::io::Error),
    /// Configuration errors (parsing the TOML file, conflicting CLI flags).
    Config(String),
    /// Serialization errors (JSON output in API mode).
    Serialization(String),
    /// A language tag other than `en` or `it` was requested.
    UnsupportedLanguage(String),
}

impl fmt::Display for CryptoglotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CryptoglotError::Io(e) => write!(f, "I/O error: {}", e),
            CryptoglotError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CryptoglotError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            CryptoglotError::UnsupportedLanguage(tag) => write!(
                f,
                "Unsupported language '{}': only 'en' and 'it' are supported",
                tag
            ),
        }
    }
}

impl std::error::Error for CryptoglotError {}

impl From<std::io::Error> for CryptoglotError {
    fn from(e: std::io::Error) -> Self {
        CryptoglotError::Io(e)
    }
}

impl From<toml::de::Error> for CryptoglotError {
    fn from(e: toml::de::Error) -> Self {
        CryptoglotError::Config(e.to_string())
    }
}

impl From<serde_json::Error> for CryptoglotError {
    fn from(e: serde_json::Error) -> Self {
        CryptoglotError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_language_message_names_the_tag() {
        let err = CryptoglotError::UnsupportedLanguage("fr".to_string());
        assert!(err.to_string().contains("'fr'"));
    }

    #[test]
    fn toml_errors_become_config_errors() {
        let parse_err = toml::from_str::<toml::Table>("this is = = not toml").unwrap_err();
        let err: CryptoglotError = parse_err.into();
        assert!(matches!(err, CryptoglotError::Config(_)));
    }
}
