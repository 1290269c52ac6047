use std::fs;
use std::path::Path;

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::error::CryptoglotError;
use crate::storage::Language;

/// The Config object is the configuration for the entire program.
/// The CLI turns its arguments into a Config, library users build one
/// themselves (or load it from TOML) and hand it to `perform_analysis`.
/// It's accessed through a global, like so:
/// ```rust
/// use cryptoglot::config::get_config;
/// // Vigenère candidates must score above 30 by default
/// let config = get_config();
/// assert_eq!(config.vigenere_threshold, 30.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// A level of verbosity to determine.
    /// How much we print in logs.
    pub verbose: u8,
    /// Forces every block to this language instead of detecting it.
    pub language: Option<Language>,
    /// How many Caesar candidates make the shortlist.
    pub caesar_top_results: usize,
    /// A Vigenère decoding must score strictly above this to be kept.
    pub vigenere_threshold: f64,
    /// Maximum number of Vigenère candidates returned per block.
    pub vigenere_max_results: usize,
    /// Shortest key tried by the exhaustive Vigenère fallback.
    pub vigenere_min_key_length: usize,
    /// Longest key tried by the exhaustive Vigenère fallback.
    pub vigenere_max_key_length: usize,
    /// Seconds before the Vigenère fallback is cancelled. 0 means no timeout.
    pub timeout: u32,
    /// Print JSON instead of the human readable report.
    pub api_mode: bool,
}

/// Cell for storing global Config
static CONFIG: OnceCell<Config> = OnceCell::new();

/// To initialize global config with custom values.
/// Only the first call wins, later calls are ignored.
pub fn set_global_config(config: Config) {
    CONFIG.set(config).ok(); // ok() used to make compiler happy about using Result
}

/// Get the global config.
/// This will return default config if the config isn't initialized
pub fn get_config() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}

impl Config {
    /// Loads a config from a TOML file. Missing keys take their default.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid TOML,
    /// or if the values are out of range.
    pub fn from_toml_file(path: &Path) -> Result<Config, CryptoglotError> {
        let contents = fs::read_to_string(path)?;
        Config::from_toml_str(&contents)
    }

    /// Parses a config from TOML text. Missing keys take their default.
    ///
    /// # Errors
    /// Returns an error if the text is not valid TOML or the values are inconsistent.
    pub fn from_toml_str(contents: &str) -> Result<Config, CryptoglotError> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the values that would make the analysis meaningless.
    ///
    /// # Errors
    /// Returns `CryptoglotError::Config` describing the first problem found.
    pub fn validate(&self) -> Result<(), CryptoglotError> {
        if self.caesar_top_results == 0 {
            return Err(CryptoglotError::Config(
                "caesar_top_results must be at least 1".to_string(),
            ));
        }
        if self.vigenere_max_results == 0 {
            return Err(CryptoglotError::Config(
                "vigenere_max_results must be at least 1".to_string(),
            ));
        }
        if self.vigenere_min_key_length == 0 {
            return Err(CryptoglotError::Config(
                "vigenere_min_key_length must be at least 1".to_string(),
            ));
        }
        if self.vigenere_min_key_length > self.vigenere_max_key_length {
            return Err(CryptoglotError::Config(format!(
                "vigenere_min_key_length ({}) is larger than vigenere_max_key_length ({})",
                self.vigenere_min_key_length, self.vigenere_max_key_length
            )));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            verbose: 0,
            language: None,
            caesar_top_results: 3,
            vigenere_threshold: 30.0,
            vigenere_max_results: 5,
            vigenere_min_key_length: 2,
            vigenere_max_key_length: 4,
            timeout: 0,
            api_mode: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_the_default_config() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn toml_overrides_only_given_keys() {
        let config = Config::from_toml_str("language = \"it\"\ntimeout = 5\n").unwrap();
        assert_eq!(config.language, Some(Language::Italian));
        assert_eq!(config.timeout, 5);
        assert_eq!(config.vigenere_max_results, 5);
    }

    #[test]
    fn unsupported_language_in_toml_is_rejected() {
        let result = Config::from_toml_str("language = \"fr\"");
        assert!(matches!(result, Err(CryptoglotError::Config(_))));
    }

    #[test]
    fn inverted_key_lengths_are_rejected() {
        let result =
            Config::from_toml_str("vigenere_min_key_length = 5\nvigenere_max_key_length = 3");
        assert!(result.is_err());
    }

    #[test]
    fn zero_result_counts_are_rejected() {
        let result = Config::from_toml_str("caesar_top_results = 0");
        assert!(matches!(result, Err(CryptoglotError::Config(_))));

        let result = Config::from_toml_str("vigenere_max_results = 0");
        assert!(matches!(result, Err(CryptoglotError::Config(_))));
    }
}
