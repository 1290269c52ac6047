//! Static language data: letter frequencies, common words and curated
//! Vigenère keywords for the two supported languages.
//!
//! Each language is described by one immutable [`LanguageProfile`], built once
//! on first use and handed to every component by `&'static` reference.

use std::collections::HashSet;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::CryptoglotError;

/// The languages cryptoglot can detect and score against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// Tag `en`
    #[serde(rename = "en")]
    English,
    /// Tag `it`
    #[serde(rename = "it")]
    Italian,
}

impl Language {
    /// Short tag, `en` or `it`.
    pub fn tag(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Italian => "it",
        }
    }

    /// Human readable name used in reports.
    pub fn label(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Italian => "Italian",
        }
    }

    /// The immutable profile for this language.
    pub fn profile(self) -> &'static LanguageProfile {
        match self {
            Language::English => &*ENGLISH,
            Language::Italian => &*ITALIAN,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for Language {
    type Err = CryptoglotError;

    /// Only the two tags are accepted. Anything else fails fast instead of
    /// silently falling back to one of the languages.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::English),
            "it" => Ok(Language::Italian),
            _ => Err(CryptoglotError::UnsupportedLanguage(tag.to_string())),
        }
    }
}

/// Everything the scorers and analyzers need to know about one language.
#[derive(Debug)]
pub struct LanguageProfile {
    /// Which language this profile describes
    pub language: Language,
    /// Expected frequency (percent) of the most common letters, in table order.
    /// Ties in sorting keep this order, so it must not be shuffled.
    pub letter_frequencies: &'static [(char, f64)],
    /// Lower-cased common words used for lexical matching
    pub common_words: HashSet<&'static str>,
    /// Keywords tried first by the Vigenère analyzer
    pub vigenere_keys: &'static [&'static str],
    /// Mean word length considered plausible for this language
    pub word_length_band: RangeInclusive<f64>,
}

impl LanguageProfile {
    /// The largest expected frequency in the table.
    pub fn max_frequency(&self) -> f64 {
        self.letter_frequencies
            .iter()
            .map(|(_, freq)| *freq)
            .fold(0.0, f64::max)
    }
}

const ENGLISH_FREQUENCIES: &[(char, f64)] = &[
    ('e', 12.7),
    ('t', 9.1),
    ('a', 8.2),
    ('o', 7.5),
    ('i', 7.0),
    ('n', 6.7),
    ('s', 6.3),
    ('h', 6.1),
    ('r', 6.0),
    ('d', 4.3),
    ('l', 4.0),
    ('c', 2.8),
    ('u', 2.8),
    ('m', 2.4),
    ('w', 2.4),
];

const ITALIAN_FREQUENCIES: &[(char, f64)] = &[
    ('a', 11.7),
    ('e', 11.8),
    ('i', 11.3),
    ('o', 9.8),
    ('u', 3.0),
    ('l', 6.5),
    ('r', 6.4),
    ('t', 5.6),
    ('s', 5.0),
    ('n', 6.9),
    ('c', 4.5),
    ('d', 3.7),
    ('p', 3.0),
    ('m', 2.5),
    ('v', 2.1),
];

const ENGLISH_WORDS: &[&str] = &[
    "the", "be", "by", "to", "of", "and", "a", "in", "that", "have", "i", "it", "for", "not",
    "on", "with", "he", "as", "you", "at", "hello", "from", "me", "know", "yes", "no", "are",
    "is", "am", "my", "your", "his", "her", "their", "this", "haha", "hahaha", "lol",
];

const ITALIAN_WORDS: &[&str] = &[
    "il", "lo", "la", "i", "gli", "le", "un", "uno", "una", "e", "ed", "che", "di", "in", "con",
    "su", "per", "tra", "fra", "ciao", "sono", "io", "da", "me", "si", "no", "non", "hai", "ho",
    "ha", "sei", "è", "mi", "ti", "ci", "vi", "qui", "qua", "ahahahah", "hahaha", "ahah",
];

const ENGLISH_KEYS: &[&str] = &[
    "HI", "ME", "YOU", "WE", "BY", "TO", "HEY", "FROM", "HELLO", "LOVE", "TEST", "HOME", "LIFE",
    "WORLD", "FRIEND",
];

const ITALIAN_KEYS: &[&str] = &[
    "CIAO", "IO", "TU", "NOI", "SI", "ME", "TE", "MI", "TI", "DA", "ROMA", "CASA", "VITA",
    "AMORE", "TUTTO", "PROVA",
];

/// English profile
pub static ENGLISH: Lazy<LanguageProfile> = Lazy::new(|| LanguageProfile {
    language: Language::English,
    letter_frequencies: ENGLISH_FREQUENCIES,
    common_words: ENGLISH_WORDS.iter().copied().collect(),
    vigenere_keys: ENGLISH_KEYS,
    word_length_band: 3.0..=7.0,
});

/// Italian profile
pub static ITALIAN: Lazy<LanguageProfile> = Lazy::new(|| LanguageProfile {
    language: Language::Italian,
    letter_frequencies: ITALIAN_FREQUENCIES,
    common_words: ITALIAN_WORDS.iter().copied().collect(),
    vigenere_keys: ITALIAN_KEYS,
    word_length_band: 4.0..=8.0,
});
