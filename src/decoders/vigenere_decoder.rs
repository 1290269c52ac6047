//! Vigenère cipher decoder with a dictionary-first key search.
//! First tries the curated keywords of the block's language. Only when none
//! of them produce a plausible decoding does it fall back to an exhaustive
//! search over short upper-case keys, which stops early once enough
//! candidates are found or when asked to stop.

use std::marker::PhantomData;
use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, info, trace};

use super::crack_results::{CandidateKey, ScoredCandidate};
use super::interface::{Crack, Decoder};
use crate::checkers::checker_type::{Check, Checker};
use crate::checkers::language_scorer::LanguageScorer;
use crate::config::get_config;

/// The Vigenère decoder struct
pub struct VigenereDecoder;

impl Crack for Decoder<VigenereDecoder> {
    type Output = Vec<ScoredCandidate>;

    fn new() -> Decoder<VigenereDecoder> {
        Decoder {
            name: "Vigenere",
            description: "A polyalphabetic substitution cipher using a keyword to shift each letter. This implementation tries common keywords for the detected language, then every key of two to four letters.",
            link: "https://en.wikipedia.org/wiki/Vigen%C3%A8re_cipher",
            tags: vec!["vigenere", "substitution", "classical"],
            phantom: PhantomData,
        }
    }

    /// Returns at most `vigenere_max_results` candidates scoring above
    /// the scorer's threshold, best first. Can be empty.
    fn crack(&self, text: &str, scorer: &Checker<LanguageScorer>) -> Vec<ScoredCandidate> {
        self.crack_with_stop(text, scorer, &AtomicBool::new(false))
    }

    fn get_tags(&self) -> &Vec<&str> {
        &self.tags
    }

    fn get_name(&self) -> &str {
        self.name
    }
}

impl Decoder<VigenereDecoder> {
    /// Same as `crack`, but the exhaustive fallback checks `stop` before
    /// every key and returns what it has found so far once it is set.
    pub fn crack_with_stop(
        &self,
        text: &str,
        scorer: &Checker<LanguageScorer>,
        stop: &AtomicBool,
    ) -> Vec<ScoredCandidate> {
        trace!("Attempting Vigenère decryption on text: {:?}", text);
        let config = get_config();

        let mut results: Vec<ScoredCandidate> = scorer
            .profile
            .vigenere_keys
            .iter()
            .filter_map(|key| try_key(text, key, scorer))
            .collect();

        if results.is_empty() {
            debug!(
                "No curated {} keyword qualified, trying keys of length {} to {}",
                scorer.profile.language,
                config.vigenere_min_key_length,
                config.vigenere_max_key_length
            );
            results = search_short_keys(
                text,
                scorer,
                config.vigenere_min_key_length..=config.vigenere_max_key_length,
                config.vigenere_max_results,
                stop,
            );
        }

        results.sort_by(|a, b| b.score.total_cmp(&a.score));
        results.truncate(config.vigenere_max_results);
        info!("Found {} Vigenère candidates", results.len());
        results
    }
}

/// Decodes with `key` and keeps the result only if the scorer identifies it.
fn try_key(text: &str, key: &str, scorer: &Checker<LanguageScorer>) -> Option<ScoredCandidate> {
    let decoded = decrypt(text, key);
    let result = scorer.check(&decoded);
    if !result.is_identified {
        return None;
    }
    trace!("Key {} qualified with score {:.2}", key, result.score);
    Some(ScoredCandidate {
        score: result.score,
        key: CandidateKey::Keyword(key.to_string()),
        text: decoded,
    })
}

/// Walks every key with a length in `lengths`, shortest first, in
/// lexicographic order. Stops after `max_results` qualifying keys, when the
/// key space is exhausted or as soon as `stop` is set.
pub fn search_short_keys(
    text: &str,
    scorer: &Checker<LanguageScorer>,
    lengths: std::ops::RangeInclusive<usize>,
    max_results: usize,
    stop: &AtomicBool,
) -> Vec<ScoredCandidate> {
    let mut results = Vec::new();
    if max_results == 0 {
        return results;
    }

    for key in lengths.flat_map(KeySpace::new) {
        if stop.load(Ordering::Relaxed) {
            debug!("Vigenère key search stopped after {} results", results.len());
            break;
        }
        if let Some(candidate) = try_key(text, &key, scorer) {
            results.push(candidate);
            if results.len() >= max_results {
                break;
            }
        }
    }

    results
}

/// Every upper-case key of one length, `AA..` up to `ZZ..`, generated lazily.
/// ```rust
/// use cryptoglot::decoders::vigenere_decoder::KeySpace;
/// let keys: Vec<String> = KeySpace::new(2).take(3).collect();
/// assert_eq!(keys, vec!["AA", "AB", "AC"]);
/// assert_eq!(KeySpace::new(2).count(), 676);
/// ```
#[derive(Debug, Clone)]
pub struct KeySpace {
    /// Letter offsets of the next key, most significant first
    current: Vec<u8>,
    /// Set once `ZZ..Z` has been produced
    exhausted: bool,
}

impl KeySpace {
    /// A fresh key space for keys of `length` letters. Length 0 is empty.
    pub fn new(length: usize) -> Self {
        KeySpace {
            current: vec![0; length],
            exhausted: length == 0,
        }
    }
}

impl Iterator for KeySpace {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.exhausted {
            return None;
        }
        let key: String = self.current.iter().map(|&i| (b'A' + i) as char).collect();

        // odometer increment from the last letter
        self.exhausted = true;
        for digit in self.current.iter_mut().rev() {
            if *digit < 25 {
                *digit += 1;
                self.exhausted = false;
                break;
            }
            *digit = 0;
        }

        Some(key)
    }
}

/// Decrypts `text` with `key`. Only ASCII letters are shifted and only they
/// move the key forward; everything else is copied as is. The key is case
/// insensitive and its non-letters are ignored. An empty key changes nothing.
pub fn decrypt(text: &str, key: &str) -> String {
    apply_key(text, key, |letter, shift| (letter + 26 - shift) % 26)
}

/// Encrypts `text` with `key`. Inverse of [`decrypt`].
pub fn encrypt(text: &str, key: &str) -> String {
    apply_key(text, key, |letter, shift| (letter + shift) % 26)
}

fn apply_key(text: &str, key: &str, shift_letter: impl Fn(u8, u8) -> u8) -> String {
    let shifts: Vec<u8> = key
        .bytes()
        .filter(u8::is_ascii_alphabetic)
        .map(|b| b.to_ascii_uppercase() - b'A')
        .collect();
    if shifts.is_empty() {
        return text.to_string();
    }

    let mut key_index = 0;
    text.chars()
        .map(|c| {
            if !c.is_ascii_alphabetic() {
                return c;
            }
            let base = if c.is_ascii_uppercase() { b'A' } else { b'a' };
            let shift = shifts[key_index % shifts.len()];
            key_index += 1;
            (base + shift_letter(c as u8 - base, shift)) as char
        })
        .collect()
}
