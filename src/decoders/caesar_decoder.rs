//! Caesar cipher: tries every shift and ranks the decodings.
//! Returns all 26 decodings plus the best few by plausibility score.

use std::marker::PhantomData;

use log::{debug, trace};

use super::crack_results::{CaesarAttempts, CandidateKey, ScoredCandidate};
use super::interface::{Crack, Decoder};
use crate::checkers::checker_type::{Check, Checker};
use crate::checkers::language_scorer::LanguageScorer;
use crate::config::get_config;

/// Number of possible shifts in the Latin alphabet.
const ALPHABET_SIZE: u8 = 26;

/// The Caesar decoder, call:
/// `let caesar_decoder = Decoder::<CaesarDecoder>::new()` to create a new instance
/// And then call:
/// `result = caesar_decoder.crack(input, &scorer)` to decode every shift
/// ```rust
/// use cryptoglot::checkers::checker_type::{Check, Checker};
/// use cryptoglot::checkers::language_scorer::LanguageScorer;
/// use cryptoglot::decoders::caesar_decoder::CaesarDecoder;
/// use cryptoglot::decoders::crack_results::CandidateKey;
/// use cryptoglot::decoders::interface::{Crack, Decoder};
/// use cryptoglot::storage::Language;
///
/// let scorer = Checker::<LanguageScorer>::new(Language::English.profile());
/// let result = Decoder::<CaesarDecoder>::new().crack("Khoor, krz duh brx?", &scorer);
/// assert_eq!(result.all.len(), 26);
/// assert_eq!(result.top[0].key, CandidateKey::Shift(3));
/// assert_eq!(result.top[0].text, "Hello, how are you?");
/// ```
pub struct CaesarDecoder;

impl Crack for Decoder<CaesarDecoder> {
    type Output = CaesarAttempts;

    fn new() -> Decoder<CaesarDecoder> {
        Decoder {
            name: "caesar",
            description: "Caesar cipher, also known as Caesar's cipher, the shift cipher, Caesar's code or Caesar shift, is one of the simplest and most widely known encryption techniques. It is a type of substitution cipher in which each letter in the plaintext is replaced by a letter some fixed number of positions down the alphabet.",
            link: "https://en.wikipedia.org/wiki/Caesar_cipher",
            tags: vec!["caesar", "substitution", "classical"],
            phantom: PhantomData,
        }
    }

    /// Decodes the block with every shift and scores each decoding.
    /// Never fails: an empty block still yields 26 (empty) decodings.
    fn crack(&self, text: &str, scorer: &Checker<LanguageScorer>) -> CaesarAttempts {
        trace!("Trying Caesar with text {:?}", text);

        let all: Vec<ScoredCandidate> = (0..ALPHABET_SIZE)
            .map(|shift| {
                let decoded = decrypt(text, shift);
                ScoredCandidate {
                    score: scorer.check(&decoded).score,
                    key: CandidateKey::Shift(shift),
                    text: decoded,
                }
            })
            .collect();

        // `all` is in key order and the sort is stable, so ties keep the lower key
        let mut top = all.clone();
        top.sort_by(|a, b| b.score.total_cmp(&a.score));
        top.truncate(get_config().caesar_top_results);

        if let Some(best) = top.first() {
            debug!(
                "Best Caesar shift for {:?} is {} ({:.2})",
                text, best.key, best.score
            );
        }

        CaesarAttempts { all, top }
    }

    fn get_tags(&self) -> &Vec<&str> {
        &self.tags
    }

    fn get_name(&self) -> &str {
        self.name
    }
}

/// Shifts every ASCII letter `shift` places back, keeping its case.
/// Everything else is copied unchanged.
pub fn decrypt(text: &str, shift: u8) -> String {
    rotate(text, ALPHABET_SIZE - shift % ALPHABET_SIZE)
}

/// Shifts every ASCII letter `shift` places forward. Inverse of [`decrypt`].
pub fn encrypt(text: &str, shift: u8) -> String {
    rotate(text, shift % ALPHABET_SIZE)
}

fn rotate(text: &str, shift: u8) -> String {
    text.chars()
        .map(|c| match c {
            'a'..='z' => rotate_letter(c, b'a', shift),
            'A'..='Z' => rotate_letter(c, b'A', shift),
            other => other,
        })
        .collect()
}

fn rotate_letter(letter: char, base: u8, shift: u8) -> char {
    (base + (letter as u8 - base + shift) % ALPHABET_SIZE) as char
}
