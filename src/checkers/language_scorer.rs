//! Plausibility scoring of a decoded fragment against one language.
//!
//! This is the score every analyzer ranks its candidates with. It rewards
//! recognised words heavily, adds the letter frequency score and gives a
//! small bonus when the mean word length looks like the language.

use std::marker::PhantomData;

use log::trace;

use super::checker_result::CheckResult;
use super::checker_type::{Check, Checker};
use super::frequency::frequency_score;
use super::word_tokens;
use crate::config::get_config;
use crate::storage::LanguageProfile;

/// Points for each distinct common word found in the text.
const WORD_MATCH_WEIGHT: f64 = 15.0;
/// Flat bonus when the mean word length falls in the language's band.
const LENGTH_BONUS: f64 = 10.0;

/// Scores how plausible a text is in a given language.
pub struct LanguageScorer;

impl Check for Checker<LanguageScorer> {
    fn new(profile: &'static LanguageProfile) -> Self {
        Checker {
            name: "Language Scorer",
            description: "Combines common word matches, letter frequencies and mean word length into a plausibility score",
            link: "https://en.wikipedia.org/wiki/Frequency_analysis",
            tags: vec!["language", "frequency", "dictionary"],
            profile,
            threshold: get_config().vigenere_threshold,
            _phantom: PhantomData,
        }
    }

    fn check(&self, text: &str) -> CheckResult {
        let mut result = CheckResult::new(self);
        result.score = plausibility_score(text, self.profile);
        result.is_identified = result.score > self.threshold;
        trace!(
            "Scored {:?} as {} against {}",
            text,
            result.score,
            self.profile.language
        );
        result
    }

    fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }
}

/// `15 × word matches + frequency score + length bonus`
pub fn plausibility_score(text: &str, profile: &LanguageProfile) -> f64 {
    let tokens = word_tokens(text);

    let matches = tokens
        .iter()
        .filter(|token| profile.common_words.contains(token.as_str()))
        .count();
    let word_score = matches as f64 * WORD_MATCH_WEIGHT;

    let freq_score = frequency_score(text, profile.letter_frequencies);

    let total_length: usize = tokens.iter().map(|token| token.chars().count()).sum();
    let mean_length = total_length as f64 / tokens.len().max(1) as f64;
    let length_bonus = if profile.word_length_band.contains(&mean_length) {
        LENGTH_BONUS
    } else {
        0.0
    };

    word_score + freq_score + length_bonus
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkers::frequency::frequency_score;
    use crate::storage::Language;

    fn scorer(language: Language) -> Checker<LanguageScorer> {
        Checker::<LanguageScorer>::new(language.profile())
    }

    #[test]
    fn recognised_words_add_fifteen_each() {
        let profile = Language::English.profile();
        let text = "hello you";
        // mean length 4 is inside the English band
        let expected = 30.0 + frequency_score(text, profile.letter_frequencies) + 10.0;
        assert_eq!(plausibility_score(text, profile), expected);
    }

    #[test]
    fn repeated_words_count_once() {
        let profile = Language::English.profile();
        let once = plausibility_score("hello", profile);
        let twice = plausibility_score("hello hello", profile);
        assert_eq!(once, twice);
    }

    #[test]
    fn matching_ignores_case_and_punctuation() {
        let profile = Language::Italian.profile();
        let score = plausibility_score("CIAO, come stai?", profile);
        assert!(score > 15.0);
        assert!(score > plausibility_score("xyzw, qwer tyui?", profile));
    }

    #[test]
    fn length_bonus_depends_on_language() {
        // mean length 3: inside [3, 7] for English, outside [4, 8] for Italian
        let text = "zzz";
        let en = Language::English.profile();
        let it = Language::Italian.profile();
        assert_eq!(
            plausibility_score(text, en),
            frequency_score(text, en.letter_frequencies) + 10.0
        );
        assert_eq!(
            plausibility_score(text, it),
            frequency_score(text, it.letter_frequencies)
        );
    }

    #[test]
    fn no_tokens_means_no_bonus() {
        assert_eq!(plausibility_score("", Language::English.profile()), 0.0);
        assert_eq!(plausibility_score("  !! ", Language::Italian.profile()), 0.0);
    }

    #[test]
    fn plain_english_clears_the_default_threshold() {
        let result = scorer(Language::English).check("hello, how are you?");
        assert!(result.is_identified);
        assert_eq!(result.language, Language::English);
    }

    #[test]
    fn threshold_can_be_raised() {
        let result = scorer(Language::English)
            .with_threshold(1000.0)
            .check("hello, how are you?");
        assert!(!result.is_identified);
    }
}
