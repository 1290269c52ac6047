//! Block level language score used by the language detector.
//!
//! Word matches are worth 2 each and a tenth of the frequency deviation of
//! the block's own letters is subtracted. This is not the plausibility score
//! of [`language_scorer`](super::language_scorer); the detector only ever
//! compares these scores with each other.

use std::marker::PhantomData;

use super::checker_result::CheckResult;
use super::checker_type::{Check, Checker};
use super::frequency::frequency_deviation;
use super::word_tokens;
use crate::storage::LanguageProfile;

/// Points for each distinct common word found in the block.
const LEXICAL_WEIGHT: f64 = 2.0;
/// Share of the frequency deviation subtracted from the lexical score.
const FREQUENCY_PENALTY: f64 = 0.1;

/// Scores a block for language detection.
pub struct DetectionScorer;

impl Check for Checker<DetectionScorer> {
    fn new(profile: &'static LanguageProfile) -> Self {
        Checker {
            name: "Detection Scorer",
            description: "Lexical matches minus a tenth of the letter frequency deviation, used to tag blocks with a language",
            link: "https://en.wikipedia.org/wiki/Language_identification",
            tags: vec!["language", "detection"],
            profile,
            threshold: 0.0,
            _phantom: PhantomData,
        }
    }

    fn check(&self, text: &str) -> CheckResult {
        let mut result = CheckResult::new(self);
        let lexical = lexical_score(text, self.profile);
        let penalty =
            FREQUENCY_PENALTY * frequency_deviation(text, self.profile.letter_frequencies);
        result.score = lexical - penalty;
        result.is_identified = lexical > self.threshold;
        result
    }

    fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }
}

/// `2 × distinct common words in the block`
fn lexical_score(text: &str, profile: &LanguageProfile) -> f64 {
    let matches = word_tokens(text)
        .iter()
        .filter(|token| profile.common_words.contains(token.as_str()))
        .count();
    matches as f64 * LEXICAL_WEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Language;

    #[test]
    fn score_is_lexical_minus_tenth_of_deviation() {
        let profile = Language::Italian.profile();
        let text = "ciao come stai";
        let result = Checker::<DetectionScorer>::new(profile).check(text);
        let expected = 2.0 - 0.1 * frequency_deviation(text, profile.letter_frequencies);
        assert_eq!(result.score, expected);
        assert!(result.is_identified);
    }

    #[test]
    fn block_without_words_is_not_identified() {
        let result = Checker::<DetectionScorer>::new(Language::English.profile()).check("qwxz");
        assert!(!result.is_identified);
        assert!(result.score < 0.0);
    }

    #[test]
    fn empty_block_scores_zero() {
        let result = Checker::<DetectionScorer>::new(Language::English.profile()).check("");
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn closer_letter_distribution_costs_less() {
        let profile = Language::English.profile();
        let checker = Checker::<DetectionScorer>::new(profile);
        assert!(checker.check("the tea").score > checker.check("zzz qqq").score);
    }
}
