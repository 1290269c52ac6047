//! Splits a line into blocks and tags each block with a language.
//!
//! Blocks are separated by runs of two or more whitespace or sentence
//! punctuation characters, so a line like `ciao come stai.  hello there`
//! yields two blocks that may be tagged differently.

use lazy_regex::regex;
use log::debug;

use crate::checkers::checker_type::{Check, Checker};
use crate::checkers::detection_scorer::DetectionScorer;
use crate::storage::Language;

/// A contiguous fragment of the input and the language it was tagged with.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    /// Detected (or forced) language of the block
    pub language: Language,
    /// The block itself, trimmed
    pub text: String,
}

/// Splits `text` into blocks and tags each one with a language.
/// Empty fragments are dropped; order is preserved.
/// ```rust
/// use cryptoglot::language_detector::detect_blocks;
/// use cryptoglot::storage::Language;
/// let blocks = detect_blocks("ciao come stai!! hello how are you");
/// assert_eq!(blocks.len(), 2);
/// assert_eq!(blocks[0].language, Language::Italian);
/// assert_eq!(blocks[1].language, Language::English);
/// ```
pub fn detect_blocks(text: &str) -> Vec<TextBlock> {
    let italian = Checker::<DetectionScorer>::new(Language::Italian.profile());
    let english = Checker::<DetectionScorer>::new(Language::English.profile());

    regex!(r"[\s.!?]{2,}")
        .split(text)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(|block| TextBlock {
            language: pick_language(block, &italian, &english),
            text: block.to_string(),
        })
        .collect()
}

/// The language of a single block. Ties go to English.
pub fn detect_language(block: &str) -> Language {
    let italian = Checker::<DetectionScorer>::new(Language::Italian.profile());
    let english = Checker::<DetectionScorer>::new(Language::English.profile());
    pick_language(block, &italian, &english)
}

fn pick_language(
    block: &str,
    italian: &Checker<DetectionScorer>,
    english: &Checker<DetectionScorer>,
) -> Language {
    let italian_score = italian.check(block).score;
    let english_score = english.check(block).score;
    let language = if italian_score > english_score {
        Language::Italian
    } else {
        Language::English
    };
    debug!(
        "Block {:?} tagged {} (it: {:.2}, en: {:.2})",
        block, language, italian_score, english_score
    );
    language
}
