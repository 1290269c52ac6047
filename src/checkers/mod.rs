use std::collections::HashSet;

use lazy_regex::regex;

/// The checkerResult struct is used to store the results of a checker.
pub mod checker_result;
/// This is the base checker that all other checkers are built from.
pub mod checker_type;
/// The detection scorer tags blocks with a language.
pub mod detection_scorer;
/// Letter frequency counting and scoring.
pub mod frequency;
/// The language scorer ranks decodings by plausibility.
pub mod language_scorer;

/// Distinct lower-cased word tokens of `text`.
/// A token is a run of word characters, so punctuation never sticks to a word.
/// ```rust
/// use cryptoglot::checkers::word_tokens;
/// let tokens = word_tokens("Hello, hello world!");
/// assert_eq!(tokens.len(), 2);
/// assert!(tokens.contains("hello"));
/// ```
pub fn word_tokens(text: &str) -> HashSet<String> {
    let lowered = text.to_lowercase();
    regex!(r"\w+")
        .find_iter(&lowered)
        .map(|token| token.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::word_tokens;

    #[test]
    fn tokens_are_lowercase_and_distinct() {
        let tokens = word_tokens("Ciao CIAO ciao, Mondo");
        assert_eq!(tokens.len(), 2);
        assert!(tokens.contains("ciao"));
        assert!(tokens.contains("mondo"));
    }

    #[test]
    fn accented_letters_stay_inside_words() {
        let tokens = word_tokens("perché è così");
        assert!(tokens.contains("è"));
        assert!(tokens.contains("perché"));
    }

    #[test]
    fn empty_text_has_no_tokens() {
        assert!(word_tokens("  ...  ").is_empty());
    }
}
