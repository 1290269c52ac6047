use crate::checkers::checker_type::Checker;
use crate::storage::Language;

/// The result of scoring a piece of text with a checker.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckResult {
    /// True when the score clears the checker's threshold
    pub is_identified: bool,
    /// The score the checker gave the text. Higher is more plausible.
    pub score: f64,
    /// The language the text was scored against
    pub language: Language,
}

impl CheckResult {
    /// Creates an unidentified, zero-score result for the given checker
    pub fn new<Type>(checker_used: &Checker<Type>) -> CheckResult {
        CheckResult {
            is_identified: false,
            score: 0.0,
            language: checker_used.profile.language,
        }
    }
}
