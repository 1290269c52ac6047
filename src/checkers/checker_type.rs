/// Checker_type is a type used to define checkers
/// This means that we can standardise the way we score text
use std::marker::PhantomData;

use crate::checkers::checker_result::CheckResult;
use crate::storage::LanguageProfile;

/// Every checker is of type Checker<Type>
/// The profile is the language the checker scores against.
pub struct Checker<Type> {
    /// The name of the checker
    pub name: &'static str,
    /// The description of the checker
    pub description: &'static str,
    /// The link to read more about the technique
    pub link: &'static str,
    /// The tags of the checker
    pub tags: Vec<&'static str>,
    /// The language tables this checker reads from
    pub profile: &'static LanguageProfile,
    /// A decoding scoring above this is reported as identified
    pub threshold: f64,
    /// Marks which scoring formula this checker uses
    pub _phantom: PhantomData<Type>,
}

/// Every checker must implement this trait
/// Which scores the given text against the checker's language
/// and returns CheckResult, which is our results object.
pub trait Check {
    /// Builds the checker for the given language
    fn new(profile: &'static LanguageProfile) -> Self
    where
        Self: Sized;
    /// Scores the text
    fn check(&self, text: &str) -> CheckResult;
    /// Replaces the threshold used to decide `is_identified`
    fn with_threshold(self, threshold: f64) -> Self
    where
        Self: Sized;
}
