//! The named results every decoder hands back to the orchestrator.

use std::fmt;

use serde::Serialize;

/// The key a candidate was decoded with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CandidateKey {
    /// Caesar shift, 0 to 25
    Shift(u8),
    /// Vigenère keyword, upper case
    Keyword(String),
}

impl fmt::Display for CandidateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CandidateKey::Shift(shift) => write!(f, "{}", shift),
            CandidateKey::Keyword(keyword) => write!(f, "{}", keyword),
        }
    }
}

/// One decoding attempt and how plausible it looks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredCandidate {
    /// Plausibility score, higher is better
    pub score: f64,
    /// The key used
    pub key: CandidateKey,
    /// The decoded text, same length and layout as the input block
    pub text: String,
}

/// Every Caesar decoding of a block and the best few of them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaesarAttempts {
    /// All 26 decodings, in key order
    pub all: Vec<ScoredCandidate>,
    /// Best candidates, descending score, ties go to the lower key
    pub top: Vec<ScoredCandidate>,
}

/// A naive frequency-rank substitution proposal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubstitutionProposal {
    /// Letter percentages of the block, most frequent first
    pub frequencies: Vec<(char, f64)>,
    /// Observed letter to proposed plaintext letter, by rank
    pub substitutions: Vec<(char, char)>,
    /// Name of the language the proposal targets
    pub language: &'static str,
}

/// Outcome of reading a block as Base64.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Base64Attempt {
    /// Whether the block decoded to valid UTF-8
    pub success: bool,
    /// The decoded text, or a fixed failure message
    pub result: String,
}
