//! cryptoglot is a heuristic cryptanalysis assistant for classical ciphers.
//! It splits ciphertext into blocks, guesses whether each block is English or
//! Italian, then tries Caesar shifts, Vigenère keys, a frequency substitution
//! and Base64 on it, ranking every decoding by how much it looks like the
//! language. It produces ranked candidates, a human picks the plaintext.
// Warns in case we forget to include documentation
#![warn(
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

/// Checkers score text against a language
pub mod checkers;
/// CLI Input Parser parses the input from the CLI and returns a struct.
pub mod cli;
/// The CLI Pretty Printing module contains the functions that print the results
pub mod cli_pretty_printing;
/// The Config module enables a configuration module
/// Like a global API to access config details
pub mod config;
/// Decoders are the functions that actually perform the decodings.
pub mod decoders;
/// Unified error type
pub mod error;
/// Splits lines into blocks and tags them with a language
pub mod language_detector;
/// The storage module contains the language tables used by the
/// checkers and decoders.
pub mod storage;
/// Timer used to cancel the Vigenère fallback
mod timer;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{debug, info, warn};
use rayon::prelude::*;
use serde::Serialize;

use crate::checkers::checker_type::{Check, Checker};
use crate::checkers::language_scorer::LanguageScorer;
use crate::config::{get_config, Config};
use crate::decoders::base64_decoder::Base64Decoder;
use crate::decoders::caesar_decoder::CaesarDecoder;
use crate::decoders::crack_results::{
    Base64Attempt, CaesarAttempts, ScoredCandidate, SubstitutionProposal,
};
use crate::decoders::interface::{Crack, Decoder};
use crate::decoders::substitution_decoder::SubstitutionDecoder;
use crate::decoders::vigenere_decoder::VigenereDecoder;
use crate::language_detector::{detect_blocks, TextBlock};
use crate::storage::Language;

/// Everything cryptoglot found out about one block of the input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisRecord {
    /// Language the block was tagged with
    pub language: Language,
    /// The block that was analysed
    pub text: String,
    /// Every Caesar shift and the best few
    pub caesar: CaesarAttempts,
    /// Plausible Vigenère decodings, best first
    pub vigenere: Vec<ScoredCandidate>,
    /// Frequency rank substitution hint
    pub substitution: SubstitutionProposal,
    /// Whether the block is Base64 text
    pub base64: Base64Attempt,
}

/// The main function to call which performs the analysis.
/// It installs `config` as the global config, arms the timeout if one is set
/// and analyses `text`.
///
/// The global config can only be set once per process. Anything that reads it
/// first, including an earlier call to [`analyze`] or another call to this
/// function, locks in that config and a different `config` passed here is
/// ignored with a warning.
/// ```rust
/// use cryptoglot::perform_analysis;
/// use cryptoglot::config::Config;
/// use cryptoglot::storage::Language;
/// let records = perform_analysis("Khoor, krz duh brx?", Config::default());
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].language, Language::English);
/// assert_eq!(records[0].caesar.top[0].text, "Hello, how are you?");
/// ```
pub fn perform_analysis(text: &str, config: Config) -> Vec<AnalysisRecord> {
    config::set_global_config(config.clone());
    let installed = get_config();
    if *installed != config {
        warn!("A global config was already in place, the given config is ignored");
    }
    let config = installed;

    let stop = Arc::new(AtomicBool::new(false));
    let timer = if config.timeout > 0 {
        Some(timer::start(config.timeout, stop.clone()))
    } else {
        None
    };

    let records = analyze_with_stop(text, &stop);

    if let Some(timer) = timer {
        if timer.try_recv().is_ok() {
            warn!("The analysis hit the {} second timeout", config.timeout);
        }
    }
    // lets the timer thread exit
    stop.store(true, Ordering::Relaxed);

    records
}

/// Analyses every block of every non-empty line of `text`.
/// Records come in line order, then block order.
pub fn analyze(text: &str) -> Vec<AnalysisRecord> {
    analyze_with_stop(text, &AtomicBool::new(false))
}

/// Like [`analyze`], but the Vigenère fallback gives up once `stop` is set.
pub fn analyze_with_stop(text: &str, stop: &AtomicBool) -> Vec<AnalysisRecord> {
    let forced_language = get_config().language;

    let blocks: Vec<TextBlock> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .flat_map(detect_blocks)
        .map(|mut block| {
            if let Some(language) = forced_language {
                block.language = language;
            }
            block
        })
        .collect();
    info!("Analysing {} blocks", blocks.len());

    // collect keeps block order, so the output matches a sequential run
    blocks
        .par_iter()
        .map(|block| analyze_block(block, stop))
        .collect()
}

/// Runs every decoder on one block.
pub fn analyze_block(block: &TextBlock, stop: &AtomicBool) -> AnalysisRecord {
    debug!("Analysing {:?} as {}", block.text, block.language);
    let scorer = Checker::<LanguageScorer>::new(block.language.profile());

    AnalysisRecord {
        language: block.language,
        text: block.text.clone(),
        caesar: Decoder::<CaesarDecoder>::new().crack(&block.text, &scorer),
        vigenere: Decoder::<VigenereDecoder>::new().crack_with_stop(&block.text, &scorer, stop),
        substitution: Decoder::<SubstitutionDecoder>::new().crack(&block.text, &scorer),
        base64: Decoder::<Base64Decoder>::new().crack(&block.text, &scorer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_has_no_records() {
        assert!(analyze("").is_empty());
        assert!(analyze("\n   \n\t\n").is_empty());
    }

    #[test]
    fn one_record_per_block_in_order() {
        let records = analyze("ciao come stai!! hello how are you\nsono io");
        let texts: Vec<&str> = records.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["ciao come stai", "hello how are you", "sono io"]);
        assert_eq!(records[0].language, Language::Italian);
        assert_eq!(records[1].language, Language::English);
        assert_eq!(records[2].language, Language::Italian);
    }

    #[test]
    fn record_holds_every_analysis() {
        let records = analyze("aGVsbG8gd29ybGQ=");
        let record = &records[0];
        assert_eq!(record.caesar.all.len(), 26);
        assert_eq!(record.caesar.top.len(), 3);
        assert!(record.vigenere.len() <= 5);
        assert!(record.base64.success);
        assert_eq!(record.base64.result, "hello world");
        assert!(!record.substitution.frequencies.is_empty());
    }

    #[test]
    fn analysis_is_deterministic() {
        let text = "Wkh txlfn eurzq ira.  Fldr frph vwdl";
        assert_eq!(analyze(text), analyze(text));
    }

    #[test]
    fn stopped_analysis_still_returns_records() {
        let stop = AtomicBool::new(true);
        let records = analyze_with_stop("12345", &stop);
        assert_eq!(records.len(), 1);
        assert!(records[0].vigenere.is_empty());
        assert!(!records[0].base64.success);
    }
}
