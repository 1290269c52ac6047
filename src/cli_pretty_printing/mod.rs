//! CLI Pretty Printing Module
//!
//! All console output of the CLI goes through here, so the library itself
//! never prints. Every message is coloured by its role:
//! - Informational: headings and status updates
//! - Warning: failures and things that need attention
//! - Success: plausible decodings
//! - Statement: everything else
//!
//! In API mode the records are printed as JSON and all decoration is skipped.
//!
//! # Usage
//! ```rust
//! use cryptoglot::cli_pretty_printing::{success, warning};
//!
//! // Print a success message
//! println!("{}", success("Operation completed successfully"));
//!
//! // Print a warning message
//! println!("{}", warning("Please check your input"));
//! ```


use ansi_term::Colour;

use crate::decoders::crack_results::ScoredCandidate;
use crate::error::CryptoglotError;
use crate::AnalysisRecord;

/// Colors a string based on its role.
fn color_string(text: &str, role: &str) -> String {
    let colour = match role {
        "informational" => Colour::RGB(255, 215, 0),
        "warning" => Colour::RGB(255, 0, 0),
        "success" => Colour::RGB(0, 255, 0),
        _ => Colour::RGB(255, 255, 255),
    };
    colour.paint(text).to_string()
}

/// Colors text as a neutral statement, or with the given role.
pub fn statement(text: &str, role: Option<&str>) -> String {
    color_string(text, role.unwrap_or("statement"))
}

/// Colors text using the warning color.
pub fn warning(text: &str) -> String {
    color_string(text, "warning")
}

/// Colors text using the success color.
pub fn success(text: &str) -> String {
    color_string(text, "success")
}

/// Colors text using the informational color, in bold.
fn heading(text: &str) -> String {
    Colour::RGB(255, 215, 0).bold().paint(text).to_string()
}

/// One candidate on one line: key, score, decoded text.
fn format_candidate(candidate: &ScoredCandidate) -> String {
    format!(
        "Key {} (score: {:.2}): {}",
        statement(&candidate.key.to_string(), Some("informational")),
        candidate.score,
        success(&candidate.text)
    )
}

/// Renders the human readable report for one record.
/// `number` is the 1-based position of the record in the output.
pub fn format_record(number: usize, record: &AnalysisRecord) -> String {
    let mut lines = vec![
        heading(&format!("=== BLOCK {} ===", number)),
        format!("Text: {}", statement(&record.text, None)),
        format!(
            "Detected language: {}",
            statement(record.substitution.language, Some("informational"))
        ),
        String::new(),
        heading("--- CAESAR CIPHER ---"),
    ];
    lines.extend(record.caesar.top.iter().map(format_candidate));

    lines.push(String::new());
    lines.push(heading("--- VIGENÈRE CIPHER ---"));
    if record.vigenere.is_empty() {
        lines.push(warning("No plausible Vigenère key found."));
    } else {
        lines.extend(record.vigenere.iter().map(format_candidate));
    }

    lines.push(String::new());
    lines.push(heading("--- FREQUENCY SUBSTITUTION ---"));
    if record.substitution.frequencies.is_empty() {
        lines.push(warning("No letters to analyse."));
    } else {
        let frequencies = record
            .substitution
            .frequencies
            .iter()
            .map(|(letter, percent)| format!("{}: {:.1}%", letter, percent))
            .collect::<Vec<_>>()
            .join(", ");
        let substitutions = record
            .substitution
            .substitutions
            .iter()
            .map(|(observed, expected)| format!("{}→{}", observed, expected))
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(format!("Frequencies: {}", frequencies));
        lines.push(format!("Proposed substitutions: {}", substitutions));
    }

    lines.push(String::new());
    lines.push(heading("--- BASE64 ---"));
    if record.base64.success {
        lines.push(success(&record.base64.result));
    } else {
        lines.push(warning(&record.base64.result));
    }

    lines.join("\n")
}

/// Prints every record, as JSON in API mode or as the coloured report.
///
/// # Errors
/// Returns a serialization error if the records cannot be turned into JSON.
pub fn print_records(records: &[AnalysisRecord]) -> Result<(), CryptoglotError> {
    let config = crate::config::get_config();
    if config.api_mode {
        println!("{}", serde_json::to_string_pretty(records)?);
        return Ok(());
    }

    for (i, record) in records.iter().enumerate() {
        println!("\n{}", format_record(i + 1, record));
    }
    Ok(())
}

/// Tells the user there was nothing to analyse.
pub fn input_is_empty() {
    let config = crate::config::get_config();
    if config.api_mode {
        println!("[]");
        return;
    }
    eprintln!(
        "{}",
        warning("No input was provided. Please use -t for text, -f for files, or pipe text into stdin.")
    );
}

/// Reports an error that stops the program.
pub fn program_failed(error: &CryptoglotError) {
    eprintln!("{}", warning(&format!("cryptoglot failed: {}", error)));
}
