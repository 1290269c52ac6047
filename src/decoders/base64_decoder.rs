//! Decode a base64 string
//! Performs error handling and returns a Base64Attempt.
//! Failure is data, never an error: the attempt carries `success: false`
//! and a fixed message instead.

use std::marker::PhantomData;

use base64::{
    alphabet,
    engine::{GeneralPurpose, GeneralPurposeConfig},
    Engine as _,
};
use log::trace;

use super::crack_results::Base64Attempt;
use super::interface::{Crack, Decoder};
use crate::checkers::checker_type::Checker;
use crate::checkers::language_scorer::LanguageScorer;

/// Standard alphabet and padding, but unused bits in the last symbol may be set.
const LENIENT_STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// Reported whenever the block is not Base64 encoded UTF-8 text.
pub const BASE64_FAILURE_MESSAGE: &str = "Not valid Base64-encoded text.";

/// The Base64 decoder, call:
/// `let base64_decoder = Decoder::<Base64Decoder>::new()` to create a new instance
/// And then call:
/// `result = base64_decoder.probe(input)` to decode a base64 string
/// ```rust
/// use cryptoglot::decoders::base64_decoder::Base64Decoder;
/// use cryptoglot::decoders::interface::{Crack, Decoder};
/// let decoder = Decoder::<Base64Decoder>::new();
/// let result = decoder.probe("aGVsbG8gd29ybGQ=");
/// assert!(result.success);
/// assert_eq!(result.result, "hello world");
/// ```
pub struct Base64Decoder;

impl Crack for Decoder<Base64Decoder> {
    type Output = Base64Attempt;

    fn new() -> Decoder<Base64Decoder> {
        Decoder {
            name: "Base64",
            description: "Base64 is a group of binary-to-text encoding schemes that represent binary data (more specifically, a sequence of 8-bit bytes) in an ASCII string format by translating the data into a radix-64 representation.",
            link: "https://en.wikipedia.org/wiki/Base64",
            tags: vec!["base64", "decoder", "base"],
            phantom: PhantomData,
        }
    }

    /// Base64 does not depend on the language, the scorer is unused.
    fn crack(&self, text: &str, _scorer: &Checker<LanguageScorer>) -> Base64Attempt {
        self.probe(text)
    }

    fn get_tags(&self) -> &Vec<&str> {
        &self.tags
    }

    fn get_name(&self) -> &str {
        self.name
    }
}

impl Decoder<Base64Decoder> {
    /// Tries to read `text` as Base64 encoded UTF-8.
    pub fn probe(&self, text: &str) -> Base64Attempt {
        trace!("Trying Base64 with text {:?}", text);
        match decode_base64_no_error_handling(text) {
            Ok(decoded) => Base64Attempt {
                success: true,
                result: decoded,
            },
            Err(e) => {
                trace!("Failed to decode base64: {}", e);
                Base64Attempt {
                    success: false,
                    result: BASE64_FAILURE_MESSAGE.to_string(),
                }
            }
        }
    }
}

/// Why a block could not be read as Base64.
#[derive(Debug)]
enum ProbeError {
    /// Not Base64 at all
    Decode(base64::DecodeError),
    /// Base64, but the bytes are not text
    Utf8(std::string::FromUtf8Error),
}

impl std::fmt::Display for ProbeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProbeError::Decode(e) => write!(f, "{}", e),
            ProbeError::Utf8(e) => write!(f, "{}", e),
        }
    }
}

/// Strips whitespace around the text and spaces inside it, pads with `=` to a
/// multiple of four and decodes with the standard alphabet. Non-zero trailing
/// bits are accepted.
/// Doesn't perform error handling, call `probe`
fn decode_base64_no_error_handling(text: &str) -> Result<String, ProbeError> {
    let mut cleaned: String = text.trim().chars().filter(|c| *c != ' ').collect();
    let remainder = cleaned.len() % 4;
    if remainder != 0 {
        cleaned.push_str(&"=".repeat(4 - remainder));
    }

    let bytes = LENIENT_STANDARD
        .decode(cleaned.as_bytes())
        .map_err(ProbeError::Decode)?;
    String::from_utf8(bytes).map_err(ProbeError::Utf8)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn probe(text: &str) -> Base64Attempt {
        Decoder::<Base64Decoder>::new().probe(text)
    }

    #[test]
    fn successful_decoding() {
        let result = probe("aGVsbG8gd29ybGQ=");
        assert!(result.success);
        assert_eq!(result.result, "hello world");
    }

    #[test]
    fn decodes_hello() {
        assert_eq!(
            probe("aGVsbG8="),
            Base64Attempt {
                success: true,
                result: "hello".to_string()
            }
        );
    }

    #[test]
    fn missing_padding_is_added() {
        let result = probe("aGVsbG8");
        assert!(result.success);
        assert_eq!(result.result, "hello");
    }

    #[test]
    fn trailing_bits_are_ignored() {
        let result = probe("aGVsbG9");
        assert!(result.success);
        assert_eq!(result.result, "hello");

        let result = probe("YR");
        assert!(result.success);
        assert_eq!(result.result, "a");
    }

    #[test]
    fn spaces_and_surrounding_whitespace_are_ignored() {
        let result = probe("  aGVs bG8g d29y bGQ=\n");
        assert!(result.success);
        assert_eq!(result.result, "hello world");
    }

    #[test]
    fn base64_decode_empty_string() {
        let result = probe("");
        assert!(result.success);
        assert_eq!(result.result, "");
    }

    #[test]
    fn invalid_alphabet_fails_with_fixed_message() {
        let result = probe("not valid base64!!");
        assert!(!result.success);
        assert_eq!(result.result, BASE64_FAILURE_MESSAGE);
    }

    #[test]
    fn invalid_utf8_fails() {
        // 0xff 0xfe 0xfd
        let result = probe("//79");
        assert!(!result.success);
        assert_eq!(result.result, BASE64_FAILURE_MESSAGE);
    }

    #[test]
    fn base64_decode_handles_panics() {
        let result = probe("hello my name is panicky mc panic face!");
        assert!(!result.success);
    }
}
