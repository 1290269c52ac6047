//! This module contains all the code for decoders
//! Think of a decoder as a decryption method that may need a key
//! The `interface.rs` defines what each decoder looks like.
//! Once you have made a decoder you need to add it to the orchestrator in
//! `lib.rs` and a field for its output in `AnalysisRecord`.
//! you will also need to make it a public module in this file.

/// Probes a block as Base64
pub mod base64_decoder;
/// Tries every Caesar shift
pub mod caesar_decoder;
/// The named results decoders return
pub mod crack_results;
/// The Decoder struct and the Crack trait
pub mod interface;
/// Frequency rank substitution hints
pub mod substitution_decoder;
/// Dictionary and short-key Vigenère search
pub mod vigenere_decoder;
