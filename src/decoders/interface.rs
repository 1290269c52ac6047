use std::marker::PhantomData;

use crate::checkers::checker_type::Checker;
use crate::checkers::language_scorer::LanguageScorer;

/// The Interface defines what the struct for each decoder looks like
pub struct Decoder<Type> {
    /// The English name of the decoder.
    pub name: &'static str,
    /// A description, you can take the first line from Wikipedia
    /// Sometimes our decoders do not exist on Wikipedia so we write our own.
    pub description: &'static str,
    /// Wikipedia Link
    pub link: &'static str,
    /// The tags it has. See other decoders. Think of it as a "category"
    pub tags: Vec<&'static str>,
    /// we don't use the Type, so we use PhantomData to mark it!
    pub phantom: PhantomData<Type>,
}

/// All decoders will share the same Crack trait.
/// Each decoder has its own kind of output (a ranked list, a single attempt,
/// a substitution table) so the output is an associated type.
pub trait Crack {
    /// What a single run of the decoder produces
    type Output;
    /// This function generates a new crack trait
    fn new() -> Self
    where
        Self: Sized;
    /// Crack is the function that actually does the decoding.
    /// The scorer carries the language the block was tagged with.
    fn crack(&self, text: &str, scorer: &Checker<LanguageScorer>) -> Self::Output;
    /// Get all tags for the current decoder
    fn get_tags(&self) -> &Vec<&str>;
    /// Get the name of the current decoder
    fn get_name(&self) -> &str;
}
