//! Frequency rank substitution advisor.
//! Ranks the letters of the block by how often they occur and pairs them,
//! rank for rank, with the most frequent letters of the target language.
//! This is a hint for a human, not a decryption: nothing checks that the
//! proposed mapping produces words.

use std::marker::PhantomData;

use log::trace;

use super::crack_results::SubstitutionProposal;
use super::interface::{Crack, Decoder};
use crate::checkers::checker_type::Checker;
use crate::checkers::frequency::letter_percentages;
use crate::checkers::language_scorer::LanguageScorer;

/// The substitution advisor struct
pub struct SubstitutionDecoder;

impl Crack for Decoder<SubstitutionDecoder> {
    type Output = SubstitutionProposal;

    fn new() -> Decoder<SubstitutionDecoder> {
        Decoder {
            name: "frequency substitution",
            description: "Proposes a monoalphabetic substitution by pairing the block's letters with the target language's letters in order of frequency.",
            link: "https://en.wikipedia.org/wiki/Frequency_analysis",
            tags: vec!["substitution", "frequency", "classical"],
            phantom: PhantomData,
        }
    }

    /// A block without letters yields empty tables.
    fn crack(&self, text: &str, scorer: &Checker<LanguageScorer>) -> SubstitutionProposal {
        trace!("Proposing a substitution for {:?}", text);
        let profile = scorer.profile;

        // stable sorts: ties keep first appearance / table order
        let mut frequencies = letter_percentages(text);
        frequencies.sort_by(|a, b| b.1.total_cmp(&a.1));

        let mut reference = profile.letter_frequencies.to_vec();
        reference.sort_by(|a, b| b.1.total_cmp(&a.1));

        let substitutions = frequencies
            .iter()
            .zip(reference.iter())
            .map(|((observed, _), (expected, _))| (*observed, *expected))
            .collect();

        SubstitutionProposal {
            frequencies,
            substitutions,
            language: profile.language.label(),
        }
    }

    fn get_tags(&self) -> &Vec<&str> {
        &self.tags
    }

    fn get_name(&self) -> &str {
        self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkers::checker_type::Check;
    use crate::storage::Language;

    fn propose(text: &str, language: Language) -> SubstitutionProposal {
        let scorer = Checker::<LanguageScorer>::new(language.profile());
        Decoder::<SubstitutionDecoder>::new().crack(text, &scorer)
    }

    #[test]
    fn pairs_letters_by_rank() {
        let proposal = propose("EEEE aa t", Language::English);
        let letters: Vec<char> = proposal.frequencies.iter().map(|(c, _)| *c).collect();
        assert_eq!(letters, vec!['e', 'a', 't']);
        assert_eq!(proposal.substitutions, vec![('e', 'e'), ('a', 't'), ('t', 'a')]);
        assert_eq!(proposal.language, "English");
    }

    #[test]
    fn italian_reference_starts_with_e() {
        // 'e' (11.8) outranks 'a' (11.7) in the Italian table
        let proposal = propose("xx y", Language::Italian);
        assert_eq!(proposal.substitutions, vec![('x', 'e'), ('y', 'a')]);
        assert_eq!(proposal.language, "Italian");
    }

    #[test]
    fn ties_keep_first_appearance() {
        let proposal = propose("ba", Language::English);
        assert_eq!(proposal.substitutions, vec![('b', 'e'), ('a', 't')]);
    }

    #[test]
    fn extra_letters_stay_unmapped() {
        let proposal = propose("abcdefghijklmnopqrstuvwxyz", Language::English);
        assert_eq!(proposal.frequencies.len(), 26);
        assert_eq!(proposal.substitutions.len(), 15);
    }

    #[test]
    fn letterless_block_gives_empty_tables() {
        let proposal = propose("123 !!", Language::English);
        assert!(proposal.frequencies.is_empty());
        assert!(proposal.substitutions.is_empty());
        assert_eq!(proposal.language, "English");
    }
}
