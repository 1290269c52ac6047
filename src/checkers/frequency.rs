//! Letter frequency helpers shared by the scorers and the substitution advisor.

use std::collections::HashMap;

/// Counts the alphabetic characters of `text`, lower-cased.
/// Letters are listed in order of first appearance so that later stable
/// sorts are deterministic. Returns the counts and the total letter count.
pub fn letter_counts(text: &str) -> (Vec<(char, usize)>, usize) {
    let mut counts: Vec<(char, usize)> = Vec::new();
    let mut index: HashMap<char, usize> = HashMap::new();
    let mut total = 0;

    for letter in text
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
    {
        total += 1;
        match index.get(&letter) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(letter, counts.len());
                counts.push((letter, 1));
            }
        }
    }

    (counts, total)
}

/// Percentage of each letter in `text`, in order of first appearance.
pub fn letter_percentages(text: &str) -> Vec<(char, f64)> {
    let (counts, total) = letter_counts(text);
    if total == 0 {
        return Vec::new();
    }
    counts
        .into_iter()
        .map(|(letter, count)| (letter, count as f64 / total as f64 * 100.0))
        .collect()
}

/// Scores how closely the letter distribution of `text` follows `reference`.
///
/// Every reference letter contributes `100 - |observed% - expected%|`,
/// weighted by its expected frequency relative to the most frequent letter,
/// and the sum is normalised by the total weight. A perfect match is close
/// to 100. Text without letters scores 0.
///
/// Case and non-letters have no effect:
/// ```rust
/// use cryptoglot::checkers::frequency::frequency_score;
/// use cryptoglot::storage::Language;
/// let table = Language::English.profile().letter_frequencies;
/// assert_eq!(frequency_score("ETAOIN", table), frequency_score("e-t-a-o-i-n", table));
/// ```
pub fn frequency_score(text: &str, reference: &[(char, f64)]) -> f64 {
    let (counts, total) = letter_counts(text);
    if total == 0 {
        return 0.0;
    }
    let counts: HashMap<char, usize> = counts.into_iter().collect();
    let max_expected = reference.iter().map(|(_, f)| *f).fold(0.0, f64::max);
    if max_expected <= 0.0 {
        return 0.0;
    }

    let mut score = 0.0;
    let mut total_weight = 0.0;
    for (letter, expected) in reference {
        let observed = counts.get(letter).copied().unwrap_or(0) as f64 / total as f64 * 100.0;
        let weight = expected / max_expected;
        score += (100.0 - (observed - expected).abs()) * weight;
        total_weight += weight;
    }

    score / total_weight
}

/// Total distance between the letter distribution of `text` and `reference`,
/// summed over the letters that occur in `text`. Letters missing from the
/// reference count as expected at 0%. Lower means closer; text without letters
/// has no distance at all.
pub fn frequency_deviation(text: &str, reference: &[(char, f64)]) -> f64 {
    let (counts, total) = letter_counts(text);
    let total = total.max(1) as f64;
    counts
        .into_iter()
        .map(|(letter, count)| {
            let expected = reference
                .iter()
                .find(|(l, _)| *l == letter)
                .map_or(0.0, |(_, f)| *f);
            (expected - count as f64 / total * 100.0).abs()
        })
        .sum()
}
