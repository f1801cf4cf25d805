//! Content-word frequency counts.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::text;

/// Top content words and their counts, parallel arrays in rank order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WordFrequencyReport {
    pub words: Vec<String>,
    pub frequencies: Vec<usize>,
}

impl WordFrequencyReport {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Count words longer than three characters, stop words excluded. Ranked by
/// count; equal counts keep first-appearance order.
pub fn word_frequencies(text: &str, top_n: usize) -> WordFrequencyReport {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for token in text::words(text) {
        if text::char_len(&token) > 3 && !text::is_stop_word(&token) {
            *counts.entry(token).or_insert(0) += 1;
        }
    }

    let mut entries: Vec<(String, usize)> = counts.into_iter().collect();
    // Stable sort keeps first-appearance order among equal counts.
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries.truncate(top_n);

    let (words, frequencies) = entries.into_iter().unzip();
    WordFrequencyReport { words, frequencies }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_rank_descending() {
        let report = word_frequencies("bird wolf bird bear bird wolf", 10);
        assert_eq!(report.words, vec!["bird", "wolf", "bear"]);
        assert_eq!(report.frequencies, vec![3, 2, 1]);
    }

    #[test]
    fn test_ties_keep_first_appearance_order() {
        let report = word_frequencies("alpha beta alpha beta gamma", 10);
        assert_eq!(report.words, vec!["alpha", "beta", "gamma"]);
        assert_eq!(report.frequencies, vec![2, 2, 1]);
    }

    #[test]
    fn test_short_words_and_stop_words_excluded() {
        // "cat" has three characters, "which" is a stop word.
        let report = word_frequencies("cat which mountain cat which mountain", 10);
        assert_eq!(report.words, vec!["mountain"]);
        assert_eq!(report.frequencies, vec![2]);
    }

    #[test]
    fn test_top_n_truncation() {
        let report = word_frequencies("bird wolf bird bear bird wolf", 2);
        assert_eq!(report.len(), 2);
        assert_eq!(report.words, vec!["bird", "wolf"]);
    }

    #[test]
    fn test_empty_text() {
        let report = word_frequencies("", 10);
        assert!(report.is_empty());
        assert!(report.frequencies.is_empty());
    }

    #[test]
    fn test_serialized_shape() {
        let report = word_frequencies("bird wolf bird", 10);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["words"][0], "bird");
        assert_eq!(json["frequencies"][0], 2);
    }
}
