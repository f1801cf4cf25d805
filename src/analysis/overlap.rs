//! Vocabulary overlap across the corpus.
//!
//! Vocabulary here means the set of words longer than three characters; stop
//! words stay in, since shared function words are part of what the overlap
//! matrix measures.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::corpus::TextRecord;
use crate::text;

/// Words found in exactly one text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UniqueWords {
    pub count: usize,
    /// Share of the text's own vocabulary that is unique to it.
    pub percentage: f64,
    /// Up to 20 examples, alphabetical.
    pub examples: Vec<String>,
}

/// Corpus-wide vocabulary comparison.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VocabularyOverlap {
    /// Pairwise Jaccard similarity as a percentage; the diagonal is 100.
    pub overlap_matrix: IndexMap<String, IndexMap<String, f64>>,
    pub unique_words: IndexMap<String, UniqueWords>,
    pub total_unique_words: usize,
}

fn vocabulary(text: &str) -> HashSet<String> {
    text::words(text)
        .into_iter()
        .filter(|w| text::char_len(w) > 3)
        .collect()
}

/// Pairwise overlap and per-text unique vocabulary for the whole corpus.
pub fn vocabulary_overlap(records: &[TextRecord]) -> VocabularyOverlap {
    let vocabularies: Vec<(&str, HashSet<String>)> = records
        .iter()
        .map(|r| (r.title.as_str(), vocabulary(&r.text)))
        .collect();

    let mut overlap_matrix = IndexMap::new();
    for (title1, vocab1) in &vocabularies {
        let mut row = IndexMap::new();
        for (title2, vocab2) in &vocabularies {
            let score = if title1 == title2 {
                100.0
            } else {
                let intersection = vocab1.intersection(vocab2).count();
                let union = vocab1.union(vocab2).count();
                if union == 0 {
                    0.0
                } else {
                    intersection as f64 / union as f64 * 100.0
                }
            };
            row.insert((*title2).to_string(), score);
        }
        overlap_matrix.insert((*title1).to_string(), row);
    }

    let mut unique_words = IndexMap::new();
    for (i, (title, vocab)) in vocabularies.iter().enumerate() {
        let mut others: HashSet<&String> = HashSet::new();
        for (j, (_, other)) in vocabularies.iter().enumerate() {
            if i != j {
                others.extend(other.iter());
            }
        }

        let mut examples: Vec<String> = vocab
            .iter()
            .filter(|w| !others.contains(w))
            .cloned()
            .collect();
        let count = examples.len();
        examples.sort();
        examples.truncate(20);

        let percentage = if vocab.is_empty() {
            0.0
        } else {
            count as f64 / vocab.len() as f64 * 100.0
        };
        unique_words.insert(
            (*title).to_string(),
            UniqueWords {
                count,
                percentage,
                examples,
            },
        );
    }

    let total_unique_words = vocabularies
        .iter()
        .flat_map(|(_, v)| v.iter())
        .collect::<HashSet<_>>()
        .len();

    VocabularyOverlap {
        overlap_matrix,
        unique_words,
        total_unique_words,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn record(title: &str, text: &str) -> TextRecord {
        TextRecord {
            title: title.to_string(),
            source_filename: format!("{}.txt", title.to_lowercase()),
            clean_path: PathBuf::from(format!("{}_clean.txt", title)),
            text: text.to_string(),
            chapters: Vec::new(),
            word_count: text.split_whitespace().count(),
            char_count: text.chars().count(),
        }
    }

    #[test]
    fn test_pairwise_jaccard() {
        let records = vec![
            record("First", "The wolf and the bear wandered."),
            record("Second", "The wolf and the eagle wandered."),
        ];
        let overlap = vocabulary_overlap(&records);

        // Vocabularies are {wolf, bear, wandered} and {wolf, eagle, wandered}.
        let score = overlap.overlap_matrix["First"]["Second"];
        assert!((score - 50.0).abs() < 1e-9);
        assert_eq!(overlap.overlap_matrix["First"]["First"], 100.0);
        assert_eq!(overlap.total_unique_words, 4);
    }

    #[test]
    fn test_matrix_is_symmetric() {
        let records = vec![
            record("First", "The wolf and the bear wandered far."),
            record("Second", "The wolf and the eagle wandered."),
            record("Third", "Nothing shared here whatsoever."),
        ];
        let overlap = vocabulary_overlap(&records);
        for a in ["First", "Second", "Third"] {
            for b in ["First", "Second", "Third"] {
                assert_eq!(
                    overlap.overlap_matrix[a][b],
                    overlap.overlap_matrix[b][a]
                );
            }
        }
    }

    #[test]
    fn test_unique_words() {
        let records = vec![
            record("First", "The wolf and the bear wandered."),
            record("Second", "The wolf and the eagle wandered."),
        ];
        let overlap = vocabulary_overlap(&records);

        let first = &overlap.unique_words["First"];
        assert_eq!(first.count, 1);
        assert_eq!(first.examples, vec!["bear"]);
        assert!((first.percentage - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_stop_words_stay_in_vocabulary() {
        let records = vec![
            record("First", "Which wolf howled."),
            record("Second", "Which eagle soared."),
        ];
        let overlap = vocabulary_overlap(&records);
        // Only "which" is shared, and it is a stop word.
        assert!((overlap.overlap_matrix["First"]["Second"] - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_text_corpus() {
        let records = vec![record("Only", "The wolf and the bear wandered.")];
        let overlap = vocabulary_overlap(&records);

        assert_eq!(overlap.overlap_matrix["Only"]["Only"], 100.0);
        let unique = &overlap.unique_words["Only"];
        assert_eq!(unique.count, 3);
        assert_eq!(unique.percentage, 100.0);
        assert_eq!(overlap.total_unique_words, 3);
    }

    #[test]
    fn test_empty_corpus() {
        let overlap = vocabulary_overlap(&[]);
        assert!(overlap.overlap_matrix.is_empty());
        assert!(overlap.unique_words.is_empty());
        assert_eq!(overlap.total_unique_words, 0);
    }

    #[test]
    fn test_examples_sorted_and_capped() {
        let mut text = String::new();
        for a in ['a', 'b', 'c', 'd', 'e'] {
            for b in ['a', 'b', 'c', 'd', 'e'] {
                text.push_str(&format!("unique{}{} ", a, b));
            }
        }
        let records = vec![record("Big", &text), record("Other", "different words entirely.")];
        let overlap = vocabulary_overlap(&records);

        let unique = &overlap.unique_words["Big"];
        assert_eq!(unique.count, 25);
        assert_eq!(unique.examples.len(), 20);
        assert_eq!(unique.examples[0], "uniqueaa");
        let mut sorted = unique.examples.clone();
        sorted.sort();
        assert_eq!(sorted, unique.examples);
    }
}
