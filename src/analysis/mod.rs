//! Per-text and corpus-wide analysis passes.
//!
//! Each submodule produces one serializable report section:
//! - [`sentiment`]: lexicon-based polarity, per text and per chapter
//! - [`style`]: lexical diversity, sentence/word shape, readability
//! - [`distinctive`]: TF-IDF terms that set one text apart from the corpus
//! - [`frequency`]: raw content-word counts
//! - [`overlap`]: shared vocabulary between texts

pub mod distinctive;
pub mod frequency;
pub mod overlap;
pub mod sentiment;
pub mod style;

pub use distinctive::{distinctive_words, TfidfIndex};
pub use frequency::{word_frequencies, WordFrequencyReport};
pub use overlap::{vocabulary_overlap, UniqueWords, VocabularyOverlap};
pub use sentiment::{ChapterSentiment, Classification, SentimentReport, SentimentSummary};
pub use style::{
    LexicalDiversity, ReadabilityScores, SentenceMetrics, StyleReport, VocabularyComplexity,
    WordMetrics,
};

/// Arithmetic mean, 0.0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation, 0.0 for an empty slice.
pub fn std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[2.0]), 2.0);
        assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
    }

    #[test]
    fn test_std_dev() {
        assert_eq!(std_dev(&[]), 0.0);
        assert_eq!(std_dev(&[5.0]), 0.0);
        // Population std dev of [2, 4, 4, 4, 5, 5, 7, 9] is exactly 2.
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((std_dev(&values) - 2.0).abs() < 1e-12);
    }
}
