//! Style metrics: lexical diversity, sentence and word shape, readability,
//! and vocabulary complexity.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::analysis::{mean, std_dev};
use crate::text;

/// Type-token ratio and related vocabulary counts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LexicalDiversity {
    pub type_token_ratio: f64,
    pub unique_words: usize,
    pub total_words: usize,
    /// Words that occur exactly once.
    pub hapax_legomena: usize,
    pub avg_word_frequency: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SentenceMetrics {
    pub sentence_count: usize,
    /// Mean tokens per sentence, punctuation included.
    pub avg_sentence_length: f64,
    pub sentence_length_std: f64,
    pub min_sentence_length: usize,
    pub max_sentence_length: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WordMetrics {
    pub avg_word_length: f64,
    pub word_length_std: f64,
    pub min_word_length: usize,
    pub max_word_length: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReadabilityScores {
    pub flesch_reading_ease: f64,
    pub flesch_kincaid_grade: f64,
    pub gunning_fog: f64,
    pub avg_syllables_per_word: f64,
    pub complex_word_percentage: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VocabularyComplexity {
    /// Share of words with 7+ characters.
    pub long_words_percentage: f64,
    pub avg_word_length: f64,
    pub words_over_10_chars: usize,
    pub words_over_15_chars: usize,
}

/// Style section of a text's report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StyleReport {
    pub lexical_diversity: LexicalDiversity,
    pub sentence_metrics: SentenceMetrics,
    pub word_metrics: WordMetrics,
    pub readability: ReadabilityScores,
    pub vocabulary_complexity: VocabularyComplexity,
    /// TF-IDF terms that set this text apart, highest first.
    pub distinctive_words: Vec<(String, f64)>,
}

pub fn lexical_diversity(text: &str) -> LexicalDiversity {
    let words = text::words(text);
    if words.is_empty() {
        return LexicalDiversity::default();
    }

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for word in &words {
        *counts.entry(word.as_str()).or_insert(0) += 1;
    }
    let unique = counts.len();

    LexicalDiversity {
        type_token_ratio: unique as f64 / words.len() as f64,
        unique_words: unique,
        total_words: words.len(),
        hapax_legomena: counts.values().filter(|&&c| c == 1).count(),
        avg_word_frequency: words.len() as f64 / unique as f64,
    }
}

pub fn sentence_metrics(text: &str) -> SentenceMetrics {
    let sentences = text::split_sentences(text);
    if sentences.is_empty() {
        return SentenceMetrics::default();
    }

    let lengths: Vec<usize> = sentences
        .iter()
        .map(|s| text::sentence_tokens(s).len())
        .collect();
    let as_f64: Vec<f64> = lengths.iter().map(|&l| l as f64).collect();

    SentenceMetrics {
        sentence_count: sentences.len(),
        avg_sentence_length: mean(&as_f64),
        sentence_length_std: std_dev(&as_f64),
        min_sentence_length: lengths.iter().copied().min().unwrap_or(0),
        max_sentence_length: lengths.iter().copied().max().unwrap_or(0),
    }
}

pub fn word_metrics(text: &str) -> WordMetrics {
    let words = text::words(text);
    if words.is_empty() {
        return WordMetrics::default();
    }

    let lengths: Vec<usize> = words.iter().map(|w| text::char_len(w)).collect();
    let as_f64: Vec<f64> = lengths.iter().map(|&l| l as f64).collect();

    WordMetrics {
        avg_word_length: mean(&as_f64),
        word_length_std: std_dev(&as_f64),
        min_word_length: lengths.iter().copied().min().unwrap_or(0),
        max_word_length: lengths.iter().copied().max().unwrap_or(0),
    }
}

pub fn readability(text: &str) -> ReadabilityScores {
    let sentences = text::split_sentences(text);
    let words = text::words(text);
    if sentences.is_empty() || words.is_empty() {
        return ReadabilityScores::default();
    }

    let total_syllables: usize = words.iter().map(|w| text::count_syllables(w)).sum();
    let complex_words = words
        .iter()
        .filter(|w| text::count_syllables(w) >= 3)
        .count();

    let total_words = words.len() as f64;
    let total_sentences = sentences.len() as f64;
    let syllables = total_syllables as f64;
    let complex = complex_words as f64;

    let flesch_reading_ease =
        206.835 - 1.015 * (total_words / total_sentences) - 84.6 * (syllables / total_words);
    let flesch_kincaid_grade =
        0.39 * (total_words / total_sentences) + 11.8 * (syllables / total_words) - 15.59;
    let gunning_fog = 0.4 * ((total_words / total_sentences) + 100.0 * (complex / total_words));

    ReadabilityScores {
        flesch_reading_ease,
        flesch_kincaid_grade,
        gunning_fog,
        avg_syllables_per_word: syllables / total_words,
        complex_word_percentage: (complex / total_words) * 100.0,
    }
}

pub fn vocabulary_complexity(text: &str) -> VocabularyComplexity {
    let words = text::words(text);
    if words.is_empty() {
        return VocabularyComplexity::default();
    }

    let lengths: Vec<usize> = words.iter().map(|w| text::char_len(w)).collect();
    let as_f64: Vec<f64> = lengths.iter().map(|&l| l as f64).collect();
    let long_words = lengths.iter().filter(|&&l| l >= 7).count();

    VocabularyComplexity {
        long_words_percentage: (long_words as f64 / words.len() as f64) * 100.0,
        avg_word_length: mean(&as_f64),
        words_over_10_chars: lengths.iter().filter(|&&l| l >= 10).count(),
        words_over_15_chars: lengths.iter().filter(|&&l| l >= 15).count(),
    }
}

/// All style metrics for one text, with its distinctive terms attached.
pub fn analyze_text(text: &str, distinctive_words: Vec<(String, f64)>) -> StyleReport {
    StyleReport {
        lexical_diversity: lexical_diversity(text),
        sentence_metrics: sentence_metrics(text),
        word_metrics: word_metrics(text),
        readability: readability(text),
        vocabulary_complexity: vocabulary_complexity(text),
        distinctive_words,
    }
}
