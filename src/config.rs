//! Pipeline configuration.

use crate::corpus::stripper::{GUTENBERG_END_PATTERN, GUTENBERG_START_PATTERN};

/// Knobs for one analysis run.
///
/// Defaults match the conventions of a Project Gutenberg corpus: Gutenberg
/// sentinel markers, three-match chapter confidence, top 100 frequency words,
/// and 20 distinctive terms per text.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// File-name prefix input files must carry (empty matches any `.txt`).
    pub file_prefix: String,

    /// Subtitle fragments deleted from derived titles (e.g. a series tagline
    /// baked into the file name).
    pub subtitle_suffixes: Vec<String>,

    /// Regex locating the distribution header sentinel.
    pub start_marker: String,

    /// Regex locating the distribution footer sentinel.
    pub end_marker: String,

    /// Minimum matches before a segmentation rule is trusted.
    pub min_chapter_matches: usize,

    /// Words kept in each per-text frequency table.
    pub top_words: usize,

    /// Distinctive terms reported per text.
    pub distinctive_terms: usize,

    /// Vocabulary cap for the distinctive-term model.
    pub max_vocab_terms: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            file_prefix: String::new(),
            subtitle_suffixes: Vec::new(),
            start_marker: GUTENBERG_START_PATTERN.to_string(),
            end_marker: GUTENBERG_END_PATTERN.to_string(),
            min_chapter_matches: 3,
            top_words: 100,
            distinctive_terms: 20,
            max_vocab_terms: 1000,
        }
    }
}

impl AnalysisConfig {
    pub fn with_file_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.file_prefix = prefix.into();
        self
    }

    pub fn with_subtitle_suffixes(mut self, suffixes: Vec<String>) -> Self {
        self.subtitle_suffixes = suffixes;
        self
    }

    pub fn with_min_chapter_matches(mut self, min_matches: usize) -> Self {
        self.min_chapter_matches = min_matches;
        self
    }

    pub fn with_top_words(mut self, top_words: usize) -> Self {
        self.top_words = top_words;
        self
    }

    pub fn with_distinctive_terms(mut self, terms: usize) -> Self {
        self.distinctive_terms = terms;
        self
    }
}
