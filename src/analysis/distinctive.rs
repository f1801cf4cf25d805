//! Distinctive terms per text, via corpus TF-IDF.
//!
//! Terms are 3+ letter words with stop words removed. Document frequency is
//! smoothed (`idf = ln((1 + n) / (1 + df)) + 1`) and each document row is
//! L2-normalized, so scores are comparable across texts. When a document has
//! fewer scoring terms than requested, the remainder is padded with
//! zero-score vocabulary entries.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::text;

static TFIDF_TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[a-zA-Z]{3,}\b").unwrap());

/// Fitted TF-IDF weights for a corpus of documents.
#[derive(Debug, Clone)]
pub struct TfidfIndex {
    /// Selected terms, alphabetical.
    vocabulary: Vec<String>,
    /// One L2-normalized weight row per document, aligned to `vocabulary`.
    weights: Vec<Vec<f64>>,
}

impl TfidfIndex {
    /// Fit the index over `documents`, keeping at most `max_terms` terms by
    /// corpus frequency (ties broken alphabetically).
    pub fn fit(documents: &[&str], max_terms: usize) -> Self {
        let token_lists: Vec<Vec<String>> = documents.iter().map(|d| tokenize(d)).collect();

        let mut corpus_counts: HashMap<String, usize> = HashMap::new();
        let mut doc_freq: HashMap<String, usize> = HashMap::new();
        for tokens in &token_lists {
            let mut seen: HashSet<&str> = HashSet::new();
            for token in tokens {
                *corpus_counts.entry(token.clone()).or_insert(0) += 1;
                if seen.insert(token) {
                    *doc_freq.entry(token.clone()).or_insert(0) += 1;
                }
            }
        }

        let mut by_frequency: Vec<(String, usize)> = corpus_counts.into_iter().collect();
        by_frequency.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        by_frequency.truncate(max_terms);

        let mut vocabulary: Vec<String> = by_frequency.into_iter().map(|(t, _)| t).collect();
        vocabulary.sort();

        let term_index: HashMap<&str, usize> = vocabulary
            .iter()
            .enumerate()
            .map(|(i, t)| (t.as_str(), i))
            .collect();

        let n = documents.len() as f64;
        let idf: Vec<f64> = vocabulary
            .iter()
            .map(|term| {
                let df = doc_freq.get(term).copied().unwrap_or(0) as f64;
                ((1.0 + n) / (1.0 + df)).ln() + 1.0
            })
            .collect();

        let weights = token_lists
            .iter()
            .map(|tokens| {
                let mut row = vec![0.0; vocabulary.len()];
                for token in tokens {
                    if let Some(&i) = term_index.get(token.as_str()) {
                        row[i] += 1.0;
                    }
                }
                for (i, value) in row.iter_mut().enumerate() {
                    *value *= idf[i];
                }
                let norm = row.iter().map(|v| v * v).sum::<f64>().sqrt();
                if norm > 0.0 {
                    for value in row.iter_mut() {
                        *value /= norm;
                    }
                }
                row
            })
            .collect();

        Self {
            vocabulary,
            weights,
        }
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn num_documents(&self) -> usize {
        self.weights.len()
    }

    /// Top `top_n` terms for one document, highest weight first. Weight ties
    /// resolve to the alphabetically earlier term.
    pub fn top_terms(&self, doc_idx: usize, top_n: usize) -> Vec<(String, f64)> {
        let Some(row) = self.weights.get(doc_idx) else {
            return Vec::new();
        };

        let mut order: Vec<usize> = (0..row.len()).collect();
        order.sort_by(|&a, &b| {
            row[b]
                .partial_cmp(&row[a])
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.cmp(&b))
        });
        order.truncate(top_n);

        order
            .into_iter()
            .map(|i| (self.vocabulary[i].clone(), row[i]))
            .collect()
    }
}

/// Distinctive terms for every document in one pass.
pub fn distinctive_words(
    documents: &[&str],
    max_terms: usize,
    top_n: usize,
) -> Vec<Vec<(String, f64)>> {
    let index = TfidfIndex::fit(documents, max_terms);
    (0..documents.len())
        .map(|i| index.top_terms(i, top_n))
        .collect()
}

fn tokenize(document: &str) -> Vec<String> {
    let lowered = document.to_lowercase();
    TFIDF_TOKEN_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .filter(|t| !text::is_stop_word(t))
        .collect()
}
