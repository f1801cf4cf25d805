//! Sentence-level sentiment, aggregated per text and per chapter.

use serde::{Deserialize, Serialize};

use crate::analysis::{mean, std_dev};
use crate::corpus::TextRecord;
use crate::text;
use crate::vader::{PolarityScores, SentimentIntensityAnalyzer};

/// Sentiment label derived from a compound score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Positive,
    #[default]
    Neutral,
    Negative,
}

impl Classification {
    /// Standard VADER thresholds: +-0.05 on the compound score.
    pub fn from_compound(compound: f64) -> Self {
        if compound >= 0.05 {
            Classification::Positive
        } else if compound <= -0.05 {
            Classification::Negative
        } else {
            Classification::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Positive => "positive",
            Classification::Neutral => "neutral",
            Classification::Negative => "negative",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregated sentence scores for one span of text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentSummary {
    /// Mean sentence compound score.
    pub compound: f64,
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
    pub sentence_count: usize,
    /// Spread of sentence compounds across the span.
    pub compound_std: f64,
    /// (min, max) sentence compound.
    pub sentiment_range: (f64, f64),
    pub classification: Classification,
}

impl Default for SentimentSummary {
    fn default() -> Self {
        Self {
            compound: 0.0,
            positive: 0.0,
            neutral: 0.0,
            negative: 0.0,
            sentence_count: 0,
            compound_std: 0.0,
            sentiment_range: (0.0, 0.0),
            classification: Classification::Neutral,
        }
    }
}

/// One chapter's sentiment, labelled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChapterSentiment {
    pub chapter: String,
    #[serde(flatten)]
    pub summary: SentimentSummary,
}

/// Sentiment section of a text's report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentReport {
    pub full_text: SentimentSummary,
    pub chapters: Vec<ChapterSentiment>,
    /// Chapter compound scores in reading order.
    pub sentiment_trajectory: Vec<f64>,
}

/// Score every sentence in `text` and aggregate.
pub fn summarize(analyzer: &SentimentIntensityAnalyzer, text: &str) -> SentimentSummary {
    let sentences = text::split_sentences(text);
    if sentences.is_empty() {
        return SentimentSummary::default();
    }

    let scores: Vec<PolarityScores> = sentences
        .iter()
        .map(|s| analyzer.polarity_scores(s))
        .collect();
    let compounds: Vec<f64> = scores.iter().map(|s| s.compound).collect();

    let compound = mean(&compounds);
    let min = compounds.iter().copied().fold(f64::INFINITY, f64::min);
    let max = compounds.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    SentimentSummary {
        compound,
        positive: mean(&scores.iter().map(|s| s.positive).collect::<Vec<_>>()),
        neutral: mean(&scores.iter().map(|s| s.neutral).collect::<Vec<_>>()),
        negative: mean(&scores.iter().map(|s| s.negative).collect::<Vec<_>>()),
        sentence_count: sentences.len(),
        compound_std: std_dev(&compounds),
        sentiment_range: (min, max),
        classification: Classification::from_compound(compound),
    }
}

/// Full-text and per-chapter sentiment for one text.
pub fn analyze_record(
    analyzer: &SentimentIntensityAnalyzer,
    record: &TextRecord,
) -> SentimentReport {
    let full_text = summarize(analyzer, &record.text);

    let chapters: Vec<ChapterSentiment> = record
        .chapters
        .iter()
        .map(|ch| ChapterSentiment {
            chapter: ch.label.clone(),
            summary: summarize(analyzer, &ch.text),
        })
        .collect();

    let sentiment_trajectory = chapters.iter().map(|c| c.summary.compound).collect();

    SentimentReport {
        full_text,
        chapters,
        sentiment_trajectory,
    }
}
