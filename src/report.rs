//! Combined analysis report: assembly, JSON output, and the compact summary.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::analysis::{
    Classification, SentimentReport, StyleReport, VocabularyOverlap, WordFrequencyReport,
};
use crate::corpus::TextRecord;

pub const COMBINED_REPORT_FILENAME: &str = "analysis_results.json";
pub const SUMMARY_REPORT_FILENAME: &str = "analysis_summary.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasicInfo {
    pub word_count: usize,
    pub char_count: usize,
    pub num_chapters: usize,
}

/// Everything computed for one text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextAnalysis {
    pub basic_info: BasicInfo,
    pub sentiment: SentimentReport,
    pub style: StyleReport,
    pub word_frequencies: WordFrequencyReport,
}

impl TextAnalysis {
    pub fn new(
        record: &TextRecord,
        sentiment: SentimentReport,
        style: StyleReport,
        word_frequencies: WordFrequencyReport,
    ) -> Self {
        Self {
            basic_info: BasicInfo {
                word_count: record.word_count,
                char_count: record.char_count,
                num_chapters: record.num_chapters(),
            },
            sentiment,
            style,
            word_frequencies,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// RFC 3339 timestamp of the run.
    pub analysis_date: String,
    pub num_texts: usize,
    pub texts: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusWide {
    pub vocabulary_overlap: VocabularyOverlap,
}

/// The full `analysis_results.json` document. Text order follows the input
/// corpus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombinedReport {
    pub metadata: ReportMetadata,
    pub texts: IndexMap<String, TextAnalysis>,
    pub corpus_wide: CorpusWide,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentDigest {
    pub compound: f64,
    pub classification: Classification,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadabilityDigest {
    pub flesch_reading_ease: f64,
    pub flesch_kincaid_grade: f64,
}

/// The compact `analysis_summary.json` document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryReport {
    pub texts: Vec<String>,
    pub total_words: usize,
    pub analysis_date: String,
    pub overall_sentiment: IndexMap<String, SentimentDigest>,
    pub readability_comparison: IndexMap<String, ReadabilityDigest>,
}

impl CombinedReport {
    pub fn new(texts: IndexMap<String, TextAnalysis>, vocabulary_overlap: VocabularyOverlap) -> Self {
        let metadata = ReportMetadata {
            analysis_date: Utc::now().to_rfc3339(),
            num_texts: texts.len(),
            texts: texts.keys().cloned().collect(),
        };
        Self {
            metadata,
            texts,
            corpus_wide: CorpusWide { vocabulary_overlap },
        }
    }

    /// Derive the compact summary from the combined report.
    pub fn summary(&self) -> SummaryReport {
        SummaryReport {
            texts: self.metadata.texts.clone(),
            total_words: self.texts.values().map(|t| t.basic_info.word_count).sum(),
            analysis_date: self.metadata.analysis_date.clone(),
            overall_sentiment: self
                .texts
                .iter()
                .map(|(title, t)| {
                    (
                        title.clone(),
                        SentimentDigest {
                            compound: t.sentiment.full_text.compound,
                            classification: t.sentiment.full_text.classification,
                        },
                    )
                })
                .collect(),
            readability_comparison: self
                .texts
                .iter()
                .map(|(title, t)| {
                    (
                        title.clone(),
                        ReadabilityDigest {
                            flesch_reading_ease: t.style.readability.flesch_reading_ease,
                            flesch_kincaid_grade: t.style.readability.flesch_kincaid_grade,
                        },
                    )
                })
                .collect(),
        }
    }

    /// Write both report files into `output_dir` and return their paths.
    pub fn save(&self, output_dir: &Path) -> Result<(PathBuf, PathBuf)> {
        fs::create_dir_all(output_dir)
            .with_context(|| format!("Failed to create output directory {:?}", output_dir))?;

        let results_path = output_dir.join(COMBINED_REPORT_FILENAME);
        let json =
            serde_json::to_string_pretty(self).context("Failed to serialize combined report")?;
        fs::write(&results_path, json)
            .with_context(|| format!("Failed to write {:?}", results_path))?;

        let summary_path = output_dir.join(SUMMARY_REPORT_FILENAME);
        let json = serde_json::to_string_pretty(&self.summary())
            .context("Failed to serialize summary report")?;
        fs::write(&summary_path, json)
            .with_context(|| format!("Failed to write {:?}", summary_path))?;

        Ok((results_path, summary_path))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read combined report: {:?}", path))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse combined report: {:?}", path))
    }
}
