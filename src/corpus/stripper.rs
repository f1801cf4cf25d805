//! Distribution boilerplate removal.
//!
//! Project Gutenberg etexts wrap the work in `*** START OF ... ***` and
//! `*** END OF ... ***` sentinel lines. Everything outside those markers is
//! license plumbing, not prose, and must not reach the metric modules.

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

/// Default header sentinel (Project Gutenberg).
pub const GUTENBERG_START_PATTERN: &str =
    r"\*\*\* START OF (?:THE|THIS) PROJECT GUTENBERG EBOOK.*?\*\*\*";

/// Default footer sentinel (Project Gutenberg).
pub const GUTENBERG_END_PATTERN: &str =
    r"\*\*\* END OF (?:THE|THIS) PROJECT GUTENBERG EBOOK.*?\*\*\*";

static GUTENBERG_START_RE: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(GUTENBERG_START_PATTERN)
        .case_insensitive(true)
        .build()
        .unwrap()
});

static GUTENBERG_END_RE: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(GUTENBERG_END_PATTERN)
        .case_insensitive(true)
        .build()
        .unwrap()
});

/// What the stripper found in the raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripOutcome {
    /// Both sentinels found; returned the text between them.
    Stripped,
    /// Only the header sentinel found; returned everything after it.
    StartOnly,
    /// No usable sentinels; returned the text unchanged.
    NoMarkers,
}

/// Removes distribution header/footer text given start and end sentinel
/// patterns. Both searches are case-insensitive and independent: the end
/// sentinel is looked up from the beginning of the text, not after the start
/// match.
#[derive(Debug, Clone)]
pub struct BoilerplateStripper {
    start: Regex,
    end: Regex,
}

impl BoilerplateStripper {
    /// Build a stripper from custom sentinel patterns.
    pub fn new(start_pattern: &str, end_pattern: &str) -> Result<Self> {
        let start = RegexBuilder::new(start_pattern)
            .case_insensitive(true)
            .build()
            .with_context(|| format!("Failed to compile start marker pattern: {start_pattern}"))?;
        let end = RegexBuilder::new(end_pattern)
            .case_insensitive(true)
            .build()
            .with_context(|| format!("Failed to compile end marker pattern: {end_pattern}"))?;
        Ok(Self { start, end })
    }

    /// Stripper for the standard Project Gutenberg sentinels.
    pub fn gutenberg() -> Self {
        Self {
            start: GUTENBERG_START_RE.clone(),
            end: GUTENBERG_END_RE.clone(),
        }
    }

    /// Strip boilerplate from `raw`. `source` names the input for diagnostics.
    ///
    /// Missing markers degrade gracefully: the text is analyzed as-is and a
    /// warning is emitted. An end sentinel occurring before the start sentinel
    /// resolves to an empty slice.
    pub fn strip(&self, raw: &str, source: &str) -> (String, StripOutcome) {
        let start_match = self.start.find(raw);
        let end_match = self.end.find(raw);

        match (start_match, end_match) {
            (Some(start), Some(end)) => {
                let content = raw.get(start.end()..end.start()).unwrap_or("");
                (content.trim().to_string(), StripOutcome::Stripped)
            }
            (Some(start), None) => {
                (raw[start.end()..].trim().to_string(), StripOutcome::StartOnly)
            }
            _ => {
                tracing::warn!("No distribution markers found in {}", source);
                (raw.to_string(), StripOutcome::NoMarkers)
            }
        }
    }
}

impl Default for BoilerplateStripper {
    fn default() -> Self {
        Self::gutenberg()
    }
}
