//! Corpus loading.
//!
//! Discovers input files by naming convention, strips distribution
//! boilerplate, segments chapters, writes cleaned text files, and produces
//! one normalized [`TextRecord`] per input.
//!
//! ```rust,ignore
//! let config = AnalysisConfig::default().with_file_prefix("Nietzsche_");
//! let records = load_corpus(Path::new("."), Path::new("analysis/data"), &config)?;
//! ```

use anyhow::{bail, Context, Result};
use ignore::WalkBuilder;
use std::fs;
use std::path::{Path, PathBuf};

use super::segmenter::{Chapter, ChapterSegmenter};
use super::stripper::BoilerplateStripper;
use crate::config::AnalysisConfig;

/// One normalized input text.
///
/// Created once per source file and immutable afterwards; every metric
/// module reads from it independently.
#[derive(Debug, Clone)]
pub struct TextRecord {
    /// Display title derived from the file name.
    pub title: String,
    /// Source file name, kept for diagnostics.
    pub source_filename: String,
    /// Where the cleaned text was written.
    pub clean_path: PathBuf,
    /// Cleaned full text.
    pub text: String,
    /// Ordered chapters; concatenated in order they equal `text`.
    pub chapters: Vec<Chapter>,
    /// Whitespace-delimited token count of the cleaned text.
    pub word_count: usize,
    /// Character count (Unicode scalar values, not bytes).
    pub char_count: usize,
}

impl TextRecord {
    pub fn num_chapters(&self) -> usize {
        self.chapters.len()
    }
}

/// Derive a display title from a file name by deleting the configured
/// prefix, the `.txt` extension, and any configured subtitle fragment.
pub fn title_from_filename(filename: &str, config: &AnalysisConfig) -> String {
    let mut title = filename.to_string();
    if !config.file_prefix.is_empty() {
        title = title.replace(&config.file_prefix, "");
    }
    title = title.replace(".txt", "");
    for suffix in &config.subtitle_suffixes {
        if !suffix.is_empty() {
            title = title.replace(suffix.as_str(), "");
        }
    }
    title
}

/// Discover input files under `input_dir`: `<prefix>*.txt`, non-recursive,
/// previously written `*_clean.txt` outputs excluded. Paths come back sorted
/// by file name so runs are deterministic.
pub fn discover_input_files(input_dir: &Path, config: &AnalysisConfig) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    let walker = WalkBuilder::new(input_dir).max_depth(Some(1)).build();

    for entry in walker {
        let entry = entry.context("Failed to read directory entry")?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !name.ends_with(".txt") || !name.starts_with(&config.file_prefix) {
            continue;
        }
        if name.ends_with("_clean.txt") {
            tracing::debug!("Skipping previous output file {}", name);
            continue;
        }
        files.push(path.to_path_buf());
    }

    files.sort();
    Ok(files)
}

/// Load every matching text under `input_dir`, writing cleaned copies into
/// `data_dir`.
///
/// Unreadable or non-UTF-8 files are fatal and abort the run; missing
/// boilerplate markers only degrade that text to "analyze everything".
pub fn load_corpus(
    input_dir: &Path,
    data_dir: &Path,
    config: &AnalysisConfig,
) -> Result<Vec<TextRecord>> {
    let files = discover_input_files(input_dir, config)?;
    if files.is_empty() {
        bail!(
            "No input files matching '{}*.txt' found in {}",
            config.file_prefix,
            input_dir.display()
        );
    }

    fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory {:?}", data_dir))?;

    let stripper = BoilerplateStripper::new(&config.start_marker, &config.end_marker)?;
    let segmenter = ChapterSegmenter::new(config.min_chapter_matches);

    let mut records = Vec::with_capacity(files.len());

    for path in &files {
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();
        let title = title_from_filename(&filename, config);
        eprintln!("Processing: {}", title);

        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {:?}", path))?;

        let (text, outcome) = stripper.strip(&raw, &filename);
        tracing::debug!("{}: strip outcome {:?}", filename, outcome);

        let chapters = segmenter.segment(&text);

        let clean_path = data_dir.join(format!("{}_clean.txt", title.replace(' ', "_")));
        fs::write(&clean_path, &text)
            .with_context(|| format!("Failed to write cleaned text {:?}", clean_path))?;

        let word_count = text.split_whitespace().count();
        let char_count = text.chars().count();

        eprintln!("  - {} chapter(s) detected", chapters.len());
        eprintln!("  - {} words", word_count);

        records.push(TextRecord {
            title,
            source_filename: filename,
            clean_path,
            text,
            chapters,
            word_count,
            char_count,
        });
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_file(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    fn gutenberg_body(body: &str) -> String {
        format!(
            "License header.\n*** START OF THE PROJECT GUTENBERG EBOOK X ***\n{}\n*** END OF THE PROJECT GUTENBERG EBOOK X ***\nLicense footer.",
            body
        )
    }

    #[test]
    fn test_title_from_filename() {
        let config = AnalysisConfig::default()
            .with_file_prefix("Nietzsche_")
            .with_subtitle_suffixes(vec!["_A Book for All and None".to_string()]);
        assert_eq!(
            title_from_filename("Nietzsche_Thus Spoke Zarathustra_A Book for All and None.txt", &config),
            "Thus Spoke Zarathustra"
        );
        assert_eq!(
            title_from_filename("Nietzsche_Beyond Good and Evil.txt", &config),
            "Beyond Good and Evil"
        );
    }

    #[test]
    fn test_title_without_prefix_config() {
        let config = AnalysisConfig::default();
        assert_eq!(title_from_filename("The Antichrist.txt", &config), "The Antichrist");
    }

    #[test]
    fn test_discover_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "b.txt", "b");
        write_file(dir.path(), "a.txt", "a");
        write_file(dir.path(), "notes.md", "md");
        write_file(dir.path(), "old_clean.txt", "clean output");

        let files = discover_input_files(dir.path(), &AnalysisConfig::default()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_discover_respects_prefix() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "Nietzsche_Ecce Homo.txt", "x");
        write_file(dir.path(), "Unrelated.txt", "y");

        let config = AnalysisConfig::default().with_file_prefix("Nietzsche_");
        let files = discover_input_files(dir.path(), &config).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].to_string_lossy().contains("Ecce Homo"));
    }

    #[test]
    fn test_load_corpus_end_to_end() {
        let input = tempfile::tempdir().unwrap();
        let data = tempfile::tempdir().unwrap();
        let body = "Intro.\nCHAPTER I. One\nFirst chapter text.\nMore text.\nCHAPTER II. Two\nSecond chapter text.\nMore text.\nCHAPTER III. Three\nThird chapter text.\nMore text.";
        write_file(input.path(), "My Book.txt", &gutenberg_body(body));

        let records = load_corpus(input.path(), data.path(), &AnalysisConfig::default()).unwrap();
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.title, "My Book");
        assert_eq!(record.text, body);
        assert_eq!(record.num_chapters(), 3);

        // Chapters reconstruct the cleaned text exactly.
        let rebuilt: String = record.chapters.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(rebuilt, record.text);

        assert_eq!(record.word_count, body.split_whitespace().count());
        assert_eq!(record.char_count, body.chars().count());

        let clean_path = data.path().join("My_Book_clean.txt");
        assert_eq!(record.clean_path, clean_path);
        assert_eq!(fs::read_to_string(clean_path).unwrap(), body);
    }

    #[test]
    fn test_load_corpus_without_markers_keeps_text() {
        let input = tempfile::tempdir().unwrap();
        let data = tempfile::tempdir().unwrap();
        write_file(input.path(), "Plain.txt", "No markers here. Just prose.");

        let records = load_corpus(input.path(), data.path(), &AnalysisConfig::default()).unwrap();
        assert_eq!(records[0].text, "No markers here. Just prose.");
    }

    #[test]
    fn test_load_corpus_empty_dir_is_an_error() {
        let input = tempfile::tempdir().unwrap();
        let data = tempfile::tempdir().unwrap();
        let err = load_corpus(input.path(), data.path(), &AnalysisConfig::default());
        assert!(err.is_err());
    }

    #[test]
    fn test_char_count_is_unicode_scalars() {
        let input = tempfile::tempdir().unwrap();
        let data = tempfile::tempdir().unwrap();
        write_file(input.path(), "Umlauts.txt", "Über Müller.");

        let records = load_corpus(input.path(), data.path(), &AnalysisConfig::default()).unwrap();
        assert_eq!(records[0].char_count, "Über Müller.".chars().count());
    }
}
