//! Corpus Analyzer CLI
//!
//! Batch analysis for a directory of Project Gutenberg plain-text files:
//! boilerplate stripping, chapter segmentation, sentiment, style and
//! readability metrics, word frequencies, and vocabulary overlap, written
//! out as JSON for visualization.
//!
//! ## Quick Start
//!
//! ```bash
//! # Full pipeline: preprocess, analyze, write JSON reports
//! ./corpus-analyzer run --input-dir ./texts --prefix Nietzsche_
//!
//! # Preprocess only (strip boilerplate, segment chapters, write cleaned copies)
//! ./corpus-analyzer preprocess --input-dir ./texts
//!
//! # Sentiment analysis only, printed to the terminal
//! ./corpus-analyzer sentiment --input-dir ./texts
//!
//! # Style metrics comparison only
//! ./corpus-analyzer style --input-dir ./texts
//!
//! # Pre-fetch the sentiment lexicon
//! ./corpus-analyzer fetch-data
//! ```

mod analysis;
mod config;
mod corpus;
mod report;
mod resources;
mod text;
mod vader;

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use indexmap::IndexMap;

use analysis::{SentimentReport, StyleReport};
use config::AnalysisConfig;
use corpus::{load_corpus, TextRecord};
use report::{CombinedReport, TextAnalysis};
use vader::SentimentIntensityAnalyzer;

#[derive(Parser)]
#[command(name = "corpus-analyzer")]
#[command(about = "Text analysis pipeline for Project Gutenberg corpora")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full analysis pipeline and write JSON reports
    ///
    /// Preprocesses every matching text, runs all analyses, and saves
    /// analysis_results.json plus analysis_summary.json.
    Run {
        /// Directory containing the input .txt files
        #[arg(short, long, default_value = ".")]
        input_dir: PathBuf,

        /// Directory for the JSON reports
        #[arg(short, long, default_value = "analysis/output")]
        output_dir: PathBuf,

        /// Directory for cleaned copies and downloaded data
        #[arg(short, long, default_value = "analysis/data")]
        data_dir: PathBuf,

        /// File-name prefix input files must carry (empty matches any .txt)
        #[arg(short, long, default_value = "")]
        prefix: String,

        /// Subtitle fragment to delete from derived titles (repeatable)
        #[arg(long = "strip-subtitle")]
        strip_subtitle: Vec<String>,

        /// Words kept in each per-text frequency table
        #[arg(long, default_value = "100")]
        top_words: usize,

        /// Distinctive terms reported per text
        #[arg(long, default_value = "20")]
        distinctive: usize,
    },

    /// Strip boilerplate and segment chapters, writing cleaned copies only
    Preprocess {
        /// Directory containing the input .txt files
        #[arg(short, long, default_value = ".")]
        input_dir: PathBuf,

        /// Directory for cleaned copies
        #[arg(short, long, default_value = "analysis/data")]
        data_dir: PathBuf,

        /// File-name prefix input files must carry (empty matches any .txt)
        #[arg(short, long, default_value = "")]
        prefix: String,

        /// Subtitle fragment to delete from derived titles (repeatable)
        #[arg(long = "strip-subtitle")]
        strip_subtitle: Vec<String>,
    },

    /// Sentiment analysis only, printed to the terminal
    Sentiment {
        /// Directory containing the input .txt files
        #[arg(short, long, default_value = ".")]
        input_dir: PathBuf,

        /// Directory for cleaned copies and the sentiment lexicon
        #[arg(short, long, default_value = "analysis/data")]
        data_dir: PathBuf,

        /// File-name prefix input files must carry (empty matches any .txt)
        #[arg(short, long, default_value = "")]
        prefix: String,

        /// Subtitle fragment to delete from derived titles (repeatable)
        #[arg(long = "strip-subtitle")]
        strip_subtitle: Vec<String>,
    },

    /// Style metrics comparison only, printed to the terminal
    Style {
        /// Directory containing the input .txt files
        #[arg(short, long, default_value = ".")]
        input_dir: PathBuf,

        /// Directory for cleaned copies
        #[arg(short, long, default_value = "analysis/data")]
        data_dir: PathBuf,

        /// File-name prefix input files must carry (empty matches any .txt)
        #[arg(short, long, default_value = "")]
        prefix: String,

        /// Subtitle fragment to delete from derived titles (repeatable)
        #[arg(long = "strip-subtitle")]
        strip_subtitle: Vec<String>,

        /// Distinctive terms reported per text
        #[arg(long, default_value = "20")]
        distinctive: usize,
    },

    /// Download the sentiment lexicon into the data directory
    FetchData {
        /// Directory for downloaded data
        #[arg(short, long, default_value = "analysis/data")]
        data_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            input_dir,
            output_dir,
            data_dir,
            prefix,
            strip_subtitle,
            top_words,
            distinctive,
        } => {
            let config = build_config(prefix, strip_subtitle)
                .with_top_words(top_words)
                .with_distinctive_terms(distinctive);
            run_full_analysis(&input_dir, &output_dir, &data_dir, &config)?;
        }

        Commands::Preprocess {
            input_dir,
            data_dir,
            prefix,
            strip_subtitle,
        } => {
            let config = build_config(prefix, strip_subtitle);
            preprocess_corpus(&input_dir, &data_dir, &config)?;
        }

        Commands::Sentiment {
            input_dir,
            data_dir,
            prefix,
            strip_subtitle,
        } => {
            let config = build_config(prefix, strip_subtitle);
            sentiment_analysis(&input_dir, &data_dir, &config)?;
        }

        Commands::Style {
            input_dir,
            data_dir,
            prefix,
            strip_subtitle,
            distinctive,
        } => {
            let config = build_config(prefix, strip_subtitle).with_distinctive_terms(distinctive);
            style_analysis(&input_dir, &data_dir, &config)?;
        }

        Commands::FetchData { data_dir } => {
            let path = resources::ensure_vader_lexicon(&data_dir)?;
            println!("Sentiment lexicon available at {:?}", path);
        }
    }

    Ok(())
}

fn build_config(prefix: String, strip_subtitle: Vec<String>) -> AnalysisConfig {
    AnalysisConfig::default()
        .with_file_prefix(prefix)
        .with_subtitle_suffixes(strip_subtitle)
}

/// Full pipeline: preprocess, every analysis pass, JSON output.
fn run_full_analysis(
    input_dir: &Path,
    output_dir: &Path,
    data_dir: &Path,
    config: &AnalysisConfig,
) -> Result<()> {
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║                       CORPUS ANALYSIS                        ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    // Linguistic resources are ensured up front, never lazily mid-pipeline.
    let analyzer = load_analyzer(data_dir)?;

    // ===== STEP 1: PREPROCESS =====
    eprintln!("[1/5] Preprocessing texts...");
    let records = load_corpus(input_dir, data_dir, config)?;

    // ===== STEP 2: SENTIMENT =====
    eprintln!("\n[2/5] Analyzing sentiment...");
    let sentiments = analyze_sentiments(&analyzer, &records);

    // ===== STEP 3: STYLE =====
    eprintln!("\n[3/5] Calculating style metrics...");
    let styles = analyze_styles(&records, config);

    // ===== STEP 4: WORD FREQUENCIES =====
    eprintln!("\n[4/5] Generating word frequency data...");
    let frequencies: Vec<_> = records
        .iter()
        .map(|r| analysis::word_frequencies(&r.text, config.top_words))
        .collect();

    // ===== STEP 5: VOCABULARY OVERLAP =====
    eprintln!("\n[5/5] Calculating vocabulary overlap...");
    let overlap = analysis::vocabulary_overlap(&records);

    // ===== COMBINE AND SAVE =====
    eprintln!("\nCombining results...");
    let mut texts = IndexMap::new();
    for (((record, sentiment), style), frequency) in records
        .iter()
        .zip(sentiments)
        .zip(styles)
        .zip(frequencies)
    {
        texts.insert(
            record.title.clone(),
            TextAnalysis::new(record, sentiment, style, frequency),
        );
    }
    let combined = CombinedReport::new(texts, overlap);

    let (results_path, summary_path) = combined.save(output_dir)?;
    println!("\nResults saved to {:?}", results_path);
    println!("Summary saved to {:?}", summary_path);

    print_corpus_summary(&combined);

    Ok(())
}

/// Preprocess-only pass: cleaned copies plus a per-text table.
fn preprocess_corpus(input_dir: &Path, data_dir: &Path, config: &AnalysisConfig) -> Result<()> {
    println!("Preprocessing corpus...\n");
    let records = load_corpus(input_dir, data_dir, config)?;

    println!("\n┌─ PREPROCESSED TEXTS ─────────────────────────────────────────────────┐");
    println!(
        "{:35} {:>10} {:>9}  {}",
        "Text", "Words", "Chapters", "Cleaned copy"
    );
    println!("{}", "─".repeat(78));
    for record in &records {
        println!(
            "{:35} {:>10} {:>9}  {}",
            truncate(&record.title, 35),
            record.word_count,
            record.num_chapters(),
            record.clean_path.display()
        );
    }

    let total: usize = records.iter().map(|r| r.word_count).sum();
    println!("\nTotal words: {}", total);

    Ok(())
}

/// Sentiment-only pass, printed per text.
fn sentiment_analysis(input_dir: &Path, data_dir: &Path, config: &AnalysisConfig) -> Result<()> {
    println!("Performing sentiment analysis...\n");
    let analyzer = load_analyzer(data_dir)?;
    let records = load_corpus(input_dir, data_dir, config)?;
    let reports = analyze_sentiments(&analyzer, &records);

    println!("\n┌─ SENTIMENT ANALYSIS ─────────────────────────────────────────────────┐");
    for (record, report) in records.iter().zip(&reports) {
        println!("\n{}:", record.title);
        println!(
            "  Classification: {}",
            report.full_text.classification.as_str().to_uppercase()
        );
        println!("  Compound: {:.3}", report.full_text.compound);
        println!("  Positive: {:.3}", report.full_text.positive);
        println!("  Neutral:  {:.3}", report.full_text.neutral);
        println!("  Negative: {:.3}", report.full_text.negative);

        if report.chapters.len() > 1 {
            let trajectory = &report.sentiment_trajectory;
            let min = trajectory.iter().copied().fold(f64::INFINITY, f64::min);
            let max = trajectory
                .iter()
                .copied()
                .fold(f64::NEG_INFINITY, f64::max);
            println!("  Sentiment trajectory: {:.3} to {:.3}", min, max);
        }
    }

    Ok(())
}

/// Style-only pass: comparison tables across the corpus.
fn style_analysis(input_dir: &Path, data_dir: &Path, config: &AnalysisConfig) -> Result<()> {
    println!("Performing style analysis...\n");
    let records = load_corpus(input_dir, data_dir, config)?;
    let styles = analyze_styles(&records, config);

    println!("\n┌─ STYLE METRICS COMPARISON ───────────────────────────────────────────┐");

    let comparisons: [(&str, fn(&StyleReport) -> f64); 5] = [
        ("Type-Token Ratio", |s| s.lexical_diversity.type_token_ratio),
        ("Avg Sentence Length", |s| {
            s.sentence_metrics.avg_sentence_length
        }),
        ("Avg Word Length", |s| s.word_metrics.avg_word_length),
        ("Flesch Reading Ease", |s| s.readability.flesch_reading_ease),
        ("Flesch-Kincaid Grade", |s| {
            s.readability.flesch_kincaid_grade
        }),
    ];

    for (name, extract) in comparisons {
        println!("\n{}:", name);
        let mut values: Vec<(&str, f64)> = records
            .iter()
            .zip(&styles)
            .map(|(record, style)| (record.title.as_str(), extract(style)))
            .collect();
        values.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        for (title, value) in values {
            println!("  {:40} {:6.2}", truncate(title, 40), value);
        }
    }

    println!("\nDistinctive words:");
    for (record, style) in records.iter().zip(&styles) {
        let terms: Vec<&str> = style
            .distinctive_words
            .iter()
            .take(10)
            .map(|(w, _)| w.as_str())
            .collect();
        println!("  {:40} {}", truncate(&record.title, 40), terms.join(", "));
    }

    Ok(())
}

fn load_analyzer(data_dir: &Path) -> Result<SentimentIntensityAnalyzer> {
    let lexicon_path = resources::ensure_vader_lexicon(data_dir)?;
    SentimentIntensityAnalyzer::from_lexicon_file(&lexicon_path)
}

fn analyze_sentiments(
    analyzer: &SentimentIntensityAnalyzer,
    records: &[TextRecord],
) -> Vec<SentimentReport> {
    records
        .iter()
        .map(|record| {
            eprintln!("Analyzing: {}", record.title);
            let report = analysis::sentiment::analyze_record(analyzer, record);
            eprintln!(
                "  Overall sentiment: {} (compound: {:.3})",
                report.full_text.classification, report.full_text.compound
            );
            eprintln!("  Analyzed {} chapter(s)", report.chapters.len());
            report
        })
        .collect()
}

fn analyze_styles(records: &[TextRecord], config: &AnalysisConfig) -> Vec<StyleReport> {
    let documents: Vec<&str> = records.iter().map(|r| r.text.as_str()).collect();
    let distinctive =
        analysis::distinctive_words(&documents, config.max_vocab_terms, config.distinctive_terms);

    records
        .iter()
        .zip(distinctive)
        .map(|(record, terms)| {
            eprintln!("Analyzing style: {}", record.title);
            analysis::style::analyze_text(&record.text, terms)
        })
        .collect()
}

fn print_corpus_summary(combined: &CombinedReport) {
    println!("\n┌─ CORPUS SUMMARY ─────────────────────────────────────────────────────┐");
    println!(
        "{:35} {:>10} {:>9} {:>10} {:>9}",
        "Text", "Words", "Chapters", "Sentiment", "Compound"
    );
    println!("{}", "─".repeat(78));
    for (title, analysis) in &combined.texts {
        println!(
            "{:35} {:>10} {:>9} {:>10} {:>9.3}",
            truncate(title, 35),
            analysis.basic_info.word_count,
            analysis.basic_info.num_chapters,
            analysis.sentiment.full_text.classification.as_str(),
            analysis.sentiment.full_text.compound,
        );
    }

    let total: usize = combined
        .texts
        .values()
        .map(|t| t.basic_info.word_count)
        .sum();
    println!("\nTotal words analyzed: {}", total);
}

fn truncate(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
