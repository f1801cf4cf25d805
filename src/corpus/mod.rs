//! Corpus ingestion: discovery, boilerplate stripping, chapter segmentation.
//!
//! ```rust,ignore
//! use corpus_analyzer::config::AnalysisConfig;
//! use corpus_analyzer::corpus::load_corpus;
//!
//! let config = AnalysisConfig::default().with_file_prefix("Nietzsche_");
//! let records = load_corpus(&input_dir, &data_dir, &config)?;
//! ```

pub mod loader;
pub mod segmenter;
pub mod stripper;

pub use loader::{discover_input_files, load_corpus, title_from_filename, TextRecord};
pub use segmenter::{Chapter, ChapterSegmenter, FALLBACK_LABEL};
pub use stripper::{BoilerplateStripper, StripOutcome};
