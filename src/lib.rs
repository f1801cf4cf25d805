//! Corpus analyzer library
//!
//! Turns a directory of Project Gutenberg plain-text files into a set of
//! JSON reports: per-text sentiment, style and readability metrics, word
//! frequencies, and corpus-wide vocabulary comparisons.

pub mod analysis;
pub mod config;
pub mod corpus;
pub mod report;
pub mod resources;
pub mod text;
pub mod vader;
