//! Downloaded analysis resources.
//!
//! The sentiment lexicon is fetched once into the data directory and reused
//! on every later run.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use sha2::{Digest, Sha256};
use tracing::{debug, info};

/// Canonical VADER lexicon location.
pub const VADER_LEXICON_URL: &str =
    "https://raw.githubusercontent.com/cjhutto/vaderSentiment/master/vaderSentiment/vader_lexicon.txt";

pub const VADER_LEXICON_FILENAME: &str = "vader_lexicon.txt";

/// Return the path to the sentiment lexicon, downloading it into `data_dir`
/// if it is not already present.
pub fn ensure_vader_lexicon(data_dir: &Path) -> Result<PathBuf> {
    let path = data_dir.join(VADER_LEXICON_FILENAME);
    if path.exists() {
        debug!("Sentiment lexicon already present at {:?}", path);
        return Ok(path);
    }

    fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory {:?}", data_dir))?;

    info!("Downloading sentiment lexicon from {}", VADER_LEXICON_URL);
    let response = reqwest::blocking::get(VADER_LEXICON_URL)
        .context("Failed to request sentiment lexicon")?
        .error_for_status()
        .context("Sentiment lexicon request was rejected")?;
    let body = response
        .text()
        .context("Failed to read sentiment lexicon response body")?;

    // A well-formed lexicon is tab-separated.
    if !body.contains('\t') {
        bail!("Downloaded sentiment lexicon does not look tab-separated");
    }

    fs::write(&path, &body)
        .with_context(|| format!("Failed to write sentiment lexicon to {:?}", path))?;

    let mut hasher = Sha256::new();
    hasher.update(body.as_bytes());
    let digest = format!("{:x}", hasher.finalize())[..16].to_string();
    info!(
        "Saved sentiment lexicon ({} bytes, sha256 {}...) to {:?}",
        body.len(),
        digest,
        path
    );

    Ok(path)
}
