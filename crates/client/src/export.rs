//! Client-side download of export payloads.

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDate;

/// An export payload ready to be written to disk.
#[derive(Debug, Clone)]
pub struct ExportFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl ExportFile {
    /// Wrap a CSV payload under a dated name, e.g. `leads-2026-08-06.csv`.
    pub fn csv(prefix: &str, date: NaiveDate, bytes: Vec<u8>) -> Self {
        Self {
            filename: format!("{prefix}-{}.csv", date.format("%Y-%m-%d")),
            bytes,
        }
    }

    /// Write the payload into `dir` and return the full path.
    pub fn save_to(&self, dir: &Path) -> anyhow::Result<PathBuf> {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create export directory {dir:?}"))?;
        let path = dir.join(&self.filename);
        std::fs::write(&path, &self.bytes)
            .with_context(|| format!("failed to write export to {path:?}"))?;
        Ok(path)
    }
}
