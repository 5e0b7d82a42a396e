//! Append-only feedback log of low-confidence requests.
//!
//! One line per entry, `"<raw_text> | <confidence>\n"`. Neither `|` nor
//! newlines in the raw text are escaped, so inputs containing them will not
//! parse back cleanly. The file grows without bound; rotation is left to the
//! operator.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use thiserror::Error;

#[derive(Debug, Error)]
#[error("appending to feedback log {path:?}: {source}")]
pub struct FeedbackError {
    pub path: PathBuf,
    pub source: std::io::Error,
}

/// Render one log line.
pub fn format_entry(text: &str, confidence: f32) -> String {
    format!("{text} | {confidence}\n")
}

/// Feedback log writer.
///
/// Each append opens the file, writes the whole line, flushes and syncs, then
/// closes, all under one lock. Share a single instance between threads so the
/// lock covers every writer in the process.
#[derive(Debug)]
pub struct FeedbackLog {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FeedbackLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Durably append one entry.
    pub fn append(&self, text: &str, confidence: f32) -> Result<(), FeedbackError> {
        let line = format_entry(text, confidence);
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.write_line(&line).map_err(|source| FeedbackError {
            path: self.path.clone(),
            source,
        })
    }

    fn write_line(&self, line: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        file.flush()?;
        file.sync_data()
    }
}
