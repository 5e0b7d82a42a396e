use std::path::PathBuf;

use thiserror::Error;
use triage_core::TaxonomyError;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("sample count must be positive")]
    InvalidSampleCount,

    #[error("probability {name} must be within [0, 1], got {value}")]
    InvalidProbability { name: &'static str, value: f64 },

    #[error("train fraction must be within [0, 1], got {0}")]
    InvalidSplit(f64),

    #[error("unsupported corpus format: {0:?} (expected .csv or .parquet)")]
    UnsupportedFormat(PathBuf),

    #[error("taxonomy error: {0}")]
    Taxonomy(#[from] TaxonomyError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[error("parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
