//! Bidirectional class-index ↔ canonical-label map.
//!
//! Fixed when the corpus is built and persisted next to the model as a flat
//! JSON object with string-encoded integer keys (`{"0": "Abdominal Pain", ...}`).
//! JSON object keys are always strings, so every key goes through
//! [`parse_index_key`] before the map is usable; integer lookups against the
//! raw string-keyed object never happen.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::taxonomy::SymptomTaxonomy;

#[derive(Debug, Error)]
pub enum LabelMapError {
    #[error("label map key {0:?} is not a non-negative integer")]
    InvalidKey(String),

    #[error("label map is empty")]
    Empty,

    #[error("label map indices are not contiguous from 0: missing index {0}")]
    MissingIndex(usize),

    #[error("label {0:?} appears under more than one index")]
    DuplicateLabel(String),

    #[error("label {0:?} is not in the taxonomy")]
    UnknownLabel(String),

    #[error("taxonomy label {0:?} has no index")]
    UnmappedLabel(String),

    #[error("label map file not found: {0}")]
    NotFound(PathBuf),

    #[error("label map I/O: {0}")]
    Io(#[from] std::io::Error),

    #[error("label map JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Coerce one string-encoded JSON key to a class index.
///
/// Leading/trailing whitespace, signs, and non-decimal forms are rejected so
/// that `"01"`-style aliases cannot silently collide with `"1"`.
pub fn parse_index_key(key: &str) -> Result<usize, LabelMapError> {
    let canonical = !key.is_empty()
        && key.bytes().all(|b| b.is_ascii_digit())
        && (key == "0" || !key.starts_with('0'));
    if !canonical {
        return Err(LabelMapError::InvalidKey(key.to_string()));
    }
    key.parse()
        .map_err(|_| LabelMapError::InvalidKey(key.to_string()))
}

/// Class index ↔ canonical label, indices exactly `0..len`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelIndexMap {
    labels: Vec<String>,
    index: HashMap<String, usize>,
}

impl LabelIndexMap {
    /// Build from an ordered label list; position is the class index.
    pub fn from_labels<I, S>(labels: I) -> Result<Self, LabelMapError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.is_empty() {
            return Err(LabelMapError::Empty);
        }
        let mut index = HashMap::with_capacity(labels.len());
        for (i, label) in labels.iter().enumerate() {
            if index.insert(label.clone(), i).is_some() {
                return Err(LabelMapError::DuplicateLabel(label.clone()));
            }
        }
        Ok(Self { labels, index })
    }

    /// Assign indices in ascending lexicographic label order.
    pub fn from_taxonomy(taxonomy: &SymptomTaxonomy) -> Self {
        let mut labels: Vec<&str> = taxonomy.labels().collect();
        labels.sort_unstable();
        let labels: Vec<String> = labels.into_iter().map(str::to_string).collect();
        let index = labels
            .iter()
            .enumerate()
            .map(|(i, l)| (l.clone(), i))
            .collect();
        Self { labels, index }
    }

    /// Parse the persisted flat JSON object.
    pub fn from_json_str(json: &str) -> Result<Self, LabelMapError> {
        let raw: BTreeMap<String, String> = serde_json::from_str(json)?;

        let mut by_index = BTreeMap::new();
        for (key, label) in raw {
            by_index.insert(parse_index_key(&key)?, label);
        }

        for (expected, &actual) in by_index.keys().enumerate() {
            if expected != actual {
                return Err(LabelMapError::MissingIndex(expected));
            }
        }

        Self::from_labels(by_index.into_values())
    }

    /// Load and parse a label map file.
    pub fn load(path: &Path) -> Result<Self, LabelMapError> {
        if !path.exists() {
            return Err(LabelMapError::NotFound(path.to_path_buf()));
        }
        let json = std::fs::read_to_string(path)?;
        let map = Self::from_json_str(&json)?;
        info!(path = %path.display(), classes = map.len(), "loaded label map");
        Ok(map)
    }

    /// Serialize with string-encoded integer keys.
    pub fn to_json_string(&self) -> Result<String, LabelMapError> {
        // serde_json writes integer map keys as quoted strings.
        let map: BTreeMap<usize, &str> = self
            .labels
            .iter()
            .enumerate()
            .map(|(i, l)| (i, l.as_str()))
            .collect();
        Ok(serde_json::to_string_pretty(&map)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), LabelMapError> {
        std::fs::write(path, self.to_json_string()?)?;
        info!(path = %path.display(), classes = self.len(), "wrote label map");
        Ok(())
    }

    /// Check the map's domain is exactly the taxonomy's label set.
    pub fn validate_against(&self, taxonomy: &SymptomTaxonomy) -> Result<(), LabelMapError> {
        if let Some(label) = self.labels.iter().find(|l| !taxonomy.contains(l)) {
            return Err(LabelMapError::UnknownLabel(label.clone()));
        }
        if let Some(label) = taxonomy.labels().find(|l| !self.index.contains_key(*l)) {
            return Err(LabelMapError::UnmappedLabel(label.to_string()));
        }
        Ok(())
    }

    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    /// Labels ordered by class index.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
