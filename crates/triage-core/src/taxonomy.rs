//! Symptom taxonomy and sentence templates.
//!
//! The taxonomy is an ordered mapping from canonical label to the colloquial
//! phrases a patient might use for it. It always carries exactly one
//! [`NON_MEDICAL_LABEL`] whose phrases are off-topic chatter. Templates are
//! sentence frames with a single [`PHRASE_SLOT`].
//!
//! Both are validated on construction; nothing downstream re-checks them.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::builtin;

/// Reserved label for conversational / off-topic input.
pub const NON_MEDICAL_LABEL: &str = "Non-Medical";

/// Substitution slot a template must contain exactly once.
pub const PHRASE_SLOT: &str = "{phrase}";

#[derive(Debug, Error)]
pub enum TaxonomyError {
    #[error("taxonomy has no labels")]
    Empty,

    #[error("taxonomy contains a blank label")]
    BlankLabel,

    #[error("duplicate label: {0:?}")]
    DuplicateLabel(String),

    #[error("label {0:?} has no phrases")]
    EmptyPhraseSet(String),

    #[error("label {0:?} has a blank phrase")]
    BlankPhrase(String),

    #[error("taxonomy has no \"Non-Medical\" label")]
    MissingNonMedical,

    #[error("template set is empty")]
    NoTemplates,

    #[error("template {template:?} must contain {{phrase}} exactly once (found {found})")]
    BadTemplate { template: String, found: usize },

    #[error("reading taxonomy file {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("parsing taxonomy file: {0}")]
    Json(#[from] serde_json::Error),
}

/// One canonical label and its colloquial surface phrases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomClass {
    pub label: String,
    pub phrases: Vec<String>,
}

impl SymptomClass {
    pub fn new(label: impl Into<String>, phrases: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            label: label.into(),
            phrases: phrases.into_iter().map(Into::into).collect(),
        }
    }
}

/// Validated, read-only symptom taxonomy.
#[derive(Debug, Clone)]
pub struct SymptomTaxonomy {
    classes: Vec<SymptomClass>,
}

impl SymptomTaxonomy {
    /// Validate and build a taxonomy. Labels are trimmed of surrounding whitespace.
    pub fn new(classes: Vec<SymptomClass>) -> Result<Self, TaxonomyError> {
        if classes.is_empty() {
            return Err(TaxonomyError::Empty);
        }

        let mut seen = HashSet::with_capacity(classes.len());
        let mut normalized = Vec::with_capacity(classes.len());

        for class in classes {
            let label = class.label.trim().to_string();
            if label.is_empty() {
                return Err(TaxonomyError::BlankLabel);
            }
            if !seen.insert(label.clone()) {
                return Err(TaxonomyError::DuplicateLabel(label));
            }
            if class.phrases.is_empty() {
                return Err(TaxonomyError::EmptyPhraseSet(label));
            }
            if class.phrases.iter().any(|p| p.trim().is_empty()) {
                return Err(TaxonomyError::BlankPhrase(label));
            }
            normalized.push(SymptomClass {
                label,
                phrases: class.phrases,
            });
        }

        if !seen.contains(NON_MEDICAL_LABEL) {
            return Err(TaxonomyError::MissingNonMedical);
        }

        Ok(Self {
            classes: normalized,
        })
    }

    /// The authored taxonomy shipped with the crate.
    pub fn builtin() -> Self {
        let classes = builtin::SYMPTOMS
            .iter()
            .map(|(label, phrases)| SymptomClass::new(*label, phrases.iter().copied()))
            .collect();
        // The built-in table is covered by `builtin_taxonomy_is_valid`.
        Self::new(classes).unwrap_or_else(|e| unreachable!("built-in taxonomy invalid: {e}"))
    }

    pub fn classes(&self) -> &[SymptomClass] {
        &self.classes
    }

    /// Canonical labels in authored order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(|c| c.label.as_str())
    }

    pub fn phrases(&self, label: &str) -> Option<&[String]> {
        self.classes
            .iter()
            .find(|c| c.label == label)
            .map(|c| c.phrases.as_slice())
    }

    pub fn contains(&self, label: &str) -> bool {
        self.classes.iter().any(|c| c.label == label)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Total number of colloquial phrases across all labels.
    pub fn phrase_count(&self) -> usize {
        self.classes.iter().map(|c| c.phrases.len()).sum()
    }
}

/// A sentence frame containing [`PHRASE_SLOT`] exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template(String);

impl Template {
    pub fn parse(raw: impl Into<String>) -> Result<Self, TaxonomyError> {
        let raw = raw.into();
        let found = raw.matches(PHRASE_SLOT).count();
        if found != 1 {
            return Err(TaxonomyError::BadTemplate {
                template: raw,
                found,
            });
        }
        Ok(Self(raw))
    }

    /// Substitute `phrase` into the slot.
    pub fn fill(&self, phrase: &str) -> String {
        self.0.replacen(PHRASE_SLOT, phrase, 1)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validated, non-empty set of templates.
#[derive(Debug, Clone)]
pub struct TemplateSet {
    templates: Vec<Template>,
}

impl TemplateSet {
    pub fn new<I, S>(raw: I) -> Result<Self, TaxonomyError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let templates = raw
            .into_iter()
            .map(Template::parse)
            .collect::<Result<Vec<_>, _>>()?;
        if templates.is_empty() {
            return Err(TaxonomyError::NoTemplates);
        }
        Ok(Self { templates })
    }

    pub fn builtin() -> Self {
        Self::new(builtin::TEMPLATES.iter().copied())
            .unwrap_or_else(|e| unreachable!("built-in templates invalid: {e}"))
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// On-disk taxonomy definition (JSON).
///
/// ```json
/// {"version": "2024-06", "classes": [{"label": "Headache", "phrases": ["head hurts"]}],
///  "templates": ["I have {phrase}"]}
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxonomyFile {
    #[serde(default)]
    pub version: Option<String>,
    pub classes: Vec<SymptomClass>,
    pub templates: Vec<String>,
}

impl TaxonomyFile {
    /// Read, parse, and validate a taxonomy file.
    pub fn load(path: &Path) -> Result<(SymptomTaxonomy, TemplateSet), TaxonomyError> {
        let raw = std::fs::read_to_string(path).map_err(|source| TaxonomyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: TaxonomyFile = serde_json::from_str(&raw)?;
        let version = file.version.clone().unwrap_or_else(|| "unversioned".into());
        let (taxonomy, templates) = file.validate()?;
        info!(
            path = %path.display(),
            %version,
            labels = taxonomy.len(),
            templates = templates.len(),
            "loaded taxonomy file"
        );
        Ok((taxonomy, templates))
    }

    pub fn validate(self) -> Result<(SymptomTaxonomy, TemplateSet), TaxonomyError> {
        let taxonomy = SymptomTaxonomy::new(self.classes)?;
        let templates = TemplateSet::new(self.templates)?;
        Ok((taxonomy, templates))
    }
}
