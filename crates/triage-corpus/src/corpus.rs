//! In-memory labeled corpus: shuffling, splitting, diagnostics, Arrow export.

use std::collections::BTreeMap;
use std::sync::Arc;

use arrow::array::StringArray;
use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use triage_core::corpus::example_schema;

use crate::CorpusError;

/// One `(text, label)` training row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntheticExample {
    pub text: String,
    pub label: String,
}

impl SyntheticExample {
    pub fn new(text: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
        }
    }
}

/// Labeled rows plus the full label set they were drawn from.
///
/// The label set is kept so diagnostics can report labels that received zero
/// samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    examples: Vec<SyntheticExample>,
    labels: Vec<String>,
}

impl Corpus {
    pub fn new(examples: Vec<SyntheticExample>, labels: Vec<String>) -> Self {
        Self { examples, labels }
    }

    pub fn examples(&self) -> &[SyntheticExample] {
        &self.examples
    }

    pub fn into_examples(self) -> Vec<SyntheticExample> {
        self.examples
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    /// Fisher–Yates shuffle of row order.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.examples.shuffle(rng);
    }

    /// Shuffle, then split into `(train, validation)`.
    ///
    /// The train side gets `round(len * train_fraction)` rows.
    pub fn split<R: Rng + ?Sized>(
        mut self,
        train_fraction: f64,
        rng: &mut R,
    ) -> Result<(Corpus, Corpus), CorpusError> {
        if !(0.0..=1.0).contains(&train_fraction) {
            return Err(CorpusError::InvalidSplit(train_fraction));
        }
        self.shuffle(rng);

        let total = self.examples.len();
        let split_at = ((total as f64) * train_fraction).round() as usize;
        let val = self.examples.split_off(split_at.min(total));

        tracing::debug!(
            train = self.examples.len(),
            validation = val.len(),
            "split corpus"
        );

        let labels = self.labels.clone();
        Ok((self, Corpus::new(val, labels)))
    }

    /// Per-label row counts, covering every label in the set (zeros included).
    pub fn label_distribution(&self) -> BTreeMap<String, usize> {
        let mut counts: BTreeMap<String, usize> =
            self.labels.iter().map(|l| (l.clone(), 0)).collect();
        for ex in &self.examples {
            *counts.entry(ex.label.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Materialise as a two-column `text`/`label` RecordBatch.
    pub fn to_record_batch(&self) -> Result<RecordBatch, ArrowError> {
        let texts = StringArray::from_iter_values(self.examples.iter().map(|e| e.text.as_str()));
        let labels = StringArray::from_iter_values(self.examples.iter().map(|e| e.label.as_str()));
        RecordBatch::try_new(
            Arc::new(example_schema()),
            vec![Arc::new(texts), Arc::new(labels)],
        )
    }
}
