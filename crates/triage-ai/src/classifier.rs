//! Classifier boundary: text in, per-class probabilities out.
//!
//! The gating engine treats the model as opaque. Anything that can map a text
//! (truncated to a caller-supplied maximum token length) to a probability
//! vector indexed by class can sit behind [`Classifier`].

use std::path::PathBuf;

use thiserror::Error;

/// Tolerance for a probability vector's sum to count as 1.0.
pub const PROBABILITY_SUM_TOLERANCE: f32 = 1e-4;

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("model artifact not found: {0}")]
    MissingArtifact(PathBuf),

    #[error("tokenizer error: {0}")]
    Tokenizer(String),

    #[error("inference error: {0}")]
    Inference(String),

    #[error("unexpected output shape: {0:?}")]
    OutputShape(Vec<i64>),

    #[error("classifier returned no usable probabilities")]
    EmptyDistribution,
}

/// A text classifier producing a probability distribution over class indices.
///
/// Implementations are shared read-only across concurrent requests.
pub trait Classifier: Send + Sync {
    /// Classify `text`, truncated to at most `max_length` tokens.
    fn classify(&self, text: &str, max_length: usize) -> Result<Vec<f32>, ClassifierError>;
}

/// Numerically stable softmax.
pub fn softmax(logits: &[f32]) -> Vec<f32> {
    let max = logits.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = logits.iter().map(|&x| (x - max).exp()).collect();
    let sum: f32 = exps.iter().sum();
    if sum > 0.0 {
        exps.into_iter().map(|e| e / sum).collect()
    } else {
        exps
    }
}

/// Index and value of the largest probability.
///
/// Exact ties resolve to the lowest index. NaN entries are skipped; `None`
/// means there was nothing to pick from.
pub fn argmax(probs: &[f32]) -> Option<(usize, f32)> {
    let mut best: Option<(usize, f32)> = None;
    for (i, &p) in probs.iter().enumerate() {
        if p.is_nan() {
            continue;
        }
        match best {
            Some((_, b)) if p <= b => {}
            _ => best = Some((i, p)),
        }
    }
    best
}

/// Whether `probs` sums to 1.0 within [`PROBABILITY_SUM_TOLERANCE`].
pub fn is_normalized(probs: &[f32]) -> bool {
    let sum: f32 = probs.iter().sum();
    (sum - 1.0).abs() <= PROBABILITY_SUM_TOLERANCE
}
