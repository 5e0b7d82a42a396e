//! Relevance gating: turn a class distribution into a user-facing verdict.
//!
//! Two independent policies run on every request:
//!
//! - **Rejection.** The outward label becomes [`REJECTION_MESSAGE`] when the
//!   confidence is below [`RELEVANCE_THRESHOLD`] *or* the predicted label is
//!   `Non-Medical`.
//! - **Feedback.** The raw text is appended to the feedback log when the
//!   confidence is below [`RELEVANCE_THRESHOLD`], whatever the label.
//!
//! A confident `Non-Medical` prediction is therefore rejected but not logged.
//! The returned confidence is always the raw maximum probability.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};
use triage_core::{NON_MEDICAL_LABEL, SymptomResponse};

use crate::classifier::{ClassifierError, argmax, is_normalized};
use crate::context::InferenceContext;
use crate::feedback::FeedbackLog;

/// Minimum confidence for a label to be returned and for a request to skip
/// the feedback log.
pub const RELEVANCE_THRESHOLD: f32 = 0.6;

/// Outward label for rejected input.
pub const REJECTION_MESSAGE: &str =
    "I am sorry, I am not able to figure out your query is it a medical related query?";

/// Label used when the predicted index has no entry in the label map.
pub const UNKNOWN_LABEL: &str = "Unknown";

#[derive(Debug, Error)]
pub enum GateError {
    #[error("service unavailable: {missing} not loaded")]
    ServiceUnavailable { missing: &'static str },

    #[error("classifier failed: {0}")]
    Classifier(#[from] ClassifierError),
}

/// Why a verdict carries the rejection message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Confidence below [`RELEVANCE_THRESHOLD`].
    LowConfidence,
    /// Confident prediction of the `Non-Medical` class.
    NonMedical,
}

impl Rejection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LowConfidence => "low_confidence",
            Self::NonMedical => "non_medical",
        }
    }
}

/// Rejection policy for one prediction. Low confidence takes precedence.
pub fn rejection_for(confidence: f32, predicted_label: &str) -> Option<Rejection> {
    if confidence < RELEVANCE_THRESHOLD {
        Some(Rejection::LowConfidence)
    } else if predicted_label == NON_MEDICAL_LABEL {
        Some(Rejection::NonMedical)
    } else {
        None
    }
}

/// Feedback policy for one prediction.
pub fn should_log_feedback(confidence: f32) -> bool {
    confidence < RELEVANCE_THRESHOLD
}

/// Gated result for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    /// Canonical label, or [`REJECTION_MESSAGE`] when rejected.
    pub normalized_label: String,
    /// Raw maximum class probability, never adjusted.
    pub confidence: f32,
    /// Label the classifier actually picked.
    pub predicted_label: String,
    pub rejection: Option<Rejection>,
}

impl Verdict {
    pub fn is_rejected(&self) -> bool {
        self.rejection.is_some()
    }

    pub fn into_response(self) -> SymptomResponse {
        SymptomResponse {
            normalized_symptom: self.normalized_label,
            confidence: self.confidence,
        }
    }
}

/// Stateless per-request gate over a shared inference context.
///
/// `Send + Sync`: wrap in an `Arc` and call [`evaluate`](Self::evaluate) from
/// as many threads as needed.
pub struct RelevanceGate {
    context: Arc<InferenceContext>,
    feedback: FeedbackLog,
}

impl RelevanceGate {
    pub fn new(context: Arc<InferenceContext>, feedback: FeedbackLog) -> Self {
        Self { context, feedback }
    }

    pub fn context(&self) -> &InferenceContext {
        &self.context
    }

    pub fn feedback_log(&self) -> &FeedbackLog {
        &self.feedback
    }

    /// Classify `text` and apply the rejection and feedback policies.
    ///
    /// Fails only when an artifact is missing or the classifier itself
    /// errors; a rejection is a successful verdict. Classifier errors are
    /// returned as-is, never retried.
    pub fn evaluate(&self, text: &str) -> Result<Verdict, GateError> {
        let classifier = self.context.classifier()?;
        let labels = self.context.labels()?;

        let probs = classifier.classify(text, self.context.max_length())?;
        if !is_normalized(&probs) {
            let sum: f32 = probs.iter().sum();
            warn!(sum, classes = probs.len(), "classifier output does not sum to 1");
        }
        if probs.len() != labels.len() {
            warn!(
                classes = probs.len(),
                labels = labels.len(),
                "classifier output size differs from label map"
            );
        }

        let (predicted_index, confidence) =
            argmax(&probs).ok_or(ClassifierError::EmptyDistribution)?;
        let predicted_label = labels
            .label(predicted_index)
            .unwrap_or(UNKNOWN_LABEL)
            .to_string();

        let rejection = rejection_for(confidence, &predicted_label);
        let normalized_label = match rejection {
            Some(_) => REJECTION_MESSAGE.to_string(),
            None => predicted_label.clone(),
        };

        if should_log_feedback(confidence) {
            self.record_feedback(text, confidence);
        }

        debug!(
            predicted = %predicted_label,
            confidence,
            rejected = rejection.map(|r| r.as_str()),
            "evaluated request"
        );

        Ok(Verdict {
            normalized_label,
            confidence,
            predicted_label,
            rejection,
        })
    }

    fn record_feedback(&self, text: &str, confidence: f32) {
        if let Err(e) = self.feedback.append(text, confidence) {
            warn!(error = %e, "failed to log low-confidence query");
        }
    }
}
