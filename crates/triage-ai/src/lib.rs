//! Inference layer: a classifier behind a relevance gate.
//!
//! The gate turns a probability distribution into a verdict, rejecting
//! low-confidence and non-medical predictions and recording low-confidence
//! inputs in a feedback log for later review.

mod classifier;
mod context;
mod feedback;
mod gate;
#[cfg(feature = "onnx")]
mod onnx;

pub use classifier::{
    Classifier, ClassifierError, PROBABILITY_SUM_TOLERANCE, argmax, is_normalized, softmax,
};
pub use context::{InferenceContext, MAX_LENGTH};
pub use feedback::{FeedbackError, FeedbackLog, format_entry};
pub use gate::{
    GateError, REJECTION_MESSAGE, RELEVANCE_THRESHOLD, Rejection, RelevanceGate, UNKNOWN_LABEL,
    Verdict, rejection_for, should_log_feedback,
};
#[cfg(feature = "onnx")]
pub use onnx::OnnxClassifier;
