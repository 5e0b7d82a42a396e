//! Inference context: the classifier and label map, loaded once at startup.
//!
//! The context is immutable after construction and shared by reference (or
//! `Arc`) across requests. Either artifact may be absent if it failed to load;
//! the gate then answers every request with `ServiceUnavailable` instead of a
//! guessed label.

use std::path::Path;
use std::sync::Arc;

use tracing::warn;
use triage_core::LabelIndexMap;

use crate::classifier::Classifier;
use crate::gate::GateError;

/// Token limit passed to the classifier; matches the training configuration.
pub const MAX_LENGTH: usize = 64;

pub struct InferenceContext {
    classifier: Option<Arc<dyn Classifier>>,
    labels: Option<LabelIndexMap>,
    max_length: usize,
}

impl InferenceContext {
    /// A fully loaded context.
    pub fn new(classifier: Arc<dyn Classifier>, labels: LabelIndexMap) -> Self {
        Self::from_parts(Some(classifier), Some(labels))
    }

    /// A context where either artifact may be missing.
    pub fn from_parts(
        classifier: Option<Arc<dyn Classifier>>,
        labels: Option<LabelIndexMap>,
    ) -> Self {
        Self {
            classifier,
            labels,
            max_length: MAX_LENGTH,
        }
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Load the label map, logging and returning `None` on failure.
    pub fn load_labels(path: &Path) -> Option<LabelIndexMap> {
        match LabelIndexMap::load(path) {
            Ok(map) => Some(map),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "label map not loaded");
                None
            }
        }
    }

    /// Load the ONNX classifier and label map from disk.
    ///
    /// Missing or broken artifacts are logged, not fatal; requests against the
    /// resulting context fail with `ServiceUnavailable`.
    #[cfg(feature = "onnx")]
    pub fn load(model_dir: &Path, label_map: &Path) -> Self {
        let classifier = match crate::onnx::OnnxClassifier::load(model_dir) {
            Ok(c) => Some(Arc::new(c) as Arc<dyn Classifier>),
            Err(e) => {
                warn!(dir = %model_dir.display(), error = %e, "classifier not loaded");
                None
            }
        };
        Self::from_parts(classifier, Self::load_labels(label_map))
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn is_ready(&self) -> bool {
        self.classifier.is_some() && self.labels.is_some()
    }

    pub fn classifier(&self) -> Result<&dyn Classifier, GateError> {
        self.classifier
            .as_deref()
            .ok_or(GateError::ServiceUnavailable { missing: "classifier" })
    }

    pub fn labels(&self) -> Result<&LabelIndexMap, GateError> {
        self.labels
            .as_ref()
            .ok_or(GateError::ServiceUnavailable { missing: "label map" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::ClassifierError;

    struct Uniform;

    impl Classifier for Uniform {
        fn classify(&self, _text: &str, _max_length: usize) -> Result<Vec<f32>, ClassifierError> {
            Ok(vec![0.5, 0.5])
        }
    }

    #[test]
    fn ready_only_with_both_artifacts() {
        let labels = LabelIndexMap::from_labels(["Fever", "Non-Medical"]).unwrap();
        assert!(InferenceContext::new(Arc::new(Uniform), labels.clone()).is_ready());
        assert!(!InferenceContext::from_parts(Some(Arc::new(Uniform)), None).is_ready());
        assert!(!InferenceContext::from_parts(None, Some(labels)).is_ready());
    }

    #[test]
    fn missing_artifacts_are_service_unavailable() {
        let ctx = InferenceContext::from_parts(None, None);
        assert!(matches!(
            ctx.classifier(),
            Err(GateError::ServiceUnavailable { missing: "classifier" })
        ));
        assert!(matches!(
            ctx.labels(),
            Err(GateError::ServiceUnavailable { missing: "label map" })
        ));
    }

    #[test]
    fn load_labels_missing_file_is_none() {
        assert!(InferenceContext::load_labels(Path::new("/nonexistent/label_map.json")).is_none());
    }

    #[test]
    fn default_max_length() {
        let ctx = InferenceContext::from_parts(None, None);
        assert_eq!(ctx.max_length(), MAX_LENGTH);
        assert_eq!(ctx.with_max_length(128).max_length(), 128);
    }
}
