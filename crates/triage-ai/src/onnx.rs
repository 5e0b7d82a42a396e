//! ONNX Runtime sequence classifier.
//!
//! Expects a fine-tuned DistilBERT-style export: the model directory must
//! contain `model.onnx` (inputs `input_ids` and `attention_mask`, output
//! logits `[batch, classes]`) and `tokenizer.json`.

use std::path::Path;
use std::sync::{Mutex, PoisonError};

use ort::session::Session;
use ort::value::Tensor;
use tokenizers::Tokenizer;
use tracing::info;

use crate::classifier::{Classifier, ClassifierError, softmax};

/// Sequence classifier backed by ONNX Runtime.
///
/// `Session::run` needs exclusive access, so the session sits behind a mutex;
/// the tokenizer is shared read-only.
pub struct OnnxClassifier {
    session: Mutex<Session>,
    tokenizer: Tokenizer,
    num_classes: Option<usize>,
}

impl OnnxClassifier {
    /// Load a classifier from a directory containing `model.onnx` and `tokenizer.json`.
    pub fn load(model_dir: &Path) -> Result<Self, ClassifierError> {
        let model_path = model_dir.join("model.onnx");
        let tokenizer_path = model_dir.join("tokenizer.json");

        if !model_path.exists() {
            return Err(ClassifierError::MissingArtifact(model_path));
        }
        if !tokenizer_path.exists() {
            return Err(ClassifierError::MissingArtifact(tokenizer_path));
        }

        let session = Session::builder()
            .map_err(|e| ClassifierError::Inference(format!("session builder: {e}")))?
            .commit_from_file(&model_path)
            .map_err(|e| ClassifierError::Inference(format!("load session: {e}")))?;

        let num_classes = infer_classes(session.outputs()[0].dtype());

        let tokenizer = Tokenizer::from_file(&tokenizer_path)
            .map_err(|e| ClassifierError::Tokenizer(format!("load tokenizer: {e}")))?;

        info!(classes = ?num_classes, model = %model_path.display(), "loaded classifier model");
        Ok(Self {
            session: Mutex::new(session),
            tokenizer,
            num_classes,
        })
    }

    /// Number of output classes, if the model declares a static shape.
    pub fn num_classes(&self) -> Option<usize> {
        self.num_classes
    }
}

impl Classifier for OnnxClassifier {
    fn classify(&self, text: &str, max_length: usize) -> Result<Vec<f32>, ClassifierError> {
        let encoding = self
            .tokenizer
            .encode(text, true)
            .map_err(|e| ClassifierError::Tokenizer(format!("tokenize: {e}")))?;

        let (input_ids, attention_mask) = truncate_inputs(
            encoding.get_ids(),
            encoding.get_attention_mask(),
            max_length,
        );
        let seq_len = input_ids.len();
        let shape = [1i64, seq_len as i64];

        let ids_tensor = Tensor::from_array((shape, input_ids.into_boxed_slice()))
            .map_err(|e| ClassifierError::Inference(format!("input_ids tensor: {e}")))?;
        let mask_tensor = Tensor::from_array((shape, attention_mask.into_boxed_slice()))
            .map_err(|e| ClassifierError::Inference(format!("attention_mask tensor: {e}")))?;

        let mut session = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        let outputs = session
            .run(ort::inputs![
                "input_ids" => ids_tensor,
                "attention_mask" => mask_tensor,
            ])
            .map_err(|e| ClassifierError::Inference(format!("run: {e}")))?;

        // Logits: [1, num_classes].
        let (output_shape, logits) = outputs[0]
            .try_extract_tensor::<f32>()
            .map_err(|e| ClassifierError::Inference(format!("extract logits: {e}")))?;
        let dims: &[i64] = output_shape;
        if dims.len() != 2 || dims[0] != 1 {
            return Err(ClassifierError::OutputShape(dims.to_vec()));
        }

        Ok(softmax(logits))
    }
}

/// Clip token ids and mask to `max_length`, keeping the final special token.
fn truncate_inputs(ids: &[u32], mask: &[u32], max_length: usize) -> (Vec<i64>, Vec<i64>) {
    let keep = ids.len().min(max_length.max(1));
    let mut input_ids: Vec<i64> = ids[..keep].iter().map(|&id| id as i64).collect();
    let attention_mask: Vec<i64> = mask[..keep].iter().map(|&m| m as i64).collect();

    if keep < ids.len()
        && let (Some(last), Some(&sep)) = (input_ids.last_mut(), ids.last())
    {
        *last = sep as i64;
    }
    (input_ids, attention_mask)
}

/// Try to infer the class count from the ONNX model output type.
fn infer_classes(output_type: &ort::value::ValueType) -> Option<usize> {
    match output_type {
        ort::value::ValueType::Tensor { shape, .. } => shape
            .last()
            .and_then(|&d| if d > 0 { Some(d as usize) } else { None }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use crate::classifier::is_normalized;

    fn model_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("models")
            .join("symptom-classifier")
    }

    fn require_model() -> PathBuf {
        let dir = model_dir();
        if !dir.join("model.onnx").exists() {
            panic!(
                "Model not found. Export the fine-tuned classifier to ONNX:\n  \
                 models/symptom-classifier/model.onnx + tokenizer.json"
            );
        }
        dir
    }

    #[test]
    fn truncation_keeps_trailing_special_token() {
        // [CLS] a b c d [SEP]
        let ids = [101, 1, 2, 3, 4, 102];
        let mask = [1; 6];
        let (ids, mask) = truncate_inputs(&ids, &mask, 4);
        assert_eq!(ids, vec![101, 1, 2, 102]);
        assert_eq!(mask.len(), 4);
    }

    #[test]
    fn short_input_untouched() {
        let (ids, _) = truncate_inputs(&[101, 7, 102], &[1, 1, 1], 64);
        assert_eq!(ids, vec![101, 7, 102]);
    }

    #[test]
    fn missing_model_dir_errors() {
        let err = OnnxClassifier::load(Path::new("/nonexistent/model")).err().unwrap();
        assert!(matches!(err, ClassifierError::MissingArtifact(_)));
    }

    #[test]
    #[ignore = "requires exported model under models/symptom-classifier"]
    fn classify_returns_distribution() {
        let dir = require_model();
        let clf = OnnxClassifier::load(&dir).unwrap();
        let probs = clf.classify("I have been dealing with headache for a week", 64).unwrap();
        assert!(is_normalized(&probs));
        if let Some(n) = clf.num_classes() {
            assert_eq!(probs.len(), n);
        }
    }
}
