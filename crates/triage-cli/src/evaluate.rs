//! Gated inference over texts given on the command line.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Args;
use triage_ai::{FeedbackLog, InferenceContext, RelevanceGate, Verdict};

#[derive(Args)]
pub struct EvaluateArgs {
    /// Texts to classify.
    #[arg(required = true)]
    texts: Vec<String>,

    /// Directory holding `model.onnx` and `tokenizer.json`.
    #[arg(long, env = "TRIAGE_MODEL_DIR", default_value = "models/symptom-classifier")]
    model_dir: PathBuf,

    /// Label index map produced alongside the model.
    #[arg(long, env = "TRIAGE_LABEL_MAP", default_value = "label_map.json")]
    label_map: PathBuf,

    /// Append-only log of low-confidence inputs.
    #[arg(long, env = "TRIAGE_FEEDBACK_LOG", default_value = "low_confidence_logs.txt")]
    feedback_log: PathBuf,

    /// Print one JSON response per line instead of a table.
    #[arg(long)]
    json: bool,
}

pub fn run(args: EvaluateArgs) -> anyhow::Result<()> {
    let context = InferenceContext::load(&args.model_dir, &args.label_map);
    let gate = RelevanceGate::new(Arc::new(context), FeedbackLog::new(args.feedback_log.clone()));

    for text in &args.texts {
        let verdict = gate
            .evaluate(text)
            .with_context(|| format!("evaluating {text:?}"))?;
        if args.json {
            let line = serde_json::to_string(&verdict.into_response())?;
            println!("{line}");
        } else {
            print_row(text, &verdict);
        }
    }
    Ok(())
}

fn print_row(text: &str, verdict: &Verdict) {
    let status = match verdict.rejection {
        Some(r) => r.as_str(),
        None => "ok",
    };
    println!(
        "{:<40} {:<24} {:.4}  {:<14} {}",
        text, verdict.predicted_label, verdict.confidence, status, verdict.normalized_label
    );
}
