//! `triage` -- CLI for the symptom triage pipeline.
//!
//! - `triage generate` -- Synthesize a labeled training corpus.
//! - `triage label-map` -- Write the label index map for a taxonomy.
//! - `triage evaluate` -- Run gated inference on one or more texts.
//! - `triage taxonomy` -- Summarize the active taxonomy.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use triage_core::{SymptomTaxonomy, TaxonomyFile, TemplateSet};

mod evaluate;
mod generate;

#[derive(Parser)]
#[command(name = "triage", about = "Symptom triage corpus and inference CLI", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Synthesize a labeled corpus (CSV or Parquet by extension).
    Generate(generate::GenerateArgs),

    /// Write the label index map for the active taxonomy.
    LabelMap {
        /// Output path for the JSON map.
        #[arg(short, long, default_value = "label_map.json")]
        output: PathBuf,

        /// Taxonomy file (JSON). Defaults to the built-in taxonomy.
        #[arg(long, env = "TRIAGE_TAXONOMY")]
        taxonomy: Option<PathBuf>,
    },

    /// Classify texts through the relevance gate.
    Evaluate(evaluate::EvaluateArgs),

    /// Print labels, phrase counts and template count.
    Taxonomy {
        /// Taxonomy file (JSON). Defaults to the built-in taxonomy.
        #[arg(long, env = "TRIAGE_TAXONOMY")]
        taxonomy: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    tracing::info!("triage v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    match cli.command {
        Commands::Generate(args) => generate::run(args),
        Commands::LabelMap { output, taxonomy } => {
            let (taxonomy, _) = load_taxonomy(taxonomy.as_deref())?;
            let map = triage_core::LabelIndexMap::from_taxonomy(&taxonomy);
            map.save(&output)
                .with_context(|| format!("writing label map to {}", output.display()))?;
            println!("Wrote {} labels to {}", map.len(), output.display());
            Ok(())
        }
        Commands::Evaluate(args) => evaluate::run(args),
        Commands::Taxonomy { taxonomy } => {
            let (taxonomy, templates) = load_taxonomy(taxonomy.as_deref())?;
            for class in taxonomy.classes() {
                println!("{:<28} {:>3} phrases", class.label, class.phrases.len());
            }
            println!(
                "\n{} labels, {} phrases, {} templates",
                taxonomy.len(),
                taxonomy.phrase_count(),
                templates.len()
            );
            Ok(())
        }
    }
}

/// Load a taxonomy file, or fall back to the built-in set.
pub(crate) fn load_taxonomy(path: Option<&Path>) -> anyhow::Result<(SymptomTaxonomy, TemplateSet)> {
    match path {
        Some(p) => {
            TaxonomyFile::load(p).with_context(|| format!("loading taxonomy {}", p.display()))
        }
        None => Ok((SymptomTaxonomy::builtin(), TemplateSet::builtin())),
    }
}
