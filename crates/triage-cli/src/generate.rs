//! Corpus generation: taxonomy + templates + noise → CSV/Parquet on disk.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::Args;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use triage_core::LabelIndexMap;
use triage_corpus::{
    DEFAULT_NUM_SAMPLES, DistributionReport, NoiseModel, Synthesizer, write_corpus,
};

#[derive(Args)]
pub struct GenerateArgs {
    /// Number of rows to generate.
    #[arg(short = 'n', long, default_value_t = DEFAULT_NUM_SAMPLES)]
    samples: usize,

    /// RNG seed; identical seeds reproduce identical corpora.
    #[arg(long, env = "TRIAGE_SEED", default_value_t = 42)]
    seed: u64,

    /// Output file (`.csv` or `.parquet`).
    #[arg(short, long, default_value = "dataset.csv")]
    output: PathBuf,

    /// Taxonomy file (JSON). Defaults to the built-in taxonomy.
    #[arg(long, env = "TRIAGE_TAXONOMY")]
    taxonomy: Option<PathBuf>,

    /// Also write the label index map for the taxonomy.
    #[arg(long)]
    label_map: Option<PathBuf>,

    /// Write the label-distribution report as JSON.
    #[arg(long)]
    report: Option<PathBuf>,

    /// Emit clean template fills without typos or case changes.
    #[arg(long)]
    no_noise: bool,

    /// Split into train/validation; the validation rows go to `<stem>_val.<ext>`.
    #[arg(long, value_name = "TRAIN_FRACTION")]
    split: Option<f64>,
}

pub fn run(args: GenerateArgs) -> anyhow::Result<()> {
    let start = Instant::now();

    let (taxonomy, templates) = crate::load_taxonomy(args.taxonomy.as_deref())?;
    let noise = if args.no_noise {
        NoiseModel::disabled()
    } else {
        NoiseModel::default()
    };
    let synth = Synthesizer::new(taxonomy, templates, noise);

    let mut rng = ChaCha20Rng::seed_from_u64(args.seed);
    let corpus = synth
        .generate(args.samples, &mut rng)
        .context("generating corpus")?;

    let report = DistributionReport::new(&corpus, Some(args.seed), noise);
    report.log();
    if let Some(path) = &args.report {
        report
            .write(path)
            .with_context(|| format!("writing report to {}", path.display()))?;
    }

    if let Some(path) = &args.label_map {
        LabelIndexMap::from_taxonomy(synth.taxonomy())
            .save(path)
            .with_context(|| format!("writing label map to {}", path.display()))?;
    }

    match args.split {
        Some(fraction) => {
            let (train, val) = corpus
                .split(fraction, &mut rng)
                .context("splitting corpus")?;
            let val_path = validation_path(&args.output);
            write_corpus(&train, &args.output)
                .with_context(|| format!("writing {}", args.output.display()))?;
            write_corpus(&val, &val_path)
                .with_context(|| format!("writing {}", val_path.display()))?;
            eprintln!(
                "  Wrote {} train rows to {} and {} validation rows to {}",
                train.len(),
                args.output.display(),
                val.len(),
                val_path.display()
            );
        }
        None => {
            write_corpus(&corpus, &args.output)
                .with_context(|| format!("writing {}", args.output.display()))?;
            eprintln!("  Wrote {} rows to {}", corpus.len(), args.output.display());
        }
    }

    eprintln!("  Done in {:.1}s", start.elapsed().as_secs_f64());
    Ok(())
}

/// `data/dataset.csv` → `data/dataset_val.csv`.
fn validation_path(output: &Path) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "dataset".to_string());
    let name = match output.extension() {
        Some(ext) => format!("{stem}_val.{}", ext.to_string_lossy()),
        None => format!("{stem}_val"),
    };
    output.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_path_keeps_extension() {
        assert_eq!(
            validation_path(Path::new("data/dataset.csv")),
            PathBuf::from("data/dataset_val.csv")
        );
        assert_eq!(
            validation_path(Path::new("corpus.parquet")),
            PathBuf::from("corpus_val.parquet")
        );
        assert_eq!(validation_path(Path::new("rows")), PathBuf::from("rows_val"));
    }

    #[test]
    fn generate_writes_split_and_report() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("dataset.csv");
        let report = dir.path().join("label_distribution.json");
        let label_map = dir.path().join("label_map.json");

        run(GenerateArgs {
            samples: 100,
            seed: 7,
            output: output.clone(),
            taxonomy: None,
            label_map: Some(label_map.clone()),
            report: Some(report.clone()),
            no_noise: false,
            split: Some(0.8),
        })
        .unwrap();

        let train = std::fs::read_to_string(&output).unwrap();
        let val = std::fs::read_to_string(dir.path().join("dataset_val.csv")).unwrap();
        // Header plus rows.
        assert_eq!(train.lines().count(), 81);
        assert_eq!(val.lines().count(), 21);
        assert!(report.exists());
        assert_eq!(LabelIndexMap::load(&label_map).unwrap().len(), 26);
    }
}
