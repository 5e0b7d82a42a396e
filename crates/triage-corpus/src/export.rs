//! Corpus and diagnostics persistence.
//!
//! Corpus format is chosen by file extension: `.csv` (header `text,label`) or
//! `.parquet`. The label-distribution report is pretty-printed JSON.

use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::corpus::Corpus;
use crate::noise::NoiseModel;
use crate::CorpusError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorpusFormat {
    Csv,
    Parquet,
}

impl CorpusFormat {
    pub fn from_path(path: &Path) -> Result<Self, CorpusError> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Ok(Self::Csv),
            Some(ext) if ext.eq_ignore_ascii_case("parquet") => Ok(Self::Parquet),
            _ => Err(CorpusError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Write the corpus to `path`, picking the format from its extension.
pub fn write_corpus(corpus: &Corpus, path: &Path) -> Result<(), CorpusError> {
    let format = CorpusFormat::from_path(path)?;
    let batch = corpus.to_record_batch()?;
    let file = File::create(path)?;

    match format {
        CorpusFormat::Csv => {
            let mut writer = arrow::csv::Writer::new(file);
            writer.write(&batch)?;
        }
        CorpusFormat::Parquet => {
            let mut writer = ArrowWriter::try_new(file, batch.schema(), None)?;
            writer.write(&batch)?;
            writer.close()?;
        }
    }

    info!(rows = corpus.len(), path = %path.display(), ?format, "wrote corpus");
    Ok(())
}

/// Read all record batches from a Parquet corpus file.
pub fn read_parquet(path: &Path) -> Result<Vec<RecordBatch>, CorpusError> {
    let file = File::open(path)?;
    let reader = ParquetRecordBatchReaderBuilder::try_new(file)?.build()?;
    let batches: Result<Vec<RecordBatch>, _> = reader.collect();
    Ok(batches?)
}

/// Label-distribution diagnostics for one generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributionReport {
    /// ISO 8601 timestamp string.
    pub generated_at: String,
    pub seed: Option<u64>,
    pub samples: usize,
    pub noise: NoiseModel,
    pub counts: BTreeMap<String, usize>,
}

impl DistributionReport {
    pub fn new(corpus: &Corpus, seed: Option<u64>, noise: NoiseModel) -> Self {
        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            seed,
            samples: corpus.len(),
            noise,
            counts: corpus.label_distribution(),
        }
    }

    /// Emit one log line per label, most frequent first.
    pub fn log(&self) {
        let mut rows: Vec<(&String, &usize)> = self.counts.iter().collect();
        rows.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
        for (label, count) in rows {
            info!(%label, count, "label distribution");
        }
    }

    pub fn write(&self, path: &Path) -> Result<(), CorpusError> {
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        info!(path = %path.display(), labels = self.counts.len(), "wrote distribution report");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::SyntheticExample;
    use arrow::array::{Array, StringArray};

    fn corpus() -> Corpus {
        Corpus::new(
            vec![
                SyntheticExample::new("I have head hurts", "Headache"),
                SyntheticExample::new("Doctor, I have fever", "Fever"),
                SyntheticExample::new("Is \"burning up\" serious?", "Fever"),
            ],
            vec!["Fever".into(), "Headache".into(), "Non-Medical".into()],
        )
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(
            CorpusFormat::from_path(Path::new("dataset.csv")).unwrap(),
            CorpusFormat::Csv
        );
        assert_eq!(
            CorpusFormat::from_path(Path::new("out/dataset.PARQUET")).unwrap(),
            CorpusFormat::Parquet
        );
        assert!(matches!(
            CorpusFormat::from_path(Path::new("dataset.txt")),
            Err(CorpusError::UnsupportedFormat(_))
        ));
        assert!(CorpusFormat::from_path(Path::new("dataset")).is_err());
    }

    #[test]
    fn csv_has_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dataset.csv");
        write_corpus(&corpus(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("text,label"));
        assert_eq!(lines.next(), Some("I have head hurts,Headache"));
        assert_eq!(lines.next(), Some("\"Doctor, I have fever\",Fever"));
        assert_eq!(content.lines().count(), 4);
    }

    #[test]
    fn parquet_readback() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dataset.parquet");
        write_corpus(&corpus(), &path).unwrap();

        let batches = read_parquet(&path).unwrap();
        let rows: usize = batches.iter().map(|b| b.num_rows()).sum();
        assert_eq!(rows, 3);

        let labels = batches[0]
            .column_by_name("label")
            .unwrap()
            .as_any()
            .downcast_ref::<StringArray>()
            .unwrap();
        assert_eq!(labels.value(0), "Headache");
        assert_eq!(labels.len(), 3);
    }

    #[test]
    fn report_counts_and_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("label_distribution.json");
        let report = DistributionReport::new(&corpus(), Some(42), NoiseModel::disabled());
        report.log();
        report.write(&path).unwrap();

        let loaded: DistributionReport =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded.samples, 3);
        assert_eq!(loaded.seed, Some(42));
        assert_eq!(loaded.counts["Fever"], 2);
        assert_eq!(loaded.counts["Headache"], 1);
        assert_eq!(loaded.counts["Non-Medical"], 0);
    }
}
