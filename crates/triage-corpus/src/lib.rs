//! Synthetic training corpus: noise model, sampler, diagnostics, and export.

mod corpus;
mod error;
mod export;
mod noise;
mod synth;

pub use corpus::{Corpus, SyntheticExample};
pub use error::CorpusError;
pub use export::{CorpusFormat, DistributionReport, read_parquet, write_corpus};
pub use noise::{
    LOWERCASE_PROBABILITY, MIN_TYPO_LEN, NoiseModel, TYPO_PROBABILITY, UPPERCASE_PROBABILITY,
    swap_adjacent,
};
pub use synth::{DEFAULT_NUM_SAMPLES, Synthesizer};
