//! Corpus synthesizer: taxonomy × templates × noise → labeled rows.
//!
//! Sampling is uniform at every level (label, then phrase within the label,
//! then template), so classes are *not* balanced beyond that: a label's share
//! of the corpus is `1 / labels`, and phrases within small phrase sets are
//! repeated more often. Near-duplicate rows are expected and kept.

use rand::Rng;
use tracing::{debug, info};
use triage_core::{SymptomTaxonomy, TemplateSet};

use crate::corpus::{Corpus, SyntheticExample};
use crate::noise::NoiseModel;
use crate::CorpusError;

/// Default corpus size for a full generation run.
pub const DEFAULT_NUM_SAMPLES: usize = 20_000;

/// Generates labeled training rows from a validated taxonomy and template set.
///
/// Taxonomy and templates are validated when they are built, so a
/// `Synthesizer` can never start sampling from a malformed configuration.
#[derive(Debug, Clone)]
pub struct Synthesizer {
    taxonomy: SymptomTaxonomy,
    templates: TemplateSet,
    noise: NoiseModel,
}

impl Synthesizer {
    pub fn new(taxonomy: SymptomTaxonomy, templates: TemplateSet, noise: NoiseModel) -> Self {
        Self {
            taxonomy,
            templates,
            noise,
        }
    }

    /// Built-in taxonomy and templates with the default noise model.
    pub fn builtin() -> Self {
        Self::new(
            SymptomTaxonomy::builtin(),
            TemplateSet::builtin(),
            NoiseModel::default(),
        )
    }

    pub fn taxonomy(&self) -> &SymptomTaxonomy {
        &self.taxonomy
    }

    pub fn noise(&self) -> &NoiseModel {
        &self.noise
    }

    /// Draw one example.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> SyntheticExample {
        let classes = self.taxonomy.classes();
        let class = &classes[rng.gen_range(0..classes.len())];
        let phrase = &class.phrases[rng.gen_range(0..class.phrases.len())];

        let templates = self.templates.templates();
        let template = &templates[rng.gen_range(0..templates.len())];

        let text = self.noise.apply(template.fill(phrase), rng);
        SyntheticExample {
            text,
            label: class.label.clone(),
        }
    }

    /// Generate exactly `num_samples` rows, then shuffle their order.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        num_samples: usize,
        rng: &mut R,
    ) -> Result<Corpus, CorpusError> {
        if num_samples == 0 {
            return Err(CorpusError::InvalidSampleCount);
        }

        info!(
            samples = num_samples,
            labels = self.taxonomy.len(),
            templates = self.templates.len(),
            noise = !self.noise.is_disabled(),
            "generating synthetic corpus"
        );

        let examples: Vec<SyntheticExample> =
            (0..num_samples).map(|_| self.sample(rng)).collect();

        let labels = self.taxonomy.labels().map(str::to_string).collect();
        let mut corpus = Corpus::new(examples, labels);
        corpus.shuffle(rng);

        debug!(rows = corpus.len(), "corpus generated");
        Ok(corpus)
    }
}
