//! Noise model for synthetic utterances.
//!
//! Each step is an independent Bernoulli draw, applied in order:
//! adjacent-character swap, full lowercasing, full uppercasing. Lowercasing
//! and uppercasing can both fire on one example; the later one wins.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::CorpusError;

pub const TYPO_PROBABILITY: f64 = 0.30;
pub const LOWERCASE_PROBABILITY: f64 = 0.10;
pub const UPPERCASE_PROBABILITY: f64 = 0.05;

/// Texts shorter than this (in characters) are never typo-corrupted.
pub const MIN_TYPO_LEN: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoiseModel {
    typo_probability: f64,
    lowercase_probability: f64,
    uppercase_probability: f64,
}

impl Default for NoiseModel {
    fn default() -> Self {
        Self {
            typo_probability: TYPO_PROBABILITY,
            lowercase_probability: LOWERCASE_PROBABILITY,
            uppercase_probability: UPPERCASE_PROBABILITY,
        }
    }
}

impl NoiseModel {
    pub fn new(typo: f64, lowercase: f64, uppercase: f64) -> Result<Self, CorpusError> {
        check_probability("typo", typo)?;
        check_probability("lowercase", lowercase)?;
        check_probability("uppercase", uppercase)?;
        Ok(Self {
            typo_probability: typo,
            lowercase_probability: lowercase,
            uppercase_probability: uppercase,
        })
    }

    /// No corruption: every draw fails.
    pub fn disabled() -> Self {
        Self {
            typo_probability: 0.0,
            lowercase_probability: 0.0,
            uppercase_probability: 0.0,
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.typo_probability == 0.0
            && self.lowercase_probability == 0.0
            && self.uppercase_probability == 0.0
    }

    /// Corrupt `text` according to the model.
    pub fn apply<R: Rng + ?Sized>(&self, text: String, rng: &mut R) -> String {
        let mut text = text;
        if rng.gen_bool(self.typo_probability) {
            text = swap_adjacent(&text, rng);
        }
        if rng.gen_bool(self.lowercase_probability) {
            text = text.to_lowercase();
        }
        if rng.gen_bool(self.uppercase_probability) {
            text = text.to_uppercase();
        }
        text
    }
}

fn check_probability(name: &'static str, value: f64) -> Result<(), CorpusError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(CorpusError::InvalidProbability { name, value })
    }
}

/// Swap one randomly chosen pair of adjacent characters.
///
/// Operates on `char`s so multi-byte text is never split mid-codepoint.
/// Texts under [`MIN_TYPO_LEN`] characters are returned unchanged and consume
/// no randomness.
pub fn swap_adjacent<R: Rng + ?Sized>(text: &str, rng: &mut R) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    if chars.len() < MIN_TYPO_LEN {
        return text.to_string();
    }
    let idx = rng.gen_range(0..chars.len() - 1);
    chars.swap(idx, idx + 1);
    chars.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn short_texts_never_swapped() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        for text in ["", "a", "ab", "abc", "héé"] {
            for _ in 0..50 {
                assert_eq!(swap_adjacent(text, &mut rng), text);
            }
        }
    }

    #[test]
    fn swap_changes_exactly_one_adjacent_pair() {
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        let text = "abcdefgh";
        for _ in 0..100 {
            let out = swap_adjacent(text, &mut rng);
            let a: Vec<char> = text.chars().collect();
            let b: Vec<char> = out.chars().collect();
            let diffs: Vec<usize> = (0..a.len()).filter(|&i| a[i] != b[i]).collect();
            assert_eq!(diffs.len(), 2, "{out}");
            assert_eq!(diffs[1], diffs[0] + 1);
            assert_eq!(a[diffs[0]], b[diffs[1]]);
        }
    }

    #[test]
    fn swap_is_unicode_safe() {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        for _ in 0..50 {
            let out = swap_adjacent("fièvre", &mut rng);
            assert_eq!(out.chars().count(), 6);
        }
    }

    #[test]
    fn swap_is_deterministic_for_a_seed() {
        let a = swap_adjacent("I have head hurts", &mut ChaCha20Rng::seed_from_u64(42));
        let b = swap_adjacent("I have head hurts", &mut ChaCha20Rng::seed_from_u64(42));
        assert_eq!(a, b);
        assert_ne!(a, "I have head hurts");
    }

    #[test]
    fn disabled_model_is_identity() {
        let noise = NoiseModel::disabled();
        assert!(noise.is_disabled());
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        for _ in 0..200 {
            assert_eq!(
                noise.apply("I have head hurts".into(), &mut rng),
                "I have head hurts"
            );
        }
    }

    #[test]
    fn always_typo_short_text_untouched() {
        let noise = NoiseModel::new(1.0, 0.0, 0.0).unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        assert_eq!(noise.apply("flu".into(), &mut rng), "flu");
    }

    #[test]
    fn forced_case_steps() {
        let mut rng = ChaCha20Rng::seed_from_u64(9);
        let lower = NoiseModel::new(0.0, 1.0, 0.0).unwrap();
        assert_eq!(lower.apply("Sore Throat".into(), &mut rng), "sore throat");

        let upper = NoiseModel::new(0.0, 0.0, 1.0).unwrap();
        assert_eq!(upper.apply("Sore Throat".into(), &mut rng), "SORE THROAT");

        // Both fire: uppercasing runs last.
        let both = NoiseModel::new(0.0, 1.0, 1.0).unwrap();
        assert_eq!(both.apply("Sore Throat".into(), &mut rng), "SORE THROAT");
    }

    #[test]
    fn default_rates_roughly_hold() {
        let noise = NoiseModel::default();
        let mut rng = ChaCha20Rng::seed_from_u64(1234);
        let n = 20_000;
        let text = "i have been dealing with a fever";
        let changed = (0..n)
            .filter(|_| noise.apply(text.into(), &mut rng) != text)
            .count();
        // Typo (0.30) or uppercase (0.05); lowercasing is a no-op here.
        let rate = changed as f64 / n as f64;
        assert!((0.28..0.40).contains(&rate), "rate = {rate}");
    }

    #[test]
    fn rejects_out_of_range_probability() {
        assert!(matches!(
            NoiseModel::new(1.5, 0.0, 0.0),
            Err(CorpusError::InvalidProbability { name: "typo", .. })
        ));
        assert!(NoiseModel::new(0.0, -0.1, 0.0).is_err());
    }
}
