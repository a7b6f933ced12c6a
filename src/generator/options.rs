use serde::{Deserialize, Serialize};

use crate::engine::filter::StrengthBand;

/// What to generate. Compared structurally; only `seed_words` decides
/// whether the cached merge is still valid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorOptions {
    pub seed_words: Vec<String>,
    pub strength: StrengthBand,
    /// 0 keeps every word that passes the filter.
    pub sample_size: usize,
}

impl GeneratorOptions {
    pub fn new(seed_words: Vec<String>, strength: StrengthBand, sample_size: usize) -> Self {
        Self {
            seed_words,
            strength,
            sample_size,
        }
    }

    pub fn from_input(seed_input: &str, strength: StrengthBand, sample_size: usize) -> Self {
        Self::new(parse_seed_words(seed_input), strength, sample_size)
    }

    pub fn seed_count(&self) -> usize {
        self.seed_words.len()
    }
}

/// Split a comma-separated list, trimming whitespace and dropping blanks.
pub fn parse_seed_words(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}
