use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::engine::filter::StrengthBand;
use crate::engine::ranking::{RankedWords, ScoredWord};
use crate::error::{GeneratorError, LookupError};
use crate::generator::associations::combine_associations;
use crate::generator::options::GeneratorOptions;
use crate::generator::{AssociationLookup, Associations};

/// A seed word whose lookup failed during the last fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedFailure {
    pub seed: String,
    pub error: LookupError,
}

/// Builds themed word lists from seed words.
///
/// The merged, ranked associations for the current seed words are fetched
/// once and cached. Changing only the strength band or sample size reuses
/// that cache; changing the seed words throws it away.
pub struct ThemedGenerator<L> {
    lookup: L,
    options: Option<GeneratorOptions>,
    unfiltered: Option<RankedWords>,
    filtered: Option<(StrengthBand, RankedWords)>,
    failures: Vec<SeedFailure>,
    fetches: usize,
    rng: SmallRng,
}

impl<L: AssociationLookup> ThemedGenerator<L> {
    pub fn new(lookup: L) -> Self {
        Self::with_rng(lookup, SmallRng::from_entropy())
    }

    pub fn with_rng(lookup: L, rng: SmallRng) -> Self {
        Self {
            lookup,
            options: None,
            unfiltered: None,
            filtered: None,
            failures: Vec::new(),
            fetches: 0,
            rng,
        }
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    pub fn options(&self) -> Option<&GeneratorOptions> {
        self.options.as_ref()
    }

    /// True once the current seed words have been fetched and merged.
    pub fn is_fresh(&self) -> bool {
        self.unfiltered.is_some()
    }

    /// Seeds whose lookup failed on the most recent fetch. A non-empty list
    /// means the result is partial.
    pub fn failed_seeds(&self) -> &[SeedFailure] {
        &self.failures
    }

    /// How many times the seed words have been looked up. Changes only when
    /// a generation actually hit the lookup.
    pub fn fetch_count(&self) -> usize {
        self.fetches
    }

    pub fn set_options(&mut self, options: GeneratorOptions) {
        match &self.options {
            Some(current) if current.seed_words == options.seed_words => {
                tracing::debug!(
                    strength = %options.strength,
                    sample_size = options.sample_size,
                    "seed words unchanged, keeping cached associations"
                );
            }
            _ => {
                tracing::debug!(seeds = ?options.seed_words, "seed words changed, clearing cache");
                self.unfiltered = None;
                self.filtered = None;
                self.failures.clear();
            }
        }
        self.options = Some(options);
    }

    /// Ranked, filtered and (if requested) sampled words for the current options.
    pub fn generate(&mut self) -> Result<RankedWords, GeneratorError> {
        let filtered = self.refresh()?;
        let sample_size = self.options.as_ref().map_or(0, |o| o.sample_size);
        Ok(filtered.sample(sample_size, &mut self.rng))
    }

    /// One uniformly random word from the filtered result.
    pub fn generate_one_random(&mut self) -> Result<ScoredWord, GeneratorError> {
        let filtered = self.refresh()?;
        filtered
            .choose(&mut self.rng)
            .cloned()
            .ok_or(GeneratorError::EmptyResult)
    }

    /// Bring both caches up to date and return a snapshot of the filtered list.
    fn refresh(&mut self) -> Result<RankedWords, GeneratorError> {
        let options = self.options.as_ref().ok_or(GeneratorError::NotConfigured)?;
        let strength = options.strength;
        let seed_count = options.seed_count();

        if self.unfiltered.is_none() {
            let (merged, failures) = fetch_merged(&self.lookup, &options.seed_words);
            self.fetches += 1;
            self.filtered = None;
            // Nothing merged and a seed failed: stay uncached so the next call retries.
            if merged.is_empty() && !failures.is_empty() {
                self.failures = failures;
                return Ok(RankedWords::default());
            }
            self.failures = failures;
            self.unfiltered = Some(RankedWords::from_associations(merged));
        }

        if let Some((band, filtered)) = &self.filtered {
            if *band == strength {
                return Ok(filtered.clone());
            }
        }

        let unfiltered = self.unfiltered.as_ref().map(|u| strength.apply(u, seed_count));
        let filtered = unfiltered.unwrap_or_default();
        self.filtered = Some((strength, filtered.clone()));
        Ok(filtered)
    }
}

/// Look up every seed in order and sum their associations. A failed lookup
/// contributes nothing and is reported back alongside the merge.
fn fetch_merged<L: AssociationLookup>(
    lookup: &L,
    seeds: &[String],
) -> (Associations, Vec<SeedFailure>) {
    let mut merged = Associations::new();
    let mut failures = Vec::new();
    for seed in seeds {
        match lookup.lookup(seed) {
            Ok(associations) => {
                tracing::debug!(seed = %seed, count = associations.len(), "fetched associations");
                combine_associations(&mut merged, &associations);
            }
            Err(error) => {
                tracing::warn!(seed = %seed, %error, "association lookup failed, skipping seed");
                failures.push(SeedFailure {
                    seed: seed.clone(),
                    error,
                });
            }
        }
    }
    (merged, failures)
}
