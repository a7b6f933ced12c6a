use std::cmp::Ordering;

use rand::Rng;
use rand::seq::index;
use serde::{Deserialize, Serialize};

use crate::generator::Associations;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoredWord {
    pub word: String,
    pub score: f64,
}

/// Words ordered by score descending, ties broken by word ascending.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankedWords {
    entries: Vec<ScoredWord>,
}

fn rank_order(a: &ScoredWord, b: &ScoredWord) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.word.cmp(&b.word))
}

impl RankedWords {
    pub fn from_associations(associations: Associations) -> Self {
        let mut entries: Vec<ScoredWord> = associations
            .into_iter()
            .map(|(word, score)| ScoredWord { word, score })
            .collect();
        entries.sort_by(rank_order);
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScoredWord> {
        self.entries.iter()
    }

    pub fn retain_scores(&self, mut keep: impl FnMut(f64) -> bool) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|e| keep(e.score))
                .cloned()
                .collect(),
        }
    }

    /// Draw `count` distinct entries without replacement, keeping rank order.
    /// `count == 0` or `count >= len` returns everything.
    pub fn sample<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Self {
        if count == 0 || count >= self.entries.len() {
            return self.clone();
        }
        let mut picked = index::sample(rng, self.entries.len(), count).into_vec();
        picked.sort_unstable();
        Self {
            entries: picked.into_iter().map(|i| self.entries[i].clone()).collect(),
        }
    }

    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&ScoredWord> {
        if self.entries.is_empty() {
            return None;
        }
        self.entries.get(rng.gen_range(0..self.entries.len()))
    }
}

impl<'a> IntoIterator for &'a RankedWords {
    type Item = &'a ScoredWord;
    type IntoIter = std::slice::Iter<'a, ScoredWord>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
