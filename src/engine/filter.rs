use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::engine::ranking::RankedWords;
use crate::engine::thresholds::Thresholds;
use crate::error::GeneratorError;

/// Which association strengths to keep. Every bound is inclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrengthBand {
    High,
    Moderate,
    Low,
    HighOrModerate,
    ModerateOrLow,
    #[default]
    All,
}

pub const ALL_BANDS: [StrengthBand; 6] = [
    StrengthBand::High,
    StrengthBand::Moderate,
    StrengthBand::Low,
    StrengthBand::HighOrModerate,
    StrengthBand::ModerateOrLow,
    StrengthBand::All,
];

impl StrengthBand {
    /// Menu selector, 1 through 6.
    pub fn from_code(code: u8) -> Result<Self, GeneratorError> {
        match code {
            1..=6 => Ok(ALL_BANDS[code as usize - 1]),
            _ => Err(GeneratorError::InvalidOption(format!(
                "strength selector must be 1-6, got {code}"
            ))),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            StrengthBand::High => 1,
            StrengthBand::Moderate => 2,
            StrengthBand::Low => 3,
            StrengthBand::HighOrModerate => 4,
            StrengthBand::ModerateOrLow => 5,
            StrengthBand::All => 6,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            StrengthBand::High => "high",
            StrengthBand::Moderate => "moderate",
            StrengthBand::Low => "low",
            StrengthBand::HighOrModerate => "high-or-moderate",
            StrengthBand::ModerateOrLow => "moderate-or-low",
            StrengthBand::All => "all",
        }
    }

    pub fn contains(self, score: f64, t: &Thresholds) -> bool {
        match self {
            StrengthBand::High => score >= t.high,
            StrengthBand::HighOrModerate => score >= t.moderate,
            StrengthBand::Moderate => score >= t.moderate && score <= t.high,
            StrengthBand::ModerateOrLow => score >= t.low && score <= t.high,
            StrengthBand::Low => score >= t.low && score <= t.moderate,
            StrengthBand::All => true,
        }
    }

    /// Keep the entries of `ranked` inside this band. Order is preserved.
    pub fn apply(self, ranked: &RankedWords, seed_count: usize) -> RankedWords {
        if self == StrengthBand::All {
            return ranked.clone();
        }
        let t = Thresholds::for_seed_count(seed_count);
        ranked.retain_scores(|score| self.contains(score, &t))
    }
}

impl fmt::Display for StrengthBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrengthBand {
    type Err = GeneratorError;

    /// Accepts either the numeric selector or a band name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(code) = s.parse::<u8>() {
            return Self::from_code(code);
        }
        let normalized = s.to_ascii_lowercase().replace('_', "-");
        ALL_BANDS
            .iter()
            .copied()
            .find(|band| band.name() == normalized)
            .ok_or_else(|| GeneratorError::InvalidOption(format!("unknown strength band '{s}'")))
    }
}
