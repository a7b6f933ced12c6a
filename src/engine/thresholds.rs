/// Score cut-offs for association strength, scaled by how many seed words
/// were merged. More seeds means summed scores run higher, so the bars rise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Thresholds {
    pub high: f64,
    pub moderate: f64,
    pub low: f64,
}

/// Non-overlapping strength tier of a single score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strength {
    High,
    Moderate,
    Low,
}

impl Strength {
    pub fn label(self) -> &'static str {
        match self {
            Strength::High => "high",
            Strength::Moderate => "moderate",
            Strength::Low => "low",
        }
    }
}

impl Thresholds {
    pub fn for_seed_count(n: usize) -> Self {
        let n = n as f64;
        Self {
            high: 100.0 + 10.0 * n,
            moderate: 80.0 + 5.0 * n,
            low: 60.0 + 3.0 * n,
        }
    }

    /// Tier a score falls into. Each boundary belongs to the higher tier;
    /// anything under `low` has no tier.
    pub fn classify(&self, score: f64) -> Option<Strength> {
        if score >= self.high {
            Some(Strength::High)
        } else if score >= self.moderate {
            Some(Strength::Moderate)
        } else if score >= self.low {
            Some(Strength::Low)
        } else {
            None
        }
    }
}
