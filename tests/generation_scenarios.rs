use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use rand::SeedableRng;
use rand::rngs::SmallRng;

use themed_words::engine::filter::{ALL_BANDS, StrengthBand};
use themed_words::engine::ranking::RankedWords;
use themed_words::engine::thresholds::{Strength, Thresholds};
use themed_words::error::{GeneratorError, LookupError};
use themed_words::generator::associations::combine_associations;
use themed_words::generator::options::GeneratorOptions;
use themed_words::generator::themed::ThemedGenerator;
use themed_words::generator::{AssociationLookup, Associations};

/// Canned lookup that records which words were requested.
struct ScriptedLookup {
    responses: HashMap<&'static str, Associations>,
    requested: RefCell<Vec<String>>,
}

impl ScriptedLookup {
    fn new() -> Self {
        Self {
            responses: HashMap::new(),
            requested: RefCell::new(Vec::new()),
        }
    }

    fn with(mut self, seed: &'static str, pairs: &[(&str, f64)]) -> Self {
        self.responses.insert(seed, assoc(pairs));
        self
    }

    fn call_count(&self) -> usize {
        self.requested.borrow().len()
    }
}

impl AssociationLookup for ScriptedLookup {
    fn lookup(&self, word: &str) -> Result<Associations, LookupError> {
        self.requested.borrow_mut().push(word.to_string());
        self.responses
            .get(word)
            .cloned()
            .ok_or_else(|| LookupError::Transport("connection refused".to_string()))
    }
}

fn assoc(pairs: &[(&str, f64)]) -> Associations {
    pairs.iter().map(|(w, s)| (w.to_string(), *s)).collect()
}

fn options(seeds: &[&str], strength: StrengthBand, k: usize) -> GeneratorOptions {
    GeneratorOptions::new(seeds.iter().map(|s| s.to_string()).collect(), strength, k)
}

fn as_pairs(words: &RankedWords) -> Vec<(&str, f64)> {
    words.iter().map(|e| (e.word.as_str(), e.score)).collect()
}

fn seeded<L: AssociationLookup>(lookup: L) -> ThemedGenerator<L> {
    ThemedGenerator::with_rng(lookup, SmallRng::seed_from_u64(0xA551))
}

#[test]
fn single_seed_all_band_returns_everything_sorted() {
    let lookup = ScriptedLookup::new().with(
        "apple",
        &[("core", 120.0), ("pie", 90.0), ("juice", 40.0)],
    );
    let mut generator = seeded(lookup);
    generator.set_options(options(&["apple"], StrengthBand::All, 0));

    let words = generator.generate().unwrap();
    assert_eq!(as_pairs(&words), vec![("core", 120.0), ("pie", 90.0), ("juice", 40.0)]);
}

#[test]
fn two_seeds_merge_and_high_filter() {
    let lookup = ScriptedLookup::new()
        .with("apple", &[("core", 130.0)])
        .with("fruit", &[("core", 20.0), ("juice", 15.0)]);
    let mut generator = seeded(lookup);

    generator.set_options(options(&["apple", "fruit"], StrengthBand::All, 0));
    let all = generator.generate().unwrap();
    assert_eq!(as_pairs(&all), vec![("core", 150.0), ("juice", 15.0)]);

    generator.set_options(options(&["apple", "fruit"], StrengthBand::High, 0));
    let high = generator.generate().unwrap();
    assert_eq!(as_pairs(&high), vec![("core", 150.0)]);
}

#[test]
fn one_failed_seed_does_not_sink_the_rest() {
    let lookup = ScriptedLookup::new().with("fruit", &[("juice", 15.0), ("pulp", 8.0)]);
    let mut generator = seeded(lookup);
    generator.set_options(options(&["unreachable", "fruit"], StrengthBand::All, 0));

    let words = generator.generate().unwrap();
    assert_eq!(as_pairs(&words), vec![("juice", 15.0), ("pulp", 8.0)]);

    let failures = generator.failed_seeds();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].seed, "unreachable");
    assert!(matches!(failures[0].error, LookupError::Transport(_)));
}

#[test]
fn changing_only_the_band_reuses_the_cached_merge() {
    let lookup = ScriptedLookup::new()
        .with("sea", &[("wave", 140.0), ("salt", 95.0), ("sand", 70.0)])
        .with("ship", &[("sail", 110.0), ("wave", 5.0)]);
    let mut generator = seeded(lookup);

    generator.set_options(options(&["sea", "ship"], StrengthBand::High, 0));
    generator.generate().unwrap();
    assert_eq!(generator.lookup().call_count(), 2);

    for band in ALL_BANDS {
        for k in [0, 1, 2, 50] {
            generator.set_options(options(&["sea", "ship"], band, k));
            generator.generate().unwrap();
        }
    }
    assert_eq!(generator.lookup().call_count(), 2);
    assert_eq!(*generator.lookup().requested.borrow(), vec!["sea", "ship"]);

    generator.set_options(options(&["ship"], StrengthBand::All, 0));
    generator.generate().unwrap();
    assert_eq!(generator.lookup().call_count(), 3);
}

#[test]
fn not_configured_before_options() {
    let mut generator = seeded(ScriptedLookup::new());
    assert_eq!(generator.generate(), Err(GeneratorError::NotConfigured));
}

#[test]
fn random_pick_comes_from_filtered_result() {
    let lookup = ScriptedLookup::new().with(
        "apple",
        &[("core", 120.0), ("pie", 90.0), ("juice", 40.0)],
    );
    let mut generator = seeded(lookup);
    generator.set_options(options(&["apple"], StrengthBand::HighOrModerate, 0));

    let allowed: HashSet<&str> = ["core", "pie"].into_iter().collect();
    for _ in 0..50 {
        let pick = generator.generate_one_random().unwrap();
        assert!(allowed.contains(pick.word.as_str()), "{pick:?}");
    }
    assert_eq!(generator.lookup().call_count(), 1);
}

#[test]
fn sample_sizes_are_bounded_and_distinct() {
    let pairs: Vec<(String, f64)> = (0..30)
        .map(|i| (format!("word{i}"), 200.0 - i as f64))
        .collect();
    let borrowed: Vec<(&str, f64)> = pairs.iter().map(|(w, s)| (w.as_str(), *s)).collect();
    let lookup = ScriptedLookup::new().with("theme", &borrowed);
    let mut generator = seeded(lookup);

    generator.set_options(options(&["theme"], StrengthBand::All, 0));
    let full = generator.generate().unwrap();
    assert_eq!(full.len(), 30);

    generator.set_options(options(&["theme"], StrengthBand::All, 30));
    assert_eq!(generator.generate().unwrap(), full);

    generator.set_options(options(&["theme"], StrengthBand::All, 31));
    assert_eq!(generator.generate().unwrap(), full);

    generator.set_options(options(&["theme"], StrengthBand::All, 7));
    let sample = generator.generate().unwrap();
    let unique: HashSet<&str> = sample.iter().map(|e| e.word.as_str()).collect();
    assert_eq!(unique.len(), 7);
    for entry in &sample {
        assert!(full.iter().any(|e| e == entry), "{entry:?} not drawn from the list");
    }
}

#[test]
fn tiers_partition_scores_at_or_above_low() {
    for n in 0..6 {
        let t = Thresholds::for_seed_count(n);
        let scores = [
            t.high + 1.0,
            t.high,
            (t.high + t.moderate) / 2.0,
            t.moderate,
            (t.moderate + t.low) / 2.0,
            t.low,
        ];
        for score in scores {
            let tier = t.classify(score).expect("score at or above low has a tier");
            let in_high = StrengthBand::High.contains(score, &t);
            let in_moderate = StrengthBand::Moderate.contains(score, &t) && score < t.high;
            let in_low = StrengthBand::Low.contains(score, &t) && score < t.moderate;
            assert_eq!([in_high, in_moderate, in_low].iter().filter(|b| **b).count(), 1);
            match tier {
                Strength::High => assert!(in_high),
                Strength::Moderate => assert!(in_moderate),
                Strength::Low => assert!(in_low),
            }
        }
        assert_eq!(t.classify(t.low - 0.01), None);
    }
}

#[test]
fn combine_is_order_independent() {
    let a = assoc(&[("core", 1.25), ("tree", 4.0)]);
    let b = assoc(&[("core", 2.0), ("seed", 3.5)]);

    let mut ab = a.clone();
    combine_associations(&mut ab, &b);
    let mut ba = b.clone();
    combine_associations(&mut ba, &a);

    assert_eq!(ab, ba);
    assert_eq!(ab, assoc(&[("core", 3.25), ("tree", 4.0), ("seed", 3.5)]));
}
