use std::io::{BufRead, Write};

use anyhow::Result;
use crossterm::style::Stylize;

use crate::engine::filter::{ALL_BANDS, StrengthBand};
use crate::engine::ranking::{RankedWords, ScoredWord};
use crate::engine::thresholds::{Strength, Thresholds};
use crate::generator::AssociationLookup;
use crate::generator::options::{GeneratorOptions, parse_seed_words};
use crate::generator::themed::{SeedFailure, ThemedGenerator};

const SEED_PROMPT: &str = "Enter the list of seed words (separated by commas): ";
const MENU_PROMPT: &str = "[f] refilter  [r] random word  [s] new seed words  [q] quit: ";

/// Interactive prompt/response loop around a [`ThemedGenerator`].
pub struct Session<R, W, L> {
    input: R,
    output: W,
    generator: ThemedGenerator<L>,
    default_strength: StrengthBand,
    default_sample_size: usize,
    styled: bool,
    /// Fetch whose failures have already been printed.
    reported_fetch: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MenuChoice {
    Refilter,
    Random,
    NewSeeds,
    Quit,
}

impl<R: BufRead, W: Write, L: AssociationLookup> Session<R, W, L> {
    pub fn new(input: R, output: W, generator: ThemedGenerator<L>) -> Self {
        Self {
            input,
            output,
            generator,
            default_strength: StrengthBand::All,
            default_sample_size: 0,
            styled: false,
            reported_fetch: 0,
        }
    }

    pub fn with_defaults(mut self, strength: StrengthBand, sample_size: usize) -> Self {
        self.default_strength = strength;
        self.default_sample_size = sample_size;
        self
    }

    pub fn styled(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    pub fn generator(&self) -> &ThemedGenerator<L> {
        &self.generator
    }

    pub fn run(&mut self) -> Result<()> {
        let Some(seeds) = self.prompt_seeds()? else {
            return Ok(());
        };
        if !self.configure(seeds)? {
            return Ok(());
        }
        self.show_list()?;

        loop {
            let Some(choice) = self.prompt_menu()? else {
                return Ok(());
            };
            match choice {
                MenuChoice::Quit => return Ok(()),
                MenuChoice::Random => self.show_random()?,
                MenuChoice::Refilter => {
                    let seeds = self
                        .generator
                        .options()
                        .map(|o| o.seed_words.clone())
                        .unwrap_or_default();
                    if !self.configure(seeds)? {
                        return Ok(());
                    }
                    self.show_list()?;
                }
                MenuChoice::NewSeeds => {
                    let Some(seeds) = self.prompt_seeds()? else {
                        return Ok(());
                    };
                    if !self.configure(seeds)? {
                        return Ok(());
                    }
                    self.show_list()?;
                }
            }
        }
    }

    /// Ask for strength and sample size, then hand the options over.
    /// Returns false if input ran out.
    fn configure(&mut self, seeds: Vec<String>) -> Result<bool> {
        let Some(strength) = self.prompt_strength()? else {
            return Ok(false);
        };
        let Some(sample_size) = self.prompt_sample_size()? else {
            return Ok(false);
        };
        self.generator
            .set_options(GeneratorOptions::new(seeds, strength, sample_size));
        Ok(true)
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt_seeds(&mut self) -> Result<Option<Vec<String>>> {
        loop {
            let Some(line) = self.read_line(SEED_PROMPT)? else {
                return Ok(None);
            };
            let seeds = parse_seed_words(&line);
            if !seeds.is_empty() {
                return Ok(Some(seeds));
            }
            self.notice("Please enter at least one seed word.")?;
        }
    }

    fn prompt_strength(&mut self) -> Result<Option<StrengthBand>> {
        writeln!(self.output, "Association strength:")?;
        for band in ALL_BANDS {
            writeln!(self.output, "  {}) {}", band.code(), band)?;
        }
        let prompt = format!("Choose 1-6 [{}]: ", self.default_strength.code());
        loop {
            let Some(line) = self.read_line(&prompt)? else {
                return Ok(None);
            };
            if line.is_empty() {
                return Ok(Some(self.default_strength));
            }
            match line.parse::<StrengthBand>() {
                Ok(band) => return Ok(Some(band)),
                Err(e) => self.notice(&e.to_string())?,
            }
        }
    }

    fn prompt_sample_size(&mut self) -> Result<Option<usize>> {
        let prompt = format!(
            "How many words (0 for all) [{}]: ",
            self.default_sample_size
        );
        loop {
            let Some(line) = self.read_line(&prompt)? else {
                return Ok(None);
            };
            if line.is_empty() {
                return Ok(Some(self.default_sample_size));
            }
            match line.parse::<usize>() {
                Ok(n) => return Ok(Some(n)),
                Err(_) => self.notice("Please enter a non-negative whole number.")?,
            }
        }
    }

    fn prompt_menu(&mut self) -> Result<Option<MenuChoice>> {
        loop {
            let Some(line) = self.read_line(MENU_PROMPT)? else {
                return Ok(None);
            };
            let choice = match line.to_ascii_lowercase().as_str() {
                "f" => MenuChoice::Refilter,
                "r" => MenuChoice::Random,
                "s" => MenuChoice::NewSeeds,
                "q" => MenuChoice::Quit,
                _ => {
                    self.notice("Unknown choice.")?;
                    continue;
                }
            };
            return Ok(Some(choice));
        }
    }

    fn show_list(&mut self) -> Result<()> {
        let result = self.generator.generate();
        self.report_failures()?;
        match result {
            Ok(words) => {
                let seed_count = self.seed_count();
                write_words(&mut self.output, &words, seed_count, self.styled)?;
            }
            Err(e) => self.notice(&format!("error: {e}"))?,
        }
        Ok(())
    }

    fn show_random(&mut self) -> Result<()> {
        let result = self.generator.generate_one_random();
        self.report_failures()?;
        match result {
            Ok(pick) => {
                let t = Thresholds::for_seed_count(self.seed_count());
                write_row(&mut self.output, &pick, &t, self.styled)?;
            }
            Err(e) => self.notice(&format!("error: {e}"))?,
        }
        Ok(())
    }

    fn seed_count(&self) -> usize {
        self.generator.options().map_or(0, GeneratorOptions::seed_count)
    }

    /// Warn about failed seeds once per lookup, not on every refilter.
    fn report_failures(&mut self) -> Result<()> {
        let fetch = self.generator.fetch_count();
        if fetch == self.reported_fetch {
            return Ok(());
        }
        self.reported_fetch = fetch;
        let failures = self.generator.failed_seeds().to_vec();
        write_failures(&mut self.output, &failures, self.styled)
    }

    fn notice(&mut self, message: &str) -> Result<()> {
        if self.styled {
            writeln!(self.output, "{}", message.yellow())?;
        } else {
            writeln!(self.output, "{message}")?;
        }
        Ok(())
    }
}

pub fn write_failures<W: Write>(out: &mut W, failures: &[SeedFailure], styled: bool) -> Result<()> {
    for failure in failures {
        let line = format!(
            "warning: no associations for '{}' ({})",
            failure.seed, failure.error
        );
        if styled {
            writeln!(out, "{}", line.yellow())?;
        } else {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}

/// Print one row per word with its score and strength tier.
pub fn write_words<W: Write>(
    out: &mut W,
    words: &RankedWords,
    seed_count: usize,
    styled: bool,
) -> Result<()> {
    if words.is_empty() {
        writeln!(out, "No words matched.")?;
        return Ok(());
    }
    let t = Thresholds::for_seed_count(seed_count);
    for entry in words {
        write_row(out, entry, &t, styled)?;
    }
    writeln!(out, "{} word(s)", words.len())?;
    Ok(())
}

fn write_row<W: Write>(
    out: &mut W,
    entry: &ScoredWord,
    t: &Thresholds,
    styled: bool,
) -> Result<()> {
    let tier = t.classify(entry.score);
    let label = tier.map_or("-", Strength::label);
    let word = format!("{:<24}", entry.word);
    if !styled {
        writeln!(out, "{word} {:>8.2}  {label}", entry.score)?;
        return Ok(());
    }
    let word = match tier {
        Some(Strength::High) => word.green().bold(),
        Some(Strength::Moderate) => word.cyan(),
        Some(Strength::Low) => word.white(),
        None => word.dark_grey(),
    };
    writeln!(out, "{word} {:>8.2}  {}", entry.score, label.dark_grey())?;
    Ok(())
}
