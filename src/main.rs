mod config;
mod engine;
mod error;
mod generator;
mod logging;
mod ui;

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;

use config::Config;
use engine::filter::StrengthBand;
use generator::lookup::TwinwordClient;
use generator::options::GeneratorOptions;
use generator::themed::ThemedGenerator;
use ui::cli::{Session, write_failures, write_words};

#[derive(Parser)]
#[command(
    name = "themed-words",
    version,
    about = "Generate themed word lists from seed words"
)]
struct Cli {
    #[arg(short, long, help = "Comma-separated seed words (runs once, no prompts)")]
    seeds: Option<String>,

    #[arg(
        short = 'b',
        long,
        help = "Strength band: 1-6 or high, moderate, low, high-or-moderate, moderate-or-low, all"
    )]
    strength: Option<String>,

    #[arg(short = 'n', long, help = "Number of words to sample (0 for all)")]
    count: Option<usize>,

    #[arg(long, help = "Print one random word instead of a list")]
    one: bool,

    #[arg(long, help = "Print results as JSON")]
    json: bool,

    #[arg(long, help = "Path to config file")]
    config: Option<PathBuf>,

    #[arg(long, help = "Write the effective config to the config path and exit")]
    init_config: bool,

    #[arg(short, long, help = "Log debug output to stderr")]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = Config::load_from(&config_path)?;

    if cli.init_config {
        config.save(&config_path)?;
        println!("Wrote {}", config_path.display());
        return Ok(());
    }

    let strength = match &cli.strength {
        Some(s) => s.parse::<StrengthBand>()?,
        None => config.default_strength,
    };
    let sample_size = cli.count.unwrap_or(config.default_sample_size);

    let client = TwinwordClient::from_config(&config);
    if !client.has_api_key() {
        tracing::warn!("no API key configured, every lookup will fail");
    }
    let mut generator = ThemedGenerator::new(client);

    match cli.seeds.as_deref() {
        Some(seeds) => run_once(&mut generator, seeds, strength, sample_size, &cli),
        None => {
            let stdin = io::stdin();
            let styled = io::stdout().is_terminal();
            let mut session = Session::new(stdin.lock(), io::stdout(), generator)
                .with_defaults(strength, sample_size)
                .styled(styled);
            session.run()
        }
    }
}

fn run_once(
    generator: &mut ThemedGenerator<TwinwordClient>,
    seeds: &str,
    strength: StrengthBand,
    sample_size: usize,
    cli: &Cli,
) -> Result<()> {
    let options = GeneratorOptions::from_input(seeds, strength, sample_size);
    if options.seed_words.is_empty() {
        bail!("no seed words given");
    }
    let seed_count = options.seed_count();
    generator.set_options(options);

    let mut stdout = io::stdout().lock();
    let styled = !cli.json && io::stdout().is_terminal();

    if cli.one {
        let pick = generator.generate_one_random();
        write_failures(&mut io::stderr(), generator.failed_seeds(), false)?;
        let pick = pick?;
        if cli.json {
            writeln!(stdout, "{}", serde_json::to_string_pretty(&pick)?)?;
        } else {
            writeln!(stdout, "{}", pick.word)?;
        }
        return Ok(());
    }

    let words = generator.generate();
    write_failures(&mut io::stderr(), generator.failed_seeds(), false)?;
    let words = words?;
    if cli.json {
        writeln!(stdout, "{}", serde_json::to_string_pretty(&words)?)?;
    } else {
        write_words(&mut stdout, &words, seed_count, styled)?;
    }
    Ok(())
}
