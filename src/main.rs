use anyhow::Context;
use clap::Parser;
use mpevolve::config::{AppConfig, ConfigManager};
use mpevolve::engines::generation::genome::parse_digits;
use mpevolve::engines::generation::{ConsoleProgressCallback, EvolutionEngine};
use mpevolve::Individual;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mpevolve")]
#[command(author, version, about = "Evolve numbers with high multiplicative persistence", long_about = None)]
struct Cli {
    /// Seed for a reproducible run
    #[arg(short, long, allow_negative_numbers = true)]
    seed: Option<i64>,

    /// TOML file with an [evolution] section
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of digits in the founder
    #[arg(long)]
    starting_length: Option<usize>,

    /// Individuals per generation
    #[arg(short, long)]
    population_size: Option<usize>,

    /// Individuals kept after each selection
    #[arg(long)]
    survivors: Option<usize>,

    /// Number of generations
    #[arg(short, long)]
    iterations: Option<usize>,

    /// Per-digit point mutation probability
    #[arg(long)]
    point_rate: Option<f64>,

    /// Per-digit insertion/deletion probability
    #[arg(long)]
    indel_rate: Option<f64>,

    /// Also print a JSON summary of the run
    #[arg(long)]
    json: bool,

    /// Write the effective configuration as TOML and exit
    #[arg(long)]
    write_config: Option<PathBuf>,

    /// Print the breakdown of a given number and exit
    #[arg(long, value_name = "DIGITS")]
    explain: Option<String>,
}

impl Cli {
    fn apply(&self, config: &mut AppConfig) {
        let evolution = &mut config.evolution;
        if let Some(seed) = self.seed {
            evolution.seed = Some(seed);
        }
        if let Some(length) = self.starting_length {
            evolution.starting_length = length;
        }
        if let Some(size) = self.population_size {
            evolution.population_size = size;
        }
        if let Some(survivors) = self.survivors {
            evolution.survivor_count = survivors;
        }
        if let Some(iterations) = self.iterations {
            evolution.num_iterations = iterations;
        }
        if let Some(rate) = self.point_rate {
            evolution.point_mutation_rate = rate;
        }
        if let Some(rate) = self.indel_rate {
            evolution.indel_mutation_rate = rate;
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if let Some(digits) = &cli.explain {
        let genome = parse_digits(digits)
            .filter(|genome| !genome.is_empty())
            .ok_or_else(|| anyhow::anyhow!("'{}' is not a decimal number", digits))?;
        let individual = Individual::new(genome);
        println!("{}", individual);
        println!("{}", individual.breakdown());
        return Ok(());
    }

    let mut manager =
        ConfigManager::load_unvalidated(cli.config.as_deref()).context("loading configuration")?;
    manager
        .update(|config| cli.apply(config))
        .context("applying command-line overrides")?;

    if let Some(path) = &cli.write_config {
        manager
            .save_to_file(path)
            .with_context(|| format!("writing {}", path.display()))?;
        log::info!("Configuration written to {}", path.display());
        return Ok(());
    }

    let mut engine = EvolutionEngine::new(manager.get().evolution)?;
    let summary = engine.run(ConsoleProgressCallback)?;

    if cli.json {
        println!("{}", summary.to_json()?);
    }

    Ok(())
}
