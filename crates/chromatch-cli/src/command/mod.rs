use clap::{Parser, Subcommand};
use rand::Rng as _;

use chromatch_engine::{BitMatchEvaluator, EvolutionConfig, EvolutionEngine};

mod run;
mod watch;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Watch evolution interactively in the terminal
    Watch(#[clap(flatten)] watch::WatchArg),
    /// Evolve against a single target without a UI
    Run(#[clap(flatten)] run::RunArg),
}

/// Evolution parameters shared by all modes.
#[derive(Debug, Clone, clap::Args)]
pub(crate) struct GaArg {
    /// Seed for the random source (drawn from OS entropy if omitted)
    #[clap(long)]
    seed: Option<u64>,
    /// Number of individuals per generation (must be even)
    #[clap(long, default_value_t = 32)]
    population_size: usize,
    /// Entrants per selection tournament
    #[clap(long, default_value_t = 3)]
    tournament_size: usize,
    /// Per-pair crossover probability (CXPB)
    #[clap(long, default_value_t = 0.5)]
    crossover_probability: f64,
    /// Per-individual mutation attempt probability (MUTPB)
    #[clap(long, default_value_t = 0.2)]
    mutation_probability: f64,
    /// Per-bit flip probability within an attempted mutation
    #[clap(long, default_value_t = 0.05)]
    bit_flip_probability: f64,
    /// Generations between implicit retargets during auto-play
    #[clap(long, default_value_t = 64)]
    retarget_interval: u64,
}

impl Default for GaArg {
    fn default() -> Self {
        let config = EvolutionConfig::default();
        Self {
            seed: None,
            population_size: config.population_size,
            tournament_size: config.tournament_size,
            crossover_probability: config.crossover_probability,
            mutation_probability: config.mutation_probability,
            bit_flip_probability: config.bit_flip_probability,
            retarget_interval: config.retarget_interval,
        }
    }
}

impl GaArg {
    /// Validates the parameters and builds a seeded engine.
    pub(crate) fn build_engine(&self) -> anyhow::Result<EvolutionEngine> {
        let config = EvolutionConfig {
            population_size: self.population_size,
            tournament_size: self.tournament_size,
            crossover_probability: self.crossover_probability,
            mutation_probability: self.mutation_probability,
            bit_flip_probability: self.bit_flip_probability,
            retarget_interval: self.retarget_interval,
        };
        let seed = self.seed.unwrap_or_else(|| rand::rng().random());
        let engine = EvolutionEngine::with_seed(config, Box::new(BitMatchEvaluator), seed)?;
        Ok(engine)
    }
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Watch(watch::WatchArg::default())) {
        Mode::Watch(arg) => watch::run(&arg)?,
        Mode::Run(arg) => run::run(&arg)?,
    }
    Ok(())
}
