//! Generational genetic algorithm evolving 24-bit colour genomes toward a
//! hidden target.
//!
//! The engine is a pure, single-threaded computation over in-memory values:
//! no I/O, no clocks, no background threads. Presentation and pacing live in
//! the caller, which forwards commands ([`Command`]) and renders read-only
//! snapshots of the population and target.
//!
//! # Generational cycle
//!
//! Each transition performs, to completion and in order:
//!
//! 1. **Evaluate** - score every individual with a stale fitness against the
//!    current target ([`FitnessEvaluator`])
//! 2. **Select** - tournament-select a full-size set of independent copies
//!    ([`TournamentSelector`])
//! 3. **Cross over** - two-point crossover on adjacent pairs, per-pair
//!    probability CXPB ([`TwoPointCrossover`])
//! 4. **Mutate** - per-bit flips, attempted per individual with probability
//!    MUTPB ([`BitFlipMutation`])
//! 5. **Replace** - the children become the population; the generation
//!    counter increments
//!
//! All randomness flows through one seedable PRNG owned by the engine, so a
//! fixed seed reproduces an entire run.

pub use self::{
    config::{ConfigError, EvolutionConfig},
    engine::{Command, EvolutionEngine, GenerationSummary},
    fitness::{BitMatchEvaluator, FitnessEvaluator, MAX_FITNESS},
    genome::{GENOME_BITS, Genome},
    population::{Individual, Population},
    selection::TournamentSelector,
    variation::{BitFlipMutation, TwoPointCrossover, swap_segment},
};

pub mod config;
pub mod engine;
pub mod fitness;
pub mod genome;
pub mod population;
pub mod selection;
pub mod variation;
