use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg32;

use crate::{
    config::{ConfigError, EvolutionConfig},
    fitness::FitnessEvaluator,
    genome::Genome,
    population::{Individual, Population},
    selection::TournamentSelector,
    variation::{BitFlipMutation, TwoPointCrossover},
};

/// Commands the control surface forwards to the engine.
///
/// Commands are applied in the order they arrive within a polling pass; no
/// fixed priority is imposed between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Perform exactly one generational transition.
    Advance,
    /// Replace the target with a fresh random genome.
    Retarget,
    /// Flip between stepping and continuous play.
    TogglePlay,
}

/// Observability record produced by each completed generational transition.
#[derive(Debug, Clone, Copy)]
pub struct GenerationSummary {
    /// Number of the generation that was just evaluated and replaced.
    pub generation: u64,
    /// Best-scoring individual of that generation, ties broken by
    /// first-encountered order.
    pub best: Genome,
    /// Fitness of `best` against the target it was scored on.
    pub best_fitness: u32,
    /// Whether this transition triggered an implicit retarget (auto-play
    /// only).
    pub retargeted: bool,
}

/// Generational evolution engine.
///
/// Owns the population, the target, and a single seedable PRNG that feeds
/// every random decision (initial sampling, tournament draws, cut points,
/// bit flips). One call to [`advance`](Self::advance) performs exactly one
/// full transition — evaluate, select, cross over, mutate, replace — with no
/// embedded delay; pacing belongs to the caller's event loop.
#[derive(Debug)]
pub struct EvolutionEngine {
    config: EvolutionConfig,
    evaluator: Box<dyn FitnessEvaluator>,
    selector: TournamentSelector,
    crossover: TwoPointCrossover,
    mutation: BitFlipMutation,
    rng: Pcg32,
    population: Population,
    target: Genome,
    generation: u64,
    playing: bool,
}

impl EvolutionEngine {
    /// Creates an engine seeded from the OS random source.
    pub fn new(
        config: EvolutionConfig,
        evaluator: Box<dyn FitnessEvaluator>,
    ) -> Result<Self, ConfigError> {
        Self::from_rng(config, evaluator, Pcg32::from_os_rng())
    }

    /// Creates an engine with a fixed seed for reproducible runs.
    pub fn with_seed(
        config: EvolutionConfig,
        evaluator: Box<dyn FitnessEvaluator>,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        Self::from_rng(config, evaluator, Pcg32::seed_from_u64(seed))
    }

    fn from_rng(
        config: EvolutionConfig,
        evaluator: Box<dyn FitnessEvaluator>,
        mut rng: Pcg32,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let population = Population::random(config.population_size, &mut rng);
        let target = Genome::random(&mut rng);
        Ok(Self {
            config,
            evaluator,
            selector: TournamentSelector::new(config.tournament_size),
            crossover: TwoPointCrossover,
            mutation: BitFlipMutation::new(config.bit_flip_probability),
            rng,
            population,
            target,
            generation: 1,
            playing: false,
        })
    }

    /// Applies one command.
    ///
    /// Returns the transition summary when the command caused a generational
    /// transition (`Advance` only).
    pub fn apply(&mut self, command: Command) -> Option<GenerationSummary> {
        match command {
            Command::Advance => Some(self.advance()),
            Command::Retarget => {
                self.retarget();
                None
            }
            Command::TogglePlay => {
                self.playing = !self.playing;
                None
            }
        }
    }

    /// Replaces the target with a fresh random genome.
    ///
    /// Every fitness score is relative to the target, so all individuals are
    /// invalidated and re-evaluated on the next transition.
    pub fn retarget(&mut self) {
        self.target = Genome::random(&mut self.rng);
        self.population.invalidate_all();
    }

    /// Performs one tick of continuous play.
    ///
    /// Advances one generation if the engine is playing, and issues an
    /// implicit retarget whenever the generation counter reaches a multiple
    /// of the configured interval. Returns `None` while idle.
    pub fn tick(&mut self) -> Option<GenerationSummary> {
        if !self.playing {
            return None;
        }
        let mut summary = self.advance();
        if self.generation % self.config.retarget_interval == 0 {
            self.retarget();
            summary.retargeted = true;
        }
        Some(summary)
    }

    /// Performs exactly one generational transition.
    ///
    /// 1. Score every individual whose fitness is stale.
    /// 2. Record the best individual of the outgoing generation.
    /// 3. Tournament-select a full-size set of independent copies.
    /// 4. Cross over each adjacent pair with probability CXPB.
    /// 5. Attempt mutation on each individual with probability MUTPB.
    /// 6. Replace the population and increment the generation counter.
    pub fn advance(&mut self) -> GenerationSummary {
        self.population.evaluate(self.target, &*self.evaluator);
        let best = self.population.best();
        let summary = GenerationSummary {
            generation: self.generation,
            best: best.genome(),
            best_fitness: best.fitness().expect("best is evaluated"),
            retargeted: false,
        };

        let mut children = self.selector.select(
            self.population.individuals(),
            self.population.len(),
            &mut self.rng,
        );

        for pair in children.chunks_exact_mut(2) {
            if self.rng.random_bool(self.config.crossover_probability) {
                let (a, b) =
                    self.crossover
                        .recombine(pair[0].genome(), pair[1].genome(), &mut self.rng);
                pair[0] = Individual::new(a);
                pair[1] = Individual::new(b);
            }
        }

        for child in &mut children {
            if self.rng.random_bool(self.config.mutation_probability) {
                // An attempted mutation invalidates fitness even when no bit
                // flips, matching the reference behaviour.
                *child = Individual::new(self.mutation.mutate(child.genome(), &mut self.rng));
            }
        }

        self.population = Population::from_individuals(children);
        self.generation += 1;
        summary
    }

    /// Returns the current population as a read-only snapshot.
    #[must_use]
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Returns the genome individuals are being evolved toward.
    #[must_use]
    pub fn target(&self) -> Genome {
        self.target
    }

    /// Returns the current generation number (starts at 1).
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns `true` while continuous play is active.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Returns the validated configuration.
    #[must_use]
    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::fitness::{BitMatchEvaluator, MAX_FITNESS};

    use super::*;

    fn engine_with(config: EvolutionConfig, seed: u64) -> EvolutionEngine {
        EvolutionEngine::with_seed(config, Box::new(BitMatchEvaluator), seed).unwrap()
    }

    fn engine(seed: u64) -> EvolutionEngine {
        engine_with(EvolutionConfig::default(), seed)
    }

    fn genome_values(engine: &EvolutionEngine) -> HashSet<u32> {
        engine
            .population()
            .individuals()
            .iter()
            .map(|ind| ind.genome().value())
            .collect()
    }

    #[test]
    fn test_initial_state() {
        let engine = engine(100);
        assert_eq!(engine.generation(), 1);
        assert!(!engine.is_playing());
        assert_eq!(engine.population().len(), 32);
        assert!(!engine.population().is_fully_evaluated());
    }

    #[test]
    fn test_invalid_config_is_rejected_at_construction() {
        let config = EvolutionConfig {
            population_size: 3,
            ..EvolutionConfig::default()
        };
        let result = EvolutionEngine::with_seed(config, Box::new(BitMatchEvaluator), 100);
        assert!(result.is_err());
    }

    #[test]
    fn test_population_size_is_invariant_across_transitions() {
        let mut engine = engine(101);
        for _ in 0..50 {
            engine.advance();
            assert_eq!(engine.population().len(), 32);
        }
    }

    #[test]
    fn test_generation_increments_once_per_transition() {
        let mut engine = engine(102);
        for expected in 1..=20 {
            let summary = engine.advance();
            assert_eq!(summary.generation, expected);
            assert_eq!(engine.generation(), expected + 1);
        }
    }

    #[test]
    fn test_selection_only_run_never_invents_bit_patterns() {
        let config = EvolutionConfig {
            crossover_probability: 0.0,
            mutation_probability: 0.0,
            ..EvolutionConfig::default()
        };
        let mut engine = engine_with(config, 103);
        for _ in 0..100 {
            let before = genome_values(&engine);
            engine.advance();
            let after = genome_values(&engine);
            assert!(
                after.is_subset(&before),
                "selection-only transition must only clone existing genomes"
            );
            // Untouched clones keep their valid fitness.
            assert!(engine.population().is_fully_evaluated());
        }
    }

    #[test]
    fn test_retarget_invalidates_every_score() {
        let mut engine = engine(104);
        engine.advance();
        let old_target = engine.target();

        engine.retarget();
        assert_ne!(engine.target(), old_target);
        assert!(
            engine
                .population()
                .individuals()
                .iter()
                .all(|ind| ind.fitness().is_none())
        );
    }

    #[test]
    fn test_transition_after_retarget_scores_against_new_target() {
        let config = EvolutionConfig {
            crossover_probability: 0.0,
            mutation_probability: 0.0,
            ..EvolutionConfig::default()
        };
        let mut engine = engine_with(config, 105);
        engine.advance();
        engine.retarget();
        let target = engine.target();

        let summary = engine.advance();
        assert_eq!(summary.best_fitness, summary.best.matching_bits(target));
        assert!(summary.best_fitness <= MAX_FITNESS);
    }

    #[test]
    fn test_tick_is_a_no_op_while_idle() {
        let mut engine = engine(106);
        assert!(engine.tick().is_none());
        assert_eq!(engine.generation(), 1);
    }

    #[test]
    fn test_toggle_play_flips_state() {
        let mut engine = engine(107);
        assert!(engine.apply(Command::TogglePlay).is_none());
        assert!(engine.is_playing());
        assert!(engine.apply(Command::TogglePlay).is_none());
        assert!(!engine.is_playing());
    }

    #[test]
    fn test_exactly_one_implicit_retarget_in_first_64_playing_ticks() {
        let mut engine = engine(108);
        engine.apply(Command::TogglePlay);
        let retargets: usize = (0..64)
            .map(|_| usize::from(engine.tick().expect("playing").retargeted))
            .sum();
        assert_eq!(retargets, 1);
    }

    #[test]
    fn test_implicit_retarget_recurs_every_interval() {
        let config = EvolutionConfig {
            retarget_interval: 8,
            ..EvolutionConfig::default()
        };
        let mut engine = engine_with(config, 109);
        engine.apply(Command::TogglePlay);
        let retargets: usize = (0..32)
            .map(|_| usize::from(engine.tick().expect("playing").retargeted))
            .sum();
        assert_eq!(retargets, 4);
    }

    #[test]
    fn test_apply_advance_returns_summary() {
        let mut engine = engine(110);
        let summary = engine.apply(Command::Advance).expect("advance transitions");
        assert_eq!(summary.generation, 1);
        assert!(!summary.retargeted);
    }

    #[test]
    fn test_apply_retarget_replaces_target() {
        let mut engine = engine(111);
        let old_target = engine.target();
        assert!(engine.apply(Command::Retarget).is_none());
        assert_ne!(engine.target(), old_target);
    }

    #[test]
    fn test_identical_seeds_produce_identical_runs() {
        let mut a = engine(112);
        let mut b = engine(112);
        assert_eq!(a.target(), b.target());
        for _ in 0..20 {
            let sa = a.advance();
            let sb = b.advance();
            assert_eq!(sa.best, sb.best);
            assert_eq!(sa.best_fitness, sb.best_fitness);
        }
        assert_eq!(genome_values(&a), genome_values(&b));
    }

    #[test]
    fn test_best_fitness_never_exceeds_max() {
        let mut engine = engine(113);
        for _ in 0..30 {
            let summary = engine.advance();
            assert!(summary.best_fitness <= MAX_FITNESS);
        }
    }
}
