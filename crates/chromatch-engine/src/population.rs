use rand::Rng;

use crate::{fitness::FitnessEvaluator, genome::Genome};

/// A genome paired with its (possibly stale) fitness score.
///
/// Fitness is always relative to the current target, so it is stored as an
/// explicitly invalidated `Option`: `None` means the score must be recomputed
/// before the individual takes part in selection. Variation operators and
/// target replacement both invalidate the score.
#[derive(Debug, Clone, Copy)]
pub struct Individual {
    genome: Genome,
    fitness: Option<u32>,
}

impl Individual {
    /// Wraps a genome with no fitness score yet.
    #[must_use]
    pub const fn new(genome: Genome) -> Self {
        Self {
            genome,
            fitness: None,
        }
    }

    /// Creates an individual with a uniformly random genome.
    pub fn random<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        Self::new(Genome::random(rng))
    }

    /// Returns the genome.
    #[must_use]
    pub const fn genome(&self) -> Genome {
        self.genome
    }

    /// Returns the fitness score, or `None` if it has been invalidated.
    #[must_use]
    pub const fn fitness(&self) -> Option<u32> {
        self.fitness
    }

    /// Marks the fitness score as stale.
    pub const fn invalidate_fitness(&mut self) {
        self.fitness = None;
    }
}

/// An ordered, fixed-size collection of individuals.
///
/// The size is set at creation and conserved across every generational
/// transition: selection always draws exactly `len()` individuals to seed the
/// next generation.
#[derive(Debug, Clone)]
pub struct Population {
    individuals: Vec<Individual>,
}

impl Population {
    /// Creates a population of `count` uniformly random individuals.
    pub fn random<R>(count: usize, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let individuals = (0..count).map(|_| Individual::random(rng)).collect();
        Self { individuals }
    }

    /// Wraps an already-built generation.
    #[must_use]
    pub fn from_individuals(individuals: Vec<Individual>) -> Self {
        Self { individuals }
    }

    /// Returns all individuals in order.
    #[must_use]
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    /// Returns the number of individuals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Returns `true` if the population has no individuals.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Scores every individual whose fitness is stale against `target`.
    ///
    /// Individuals with a valid score are left untouched.
    pub fn evaluate<E>(&mut self, target: Genome, evaluator: &E)
    where
        E: FitnessEvaluator + ?Sized,
    {
        for ind in &mut self.individuals {
            if ind.fitness.is_none() {
                ind.fitness = Some(evaluator.evaluate(ind.genome, target));
            }
        }
    }

    /// Marks every individual's fitness as stale.
    ///
    /// Called when the target is replaced, since all scores are relative to it.
    pub fn invalidate_all(&mut self) {
        for ind in &mut self.individuals {
            ind.invalidate_fitness();
        }
    }

    /// Returns `true` if every individual has a valid fitness score.
    #[must_use]
    pub fn is_fully_evaluated(&self) -> bool {
        self.individuals.iter().all(|ind| ind.fitness.is_some())
    }

    /// Returns the best-scoring individual, ties broken by first-encountered
    /// order.
    ///
    /// # Panics
    ///
    /// Panics if the population is empty or any individual is unevaluated.
    #[must_use]
    pub fn best(&self) -> &Individual {
        let mut best = self
            .individuals
            .first()
            .expect("population must not be empty");
        for ind in &self.individuals[1..] {
            let fitness = ind.fitness.expect("fitness evaluated before ranking");
            if fitness > best.fitness.expect("fitness evaluated before ranking") {
                best = ind;
            }
        }
        best
    }
}
