use crate::genome::{GENOME_BITS, Genome};

/// Highest achievable fitness: every bit position matches the target.
pub const MAX_FITNESS: u32 = GENOME_BITS as u32;

/// Scores a genome against the current target genome.
///
/// Fitness is a maximization objective: larger scores are fitter. Evaluators
/// must be deterministic and side-effect free.
pub trait FitnessEvaluator: std::fmt::Debug {
    /// Returns the fitness of `genome` relative to `target`, in
    /// `[0, MAX_FITNESS]`.
    fn evaluate(&self, genome: Genome, target: Genome) -> u32;
}

/// Hamming-similarity fitness: the number of bit positions at which the
/// genome matches the target.
#[derive(Debug, Clone, Copy, Default)]
pub struct BitMatchEvaluator;

impl FitnessEvaluator for BitMatchEvaluator {
    fn evaluate(&self, genome: Genome, target: Genome) -> u32 {
        genome.matching_bits(target)
    }
}
