use rand::Rng;

use crate::genome::{GENOME_BITS, Genome};

/// Swaps the bit segment `[start, end)` between two genomes.
///
/// Pure recombination core of two-point crossover: the first child is `a`
/// with the segment replaced by `b`'s corresponding bits, and vice versa.
/// No bits are invented or lost; at every position the children together
/// carry exactly the parents' bit values.
///
/// # Panics
///
/// Panics unless `start <= end <= 24`.
#[must_use]
pub fn swap_segment(a: Genome, b: Genome, start: usize, end: usize) -> (Genome, Genome) {
    assert!(start <= end && end <= GENOME_BITS);
    // Bit index 0 is the most significant bit, so the segment occupies the
    // integer bits [24 - end, 24 - start).
    let width = end - start;
    let mask = ((1u32 << width) - 1) << (GENOME_BITS - end);
    let (va, vb) = (a.value(), b.value());
    (
        Genome::from_value((va & !mask) | (vb & mask)),
        Genome::from_value((vb & !mask) | (va & mask)),
    )
}

/// Two-point crossover over 24-bit genomes.
///
/// Cut points are drawn uniformly over all distinct pairs
/// `0 <= p1 < p2 <= 24`; the segment between them is swapped.
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoPointCrossover;

impl TwoPointCrossover {
    /// Recombines two parents into two children at random cut points.
    pub fn recombine<R>(&self, a: Genome, b: Genome, rng: &mut R) -> (Genome, Genome)
    where
        R: Rng + ?Sized,
    {
        // Draw one of the 25 segment boundaries, then one of the remaining
        // 24, which is uniform over distinct ordered pairs.
        let p1 = rng.random_range(0..=GENOME_BITS);
        let mut p2 = rng.random_range(0..GENOME_BITS);
        if p2 >= p1 {
            p2 += 1;
        }
        let (start, end) = if p1 < p2 { (p1, p2) } else { (p2, p1) };
        swap_segment(a, b, start, end)
    }
}

/// Independent per-bit flip mutation.
///
/// Each of the 24 bits flips with probability `flip_probability`. The
/// per-individual attempt probability (MUTPB) is applied by the engine; this
/// operator always walks every bit.
#[derive(Debug, Clone, Copy)]
pub struct BitFlipMutation {
    flip_probability: f64,
}

impl BitFlipMutation {
    /// Creates a mutation operator with the given per-bit flip probability.
    ///
    /// # Panics
    ///
    /// Panics if the probability lies outside `[0, 1]`. The engine validates
    /// this at configuration time.
    #[must_use]
    pub fn new(flip_probability: f64) -> Self {
        assert!((0.0..=1.0).contains(&flip_probability));
        Self { flip_probability }
    }

    /// Returns a copy of `genome` with each bit independently flipped with
    /// the configured probability.
    pub fn mutate<R>(&self, genome: Genome, rng: &mut R) -> Genome
    where
        R: Rng + ?Sized,
    {
        let mut mutated = genome;
        for index in 0..GENOME_BITS {
            if rng.random_bool(self.flip_probability) {
                mutated = mutated.with_bit_flipped(index);
            }
        }
        mutated
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    const PARENT_A: u32 = 0x00ff_00ff;
    const PARENT_B: u32 = 0x0000_ff00;

    #[test]
    fn test_swap_segment_conserves_bits_for_all_cut_points() {
        let a = Genome::from_value(PARENT_A);
        let b = Genome::from_value(PARENT_B);
        for start in 0..=GENOME_BITS {
            for end in start..=GENOME_BITS {
                let (child_a, child_b) = swap_segment(a, b, start, end);
                for index in 0..GENOME_BITS {
                    if (start..end).contains(&index) {
                        assert_eq!(child_a.bit(index), b.bit(index));
                        assert_eq!(child_b.bit(index), a.bit(index));
                    } else {
                        assert_eq!(child_a.bit(index), a.bit(index));
                        assert_eq!(child_b.bit(index), b.bit(index));
                    }
                }
            }
        }
    }

    #[test]
    fn test_swap_of_empty_segment_is_identity() {
        let a = Genome::from_value(PARENT_A);
        let b = Genome::from_value(PARENT_B);
        for point in 0..=GENOME_BITS {
            assert_eq!(swap_segment(a, b, point, point), (a, b));
        }
    }

    #[test]
    fn test_swap_of_full_segment_exchanges_parents() {
        let a = Genome::from_value(PARENT_A);
        let b = Genome::from_value(PARENT_B);
        assert_eq!(swap_segment(a, b, 0, GENOME_BITS), (b, a));
    }

    #[test]
    fn test_recombine_children_carry_parent_bits_positionwise() {
        let a = Genome::from_value(PARENT_A);
        let b = Genome::from_value(PARENT_B);
        let mut rng = Pcg32::seed_from_u64(20);
        for _ in 0..200 {
            let (child_a, child_b) = TwoPointCrossover.recombine(a, b, &mut rng);
            for index in 0..GENOME_BITS {
                let straight = child_a.bit(index) == a.bit(index)
                    && child_b.bit(index) == b.bit(index);
                let swapped = child_a.bit(index) == b.bit(index)
                    && child_b.bit(index) == a.bit(index);
                assert!(straight || swapped);
            }
        }
    }

    #[test]
    fn test_mutation_with_zero_probability_is_identity() {
        let genome = Genome::from_value(0x0012_3456);
        let mutation = BitFlipMutation::new(0.0);
        let mut rng = Pcg32::seed_from_u64(21);
        for _ in 0..100 {
            assert_eq!(mutation.mutate(genome, &mut rng), genome);
        }
    }

    #[test]
    fn test_mutation_with_unit_probability_flips_every_bit() {
        let genome = Genome::from_value(0x00a5_a5a5);
        let mutation = BitFlipMutation::new(1.0);
        let mut rng = Pcg32::seed_from_u64(22);
        let mutated = mutation.mutate(genome, &mut rng);
        assert_eq!(mutated.value(), genome.value() ^ 0x00ff_ffff);
    }

    #[test]
    fn test_mutation_returns_new_genome() {
        let genome = Genome::from_value(0);
        let mutation = BitFlipMutation::new(0.5);
        let mut rng = Pcg32::seed_from_u64(23);
        let mutated = mutation.mutate(genome, &mut rng);
        // The original value is untouched; genomes are immutable values.
        assert_eq!(genome.value(), 0);
        let _ = mutated;
    }
}
