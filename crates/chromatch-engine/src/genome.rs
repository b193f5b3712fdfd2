use std::fmt;

use rand::Rng;

/// Number of bits in every genome.
pub const GENOME_BITS: usize = 24;

// All 24 payload bits set.
const VALUE_MASK: u32 = (1 << GENOME_BITS) - 1;

/// A fixed-length 24-bit candidate solution.
///
/// Stores the bit sequence as the low 24 bits of a `u32` bitmask. Bit index 0
/// is the most significant bit of the integer interpretation, so the genome
/// reads as three consecutive 8-bit channels:
///
/// - Bits 0-7: red channel (most significant byte)
/// - Bits 8-15: green channel
/// - Bits 16-23: blue channel (least significant byte)
///
/// Genomes are immutable value types. Variation operators build new genomes
/// instead of mutating in place, so a child never aliases its parents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Genome {
    bits: u32,
}

impl Genome {
    /// Samples a genome with each of the 24 bits drawn independently and
    /// uniformly from {0, 1}.
    pub fn random<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        Self {
            bits: rng.random::<u32>() & VALUE_MASK,
        }
    }

    /// Creates a genome from its integer interpretation.
    ///
    /// Only the low 24 bits of `value` are kept.
    #[must_use]
    pub const fn from_value(value: u32) -> Self {
        Self {
            bits: value & VALUE_MASK,
        }
    }

    /// Returns the big-endian integer interpretation, in `[0, 2^24 - 1]`.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.bits
    }

    /// Returns the three 8-bit channel groups (bits 0-7, 8-15, 16-23).
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn channels(self) -> (u8, u8, u8) {
        (
            (self.bits >> 16) as u8,
            (self.bits >> 8) as u8,
            self.bits as u8,
        )
    }

    /// Returns the bit at `index` (0 is the most significant bit).
    ///
    /// # Panics
    ///
    /// Panics if `index >= 24`.
    #[must_use]
    pub const fn bit(self, index: usize) -> bool {
        assert!(index < GENOME_BITS);
        (self.bits >> (GENOME_BITS - 1 - index)) & 1 != 0
    }

    /// Returns a copy of this genome with the bit at `index` flipped.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 24`.
    #[must_use]
    pub const fn with_bit_flipped(self, index: usize) -> Self {
        assert!(index < GENOME_BITS);
        Self {
            bits: self.bits ^ (1 << (GENOME_BITS - 1 - index)),
        }
    }

    /// Counts the bit positions at which `self` and `other` agree.
    ///
    /// Symmetric, in `[0, 24]`, and equal to 24 iff the genomes are identical.
    #[must_use]
    pub const fn matching_bits(self, other: Self) -> u32 {
        GENOME_BITS as u32 - (self.bits ^ other.bits).count_ones()
    }
}

impl fmt::Display for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.bits)
    }
}
