/// Evolution parameters, validated once at startup.
///
/// The core has no recoverable errors at runtime; every precondition the
/// generational loop relies on is checked here before an engine is built.
/// Genome length is fixed at 24 bits and is not configurable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvolutionConfig {
    /// Number of individuals per generation. Must be even (crossover pairs
    /// adjacent individuals) and at least 2.
    pub population_size: usize,
    /// Entrants per selection tournament. Must be at least 1.
    pub tournament_size: usize,
    /// Probability of recombining each adjacent pair of selected individuals
    /// (CXPB).
    pub crossover_probability: f64,
    /// Probability of attempting mutation on each individual (MUTPB).
    pub mutation_probability: f64,
    /// Per-bit flip probability once mutation is attempted (indpb).
    pub bit_flip_probability: f64,
    /// While auto-playing, an implicit retarget fires every this many
    /// generations. Must be at least 1.
    pub retarget_interval: u64,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 32,
            tournament_size: 3,
            crossover_probability: 0.5,
            mutation_probability: 0.2,
            bit_flip_probability: 0.05,
            retarget_interval: 64,
        }
    }
}

impl EvolutionConfig {
    /// Checks every configuration precondition.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall {
                size: self.population_size,
            });
        }
        if self.population_size % 2 != 0 {
            return Err(ConfigError::PopulationNotEven {
                size: self.population_size,
            });
        }
        if self.tournament_size == 0 {
            return Err(ConfigError::TournamentEmpty);
        }
        for (name, value) in [
            ("crossover probability", self.crossover_probability),
            ("mutation probability", self.mutation_probability),
            ("bit flip probability", self.bit_flip_probability),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ProbabilityOutOfRange { name, value });
            }
        }
        if self.retarget_interval == 0 {
            return Err(ConfigError::RetargetIntervalZero);
        }
        Ok(())
    }
}

/// Configuration misuse detected before the engine is built.
#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    #[display("population size must be at least 2, got {size}")]
    PopulationTooSmall { size: usize },
    #[display("population size must be even for pairwise crossover, got {size}")]
    PopulationNotEven { size: usize },
    #[display("tournament size must be at least 1")]
    TournamentEmpty,
    #[display("{name} must be within [0, 1], got {value}")]
    ProbabilityOutOfRange { name: &'static str, value: f64 },
    #[display("retarget interval must be at least 1")]
    RetargetIntervalZero,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(EvolutionConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_population_below_two() {
        let config = EvolutionConfig {
            population_size: 1,
            ..EvolutionConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::PopulationTooSmall { size: 1 })
        );
    }

    #[test]
    fn test_rejects_odd_population() {
        let config = EvolutionConfig {
            population_size: 33,
            ..EvolutionConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::PopulationNotEven { size: 33 })
        );
    }

    #[test]
    fn test_rejects_empty_tournament() {
        let config = EvolutionConfig {
            tournament_size: 0,
            ..EvolutionConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::TournamentEmpty));
    }

    #[test]
    fn test_rejects_out_of_range_probabilities() {
        for (field, value) in [
            ("crossover", 1.5),
            ("mutation", -0.1),
            ("bit flip", 2.0),
        ] {
            let mut config = EvolutionConfig::default();
            match field {
                "crossover" => config.crossover_probability = value,
                "mutation" => config.mutation_probability = value,
                _ => config.bit_flip_probability = value,
            }
            assert!(
                matches!(
                    config.validate(),
                    Err(ConfigError::ProbabilityOutOfRange { .. })
                ),
                "{field} probability {value} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_zero_retarget_interval() {
        let config = EvolutionConfig {
            retarget_interval: 0,
            ..EvolutionConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::RetargetIntervalZero));
    }

    #[test]
    fn test_error_messages_name_the_misuse() {
        assert_eq!(
            ConfigError::PopulationNotEven { size: 7 }.to_string(),
            "population size must be even for pairwise crossover, got 7"
        );
    }
}
