use rand::Rng;

use crate::population::Individual;

/// Tournament selection over a scored population.
///
/// Each pick draws `tournament_size` entrants uniformly at random **with
/// replacement** and keeps the fittest, ties broken by first-encountered
/// order. Larger tournaments mean stronger selection pressure.
#[derive(Debug, Clone, Copy)]
pub struct TournamentSelector {
    tournament_size: usize,
}

impl TournamentSelector {
    /// Creates a selector with the given tournament size.
    ///
    /// # Panics
    ///
    /// Panics if `tournament_size` is zero. The engine validates this at
    /// configuration time.
    #[must_use]
    pub fn new(tournament_size: usize) -> Self {
        assert!(tournament_size > 0);
        Self { tournament_size }
    }

    /// Selects `count` individuals to seed the next generation.
    ///
    /// Every returned individual is an independent copy: mutating one later
    /// cannot affect the source population or any other copy selected from
    /// the same entry. Copies keep their valid fitness score until a
    /// variation operator invalidates it.
    ///
    /// # Panics
    ///
    /// Panics if `population` is empty or contains unevaluated individuals.
    pub fn select<R>(&self, population: &[Individual], count: usize, rng: &mut R) -> Vec<Individual>
    where
        R: Rng + ?Sized,
    {
        (0..count)
            .map(|_| self.select_one(population, rng))
            .collect()
    }

    /// Runs a single tournament and returns a copy of the winner.
    fn select_one<R>(&self, population: &[Individual], rng: &mut R) -> Individual
    where
        R: Rng + ?Sized,
    {
        let mut winner = &population[rng.random_range(0..population.len())];
        let mut winner_fitness = winner.fitness().expect("fitness evaluated before selection");
        for _ in 1..self.tournament_size {
            let entrant = &population[rng.random_range(0..population.len())];
            let fitness = entrant
                .fitness()
                .expect("fitness evaluated before selection");
            // Strict comparison keeps the first-encountered entrant on ties.
            if fitness > winner_fitness {
                winner = entrant;
                winner_fitness = fitness;
            }
        }
        *winner
    }
}
