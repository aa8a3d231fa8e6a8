//! Parent selection.
//!
//! Tournament selection approximates fitness-proportionate selection without
//! sorting the population: draw a few routes at random and keep the best.
//! Larger tournaments push harder toward the current best.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use crate::tsp::{Population, Route};
use rand::Rng;

/// Tournament sizing strategy.
///
/// Whatever the strategy, a tournament always samples at least one route.
///
/// # Examples
///
/// ```
/// use tsp_ga::ga::Selection;
///
/// // A tenth of the population per tournament
/// let sel = Selection::ProportionalTournament(10);
/// assert_eq!(sel.tournament_size(100), 10);
/// assert_eq!(sel.tournament_size(5), 1);
///
/// let sel = Selection::Tournament(3);
/// assert_eq!(sel.tournament_size(100), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Tournament of `floor(population_size / divisor)` routes.
    ProportionalTournament(usize),

    /// Tournament of a fixed number of routes.
    Tournament(usize),
}

impl Default for Selection {
    fn default() -> Self {
        Selection::ProportionalTournament(10)
    }
}

impl Selection {
    /// Number of routes sampled per tournament for a population of `n`.
    pub fn tournament_size(&self, n: usize) -> usize {
        let k = match *self {
            Selection::ProportionalTournament(divisor) => n / divisor.max(1),
            Selection::Tournament(k) => k,
        };
        k.max(1)
    }

    /// Selects a parent from `population` and returns its index.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn select<R: Rng>(&self, population: &Population, rng: &mut R) -> usize {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );
        tournament(population, self.tournament_size(population.len()), rng)
    }

    /// Selects a parent from `population`.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn select_route<'a, R: Rng>(&self, population: &'a Population, rng: &mut R) -> &'a Route {
        population.individual(self.select(population, rng))
    }
}

/// Samples `k` indices uniformly with replacement and returns the fittest.
/// Ties go to the earliest draw.
fn tournament<R: Rng>(population: &Population, k: usize, rng: &mut R) -> usize {
    let n = population.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if population.individual(idx).distance() < population.individual(best_idx).distance() {
            best_idx = idx;
        }
    }
    best_idx
}
