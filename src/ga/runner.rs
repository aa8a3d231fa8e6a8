//! GA evolutionary loop execution.
//!
//! [`GeneticEngine`] orchestrates the generational process:
//! evaluation → elitism → selection → crossover → mutation → replacement,
//! for a fixed number of generations.

use super::config::GaConfig;
use super::operators::{ordered_crossover, swap_mutation};
use crate::error::GaError;
use crate::random::rng_from_seed;
use crate::tsp::{City, Population, Route};
use rand::rngs::StdRng;
use rand::Rng;
use std::collections::HashSet;
use tracing::instrument;

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The shortest route seen during the entire run.
    pub best: Route,

    /// Tour length of `best`.
    pub best_distance: f64,

    /// Total number of generations executed.
    pub generations: usize,

    /// Best-seen distance for the initial population, then after each
    /// generation. Never increases.
    pub distance_history: Vec<f64>,
}

impl GaResult {
    /// City identifiers of the best route in visiting order.
    pub fn city_ids(&self) -> Vec<usize> {
        self.best.city_ids()
    }
}

/// Summary of one generation, returned by [`GeneticEngine::step`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationStats {
    /// 1-based index of the generation just completed.
    pub generation: usize,

    /// Shortest tour in the population that was bred from.
    pub generation_best: f64,

    /// Shortest tour seen so far.
    pub best_seen: f64,

    /// Whether `best_seen` improved during this generation.
    pub improved: bool,
}

/// Executes the generational loop over a fixed city set.
///
/// The engine owns the current population and a single random source that
/// every operator draws from, so a seeded run is fully reproducible.
///
/// # Usage
///
/// ```
/// use tsp_ga::ga::{GaConfig, GeneticEngine};
/// use tsp_ga::tsp::City;
///
/// let cities = vec![
///     City::new(0, 0.0, 0.0),
///     City::new(1, 3.0, 0.0),
///     City::new(2, 3.0, 4.0),
/// ];
/// let config = GaConfig::default()
///     .with_population_size(10)
///     .with_max_generations(5)
///     .with_seed(42);
/// let result = GeneticEngine::new(cities, config)?.run();
/// assert!((result.best_distance - 12.0).abs() < 1e-9);
/// # Ok::<(), tsp_ga::GaError>(())
/// ```
#[derive(Debug)]
pub struct GeneticEngine<R: Rng = StdRng> {
    config: GaConfig,
    rng: R,
    population: Population,
    best: Route,
    generation: usize,
    distance_history: Vec<f64>,
}

impl GeneticEngine<StdRng> {
    /// Creates an engine seeded from [`GaConfig::seed`].
    ///
    /// Fails if the configuration or the city set is invalid; no generation
    /// runs in that case.
    pub fn new(cities: Vec<City>, config: GaConfig) -> Result<Self, GaError> {
        let rng = rng_from_seed(config.seed);
        Self::with_rng(cities, config, rng)
    }
}

impl<R: Rng> GeneticEngine<R> {
    /// Creates an engine drawing from `rng`. [`GaConfig::seed`] is ignored.
    pub fn with_rng(cities: Vec<City>, config: GaConfig, mut rng: R) -> Result<Self, GaError> {
        config.validate()?;
        validate_cities(&cities)?;

        let mut population = Population::random(&cities, config.population_size, &mut rng);
        population.evaluate();
        let best = population.fittest().clone();

        let mut distance_history = Vec::with_capacity(config.max_generations + 1);
        distance_history.push(best.distance());

        Ok(Self {
            config,
            rng,
            population,
            best,
            generation: 0,
            distance_history,
        })
    }

    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Number of generations completed so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Shortest route seen so far.
    pub fn best(&self) -> &Route {
        &self.best
    }

    /// Whether the generation budget is exhausted.
    pub fn is_finished(&self) -> bool {
        self.generation >= self.config.max_generations
    }

    /// Runs one generation and replaces the current population.
    pub fn step(&mut self) -> GenerationStats {
        self.population.evaluate();

        let elite = self.population.fittest().clone();
        let generation_best = elite.distance();
        let improved = generation_best < self.best.distance();
        if improved {
            tracing::trace!(
                generation = self.generation + 1,
                distance = generation_best,
                "new best route"
            );
            self.best = elite.clone();
        }

        let target = self.config.population_size;
        let mut next = Population::with_capacity(target);
        next.add_individual(elite);

        while next.len() < target {
            let p1 = self.config.selection.select_route(&self.population, &mut self.rng);
            let p2 = self.config.selection.select_route(&self.population, &mut self.rng);
            let mut child = ordered_crossover(p1, p2, &mut self.rng);
            swap_mutation(&mut child, self.config.mutation_rate, &mut self.rng);
            next.add_individual(child);
        }

        self.population = next;
        self.generation += 1;
        self.distance_history.push(self.best.distance());

        let stats = GenerationStats {
            generation: self.generation,
            generation_best,
            best_seen: self.best.distance(),
            improved,
        };
        tracing::debug!(
            generation = stats.generation,
            generation_best = stats.generation_best,
            best_seen = stats.best_seen,
            "generation complete"
        );
        stats
    }

    /// Runs the remaining generation budget and reports the best route.
    #[instrument(level = "debug", skip(self), fields(
        population_size = self.config.population_size,
        max_generations = self.config.max_generations,
        mutation_rate = self.config.mutation_rate
    ))]
    pub fn run(mut self) -> GaResult {
        tracing::info!(
            cities = self.best.len(),
            initial_best = self.best.distance(),
            "starting evolution"
        );

        while !self.is_finished() {
            self.step();
        }

        tracing::info!(
            generations = self.generation,
            best_distance = self.best.distance(),
            "evolution finished"
        );

        GaResult {
            best_distance: self.best.distance(),
            best: self.best,
            generations: self.generation,
            distance_history: self.distance_history,
        }
    }
}

/// Checks the city set: at least two cities, distinct ids, and at least two
/// distinct locations so that no tour has zero length.
fn validate_cities(cities: &[City]) -> Result<(), GaError> {
    if cities.len() < 2 {
        return Err(GaError::TooFewCities(cities.len()));
    }
    let mut ids = HashSet::with_capacity(cities.len());
    for city in cities {
        if !ids.insert(city.id()) {
            return Err(GaError::DuplicateCityId(city.id()));
        }
    }
    let first = &cities[0];
    if cities.iter().all(|c| c.x() == first.x() && c.y() == first.y()) {
        return Err(GaError::DegenerateCities);
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
