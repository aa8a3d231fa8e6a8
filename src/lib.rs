//! Genetic-algorithm approximation of the Traveling Salesman Problem.
//!
//! A population of candidate tours evolves over a fixed city set:
//!
//! - **Fitness**: reciprocal of the closed-tour length
//! - **Selection**: tournament over a random sample of the population
//! - **Crossover**: ordered recombination that keeps every tour a permutation
//! - **Mutation**: per-position swaps
//! - **Replacement**: generational, with the best tour carried over unchanged
//!
//! The loop runs for a fixed number of generations. All randomness comes
//! from one seedable generator (see [`random`]).
//!
//! ```
//! use tsp_ga::ga::{GaConfig, GeneticEngine};
//! use tsp_ga::random::create_rng;
//! use tsp_ga::tsp::generate_cities;
//!
//! let cities = generate_cities(10, 100.0, &mut create_rng(1));
//! let config = GaConfig::default()
//!     .with_population_size(30)
//!     .with_max_generations(50)
//!     .with_seed(42);
//! let result = GeneticEngine::new(cities, config)?.run();
//! assert_eq!(result.generations, 50);
//! # Ok::<(), tsp_ga::GaError>(())
//! ```

mod error;
pub mod ga;
pub mod random;
pub mod tsp;

pub use error::GaError;
