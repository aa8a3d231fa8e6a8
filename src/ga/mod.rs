//! Genetic algorithm for the Traveling Salesman Problem.
//!
//! Each generation scores every route, carries the best one over unchanged
//! (elitism), and fills the rest of the next population with children bred
//! from tournament-selected parents by ordered crossover and swap mutation.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, budget, rates)
//! - [`GeneticEngine`]: Executes the evolutionary loop
//! - [`GaResult`]: Final result with the best route and its history
//!
//! # Submodules
//!
//! - [`operators`]: Ordered crossover and swap mutation on routes
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;
mod selection;

pub use config::GaConfig;
pub use runner::{GaResult, GenerationStats, GeneticEngine};
pub use selection::Selection;
