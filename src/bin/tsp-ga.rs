//! Generates a random city set, evolves tours over it, and prints the best.
//!
//! Usage: `tsp-ga [cities] [seed]` (defaults: 20 cities, random seed).
//! Log verbosity follows `RUST_LOG` (default `info`).

use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use tsp_ga::ga::{GaConfig, GeneticEngine};
use tsp_ga::random::rng_from_seed;
use tsp_ga::tsp::generate_cities;

const DEFAULT_NUM_CITIES: usize = 20;
const MAP_SIZE: f64 = 100.0;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let num_cities = match args.next().map(|s| s.parse::<usize>()) {
        None => DEFAULT_NUM_CITIES,
        Some(Ok(n)) => n,
        Some(Err(e)) => {
            tracing::error!("invalid city count: {e}");
            return ExitCode::FAILURE;
        }
    };
    let seed = match args.next().map(|s| s.parse::<u64>()) {
        None => None,
        Some(Ok(s)) => Some(s),
        Some(Err(e)) => {
            tracing::error!("invalid seed: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut config = GaConfig::default();
    config.seed = seed;

    let cities = generate_cities(num_cities, MAP_SIZE, &mut rng_from_seed(seed));

    let engine = match GeneticEngine::new(cities, config) {
        Ok(engine) => engine,
        Err(e) => {
            tracing::error!("cannot start: {e}");
            return ExitCode::FAILURE;
        }
    };
    let result = engine.run();

    println!("Best route found: {}", result.best);
    println!("Distance: {:.4}", result.best_distance);
    ExitCode::SUCCESS
}
