//! Configuration errors reported before a run starts.

/// Errors detected while validating a [`GaConfig`](crate::ga::GaConfig) or
/// the city set handed to the engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GaError {
    #[error("population_size must be at least 1, got {0}")]
    InvalidPopulationSize(usize),
    #[error("mutation_rate must lie in [0, 1], got {0}")]
    InvalidMutationRate(f64),
    #[error("tournament size parameter must be at least 1, got {0}")]
    InvalidTournamentSize(usize),
    #[error("at least 2 cities are required, got {0}")]
    TooFewCities(usize),
    #[error("city id {0} appears more than once")]
    DuplicateCityId(usize),
    #[error("all cities share the same coordinates; every tour has zero length")]
    DegenerateCities,
}
