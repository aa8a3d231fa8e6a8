//! Seedable randomness source.
//!
//! Every random draw in the crate (shuffle, tournament sampling, cut points,
//! mutation decisions) goes through a single generator created here, so a
//! fixed seed reproduces a run exactly.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic generator from `seed`.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator seeded from the `seed` option, or from fresh entropy
/// when `None`.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}
