//! Permutation-preserving genetic operators on routes.
//!
//! # Crossover
//!
//! - [`ordered_crossover`]: copy a segment from parent 1 at its original
//!   positions, then fill the remaining slots with parent 2's cities in
//!   parent 2's order
//!
//! # Mutation
//!
//! - [`swap_mutation`]: per-position swap with a uniformly random partner
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use crate::tsp::{City, Route};
use rand::Rng;
use std::collections::HashSet;
use tracing::instrument;

// ============================================================================
// Crossover
// ============================================================================

/// Ordered crossover with two independently drawn cut points.
///
/// The cut points are not normalized: their relative order decides which
/// segment of parent 1 survives (see [`ordered_crossover_at`]).
///
/// # Panics
/// Panics if the parents have different lengths or are empty.
pub fn ordered_crossover<R: Rng>(parent1: &Route, parent2: &Route, rng: &mut R) -> Route {
    let n = parent1.len();
    assert!(n > 0, "parents must not be empty");

    let start = rng.random_range(0..n);
    let end = rng.random_range(0..n);
    ordered_crossover_at(parent1, parent2, start, end)
}

/// Ordered crossover at explicit cut points.
///
/// Positions kept from parent 1:
///
/// - `start < end`: the open interval `start < i < end`
/// - `start > end`: the wrapped segment `i >= start || i <= end`, both cut
///   points included
/// - `start == end`: none; the child is parent 2's order
///
/// Every other slot is filled, left to right, with the cities of parent 2
/// that the child does not yet hold, in parent 2's order. The number of
/// empty slots always equals the number of missing cities, so the child is
/// a full permutation whatever the cut points.
///
/// # Panics
/// Panics if the parents have different lengths, or if a cut point is out
/// of range.
#[instrument(level = "trace", skip(parent1, parent2), fields(n = parent1.len()))]
pub fn ordered_crossover_at(parent1: &Route, parent2: &Route, start: usize, end: usize) -> Route {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(start < n && end < n, "cut points must lie within 0..{n}");

    let mut slots: Vec<Option<City>> = vec![None; n];
    let mut placed: HashSet<usize> = HashSet::with_capacity(n);

    for (i, slot) in slots.iter_mut().enumerate() {
        if keeps_parent1(i, start, end) {
            let city = *parent1.city(i);
            *slot = Some(city);
            placed.insert(city.id());
        }
    }

    let mut cursor = 0;
    for city in parent2.cities() {
        if !placed.insert(city.id()) {
            continue;
        }
        while slots[cursor].is_some() {
            cursor += 1;
        }
        slots[cursor] = Some(*city);
    }

    let cities: Vec<City> = slots
        .into_iter()
        .map(|slot| slot.expect("ordered crossover left a slot unfilled"))
        .collect();
    Route::new(cities)
}

/// Whether position `i` is copied from parent 1.
fn keeps_parent1(i: usize, start: usize, end: usize) -> bool {
    if start < end {
        i > start && i < end
    } else if start > end {
        !(i < start && i > end)
    } else {
        false
    }
}

// ============================================================================
// Mutation
// ============================================================================

/// Swap mutation: each position, with probability `rate`, trades places with
/// a uniformly random position (possibly itself).
///
/// A `rate` of 0 never changes the route.
pub fn swap_mutation<R: Rng>(route: &mut Route, rate: f64, rng: &mut R) {
    let n = route.len();
    for i in 0..n {
        if rng.random::<f64>() < rate {
            let j = rng.random_range(0..n);
            route.swap_cities(i, j);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
