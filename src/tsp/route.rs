//! Candidate tours.
//!
//! A [`Route`] is a closed tour over a fixed city set. Its city sequence is
//! always a permutation of that set when observed from outside the crossover
//! operator; the only method able to break that is [`Route::set_city`].

use super::city::City;
use rand::seq::SliceRandom;
use rand::Rng;
use std::cell::Cell;
use std::collections::HashSet;
use std::fmt;

/// A candidate solution: an ordering of all cities, visited in sequence and
/// closed back to the first city.
///
/// The tour length is computed lazily and cached. Every mutating method
/// invalidates the cache.
#[derive(Debug, Clone)]
pub struct Route {
    cities: Vec<City>,
    distance: Cell<Option<f64>>,
}

impl Route {
    /// Creates a route visiting `cities` in the given order.
    pub fn new(cities: Vec<City>) -> Self {
        Self {
            cities,
            distance: Cell::new(None),
        }
    }

    /// Creates a uniformly random ordering of `cities`.
    pub fn random<R: Rng>(cities: &[City], rng: &mut R) -> Self {
        let mut route = Self::new(cities.to_vec());
        route.shuffle(rng);
        route
    }

    /// Uniformly permutes the city sequence in place (Fisher–Yates).
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cities.shuffle(rng);
        self.invalidate();
    }

    /// Total closed-tour length, computed on first use after a change.
    pub fn distance(&self) -> f64 {
        match self.distance.get() {
            Some(d) => d,
            None => self.evaluate_cached(),
        }
    }

    /// Recomputes and caches the tour length regardless of cache state.
    pub fn evaluate(&mut self) -> f64 {
        self.evaluate_cached()
    }

    /// Reciprocal of the tour length; higher is better.
    ///
    /// # Panics
    /// Panics if the tour has zero length (all cities coincide), which the
    /// engine rules out before a run starts.
    pub fn fitness(&self) -> f64 {
        let d = self.distance();
        assert!(d > 0.0, "degenerate route: tour length is zero");
        1.0 / d
    }

    /// Whether `city` (by id) is on this route.
    pub fn contains_city(&self, city: &City) -> bool {
        self.cities.contains(city)
    }

    /// City at position `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn city(&self, index: usize) -> &City {
        &self.cities[index]
    }

    /// Overwrites the city at position `index`.
    ///
    /// This can leave the route with a duplicated and a missing city; the
    /// caller must restore a full permutation before the route is used for
    /// selection or scoring.
    pub fn set_city(&mut self, index: usize, city: City) {
        self.cities[index] = city;
        self.invalidate();
    }

    /// Exchanges the cities at positions `i` and `j`.
    pub fn swap_cities(&mut self, i: usize, j: usize) {
        if i != j {
            self.cities.swap(i, j);
            self.invalidate();
        }
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// City identifiers in visiting order.
    pub fn city_ids(&self) -> Vec<usize> {
        self.cities.iter().map(City::id).collect()
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Whether this route visits exactly the cities in `cities`, each once.
    pub fn is_permutation_of(&self, cities: &[City]) -> bool {
        if self.cities.len() != cities.len() {
            return false;
        }
        let expected: HashSet<usize> = cities.iter().map(City::id).collect();
        let mut seen = HashSet::with_capacity(self.cities.len());
        self.cities
            .iter()
            .all(|c| expected.contains(&c.id()) && seen.insert(c.id()))
    }

    fn evaluate_cached(&self) -> f64 {
        let d = tour_length(&self.cities);
        self.distance.set(Some(d));
        d
    }

    fn invalidate(&mut self) {
        self.distance.set(None);
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, city) in self.cities.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{}", city.id())?;
        }
        if let Some(first) = self.cities.first() {
            write!(f, " -> {}", first.id())?;
        }
        Ok(())
    }
}

/// Length of the closed tour through `cities` in order.
fn tour_length(cities: &[City]) -> f64 {
    let Some(first) = cities.first() else {
        return 0.0;
    };
    let open: f64 = cities.windows(2).map(|w| w[0].distance_to(&w[1])).sum();
    let closing = cities[cities.len() - 1].distance_to(first);
    open + closing
}
