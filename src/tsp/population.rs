//! Ordered collections of routes.

use super::city::City;
use super::route::Route;
use rand::Rng;

/// An ordered collection of routes owned exclusively by one generation.
#[derive(Debug, Clone, Default)]
pub struct Population {
    routes: Vec<Route>,
}

impl Population {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            routes: Vec::with_capacity(capacity),
        }
    }

    /// Builds `size` independently shuffled routes over `cities`.
    pub fn random<R: Rng>(cities: &[City], size: usize, rng: &mut R) -> Self {
        Self {
            routes: (0..size).map(|_| Route::random(cities, rng)).collect(),
        }
    }

    /// Appends a route. No ranking or deduplication takes place.
    pub fn add_individual(&mut self, route: Route) {
        self.routes.push(route);
    }

    /// Route at position `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn individual(&self, index: usize) -> &Route {
        &self.routes[index]
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Route> {
        self.routes.iter()
    }

    /// Recomputes the tour length of every route.
    pub fn evaluate(&mut self) {
        for route in &mut self.routes {
            route.evaluate();
        }
    }

    /// The route with the highest fitness (shortest tour). Ties go to the
    /// earliest route.
    ///
    /// # Panics
    /// Panics if the population is empty.
    pub fn fittest(&self) -> &Route {
        &self.routes[self.fittest_index()]
    }

    /// Position of [`fittest`](Self::fittest).
    ///
    /// # Panics
    /// Panics if the population is empty.
    pub fn fittest_index(&self) -> usize {
        assert!(!self.routes.is_empty(), "population must not be empty");
        let mut best = 0;
        for (i, route) in self.routes.iter().enumerate().skip(1) {
            if route.distance() < self.routes[best].distance() {
                best = i;
            }
        }
        best
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Route;
    type IntoIter = std::slice::Iter<'a, Route>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Route> for Population {
    fn from_iter<T: IntoIterator<Item = Route>>(iter: T) -> Self {
        Self {
            routes: iter.into_iter().collect(),
        }
    }
}
