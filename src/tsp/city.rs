//! City value type and random city generation.

use rand::Rng;
use std::hash::{Hash, Hasher};

/// A city on the plane.
///
/// Cities are compared and hashed by `id` only: two cities with the same id
/// are the same city regardless of their coordinates.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    id: usize,
    x: f64,
    y: f64,
}

impl City {
    /// Creates a city with the given identifier and coordinates.
    pub fn new(id: usize, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &City) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl PartialEq for City {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for City {}

impl Hash for City {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Generates `n` cities with ids `0..n` and coordinates drawn uniformly
/// from `[0, extent)` on both axes.
///
/// # Panics
/// Panics if `extent` is not positive.
pub fn generate_cities<R: Rng>(n: usize, extent: f64, rng: &mut R) -> Vec<City> {
    assert!(extent > 0.0, "extent must be positive");
    (0..n)
        .map(|id| City::new(id, rng.random_range(0.0..extent), rng.random_range(0.0..extent)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use std::collections::HashSet;

    #[test]
    fn test_equality_is_by_id() {
        let a = City::new(1, 0.0, 0.0);
        let b = City::new(1, 5.0, 5.0);
        let c = City::new(2, 0.0, 0.0);
        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<City> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_distance_to() {
        let a = City::new(0, 0.0, 0.0);
        let b = City::new(1, 3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
        assert!((b.distance_to(&a) - 5.0).abs() < 1e-12);
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn test_generate_cities_ids_and_bounds() {
        let mut rng = create_rng(42);
        let cities = generate_cities(50, 100.0, &mut rng);
        assert_eq!(cities.len(), 50);
        for (i, c) in cities.iter().enumerate() {
            assert_eq!(c.id(), i);
            assert!((0.0..100.0).contains(&c.x()), "x out of range: {}", c.x());
            assert!((0.0..100.0).contains(&c.y()), "y out of range: {}", c.y());
        }
    }

    #[test]
    fn test_generate_cities_deterministic() {
        let a = generate_cities(10, 100.0, &mut create_rng(7));
        let b = generate_cities(10, 100.0, &mut create_rng(7));
        for (ca, cb) in a.iter().zip(&b) {
            assert_eq!(ca.x(), cb.x());
            assert_eq!(ca.y(), cb.y());
        }
    }
}
