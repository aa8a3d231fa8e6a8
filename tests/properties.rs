use proptest::prelude::*;
use tsp_ga::ga::operators::{ordered_crossover, ordered_crossover_at, swap_mutation};
use tsp_ga::ga::Selection;
use tsp_ga::random::create_rng;
use tsp_ga::tsp::{generate_cities, City, Population, Route};

fn city_set(n: usize, seed: u64) -> Vec<City> {
    generate_cities(n, 100.0, &mut create_rng(seed))
}

proptest! {
    #[test]
    fn shuffle_yields_permutation(n in 2usize..40, seed in any::<u64>()) {
        let cities = city_set(n, seed);
        let mut rng = create_rng(seed.wrapping_add(1));
        let route = Route::random(&cities, &mut rng);
        prop_assert!(route.is_permutation_of(&cities));
    }

    #[test]
    fn crossover_yields_permutation(n in 2usize..40, seed in any::<u64>()) {
        let cities = city_set(n, seed);
        let mut rng = create_rng(seed);
        let p1 = Route::random(&cities, &mut rng);
        let p2 = Route::random(&cities, &mut rng);
        let child = ordered_crossover(&p1, &p2, &mut rng);
        prop_assert!(child.is_permutation_of(&cities));
    }

    #[test]
    fn crossover_complete_for_any_cut_points(
        (n, start, end) in (2usize..30).prop_flat_map(|n| (Just(n), 0..n, 0..n)),
        seed in any::<u64>(),
    ) {
        let cities = city_set(n, seed);
        let mut rng = create_rng(seed);
        let p1 = Route::random(&cities, &mut rng);
        let p2 = Route::random(&cities, &mut rng);
        let child = ordered_crossover_at(&p1, &p2, start, end);
        prop_assert!(child.is_permutation_of(&cities));
    }

    #[test]
    fn crossover_boundary_cuts(n in 2usize..30, seed in any::<u64>()) {
        let cities = city_set(n, seed);
        let mut rng = create_rng(seed);
        let p1 = Route::random(&cities, &mut rng);
        let p2 = Route::random(&cities, &mut rng);
        for k in 0..n {
            let mut cuts = vec![(k, k)];
            if k + 1 < n {
                cuts.push((k, k + 1));
                cuts.push((k + 1, k));
            }
            for (start, end) in cuts {
                let child = ordered_crossover_at(&p1, &p2, start, end);
                prop_assert!(
                    child.is_permutation_of(&cities),
                    "cut ({}, {}) broke the permutation", start, end
                );
            }
        }
    }

    #[test]
    fn mutation_yields_permutation(n in 2usize..40, rate in 0.0f64..=1.0, seed in any::<u64>()) {
        let cities = city_set(n, seed);
        let mut rng = create_rng(seed);
        let mut route = Route::random(&cities, &mut rng);
        swap_mutation(&mut route, rate, &mut rng);
        prop_assert!(route.is_permutation_of(&cities));
    }

    #[test]
    fn mutation_rate_zero_is_noop(n in 2usize..40, seed in any::<u64>()) {
        let cities = city_set(n, seed);
        let mut rng = create_rng(seed);
        let mut route = Route::random(&cities, &mut rng);
        let before = route.city_ids();
        swap_mutation(&mut route, 0.0, &mut rng);
        prop_assert_eq!(route.city_ids(), before);
    }

    #[test]
    fn tournament_never_below_population_minimum(
        n in 2usize..12,
        size in 1usize..40,
        seed in any::<u64>(),
    ) {
        let cities = city_set(n, seed);
        let mut rng = create_rng(seed);
        let population = Population::random(&cities, size, &mut rng);
        let worst = population.iter().map(Route::fitness).fold(f64::INFINITY, f64::min);
        for _ in 0..20 {
            let chosen = Selection::default().select_route(&population, &mut rng);
            prop_assert!(chosen.fitness() >= worst);
        }
    }
}
