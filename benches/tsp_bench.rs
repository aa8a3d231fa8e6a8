//! Criterion benchmarks for the TSP genetic algorithm.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tsp_ga::ga::operators::{ordered_crossover, swap_mutation};
use tsp_ga::ga::{GaConfig, GeneticEngine};
use tsp_ga::random::create_rng;
use tsp_ga::tsp::{generate_cities, Route};

fn bench_operators(c: &mut Criterion) {
    let mut group = c.benchmark_group("operators");
    for n in [20usize, 100, 500] {
        let cities = generate_cities(n, 100.0, &mut create_rng(1));
        let mut rng = create_rng(42);
        let p1 = Route::random(&cities, &mut rng);
        let p2 = Route::random(&cities, &mut rng);

        group.bench_with_input(BenchmarkId::new("ordered_crossover", n), &n, |b, _| {
            b.iter(|| ordered_crossover(black_box(&p1), black_box(&p2), &mut rng))
        });
        group.bench_with_input(BenchmarkId::new("swap_mutation", n), &n, |b, _| {
            let mut route = p1.clone();
            b.iter(|| swap_mutation(black_box(&mut route), 0.02, &mut rng))
        });
        group.bench_with_input(BenchmarkId::new("distance", n), &n, |b, _| {
            let mut route = p1.clone();
            b.iter(|| black_box(route.evaluate()))
        });
    }
    group.finish();
}

fn bench_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine");
    group.sample_size(10);
    for n in [20usize, 50] {
        let cities = generate_cities(n, 100.0, &mut create_rng(1));
        let config = GaConfig::default()
            .with_population_size(100)
            .with_max_generations(100)
            .with_seed(42);
        group.bench_with_input(BenchmarkId::new("run_100_generations", n), &n, |b, _| {
            b.iter(|| {
                GeneticEngine::new(cities.clone(), config.clone())
                    .map(|engine| engine.run().best_distance)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_operators, bench_engine);
criterion_main!(benches);
