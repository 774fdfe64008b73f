//! Criterion benchmarks for the u-evolve engine.
//!
//! Uses the bundled knapsack and equation problems to measure the
//! engine's own overhead: selection, operator orchestration, full runs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_evolve::ga::{
    crossover, elite_selection, generate_population, mutation, roulette_wheel_selection,
    tournament_selection, GaConfig, GaRunner,
};
use u_evolve::problems::equation::{Equation, EquationConfig};
use u_evolve::problems::knapsack::{Knapsack, KnapsackConfig};
use u_evolve::random::create_rng;

fn knapsack_population(n: usize) -> Vec<Knapsack> {
    let mut rng = create_rng(42);
    generate_population(n, &KnapsackConfig::reference(), &mut rng)
        .expect("reference config is valid")
}

// ===========================================================================
// Selection
// ===========================================================================

fn bench_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection");

    for &n in &[50usize, 200, 1000] {
        let population = knapsack_population(n);

        group.bench_with_input(BenchmarkId::new("elite", n), &population, |b, pop| {
            b.iter(|| black_box(elite_selection(n / 10, black_box(pop))))
        });

        group.bench_with_input(BenchmarkId::new("tournament3", n), &population, |b, pop| {
            let mut rng = create_rng(7);
            b.iter(|| black_box(tournament_selection(n, black_box(pop), 3, &mut rng)))
        });

        group.bench_with_input(BenchmarkId::new("roulette", n), &population, |b, pop| {
            let mut rng = create_rng(7);
            b.iter(|| black_box(roulette_wheel_selection(n, black_box(pop), &mut rng)))
        });
    }
    group.finish();
}

// ===========================================================================
// Operators
// ===========================================================================

fn bench_operators(c: &mut Criterion) {
    let mut group = c.benchmark_group("operators");

    for &n in &[50usize, 1000] {
        let population = knapsack_population(n);

        group.bench_with_input(BenchmarkId::new("crossover", n), &population, |b, pop| {
            let mut rng = create_rng(11);
            b.iter(|| {
                let mut pop = pop.clone();
                crossover(&mut pop, 0.7, &mut rng).expect("valid probability");
                black_box(pop)
            })
        });

        group.bench_with_input(BenchmarkId::new("mutation", n), &population, |b, pop| {
            let mut rng = create_rng(11);
            b.iter(|| {
                let mut pop = pop.clone();
                mutation(&mut pop, 0.7, &mut rng).expect("valid probability");
                black_box(pop)
            })
        });
    }
    group.finish();
}

// ===========================================================================
// Full runs
// ===========================================================================

fn bench_runs(c: &mut Criterion) {
    let mut group = c.benchmark_group("runs");
    group.sample_size(10);

    let knapsack = KnapsackConfig::reference();
    let config = GaConfig::knapsack_preset()
        .with_max_generations(100)
        .with_seed(42);
    group.bench_function("knapsack_roulette_g100", |b| {
        b.iter(|| black_box(GaRunner::run::<Knapsack>(black_box(&knapsack), &config)))
    });

    let bounds = EquationConfig::default();
    let config = GaConfig::equation_preset().with_seed(42);
    group.bench_function("equation_tournament", |b| {
        b.iter(|| black_box(GaRunner::run::<Equation>(black_box(&bounds), &config)))
    });

    group.finish();
}

criterion_group!(benches, bench_selection, bench_operators, bench_runs);
criterion_main!(benches);
