use criterion::{criterion_group, criterion_main, Criterion};
use mazes::{
    generators::{self, EllerConfig},
    random::seeded_rng,
    units::{Height, Width},
};

fn bench_eller_maze_32(c: &mut Criterion) {
    let mut rng = seeded_rng(32);
    let config = EllerConfig::default();

    c.bench_function("eller_maze_32", move |b| {
        b.iter(|| generators::eller(&mut rng, Width(32), Height(32), &config))
    });
}

fn bench_eller_maze_200_50(c: &mut Criterion) {
    let mut rng = seeded_rng(200);
    let config = EllerConfig::default();

    c.bench_function("eller_maze_200_50", move |b| {
        b.iter(|| generators::eller(&mut rng, Width(200), Height(50), &config))
    });
}

fn bench_recursive_backtracker_maze_32(c: &mut Criterion) {
    let mut rng = seeded_rng(32);
    c.bench_function("recursive_backtracker_maze_32", move |b| {
        b.iter(|| generators::recursive_backtracker(&mut rng, Width(32), Height(32)))
    });
}

criterion_group!(
    benches,
    bench_eller_maze_32,
    bench_eller_maze_200_50,
    bench_recursive_backtracker_maze_32
);
criterion_main!(benches);
