use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use seqstats::cs::dynamic::{
    longest_monotonic_subsequence, longest_monotonic_subsequence_length, Direction,
};

fn random_numbers(len: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..len).map(|_| rng.gen_range(-1_000_000.0..1_000_000.0)).collect()
}

fn bench_monotonic_subsequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("monotonic_subsequence");
    for &size in &[1_000, 100_000, 1_000_000] {
        let data = random_numbers(size);
        for direction in [Direction::Increasing, Direction::Decreasing] {
            group.bench_with_input(
                BenchmarkId::new(format!("{direction:?}"), size),
                &data,
                |b, data| b.iter(|| longest_monotonic_subsequence(black_box(data), direction)),
            );
        }
        group.bench_with_input(BenchmarkId::new("length_only", size), &data, |b, data| {
            b.iter(|| longest_monotonic_subsequence_length(black_box(data), Direction::Increasing))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_monotonic_subsequence);
criterion_main!(benches);
