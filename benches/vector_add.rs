use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;

use vadd::bench::random_vector;
use vadd::kernel::generic::add::add_slice;
use vadd::{vector_add_with, Config};

fn bench_vector_add(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let config = Config::new();
    let mut group = c.benchmark_group("vector_add");

    for size in [1_000usize, 100_000, 1_000_000, 10_000_000] {
        let a = random_vector(&mut rng, size);
        let b = random_vector(&mut rng, size);
        let mut out = vec![0.0f32; size];
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("serial", size), &size, |bencher, _| {
            bencher.iter(|| add_slice(black_box(&a), black_box(&b), &mut out))
        });
        group.bench_with_input(BenchmarkId::new("parallel", size), &size, |bencher, &n| {
            bencher.iter(|| vector_add_with(&config, black_box(&a), black_box(&b), &mut out, n))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_vector_add);
criterion_main!(benches);
