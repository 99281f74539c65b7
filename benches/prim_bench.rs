//! Prim's algorithm on each priority-queue backend
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench prim_bench
//!
//! # Only the Fibonacci heap
//! cargo bench --bench prim_bench -- 'fibonacci/'
//! ```

use base_mst::array::ArrayQueue;
use base_mst::fibonacci::FibonacciHeap;
use base_mst::input::random_bases;
use base_mst::mst::prim_mst_cost;
use base_mst::simple_binary::SimpleBinaryHeap;
use base_mst::Heap;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SIZES: [usize; 3] = [100, 300, 1000];

fn benchmark_prim(c: &mut Criterion) {
    let mut group = c.benchmark_group("prim");
    group.sample_size(20);

    for n in SIZES {
        let bases = random_bases(n, 1_000_000, n as u64);
        group.throughput(Throughput::Elements((n * (n - 1) / 2) as u64));

        // The array queue is quadratic per pop; skip it at the largest size
        if n < 1000 {
            group.bench_with_input(BenchmarkId::new("array", n), &bases, |b, bases| {
                b.iter(|| prim_mst_cost::<ArrayQueue<_, _>>(black_box(bases)).unwrap())
            });
        }
        group.bench_with_input(BenchmarkId::new("binary", n), &bases, |b, bases| {
            b.iter(|| prim_mst_cost::<SimpleBinaryHeap<_, _>>(black_box(bases)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("fibonacci", n), &bases, |b, bases| {
            b.iter(|| prim_mst_cost::<FibonacciHeap<_, _>>(black_box(bases)).unwrap())
        });
    }

    group.finish();
}

/// Raw queue throughput: push n random keys, then drain
fn push_drain<H: Heap<u32, u64>>(keys: &[u64]) -> u64 {
    let mut heap = H::new();
    for (i, &key) in keys.iter().enumerate() {
        heap.push(key, i as u32).unwrap();
    }
    let mut checksum = 0u64;
    while let Some((key, _)) = heap.pop() {
        checksum = checksum.wrapping_add(key);
    }
    checksum
}

fn benchmark_push_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_drain");
    let mut rng = StdRng::seed_from_u64(7);
    let keys: Vec<u64> = (0..20_000).map(|_| rng.random_range(0..1_000_000)).collect();
    group.throughput(Throughput::Elements(keys.len() as u64));

    group.bench_function("binary", |b| {
        b.iter(|| push_drain::<SimpleBinaryHeap<_, _>>(black_box(&keys)))
    });
    group.bench_function("fibonacci", |b| {
        b.iter(|| push_drain::<FibonacciHeap<_, _>>(black_box(&keys)))
    });

    group.finish();
}

criterion_group!(benches, benchmark_prim, benchmark_push_drain);
criterion_main!(benches);
