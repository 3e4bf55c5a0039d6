use criterion::{Criterion, black_box, criterion_group, criterion_main};
use math::{from_digits, is_prime, prev_permutation};

fn walk_permutations(n: u8) -> u64 {
    let mut digits: Vec<u8> = (1..=n).rev().collect();
    let mut primes = 0u64;
    loop {
        if is_prime(from_digits(&digits)) {
            primes += 1;
        }
        if !prev_permutation(&mut digits) {
            return primes;
        }
    }
}

fn run_all_benchmarks(c: &mut Criterion) {
    let mut group_prime = c.benchmark_group("is_prime");
    group_prime.bench_function("7_digits", |b| b.iter(|| is_prime(black_box(7652413))));
    group_prime.bench_function("9_digits", |b| b.iter(|| is_prime(black_box(987654103))));
    group_prime.finish();

    let mut group_walk = c.benchmark_group("permutation_walk");
    group_walk.bench_function("n_7", |b| b.iter(|| walk_permutations(black_box(7))));
    group_walk.finish();

    let mut group_walk_9 = c.benchmark_group("permutation_walk_n_9");
    group_walk_9.sample_size(10);
    group_walk_9.bench_function("sequential", |b| b.iter(|| walk_permutations(black_box(9))));
    group_walk_9.finish();
}

criterion_group!(benches, run_all_benchmarks);
criterion_main!(benches);
