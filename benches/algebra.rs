//! Benchmarks for the set-algebra functions and in-place mutation of a `Set`.

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use hashset_algebra::{difference, intersection, union, Set};

/// number of elements in each operand set
const SIZE: u32 = 1_000;

fn operands() -> (Set<u32>, Set<u32>, Set<u32>) {
	(
		(0..SIZE).collect(),
		(SIZE / 2..SIZE + SIZE / 2).collect(),
		(0..SIZE).step_by(3).collect(),
	)
}

fn bench_algebra(c: &mut Criterion) {
	let (a, b, d) = operands();
	let mut group = c.benchmark_group("Set Algebra (1000 items)");

	group.bench_function("union", |bench| {
		bench.iter(|| black_box(union(&a, [&b, &d])))
	});
	group.bench_function("intersection", |bench| {
		bench.iter(|| black_box(intersection(&a, [&b, &d])))
	});
	group.bench_function("difference", |bench| {
		bench.iter(|| black_box(difference(&a, [&b, &d])))
	});

	group.finish();
}

fn bench_mutation(c: &mut Criterion) {
	let (a, b, _) = operands();
	let mut group = c.benchmark_group("Set Mutation (1000 items)");

	group.bench_function("update", |bench| {
		bench.iter_batched(
			|| a.clone(),
			|mut set| {
				set.update([&b]);
				black_box(set);
			},
			BatchSize::SmallInput,
		)
	});
	group.bench_function("remove", |bench| {
		bench.iter_batched(
			|| a.clone(),
			|mut set| {
				let _ = black_box(set.remove(SIZE / 2..SIZE + SIZE / 2));
			},
			BatchSize::SmallInput,
		)
	});

	group.finish();
}

criterion_group!(benches, bench_algebra, bench_mutation);
criterion_main!(benches);
