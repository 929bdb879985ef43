//! Measure relaxation of a single seed across an open grid
//!
//! Grid is 200 tiles by 200 tiles with the seed in the top left so that every
//! sweep has work to do
//!

use bevy::prelude::*;
use bevy_influence_fields_plugin::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Create the grid and a seeded field before benchmarking
fn prepare_field(width: usize, height: usize) -> (Grid, FieldBuffer) {
	let grid = Grid::open(width, height);
	let mut field = FieldBuffer::initialize(&grid);
	field.seed_at(&grid, IVec2::ZERO);
	(grid, field)
}

/// Relax a fresh copy of the seeded field to its fixed point
fn relax_open(grid: &Grid, mut field: FieldBuffer) -> RelaxationReport {
	relax(grid, &mut field, None)
}

pub fn criterion_benchmark(c: &mut Criterion) {
	let mut group = c.benchmark_group("algorithm_use");
	group.significance_level(0.05).sample_size(100);
	let (grid, field) = prepare_field(200, 200);
	group.bench_function("relax_open", |b| {
		b.iter(|| relax_open(black_box(&grid), black_box(field.clone())))
	});
	group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
