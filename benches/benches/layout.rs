//! Benchmark suite for FRM parsing, frame layout and composition
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use frm_benches::{generate_direction, generate_sprite, generate_sprite_bytes};
use frm_render::{
	RenderOptions,
	compose::{compose_directions, compose_grid, compose_packed},
	layout::layout_direction,
};
use frm_types::file::{FrmFile, Orientation, Palette};

/// Benchmark the offset converter over growing frame counts
fn bench_layout(c: &mut Criterion) {
	let mut group = c.benchmark_group("layout_direction");

	for frames in [8u16, 64, 512] {
		let direction = generate_direction(Orientation::East, frames, 32);
		group.throughput(Throughput::Elements(u64::from(frames)));
		group.bench_with_input(BenchmarkId::from_parameter(frames), direction.frames(), |b, frames| {
			b.iter(|| layout_direction(black_box(frames)));
		});
	}

	group.finish();
}

/// Benchmark FRM parsing
fn bench_parse(c: &mut Criterion) {
	let mut group = c.benchmark_group("frm_parse");

	for size in [16u16, 64] {
		let data = generate_sprite_bytes(16, size);
		group.throughput(Throughput::Bytes(data.len() as u64));
		group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
			b.iter(|| FrmFile::from_bytes(black_box(data)));
		});
	}

	group.finish();
}

/// Benchmark the three composers on the same sprite
fn bench_compose(c: &mut Criterion) {
	let mut group = c.benchmark_group("compose");
	let sprite = generate_sprite(12, 48);
	let palette = Palette::grayscale().with_multiplier(4).expect("grayscale never overflows");
	let lookup = |index: u8| palette.get(index);
	let options = RenderOptions::default();

	group.bench_function("grid", |b| b.iter(|| compose_grid(black_box(&sprite), lookup)));
	group.bench_function("directions", |b| b.iter(|| compose_directions(black_box(&sprite), lookup, &options)));
	group.bench_function("packed", |b| b.iter(|| compose_packed(black_box(&sprite), lookup, &options)));

	group.finish();
}

criterion_group!(benches, bench_layout, bench_parse, bench_compose);
criterion_main!(benches);
