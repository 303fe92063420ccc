use criterion::{Criterion, criterion_group, criterion_main};
use markup_tiles_core::{GeoPoint, PixelPoint, TileProjection};
use std::hint::black_box;

const MARKER_COUNT: usize = 10_000;

fn markers() -> Vec<GeoPoint> {
	(0..MARKER_COUNT)
		.map(|i| {
			let t = i as f64 / MARKER_COUNT as f64;
			GeoPoint::new(t * 170.0 - 85.0, t * 720.0 - 360.0)
		})
		.collect()
}

fn benchmark_project(c: &mut Criterion) {
	let projection = TileProjection::new(768, 1205, 1539, 12);
	let markers = markers();

	c.bench_function("project", |b| {
		b.iter(|| {
			for marker in &markers {
				black_box(projection.project(black_box(marker)));
			}
		});
	});
}

fn benchmark_unproject(c: &mut Criterion) {
	let projection = TileProjection::new(768, 1205, 1539, 12);
	let pixels: Vec<PixelPoint> = (0..MARKER_COUNT)
		.map(|i| PixelPoint::new((i % 768) as f64, (i / 13 % 768) as f64))
		.collect();

	c.bench_function("unproject", |b| {
		b.iter(|| {
			for pixel in &pixels {
				black_box(projection.unproject(black_box(pixel)));
			}
		});
	});
}

fn benchmark_tile_bounds(c: &mut Criterion) {
	c.bench_function("tile_bounds", |b| {
		b.iter(|| {
			for x in 0..64 {
				black_box(TileProjection::new(768, black_box(x), 17, 6).tile_bounds());
			}
		});
	});
}

criterion_group!(
	name = benches;
	config = Criterion::default().significance_level(0.1).sample_size(30);
	targets = benchmark_project, benchmark_unproject, benchmark_tile_bounds
);
criterion_main!(benches);
