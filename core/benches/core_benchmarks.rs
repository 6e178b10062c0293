use criterion::{Criterion, black_box, criterion_group, criterion_main};

use glkit_core::math::Vec3;
use glkit_core::mesh::{Cube, Geometry, GridLines};
use glkit_core::texture::Image;

// ---------------------------------------------------------------------------
// Geometry construction
// ---------------------------------------------------------------------------

fn bench_cube(c: &mut Criterion) {
    c.bench_function("cube_new", |b| {
        b.iter(|| Cube::new(black_box(false), black_box(Vec3::new(2.0, 1.0, 3.0))));
    });
}

fn bench_grid_lines_small(c: &mut Criterion) {
    c.bench_function("grid_lines_10", |b| {
        b.iter(|| GridLines::new(black_box(10)));
    });
}

fn bench_grid_lines_large(c: &mut Criterion) {
    c.bench_function("grid_lines_1000", |b| {
        b.iter(|| GridLines::new(black_box(1000)));
    });
}

fn bench_positions(c: &mut Criterion) {
    let grid = GridLines::new(100);
    c.bench_function("grid_lines_100_positions", |b| {
        b.iter(|| black_box(grid.positions()));
    });
}

// ---------------------------------------------------------------------------
// Pixel buffer reshaping
// ---------------------------------------------------------------------------

fn rgba_image(size: u32) -> Image {
    let data: Vec<u8> = (0..size * size * 4).map(|i| i as u8).collect();
    Image::from_buffer(size, size, 4, data, true)
}

fn bench_to_rows(c: &mut Criterion) {
    let image = rgba_image(512);
    c.bench_function("image_512_to_rows", |b| {
        b.iter(|| black_box(image.to_rows()));
    });
}

fn bench_from_rows(c: &mut Criterion) {
    let rows = rgba_image(512).to_rows();
    c.bench_function("image_512_from_rows", |b| {
        b.iter(|| Image::from_rows(black_box(&rows), 512, 512, 4));
    });
}

criterion_group!(
    benches,
    bench_cube,
    bench_grid_lines_small,
    bench_grid_lines_large,
    bench_positions,
    bench_to_rows,
    bench_from_rows,
);
criterion_main!(benches);
