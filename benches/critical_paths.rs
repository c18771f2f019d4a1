//! Criterion benchmarks for sprite generation critical paths
//!
//! Benchmarks the core performance-critical operations:
//! - Shapes: coverage rasterization at supersampled size
//! - Renderer: draw list to 512x512 canvas, per character
//! - Output: premultiplied Lanczos downsample to 128x128

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use shimeji_sprites::build::render_sprite;
use shimeji_sprites::characters::Character;
use shimeji_sprites::geometry::{BBox, Point, SUPER_SIZE};
use shimeji_sprites::output::finalize;
use shimeji_sprites::pose::Pose;
use shimeji_sprites::renderer::render_list;
use shimeji_sprites::shapes::{rasterize_ellipse, rasterize_polygon, rasterize_segment};

// =============================================================================
// Shapes Benchmarks
// =============================================================================

fn bench_shapes(c: &mut Criterion) {
    let mut group = c.benchmark_group("shapes");

    for radius in [16, 64, 128].iter() {
        let bbox = BBox::around(Point::new(256, 256), *radius);
        group.throughput(Throughput::Elements((*radius * *radius * 4) as u64));
        group.bench_with_input(
            BenchmarkId::new("ellipse", format!("r{}", radius)),
            &bbox,
            |b, bbox| b.iter(|| rasterize_ellipse(black_box(*bbox))),
        );
    }

    let wavy: Vec<Point> = (0..=40)
        .map(|i| {
            let t = i as f64 / 40.0;
            Point::new((60.0 + 380.0 * t) as i32, (340.0 + 24.0 * (t * 18.85).sin()) as i32)
        })
        .chain([Point::new(440, 100), Point::new(60, 100)])
        .collect();
    group.bench_function("polygon_wavy_hem", |b| b.iter(|| rasterize_polygon(black_box(&wavy))));

    group.bench_function("segment_thick", |b| {
        b.iter(|| {
            rasterize_segment(black_box(Point::new(40, 40)), black_box(Point::new(470, 300)), 12)
        })
    });

    group.finish();
}

// =============================================================================
// Renderer Benchmarks
// =============================================================================

fn bench_renderer(c: &mut Criterion) {
    let mut group = c.benchmark_group("renderer");
    group.throughput(Throughput::Elements((SUPER_SIZE * SUPER_SIZE) as u64));

    for character in Character::ALL {
        let list = character.draw_list(Pose::StandNeutral);
        group.bench_with_input(BenchmarkId::new("render_list", character), &list, |b, list| {
            b.iter(|| render_list(black_box(list)))
        });
    }

    group.bench_function("draw_list_ghost_all_poses", |b| {
        b.iter(|| {
            for pose in Pose::ALL {
                black_box(Character::Ghost.draw_list(pose));
            }
        })
    });

    group.finish();
}

// =============================================================================
// Output Benchmarks
// =============================================================================

fn bench_output(c: &mut Criterion) {
    let mut group = c.benchmark_group("output");

    let canvas = Character::Kitten.render(Pose::Sit);
    group.throughput(Throughput::Elements((SUPER_SIZE * SUPER_SIZE) as u64));
    group.bench_function("finalize", |b| b.iter(|| finalize(black_box(&canvas))));

    group.bench_function("render_sprite_end_to_end", |b| {
        b.iter(|| render_sprite(black_box(Character::Blob), black_box(Pose::BounceSquish)))
    });

    group.finish();
}

// =============================================================================
// Criterion Configuration
// =============================================================================

criterion_group!(benches, bench_shapes, bench_renderer, bench_output);

criterion_main!(benches);
