//! Criterion micro-benchmarks for graph views and breadth-first search.

use criterion::{criterion_group, criterion_main, Criterion};
use ridge_bench::{synthetic_droplet, synthetic_heightmap};
use ridge_core::Coord3;
use ridge_grid::{ClimbRule, Graph, Grid3, OpenAir, PlaneView, VolumeView};
use ridge_puzzles::{HillClimb, LavaDroplet};
use ridge_search::{breadth_first_search, NullVisitor};
use ridge_test_utils::HILL_SAMPLE;
use std::hint::black_box;

/// Benchmark: walk neighbours() of all 10K cells of a 100x100 heightmap.
fn bench_neighbours_plane_10k(c: &mut Criterion) {
    let grid = synthetic_heightmap(100, 100, 1).unwrap();
    let view = PlaneView::new(&grid, ClimbRule::ascending());

    c.bench_function("neighbours_plane_10k", |b| {
        b.iter(|| {
            for v in view.vertices() {
                for w in view.neighbours(v) {
                    black_box(w);
                }
            }
        });
    });
}

/// Benchmark: full search over a 200x200 heightmap from its start.
fn bench_bfs_heightmap_40k(c: &mut Criterion) {
    let grid = synthetic_heightmap(200, 200, 2).unwrap();
    let view = PlaneView::new(&grid, ClimbRule::ascending());
    let start = grid.position(|&b| b == b'S').unwrap();

    c.bench_function("bfs_heightmap_40k", |b| {
        b.iter(|| {
            let r = breadth_first_search(&view, black_box(start), NullVisitor).unwrap();
            black_box(r.reached_count());
        });
    });
}

/// Benchmark: flood the air around a 32x32x32 droplet.
fn bench_bfs_volume_32k(c: &mut Criterion) {
    let grid = Grid3::from_cubes(synthetic_droplet(15, 3), 1).unwrap();
    let view = VolumeView::new(&grid, OpenAir);

    c.bench_function("bfs_volume_32k", |b| {
        b.iter(|| {
            let r = breadth_first_search(&view, black_box(Coord3::ORIGIN), NullVisitor).unwrap();
            black_box(r.reached_count());
        });
    });
}

/// Benchmark: both hill-climbing parts on the small sample, parse included.
fn bench_hill_sample(c: &mut Criterion) {
    c.bench_function("hill_sample_both_parts", |b| {
        b.iter(|| {
            let hill = HillClimb::parse(black_box(HILL_SAMPLE)).unwrap();
            black_box((hill.part_one(), hill.part_two()));
        });
    });
}

/// Benchmark: exterior surface of a radius-15 droplet.
fn bench_lava_exterior(c: &mut Criterion) {
    let droplet = LavaDroplet::from_cubes(synthetic_droplet(15, 4)).unwrap();

    c.bench_function("lava_exterior_r15", |b| {
        b.iter(|| black_box(droplet.part_two()));
    });
}

criterion_group!(
    benches,
    bench_neighbours_plane_10k,
    bench_bfs_heightmap_40k,
    bench_bfs_volume_32k,
    bench_hill_sample,
    bench_lava_exterior
);
criterion_main!(benches);
