//! Criterion benchmarks for road connectivity and per-tick aggregation.
//!
//! Benchmarks:
//!   - recompute_connectivity on the starter town
//!   - recompute_connectivity on a grid paved with a road lattice
//!   - count_connected over every tile kind
//!
//! Run with: cargo bench -p simulation --bench connectivity_bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use simulation::catalog::BuildingKind;
use simulation::config::GRID_SIZE;
use simulation::connectivity::recompute_connectivity;
use simulation::grid::{CityGrid, TileKind};
use simulation::world_init::starter_town;

fn starter_grid() -> CityGrid {
    let mut grid = CityGrid::default();
    for (kind, x, y) in starter_town() {
        let _ = grid.place_building(x, y, kind);
    }
    grid
}

/// Roads on every even row and column, houses in the gaps.
fn lattice_grid() -> CityGrid {
    let mut grid = CityGrid::default();
    let _ = grid.place_building(0, 0, BuildingKind::CityHall);
    for y in 0..GRID_SIZE {
        for x in 0..GRID_SIZE {
            let kind = if x % 2 == 0 || y % 2 == 0 {
                BuildingKind::Road
            } else {
                BuildingKind::House
            };
            let _ = grid.place_building(x, y, kind);
        }
    }
    grid
}

// ---------------------------------------------------------------------------
// Benchmark: recompute_connectivity
// ---------------------------------------------------------------------------

fn bench_recompute(c: &mut Criterion) {
    let mut group = c.benchmark_group("connectivity_recompute");
    group.sample_size(500);

    let starter = starter_grid();
    group.bench_function("starter_town", |b| {
        b.iter(|| black_box(recompute_connectivity(black_box(&starter))));
    });

    let lattice = lattice_grid();
    group.bench_function("road_lattice", |b| {
        b.iter(|| black_box(recompute_connectivity(black_box(&lattice))));
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Benchmark: count_connected
// ---------------------------------------------------------------------------

fn bench_count_connected(c: &mut Criterion) {
    let mut group = c.benchmark_group("connectivity_counts");
    group.sample_size(500);

    let grid = starter_grid();
    let connected = recompute_connectivity(&grid).groups;
    group.bench_function("all_tile_kinds", |b| {
        b.iter(|| {
            let total: u32 = TileKind::ALL
                .iter()
                .map(|&tile| grid.count_connected(black_box(&connected), tile))
                .sum();
            black_box(total)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_recompute, bench_count_connected);
criterion_main!(benches);
