//! Benchmark coverage planning stages.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use vastu_cover::{
    CoveragePlanner, GridCell, GridLayout, Layout, ObstacleAwareLongestPath, OccupancyGrid,
    RegionDivider,
};

/// Square room with a 2x2 pillar every 8 cells.
fn pillar_room(size: usize) -> GridLayout {
    let pillars = (0..size)
        .flat_map(|r| (0..size).map(move |c| GridCell::new(r, c)))
        .filter(|c| c.row % 8 >= 3 && c.row % 8 < 5 && c.col % 8 >= 3 && c.col % 8 < 5);
    GridLayout::new(size, size)
        .unwrap()
        .with_obstacles(pillars)
        .with_rectangular_boundary()
}

fn bench_divider(c: &mut Criterion) {
    let mut group = c.benchmark_group("divider");

    for size in [32, 64, 128] {
        let grid = pillar_room(size).occupancy_grid().unwrap();
        group.bench_with_input(BenchmarkId::new("vertical_and_horizontal", size), &grid, |b, grid| {
            b.iter(|| {
                let divider = RegionDivider::new(black_box(grid));
                let v = divider.generate_vertical_dividers(5).unwrap();
                black_box(divider.generate_horizontal_dividers(&v))
            })
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for size in [8, 16, 32] {
        let grid = OccupancyGrid::new(size, size).unwrap();
        let search = ObstacleAwareLongestPath::from_grid(
            grid,
            GridCell::new(0, 0),
            GridCell::new(size - 1, size - 1),
        )
        .unwrap();
        group.bench_with_input(BenchmarkId::new("meander", size), &search, |b, search| {
            b.iter(|| black_box(search.meander_path()))
        });
    }

    let search = ObstacleAwareLongestPath::new(
        8,
        8,
        [GridCell::new(3, 3), GridCell::new(3, 4), GridCell::new(4, 3), GridCell::new(4, 4)],
        GridCell::new(0, 0),
        GridCell::new(7, 7),
    )
    .unwrap();
    group.bench_function("hamilton_8x8_pillar", |b| {
        b.iter(|| black_box(search.generate_longest_path()))
    });

    group.finish();
}

fn bench_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan");
    group.sample_size(20);

    let planner = CoveragePlanner::default();
    for size in [24, 48] {
        let layout = pillar_room(size);
        group.bench_with_input(BenchmarkId::new("pillar_room", size), &layout, |b, layout| {
            b.iter(|| black_box(planner.plan(layout, 4).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_divider, bench_search, bench_plan);
criterion_main!(benches);
