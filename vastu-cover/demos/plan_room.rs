//! Plan coverage for a small furnished room.
//!
//! This example demonstrates:
//! - Building a layout from an ASCII picture
//! - Loading configuration (configs/cover.yaml or defaults)
//! - Running the full planning pipeline
//! - Printing the per-region summary and the covered grid
//!
//! # Usage
//!
//! ```bash
//! RUST_LOG=info cargo run --example plan_room -- 5
//! ```

use log::{info, warn};

use vastu_cover::{CoverConfig, CoveragePlanner, GridLayout, Layout};

const ROOM: [&str; 12] = [
    "........................",
    "........................",
    "...##...........####....",
    "...##...........####....",
    "................####....",
    "........................",
    "..........##............",
    "..........##............",
    "........................",
    "....######..............",
    "........................",
    "........................",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let regions: usize = std::env::args()
        .nth(1)
        .map(|arg| arg.parse::<usize>())
        .transpose()?
        .unwrap_or(4);

    let layout = GridLayout::from_ascii(&ROOM)?.with_rectangular_boundary();
    let config = CoverConfig::load_default()?;
    let planner = CoveragePlanner::new(config);

    let plan = planner.plan(&layout, regions)?;

    info!("Vertical dividers: {:?}", plan.vertical);
    for area in &plan.areas {
        info!(
            "Region {}: {} free cells (upper {:?}, lower {:?}, split {:?})",
            area.region, area.total, area.upper, area.lower, area.split
        );
    }
    for region in &plan.paths {
        info!(
            "Region {} {:>5}: {:>3} cells via {} ({:.1}%)",
            region.region,
            region.subregion,
            region.path.len(),
            region.strategy.as_str(),
            region.coverage
        );
    }
    for skipped in &plan.skipped {
        warn!(
            "Region {} {} skipped: {}",
            skipped.region, skipped.subregion, skipped.reason
        );
    }

    // Covered cells as '*', obstacles as '#', misses as '.'; top row first
    let grid = layout.occupancy_grid()?;
    let route = plan.route();
    for row in (0..grid.rows()).rev() {
        let line: String = (0..grid.cols())
            .map(|col| {
                let cell = vastu_cover::GridCell::new(row, col);
                if grid.is_obstacle(cell) {
                    '#'
                } else if route.contains(&cell) {
                    '*'
                } else {
                    '.'
                }
            })
            .collect();
        println!("{}", line);
    }

    println!(
        "Coverage {:.1}% of {} free cells in {:.2}ms",
        plan.coverage,
        plan.free_cells,
        plan.elapsed.as_secs_f64() * 1000.0
    );
    Ok(())
}
