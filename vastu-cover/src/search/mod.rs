//! Per-region path search.
//!
//! [`ObstacleAwareLongestPath`] builds one long path through a rectangular
//! region from a start cell toward a target cell:
//!
//! - Regions containing obstacles run a depth-first backtracking search that
//!   first moves away from the target and converges on it once the path
//!   covers [`SearchConfig::hamilton_threshold`] of the free cells.
//! - Open regions, and regions where backtracking fails, use a boustrophedon
//!   sweep stitched together with shortest-path detours.
//!
//! ```rust,ignore
//! use vastu_cover::core::GridCell;
//! use vastu_cover::search::ObstacleAwareLongestPath;
//!
//! let search = ObstacleAwareLongestPath::new(
//!     3, 3, [GridCell::new(1, 1)], GridCell::new(0, 0), GridCell::new(2, 2),
//! )?;
//! let report = search.generate_longest_path();
//! println!("{} cells via {:?}", report.path.len(), report.strategy);
//! ```

mod bfs;
mod hamilton;
mod longest_path;
mod meander;
mod types;

pub use longest_path::ObstacleAwareLongestPath;
pub use types::{FallbackReason, PathReport, SearchConfig, SearchFailure, Strategy, TargetPolicy};
