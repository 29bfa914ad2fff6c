//! Region path planning.
//!
//! [`RegionPathGenerator`] turns endpoint records into per-region paths in
//! global coordinates. [`CoveragePlanner`] runs the whole pipeline:
//!
//! ```text
//! Layout -> RegionDivider -> PathEndpointGenerator -> RegionPathGenerator
//!           (dividers)       (start/end per region)   (paths per region)
//! ```
//!
//! ```rust,ignore
//! use vastu_cover::{CoveragePlanner, GridLayout};
//!
//! let layout = GridLayout::new(20, 30)?.with_rectangular_boundary();
//! let plan = CoveragePlanner::default().plan(&layout, 5)?;
//! for region in &plan.paths {
//!     println!("{} {}: {} cells", region.region, region.subregion, region.path.len());
//! }
//! ```

mod coverage;
mod region_paths;
mod types;

pub use coverage::CoveragePlanner;
pub use region_paths::RegionPathGenerator;
pub use types::{
    CoveragePlan, EndpointRepair, PlannerConfig, RegionPath, RegionPlan, SkippedRegion,
};
