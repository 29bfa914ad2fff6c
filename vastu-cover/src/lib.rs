//! # VastuCover
//!
//! Coverage path planning on 2D occupancy grids.
//!
//! ## Overview
//!
//! VastuCover turns a room layout (grid + obstacle mask + outer boundary)
//! into an ordered set of sweep paths:
//!
//! 1. **Division** - vertical strips of equal free area, each optionally
//!    split once horizontally ([`RegionDivider`])
//! 2. **Endpoints** - start/end points where the dividers cross the
//!    boundary ([`PathEndpointGenerator`])
//! 3. **Search** - one long non-self-crossing path per (sub)region
//!    ([`ObstacleAwareLongestPath`])
//! 4. **Assembly** - local paths translated back to the global grid
//!    ([`RegionPathGenerator`], [`CoveragePlanner`])
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use vastu_cover::{CoverConfig, CoveragePlanner, GridLayout};
//!
//! let layout = GridLayout::from_ascii(&[
//!     "..........",
//!     "...##.....",
//!     "...##.....",
//!     "..........",
//! ])?
//! .with_rectangular_boundary();
//!
//! let planner = CoveragePlanner::new(CoverConfig::load_default()?);
//! let plan = planner.plan(&layout, 3)?;
//! println!("{:.1}% of free cells covered", plan.coverage);
//! ```
//!
//! ## Coordinate System
//!
//! - Cells are `(row, col)`, 0-indexed
//! - Boundary points are `(x, y)` with `x` along columns and `y` along rows
//! - Row 0 is the bottom of the boundary polygon; "upper" sub-regions hold
//!   the higher row indices

// Core types
pub mod core;

// Layout collaborator
pub mod layout;

// Unified configuration
pub mod config;

// Error types
pub mod error;

// Per-region path search
pub mod search;

// Area-balanced region division
pub mod divider;

// Path endpoints from divider/boundary intersections
pub mod endpoints;

// Per-region paths and the full pipeline
pub mod planner;

// Re-export commonly used types
pub use crate::core::{
    AreaTable, BoundaryPoint, BoundaryPolygon, CellState, GridCell, OccupancyGrid, RegionBounds,
    Segment, Subregion, VisitedMask,
};

pub use layout::{GridLayout, Layout};

pub use config::{ConfigLoadError, CoverConfig};

pub use error::{CoverError, EndpointRole, Result};

pub use search::{
    FallbackReason, ObstacleAwareLongestPath, PathReport, SearchConfig, SearchFailure, Strategy,
    TargetPolicy,
};

pub use divider::{HorizontalDivider, RegionDivider, SubregionArea};

pub use endpoints::{BoundaryIntersector, EndpointRecord, PathEndpointGenerator, SegmentClipper};

pub use planner::{
    CoveragePlan, CoveragePlanner, EndpointRepair, PlannerConfig, RegionPath, RegionPathGenerator,
    RegionPlan, SkippedRegion,
};
