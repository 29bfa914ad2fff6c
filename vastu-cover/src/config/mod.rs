//! Unified configuration loading for VastuCover.
//!
//! Loads all configuration from a single YAML file with sensible defaults.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use vastu_cover::config::CoverConfig;
//!
//! // Load from default path (configs/cover.yaml)
//! let config = CoverConfig::load_default()?;
//!
//! // Or use built-in defaults (no file needed)
//! let config = CoverConfig::default();
//!
//! // Convert to runtime configs
//! let search_config = config.to_search_config();
//! let planner_config = config.to_planner_config();
//! ```
//!
//! ## Configuration Sections
//!
//! | Section | Description |
//! |---------|-------------|
//! | [`SearchSection`] | Backtracking threshold, expansion budget, sweep finishing |
//! | [`DividerSection`] | Whether strips are split horizontally |
//! | [`PlannerSection`] | Endpoint repair on obstacle cells |
//!
//! ## Example YAML
//!
//! ```yaml
//! search:
//!   hamilton_threshold: 0.7     # switch to converging after 70% of free cells
//!   max_expansions: 2000000     # backtracking budget per region
//!   fallback_on_failure: true   # sweep when backtracking cannot reach target
//!   target_policy: truncate     # or: prefer_coverage
//!
//! divider:
//!   split_strips: true
//!
//! planner:
//!   endpoint_repair: relocate   # or: unflag
//! ```

mod cover;
mod defaults;
mod divider;
mod error;
mod planner;
mod search;

// Re-export main types
pub use cover::CoverConfig;
pub use error::ConfigLoadError;

// Re-export section types
pub use divider::DividerSection;
pub use planner::PlannerSection;
pub use search::SearchSection;
