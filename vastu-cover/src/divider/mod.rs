//! Region division.
//!
//! The grid is cut into vertical strips of roughly equal free area, then
//! each strip is optionally split by one horizontal divider so that the
//! free cells above and below are balanced.
//!
//! ```text
//!   row
//!    ^   +-----+-----+-----+
//!    |   |  U  |  U  |  U  |
//!    |   |-----|     |-----|   U = upper, L = lower sub-region
//!    |   |  L  |-----|  L  |
//!    |   |     |  L  |     |
//!    0   +-----+-----+-----+--> col
//!        0     d1    d2    cols
//! ```

mod region_divider;
mod types;

pub use region_divider::{RegionDivider, strip_bounds};
pub use types::{HorizontalDivider, SubregionArea};
