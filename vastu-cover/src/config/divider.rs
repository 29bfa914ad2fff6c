//! Region division configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Region division settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DividerSection {
    /// Split every vertical strip into upper and lower halves
    #[serde(default = "defaults::enabled")]
    pub split_strips: bool,
}

impl Default for DividerSection {
    fn default() -> Self {
        Self { split_strips: true }
    }
}
