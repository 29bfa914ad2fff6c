//! Region planner configuration section.

use serde::{Deserialize, Serialize};

use crate::planner::EndpointRepair;

/// Region planner settings
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct PlannerSection {
    /// How start/end cells that land on obstacles are repaired
    #[serde(default)]
    pub endpoint_repair: EndpointRepair,
}
