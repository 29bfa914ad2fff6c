//! Main CoverConfig and conversion methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::planner::PlannerConfig;
use crate::search::SearchConfig;

use super::divider::DividerSection;
use super::error::ConfigLoadError;
use super::planner::PlannerSection;
use super::search::SearchSection;

/// Full VastuCover configuration loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct CoverConfig {
    /// Path search settings
    #[serde(default)]
    pub search: SearchSection,

    /// Region division settings
    #[serde(default)]
    pub divider: DividerSection,

    /// Region planner settings
    #[serde(default)]
    pub planner: PlannerSection,
}

impl CoverConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/cover.yaml)
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new("configs/cover.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that parse but cannot drive the planner
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        let threshold = self.search.hamilton_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigLoadError::Invalid {
                field: "search.hamilton_threshold",
                reason: format!("{} is outside [0, 1]", threshold),
            });
        }
        if self.search.max_expansions == 0 {
            return Err(ConfigLoadError::Invalid {
                field: "search.max_expansions",
                reason: "must be positive".to_string(),
            });
        }
        Ok(())
    }

    /// Runtime config for the per-region path search
    pub fn to_search_config(&self) -> SearchConfig {
        SearchConfig {
            hamilton_threshold: self.search.hamilton_threshold,
            max_expansions: self.search.max_expansions,
            fallback_on_failure: self.search.fallback_on_failure,
            target_policy: self.search.target_policy,
        }
    }

    /// Runtime config for the region planner
    pub fn to_planner_config(&self) -> PlannerConfig {
        PlannerConfig {
            search: self.to_search_config(),
            endpoint_repair: self.planner.endpoint_repair,
        }
    }

    /// Whether vertical strips get a horizontal divider
    pub fn split_strips(&self) -> bool {
        self.divider.split_strips
    }
}
