//! Error types for VastuCover

use thiserror::Error;

use crate::config::ConfigLoadError;
use crate::core::Subregion;

/// Which end of a path an endpoint error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndpointRole {
    /// Path start cell
    Start,
    /// Path target cell
    Target,
}

impl std::fmt::Display for EndpointRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EndpointRole::Start => write!(f, "start"),
            EndpointRole::Target => write!(f, "target"),
        }
    }
}

/// VastuCover error type
#[derive(Error, Debug)]
pub enum CoverError {
    #[error("Grid must have at least one row and one column (got {rows}x{cols})")]
    EmptyGrid { rows: usize, cols: usize },

    #[error("Obstacle mask has {actual} cells, expected {expected}")]
    MaskSizeMismatch { expected: usize, actual: usize },

    #[error("Cannot divide {cols} columns into {requested} regions")]
    InvalidRegionCount { requested: usize, cols: usize },

    #[error("Divider positions {positions:?} are not strictly increasing within (0, {cols})")]
    InvalidDividers { positions: Vec<usize>, cols: usize },

    #[error("Region {region} ({subregion}) has zero area: {rows}x{cols}")]
    InvalidSubregion {
        region: usize,
        subregion: Subregion,
        rows: usize,
        cols: usize,
    },

    #[error("The {role} cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    EndpointOutOfBounds {
        role: EndpointRole,
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("The {role} cell ({row}, {col}) is an obstacle")]
    EndpointBlocked {
        role: EndpointRole,
        row: usize,
        col: usize,
    },

    #[error("Region {region} ({subregion}) contains no free cell")]
    NoFreeCell { region: usize, subregion: Subregion },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigLoadError),
}

impl CoverError {
    /// Short error code for logging.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyGrid { .. } => "EMPTY_GRID",
            Self::MaskSizeMismatch { .. } => "MASK_SIZE",
            Self::InvalidRegionCount { .. } => "INVALID_REGION_COUNT",
            Self::InvalidDividers { .. } => "INVALID_DIVIDERS",
            Self::InvalidSubregion { .. } => "INVALID_SUBREGION",
            Self::EndpointOutOfBounds { .. } => "ENDPOINT_OUT_OF_BOUNDS",
            Self::EndpointBlocked { .. } => "ENDPOINT_BLOCKED",
            Self::NoFreeCell { .. } => "NO_FREE_CELL",
            Self::Config(_) => "CONFIG",
        }
    }

    /// Errors that only affect a single sub-region; the pipeline skips it
    /// and carries on with the remaining regions.
    pub fn is_region_local(&self) -> bool {
        matches!(
            self,
            Self::InvalidSubregion { .. }
                | Self::EndpointOutOfBounds { .. }
                | Self::EndpointBlocked { .. }
                | Self::NoFreeCell { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, CoverError>;
