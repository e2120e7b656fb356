//! Spatial-subsystem error type.

use thiserror::Error;

/// Errors produced while laying out markers.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("plane {width}x{depth} has no interior cells inside the {margin}-unit margin")]
    PlaneTooSmall { width: u32, depth: u32, margin: u32 },

    #[error("{requested} markers requested but the plane interior only has {cells} cells")]
    TooDense { requested: usize, cells: usize },

    #[error("gave up placing marker {placed} of {requested} after {attempts} rejected cells; lower the marker density")]
    PlacementExhausted {
        placed:    usize,
        requested: usize,
        attempts:  usize,
    },
}

pub type SpatialResult<T> = Result<T, SpatialError>;
