use crowd_core::{AgentId, MarkerId, Tick};
use crowd_spatial::SpatialError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("{what} length {got} does not match population {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("marker {0} not found")]
    MarkerNotFound(MarkerId),

    #[error("search radius must be a non-negative number, got {0}")]
    InvalidRadius(f32),

    #[error("tick {now} is earlier than the previous tick {last}")]
    TimeWentBackwards { last: Tick, now: Tick },

    #[error("marker layout error: {0}")]
    Spatial(#[from] SpatialError),
}

pub type SimResult<T> = Result<T, SimError>;
