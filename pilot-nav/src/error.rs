use pilot_core::{AreaId, Position};
use thiserror::Error;

/// Navigation failure taxonomy.
///
/// `NotFound` is recoverable (pick an alternate target, retry);
/// `OutOfBounds` is fatal for the operation and must end the current
/// high-level action, never the whole agent.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavError {
    #[error("no path found")]
    NotFound,

    #[error("destination {0:?} is outside the loaded grid and no adjacent level matches")]
    OutOfBounds(Position),

    #[error("no collision data available for area {0:?}")]
    MissingAreaData(AreaId),
}
