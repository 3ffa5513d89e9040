use pilot_exec::ExecError;
use pilot_nav::NavError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriveError {
    #[error(transparent)]
    Nav(#[from] NavError),

    /// Another routine holds the priority; the command was not issued.
    /// Recoverable: skip the tick and poll again.
    #[error("preempted at the command gate")]
    Preempted,

    /// Stop observed mid-move. Recoverable: the issuing routine unwinds
    /// cleanly.
    #[error("movement cancelled")]
    Cancelled,

    #[error("input sink failed: {0}")]
    Sink(#[from] anyhow::Error),
}

impl From<ExecError> for DriveError {
    fn from(e: ExecError) -> Self {
        match e {
            ExecError::PriorityMismatch { .. } => DriveError::Preempted,
            ExecError::Stopped => DriveError::Cancelled,
        }
    }
}
