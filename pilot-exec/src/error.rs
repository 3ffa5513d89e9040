use pilot_core::PriorityLevel;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExecError {
    /// The issuing routine's attached priority does not match the current
    /// execution priority; the command was not forwarded.
    #[error("attached priority {attached:?} does not hold the current priority {current:?}")]
    PriorityMismatch {
        attached: PriorityLevel,
        current: PriorityLevel,
    },

    /// Stop was observed. Recoverable: the observing routine unwinds
    /// cleanly, nothing else is affected.
    #[error("execution stopped")]
    Stopped,
}
