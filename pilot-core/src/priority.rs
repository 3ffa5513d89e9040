#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Execution priority totem shared by every attached routine.
///
/// Ordering matters: `Stop` is the lowest, terminal state; `High`
/// temporarily preempts `Normal` for short interrupt-style actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PriorityLevel {
    /// Terminal. Every attached routine must observe it and exit.
    Stop,
    /// Fully suspends progress without terminating any routine.
    Pause,
    Background,
    Normal,
    High,
}

impl PriorityLevel {
    pub fn is_terminal(self) -> bool {
        matches!(self, PriorityLevel::Stop)
    }
}
