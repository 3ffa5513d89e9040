use tokio::sync::watch;

use pilot_core::PriorityLevel;

/// What a routine must do this iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Attached priority holds the totem: do the work.
    Proceed,
    /// Someone else holds it (or everything is paused): no-op this
    /// iteration and poll again next tick. Never block, never terminate.
    Yield,
    /// Terminal: exit the loop and release resources.
    Stop,
}

/// A routine's view of the shared execution priority.
///
/// The attached priority is fixed at attach time; `gate()` is the
/// non-blocking poll every loop iteration must make before doing any
/// state-changing work.
#[derive(Debug, Clone)]
pub struct RoutineHandle {
    attached: PriorityLevel,
    priority: watch::Receiver<PriorityLevel>,
}

impl RoutineHandle {
    pub(crate) fn new(attached: PriorityLevel, priority: watch::Receiver<PriorityLevel>) -> Self {
        Self { attached, priority }
    }

    pub fn attached_priority(&self) -> PriorityLevel {
        self.attached
    }

    pub fn current_priority(&self) -> PriorityLevel {
        *self.priority.borrow()
    }

    pub fn gate(&self) -> Gate {
        let current = self.current_priority();
        if current.is_terminal() {
            Gate::Stop
        } else if current == self.attached {
            Gate::Proceed
        } else {
            Gate::Yield
        }
    }

    /// Whether Stop has been observed; shorthand for cancellation checks
    /// inside operations that are not full polling loops.
    pub fn is_stopped(&self) -> bool {
        self.current_priority().is_terminal()
    }
}
