use tokio::sync::watch;
use tracing::info;

use pilot_core::PriorityLevel;

use crate::gate::CommandGate;
use crate::routine::RoutineHandle;

/// Per-agent holder of the current execution priority.
///
/// Owns the single writer side of the priority channel; every routine and
/// command gate reads through its own receiver. There is no global
/// accessor: whoever needs the context gets a reference or a handle.
#[derive(Debug)]
pub struct ExecutionContext {
    priority: watch::Sender<PriorityLevel>,
}

impl ExecutionContext {
    pub fn new() -> Self {
        let (priority, _) = watch::channel(PriorityLevel::Normal);
        Self { priority }
    }

    pub fn current_priority(&self) -> PriorityLevel {
        *self.priority.borrow()
    }

    /// Atomically replace the shared priority. `Stop` is terminal: once
    /// set, later switches are ignored.
    pub fn switch_priority(&self, level: PriorityLevel) {
        self.priority.send_if_modified(|current| {
            if current.is_terminal() || *current == level {
                return false;
            }
            info!(from = ?*current, to = ?level, "switching execution priority");
            *current = level;
            true
        });
    }

    /// Record a routine's fixed attached priority and hand it the shared
    /// priority to poll against.
    pub fn attach(&self, attached: PriorityLevel) -> RoutineHandle {
        RoutineHandle::new(attached, self.priority.subscribe())
    }

    /// Gate for the command-issuing boundary; see [`CommandGate`].
    pub fn command_gate(&self) -> CommandGate {
        CommandGate::new(self.priority.subscribe())
    }
}

impl Default for ExecutionContext {
    fn default() -> Self {
        Self::new()
    }
}
