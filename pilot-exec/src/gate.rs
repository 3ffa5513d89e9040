use std::future::Future;

use tokio::sync::{watch, Mutex};

use pilot_core::PriorityLevel;

use crate::error::ExecError;

/// Mutual-exclusion guard around the command-issuing boundary.
///
/// By convention only the routine whose attached priority matches the
/// current execution priority may issue movement or input commands; the
/// gate makes that structural. The priority check happens under the lock,
/// so a concurrent switch cannot let two routines interleave commands.
#[derive(Debug)]
pub struct CommandGate {
    lock: Mutex<()>,
    priority: watch::Receiver<PriorityLevel>,
}

impl CommandGate {
    pub(crate) fn new(priority: watch::Receiver<PriorityLevel>) -> Self {
        Self {
            lock: Mutex::new(()),
            priority,
        }
    }

    /// Run `command` while holding the gate, provided `attached` holds the
    /// current priority. A mismatch is a typed error, never a silent
    /// pass-through; callers treat it exactly like a yielded tick.
    pub async fn issue<F, T>(&self, attached: PriorityLevel, command: F) -> Result<T, ExecError>
    where
        F: Future<Output = T>,
    {
        let _held = self.lock.lock().await;
        let current = *self.priority.borrow();
        if current.is_terminal() {
            return Err(ExecError::Stopped);
        }
        if current != attached {
            return Err(ExecError::PriorityMismatch { attached, current });
        }
        Ok(command.await)
    }
}
