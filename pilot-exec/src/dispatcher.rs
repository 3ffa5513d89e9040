use std::future::Future;
use std::sync::Arc;

use anyhow::Result;
use tokio::task::JoinSet;
use tracing::{error, info, warn};

use pilot_core::PriorityLevel;

use crate::config::ExecConfig;
use crate::context::ExecutionContext;
use crate::routine::RoutineHandle;

/// Owns the attached routines and drives them to completion.
///
/// All routines share one cancellation scope: a routine returning an error
/// switches the shared priority to Stop, which every sibling observes
/// within a tick and exits on. The session timeout is the one hard limit;
/// hitting it aborts whatever is still running.
pub struct Dispatcher {
    context: Arc<ExecutionContext>,
    config: ExecConfig,
    routines: JoinSet<Result<()>>,
}

impl Dispatcher {
    pub fn new(context: Arc<ExecutionContext>, config: ExecConfig) -> Self {
        Self {
            context,
            config,
            routines: JoinSet::new(),
        }
    }

    pub fn context(&self) -> &Arc<ExecutionContext> {
        &self.context
    }

    /// Shared tick settings for attached routines.
    pub fn config(&self) -> &ExecConfig {
        &self.config
    }

    /// Attach a long-running loop at a fixed priority and spawn it.
    ///
    /// The loop body receives its [`RoutineHandle`] and must poll
    /// `handle.gate()` every iteration.
    pub fn attach<F, Fut>(&mut self, name: &'static str, priority: PriorityLevel, routine: F)
    where
        F: FnOnce(RoutineHandle) -> Fut,
        Fut: Future<Output = Result<()>> + Send + 'static,
    {
        let handle = self.context.attach(priority);
        info!(routine = name, ?priority, "attaching routine");
        let fut = routine(handle);
        self.routines.spawn(async move {
            let result = fut.await;
            match &result {
                Ok(()) => info!(routine = name, "routine finished"),
                Err(e) => error!(routine = name, error = %e, "routine failed"),
            }
            result
        });
    }

    /// Drive every attached routine until all have exited.
    ///
    /// Resolves with the first routine error, if any; a session timeout
    /// resolves cleanly after forcing Stop and aborting stragglers.
    pub async fn run(mut self) -> Result<()> {
        let deadline = tokio::time::sleep(self.config.max_session);
        tokio::pin!(deadline);

        let mut first_error: Option<anyhow::Error> = None;
        loop {
            tokio::select! {
                _ = &mut deadline => {
                    warn!(max_session = ?self.config.max_session, "session limit reached, forcing stop");
                    self.context.switch_priority(PriorityLevel::Stop);
                    self.routines.shutdown().await;
                    break;
                }
                joined = self.routines.join_next() => {
                    match joined {
                        None => break,
                        Some(Ok(Ok(()))) => {}
                        Some(Ok(Err(e))) => {
                            self.context.switch_priority(PriorityLevel::Stop);
                            first_error.get_or_insert(e);
                        }
                        Some(Err(join_error)) => {
                            self.context.switch_priority(PriorityLevel::Stop);
                            first_error.get_or_insert(join_error.into());
                        }
                    }
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
