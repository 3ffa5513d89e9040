use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Execution-context tuning knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecConfig {
    /// Polling interval for attached routines. Cancellation and priority
    /// changes are observed within one tick.
    pub tick_interval: Duration,

    /// Hard cap on the overall session; reaching it forces a stop
    /// regardless of what any routine is doing.
    pub max_session: Duration,
}

impl Default for ExecConfig {
    fn default() -> Self {
        Self {
            tick_interval: default_tick_interval(),
            max_session: default_max_session(),
        }
    }
}

fn default_tick_interval() -> Duration {
    Duration::from_millis(100)
}

fn default_max_session() -> Duration {
    Duration::from_secs(3 * 60 * 60)
}
