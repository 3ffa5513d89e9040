use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Movement pacing and give-up limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DriveConfig {
    /// Maximum tiles one walking command may advance the agent.
    pub walk_stride: u32,

    /// Maximum tiles one teleport may advance the agent.
    pub teleport_stride: u32,

    /// Delay between walking commands.
    pub walk_tick: Duration,

    /// Delay between teleport casts; teleport-class movement ticks faster.
    pub teleport_tick: Duration,

    /// Give up on a single `move_to` after this long without arriving.
    pub max_move_duration: Duration,

    /// Consider the agent arrived within this many tiles of the target.
    pub arrival_distance: u32,
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            walk_stride: default_walk_stride(),
            teleport_stride: default_teleport_stride(),
            walk_tick: default_walk_tick(),
            teleport_tick: default_teleport_tick(),
            max_move_duration: default_max_move_duration(),
            arrival_distance: default_arrival_distance(),
        }
    }
}

fn default_walk_stride() -> u32 {
    15
}
fn default_teleport_stride() -> u32 {
    25
}
fn default_walk_tick() -> Duration {
    Duration::from_millis(350)
}
fn default_teleport_tick() -> Duration {
    Duration::from_millis(200)
}
fn default_max_move_duration() -> Duration {
    Duration::from_secs(30)
}
fn default_arrival_distance() -> u32 {
    3
}
