use serde::{Deserialize, Serialize};

/// Pathfinder tuning knobs.
///
/// The defaults match the calibrated production values; callers normally
/// deserialize this from their own config surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Cost of stepping onto a SoftBlocker tile (Plain costs 1).
    pub soft_blocker_cost: u32,

    /// Ring-expansion search: radius increment between scanned rings.
    pub ring_step: u32,

    /// Ring-expansion search: give up past this radius.
    pub ring_max_radius: u32,

    /// Half-width of the square cleared around a teleport destination,
    /// compensating for imprecise click-target coordinates. 3 gives the
    /// 7x7 neighborhood.
    pub teleport_clear_radius: i32,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            soft_blocker_cost: default_soft_blocker_cost(),
            ring_step: default_ring_step(),
            ring_max_radius: default_ring_max_radius(),
            teleport_clear_radius: default_teleport_clear_radius(),
        }
    }
}

fn default_soft_blocker_cost() -> u32 {
    1000
}
fn default_ring_step() -> u32 {
    2
}
fn default_ring_max_radius() -> u32 {
    30
}
fn default_teleport_clear_radius() -> i32 {
    3
}
