//! World-to-screen coordinate transform.

use pilot_core::Position;

// Calibration constants tied to the renderer's fixed isometric projection
// scale and the view-center offset. Not tunable.
const PROJECTION_X: f64 = 19.8;
const PROJECTION_Y: f64 = 9.9;
const VIEW_CENTER_X: i32 = 640;
const VIEW_CENTER_Y: i32 = 360;

/// Map a world-space delta between the agent and its target onto screen
/// coordinates relative to the view center.
pub fn project(delta: Position) -> (i32, i32) {
    let dx = f64::from(delta.x);
    let dy = f64::from(delta.y);
    let screen_x = ((dx - dy) * PROJECTION_X) as i32 + VIEW_CENTER_X;
    let screen_y = ((dx + dy) * PROJECTION_Y) as i32 + VIEW_CENTER_Y;
    (screen_x, screen_y)
}
