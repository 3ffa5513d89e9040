use anyhow::Result;
use async_trait::async_trait;

/// Input-device primitives the driver forwards movement commands to.
///
/// Implemented by the out-of-scope device layer; one command per call,
/// already projected into screen coordinates.
#[async_trait]
pub trait CommandSink: Send + Sync {
    /// Move the pointer to screen `(x, y)`.
    async fn move_pointer(&self, x: i32, y: i32) -> Result<()>;

    /// Press the forced-move keybinding at the current pointer position.
    async fn force_move(&self) -> Result<()>;

    /// Single directional click used by teleport-class movement.
    async fn teleport_click(&self, x: i32, y: i32) -> Result<()>;
}
