#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Position;

/// Rectangular sub-area, used for traversal ordering and as a movement
/// anchor. `position` is the top-left corner in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Room {
    pub position: Position,
    pub width: u32,
    pub height: u32,
}

impl Room {
    pub const fn new(position: Position, width: u32, height: u32) -> Self {
        Self {
            position,
            width,
            height,
        }
    }

    pub fn center(&self) -> Position {
        Position::new(
            self.position.x + (self.width / 2) as i32,
            self.position.y + (self.height / 2) as i32,
        )
    }

    pub fn contains(&self, p: Position) -> bool {
        p.x >= self.position.x
            && p.y >= self.position.y
            && p.x < self.position.x + self.width as i32
            && p.y < self.position.y + self.height as i32
    }
}
