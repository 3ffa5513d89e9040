use pilot_core::{AreaId, MapSeed, Position, Room};

use crate::grid::CollisionGrid;

/// Read access to the live game-state snapshot.
///
/// Snapshot discipline: one refresh loop writes, everybody else reads.
/// Implementations must hand out consistent copies on every call
/// (copy-on-read or atomic swap); the pathfinder never caches a borrow
/// across calls.
pub trait GameData: Send + Sync {
    fn map_seed(&self) -> MapSeed;
    fn current_area(&self) -> AreaId;
    fn player_position(&self) -> Position;
    fn can_teleport(&self) -> bool;

    /// Walkability grid for an area, `None` when the area is not loaded.
    fn collision_grid(&self, area: AreaId) -> Option<CollisionGrid>;

    fn rooms(&self, area: AreaId) -> Vec<Room>;

    /// Positions of interactable objects and NPCs in an area. The engine
    /// never routes on these; callers feed them back as blacklists or
    /// movement anchors.
    fn objects(&self, area: AreaId) -> Vec<Position>;

    /// Non-solid platform areas: traversable only by teleport-class
    /// movement, soft-blocked rather than hard-blocked in the graph.
    fn is_special_area(&self, area: AreaId) -> bool;
}

/// Map-data lookups that cross level boundaries.
pub trait MapData: Send + Sync {
    /// Grid of the level adjacent to `current` that contains
    /// `destination`, with its own recorded origin. `None` when no
    /// adjacent level matches.
    fn adjacent_level_grid(&self, destination: Position, current: AreaId) -> Option<CollisionGrid>;
}
