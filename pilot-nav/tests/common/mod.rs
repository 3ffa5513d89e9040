//! Stub game-state and map-data providers for pathfinder tests.

use std::sync::atomic::{AtomicU64, Ordering};

use pilot_core::{AreaId, MapSeed, Position, Room};
use pilot_nav::{CollisionGrid, GameData, MapData};

pub struct StubGame {
    pub grid: CollisionGrid,
    pub player: Position,
    pub seed: AtomicU64,
    pub teleport: bool,
    pub special: bool,
    pub rooms: Vec<Room>,
}

impl StubGame {
    pub fn new(grid: CollisionGrid, player: Position) -> Self {
        Self {
            grid,
            player,
            seed: AtomicU64::new(1),
            teleport: false,
            special: false,
            rooms: Vec::new(),
        }
    }
}

impl GameData for StubGame {
    fn map_seed(&self) -> MapSeed {
        MapSeed(self.seed.load(Ordering::SeqCst))
    }

    fn current_area(&self) -> AreaId {
        AreaId(7)
    }

    fn player_position(&self) -> Position {
        self.player
    }

    fn can_teleport(&self) -> bool {
        self.teleport
    }

    fn collision_grid(&self, _area: AreaId) -> Option<CollisionGrid> {
        Some(self.grid.clone())
    }

    fn rooms(&self, _area: AreaId) -> Vec<Room> {
        self.rooms.clone()
    }

    fn objects(&self, _area: AreaId) -> Vec<Position> {
        Vec::new()
    }

    fn is_special_area(&self, _area: AreaId) -> bool {
        self.special
    }
}

/// Map-data provider with no adjacent levels.
pub struct NoAdjacentLevels;

impl MapData for NoAdjacentLevels {
    fn adjacent_level_grid(&self, _destination: Position, _current: AreaId) -> Option<CollisionGrid> {
        None
    }
}

/// Map-data provider that serves one fixed neighbor grid.
pub struct OneAdjacentLevel(pub CollisionGrid);

impl MapData for OneAdjacentLevel {
    fn adjacent_level_grid(&self, destination: Position, _current: AreaId) -> Option<CollisionGrid> {
        if self.0.contains_world(destination) {
            Some(self.0.clone())
        } else {
            None
        }
    }
}

/// Fully walkable square grid with its origin at the world origin.
pub fn open_grid(size: u32) -> CollisionGrid {
    open_grid_at(Position::new(0, 0), size, size)
}

pub fn open_grid_at(origin: Position, width: u32, height: u32) -> CollisionGrid {
    let mut grid = CollisionGrid::new(origin, width, height);
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            grid.set_walkable(x, y, true);
        }
    }
    grid
}
