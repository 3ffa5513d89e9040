use pilot_core::{AreaId, MapSeed, Position};

/// Boolean walkability matrix for one area, stored flat row-major.
///
/// `origin` is the area's top-left corner in world coordinates; all cell
/// indices are relative to it. `true` means walkable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollisionGrid {
    origin: Position,
    width: i32,
    height: i32,
    walkable: Vec<bool>,
}

impl CollisionGrid {
    pub fn new(origin: Position, width: u32, height: u32) -> Self {
        let width = width as i32;
        let height = height as i32;
        Self {
            origin,
            width,
            height,
            walkable: vec![false; (width * height) as usize],
        }
    }

    /// Build from row-major rows, as delivered by the game-state provider.
    pub fn from_rows(origin: Position, rows: &[Vec<bool>]) -> Self {
        let height = rows.len() as u32;
        let width = rows.first().map(|r| r.len()).unwrap_or(0) as u32;
        let mut grid = Self::new(origin, width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, &walkable) in row.iter().enumerate() {
                grid.set_walkable(x as i32, y as i32, walkable);
            }
        }
        grid
    }

    pub fn origin(&self) -> Position {
        self.origin
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn set_walkable(&mut self, x: i32, y: i32, walkable: bool) {
        if let Some(idx) = self.idx(x, y) {
            self.walkable[idx] = walkable;
        }
    }

    /// Walkability at area-relative `(x, y)`. Out of bounds reads as blocked.
    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        self.idx(x, y).map(|i| self.walkable[i]).unwrap_or(false)
    }

    pub fn is_walkable_world(&self, p: Position) -> bool {
        let rel = p - self.origin;
        self.is_walkable(rel.x, rel.y)
    }

    pub fn contains_world(&self, p: Position) -> bool {
        let rel = p - self.origin;
        rel.x >= 0 && rel.y >= 0 && rel.x < self.width && rel.y < self.height
    }

    /// World position → area-relative cell, `None` when outside the grid.
    pub fn to_relative(&self, p: Position) -> Option<Position> {
        if self.contains_world(p) {
            Some(p - self.origin)
        } else {
            None
        }
    }

    pub fn to_world(&self, rel: Position) -> Position {
        rel + self.origin
    }

    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some((y * self.width + x) as usize)
    }

    /// Stitch an adjacent level's grid into this one.
    ///
    /// The result covers the bounding box of both grids, aligned by each
    /// grid's recorded origin; the neighbor may lie on any of the four
    /// sides (its origin offset decides which way the box grows). Cells
    /// covered by neither grid stay blocked.
    pub fn stitch(&self, other: &CollisionGrid) -> CollisionGrid {
        let min_x = self.origin.x.min(other.origin.x);
        let min_y = self.origin.y.min(other.origin.y);
        let max_x = (self.origin.x + self.width).max(other.origin.x + other.width);
        let max_y = (self.origin.y + self.height).max(other.origin.y + other.height);

        let mut merged = CollisionGrid::new(
            Position::new(min_x, min_y),
            (max_x - min_x) as u32,
            (max_y - min_y) as u32,
        );
        for source in [self, other] {
            let shift = source.origin - merged.origin;
            for y in 0..source.height {
                for x in 0..source.width {
                    if source.is_walkable(x, y) {
                        merged.set_walkable(x + shift.x, y + shift.y, true);
                    }
                }
            }
        }
        merged
    }
}

/// Node classification in the search graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    Plain,
    /// Traversable but heavily penalized; discourages a route without
    /// forbidding it (corner padding, teleport-only platforms).
    SoftBlocker,
    /// Non-traversable; disconnected from the graph.
    Blocker,
}

/// Cache key for a built [`WorldGraph`].
///
/// A rebuild is triggered whenever any component changes; width/height
/// cover the stitched-grid case, which changes dimensions without
/// changing the area id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GraphKey {
    pub map_seed: MapSeed,
    pub area: AreaId,
    pub width: i32,
    pub height: i32,
}

/// Weighted 4-connected search graph over one (possibly stitched) grid.
///
/// Edge cost equals the destination tile's cost: 1 for Plain, a large
/// finite constant for SoftBlocker; Blocker tiles have no edges at all.
#[derive(Debug, Clone)]
pub struct WorldGraph {
    origin: Position,
    width: i32,
    height: i32,
    soft_cost: u32,
    tiles: Vec<TileKind>,
}

impl WorldGraph {
    /// Classify every cell of `grid` into a tile graph.
    ///
    /// A walkable cell within 2 cells (either axis) of an unwalkable cell
    /// is downgraded to SoftBlocker so a walking mover keeps clear of
    /// corners it cannot cut past. Teleporting movement is immune to
    /// corner clipping, so the padding pass is skipped entirely.
    ///
    /// In a special (non-solid platform) area, unwalkable cells become
    /// SoftBlocker instead of Blocker when the mover can teleport; those
    /// platforms are legitimately traversable only by teleport-class
    /// movement and hard-blocking them would make the graph unsolvable.
    pub fn build(grid: &CollisionGrid, can_teleport: bool, special_area: bool, soft_cost: u32) -> Self {
        let width = grid.width();
        let height = grid.height();
        let mut tiles = Vec::with_capacity((width * height) as usize);

        for y in 0..height {
            for x in 0..width {
                let kind = if grid.is_walkable(x, y) {
                    TileKind::Plain
                } else if special_area && can_teleport {
                    TileKind::SoftBlocker
                } else {
                    TileKind::Blocker
                };
                tiles.push(kind);
            }
        }

        let mut graph = Self {
            origin: grid.origin(),
            width,
            height,
            soft_cost,
            tiles,
        };

        if !can_teleport {
            graph.pad_corners(grid);
        }
        graph
    }

    fn pad_corners(&mut self, grid: &CollisionGrid) {
        for y in 0..self.height {
            for x in 0..self.width {
                if self.kind_at(x, y) != Some(TileKind::Plain) {
                    continue;
                }
                'scan: for dy in -2..=2 {
                    for dx in -2..=2 {
                        if (dx != 0 || dy != 0) && !grid.is_walkable(x + dx, y + dy) {
                            let idx = (y * self.width + x) as usize;
                            self.tiles[idx] = TileKind::SoftBlocker;
                            break 'scan;
                        }
                    }
                }
            }
        }
    }

    pub fn origin(&self) -> Position {
        self.origin
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }

    pub fn kind_at(&self, x: i32, y: i32) -> Option<TileKind> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some(self.tiles[(y * self.width + x) as usize])
    }

    /// Cost of stepping onto a tile, `None` when non-traversable.
    pub fn enter_cost(&self, kind: TileKind) -> Option<u32> {
        match kind {
            TileKind::Plain => Some(1),
            TileKind::SoftBlocker => Some(self.soft_cost),
            TileKind::Blocker => None,
        }
    }
}
