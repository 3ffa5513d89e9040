use std::sync::Arc;

use tracing::debug;

use pilot_core::{Position, Room};

use crate::astar::{self, Overrides};
use crate::config::NavConfig;
use crate::error::NavError;
use crate::grid::{CollisionGrid, GraphKey, TileKind, WorldGraph};
use crate::path::TilePath;
use crate::world::{GameData, MapData};

struct CachedGraph {
    key: GraphKey,
    graph: WorldGraph,
}

/// Route computation over the currently loaded area, with destination
/// stitching across level boundaries.
///
/// Owns its graph cache explicitly; two pathfinders never share cache
/// state. The cache is a pure optimization: a hit is observably identical
/// to a miss.
pub struct PathFinder<G, M> {
    game: Arc<G>,
    maps: Arc<M>,
    config: NavConfig,
    cache: Option<CachedGraph>,
}

impl<G, M> PathFinder<G, M>
where
    G: GameData,
    M: MapData,
{
    pub fn new(game: Arc<G>, maps: Arc<M>, config: NavConfig) -> Self {
        Self {
            game,
            maps,
            config,
            cache: None,
        }
    }

    /// Current cache key, exposed for rebuild assertions in tests.
    pub fn cache_key(&self) -> Option<GraphKey> {
        self.cache.as_ref().map(|c| c.key)
    }

    /// Walkable route from `origin` to `destination`.
    ///
    /// A destination outside the loaded grid pulls in the adjacent level's
    /// grid and stitches it in; when no adjacent level matches, the lookup
    /// miss surfaces as [`NavError::OutOfBounds`] rather than continuing
    /// with a corrupt grid. `blacklist` cells are treated as Blocker for
    /// this call only.
    pub fn get_path(
        &mut self,
        origin: Position,
        destination: Position,
        blacklist: &[Position],
    ) -> Result<TilePath, NavError> {
        let area = self.game.current_area();
        let mut grid = self
            .game
            .collision_grid(area)
            .ok_or(NavError::MissingAreaData(area))?;

        if !grid.contains_world(destination) {
            let adjacent = self
                .maps
                .adjacent_level_grid(destination, area)
                .ok_or(NavError::OutOfBounds(destination))?;
            debug!(
                ?destination,
                adjacent_origin = ?adjacent.origin(),
                "destination outside loaded grid, stitching adjacent level"
            );
            grid = grid.stitch(&adjacent);
        }

        if origin == destination {
            return Ok(TilePath::empty());
        }

        // Bounds are checked before any search is attempted.
        let (Some(rel_origin), Some(rel_dest)) =
            (grid.to_relative(origin), grid.to_relative(destination))
        else {
            return Err(NavError::NotFound);
        };

        let can_teleport = self.game.can_teleport();
        let special = self.game.is_special_area(area);
        let clear_radius = self.config.teleport_clear_radius;

        let mut overrides = Overrides::default();
        for p in blacklist {
            if let Some(rel) = grid.to_relative(*p) {
                overrides.set(rel.x, rel.y, TileKind::Blocker);
            }
        }
        if can_teleport {
            // Compensates for imprecise click-target coordinates at the
            // cost of search accuracy near the destination.
            for dy in -clear_radius..=clear_radius {
                for dx in -clear_radius..=clear_radius {
                    overrides.set(rel_dest.x + dx, rel_dest.y + dy, TileKind::Plain);
                }
            }
        }

        let grid_origin = grid.origin();
        let graph = self.ensure_graph(&grid, can_teleport, special);
        let cells =
            astar::search(graph, &overrides, rel_origin, rel_dest).ok_or(NavError::NotFound)?;

        let tiles = cells.into_iter().map(|c| c + grid_origin).collect();
        let path = TilePath::new(tiles);
        debug!(?origin, ?destination, distance = path.distance(), "path found");
        Ok(path)
    }

    /// Route from the agent's position to `destination`, or to the nearest
    /// walkable cell when the literal target sits inside an obstacle.
    ///
    /// Scans concentric rings of growing radius around the destination and
    /// routes to the first walkable cell found; gives up past the
    /// configured maximum radius.
    pub fn get_closest_walkable_path(
        &mut self,
        destination: Position,
        blacklist: &[Position],
    ) -> Result<TilePath, NavError> {
        let origin = self.game.player_position();
        let area = self.game.current_area();
        let grid = self
            .game
            .collision_grid(area)
            .ok_or(NavError::MissingAreaData(area))?;

        // Directly walkable, or out of bounds (stitching handles it).
        if !grid.contains_world(destination) || grid.is_walkable_world(destination) {
            return self.get_path(origin, destination, blacklist);
        }

        let mut radius = 1u32;
        while radius <= self.config.ring_max_radius {
            if let Some(candidate) = first_walkable_on_ring(&grid, destination, radius as i32) {
                match self.get_path(origin, candidate, blacklist) {
                    Ok(path) => {
                        debug!(?destination, ?candidate, radius, "routed to closest walkable");
                        return Ok(path);
                    }
                    Err(NavError::NotFound) => {}
                    Err(e) => return Err(e),
                }
            }
            radius += self.config.ring_step;
        }
        Err(NavError::NotFound)
    }

    /// Greedy nearest-neighbor visiting order over `rooms`, starting at
    /// the room currently containing the agent.
    ///
    /// Best-effort heuristic, not an optimal tour: pairwise shortest-path
    /// distances feed a repeated nearest-unvisited selection. Unreachable
    /// pairs rank as infinitely far and end up at the tail.
    pub fn optimize_rooms_traverse_order(&mut self, rooms: &[Room]) -> Vec<Room> {
        if rooms.is_empty() {
            return Vec::new();
        }
        let me = self.game.player_position();
        let n = rooms.len();

        let mut dist = vec![vec![u32::MAX; n]; n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = match self.get_path(rooms[i].center(), rooms[j].center(), &[]) {
                    Ok(path) => path.distance(),
                    Err(_) => u32::MAX,
                };
                dist[i][j] = d;
                dist[j][i] = d;
            }
        }

        let start = rooms
            .iter()
            .position(|r| r.contains(me))
            .unwrap_or_else(|| nearest_room_index(rooms, me));

        let mut visited = vec![false; n];
        let mut order = Vec::with_capacity(n);
        let mut current = start;
        visited[current] = true;
        order.push(rooms[current]);

        for _ in 1..n {
            let mut best: Option<usize> = None;
            for (candidate, seen) in visited.iter().enumerate() {
                if *seen {
                    continue;
                }
                match best {
                    Some(b) if dist[current][b] <= dist[current][candidate] => {}
                    _ => best = Some(candidate),
                }
            }
            if let Some(next) = best {
                visited[next] = true;
                order.push(rooms[next]);
                current = next;
            }
        }
        order
    }

    /// Straight-line distance from the agent, independent of walkability.
    /// Range checks only; never use it for routing.
    pub fn distance_from_me(&self, position: Position) -> f64 {
        self.game.player_position().euclidean_distance(position)
    }

    fn ensure_graph(
        &mut self,
        grid: &CollisionGrid,
        can_teleport: bool,
        special_area: bool,
    ) -> &WorldGraph {
        let key = GraphKey {
            map_seed: self.game.map_seed(),
            area: self.game.current_area(),
            width: grid.width(),
            height: grid.height(),
        };
        if self.cache.as_ref().is_some_and(|c| c.key != key) {
            self.cache = None;
        }
        let soft_cost = self.config.soft_blocker_cost;
        let cached = self.cache.get_or_insert_with(|| {
            debug!(?key, "rebuilding world graph");
            CachedGraph {
                key,
                graph: WorldGraph::build(grid, can_teleport, special_area, soft_cost),
            }
        });
        &cached.graph
    }
}

fn nearest_room_index(rooms: &[Room], me: Position) -> usize {
    let mut best = 0;
    for (i, room) in rooms.iter().enumerate().skip(1) {
        if room.center().euclidean_distance(me) < rooms[best].center().euclidean_distance(me) {
            best = i;
        }
    }
    best
}

fn first_walkable_on_ring(grid: &CollisionGrid, center: Position, radius: i32) -> Option<Position> {
    // Row-major perimeter scan; fixed order keeps the fallback target
    // deterministic.
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx.abs() != radius && dy.abs() != radius {
                continue;
            }
            let p = Position::new(center.x + dx, center.y + dy);
            if grid.is_walkable_world(p) {
                return Some(p);
            }
        }
    }
    None
}
