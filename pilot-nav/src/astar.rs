//! A* over a [`WorldGraph`], with per-call tile overrides.

use core::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use pilot_core::Position;

use crate::grid::{TileKind, WorldGraph};

/// Per-call tile reclassification: blacklisted cells forced to Blocker,
/// teleport destination clearing forced to Plain. Never written back into
/// the cached graph.
#[derive(Debug, Default)]
pub struct Overrides {
    kinds: HashMap<(i32, i32), TileKind>,
}

impl Overrides {
    pub fn set(&mut self, x: i32, y: i32, kind: TileKind) {
        self.kinds.insert((x, y), kind);
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    fn kind_at(&self, graph: &WorldGraph, x: i32, y: i32) -> Option<TileKind> {
        match self.kinds.get(&(x, y)) {
            Some(&kind) if graph.in_bounds(x, y) => Some(kind),
            Some(_) => None,
            None => graph.kind_at(x, y),
        }
    }
}

#[derive(Debug)]
struct OpenNode {
    f: u32,
    g: u32,
    cell: (i32, i32),
    tie: u64,
}

impl OpenNode {
    fn key(&self) -> (u32, u32, (i32, i32), u64) {
        (self.f, self.g, self.cell, self.tie)
    }
}

impl PartialEq for OpenNode {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for OpenNode {}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering to make BinaryHeap behave like a min-heap.
        other.key().cmp(&self.key())
    }
}

fn heuristic(a: (i32, i32), b: (i32, i32)) -> u32 {
    a.0.abs_diff(b.0) + a.1.abs_diff(b.1)
}

fn neighbors(cell: (i32, i32)) -> [(i32, i32); 4] {
    // Fixed order for determinism: N, E, S, W. No diagonal movement.
    [
        (cell.0, cell.1 - 1),
        (cell.0 + 1, cell.1),
        (cell.0, cell.1 + 1),
        (cell.0 - 1, cell.1),
    ]
}

/// Shortest path between two area-relative cells, or `None` when the goal
/// is unreachable. The start cell is allowed to sit on any traversable
/// tile; the result is identical across runs for identical inputs (the
/// heap tie-breaks on a monotone counter, never on iteration order).
pub fn search(
    graph: &WorldGraph,
    overrides: &Overrides,
    start: Position,
    goal: Position,
) -> Option<Vec<Position>> {
    let start = (start.x, start.y);
    let goal = (goal.x, goal.y);
    if !graph.in_bounds(start.0, start.1) || !graph.in_bounds(goal.0, goal.1) {
        return None;
    }
    let start_kind = overrides.kind_at(graph, start.0, start.1)?;
    let goal_kind = overrides.kind_at(graph, goal.0, goal.1)?;
    if graph.enter_cost(start_kind).is_none() || graph.enter_cost(goal_kind).is_none() {
        return None;
    }

    let idx = |cell: (i32, i32)| (cell.1 * graph.width() + cell.0) as usize;
    let grid_len = (graph.width() * graph.height()) as usize;
    let mut g_score = vec![u32::MAX; grid_len];
    let mut came_from: Vec<Option<(i32, i32)>> = vec![None; grid_len];

    let mut open = BinaryHeap::<OpenNode>::new();
    let mut tie: u64 = 0;

    g_score[idx(start)] = 0;
    open.push(OpenNode {
        f: heuristic(start, goal),
        g: 0,
        cell: start,
        tie,
    });
    tie += 1;

    while let Some(node) = open.pop() {
        if node.cell == goal {
            return Some(reconstruct(&came_from, idx, goal));
        }

        if node.g != g_score[idx(node.cell)] {
            // Stale heap entry.
            continue;
        }

        for n in neighbors(node.cell) {
            let Some(kind) = overrides.kind_at(graph, n.0, n.1) else {
                continue;
            };
            let Some(step_cost) = graph.enter_cost(kind) else {
                continue;
            };

            let tentative_g = node.g.saturating_add(step_cost);
            if tentative_g >= g_score[idx(n)] {
                continue;
            }

            came_from[idx(n)] = Some(node.cell);
            g_score[idx(n)] = tentative_g;
            open.push(OpenNode {
                f: tentative_g.saturating_add(heuristic(n, goal)),
                g: tentative_g,
                cell: n,
                tie,
            });
            tie += 1;
        }
    }

    None
}

fn reconstruct(
    came_from: &[Option<(i32, i32)>],
    idx: impl Fn((i32, i32)) -> usize,
    goal: (i32, i32),
) -> Vec<Position> {
    let mut out = vec![goal];
    let mut current = goal;
    while let Some(prev) = came_from[idx(current)] {
        current = prev;
        out.push(current);
    }
    out.reverse();
    out.into_iter().map(|(x, y)| Position::new(x, y)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CollisionGrid;

    fn open_graph(width: u32, height: u32) -> WorldGraph {
        let mut grid = CollisionGrid::new(Position::new(0, 0), width, height);
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                grid.set_walkable(x, y, true);
            }
        }
        // Teleport build: no corner padding, pure Plain costs.
        WorldGraph::build(&grid, true, false, 1000)
    }

    #[test]
    fn straight_line_has_manhattan_length() {
        let graph = open_graph(5, 5);
        let path = search(
            &graph,
            &Overrides::default(),
            Position::new(0, 0),
            Position::new(4, 4),
        )
        .expect("path should exist");
        // 8 steps, 9 cells including the origin.
        assert_eq!(path.len(), 9);
    }

    #[test]
    fn blacklist_override_blocks_a_cell() {
        let graph = open_graph(3, 1);
        let mut overrides = Overrides::default();
        overrides.set(1, 0, TileKind::Blocker);

        let found = search(
            &graph,
            &overrides,
            Position::new(0, 0),
            Position::new(2, 0),
        );
        assert!(found.is_none());
    }

    #[test]
    fn prefers_plain_over_soft_blocker_detour() {
        // 3x3 open graph with a soft-blocked center column: going around
        // costs 4 extra plain steps, well under the soft cost.
        let graph = open_graph(3, 3);
        let mut overrides = Overrides::default();
        overrides.set(1, 0, TileKind::SoftBlocker);
        overrides.set(1, 1, TileKind::SoftBlocker);

        let path = search(
            &graph,
            &overrides,
            Position::new(0, 0),
            Position::new(2, 0),
        )
        .expect("path should exist");
        assert!(!path.contains(&Position::new(1, 0)));
        assert!(!path.contains(&Position::new(1, 1)));
        assert!(path.contains(&Position::new(1, 2)));
    }
}
