use pilot_core::Position;

/// Ordered sequence of adjacent tiles in world coordinates, origin first.
///
/// An empty path is the legitimate result of asking for a route from a
/// position to itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TilePath {
    tiles: Vec<Position>,
}

impl TilePath {
    pub fn new(tiles: Vec<Position>) -> Self {
        Self { tiles }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tiles(&self) -> &[Position] {
        &self.tiles
    }

    /// Distance in tiles: the number of steps, not the number of cells.
    pub fn distance(&self) -> u32 {
        self.tiles.len().saturating_sub(1) as u32
    }

    pub fn destination(&self) -> Option<Position> {
        self.tiles.last().copied()
    }

    /// Whether any tile of the path lies within `padding` cells (Chebyshev)
    /// of `position`.
    pub fn intersects(&self, position: Position, padding: u32) -> bool {
        self.tiles
            .iter()
            .any(|t| t.chebyshev_distance(position) <= padding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_counts_steps() {
        assert_eq!(TilePath::empty().distance(), 0);
        assert_eq!(TilePath::new(vec![Position::new(0, 0)]).distance(), 0);
        let path = TilePath::new(vec![
            Position::new(0, 0),
            Position::new(1, 0),
            Position::new(2, 0),
        ]);
        assert_eq!(path.distance(), 2);
        assert_eq!(path.destination(), Some(Position::new(2, 0)));
    }

    #[test]
    fn intersects_uses_padding() {
        let path = TilePath::new(vec![Position::new(0, 0), Position::new(1, 0)]);
        assert!(path.intersects(Position::new(2, 1), 1));
        assert!(!path.intersects(Position::new(3, 2), 1));
    }
}
