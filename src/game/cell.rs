use super::direction::Direction;

/// A position on the game grid.
///
/// Coordinates may leave the grid transiently while computing a move;
/// [`Grid::wrap`](super::grid::Grid::wrap) brings them back into range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Cell displaced by a delta.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The adjacent cell one step in `direction`, before wrapping.
    pub fn neighbor(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.offset(dx, dy)
    }
}
