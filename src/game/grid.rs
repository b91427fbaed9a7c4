use super::cell::Cell;

/// Toroidal grid geometry. Dimensions are fixed for the life of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Self {
        debug_assert!(width > 0 && height > 0);
        Self { width, height }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        (self.width * self.height) as usize
    }

    /// Maps any coordinate pair back onto the grid. `rem_euclid` keeps the
    /// result in range for negative inputs too, so stepping off any edge
    /// re-enters from the opposite one.
    pub fn wrap(&self, cell: Cell) -> Cell {
        Cell::new(cell.x.rem_euclid(self.width), cell.y.rem_euclid(self.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_is_identity_in_range() {
        let grid = Grid::new(15, 10);
        assert_eq!(grid.wrap(Cell::new(0, 0)), Cell::new(0, 0));
        assert_eq!(grid.wrap(Cell::new(14, 9)), Cell::new(14, 9));
        assert_eq!(grid.wrap(Cell::new(7, 3)), Cell::new(7, 3));
    }

    #[test]
    fn wrap_handles_both_edges() {
        let grid = Grid::new(15, 10);
        assert_eq!(grid.wrap(Cell::new(15, 0)), Cell::new(0, 0));
        assert_eq!(grid.wrap(Cell::new(-1, 0)), Cell::new(14, 0));
        assert_eq!(grid.wrap(Cell::new(0, 10)), Cell::new(0, 0));
        assert_eq!(grid.wrap(Cell::new(0, -1)), Cell::new(0, 9));
    }

    #[test]
    fn wrap_of_unit_steps_always_lands_in_range() {
        let grid = Grid::new(15, 10);
        let deltas = [(0, -1), (0, 1), (-1, 0), (1, 0)];

        for x in 0..grid.width() {
            for y in 0..grid.height() {
                for (dx, dy) in deltas {
                    let wrapped = grid.wrap(Cell::new(x, y).offset(dx, dy));
                    assert!(wrapped.x >= 0 && wrapped.x < grid.width());
                    assert!(wrapped.y >= 0 && wrapped.y < grid.height());
                }
            }
        }
    }

    #[test]
    fn cell_count() {
        assert_eq!(Grid::new(15, 10).cell_count(), 150);
        assert_eq!(Grid::new(1, 1).cell_count(), 1);
    }
}
