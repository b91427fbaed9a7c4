use std::collections::VecDeque;

use super::cell::Cell;

/// The snake's occupied cells, ordered tail to head.
///
/// The head is the most recently pushed cell, at the back of the deque.
/// Cells are distinct at all times except on the terminal game-over frame,
/// where the engine appends the self-collision cell a second time so the
/// final render shows the overlap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnakeBody {
    cells: VecDeque<Cell>,
}

impl SnakeBody {
    /// Most recently added cell. The body is never empty in normal
    /// operation.
    pub fn head(&self) -> Cell {
        *self.cells.back().expect("snake body is never empty")
    }

    /// Membership over the full body, tail and head included.
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    pub fn push_head(&mut self, cell: Cell) {
        self.cells.push_back(cell);
    }

    /// Removes and returns the oldest cell.
    pub fn pop_tail(&mut self) -> Cell {
        self.cells.pop_front().expect("snake body is never empty")
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells in tail-to-head order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }
}

impl FromIterator<Cell> for SnakeBody {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}
