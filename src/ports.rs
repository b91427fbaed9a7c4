//! Boundary surface between the engine and the host UI.
//!
//! The engine pushes an immutable [`Snapshot`] through a [`RenderPort`]
//! after every advance; the host feeds directional input back through
//! [`InputPort`]. The engine never touches drawing primitives and the host
//! never touches game state directly.

use crate::game::{Cell, Direction};

/// Immutable view of the game emitted after every advance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Body cells in tail-to-head order.
    pub body: Vec<Cell>,
    pub food: Cell,
    /// Current body length.
    pub score: usize,
    pub over: bool,
}

impl Snapshot {
    pub fn head(&self) -> Cell {
        *self.body.last().expect("snapshot body is never empty")
    }

    /// Status-line text shown by the host.
    pub fn status_line(&self) -> String {
        format!("Score: {}", self.score)
    }
}

/// Receives a snapshot after every advance and owns all drawing.
pub trait RenderPort {
    fn present(&mut self, frame: &Snapshot);
}

/// Delivers directional input events into the engine.
pub trait InputPort {
    fn deliver(&mut self, direction: Direction);
}

#[cfg(test)]
pub(crate) mod testing {
    use super::{RenderPort, Snapshot};

    /// Render port that keeps every frame it is handed.
    #[derive(Default)]
    pub struct RecordingPort {
        pub frames: Vec<Snapshot>,
    }

    impl RenderPort for RecordingPort {
        fn present(&mut self, frame: &Snapshot) {
            self.frames.push(frame.clone());
        }
    }
}
