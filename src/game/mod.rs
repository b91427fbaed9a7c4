//! Core game logic.
//!
//! Everything in here is free of I/O and rendering dependencies; the host
//! drives it through the traits in [`crate::ports`].

pub mod body;
pub mod cell;
pub mod config;
pub mod direction;
pub mod engine;
pub mod food;
pub mod grid;

pub use body::SnakeBody;
pub use cell::Cell;
pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{AdvanceResult, GameEngine, GameState};
pub use food::FoodSpawner;
pub use grid::Grid;
