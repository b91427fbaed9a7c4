use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

/// Construction parameters for one game instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the game grid in cells
    pub grid_width: usize,
    /// Height of the game grid in cells
    pub grid_height: usize,
    /// Terminal columns drawn per grid cell. Rendering concern only, the
    /// engine never reads it.
    pub scale: usize,
    /// Initial length of the snake
    pub initial_snake_length: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 15,
            grid_height: 10,
            scale: 2,
            initial_snake_length: 5,
        }
    }
}

impl GameConfig {
    /// Configuration with a custom grid size and cell scale.
    pub fn new(width: usize, height: usize, scale: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            scale,
            ..Default::default()
        }
    }

    /// Small grid for testing.
    pub fn small() -> Self {
        Self::new(10, 10, 1)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.initial_snake_length >= 1,
            "initial snake length must be at least 1"
        );
        ensure!(
            self.grid_width >= self.initial_snake_length,
            "grid width must fit the initial snake (at least {})",
            self.initial_snake_length
        );
        ensure!(self.grid_height >= 1, "grid height must be at least 1");
        ensure!(
            self.grid_width * self.grid_height > self.initial_snake_length,
            "grid must have a free cell left for food"
        );
        Ok(())
    }
}
