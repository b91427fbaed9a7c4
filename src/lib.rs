//! Wrap-around snake for the terminal.
//!
//! The crate splits into:
//! - a UI-free game core (game module: grid, body, food, engine),
//! - the tick-delay policy (tick module),
//! - the engine/host boundary traits (ports module),
//! - and the terminal host built on crossterm, ratatui and tokio
//!   (input, render and host modules).

pub mod game;
pub mod host;
pub mod input;
pub mod ports;
pub mod render;
pub mod tick;
