pub mod renderer;

pub use renderer::{FrameStore, Renderer};
