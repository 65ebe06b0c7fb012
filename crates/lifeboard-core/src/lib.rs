//! Lifeboard Core Engine
//!
//! Conway's Game of Life on a fixed-size toroidal grid, plus the renderer seam
//! and GPU helpers used to draw one quad per live cell.

pub mod error;
pub mod gpu;
pub mod render;
pub mod shaders;
pub mod sim;

// Re-export main types
pub use error::*;
pub use render::*;
pub use sim::*;

// Re-export params from lifeboard-params
pub use lifeboard_params::*;
