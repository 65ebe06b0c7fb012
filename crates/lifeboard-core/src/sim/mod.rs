pub mod board;
pub mod cell;
pub mod geometry;

pub use board::*;
pub use cell::*;
pub use geometry::*;
