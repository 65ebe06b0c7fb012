use crate::layout::{CELL_GUTTER_PX, UNIT_SQUARE};
use crate::Vertex;

/// Quad for cell `(x, y)` scaled into normalized device coordinates.
///
/// Cells are laid out on a `spacing = canvas / dimension` pixel pitch with a fixed
/// gutter, then mapped from `[0, canvas]` pixels onto `[-1, 1]`.
pub fn cell_quad(x: usize, y: usize, dimension: usize, canvas_size: u32) -> [Vertex; 6] {
    let canvas = canvas_size as f32;
    let spacing_px = canvas / dimension as f32;
    let cell_size_px = spacing_px - CELL_GUTTER_PX;
    let x_px = spacing_px * (x as f32 + 0.5);
    let y_px = spacing_px * (y as f32 + 0.5);
    let scale = 2.0 / canvas;

    UNIT_SQUARE.map(|v| {
        Vertex::new(
            (x_px + cell_size_px * v.x()) * scale - 1.0,
            (y_px + cell_size_px * v.y()) * scale - 1.0,
            0.0,
        )
    })
}
