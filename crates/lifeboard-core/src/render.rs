//! Renderer seam between the board and a drawing backend

use crate::error::RenderError;
use crate::Vertex;

/// Drawing backend consumed by [`Board`](crate::sim::Board).
///
/// A board asks for the canvas size once, creates one drawable per cell at
/// construction, and then brackets every frame with `begin_frame`/`end_frame`,
/// issuing one `draw` per live cell in between.
pub trait Renderer {
    /// Opaque per-cell drawable, owned by the cell for the board's lifetime.
    type Handle: Copy;

    /// Logical square canvas extent in pixels.
    fn canvas_size(&self) -> Result<u32, RenderError>;

    /// Create a drawable from pre-scaled quad geometry in normalized device coordinates.
    fn create_drawable(&mut self, geometry: &[Vertex]) -> Result<Self::Handle, RenderError>;

    /// Draw one drawable.
    fn draw(&mut self, handle: Self::Handle, vertex_count: u32) -> Result<(), RenderError>;

    /// Start a full-grid render pass.
    fn begin_frame(&mut self) -> Result<(), RenderError>;

    /// Finish the render pass and present it.
    fn end_frame(&mut self) -> Result<(), RenderError>;
}

/// Headless renderer that only records what it was asked to do
#[derive(Debug, Default, Clone)]
pub struct CountingRenderer {
    canvas_size: u32,
    drawables: Vec<Vec<Vertex>>,
    frame_draws: Vec<(usize, u32)>,
    frames: u32,
    in_frame: bool,
}

impl CountingRenderer {
    pub fn new(canvas_size: u32) -> Self {
        Self {
            canvas_size,
            ..Default::default()
        }
    }

    /// Geometry of every drawable created so far, indexed by handle
    pub fn drawables(&self) -> &[Vec<Vertex>] {
        &self.drawables
    }

    /// Handles and vertex counts drawn during the last frame
    pub fn frame_draws(&self) -> &[(usize, u32)] {
        &self.frame_draws
    }

    /// Number of completed frames
    pub fn frames(&self) -> u32 {
        self.frames
    }
}

impl Renderer for CountingRenderer {
    type Handle = usize;

    fn canvas_size(&self) -> Result<u32, RenderError> {
        if self.canvas_size == 0 {
            return Err(RenderError::CanvasUnavailable(
                "canvas has zero size".to_string(),
            ));
        }
        Ok(self.canvas_size)
    }

    fn create_drawable(&mut self, geometry: &[Vertex]) -> Result<usize, RenderError> {
        self.drawables.push(geometry.to_vec());
        Ok(self.drawables.len() - 1)
    }

    fn draw(&mut self, handle: usize, vertex_count: u32) -> Result<(), RenderError> {
        if !self.in_frame {
            return Err(RenderError::Draw("draw outside of a frame".to_string()));
        }
        if handle >= self.drawables.len() {
            return Err(RenderError::Draw(format!("unknown drawable {}", handle)));
        }
        self.frame_draws.push((handle, vertex_count));
        Ok(())
    }

    fn begin_frame(&mut self) -> Result<(), RenderError> {
        self.frame_draws.clear();
        self.in_frame = true;
        Ok(())
    }

    fn end_frame(&mut self) -> Result<(), RenderError> {
        if !self.in_frame {
            return Err(RenderError::Frame("end_frame without begin_frame".to_string()));
        }
        self.in_frame = false;
        self.frames += 1;
        Ok(())
    }
}
