use image::{ImageBuffer, Rgb, RgbImage};
use lifeboard_core::{DisplayConfig, RenderError, Renderer, Vertex};

/// Pixel bounds of one cell quad, half-open, image rows growing downwards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PixelRect {
    x0: u32,
    y0: u32,
    x1: u32,
    y1: u32,
}

/// CPU renderer that rasterises cell quads into an RGB image
pub struct RasterRenderer {
    canvas_size: u32,
    image: RgbImage,
    rects: Vec<PixelRect>,
    cell_color: Rgb<u8>,
    background: Rgb<u8>,
}

fn to_rgb(color: [f32; 3]) -> Rgb<u8> {
    Rgb(color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8))
}

impl RasterRenderer {
    pub fn new(display: &DisplayConfig) -> Self {
        let background = to_rgb(display.background);
        Self {
            canvas_size: display.canvas_size,
            image: ImageBuffer::from_pixel(display.canvas_size, display.canvas_size, background),
            rects: Vec::new(),
            cell_color: to_rgb(display.cell_color),
            background,
        }
    }

    /// The most recently rendered frame
    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Map NDC geometry onto image pixels, flipping `y` so +1 is the top row
    fn pixel_rect(&self, geometry: &[Vertex]) -> PixelRect {
        let canvas = self.canvas_size as f32;
        let to_px = |ndc: f32| ((ndc + 1.0) * 0.5 * canvas).round().clamp(0.0, canvas) as u32;

        let min_x = geometry.iter().map(Vertex::x).fold(f32::INFINITY, f32::min);
        let max_x = geometry.iter().map(Vertex::x).fold(f32::NEG_INFINITY, f32::max);
        let min_y = geometry.iter().map(Vertex::y).fold(f32::INFINITY, f32::min);
        let max_y = geometry.iter().map(Vertex::y).fold(f32::NEG_INFINITY, f32::max);

        PixelRect {
            x0: to_px(min_x),
            x1: to_px(max_x),
            y0: self.canvas_size - to_px(max_y),
            y1: self.canvas_size - to_px(min_y),
        }
    }
}

impl Renderer for RasterRenderer {
    type Handle = usize;

    fn canvas_size(&self) -> Result<u32, RenderError> {
        if self.canvas_size == 0 {
            return Err(RenderError::CanvasUnavailable(
                "display.canvas_size is 0".to_string(),
            ));
        }
        Ok(self.canvas_size)
    }

    fn create_drawable(&mut self, geometry: &[Vertex]) -> Result<usize, RenderError> {
        if geometry.is_empty() {
            return Err(RenderError::DrawableCreation("empty geometry".to_string()));
        }
        let rect = self.pixel_rect(geometry);
        self.rects.push(rect);
        Ok(self.rects.len() - 1)
    }

    fn draw(&mut self, handle: usize, _vertex_count: u32) -> Result<(), RenderError> {
        let rect = *self
            .rects
            .get(handle)
            .ok_or_else(|| RenderError::Draw(format!("unknown drawable {}", handle)))?;
        for y in rect.y0..rect.y1 {
            for x in rect.x0..rect.x1 {
                self.image.put_pixel(x, y, self.cell_color);
            }
        }
        Ok(())
    }

    fn begin_frame(&mut self) -> Result<(), RenderError> {
        for pixel in self.image.pixels_mut() {
            *pixel = self.background;
        }
        Ok(())
    }

    fn end_frame(&mut self) -> Result<(), RenderError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifeboard_core::{Board, LifeConfig};

    fn display(canvas_size: u32) -> DisplayConfig {
        DisplayConfig {
            canvas_size,
            ..LifeConfig::default().display
        }
    }

    fn lit(image: &RgbImage) -> usize {
        image.pixels().filter(|p| p.0 == [255, 255, 255]).count()
    }

    #[test]
    fn live_cell_fills_its_quad_minus_gutter() {
        // 40px / 4 cells = 10px pitch, 8px quad starting 1px in
        let mut board = Board::from_fn(4, RasterRenderer::new(&display(40)), |x, y| {
            (x, y) == (0, 0)
        })
        .unwrap();
        board.render().unwrap();

        let image = board.renderer().image();
        assert_eq!(lit(image), 64);
        // cell (0, 0) sits in the bottom-left corner of the image
        assert_eq!(image.get_pixel(1, 38).0, [255, 255, 255]);
        assert_eq!(image.get_pixel(8, 31).0, [255, 255, 255]);
        assert_eq!(image.get_pixel(0, 39).0, [0, 0, 0]);
        assert_eq!(image.get_pixel(9, 30).0, [0, 0, 0]);
    }

    #[test]
    fn frames_start_from_a_clear_canvas() {
        let mut board = Board::from_fn(4, RasterRenderer::new(&display(40)), |x, _| x == 1).unwrap();
        board.render().unwrap();
        assert_eq!(lit(board.renderer().image()), 4 * 64);

        // the wrapped column acts as an endless line and thickens to three columns
        board.advance_generation();
        board.render().unwrap();
        assert_eq!(board.population(), 12);

        let renderer = board.into_renderer();
        assert_eq!(lit(renderer.image()), 12 * 64);
    }

    #[test]
    fn rejects_unknown_handles() {
        let mut renderer = RasterRenderer::new(&display(40));
        renderer.begin_frame().unwrap();
        assert!(matches!(renderer.draw(3, 6), Err(RenderError::Draw(_))));
    }
}
