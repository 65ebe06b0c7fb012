//! Shared parameter types for the Lifeboard simulator
//!
//! This crate contains the configuration structures used by both the headless runner
//! and the interactive viewer, plus the vertex layout shared by every renderer.

use bytemuck::{Pod, Zeroable};

/// World configuration parameters
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldConfig {
    pub dimension: u32,   // Cells per side (grid is dimension x dimension)
    pub threshold: f32,   // Probability a cell starts alive
    pub seed: u64,
    pub generations: u32, // Generations to run headless
}

/// Window and frame pacing parameters
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayConfig {
    pub canvas_size: u32,      // Square canvas extent in logical pixels
    pub fps: u32,              // Generations per second
    pub title: String,
    pub cell_color: [f32; 3],
    pub background: [f32; 3],
}

/// Headless output parameters
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutputConfig {
    pub metrics_every: u32,    // Write a metrics row every N generations
    pub snapshot_at: Vec<u32>, // Generations to write a PNG frame for
}

/// Complete simulation configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LifeConfig {
    pub world: WorldConfig,
    pub display: DisplayConfig,
    pub output: OutputConfig,
}

/// GPU-compatible vertex for cell quads
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { position: [x, y, z] }
    }

    pub fn x(&self) -> f32 {
        self.position[0]
    }

    pub fn y(&self) -> f32 {
        self.position[1]
    }
}

/// GPU-compatible uniform for the cell fragment shader
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct CellStyle {
    pub color: [f32; 4],
}

impl From<&DisplayConfig> for CellStyle {
    fn from(display: &DisplayConfig) -> Self {
        let [r, g, b] = display.cell_color;
        Self { color: [r, g, b, 1.0] }
    }
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            world: WorldConfig {
                dimension: 64,
                threshold: 0.15,
                seed: 1337,
                generations: 500,
            },
            display: DisplayConfig {
                canvas_size: 640,
                fps: 12,
                title: "Conway's Game of Life".to_string(),
                cell_color: [1.0, 1.0, 1.0],
                background: [0.0, 0.0, 0.0],
            },
            output: OutputConfig {
                metrics_every: 1,
                snapshot_at: vec![0, 100, 500],
            },
        }
    }
}

impl LifeConfig {
    /// Check the configuration for values the simulator cannot run with
    pub fn validate(&self) -> Result<(), String> {
        let world = &self.world;
        let display = &self.display;

        if world.dimension == 0 {
            return Err("world.dimension must be greater than 0".to_string());
        }
        if !(0.0..=1.0).contains(&world.threshold) {
            return Err(format!(
                "world.threshold must be within [0, 1], got {}",
                world.threshold
            ));
        }
        if display.canvas_size == 0 {
            return Err("display.canvas_size must be greater than 0".to_string());
        }
        if display.fps == 0 {
            return Err("display.fps must be greater than 0".to_string());
        }
        layout::validate_canvas(display.canvas_size, world.dimension)?;
        if self.output.metrics_every == 0 {
            return Err("output.metrics_every must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Log a one-line summary of the run
    pub fn log_summary(&self) {
        log::info!(
            "World {}x{} cells, threshold {}, seed {}, canvas {}px @ {} fps",
            self.world.dimension,
            self.world.dimension,
            self.world.threshold,
            self.world.seed,
            self.display.canvas_size,
            self.display.fps
        );
    }
}

/// Cell quad layout shared by every renderer
///
/// Each cell is a unit square made of two triangles, scaled into normalized
/// device coordinates with a fixed pixel gutter between neighbouring cells.
pub mod layout {
    use super::Vertex;

    /// Two triangles, bottom-left then top-right
    pub const UNIT_SQUARE: [Vertex; 6] = [
        Vertex::new(-0.5, 0.5, 0.0),
        Vertex::new(-0.5, -0.5, 0.0),
        Vertex::new(0.5, -0.5, 0.0),
        Vertex::new(-0.5, 0.5, 0.0),
        Vertex::new(0.5, 0.5, 0.0),
        Vertex::new(0.5, -0.5, 0.0),
    ];

    /// Vertices issued per live cell draw call
    pub const QUAD_VERTEX_COUNT: u32 = UNIT_SQUARE.len() as u32;

    /// Empty pixels between adjacent cells
    pub const CELL_GUTTER_PX: f32 = 2.0;

    /// Reject canvases where a cell would vanish into its own gutter
    pub fn validate_canvas(canvas_size: u32, dimension: u32) -> Result<(), String> {
        let spacing = canvas_size as f32 / dimension as f32;
        if spacing - CELL_GUTTER_PX < 1.0 {
            Err(format!(
                "canvas of {}px is too small for {} cells per side (need at least {}px)",
                canvas_size,
                dimension,
                (dimension as f32 * (CELL_GUTTER_PX + 1.0)).ceil()
            ))
        } else {
            Ok(())
        }
    }

    /// Log layout constants for debugging
    pub fn log_layout() {
        log::debug!(
            "Cell quad: {} vertices, {}px gutter",
            QUAD_VERTEX_COUNT,
            CELL_GUTTER_PX
        );
    }
}
