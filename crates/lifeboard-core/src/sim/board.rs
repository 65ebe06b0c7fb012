use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::{BoardError, RenderError};
use crate::render::Renderer;
use crate::sim::cell::{Cell, Transition};
use crate::sim::geometry::cell_quad;

/// Moore neighbourhood offsets
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Wrap a coordinate at most one step outside `[0, dimension)` back onto the torus
fn wrap(coord: isize, dimension: usize) -> usize {
    let dim = dimension as isize;
    if coord == dim {
        0
    } else if coord == -1 {
        dimension - 1
    } else {
        coord as usize
    }
}

/// Statistics for one generation transition
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationStats {
    pub generation: u64,
    pub population: usize,
    pub births: usize,
    pub deaths: usize,
}

/// Square toroidal grid of cells, indexed `[x][y]`
pub struct Board<R: Renderer> {
    dimension: usize,
    cells: Vec<Vec<Cell<R::Handle>>>,
    renderer: R,
    generation: u64,
    last_stats: GenerationStats,
}

impl<R: Renderer> Board<R> {
    /// Build a board whose cells start alive with probability `threshold`, drawn from `rng`
    pub fn new<G: Rng>(
        dimension: usize,
        renderer: R,
        threshold: f32,
        rng: &mut G,
    ) -> Result<Self, BoardError> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(BoardError::InvalidThreshold(threshold));
        }
        Self::from_fn(dimension, renderer, |_, _| rng.gen::<f32>() < threshold)
    }

    /// Build a randomly seeded board from an explicit seed
    pub fn seeded(
        dimension: usize,
        renderer: R,
        threshold: f32,
        seed: u64,
    ) -> Result<Self, BoardError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::new(dimension, renderer, threshold, &mut rng)
    }

    /// Build a board with an explicit initial state, visiting cells `x`-major
    pub fn from_fn<F>(dimension: usize, mut renderer: R, mut alive: F) -> Result<Self, BoardError>
    where
        F: FnMut(usize, usize) -> bool,
    {
        if dimension == 0 {
            return Err(BoardError::InvalidDimension);
        }
        let canvas_size = renderer.canvas_size()?;

        let mut cells = Vec::with_capacity(dimension);
        for x in 0..dimension {
            let mut column = Vec::with_capacity(dimension);
            for y in 0..dimension {
                let quad = cell_quad(x, y, dimension, canvas_size);
                let handle = renderer.create_drawable(&quad)?;
                column.push(Cell::new(x, y, alive(x, y), handle));
            }
            cells.push(column);
        }

        let population = cells.iter().flatten().filter(|c| c.is_alive()).count();
        log::debug!(
            "Built {}x{} board on a {}px canvas, {} cells alive",
            dimension,
            dimension,
            canvas_size,
            population
        );

        Ok(Self {
            dimension,
            cells,
            renderer,
            generation: 0,
            last_stats: GenerationStats {
                population,
                ..Default::default()
            },
        })
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of completed generations
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn last_stats(&self) -> GenerationStats {
        self.last_stats
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell<R::Handle>> {
        self.cells.get(x).and_then(|column| column.get(y))
    }

    /// All cells, `x`-major
    pub fn cells(&self) -> impl Iterator<Item = &Cell<R::Handle>> {
        self.cells.iter().flatten()
    }

    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.cell(x, y).map_or(false, Cell::is_alive)
    }

    pub fn population(&self) -> usize {
        self.cells().filter(|c| c.is_alive()).count()
    }

    /// Current state of every cell, `x`-major
    pub fn alive_mask(&self) -> Vec<bool> {
        self.cells().map(Cell::is_alive).collect()
    }

    /// Live cells among the 8 toroidal neighbours of `(x, y)`, `None` off the board
    pub fn live_neighbors(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.dimension || y >= self.dimension {
            return None;
        }
        Some(self.count_neighbors(x, y))
    }

    fn count_neighbors(&self, x: usize, y: usize) -> u8 {
        let mut count = 0;
        for (dx, dy) in NEIGHBOR_OFFSETS {
            let nx = wrap(x as isize + dx, self.dimension);
            let ny = wrap(y as isize + dy, self.dimension);
            if self.cells[nx][ny].is_alive() {
                count += 1;
            }
        }
        count
    }

    /// Advance every cell by one generation.
    ///
    /// All next states are planned from the current generation first, then
    /// committed together, so the result does not depend on visiting order.
    pub fn advance_generation(&mut self) {
        for x in 0..self.dimension {
            for y in 0..self.dimension {
                let count = self.count_neighbors(x, y);
                self.cells[x][y].plan(count);
            }
        }

        let mut stats = GenerationStats {
            generation: self.generation + 1,
            ..Default::default()
        };
        for cell in self.cells.iter_mut().flatten() {
            match cell.commit() {
                Transition::Born => stats.births += 1,
                Transition::Died => stats.deaths += 1,
                Transition::Unchanged => {}
            }
            if cell.is_alive() {
                stats.population += 1;
            }
        }

        self.generation = stats.generation;
        self.last_stats = stats;
    }

    /// Draw every live cell between the renderer's frame hooks
    pub fn render(&mut self) -> Result<(), RenderError> {
        self.renderer.begin_frame()?;
        for cell in self.cells.iter().flatten() {
            cell.draw(&mut self.renderer)?;
        }
        self.renderer.end_frame()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

impl<R: Renderer> fmt::Display for Board<R> {
    /// One text row per `y`, highest first, `#` for live cells
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.dimension).rev() {
            for x in 0..self.dimension {
                let glyph = if self.cells[x][y].is_alive() { '#' } else { '.' };
                write!(f, "{}", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
