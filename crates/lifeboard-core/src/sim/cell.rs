use crate::error::RenderError;
use crate::layout::QUAD_VERTEX_COUNT;
use crate::render::Renderer;

/// Outcome of committing a cell's planned state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Born,
    Died,
    Unchanged,
}

/// B3/S23: a live cell survives with 2 or 3 neighbours, a dead cell is born with exactly 3.
pub fn next_state(alive: bool, live_neighbors: u8) -> bool {
    matches!((alive, live_neighbors), (true, 2) | (_, 3))
}

/// One grid cell with its current and planned state
#[derive(Debug, Clone)]
pub struct Cell<H> {
    x: usize,
    y: usize,
    alive: bool,
    alive_next: bool,
    handle: H,
}

impl<H: Copy> Cell<H> {
    pub fn new(x: usize, y: usize, alive: bool, handle: H) -> Self {
        Self {
            x,
            y,
            alive,
            alive_next: alive,
            handle,
        }
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn is_alive_next(&self) -> bool {
        self.alive_next
    }

    pub fn handle(&self) -> H {
        self.handle
    }

    /// Compute the next generation's state without touching the current one
    pub fn plan(&mut self, live_neighbors: u8) {
        self.alive_next = next_state(self.alive, live_neighbors);
    }

    /// Make the planned state current
    pub fn commit(&mut self) -> Transition {
        let was_alive = self.alive;
        self.alive = self.alive_next;
        match (was_alive, self.alive) {
            (false, true) => Transition::Born,
            (true, false) => Transition::Died,
            _ => Transition::Unchanged,
        }
    }

    /// Plan and commit in one go, for a cell considered in isolation
    pub fn step(&mut self, live_neighbors: u8) -> Transition {
        self.plan(live_neighbors);
        self.commit()
    }

    /// Issue a draw call for this cell if it is alive
    pub fn draw<R>(&self, renderer: &mut R) -> Result<(), RenderError>
    where
        R: Renderer<Handle = H>,
    {
        if !self.alive {
            return Ok(());
        }
        renderer.draw(self.handle, QUAD_VERTEX_COUNT)
    }
}
