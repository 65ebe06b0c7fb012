//! Error types for the `lifeboard-core` crate.

/// Failures reported by a [`Renderer`](crate::render::Renderer) implementation.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The renderer could not report its canvas size.
    #[error("canvas size unavailable: {0}")]
    CanvasUnavailable(String),

    /// A drawable could not be created from cell geometry.
    #[error("failed to create drawable: {0}")]
    DrawableCreation(String),

    /// A draw call failed.
    #[error("draw call failed: {0}")]
    Draw(String),

    /// Beginning or ending a frame failed.
    #[error("frame failed: {0}")]
    Frame(String),
}

/// Errors that abort [`Board`](crate::sim::Board) construction.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    /// The grid must have at least one cell per side.
    #[error("board dimension must be greater than 0")]
    InvalidDimension,

    /// The seeding probability must lie in `[0, 1]`.
    #[error("seeding threshold must be within [0, 1], got {0}")]
    InvalidThreshold(f32),

    /// The renderer failed while the board was being built.
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Errors raised while bringing up the GPU.
#[derive(Debug, thiserror::Error)]
pub enum GpuError {
    /// No adapter matched the requested options.
    #[error("failed to find an appropriate adapter")]
    NoAdapter,

    /// The adapter refused to create a device.
    #[error("failed to create device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
}
