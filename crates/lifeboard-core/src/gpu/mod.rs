pub mod device;
pub mod pipelines;

pub use device::*;
pub use pipelines::*;
