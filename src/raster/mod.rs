//! Software rasterizer
//!
//! Everything that touches pixels lives here:
//! - Vector math and rotations
//! - Packed ARGB pixel buffer with drawing primitives
//! - The per-frame rotate/cull/project/rasterize pipeline

mod buffer;
mod math;
mod pipeline;
mod types;

pub use buffer::*;
pub use math::*;
pub use pipeline::*;
pub use types::*;
