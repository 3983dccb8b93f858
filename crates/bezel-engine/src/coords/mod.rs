//! Coordinate and geometry types shared by the shading core and the rasterizer.
//!
//! Canonical screen space:
//! - pixel units, one unit per framebuffer pixel
//! - origin bottom-left
//! - +X right, +Y up
//!
//! Shapes are handed to the shaders already in this space; there is no
//! projection step inside the engine.

mod box_edges;
mod vec2;

pub use box_edges::BoxEdges;
pub use vec2::Vec2;
