//! CPU rasterization driver.
//!
//! The shading core evaluates one fragment at a time; this module supplies the
//! fragments. For each draw item in paint order it:
//! - bounds the shape in pixels (intersected with the item's clip and the target)
//! - evaluates the shape's shader at every integer pixel position in the bounds
//! - composites the result over the framebuffer (straight-alpha source-over)
//!
//! Rows are shaded in parallel with `rayon`; items are processed one after
//! another so compositing order matches paint order exactly.
//!
//! Convention:
//! - pixel `(x, y)` is shaded at fragment position `(x, y)` (integer pixel
//!   coordinates, matching the inclusive `BoxEdges` placement)
//! - screen space is +Y up; framebuffer storage is top row first

mod framebuffer;
mod rasterizer;
mod shader;

pub use framebuffer::Framebuffer;
pub use rasterizer::{RasterConfig, RasterStats, Rasterizer};
pub use shader::{FragmentShader, Shaded};
