//! Color model shared by the shaders, the scene, and the rasterizer.
//!
//! Colors are straight (non-premultiplied) RGBA. The shaders blend in this
//! space, and the framebuffer composites in it as well.

pub mod color;

pub use color::{clamp01, Color};
