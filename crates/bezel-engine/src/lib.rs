//! Bezel engine crate.
//!
//! Per-fragment shading for two bordered UI primitives, a circular marker and
//! a rounded UI element, plus the CPU pieces that drive it: a z-ordered draw
//! list and a row-parallel rasterizer.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`coords`] | `Vec2`, `BoxEdges` (screen pixels, +Y up) |
//! | [`paint`] | straight-alpha `Color` |
//! | [`shade`] | the pure per-fragment shaders |
//! | [`scene`] | `DrawList`, `DrawCmd`, `ZIndex` |
//! | [`raster`] | `Framebuffer`, `Rasterizer` |
//! | [`logging`] | `env_logger` setup |

pub mod coords;
pub mod logging;
pub mod paint;
pub mod raster;
pub mod scene;
pub mod shade;
