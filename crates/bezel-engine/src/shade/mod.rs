//! Per-fragment shading core.
//!
//! Every entry point here is a pure function of one fragment position and a
//! read-only shape style. There is no state shared between fragments, so the
//! rasterizer is free to evaluate pixels in any order and on any thread.
//!
//! A return value of `None` means "discard": the pixel is not written.
//!
//! Parameters that violate a style's documented invariants (negative widths,
//! inverted boxes, oversize margins) produce unspecified colors. The shaders do
//! not check them; callers that accept untrusted styles should use the
//! `is_valid` helpers first.

pub mod circle;
pub mod rounded_rect;

pub use circle::{evaluate_circle_marker, CircleStyle};
pub use rounded_rect::{
    classify, evaluate_rounded_rect, EdgeColors, Insets, RegionId, RoundedRectStyle,
};
