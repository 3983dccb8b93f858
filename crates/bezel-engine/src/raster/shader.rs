use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::DrawCmd;
use crate::shade::{classify, evaluate_circle_marker, CircleStyle, RegionId, RoundedRectStyle};

/// Outcome of shading one fragment, as seen by the driver.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Shaded {
    Color(Color),
    Discard,
    /// Discarded because the classifier fell through every rule.
    Unreachable,
}

/// A shape the rasterizer can evaluate per pixel.
///
/// Implementations must be pure: the same fragment always yields the same
/// result, and no call may observe another.
pub trait FragmentShader: Sync {
    fn shade(&self, fragment: Vec2) -> Shaded;
}

impl FragmentShader for CircleStyle {
    #[inline]
    fn shade(&self, fragment: Vec2) -> Shaded {
        match evaluate_circle_marker(fragment, self) {
            Some(c) => Shaded::Color(c),
            None => Shaded::Discard,
        }
    }
}

impl FragmentShader for RoundedRectStyle {
    #[inline]
    fn shade(&self, fragment: Vec2) -> Shaded {
        match classify(fragment, self) {
            RegionId::Unreachable => Shaded::Unreachable,
            region => region.color(self).map_or(Shaded::Discard, Shaded::Color),
        }
    }
}

impl FragmentShader for DrawCmd {
    #[inline]
    fn shade(&self, fragment: Vec2) -> Shaded {
        match self {
            DrawCmd::Marker(cmd) => cmd.style.shade(fragment),
            DrawCmd::UiElement(cmd) => cmd.style.shade(fragment),
        }
    }
}
