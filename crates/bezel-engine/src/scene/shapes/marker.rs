use crate::coords::{BoxEdges, Vec2};
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};
use crate::shade::CircleStyle;

/// Circle marker draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerCmd {
    pub style: CircleStyle,
}

impl MarkerCmd {
    #[inline]
    pub fn new(style: CircleStyle) -> Self {
        Self { style }
    }

    /// Square around the border ring's outer edge.
    #[inline]
    pub fn bounds(&self) -> BoxEdges {
        let c = self.style.center;
        let r = self.style.outer_radius();
        BoxEdges::new(c.x - r, c.x + r, c.y + r, c.y - r)
    }
}

impl DrawList {
    /// Records a circle marker.
    #[inline]
    pub fn push_marker(&mut self, z: ZIndex, style: CircleStyle) {
        self.push(z, DrawCmd::Marker(MarkerCmd::new(style)));
    }

    /// Records a marker from its individual parameters.
    #[inline]
    pub fn push_point(
        &mut self,
        z: ZIndex,
        center: Vec2,
        radius: f32,
        border: f32,
        fill_color: Color,
        border_color: Color,
    ) {
        self.push_marker(z, CircleStyle::new(center, radius, border, fill_color, border_color));
    }
}
