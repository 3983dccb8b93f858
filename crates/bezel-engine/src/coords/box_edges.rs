use super::Vec2;

/// Axis-aligned box described by its four edges in screen pixels (+Y up).
///
/// Edges are inclusive: a box placed at `left = 0` with a width of 100 pixels
/// has `right = 99`. Valid boxes satisfy `left < right` and `bottom < top`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct BoxEdges {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl BoxEdges {
    #[inline]
    pub const fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self { left, right, top, bottom }
    }

    /// Places a box from its top-left pixel and its size in pixels.
    ///
    /// `right = left + width - 1` and `bottom = top - height + 1`, so the box
    /// covers exactly `width × height` integer pixel positions.
    #[inline]
    pub fn from_top_left(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            right: left + width - 1.0,
            top,
            bottom: top - height + 1.0,
        }
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.top - self.bottom
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.left.is_finite()
            && self.right.is_finite()
            && self.top.is_finite()
            && self.bottom.is_finite()
            && self.left < self.right
            && self.bottom < self.top
    }

    /// Closed containment: points on an edge are inside.
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.bottom && p.y <= self.top
    }

    /// Overlap of two boxes, or `None` when they do not share any area.
    #[inline]
    pub fn intersect(self, other: BoxEdges) -> Option<BoxEdges> {
        let left = self.left.max(other.left);
        let right = self.right.min(other.right);
        let bottom = self.bottom.max(other.bottom);
        let top = self.top.min(other.top);

        if left > right || bottom > top {
            None
        } else {
            Some(BoxEdges::new(left, right, top, bottom))
        }
    }
}
