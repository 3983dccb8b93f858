use crate::coords::{BoxEdges, Vec2};
use crate::paint::Color;

/// Per-side distances, in pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Insets {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Insets {
    #[inline]
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self { top, right, bottom, left }
    }

    #[inline]
    pub const fn all(v: f32) -> Self {
        Self::new(v, v, v, v)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::all(0.0)
    }
}

/// One border color per edge.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct EdgeColors {
    pub top: Color,
    pub right: Color,
    pub bottom: Color,
    pub left: Color,
}

impl EdgeColors {
    #[inline]
    pub const fn new(top: Color, right: Color, bottom: Color, left: Color) -> Self {
        Self { top, right, bottom, left }
    }

    #[inline]
    pub const fn all(c: Color) -> Self {
        Self::new(c, c, c, c)
    }
}

/// Bordered rounded rectangle ("UI element").
///
/// `margin` insets the border's outer boundary from `edges`. The border band is
/// `border_width` wide and its corners are rounded with an outer radius of
/// `max(border_radius, border_width)`.
///
/// Invariants: `edges.is_valid()`, all sizes non-negative, and each margin
/// smaller than half of the box extent on its axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RoundedRectStyle {
    pub edges: BoxEdges,
    pub margin: Insets,
    pub border_width: f32,
    pub border_radius: f32,
    pub border_colors: EdgeColors,
    pub background: Color,
}

impl RoundedRectStyle {
    #[inline]
    pub fn new(edges: BoxEdges) -> Self {
        Self {
            edges,
            margin: Insets::zero(),
            border_width: 0.0,
            border_radius: 0.0,
            border_colors: EdgeColors::all(Color::black()),
            background: Color::black(),
        }
    }

    #[inline]
    pub fn with_margin(mut self, margin: Insets) -> Self {
        self.margin = margin;
        self
    }

    #[inline]
    pub fn with_border(mut self, width: f32, radius: f32, colors: EdgeColors) -> Self {
        self.border_width = width;
        self.border_radius = radius;
        self.border_colors = colors;
        self
    }

    #[inline]
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Outer corner radius: never narrower than the border itself.
    #[inline]
    pub fn outer_corner_radius(&self) -> f32 {
        self.border_radius.max(self.border_width)
    }

    /// Inner corner radius, where the border band ends and the interior begins.
    #[inline]
    pub fn inner_corner_radius(&self) -> f32 {
        (self.border_radius - self.border_width).max(0.0)
    }

    pub fn is_valid(&self) -> bool {
        let m = self.margin;
        let half_w = self.edges.width() * 0.5;
        let half_h = self.edges.height() * 0.5;
        let sized = |v: f32| v.is_finite() && v >= 0.0;

        self.edges.is_valid()
            && sized(self.border_width)
            && sized(self.border_radius)
            && [m.top, m.right, m.bottom, m.left].into_iter().all(sized)
            && m.left < half_w
            && m.right < half_w
            && m.bottom < half_h
            && m.top < half_h
    }
}

/// Region of a rounded rectangle a fragment falls in.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum RegionId {
    Outside,
    BorderTop,
    BorderRight,
    BorderBottom,
    BorderLeft,
    Interior,
    /// No classification rule matched. Only reachable through a logic error or
    /// parameters that break the style's invariants; treat as `Outside`.
    Unreachable,
}

impl RegionId {
    #[inline]
    pub fn is_border(self) -> bool {
        matches!(
            self,
            RegionId::BorderTop | RegionId::BorderRight | RegionId::BorderBottom | RegionId::BorderLeft
        )
    }

    /// Color for this region, or `None` when the fragment is discarded.
    #[inline]
    pub fn color(self, style: &RoundedRectStyle) -> Option<Color> {
        match self {
            RegionId::Interior => Some(style.background),
            RegionId::BorderTop => Some(style.border_colors.top),
            RegionId::BorderRight => Some(style.border_colors.right),
            RegionId::BorderBottom => Some(style.border_colors.bottom),
            RegionId::BorderLeft => Some(style.border_colors.left),
            RegionId::Outside | RegionId::Unreachable => None,
        }
    }
}

/// How far inside the margin-inset box a fragment lies along each side.
/// Negative means outside on that side.
#[derive(Debug, Copy, Clone)]
struct MarginDistances {
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
}

impl MarginDistances {
    #[inline]
    fn measure(p: Vec2, style: &RoundedRectStyle) -> Self {
        let e = style.edges;
        let m = style.margin;
        Self {
            left: p.x - (e.left + m.left),
            right: (e.right - m.right) - p.x,
            bottom: p.y - (e.bottom + m.bottom),
            top: (e.top - m.top) - p.y,
        }
    }

    #[inline]
    fn any_negative(&self) -> bool {
        self.left < 0.0 || self.right < 0.0 || self.bottom < 0.0 || self.top < 0.0
    }
}

/// Classifies a fragment against a rounded rectangle.
///
/// Order of tests:
/// 1. outside the margin box on any side → `Outside`
/// 2. vertically clear of both corner bands → interior or the nearer side edge
/// 3. horizontally clear of both corner bands → interior or the nearer of top/bottom
/// 4. corners, in the order top-left, top-right, bottom-left, bottom-right
///
/// On a corner's border arc the nearer edge wins. Ties go to the second edge of
/// each comparison: top corners resolve to `BorderTop`, bottom corners to the
/// side edge.
pub fn classify(fragment: Vec2, style: &RoundedRectStyle) -> RegionId {
    let d = MarginDistances::measure(fragment, style);
    if d.any_negative() {
        return RegionId::Outside;
    }

    let bw = style.border_width;
    let radwid = style.outer_corner_radius();
    let rad = style.inner_corner_radius();

    if d.bottom > radwid && d.top > radwid {
        if d.left > bw && d.right > bw {
            return RegionId::Interior;
        }
        return if d.left < d.right { RegionId::BorderLeft } else { RegionId::BorderRight };
    }

    if d.left > radwid && d.right > radwid {
        if d.bottom > bw && d.top > bw {
            return RegionId::Interior;
        }
        return if d.bottom < d.top { RegionId::BorderBottom } else { RegionId::BorderTop };
    }

    let corner = |dx: f32, dy: f32, on_arc: RegionId| -> Option<RegionId> {
        if dx > radwid || dy > radwid {
            return None;
        }
        let r2 = (dx - radwid) * (dx - radwid) + (dy - radwid) * (dy - radwid);
        Some(if r2 > radwid * radwid {
            RegionId::Outside
        } else if r2 < rad * rad {
            RegionId::Interior
        } else {
            on_arc
        })
    };

    let top_left = if d.left < d.top { RegionId::BorderLeft } else { RegionId::BorderTop };
    let top_right = if d.right < d.top { RegionId::BorderRight } else { RegionId::BorderTop };
    let bottom_left = if d.bottom < d.left { RegionId::BorderBottom } else { RegionId::BorderLeft };
    let bottom_right = if d.bottom < d.right { RegionId::BorderBottom } else { RegionId::BorderRight };

    corner(d.left, d.top, top_left)
        .or_else(|| corner(d.right, d.top, top_right))
        .or_else(|| corner(d.left, d.bottom, bottom_left))
        .or_else(|| corner(d.right, d.bottom, bottom_right))
        .unwrap_or(RegionId::Unreachable)
}

/// Shades one fragment of a rounded rectangle: classify, then map the region
/// to its color. `Outside` and `Unreachable` discard.
#[inline]
pub fn evaluate_rounded_rect(fragment: Vec2, style: &RoundedRectStyle) -> Option<Color> {
    classify(fragment, style).color(style)
}
