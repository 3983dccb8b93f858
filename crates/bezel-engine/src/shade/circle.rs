use crate::coords::Vec2;
use crate::paint::{clamp01, Color};

/// Bordered circular marker.
///
/// The filled disc has radius `radius`; the border ring extends a further
/// `border` outward. Both must be non-negative.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CircleStyle {
    pub center: Vec2,
    pub radius: f32,
    pub border: f32,
    pub fill_color: Color,
    pub border_color: Color,
}

impl CircleStyle {
    #[inline]
    pub fn new(center: Vec2, radius: f32, border: f32, fill_color: Color, border_color: Color) -> Self {
        Self { center, radius, border, fill_color, border_color }
    }

    /// Distance from the center to the outer edge of the border ring.
    #[inline]
    pub fn outer_radius(&self) -> f32 {
        self.radius + self.border
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.center.is_finite()
            && self.radius.is_finite()
            && self.border.is_finite()
            && self.radius >= 0.0
            && self.border >= 0.0
    }
}

/// Shades one fragment of a circle marker.
///
/// Inside the nominal radius the color runs from `border_color` at the rim to
/// `fill_color`, reaching pure fill `border / 2 + 1` units in from the rim.
/// Outside the radius the border color fades to transparent over the same
/// 1-unit band, starting `border / 2` units out. The transition width is a
/// fixed 1 screen unit regardless of the border width.
///
/// Both sides evaluate to exactly `border_color` at `d == radius`.
pub fn evaluate_circle_marker(fragment: Vec2, style: &CircleStyle) -> Option<Color> {
    let d = fragment.distance(style.center);
    let half_border = style.border * 0.5;

    if d > style.radius + style.border {
        return None;
    }

    if d <= style.radius {
        let d2 = style.radius - d;
        Some(style.border_color.mix(style.fill_color, clamp01(d2 - half_border)))
    } else {
        let d2 = d - style.radius;
        Some(style.border_color.mix(Color::transparent(), clamp01(d2 - half_border)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FILL: Color = Color::new(0.2, 0.4, 0.6, 1.0);
    const RING: Color = Color::new(1.0, 0.5, 0.0, 1.0);

    fn marker(radius: f32, border: f32) -> CircleStyle {
        CircleStyle::new(Vec2::new(50.0, 50.0), radius, border, FILL, RING)
    }

    /// Fragment `d` units to the right of the marker's center.
    fn at(style: &CircleStyle, d: f32) -> Vec2 {
        Vec2::new(style.center.x + d, style.center.y)
    }

    fn assert_close(a: Color, b: Color) {
        let eps = 1e-5;
        assert!(
            (a.r - b.r).abs() < eps
                && (a.g - b.g).abs() < eps
                && (a.b - b.b).abs() < eps
                && (a.a - b.a).abs() < eps,
            "{a:?} != {b:?}"
        );
    }

    // ── outer extent ──────────────────────────────────────────────────────

    #[test]
    fn discards_just_beyond_outer_radius() {
        for &(radius, border) in &[(10.0, 4.0), (3.0, 1.0), (20.0, 0.5), (0.0, 2.0)] {
            let s = marker(radius, border);
            assert_eq!(evaluate_circle_marker(at(&s, radius + border + 0.01), &s), None);
        }
    }

    #[test]
    fn fades_below_border_alpha_near_outer_radius() {
        for &(radius, border) in &[(10.0, 4.0), (3.0, 1.0), (20.0, 0.5), (6.0, 2.0)] {
            let s = marker(radius, border);
            let rim = evaluate_circle_marker(at(&s, radius), &s).unwrap();
            let edge = evaluate_circle_marker(at(&s, radius + border - 0.01), &s).unwrap();
            assert!(edge.a < rim.a, "radius {radius} border {border}: {edge:?} vs {rim:?}");
        }
    }

    #[test]
    fn wide_border_reaches_full_transparency() {
        let s = marker(10.0, 4.0);
        // d2 = 3.5, d2 - border/2 = 1.5 → clamped to 1.
        assert_eq!(evaluate_circle_marker(at(&s, 13.5), &s), Some(Color::transparent()));
    }

    #[test]
    fn zero_radius_marker_covers_only_its_ring() {
        let s = marker(0.0, 2.0);
        assert_eq!(evaluate_circle_marker(s.center, &s), Some(RING));
        assert!(evaluate_circle_marker(at(&s, 2.5), &s).is_none());
    }

    // ── continuity at the rim ─────────────────────────────────────────────

    #[test]
    fn rim_is_exactly_border_color() {
        let s = marker(10.0, 4.0);
        assert_eq!(evaluate_circle_marker(at(&s, 10.0), &s), Some(RING));
    }

    #[test]
    fn both_sides_of_rim_approach_border_color() {
        let s = marker(10.0, 4.0);
        let inner = evaluate_circle_marker(at(&s, 10.0 - 1e-4), &s).unwrap();
        let outer = evaluate_circle_marker(at(&s, 10.0 + 1e-4), &s).unwrap();
        assert_close(inner, RING);
        assert_close(outer, RING);
    }

    #[test]
    fn rim_continuity_holds_with_zero_border() {
        let s = marker(8.0, 0.0);
        assert_eq!(evaluate_circle_marker(at(&s, 8.0), &s), Some(RING));
        assert!(evaluate_circle_marker(at(&s, 8.001), &s).is_none());
    }

    // ── interior blend ────────────────────────────────────────────────────

    #[test]
    fn deep_interior_is_fill_color() {
        let s = marker(10.0, 4.0);
        assert_eq!(evaluate_circle_marker(s.center, &s), Some(FILL));
        // d2 = 3, d2 - border/2 = 1 → pure fill.
        assert_eq!(evaluate_circle_marker(at(&s, 7.0), &s), Some(FILL));
    }

    #[test]
    fn inner_transition_is_one_unit_wide() {
        let s = marker(10.0, 4.0);
        // Transition spans d2 ∈ [2, 3], i.e. d ∈ [7, 8].
        assert_eq!(evaluate_circle_marker(at(&s, 8.0), &s), Some(RING));
        assert_close(evaluate_circle_marker(at(&s, 7.5), &s).unwrap(), RING.mix(FILL, 0.5));
    }

    #[test]
    fn outer_fade_is_one_unit_wide() {
        let s = marker(10.0, 4.0);
        // Fade spans d2 ∈ [2, 3], i.e. d ∈ [12, 13].
        assert_eq!(evaluate_circle_marker(at(&s, 12.0), &s), Some(RING));
        assert_close(
            evaluate_circle_marker(at(&s, 12.5), &s).unwrap(),
            RING.mix(Color::transparent(), 0.5),
        );
    }

    // ── determinism ───────────────────────────────────────────────────────

    #[test]
    fn repeated_evaluation_is_bit_identical() {
        let s = marker(9.3, 2.7);
        for i in 0..200 {
            let p = Vec2::new(38.0 + i as f32 * 0.123, 47.0 + (i % 17) as f32 * 0.77);
            let a = evaluate_circle_marker(p, &s);
            let b = evaluate_circle_marker(p, &s);
            assert_eq!(a.map(|c| c.to_bits()), b.map(|c| c.to_bits()));
        }
    }

    trait ToBits {
        fn to_bits(self) -> [u32; 4];
    }

    impl ToBits for Color {
        fn to_bits(self) -> [u32; 4] {
            [self.r.to_bits(), self.g.to_bits(), self.b.to_bits(), self.a.to_bits()]
        }
    }

    // ── validity ──────────────────────────────────────────────────────────

    #[test]
    fn negative_sizes_are_invalid() {
        assert!(marker(10.0, 4.0).is_valid());
        assert!(!marker(-1.0, 4.0).is_valid());
        assert!(!marker(10.0, -0.5).is_valid());
    }
}
