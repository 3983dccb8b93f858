use bytemuck::{Pod, Zeroable};

/// Straight-alpha RGBA color with `f32` channels in `[0, 1]`.
///
/// `#[repr(C)]` + `Pod` so a slice of colors can be viewed as raw bytes
/// without copying (see `Framebuffer::as_bytes`).
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// `(0, 0, 0, 0)`; the far end of the circle marker's outer fade.
    #[inline]
    pub const fn transparent() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }

    #[inline]
    pub const fn from_array(c: [f32; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }

    /// Creates a color from straight sRGB bytes (`0`–`255`).
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Quantizes to straight RGBA bytes, clamping out-of-range channels.
    #[inline]
    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |v: f32| (clamp01(v) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    /// Component-wise linear interpolation: `self * (1 - t) + other * t`.
    ///
    /// `t = 0` returns `self` exactly and `t = 1` returns `other` exactly.
    #[inline]
    pub fn mix(self, other: Color, t: f32) -> Color {
        let lerp = |a: f32, b: f32| a * (1.0 - t) + b * t;
        Color::new(
            lerp(self.r, other.r),
            lerp(self.g, other.g),
            lerp(self.b, other.b),
            lerp(self.a, other.a),
        )
    }

    /// Source-over compositing of `self` onto `dst` (both straight alpha).
    #[inline]
    pub fn over(self, dst: Color) -> Color {
        let sa = clamp01(self.a);
        let da = clamp01(dst.a) * (1.0 - sa);
        let a = sa + da;
        if a <= 0.0 {
            return Color::transparent();
        }
        let inv = 1.0 / a;
        Color::new(
            (self.r * sa + dst.r * da) * inv,
            (self.g * sa + dst.g * da) * inv,
            (self.b * sa + dst.b * da) * inv,
            a,
        )
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}

/// Clamps `v` to `[0, 1]`.
#[inline]
pub fn clamp01(v: f32) -> f32 {
    v.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);
    const BLUE: Color = Color::new(0.0, 0.0, 1.0, 0.5);

    // ── mix ───────────────────────────────────────────────────────────────

    #[test]
    fn mix_endpoints_are_exact() {
        assert_eq!(RED.mix(BLUE, 0.0), RED);
        assert_eq!(RED.mix(BLUE, 1.0), BLUE);
    }

    #[test]
    fn mix_midpoint() {
        let m = RED.mix(BLUE, 0.5);
        assert_eq!(m, Color::new(0.5, 0.0, 0.5, 0.75));
    }

    #[test]
    fn mix_toward_transparent_darkens_rgb() {
        let m = RED.mix(Color::transparent(), 0.25);
        assert_eq!(m, Color::new(0.75, 0.0, 0.0, 0.75));
    }

    // ── over ──────────────────────────────────────────────────────────────

    #[test]
    fn opaque_source_replaces_destination() {
        assert_eq!(RED.over(BLUE), RED);
    }

    #[test]
    fn transparent_source_keeps_destination() {
        assert_eq!(Color::transparent().over(BLUE), BLUE);
    }

    #[test]
    fn half_alpha_over_opaque() {
        let c = Color::new(1.0, 1.0, 1.0, 0.5).over(Color::black());
        assert_eq!(c, Color::new(0.5, 0.5, 0.5, 1.0));
    }

    #[test]
    fn both_transparent_is_transparent() {
        assert_eq!(Color::transparent().over(Color::transparent()), Color::transparent());
    }

    // ── bytes ─────────────────────────────────────────────────────────────

    #[test]
    fn to_rgba8_rounds_and_clamps() {
        assert_eq!(Color::new(1.5, 0.5, -1.0, 1.0).to_rgba8(), [255, 128, 0, 255]);
        assert_eq!(Color::from_srgb_u8(12, 34, 56, 78).to_rgba8(), [12, 34, 56, 78]);
    }
}
