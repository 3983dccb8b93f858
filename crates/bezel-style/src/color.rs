//! Color literals: `#rrggbb`, `rgb()`, `rgba()`, `hsl()`, `hsla()`, and names.

/// Straight-alpha RGBA from `0xRRGGBB`.
#[inline]
fn from_hex(rgb: u32, alpha: f32) -> [f32; 4] {
    let channel = |shift: u32| ((rgb >> shift) & 0xff) as f32 / 255.0;
    [channel(16), channel(8), channel(0), alpha]
}

/// Parses the digits of a `#rrggbb` literal (without the `#`).
pub fn parse_hex(digits: &str) -> Option<[f32; 4]> {
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok().map(|rgb| from_hex(rgb, 1.0))
}

/// `rgb(r, g, b)` / `rgba(r, g, b, a)`: channels in `0..=255`, alpha in `[0, 1]`.
pub fn from_rgb(r: f32, g: f32, b: f32, a: f32) -> [f32; 4] {
    let c = |v: f32| (v / 255.0).clamp(0.0, 1.0);
    [c(r), c(g), c(b), a.clamp(0.0, 1.0)]
}

/// `hsl(h, s%, l%)` / `hsla(h, s%, l%, a)`: hue in degrees, saturation and
/// lightness in percent, alpha in `[0, 1]`.
pub fn from_hsl(h: f32, s: f32, l: f32, a: f32) -> [f32; 4] {
    let s = (s / 100.0).clamp(0.0, 1.0);
    let l = (l / 100.0).clamp(0.0, 1.0);
    let h = h.rem_euclid(360.0) / 60.0;

    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = l - chroma / 2.0;
    [r + m, g + m, b + m, a.clamp(0.0, 1.0)]
}

/// Looks up a named color (`transparent` included).
pub fn named(name: &str) -> Option<[f32; 4]> {
    if name == "transparent" {
        return Some([0.0, 0.0, 0.0, 0.0]);
    }
    NAMED_COLORS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|&(_, rgb)| from_hex(rgb, 1.0))
}

const NAMED_COLORS: &[(&str, u32)] = &[
    // reds
    ("indianred", 0xcd5c5c), ("lightcoral", 0xf08080), ("salmon", 0xfa8072),
    ("darksalmon", 0xe9967a), ("lightsalmon", 0xffa07a), ("crimson", 0xdc143c),
    ("red", 0xff0000), ("firebrick", 0xb22222), ("darkred", 0x8b0000),
    // pinks
    ("pink", 0xffc0cb), ("lightpink", 0xffb6c1), ("hotpink", 0xff69b4),
    ("deeppink", 0xff1493), ("mediumvioletred", 0xc71585), ("palevioletred", 0xdb7093),
    // oranges
    ("coral", 0xff7f50), ("tomato", 0xff6347), ("orangered", 0xff4500),
    ("darkorange", 0xff8c00), ("orange", 0xffa500),
    // yellows
    ("gold", 0xffd700), ("yellow", 0xffff00), ("lightyellow", 0xffffe0),
    ("lemonchiffon", 0xfffacd), ("lightgoldenrodyellow", 0xfafad2), ("papayawhip", 0xffefd5),
    ("moccasin", 0xffe4b5), ("peachpuff", 0xffdab9), ("palegoldenrod", 0xeee8aa),
    ("khaki", 0xf0e68c), ("darkkhaki", 0xbdb76b),
    // purples
    ("lavender", 0xe6e6fa), ("thistle", 0xd8bfd8), ("plum", 0xdda0dd),
    ("violet", 0xee82ee), ("orchid", 0xda70d6), ("fuchsia", 0xff00ff),
    ("magenta", 0xff00ff), ("mediumorchid", 0xba55d3), ("mediumpurple", 0x9370db),
    ("blueviolet", 0x8a2be2), ("darkviolet", 0x9400d3), ("darkorchid", 0x9932cc),
    ("darkmagenta", 0x8b008b), ("purple", 0x800080), ("rebeccapurple", 0x663399),
    ("indigo", 0x4b0082), ("mediumslateblue", 0x7b68ee), ("slateblue", 0x6a5acd),
    ("darkslateblue", 0x483d8b),
    // greens
    ("greenyellow", 0xadff2f), ("chartreuse", 0x7fff00), ("lawngreen", 0x7cfc00),
    ("lime", 0x00ff00), ("limegreen", 0x32cd32), ("palegreen", 0x98fb98),
    ("lightgreen", 0x90ee90), ("mediumspringgreen", 0x00fa9a), ("springgreen", 0x00ff7f),
    ("mediumseagreen", 0x3cb371), ("seagreen", 0x2e8b57), ("forestgreen", 0x228b22),
    ("green", 0x008000), ("darkgreen", 0x006400), ("yellowgreen", 0x9acd32),
    ("olivedrab", 0x6b8e23), ("olive", 0x808000), ("darkolivegreen", 0x556b2f),
    ("mediumaquamarine", 0x66cdaa), ("darkseagreen", 0x8fbc8f), ("lightseagreen", 0x20b2aa),
    ("darkcyan", 0x008b8b), ("teal", 0x008080),
    // blues
    ("aqua", 0x00ffff), ("cyan", 0x00ffff), ("lightcyan", 0xe0ffff),
    ("paleturquoise", 0xafeeee), ("aquamarine", 0x7fffd4), ("turquoise", 0x40e0d0),
    ("mediumturquoise", 0x48d1cc), ("darkturquoise", 0x00ced1), ("cadetblue", 0x5f9ea0),
    ("steelblue", 0x4682b4), ("lightsteelblue", 0xb0c4de), ("powderblue", 0xb0e0e6),
    ("lightblue", 0xadd8e6), ("skyblue", 0x87ceeb), ("lightskyblue", 0x87cefa),
    ("deepskyblue", 0x00bfff), ("dodgerblue", 0x1e90ff), ("cornflowerblue", 0x6495ed),
    ("royalblue", 0x4169e1), ("blue", 0x0000ff), ("mediumblue", 0x0000cd),
    ("darkblue", 0x00008b), ("navy", 0x000080), ("midnightblue", 0x191970),
    // browns
    ("cornsilk", 0xfff8dc), ("blanchedalmond", 0xffebcd), ("bisque", 0xffe4c4),
    ("navajowhite", 0xffdead), ("wheat", 0xf5deb3), ("burlywood", 0xdeb887),
    ("tan", 0xd2b48c), ("rosybrown", 0xbc8f8f), ("sandybrown", 0xf4a460),
    ("goldenrod", 0xdaa520), ("darkgoldenrod", 0xb8860b), ("peru", 0xcd853f),
    ("chocolate", 0xd2691e), ("saddlebrown", 0x8b4513), ("sienna", 0xa0522d),
    ("brown", 0xa52a2a), ("maroon", 0x800000),
    // whites
    ("white", 0xffffff), ("snow", 0xfffafa), ("honeydew", 0xf0fff0),
    ("mintcream", 0xf5fffa), ("azure", 0xf0ffff), ("aliceblue", 0xf0f8ff),
    ("ghostwhite", 0xf8f8ff), ("whitesmoke", 0xf5f5f5), ("seashell", 0xfff5ee),
    ("beige", 0xf5f5dc), ("oldlace", 0xfdf5e6), ("floralwhite", 0xfffaf0),
    ("ivory", 0xfffff0), ("antiquewhite", 0xfaebd7), ("linen", 0xfaf0e6),
    ("lavenderblush", 0xfff0f5), ("mistyrose", 0xffe4e1),
    // grays
    ("gainsboro", 0xdcdcdc), ("lightgray", 0xd3d3d3), ("lightgrey", 0xd3d3d3),
    ("silver", 0xc0c0c0), ("darkgray", 0xa9a9a9), ("darkgrey", 0xa9a9a9),
    ("gray", 0x808080), ("grey", 0x808080), ("dimgray", 0x696969),
    ("dimgrey", 0x696969), ("lightslategray", 0x778899), ("lightslategrey", 0x778899),
    ("slategray", 0x708090), ("slategrey", 0x708090), ("darkslategray", 0x2f4f4f),
    ("darkslategrey", 0x2f4f4f), ("black", 0x000000),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: [f32; 4], b: [f32; 4]) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-4)
    }

    #[test]
    fn hex_literals() {
        assert_eq!(parse_hex("ff0080"), Some([1.0, 0.0, 128.0 / 255.0, 1.0]));
        assert_eq!(parse_hex("FFFFFF"), Some([1.0, 1.0, 1.0, 1.0]));
        assert_eq!(parse_hex("fff"), None);
        assert_eq!(parse_hex("gg0000"), None);
    }

    #[test]
    fn rgb_channels_are_bytes() {
        assert_eq!(from_rgb(255.0, 0.0, 51.0, 0.5), [1.0, 0.0, 0.2, 0.5]);
        assert_eq!(from_rgb(300.0, -5.0, 0.0, 2.0), [1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn hsl_primaries() {
        assert!(close(from_hsl(0.0, 100.0, 50.0, 1.0), [1.0, 0.0, 0.0, 1.0]));
        assert!(close(from_hsl(120.0, 100.0, 50.0, 1.0), [0.0, 1.0, 0.0, 1.0]));
        assert!(close(from_hsl(240.0, 100.0, 50.0, 0.3), [0.0, 0.0, 1.0, 0.3]));
        assert!(close(from_hsl(360.0, 100.0, 50.0, 1.0), [1.0, 0.0, 0.0, 1.0]));
    }

    #[test]
    fn hsl_greys_ignore_hue() {
        assert!(close(from_hsl(77.0, 0.0, 25.0, 1.0), [0.25, 0.25, 0.25, 1.0]));
        assert!(close(from_hsl(200.0, 80.0, 100.0, 1.0), [1.0, 1.0, 1.0, 1.0]));
    }

    #[test]
    fn named_colors() {
        assert_eq!(named("red"), Some([1.0, 0.0, 0.0, 1.0]));
        assert_eq!(named("transparent"), Some([0.0, 0.0, 0.0, 0.0]));
        assert_eq!(named("black"), Some([0.0, 0.0, 0.0, 1.0]));
        assert!(named("rebeccapurple").is_some());
        assert_eq!(named("notacolor"), None);
    }
}
