//! Computed styles to shader parameters.

use bezel_engine::coords::{BoxEdges, Vec2};
use bezel_engine::paint::Color;
use bezel_engine::shade::{CircleStyle, EdgeColors, Insets, RoundedRectStyle};
use bezel_style::{ComputedStyle, DEFAULT_COLOR};

fn color(style: &ComputedStyle, key: &str) -> Color {
    Color::from_array(style.color(key, DEFAULT_COLOR))
}

/// `<prefix>-top` .. `<prefix>-left`, missing sides 0.
pub(crate) fn insets(style: &ComputedStyle, prefix: &str) -> Insets {
    Insets::new(
        style.number(&format!("{prefix}-top"), 0.0),
        style.number(&format!("{prefix}-right"), 0.0),
        style.number(&format!("{prefix}-bottom"), 0.0),
        style.number(&format!("{prefix}-left"), 0.0),
    )
}

/// Builds a UI element covering exactly `edges`, or `None` when `display: none`.
///
/// Sizing properties are ignored here; `layout` has already resolved them
/// into `edges`.
pub fn rounded_rect_style(style: &ComputedStyle, edges: BoxEdges) -> Option<RoundedRectStyle> {
    if !style.is_displayed() {
        return None;
    }

    let colors = EdgeColors::new(
        color(style, "border-top-color"),
        color(style, "border-right-color"),
        color(style, "border-bottom-color"),
        color(style, "border-left-color"),
    );

    Some(
        RoundedRectStyle::new(edges)
            .with_margin(insets(style, "margin"))
            .with_border(style.number("border-width", 0.0), style.number("border-radius", 0.0), colors)
            .with_background(color(style, "background-color")),
    )
}

/// Builds a circle marker centered at `center`, or `None` when `display: none`.
///
/// The marker reads `radius`, `border-width`, `background-color`, and the top
/// border color.
pub fn circle_style(style: &ComputedStyle, center: Vec2) -> Option<CircleStyle> {
    style.is_displayed().then(|| {
        CircleStyle::new(
            center,
            style.number("radius", 0.0),
            style.number("border-width", 0.0),
            color(style, "background-color"),
            color(style, "border-top-color"),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bezel_style::{Element, StyleSheet};

    fn computed(src: &str) -> ComputedStyle {
        StyleSheet::parse(src).unwrap().compute_style(&[Element::new("button")], None, None)
    }

    #[test]
    fn rect_reads_box_properties() {
        let style = computed("button { margin: 1 2 3 4; border: 2 red blue; border-radius: 6; background: white }");
        let edges = BoxEdges::from_top_left(10.0, 90.0, 50.0, 30.0);
        let rect = rounded_rect_style(&style, edges).unwrap();

        assert_eq!(rect.edges, edges);
        assert_eq!(rect.margin, Insets::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(rect.border_width, 2.0);
        assert_eq!(rect.border_radius, 6.0);
        assert_eq!(rect.border_colors.top, Color::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(rect.border_colors.right, Color::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(rect.background, Color::white());
        assert!(rect.is_valid());
    }

    #[test]
    fn rect_defaults() {
        let rect = rounded_rect_style(&computed(""), BoxEdges::from_top_left(0.0, 9.0, 10.0, 10.0)).unwrap();
        assert_eq!(rect.margin, Insets::zero());
        assert_eq!(rect.border_width, 0.0);
        assert_eq!(rect.background, Color::black());
    }

    #[test]
    fn bordered_box_keeps_its_edges() {
        let edges = BoxEdges::from_top_left(10.0, 90.0, 50.0, 30.0);
        let rect = rounded_rect_style(&computed("button { border: 1 red }"), edges).unwrap();
        assert_eq!(rect.edges, edges);
        assert_eq!((rect.edges.left, rect.edges.right), (10.0, 59.0));
        assert_eq!((rect.edges.top, rect.edges.bottom), (90.0, 61.0));
    }

    #[test]
    fn size_properties_do_not_move_edges() {
        let edges = BoxEdges::from_top_left(5.0, 50.0, 100.0, 100.0);
        let rect = rounded_rect_style(&computed("button { width: 20; height: 8 }"), edges).unwrap();
        assert_eq!(rect.edges, edges);
    }

    #[test]
    fn hidden_elements_produce_nothing() {
        let style = computed("button { display: none }");
        let edges = BoxEdges::from_top_left(0.0, 9.0, 10.0, 10.0);
        assert!(rounded_rect_style(&style, edges).is_none());
        assert!(circle_style(&style, Vec2::zero()).is_none());
    }

    #[test]
    fn marker_properties() {
        let style = computed("button { radius: 5; border: 2 white; background: red }");
        let circle = circle_style(&style, Vec2::new(3.0, 4.0)).unwrap();
        assert_eq!(circle.center, Vec2::new(3.0, 4.0));
        assert_eq!(circle.radius, 5.0);
        assert_eq!(circle.border, 2.0);
        assert_eq!(circle.fill_color, Color::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(circle.border_color, Color::white());
    }
}
