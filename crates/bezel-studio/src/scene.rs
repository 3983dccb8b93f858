//! The demo scene: a panel with a toolbar of buttons above a chart of markers.
//!
//! Elements are styled, laid out with the box model in [`crate::layout`], and
//! drawn back to front. Every element clips its children to its own box.

use anyhow::{Context, Result};
use bezel_engine::coords::{BoxEdges, Vec2};
use bezel_engine::paint::Color;
use bezel_engine::scene::{DrawList, ZIndex};
use bezel_style::{ComputedStyle, Element, StyleSheet};

use crate::layout::{BoxModel, LayoutBox, Rect};
use crate::styled;

/// Markers plotted in the chart.
pub const MARKER_COUNT: usize = 24;

/// Resolves element styles against the theme and the baseline sheet.
pub struct Styler<'a> {
    pub sheet: &'a StyleSheet,
    pub initial: &'a StyleSheet,
}

impl Styler<'_> {
    pub fn compute(&self, path: &[Element], inline: Option<&str>) -> Result<ComputedStyle> {
        let inline = inline
            .map(StyleSheet::inline)
            .transpose()
            .with_context(|| format!("invalid inline style on {}", describe(path)))?;
        Ok(self.sheet.compute_style(path, Some(self.initial), inline.as_ref()))
    }

    /// Background of the `canvas` root element.
    pub fn clear_color(&self) -> Color {
        let style = self.sheet.compute_style(&[Element::new("canvas")], Some(self.initial), None);
        Color::from_array(style.color("background-color", [0.0; 4]))
    }
}

fn describe(path: &[Element]) -> String {
    path.iter().map(|el| el.tag.as_str()).collect::<Vec<_>>().join(" > ")
}

/// Counts of what the scene builder recorded.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct SceneStats {
    pub elements: u32,
    pub markers: u32,
    pub hidden: u32,
}

/// A marker anchored at fractions of its parent's content box.
struct Anchored {
    style: ComputedStyle,
    at: (f32, f32),
}

/// Per-element payload of the layout tree.
struct Styled {
    path: Vec<Element>,
    style: ComputedStyle,
    markers: Vec<Anchored>,
}

type Node = LayoutBox<Styled>;

struct Builder<'a> {
    styler: &'a Styler<'a>,
    stats: SceneStats,
}

impl Builder<'_> {
    /// Styles `element` under `parent`; `None` when it is `display: none`.
    fn node(&mut self, parent: &[Element], element: Element, inline: Option<&str>) -> Result<Option<Node>> {
        let mut path = parent.to_vec();
        path.push(element);
        let style = self.styler.compute(&path, inline)?;
        if !style.is_displayed() {
            log::debug!("{} is hidden", describe(&path));
            self.stats.hidden += 1;
            return Ok(None);
        }
        let model = BoxModel::from_style(&style);
        Ok(Some(LayoutBox::new(Styled { path, style, markers: Vec::new() }, model)))
    }

    fn marker(&mut self, parent: &mut Node, element: Element, at: (f32, f32)) -> Result<()> {
        let mut path = parent.data.path.clone();
        path.push(element);
        let style = self.styler.compute(&path, None)?;
        if style.is_displayed() {
            parent.data.markers.push(Anchored { style, at });
        } else {
            self.stats.hidden += 1;
        }
        Ok(())
    }
}

/// Layout rectangles are top-down; the shaders want +Y-up boxes.
struct Frame {
    height: f32,
}

impl Frame {
    fn edges(&self, r: Rect) -> BoxEdges {
        BoxEdges::from_top_left(r.x, self.height - 1.0 - r.y, r.w, r.h)
    }

    fn point(&self, (x, y): (f32, f32)) -> Vec2 {
        Vec2::new(x, self.height - 1.0 - y)
    }
}

fn draw(node: &Node, depth: i32, frame: &Frame, list: &mut DrawList, stats: &mut SceneStats) {
    let edges = frame.edges(node.rect);
    if let Some(rect) = styled::rounded_rect_style(&node.data.style, edges) {
        list.push_ui_element(ZIndex::new(depth), rect);
        stats.elements += 1;
    }

    list.push_clip(edges);
    let content = node.content_rect();
    for marker in &node.data.markers {
        let center = frame.point(content.at(marker.at.0, marker.at.1));
        if let Some(circle) = styled::circle_style(&marker.style, center) {
            list.push_marker(ZIndex::new(depth + 1), circle);
            stats.markers += 1;
        }
    }
    for child in &node.children {
        draw(child, depth + 1, frame, list, stats);
    }
    list.pop_clip();
}

/// Builds the demo scene for a `width × height` target.
pub fn build_demo(width: u32, height: u32, styler: &Styler<'_>) -> Result<(DrawList, SceneStats)> {
    let mut b = Builder { styler, stats: SceneStats::default() };
    let mut list = DrawList::new();

    let Some(mut canvas) = b.node(&[], Element::new("canvas"), None)? else {
        return Ok((list, b.stats));
    };

    if let Some(mut panel) = b.node(&canvas.data.path, Element::new("panel").with_id("main"), None)? {
        if let Some(mut toolbar) = b.node(&panel.data.path, Element::new("toolbar"), None)? {
            let buttons = [
                (Element::new("button").with_id("run").with_class("primary"), None),
                (Element::new("button").with_id("step").with_pseudoclass("hover"), None),
                (Element::new("button").with_id("stop").with_class("danger"), Some("border-radius: 14")),
                (Element::new("button").with_id("debug").with_class("hidden"), None),
            ];
            for (button, inline) in buttons {
                if let Some(node) = b.node(&toolbar.data.path, button, inline)? {
                    toolbar.push(node);
                }
            }
            panel.push(toolbar);
        }

        if let Some(mut chart) = b.node(&panel.data.path, Element::new("chart"), None)? {
            for i in 0..MARKER_COUNT {
                let t = (i as f32 + 0.5) / MARKER_COUNT as f32;
                let wave = (t * std::f32::consts::TAU * 1.5).sin();
                let mut marker = Element::new("marker");
                if i % 7 == 3 {
                    marker = marker.with_class("outlier");
                }
                b.marker(&mut chart, marker, (t, 0.5 - wave * 0.35))?;
            }
            panel.push(chart);
        }
        canvas.push(panel);
    }

    canvas.layout(Rect::new(0.0, 0.0, width as f32, height as f32));
    let frame = Frame { height: height as f32 };
    draw(&canvas, 0, &frame, &mut list, &mut b.stats);

    Ok((list, b.stats))
}
