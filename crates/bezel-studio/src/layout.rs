//! Box-model layout for the studio's element tree.
//!
//! Each element's outer box is `margin + border + padding + content`, where
//! the content extent is the natural size of its children clamped to
//! `min-*` / `max-*`. Children flow in a row or a column inside the parent's
//! content box, stretch on the cross axis, and share leftover main-axis space
//! by `flex-grow`.
//!
//! Rectangles here are top-down (`y` grows downward) like a page layout; the
//! scene converts them to +Y-up `BoxEdges` when drawing.

use bezel_engine::coords::Vec2;
use bezel_engine::shade::Insets;
use bezel_style::ComputedStyle;

use crate::styled::insets;

// ── Rect ──────────────────────────────────────────────────────────────────

/// Top-down layout rectangle: `(x, y)` is the top-left pixel.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Shrinks the rectangle by `insets`, never below zero size.
    #[inline]
    pub fn inset(self, insets: Insets) -> Self {
        Self {
            x: self.x + insets.left,
            y: self.y + insets.top,
            w: (self.w - insets.left - insets.right).max(0.0),
            h: (self.h - insets.top - insets.bottom).max(0.0),
        }
    }

    /// Point at fractions `(fx, fy)` of the rectangle, rounded to a pixel.
    #[inline]
    pub fn at(self, fx: f32, fy: f32) -> (f32, f32) {
        ((self.x + fx * self.w).round(), (self.y + fy * self.h).round())
    }
}

// ── BoxModel ──────────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum Flow {
    Row,
    #[default]
    Column,
}

#[inline]
fn mid(v: f32, lo: f32, hi: f32) -> f32 {
    v.max(lo).min(hi)
}

/// Box-model quantities of one element.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoxModel {
    pub margin: Insets,
    pub border: f32,
    pub padding: Insets,
    /// Content-size bounds (`x` = width, `y` = height).
    pub min: Vec2,
    pub max: Vec2,
    pub flow: Flow,
    pub grow: f32,
}

impl Default for BoxModel {
    fn default() -> Self {
        Self {
            margin: Insets::zero(),
            border: 0.0,
            padding: Insets::zero(),
            min: Vec2::zero(),
            max: Vec2::new(f32::INFINITY, f32::INFINITY),
            flow: Flow::Column,
            grow: 0.0,
        }
    }
}

impl BoxModel {
    /// Reads margin, border, padding, size bounds, `flex-direction`, and
    /// `flex-grow`.
    pub fn from_style(style: &ComputedStyle) -> Self {
        Self {
            margin: insets(style, "margin"),
            border: style.number("border-width", 0.0),
            padding: insets(style, "padding"),
            min: Vec2::new(style.number("min-width", 0.0), style.number("min-height", 0.0)),
            max: Vec2::new(
                style.number("max-width", f32::INFINITY),
                style.number("max-height", f32::INFINITY),
            ),
            flow: match style.ident("flex-direction") {
                Some("row") => Flow::Row,
                _ => Flow::Column,
            },
            grow: style.number("flex-grow", 0.0).max(0.0),
        }
    }

    /// Distance from the outer box to the content box on each side.
    pub fn content_insets(&self) -> Insets {
        let (m, p, b) = (self.margin, self.padding, self.border);
        Insets::new(m.top + b + p.top, m.right + b + p.right, m.bottom + b + p.bottom, m.left + b + p.left)
    }

    fn extra(&self) -> Vec2 {
        let i = self.content_insets();
        Vec2::new(i.left + i.right, i.top + i.bottom)
    }

    /// Outer width for a content width, after the min/max clamp.
    pub fn outer_width(&self, content: f32) -> f32 {
        self.extra().x + mid(content, self.min.x, self.max.x)
    }

    pub fn outer_height(&self, content: f32) -> f32 {
        self.extra().y + mid(content, self.min.y, self.max.y)
    }
}

// ── LayoutBox ─────────────────────────────────────────────────────────────

/// One element in the layout tree, carrying caller data `T`.
#[derive(Debug, Clone)]
pub struct LayoutBox<T> {
    pub data: T,
    pub model: BoxModel,
    pub children: Vec<LayoutBox<T>>,
    /// Outer box, valid after [`layout`](Self::layout).
    pub rect: Rect,
    preferred: Vec2,
}

impl<T> LayoutBox<T> {
    pub fn new(data: T, model: BoxModel) -> Self {
        Self { data, model, children: Vec::new(), rect: Rect::default(), preferred: Vec2::zero() }
    }

    pub fn push(&mut self, child: LayoutBox<T>) {
        self.children.push(child);
    }

    /// The content box: `rect` minus margin, border, and padding.
    #[inline]
    pub fn content_rect(&self) -> Rect {
        self.rect.inset(self.model.content_insets())
    }

    /// Sizes the tree bottom-up, then places it inside `rect`.
    pub fn layout(&mut self, rect: Rect) {
        self.measure();
        self.place(rect);
    }

    fn measure(&mut self) -> Vec2 {
        let flow = self.model.flow;
        let mut content = Vec2::zero();
        for child in &mut self.children {
            let s = child.measure();
            match flow {
                Flow::Row => {
                    content.x += s.x;
                    content.y = content.y.max(s.y);
                }
                Flow::Column => {
                    content.x = content.x.max(s.x);
                    content.y += s.y;
                }
            }
        }
        self.preferred = Vec2::new(self.model.outer_width(content.x), self.model.outer_height(content.y));
        self.preferred
    }

    fn place(&mut self, rect: Rect) {
        self.rect = rect;
        let inner = self.content_rect();
        let flow = self.model.flow;

        let (available, used) = match flow {
            Flow::Row => (inner.w, self.children.iter().map(|c| c.preferred.x).sum::<f32>()),
            Flow::Column => (inner.h, self.children.iter().map(|c| c.preferred.y).sum::<f32>()),
        };
        let spare = (available - used).max(0.0);
        let total_grow: f32 = self.children.iter().map(|c| c.model.grow).sum();

        let mut cursor = 0.0;
        for child in &mut self.children {
            let share = if total_grow > 0.0 { (spare * child.model.grow / total_grow).floor() } else { 0.0 };
            let extra = child.model.extra();
            let r = match flow {
                Flow::Row => {
                    let w = child.model.outer_width(child.preferred.x + share - extra.x);
                    let h = child.model.outer_height(inner.h - extra.y);
                    Rect::new(inner.x + cursor, inner.y, w, h)
                }
                Flow::Column => {
                    let w = child.model.outer_width(inner.w - extra.x);
                    let h = child.model.outer_height(child.preferred.y + share - extra.y);
                    Rect::new(inner.x, inner.y + cursor, w, h)
                }
            };
            cursor += if flow == Flow::Row { r.w } else { r.h };
            child.place(r);
        }
    }
}
