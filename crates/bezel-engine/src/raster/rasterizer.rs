use core::ops::Add;

use rayon::prelude::*;

use crate::coords::{BoxEdges, Vec2};
use crate::paint::Color;
use crate::scene::DrawList;

use super::{FragmentShader, Framebuffer, Shaded};

/// Rasterizer configuration.
#[derive(Debug, Clone)]
pub struct RasterConfig {
    /// Shade rows on the rayon thread pool. Output is identical either way.
    pub parallel: bool,
    /// Color the target is cleared to before drawing; `None` draws over the
    /// existing contents.
    pub clear_color: Option<Color>,
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            clear_color: Some(Color::transparent()),
        }
    }
}

/// Counters for one `Rasterizer::render` call.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct RasterStats {
    pub commands_drawn: u32,
    /// Commands rejected because their style breaks the shader's preconditions.
    pub commands_skipped: u32,
    /// Commands entirely outside the target or their clip.
    pub commands_culled: u32,
    pub fragments_evaluated: u64,
    pub fragments_written: u64,
    pub fragments_discarded: u64,
    /// Fragments the region classifier could not place. Always zero for valid styles.
    pub fragments_unreachable: u64,
}

impl RasterStats {
    fn record(&mut self, rows: RowStats) {
        self.commands_drawn += 1;
        self.fragments_evaluated += rows.evaluated;
        self.fragments_written += rows.written;
        self.fragments_discarded += rows.discarded;
        self.fragments_unreachable += rows.unreachable;
    }
}

#[derive(Debug, Copy, Clone, Default)]
struct RowStats {
    evaluated: u64,
    written: u64,
    discarded: u64,
    unreachable: u64,
}

impl Add for RowStats {
    type Output = RowStats;
    #[inline]
    fn add(self, rhs: RowStats) -> RowStats {
        RowStats {
            evaluated: self.evaluated + rhs.evaluated,
            written: self.written + rhs.written,
            discarded: self.discarded + rhs.discarded,
            unreachable: self.unreachable + rhs.unreachable,
        }
    }
}

/// Inclusive range of integer pixel positions.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct PixelSpan {
    x0: u32,
    x1: u32,
    y0: u32,
    y1: u32,
}

impl PixelSpan {
    /// Pixels of `target` inside `bounds` and the optional `clip`.
    fn covering(bounds: BoxEdges, clip: Option<BoxEdges>, target: &Framebuffer) -> Option<Self> {
        let mut b = bounds.intersect(target.bounds())?;
        if let Some(clip) = clip {
            b = b.intersect(clip)?;
        }

        let (x0, x1) = (b.left.ceil(), b.right.floor());
        let (y0, y1) = (b.bottom.ceil(), b.top.floor());
        if x0 > x1 || y0 > y1 {
            return None;
        }
        Some(Self { x0: x0 as u32, x1: x1 as u32, y0: y0 as u32, y1: y1 as u32 })
    }
}

/// Draws a `DrawList` into a `Framebuffer` on the CPU.
#[derive(Debug, Default)]
pub struct Rasterizer {
    config: RasterConfig,
}

impl Rasterizer {
    pub fn new(config: RasterConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &RasterConfig {
        &self.config
    }

    /// Renders every item of `draw_list` in paint order.
    pub fn render(&self, draw_list: &mut DrawList, target: &mut Framebuffer) -> RasterStats {
        if let Some(color) = self.config.clear_color {
            target.clear(color);
        }

        let mut stats = RasterStats::default();

        for item in draw_list.iter_in_paint_order() {
            if !item.cmd.is_valid() {
                log::warn!("skipping {} with invalid style: {:?}", item.cmd.kind(), item.cmd);
                stats.commands_skipped += 1;
                continue;
            }

            let Some(span) = PixelSpan::covering(item.cmd.bounds(), item.clip, target) else {
                log::trace!("culled {} at z={}", item.cmd.kind(), item.key.z.0);
                stats.commands_culled += 1;
                continue;
            };

            let rows = self.draw(&item.cmd, span, target);
            if rows.unreachable > 0 {
                log::error!(
                    "{} fragments of {} at z={} matched no region; discarded",
                    rows.unreachable,
                    item.cmd.kind(),
                    item.key.z.0
                );
            }
            stats.record(rows);
        }

        log::debug!("rasterized {}x{}: {:?}", target.width(), target.height(), stats);
        stats
    }

    fn draw<S: FragmentShader>(&self, shader: &S, span: PixelSpan, target: &mut Framebuffer) -> RowStats {
        let width = target.width() as usize;
        let top_row = target.storage_row(span.y1);
        let bottom_row = target.storage_row(span.y0);
        let last_y = target.height() as usize - 1;

        let rows = &mut target.pixels_mut()[top_row * width..(bottom_row + 1) * width];
        let shade = |(i, row): (usize, &mut [Color])| {
            let y = (last_y - (top_row + i)) as f32;
            shade_row(shader, row, y, span.x0, span.x1)
        };

        if self.config.parallel {
            rows.par_chunks_mut(width).enumerate().map(shade).reduce(RowStats::default, RowStats::add)
        } else {
            rows.chunks_mut(width).enumerate().map(shade).fold(RowStats::default(), RowStats::add)
        }
    }
}

fn shade_row<S: FragmentShader>(shader: &S, row: &mut [Color], y: f32, x0: u32, x1: u32) -> RowStats {
    let mut stats = RowStats::default();
    for x in x0..=x1 {
        stats.evaluated += 1;
        match shader.shade(Vec2::new(x as f32, y)) {
            Shaded::Color(c) => {
                let dst = &mut row[x as usize];
                *dst = c.over(*dst);
                stats.written += 1;
            }
            Shaded::Discard => stats.discarded += 1,
            Shaded::Unreachable => stats.unreachable += 1,
        }
    }
    stats
}
