use crate::coords::BoxEdges;
use crate::scene::shapes::{MarkerCmd, UiElementCmd};

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - teach `raster::Rasterizer` how to bound and shade it
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Marker(MarkerCmd),
    UiElement(UiElementCmd),
}

impl DrawCmd {
    /// Screen-space box that contains every pixel the command can write.
    #[inline]
    pub fn bounds(&self) -> BoxEdges {
        match self {
            DrawCmd::Marker(cmd) => cmd.bounds(),
            DrawCmd::UiElement(cmd) => cmd.style.edges,
        }
    }

    /// Whether the command's style satisfies the shader's preconditions.
    #[inline]
    pub fn is_valid(&self) -> bool {
        match self {
            DrawCmd::Marker(cmd) => cmd.style.is_valid(),
            DrawCmd::UiElement(cmd) => cmd.style.is_valid(),
        }
    }

    #[inline]
    pub fn kind(&self) -> &'static str {
        match self {
            DrawCmd::Marker(_) => "marker",
            DrawCmd::UiElement(_) => "ui element",
        }
    }
}
