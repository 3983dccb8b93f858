use crate::scene::{DrawCmd, DrawList, ZIndex};
use crate::shade::RoundedRectStyle;

/// Rounded, bordered UI element draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct UiElementCmd {
    pub style: RoundedRectStyle,
}

impl UiElementCmd {
    #[inline]
    pub fn new(style: RoundedRectStyle) -> Self {
        Self { style }
    }
}

impl DrawList {
    /// Records a UI element.
    #[inline]
    pub fn push_ui_element(&mut self, z: ZIndex, style: RoundedRectStyle) {
        self.push(z, DrawCmd::UiElement(UiElementCmd::new(style)));
    }
}
