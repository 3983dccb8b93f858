mod marker;
mod ui_element;

pub use marker::MarkerCmd;
pub use ui_element::UiElementCmd;
