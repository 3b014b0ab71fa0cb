use crate::coords::Rect;
use crate::paint::Color;

/// Solid rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub color: Color,
}

/// Renderer-agnostic draw command.
///
/// New shapes get a variant here and a renderer under `render`.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect(RectCmd),
}
