use crate::scene::shapes::ellipse::EllipseCmd;
use crate::scene::shapes::line::LineCmd;
use crate::scene::shapes::rect::RectCmd;
use crate::scene::shapes::text::TextCmd;

/// Renderer-agnostic draw command.
///
/// Adding a shape:
/// - add a payload module under `scene::shapes`
/// - add a variant here
/// - teach `render::SceneRenderer` which renderer consumes it
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Line(LineCmd),
    Ellipse(EllipseCmd),
    Rect(RectCmd),
    Text(TextCmd),
}

impl DrawCmd {
    /// `true` for commands drawn by the text pipeline.
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self, DrawCmd::Text(_))
    }
}
