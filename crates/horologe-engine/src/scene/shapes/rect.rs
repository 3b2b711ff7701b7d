use crate::coords::Rect;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Border;

/// Rectangle payload with optional uniform corner rounding.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    /// Clamped to half the shorter side by the shader.
    pub corner_radius: f32,
    pub fill: Color,
    pub border: Option<Border>,
}

impl RectCmd {
    #[inline]
    pub fn solid(rect: Rect, fill: Color) -> Self {
        Self { rect, corner_radius: 0.0, fill, border: None }
    }

    #[inline]
    pub fn rounded(rect: Rect, corner_radius: f32, fill: Color, border: Option<Border>) -> Self {
        Self { rect, corner_radius, fill, border }
    }
}

impl DrawList {
    /// Records a rectangle.
    #[inline]
    pub fn push_rect(&mut self, z: ZIndex, cmd: RectCmd) {
        self.push(z, DrawCmd::Rect(cmd));
    }

    #[inline]
    pub fn push_solid_rect(&mut self, z: ZIndex, rect: Rect, fill: Color) {
        self.push_rect(z, RectCmd::solid(rect, fill));
    }
}
