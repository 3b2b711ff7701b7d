use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Line segment payload. Ends are rounded (capsule).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LineCmd {
    pub from: Vec2,
    pub to: Vec2,
    /// Stroke width in logical pixels.
    pub width: f32,
    pub color: Color,
}

impl LineCmd {
    #[inline]
    pub fn new(from: Vec2, to: Vec2, width: f32, color: Color) -> Self {
        Self { from, to, width, color }
    }
}

impl DrawList {
    /// Records a line segment.
    #[inline]
    pub fn push_line(&mut self, z: ZIndex, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.push(z, DrawCmd::Line(LineCmd::new(from, to, width, color)));
    }
}
