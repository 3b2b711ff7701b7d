use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Border;

/// Axis-aligned ellipse payload.
///
/// Outline-only ellipses use a transparent `fill` and a `border`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EllipseCmd {
    pub center: Vec2,
    pub radii: Vec2,
    pub fill: Color,
    pub border: Option<Border>,
}

impl EllipseCmd {
    #[inline]
    pub fn new(center: Vec2, radii: Vec2, fill: Color, border: Option<Border>) -> Self {
        Self { center, radii, fill, border }
    }

    /// Ellipse inscribed in `bounds`.
    #[inline]
    pub fn inscribed(bounds: Rect, fill: Color, border: Option<Border>) -> Self {
        Self::new(bounds.center(), bounds.size * 0.5, fill, border)
    }
}

impl DrawList {
    /// Records an ellipse.
    #[inline]
    pub fn push_ellipse(&mut self, z: ZIndex, cmd: EllipseCmd) {
        self.push(z, DrawCmd::Ellipse(cmd));
    }

    /// Records a circle.
    #[inline]
    pub fn push_circle(
        &mut self,
        z: ZIndex,
        center: Vec2,
        radius: f32,
        fill: Color,
        border: Option<Border>,
    ) {
        self.push_ellipse(z, EllipseCmd::new(center, Vec2::new(radius, radius), fill, border));
    }
}
