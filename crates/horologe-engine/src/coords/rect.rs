use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { origin: Vec2::new(x, y), size: Vec2::new(w, h) }
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Half-open containment: `[min, max)`.
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let max = self.max();
        p.x >= self.origin.x && p.y >= self.origin.y && p.x < max.x && p.y < max.y
    }

    /// Shrinks by `dx` on the left/right and `dy` on the top/bottom.
    ///
    /// Size never goes negative.
    #[inline]
    pub fn inset(self, dx: f32, dy: f32) -> Rect {
        Rect::new(
            self.origin.x + dx,
            self.origin.y + dy,
            (self.size.x - 2.0 * dx).max(0.0),
            (self.size.y - 2.0 * dy).max(0.0),
        )
    }

    /// A `size`-sized rect centered inside `self`.
    #[inline]
    pub fn centered(self, size: Vec2) -> Rect {
        let c = self.center();
        Rect::new(c.x - size.x * 0.5, c.y - size.y * 0.5, size.x, size.y)
    }
}
