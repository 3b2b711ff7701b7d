/// Drawable size in logical pixels.
///
/// Uploaded to each renderer's uniform buffer for the logical px → NDC
/// conversion.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Uniform contents: never zero, to keep the shader division defined.
    #[inline]
    pub(crate) fn as_uniform(self) -> [f32; 2] {
        [self.width.max(1.0), self.height.max(1.0)]
    }
}
