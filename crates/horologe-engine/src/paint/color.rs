/// Premultiplied RGBA color.
///
/// Invariant: `r`, `g`, `b` are already multiplied by `a`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    /// Premultiplies straight-alpha components in `[0, 1]`.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: r.clamp(0.0, 1.0) * a,
            g: g.clamp(0.0, 1.0) * a,
            b: b.clamp(0.0, 1.0) * a,
            a,
        }
    }

    /// From straight-alpha bytes, e.g. a `#rrggbbaa` literal.
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_straight(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Opaque color from bytes.
    #[inline]
    pub fn rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_srgb_u8(r, g, b, 255)
    }

    /// Same hue at a new opacity.
    pub fn with_alpha(self, a: f32) -> Self {
        if self.a <= 0.0 {
            return Self::transparent();
        }
        let inv = 1.0 / self.a;
        Self::from_straight(self.r * inv, self.g * inv, self.b * inv, a)
    }

    /// Surface clear value.
    #[inline]
    pub fn to_wgpu(self) -> wgpu::Color {
        wgpu::Color { r: self.r as f64, g: self.g as f64, b: self.b as f64, a: self.a as f64 }
    }

    #[inline]
    pub(crate) fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}
