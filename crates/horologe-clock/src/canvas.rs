use crate::face::Point;

/// Opaque 8-bit RGB color used by the clock core.
///
/// Hosts convert this into their own color type when recording draw calls.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `0xRRGGBB`.
    #[inline]
    pub const fn from_hex(hex: u32) -> Self {
        Self::new((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }
}

/// Drawing surface the clock view paints into.
///
/// Ellipses are given by their bounding box: top-left `(x, y)` plus width and
/// height, all in logical pixels.
pub trait Canvas {
    /// Straight segment from `from` to `to`.
    fn draw_line(&mut self, from: Point, to: Point, color: Rgb, width: f32);

    /// Ellipse outline.
    fn draw_ellipse(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb, width: f32);

    /// Solid ellipse.
    fn fill_ellipse(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb);
}
