use horologe_clock::{Canvas, Point, Rgb};
use horologe_engine::coords::{Rect, Vec2};
use horologe_engine::paint::Color;
use horologe_engine::scene::shapes::ellipse::EllipseCmd;
use horologe_engine::scene::shapes::rect::RectCmd;
use horologe_engine::scene::{Border, DrawList, ZIndex};
use horologe_engine::text::{FontId, FontSystem};

/// Rough advance per character (as a fraction of the font size) used when
/// no font is loaded, so layout still has sensible widths.
const FALLBACK_ADVANCE: f32 = 0.55;

#[inline]
pub fn rgb_to_color(c: Rgb) -> Color {
    Color::rgb_u8(c.r, c.g, c.b)
}

#[inline]
fn point(p: Point) -> Vec2 {
    Vec2::new(p.x as f32, p.y as f32)
}

/// Text measurement shared by layout and painting.
#[derive(Copy, Clone)]
pub struct TextMetrics<'a> {
    pub fonts: &'a FontSystem,
    /// `None` when no system font could be loaded; text is then measured
    /// with a fixed advance and never drawn.
    pub font: Option<FontId>,
    pub size: f32,
}

impl TextMetrics<'_> {
    pub fn width(&self, text: &str) -> f32 {
        match self.font {
            Some(id) => self.fonts.measure_text(text, id, self.size).x,
            None => text.chars().count() as f32 * self.size * FALLBACK_ADVANCE,
        }
    }

    pub fn line_height(&self) -> f32 {
        match self.font {
            Some(id) => self.fonts.line_height(id, self.size),
            None => self.size * 1.2,
        }
    }
}

/// Records drawing into the frame's [`DrawList`] on one layer.
///
/// Implements the clock's [`Canvas`] so the clock view paints straight into
/// the draw list.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    metrics: TextMetrics<'a>,
    z: ZIndex,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList, metrics: TextMetrics<'a>, z: ZIndex) -> Self {
        Self { draw_list, metrics, z }
    }

    #[inline]
    pub fn set_layer(&mut self, z: ZIndex) {
        self.z = z;
    }

    #[inline]
    pub fn metrics(&self) -> TextMetrics<'a> {
        self.metrics
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.draw_list.push_solid_rect(self.z, rect, color);
    }

    pub fn panel(&mut self, rect: Rect, radius: f32, fill: Color, border: Option<Border>) {
        self.draw_list.push_rect(self.z, RectCmd::rounded(rect, radius, fill, border));
    }

    /// Single line of text, vertically centered in `rect`, starting at its
    /// left edge. Skipped when no font is loaded.
    pub fn text_in(&mut self, rect: Rect, text: &str, color: Color) {
        let Some(font) = self.metrics.font else { return };
        let y = rect.origin.y + (rect.size.y - self.metrics.line_height()) * 0.5;
        self.draw_list.push_text(
            self.z,
            text,
            font,
            self.metrics.size,
            color,
            Vec2::new(rect.origin.x, y),
        );
    }

    /// Like [`text_in`](Self::text_in) but horizontally centered.
    pub fn text_centered(&mut self, rect: Rect, text: &str, color: Color) {
        let w = self.metrics.width(text);
        let x = rect.origin.x + (rect.size.x - w) * 0.5;
        self.text_in(Rect::new(x, rect.origin.y, w, rect.size.y), text, color);
    }
}

impl Canvas for Painter<'_> {
    fn draw_line(&mut self, from: Point, to: Point, color: Rgb, width: f32) {
        self.draw_list.push_line(self.z, point(from), point(to), width, rgb_to_color(color));
    }

    fn draw_ellipse(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb, width: f32) {
        let bounds = Rect::new(x as f32, y as f32, w as f32, h as f32);
        let border = Border::new(width, rgb_to_color(color));
        self.draw_list
            .push_ellipse(self.z, EllipseCmd::inscribed(bounds, Color::transparent(), Some(border)));
    }

    fn fill_ellipse(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb) {
        let bounds = Rect::new(x as f32, y as f32, w as f32, h as f32);
        self.draw_list
            .push_ellipse(self.z, EllipseCmd::inscribed(bounds, rgb_to_color(color), None));
    }
}
