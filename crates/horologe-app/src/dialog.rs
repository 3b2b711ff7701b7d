use horologe_engine::coords::{Rect, Vec2, Viewport};
use horologe_engine::input::Key;
use horologe_engine::scene::Border;

use crate::painter::{Painter, TextMetrics};
use crate::theme::ChromeTheme;

const MIN_WIDTH: f32 = 220.0;
const BUTTON_SIZE: Vec2 = Vec2::new(72.0, 26.0);

/// Modal box with a title, a few lines of text and an OK button.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageBox {
    pub title: String,
    pub lines: Vec<String>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MessageBoxLayout {
    pub panel: Rect,
    pub ok_button: Rect,
    pub line_height: f32,
}

impl MessageBox {
    pub fn new(title: impl Into<String>, lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self { title: title.into(), lines: lines.into_iter().map(Into::into).collect() }
    }

    pub fn controls() -> Self {
        Self::new(
            "Controls",
            [
                "Left click: set hour",
                "Right click: set minute",
                "Middle click: set hour, minute to 0",
                "+: next minute",
                "Shift + +: next hour",
            ],
        )
    }

    pub fn about() -> Self {
        Self::new(
            "About Horologe",
            [
                format!("Horologe {}", env!("CARGO_PKG_VERSION")),
                "An analog desktop clock.".to_string(),
            ],
        )
    }

    /// Centers the box in `viewport`, sized to its text.
    pub fn layout(
        &self,
        viewport: Viewport,
        theme: &ChromeTheme,
        measure: impl Fn(&str) -> f32,
        line_height: f32,
    ) -> MessageBoxLayout {
        let pad = theme.padding * 1.5;
        let widest = std::iter::once(self.title.as_str())
            .chain(self.lines.iter().map(String::as_str))
            .map(&measure)
            .fold(0.0f32, f32::max);

        // title + blank + body, then the button row
        let text_rows = self.lines.len() as f32 + 2.0;
        let w = (widest + pad * 2.0).max(MIN_WIDTH);
        let h = pad * 3.0 + text_rows * line_height + BUTTON_SIZE.y;

        let screen = Rect::new(0.0, 0.0, viewport.width, viewport.height);
        let panel = screen.centered(Vec2::new(w, h));
        let ok_button = Rect::new(
            panel.origin.x + (w - BUTTON_SIZE.x) * 0.5,
            panel.max().y - pad - BUTTON_SIZE.y,
            BUTTON_SIZE.x,
            BUTTON_SIZE.y,
        );
        MessageBoxLayout { panel, ok_button, line_height }
    }

    /// Returns `true` when the release dismissed the box.
    pub fn on_mouse_up(&self, layout: &MessageBoxLayout, pos: Vec2) -> bool {
        layout.ok_button.contains(pos)
    }

    /// Returns `true` when the key dismissed the box.
    pub fn on_key(&self, key: Key) -> bool {
        matches!(key, Key::Enter | Key::Escape)
    }

    pub fn paint(&self, painter: &mut Painter<'_>, viewport: Viewport, theme: &ChromeTheme) {
        let metrics: TextMetrics<'_> = painter.metrics();
        let layout = self.layout(viewport, theme, |s| metrics.width(s), metrics.line_height());
        let pad = theme.padding * 1.5;

        painter.fill_rect(Rect::new(0.0, 0.0, viewport.width, viewport.height), theme.scrim);
        painter.panel(
            layout.panel,
            theme.corner_radius,
            theme.dialog_bg,
            Some(Border::new(1.0, theme.border)),
        );

        let x = layout.panel.origin.x + pad;
        let w = layout.panel.size.x - pad * 2.0;
        let mut y = layout.panel.origin.y + pad;
        painter.text_in(Rect::new(x, y, w, layout.line_height), &self.title, theme.bar_fg);
        y += layout.line_height * 2.0;
        for line in &self.lines {
            painter.text_in(Rect::new(x, y, w, layout.line_height), line, theme.bar_fg);
            y += layout.line_height;
        }

        painter.panel(layout.ok_button, theme.corner_radius * 0.5, theme.button_bg, None);
        painter.text_centered(layout.ok_button, "OK", theme.bar_fg);
    }
}
