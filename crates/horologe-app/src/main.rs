//! Horologe: analog desktop clock.

mod app;
mod dialog;
mod menu;
mod painter;
mod theme;

use horologe_engine::logging::{init_logging, LoggingConfig};

use crate::app::Application;

/// Common locations of a sans-serif system font.
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\segoeui.ttf",
];

fn load_font() -> Option<Vec<u8>> {
    FONT_CANDIDATES.iter().find_map(|p| {
        let bytes = std::fs::read(p).ok()?;
        log::debug!("using font {p}");
        Some(bytes)
    })
}

fn main() {
    init_logging(LoggingConfig::default());

    let result = Application::new()
        .title("Horologe")
        .size(400.0, 440.0)
        .font(load_font())
        .run();

    if let Err(e) = result {
        log::error!("horologe runtime error: {e:#}");
        std::process::exit(1);
    }
}
