use std::fmt;
use std::path::Path;

use crate::coords::Vec2;

/// Line height as a multiple of the font size when a font has no line metrics.
const FALLBACK_LINE_FACTOR: f32 = 1.2;

/// Error returned by [`FontSystem::load_font`] and [`FontSystem::load_font_file`].
#[derive(Debug)]
pub enum FontLoadError {
    Io { path: String, source: std::io::Error },
    Parse(String),
}

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontLoadError::Io { path, source } => write!(f, "failed to read font {path}: {source}"),
            FontLoadError::Parse(msg) => write!(f, "font parse error: {msg}"),
        }
    }
}

impl std::error::Error for FontLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FontLoadError::Io { source, .. } => Some(source),
            FontLoadError::Parse(_) => None,
        }
    }
}

/// Handle to a font loaded into a [`FontSystem`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// Owns the loaded fonts.
///
/// Fonts are immutable once loaded. The renderer borrows the system each
/// frame to rasterize glyphs on demand.
#[derive(Default)]
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a TrueType/OpenType font from raw bytes.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError::Parse(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        log::debug!("loaded font {:?} as {:?}", self.fonts[id.0].name(), id);
        Ok(id)
    }

    /// Reads and parses a font file.
    pub fn load_font_file(&mut self, path: impl AsRef<Path>) -> Result<FontId, FontLoadError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .map_err(|source| FontLoadError::Io { path: path.display().to_string(), source })?;
        self.load_font(&bytes)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    pub(crate) fn get(&self, id: FontId) -> Option<&fontdue::Font> {
        self.fonts.get(id.0)
    }

    /// Line box height for `size`, in logical pixels.
    pub fn line_height(&self, id: FontId, size: f32) -> f32 {
        self.get(id)
            .and_then(|f| f.horizontal_line_metrics(size))
            .map(|m| m.new_line_size)
            .unwrap_or(size * FALLBACK_LINE_FACTOR)
    }

    /// Size of a single line of text as `(width, height)` in logical pixels.
    ///
    /// Width is the pen position after the last glyph, so a box of exactly
    /// that width holds the string.
    #[must_use]
    pub fn measure_text(&self, text: &str, id: FontId, size: f32) -> Vec2 {
        let height = self.line_height(id, size);
        let Some(font) = self.get(id) else {
            return Vec2::new(0.0, height);
        };
        let width = text.chars().map(|c| font.metrics(c, size).advance_width).sum::<f32>();
        Vec2::new(width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_fail_to_parse() {
        let mut fonts = FontSystem::new();
        let err = fonts.load_font(b"not a font").unwrap_err();
        assert!(matches!(err, FontLoadError::Parse(_)));
        assert!(fonts.is_empty());
    }

    #[test]
    fn missing_file_reports_path() {
        let mut fonts = FontSystem::new();
        let err = fonts.load_font_file("/definitely/missing/font.ttf").unwrap_err();
        assert!(err.to_string().contains("/definitely/missing/font.ttf"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn unknown_font_measures_empty_width() {
        let fonts = FontSystem::new();
        let size = fonts.measure_text("Clock", FontId(3), 10.0);
        assert_eq!(size.x, 0.0);
        assert_eq!(size.y, 12.0);
    }
}
