use horologe_engine::paint::Color;

/// Colors and metrics for the menu bar and dialogs.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ChromeTheme {
    pub font_size: f32,

    pub bar_height: f32,
    /// Horizontal padding around menu titles and items.
    pub padding: f32,
    pub item_height: f32,
    pub corner_radius: f32,

    pub bar_bg: Color,
    pub bar_fg: Color,
    pub highlight: Color,
    pub dropdown_bg: Color,
    pub border: Color,

    /// Dims the clock while a dialog is open.
    pub scrim: Color,
    pub dialog_bg: Color,
    pub button_bg: Color,
}

impl Default for ChromeTheme {
    fn default() -> Self {
        Self {
            font_size: 14.0,

            bar_height: 24.0,
            padding: 10.0,
            item_height: 24.0,
            corner_radius: 6.0,

            bar_bg: Color::rgb_u8(0x1d, 0x1f, 0x25),
            bar_fg: Color::rgb_u8(0xdc, 0xdf, 0xe4),
            highlight: Color::rgb_u8(0x3a, 0x5f, 0x9e),
            dropdown_bg: Color::rgb_u8(0x24, 0x27, 0x2e),
            border: Color::rgb_u8(0x3b, 0x3f, 0x48),

            scrim: Color::from_straight(0.0, 0.0, 0.0, 0.45),
            dialog_bg: Color::rgb_u8(0x24, 0x27, 0x2e),
            button_bg: Color::rgb_u8(0x3a, 0x5f, 0x9e),
        }
    }
}
