use crate::canvas::Rgb;

/// Colors and stroke widths for the clock face.
///
/// `background` must match the color the host clears the window with, since
/// erasing a hand means redrawing it in this color.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClockStyle {
    pub background: Rgb,
    pub face_outline: Rgb,
    pub tick: Rgb,
    pub hour_hand: Rgb,
    pub minute_hand: Rgb,
    pub second_hand: Rgb,
    pub nut: Rgb,

    pub outline_width: f32,
    pub long_tick_width: f32,
    pub short_tick_width: f32,
    pub hour_hand_width: f32,
    pub minute_hand_width: f32,
    pub second_hand_width: f32,
}

impl Default for ClockStyle {
    fn default() -> Self {
        Self {
            background: Rgb::from_hex(0x12_13_17),
            face_outline: Rgb::from_hex(0xc8_cc_d4),
            tick: Rgb::from_hex(0xc8_cc_d4),
            hour_hand: Rgb::from_hex(0xf0_f0_f0),
            minute_hand: Rgb::from_hex(0xf0_f0_f0),
            second_hand: Rgb::from_hex(0xe0_4b_3a),
            nut: Rgb::from_hex(0xe0_4b_3a),

            outline_width: 3.0,
            long_tick_width: 4.0,
            short_tick_width: 2.0,
            hour_hand_width: 6.0,
            minute_hand_width: 4.0,
            second_hand_width: 1.5,
        }
    }
}
