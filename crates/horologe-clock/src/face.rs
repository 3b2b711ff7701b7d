use crate::angle::{position_radians, DEGREES_PER_HOUR, DEGREES_PER_MINUTE};
use crate::time_state::TimeState;

/// Number of hour marks around the face.
pub const TICK_COUNT: usize = 12;

/// Every n-th mark (12, 3, 6, 9) is drawn long.
const LONG_TICK_EVERY: usize = 3;

/// Hour hand length is `radius / HOUR_HAND_DIVISOR`.
const HOUR_HAND_DIVISOR: f64 = 1.6;

/// Minute and second hands are this much longer than the hour hand.
const LONG_HAND_FACTOR: f64 = 1.5;

/// Integer pixel position in logical pixels (top-left origin, +Y down).
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Hand-tip positions for one displayed time.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct HandGeometry {
    pub hour: Point,
    pub minute: Point,
    pub second: Point,
}

/// One radial hour mark, from the rim inwards.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct TickMark {
    pub index: usize,
    pub outer: Point,
    pub inner: Point,
    pub long: bool,
}

/// Fixed geometry of the clock face.
///
/// All lengths are logical pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FaceGeometry {
    pub center: Point,
    pub radius: i32,
    pub long_tick: i32,
    pub short_tick: i32,
    pub nut_radius: i32,
    /// Clicks further than `radius * click_slop` from the center are ignored.
    pub click_slop: f64,
}

impl FaceGeometry {
    /// Face centered on `(cx, cy)` with tick and nut sizes scaled to `radius`.
    pub fn new(cx: i32, cy: i32, radius: i32) -> Self {
        let radius = radius.max(1);
        Self {
            center: Point::new(cx, cy),
            radius,
            long_tick: (radius / 8).max(2),
            short_tick: (radius / 16).max(1),
            nut_radius: (radius / 30).max(3),
            click_slop: 1.2,
        }
    }

    /// Largest face that fits inside the given area, inset by `margin`.
    pub fn fit(x: f32, y: f32, w: f32, h: f32, margin: f32) -> Self {
        let cx = (x + w * 0.5).round() as i32;
        let cy = (y + h * 0.5).round() as i32;
        let radius = ((w.min(h) * 0.5) - margin).floor() as i32;
        Self::new(cx, cy, radius)
    }

    #[inline]
    pub fn hour_hand_length(&self) -> f64 {
        self.radius as f64 / HOUR_HAND_DIVISOR
    }

    #[inline]
    pub fn minute_hand_length(&self) -> f64 {
        self.hour_hand_length() * LONG_HAND_FACTOR
    }

    #[inline]
    pub fn second_hand_length(&self) -> f64 {
        self.minute_hand_length()
    }

    /// Bounding box of the face outline as `(x, y, w, h)`.
    #[inline]
    pub fn outline_box(&self) -> (i32, i32, i32, i32) {
        (
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.radius * 2,
            self.radius * 2,
        )
    }

    /// Bounding box of the center nut as `(x, y, w, h)`.
    #[inline]
    pub fn nut_box(&self) -> (i32, i32, i32, i32) {
        (
            self.center.x - self.nut_radius,
            self.center.y - self.nut_radius,
            self.nut_radius * 2,
            self.nut_radius * 2,
        )
    }

    /// Point at `length` from the center along `angle` (radians).
    pub fn tip(&self, angle: f64, length: f64) -> Point {
        Point::new(
            self.center.x + (angle.cos() * length).round() as i32,
            self.center.y + (angle.sin() * length).round() as i32,
        )
    }

    #[inline]
    pub fn tick_length(&self, index: usize) -> i32 {
        if index % LONG_TICK_EVERY == 0 { self.long_tick } else { self.short_tick }
    }

    /// The twelve hour marks, starting at 12 o'clock and going clockwise.
    pub fn tick_marks(&self) -> [TickMark; TICK_COUNT] {
        std::array::from_fn(|index| {
            let angle = position_radians(index as f64, DEGREES_PER_HOUR);
            let r = self.radius as f64;
            TickMark {
                index,
                outer: self.tip(angle, r),
                inner: self.tip(angle, r - self.tick_length(index) as f64),
                long: index % LONG_TICK_EVERY == 0,
            }
        })
    }

    /// Hand tips for `time`.
    ///
    /// The hour hand creeps with the minute (3:30 sits halfway between 3 and 4).
    pub fn hands(&self, time: &TimeState) -> HandGeometry {
        let hour_units = time.hour() as f64 + time.minute() as f64 / 60.0;
        HandGeometry {
            hour: self.tip(
                position_radians(hour_units, DEGREES_PER_HOUR),
                self.hour_hand_length(),
            ),
            minute: self.tip(
                position_radians(time.minute() as f64, DEGREES_PER_MINUTE),
                self.minute_hand_length(),
            ),
            second: self.tip(
                position_radians(time.second() as f64, DEGREES_PER_MINUTE),
                self.second_hand_length(),
            ),
        }
    }

    /// Whether a click at `(x, y)` is close enough to the face to count.
    pub fn accepts_click(&self, x: f64, y: f64) -> bool {
        let dx = x - self.center.x as f64;
        let dy = y - self.center.y as f64;
        dx.hypot(dy) <= self.radius as f64 * self.click_slop
    }
}

impl Default for FaceGeometry {
    fn default() -> Self {
        Self::new(200, 200, 160)
    }
}
