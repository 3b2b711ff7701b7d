//! Conversions between screen points, face angles, and clock values.
//!
//! Angle convention (degrees, screen space with +Y down):
//! - 0° points at 3 o'clock
//! - angles grow clockwise, so 6 o'clock is 90° and 12 o'clock is 270°
//!
//! Clock values are measured from 12 o'clock, which sits at
//! [`TWELVE_OCLOCK_OFFSET`] in this convention.

/// Angle of 12 o'clock in the 3-o'clock-is-zero convention.
pub const TWELVE_OCLOCK_OFFSET: i32 = -90;

/// Degrees of arc covered by one hour on the face.
pub const DEGREES_PER_HOUR: i32 = 30;

/// Degrees of arc covered by one minute (or second) on the face.
pub const DEGREES_PER_MINUTE: i32 = 6;

/// Vectors shorter than this have no usable direction.
const MIN_HYPOT: f64 = 0.5;

const ROUNDING_SLACK: f64 = 1e-6;

/// Returns the angle of the hand-tip vector `(px - cx, py - cy)` in `[0, 360)`.
///
/// Sine and cosine come from normalizing by the hypotenuse; the quadrant is
/// chosen by an explicit case split on their signs. The result is truncated
/// to whole degrees.
///
/// Returns `None` when the point is (sub-pixel close to) the center, where no
/// direction exists.
pub fn angle_from_point(px: f64, py: f64, cx: f64, cy: f64) -> Option<i32> {
    let dx = px - cx;
    let dy = py - cy;
    let hyp = dx.hypot(dy);
    if !hyp.is_finite() || hyp < MIN_HYPOT {
        return None;
    }

    let sin = dy / hyp;
    let cos = dx / hyp;
    // Reference angle in [0, 90].
    let base = sin.abs().min(1.0).asin().to_degrees();

    let deg = match (sin >= 0.0, cos >= 0.0) {
        (true, true) => base,           // lower right: 3 → 6
        (true, false) => 180.0 - base,  // lower left:  6 → 9
        (false, false) => 180.0 + base, // upper left:  9 → 12
        (false, true) => 360.0 - base,  // upper right: 12 → 3
    };

    // Nudge before truncating so 44.999999… from asin noise reads as 45.
    Some(((deg + ROUNDING_SLACK) as i32).rem_euclid(360))
}

/// Hour (0–11) a hand at `angle_deg` points to.
///
/// `(angle - offset) / 30` with truncating division, then folded onto the
/// 12-hour face so 12 o'clock reads as 0.
pub fn hour_from_angle(angle_deg: i32) -> u8 {
    let from_twelve = (angle_deg - TWELVE_OCLOCK_OFFSET).rem_euclid(360);
    (from_twelve / DEGREES_PER_HOUR % 12) as u8
}

/// Minute (0–59) a hand at `angle_deg` points to.
pub fn minute_from_angle(angle_deg: i32) -> u8 {
    let from_twelve = (angle_deg - TWELVE_OCLOCK_OFFSET).rem_euclid(360);
    (from_twelve / DEGREES_PER_MINUTE % 60) as u8
}

/// Face angle of a clock position, in radians.
///
/// `units` is measured from 12 o'clock in steps of `degrees_per_unit`.
#[inline]
pub fn position_radians(units: f64, degrees_per_unit: i32) -> f64 {
    (units * degrees_per_unit as f64 + TWELVE_OCLOCK_OFFSET as f64).to_radians()
}

#[cfg(test)]
mod tests {
    use super::*;

    const C: f64 = 100.0;

    fn angle(px: f64, py: f64) -> i32 {
        angle_from_point(px, py, C, C).unwrap()
    }

    // ── angle_from_point ──────────────────────────────────────────────────

    #[test]
    fn cardinal_directions() {
        assert_eq!(angle(150.0, C), 0);   // right
        assert_eq!(angle(C, 150.0), 90);  // below
        assert_eq!(angle(50.0, C), 180);  // left
        assert_eq!(angle(C, 50.0), 270);  // above
    }

    #[test]
    fn each_quadrant_resolved() {
        assert_eq!(angle(150.0, 150.0), 45);
        assert_eq!(angle(50.0, 150.0), 135);
        assert_eq!(angle(50.0, 50.0), 225);
        assert_eq!(angle(150.0, 50.0), 315);
    }

    #[test]
    fn result_always_in_range() {
        for i in 0..360 {
            let r = (i as f64).to_radians();
            let a = angle(C + r.cos() * 80.0, C + r.sin() * 80.0);
            assert!((0..360).contains(&a), "angle {a} out of range for {i}");
        }
    }

    #[test]
    fn center_has_no_angle() {
        assert_eq!(angle_from_point(C, C, C, C), None);
        assert_eq!(angle_from_point(C + 0.1, C - 0.1, C, C), None);
    }

    #[test]
    fn non_finite_input_has_no_angle() {
        assert_eq!(angle_from_point(f64::NAN, C, C, C), None);
    }

    // ── hour_from_angle / minute_from_angle ───────────────────────────────

    #[test]
    fn hours_at_quarter_positions() {
        assert_eq!(hour_from_angle(angle(C, 20.0)), 0);
        assert_eq!(hour_from_angle(angle(180.0, C)), 3);
        assert_eq!(hour_from_angle(angle(C, 180.0)), 6);
        assert_eq!(hour_from_angle(angle(20.0, C)), 9);
    }

    #[test]
    fn hour_sector_just_before_twelve_is_eleven() {
        assert_eq!(hour_from_angle(269), 11);
        assert_eq!(hour_from_angle(270), 0);
        assert_eq!(hour_from_angle(299), 0);
        assert_eq!(hour_from_angle(300), 1);
    }

    #[test]
    fn minutes_at_quarter_positions() {
        assert_eq!(minute_from_angle(270), 0);
        assert_eq!(minute_from_angle(0), 15);
        assert_eq!(minute_from_angle(90), 30);
        assert_eq!(minute_from_angle(180), 45);
        assert_eq!(minute_from_angle(269), 59);
    }

    // ── position_radians ──────────────────────────────────────────────────

    #[test]
    fn twelve_points_up_three_points_right() {
        let up = position_radians(0.0, DEGREES_PER_HOUR);
        assert!((up.cos()).abs() < 1e-9);
        assert!((up.sin() + 1.0).abs() < 1e-9);

        let right = position_radians(3.0, DEGREES_PER_HOUR);
        assert!((right.cos() - 1.0).abs() < 1e-9);
        assert!(right.sin().abs() < 1e-9);
    }
}
