use crate::angle::{angle_from_point, hour_from_angle, minute_from_angle};
use crate::canvas::Canvas;
use crate::face::{FaceGeometry, HandGeometry};
use crate::style::ClockStyle;
use crate::time_state::{FieldUpdate, TimeState};
use crate::view::ClockView;

/// Keys the clock reacts to. Hosts map everything else to `Other`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ClockKey {
    /// The `+` key (main row or numpad).
    Plus,
    Other,
}

/// Mouse buttons as seen by the clock.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PointerButton {
    Left,
    Right,
    Middle,
    Other,
}

/// Input contract between the host event loop and the clock.
///
/// Every handler returns `true` when the displayed time changed and the host
/// should schedule a repaint.
pub trait ClockEvents {
    /// `ticks` whole timer intervals elapsed (normally 1).
    fn on_tick(&mut self, ticks: u32) -> bool;

    fn on_key_down(&mut self, key: ClockKey, shift: bool) -> bool;

    /// Mouse button released at `(x, y)` in logical pixels.
    fn on_mouse_up(&mut self, button: PointerButton, x: f64, y: f64) -> bool;
}

/// Owns the displayed time and its view, and applies user edits.
#[derive(Debug, Clone)]
pub struct ClockController {
    time: TimeState,
    view: ClockView,
}

impl ClockController {
    pub fn new(time: TimeState, face: FaceGeometry) -> Self {
        Self::with_style(time, face, ClockStyle::default())
    }

    pub fn with_style(time: TimeState, face: FaceGeometry, style: ClockStyle) -> Self {
        Self { time, view: ClockView::new(face, style) }
    }

    #[inline]
    pub fn time(&self) -> TimeState {
        self.time
    }

    #[inline]
    pub fn view(&self) -> &ClockView {
        &self.view
    }

    #[inline]
    pub fn face(&self) -> &FaceGeometry {
        self.view.face()
    }

    /// Adopts new face geometry (window resized). Returns `true` if it changed.
    pub fn set_face(&mut self, face: FaceGeometry) -> bool {
        if *self.view.face() == face {
            return false;
        }
        self.view.set_face(face);
        true
    }

    /// Resets the display to a wall-clock value.
    pub fn sync_to(&mut self, time: TimeState) -> bool {
        let changed = self.time != time;
        self.time.set_fields(
            FieldUpdate::none()
                .hour(time.hour())
                .minute(time.minute())
                .second(time.second()),
        );
        log::debug!("clock synced to {}", self.time);
        changed
    }

    /// Paints the current time into `canvas`.
    pub fn redraw<C: Canvas + ?Sized>(&mut self, canvas: &mut C) -> HandGeometry {
        self.view.redraw(&self.time, canvas)
    }

    fn apply(&mut self, update: FieldUpdate) -> bool {
        if update.is_empty() {
            return false;
        }
        let before = self.time;
        self.time.set_fields(update);
        log::debug!("clock edited: {before} -> {}", self.time);
        before != self.time
    }
}

impl ClockEvents for ClockController {
    fn on_tick(&mut self, ticks: u32) -> bool {
        for _ in 0..ticks {
            self.time.advance();
        }
        ticks > 0
    }

    fn on_key_down(&mut self, key: ClockKey, shift: bool) -> bool {
        match key {
            ClockKey::Plus if shift => self.apply(self.time.next_hour()),
            ClockKey::Plus => self.apply(self.time.next_minute()),
            ClockKey::Other => false,
        }
    }

    fn on_mouse_up(&mut self, button: PointerButton, x: f64, y: f64) -> bool {
        let face = *self.view.face();
        if !face.accepts_click(x, y) {
            return false;
        }
        // No direction at the exact center: nothing to set.
        let Some(angle) = angle_from_point(x, y, face.center.x as f64, face.center.y as f64)
        else {
            log::debug!("click at face center ignored");
            return false;
        };

        let update = match button {
            PointerButton::Left => FieldUpdate::none().hour(hour_from_angle(angle)),
            PointerButton::Right => FieldUpdate::none().minute(minute_from_angle(angle)),
            PointerButton::Middle => FieldUpdate::none().hour(hour_from_angle(angle)).minute(0),
            PointerButton::Other => return false,
        };
        self.apply(update)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::tests::Recorder;

    fn clock(h: u8, m: u8, s: u8) -> ClockController {
        ClockController::new(TimeState::new(h, m, s), FaceGeometry::new(200, 200, 160))
    }

    // ── ticks ─────────────────────────────────────────────────────────────

    #[test]
    fn tick_advances_one_second() {
        let mut c = clock(1, 2, 3);
        assert!(c.on_tick(1));
        assert_eq!(c.time(), TimeState::new(1, 2, 4));
    }

    #[test]
    fn catch_up_ticks_advance_several_seconds() {
        let mut c = clock(1, 59, 58);
        assert!(c.on_tick(5));
        assert_eq!(c.time(), TimeState::new(2, 0, 3));
    }

    #[test]
    fn zero_ticks_request_no_repaint() {
        let mut c = clock(1, 2, 3);
        assert!(!c.on_tick(0));
        assert_eq!(c.time(), TimeState::new(1, 2, 3));
    }

    // ── keys ──────────────────────────────────────────────────────────────

    #[test]
    fn plus_advances_minute() {
        let mut c = clock(4, 10, 30);
        assert!(c.on_key_down(ClockKey::Plus, false));
        assert_eq!(c.time(), TimeState::new(4, 11, 30));
    }

    #[test]
    fn plus_rolls_minute_into_hour() {
        let mut c = clock(11, 59, 0);
        c.on_key_down(ClockKey::Plus, false);
        assert_eq!(c.time(), TimeState::new(0, 0, 0));
    }

    #[test]
    fn shift_plus_advances_hour() {
        let mut c = clock(11, 20, 5);
        assert!(c.on_key_down(ClockKey::Plus, true));
        assert_eq!(c.time(), TimeState::new(0, 20, 5));
    }

    #[test]
    fn other_keys_ignored() {
        let mut c = clock(4, 10, 30);
        assert!(!c.on_key_down(ClockKey::Other, true));
        assert_eq!(c.time(), TimeState::new(4, 10, 30));
    }

    // ── mouse ─────────────────────────────────────────────────────────────

    #[test]
    fn left_click_sets_hour_only() {
        let mut c = clock(7, 25, 40);
        // directly right of center → 3 o'clock
        assert!(c.on_mouse_up(PointerButton::Left, 320.0, 200.0));
        assert_eq!(c.time(), TimeState::new(3, 25, 40));
    }

    #[test]
    fn left_click_above_center_is_twelve() {
        let mut c = clock(7, 25, 40);
        c.on_mouse_up(PointerButton::Left, 200.0, 80.0);
        assert_eq!(c.time().hour(), 0);
    }

    #[test]
    fn right_click_sets_minute_only() {
        let mut c = clock(7, 25, 40);
        // directly below center → 30 minutes
        assert!(c.on_mouse_up(PointerButton::Right, 200.0, 320.0));
        assert_eq!(c.time(), TimeState::new(7, 30, 40));
    }

    #[test]
    fn middle_click_sets_hour_and_zeroes_minute() {
        let mut c = clock(7, 25, 40);
        assert!(c.on_mouse_up(PointerButton::Middle, 80.0, 200.0));
        assert_eq!(c.time(), TimeState::new(9, 0, 40));
    }

    #[test]
    fn click_on_center_is_noop() {
        let mut c = clock(7, 25, 40);
        assert!(!c.on_mouse_up(PointerButton::Left, 200.0, 200.0));
        assert_eq!(c.time(), TimeState::new(7, 25, 40));
    }

    #[test]
    fn click_far_from_face_is_noop() {
        let mut c = clock(7, 25, 40);
        assert!(!c.on_mouse_up(PointerButton::Left, 900.0, 200.0));
        assert_eq!(c.time(), TimeState::new(7, 25, 40));
    }

    #[test]
    fn click_matching_current_value_reports_no_change() {
        let mut c = clock(3, 25, 40);
        assert!(!c.on_mouse_up(PointerButton::Left, 320.0, 200.0));
    }

    // ── sync / resize / redraw ────────────────────────────────────────────

    #[test]
    fn sync_overwrites_all_fields() {
        let mut c = clock(7, 25, 40);
        assert!(c.sync_to(TimeState::new(1, 2, 3)));
        assert_eq!(c.time(), TimeState::new(1, 2, 3));
        assert!(!c.sync_to(TimeState::new(1, 2, 3)));
    }

    #[test]
    fn set_face_reports_change() {
        let mut c = clock(0, 0, 0);
        assert!(!c.set_face(FaceGeometry::new(200, 200, 160)));
        assert!(c.set_face(FaceGeometry::new(100, 100, 80)));
        assert_eq!(c.face().radius, 80);
    }

    #[test]
    fn redraw_paints_current_time() {
        let mut c = clock(3, 0, 0);
        let mut canvas = Recorder::default();
        let hands = c.redraw(&mut canvas);
        assert_eq!(hands, c.face().hands(&TimeState::new(3, 0, 0)));
        assert!(!canvas.calls.is_empty());
    }
}
