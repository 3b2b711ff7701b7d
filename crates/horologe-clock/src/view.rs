use crate::canvas::Canvas;
use crate::face::{FaceGeometry, HandGeometry, Point};
use crate::style::ClockStyle;
use crate::time_state::TimeState;

/// Extra stroke width used when painting over old hands, so antialiased
/// edges are covered too.
const ERASE_BLEED: f32 = 1.0;

/// Paints the clock face and hands.
///
/// The only state is the last drawn hand geometry, kept so the next pass can
/// paint over the old hands before drawing new ones.
#[derive(Debug, Clone)]
pub struct ClockView {
    face: FaceGeometry,
    style: ClockStyle,
    last_drawn: Option<HandGeometry>,
    /// Center the last hands were drawn from; differs from `face.center`
    /// after a resize.
    last_center: Point,
}

impl ClockView {
    pub fn new(face: FaceGeometry, style: ClockStyle) -> Self {
        Self { face, style, last_drawn: None, last_center: face.center }
    }

    #[inline]
    pub fn face(&self) -> &FaceGeometry {
        &self.face
    }

    #[inline]
    pub fn style(&self) -> &ClockStyle {
        &self.style
    }

    /// Hands painted by the most recent [`redraw`](Self::redraw).
    #[inline]
    pub fn last_drawn(&self) -> Option<HandGeometry> {
        self.last_drawn
    }

    /// Replaces the face geometry (window resized).
    ///
    /// The previous hand positions are kept; they are still where the old
    /// hands were painted.
    pub fn set_face(&mut self, face: FaceGeometry) {
        self.face = face;
    }

    pub fn set_style(&mut self, style: ClockStyle) {
        self.style = style;
    }

    /// Full redraw pass for `time`.
    ///
    /// Order: erase previous hands, hour marks, face outline, new hands, nut.
    pub fn redraw<C: Canvas + ?Sized>(&mut self, time: &TimeState, canvas: &mut C) -> HandGeometry {
        let face = self.face;
        let style = self.style;
        let center = face.center;

        if let Some(old) = self.last_drawn {
            let bg = style.background;
            let pivot = self.last_center;
            canvas.draw_line(pivot, old.hour, bg, style.hour_hand_width + ERASE_BLEED);
            canvas.draw_line(pivot, old.minute, bg, style.minute_hand_width + ERASE_BLEED);
            canvas.draw_line(pivot, old.second, bg, style.second_hand_width + ERASE_BLEED);
        }

        for mark in face.tick_marks() {
            let width = if mark.long { style.long_tick_width } else { style.short_tick_width };
            canvas.draw_line(mark.outer, mark.inner, style.tick, width);
        }

        let (x, y, w, h) = face.outline_box();
        canvas.draw_ellipse(x, y, w, h, style.face_outline, style.outline_width);

        let hands = face.hands(time);
        canvas.draw_line(center, hands.hour, style.hour_hand, style.hour_hand_width);
        canvas.draw_line(center, hands.minute, style.minute_hand, style.minute_hand_width);
        canvas.draw_line(center, hands.second, style.second_hand, style.second_hand_width);

        let (x, y, w, h) = face.nut_box();
        canvas.fill_ellipse(x, y, w, h, style.nut);

        self.last_drawn = Some(hands);
        self.last_center = center;
        hands
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::canvas::Rgb;

    /// Canvas that records every call.
    #[derive(Debug, Default)]
    pub(crate) struct Recorder {
        pub calls: Vec<Call>,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub(crate) enum Call {
        Line { from: Point, to: Point, color: Rgb, width: f32 },
        Ellipse { x: i32, y: i32, w: i32, h: i32, color: Rgb },
        Fill { x: i32, y: i32, w: i32, h: i32, color: Rgb },
    }

    impl Canvas for Recorder {
        fn draw_line(&mut self, from: Point, to: Point, color: Rgb, width: f32) {
            self.calls.push(Call::Line { from, to, color, width });
        }
        fn draw_ellipse(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb, _width: f32) {
            self.calls.push(Call::Ellipse { x, y, w, h, color });
        }
        fn fill_ellipse(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb) {
            self.calls.push(Call::Fill { x, y, w, h, color });
        }
    }

    fn view() -> ClockView {
        ClockView::new(FaceGeometry::new(200, 200, 160), ClockStyle::default())
    }

    // ── first pass ────────────────────────────────────────────────────────

    #[test]
    fn first_redraw_has_nothing_to_erase() {
        let mut v = view();
        let mut c = Recorder::default();
        v.redraw(&TimeState::new(3, 0, 0), &mut c);
        // 12 ticks + outline + 3 hands + nut
        assert_eq!(c.calls.len(), 17);
        let bg = v.style().background;
        assert!(!c.calls.iter().any(|call| matches!(call, Call::Line { color, .. } if *color == bg)));
    }

    #[test]
    fn nut_is_drawn_last() {
        let mut v = view();
        let mut c = Recorder::default();
        v.redraw(&TimeState::new(1, 2, 3), &mut c);
        assert!(matches!(c.calls.last(), Some(Call::Fill { x: 195, y: 195, w: 10, h: 10, .. })));
    }

    #[test]
    fn outline_follows_ticks() {
        let mut v = view();
        let mut c = Recorder::default();
        v.redraw(&TimeState::new(1, 2, 3), &mut c);
        assert!(matches!(c.calls[12], Call::Ellipse { x: 40, y: 40, w: 320, h: 320, .. }));
    }

    #[test]
    fn tick_widths_distinguish_long_marks() {
        let mut v = view();
        let mut c = Recorder::default();
        v.redraw(&TimeState::new(0, 0, 0), &mut c);
        let style = *v.style();
        for (i, call) in c.calls.iter().take(12).enumerate() {
            let Call::Line { width, .. } = call else { panic!("tick {i} is not a line") };
            let expected = if i % 3 == 0 { style.long_tick_width } else { style.short_tick_width };
            assert_eq!(*width, expected);
        }
    }

    // ── erase pass ────────────────────────────────────────────────────────

    #[test]
    fn second_redraw_erases_previous_hands_first() {
        let mut v = view();
        let mut c = Recorder::default();
        let before = v.redraw(&TimeState::new(3, 0, 0), &mut c);

        let mut c = Recorder::default();
        let after = v.redraw(&TimeState::new(3, 0, 1), &mut c);
        assert_ne!(before.second, after.second);

        let bg = v.style().background;
        let center = Point::new(200, 200);
        let erased: Vec<Point> = c.calls[..3]
            .iter()
            .map(|call| match call {
                Call::Line { from, to, color, .. } => {
                    assert_eq!(*from, center);
                    assert_eq!(*color, bg);
                    *to
                }
                other => panic!("expected erase line, got {other:?}"),
            })
            .collect();
        assert_eq!(erased, vec![before.hour, before.minute, before.second]);
        assert_eq!(c.calls.len(), 20);
    }

    #[test]
    fn last_drawn_tracks_new_hands() {
        let mut v = view();
        assert_eq!(v.last_drawn(), None);
        let mut c = Recorder::default();
        let hands = v.redraw(&TimeState::new(9, 15, 30), &mut c);
        assert_eq!(v.last_drawn(), Some(hands));
    }

    #[test]
    fn resize_keeps_old_hands_for_erasing() {
        let mut v = view();
        let mut c = Recorder::default();
        let old = v.redraw(&TimeState::new(3, 0, 0), &mut c);
        v.set_face(FaceGeometry::new(100, 100, 80));

        let mut c = Recorder::default();
        v.redraw(&TimeState::new(3, 0, 0), &mut c);
        assert!(matches!(
            c.calls[0],
            Call::Line { from, to, .. } if from == Point::new(200, 200) && to == old.hour
        ));
        assert_eq!(v.last_drawn().map(|h| h.hour), Some(Point::new(150, 100)));
    }
}
