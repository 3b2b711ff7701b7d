use crate::input::InputEvent;

use super::ctx::{EventCtx, FrameCtx};

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract.
///
/// The runtime only repaints when asked to: callbacks that change what is on
/// screen call [`RuntimeCtx::request_redraw`](crate::window::RuntimeCtx::request_redraw).
pub trait App {
    /// `ticks` whole tick intervals elapsed since the last call.
    fn on_tick(&mut self, ticks: u32, ctx: &mut EventCtx<'_>) -> AppControl {
        let _ = (ticks, ctx);
        AppControl::Continue
    }

    /// Called for each input event after `ctx.input` has been updated.
    fn on_input(&mut self, event: &InputEvent, ctx: &mut EventCtx<'_>) -> AppControl {
        let _ = (event, ctx);
        AppControl::Continue
    }

    /// Paints one frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
