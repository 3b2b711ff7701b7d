//! Input subsystem.
//!
//! The public API does not expose winit types. The runtime translates
//! platform events into [`InputEvent`]s (see `translate`) and folds them into
//! the window's [`InputState`].

mod state;
pub(crate) mod translate;
mod types;

pub use state::InputState;
pub use types::{
    InputEvent, Key, KeyState, Modifiers, MouseButton, MouseButtonState, PointerButtonEvent,
    PointerMoveEvent,
};
