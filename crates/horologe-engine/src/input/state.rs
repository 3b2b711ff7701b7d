use std::collections::HashSet;

use super::types::{
    InputEvent, Key, KeyState, Modifiers, MouseButton, MouseButtonState, PointerButtonEvent,
    PointerMoveEvent,
};

/// Current input state for the window.
#[derive(Debug, Default)]
pub struct InputState {
    pub modifiers: Modifiers,
    pub focused: bool,
    /// Logical pixels; `None` while the pointer is outside the window.
    pub pointer_pos: Option<(f32, f32)>,
    pub keys_down: HashSet<Key>,
    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Folds `ev` into the state.
    ///
    /// Returns `false` for presses of something already down and releases of
    /// something that was not, so callers can drop those.
    pub fn apply_event(&mut self, ev: &InputEvent) -> bool {
        match ev {
            InputEvent::ModifiersChanged(m) => {
                self.modifiers = *m;
                true
            }

            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // avoid stuck keys when focus changes mid-press
                    self.keys_down.clear();
                    self.buttons_down.clear();
                }
                true
            }

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.pointer_pos = Some((*x, *y));
                true
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
                true
            }

            InputEvent::Key { key, state, modifiers, repeat } => {
                self.modifiers = *modifiers;
                match state {
                    KeyState::Pressed => self.keys_down.insert(*key) || *repeat,
                    KeyState::Released => self.keys_down.remove(key),
                }
            }

            InputEvent::PointerButton(PointerButtonEvent { button, state, x, y, modifiers }) => {
                self.pointer_pos = Some((*x, *y));
                self.modifiers = *modifiers;
                match state {
                    MouseButtonState::Pressed => self.buttons_down.insert(*button),
                    MouseButtonState::Released => self.buttons_down.remove(button),
                }
            }
        }
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }
}
