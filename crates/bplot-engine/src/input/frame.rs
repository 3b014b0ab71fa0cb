use std::collections::HashSet;

use super::types::{InputEvent, Key, MouseButton, TextEvent};

/// Input that arrived since the previous frame.
///
/// `events` keeps arrival order; it is what the driver forwards to the state
/// stack one event at a time. The sets are transition summaries for polling.
#[derive(Debug, Default)]
pub struct InputFrame {
    pub events: Vec<InputEvent>,

    pub keys_pressed:  HashSet<Key>,
    pub keys_released: HashSet<Key>,

    pub buttons_pressed:  HashSet<MouseButton>,
    pub buttons_released: HashSet<MouseButton>,

    pub text: Vec<TextEvent>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.buttons_pressed.clear();
        self.buttons_released.clear();
        self.text.clear();
    }

    pub fn clicked(&self, button: MouseButton) -> bool {
        self.buttons_released.contains(&button)
    }
}
