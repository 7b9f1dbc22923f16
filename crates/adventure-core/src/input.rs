use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Keys the game reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Key {
    Left,
    Right,
    Up,
    Space,
    Restart,
}

/// Polled view of the keyboard as seen by the game for one tick.
pub trait InputSource {
    /// Whether the key is currently held down.
    fn is_held(&self, key: Key) -> bool;

    /// Whether the key went down since the last `end_frame`.
    fn just_pressed(&self, key: Key) -> bool;
}

/// Keyboard state, updated from key-down/key-up notifications by the frontend.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Keys currently held down.
    pub keys_down: HashSet<Key>,
    /// Keys pressed this frame (cleared each frame).
    pub keys_just_pressed: HashSet<Key>,
    /// Keys released this frame (cleared each frame).
    pub keys_just_released: HashSet<Key>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a key-down. Auto-repeat of a held key does not count as a new press.
    pub fn on_key_down(&mut self, key: Key) {
        if self.keys_down.insert(key) {
            self.keys_just_pressed.insert(key);
        }
    }

    pub fn on_key_up(&mut self, key: Key) {
        if self.keys_down.remove(&key) {
            self.keys_just_released.insert(key);
        }
    }

    pub fn is_key_just_released(&self, key: Key) -> bool {
        self.keys_just_released.contains(&key)
    }

    /// Clear per-frame state. Call once the tick has consumed its input.
    pub fn end_frame(&mut self) {
        self.keys_just_pressed.clear();
        self.keys_just_released.clear();
    }
}

impl InputSource for InputState {
    fn is_held(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    fn just_pressed(&self, key: Key) -> bool {
        self.keys_just_pressed.contains(&key)
    }
}
