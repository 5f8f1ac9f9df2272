//! Keyboard Input Module
//!
//! Held-key tracking with generic key codes, decoupled from winit.

use std::collections::HashSet;

/// Generic key codes, independent of windowing system.
///
/// Only the keys the flight controls and debug toggles can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    // Letter keys
    A,
    D,
    F,
    G,
    H,
    R,
    S,
    W,
    Space,

    // Camera select
    Digit1,
    Digit2,

    // Arrow keys (for rebinding)
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    Escape,

    /// Catch-all for unhandled keys
    Unknown,
}

/// Set of keys currently held down.
///
/// Updated from press/release events, sampled once at the start of a frame.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    held: HashSet<KeyCode>,
}

impl KeyboardState {
    /// Create a new keyboard state with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key press or release event.
    ///
    /// Returns `true` if the held state of the key changed.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        if key == KeyCode::Unknown {
            return false;
        }
        if pressed {
            self.held.insert(key)
        } else {
            self.held.remove(&key)
        }
    }

    /// Check if a key is currently held.
    pub fn is_held(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    /// All held keys.
    pub fn held_keys(&self) -> &HashSet<KeyCode> {
        &self.held
    }

    /// Release every key (e.g. on focus loss).
    pub fn reset(&mut self) {
        self.held.clear();
    }
}
