//! Input Module
//!
//! Platform-agnostic input handling for the flight controls.
//! This module is decoupled from any specific windowing system (like winit);
//! the application maps its native key events onto [`KeyCode`].
//!
//! # Example
//!
//! ```rust,ignore
//! use dive_bomber_engine::input::{CommandDecoder, KeyBindings, KeyCode, KeyboardState, MouseLook};
//!
//! let bindings = KeyBindings::default();
//! let mut keyboard = KeyboardState::new();
//! let mut mouse = MouseLook::new();
//! let mut decoder = CommandDecoder::new();
//!
//! keyboard.handle_key(KeyCode::A, true);
//! let commands = decoder.decode(&keyboard, &bindings, mouse.consume());
//! ```

pub mod bindings;
pub mod commands;
pub mod keyboard;
pub mod mouse;

pub use bindings::{InputAction, KeyBindings};
pub use commands::{CommandDecoder, EdgeTrigger, FrameCommands};
pub use keyboard::{KeyCode, KeyboardState};
pub use mouse::{LookDelta, MouseLook};

/// Combined input state polled once per frame.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub keyboard: KeyboardState,
    pub mouse: MouseLook,
    pub bindings: KeyBindings,
    decoder: CommandDecoder,
}

impl InputState {
    /// Create a new input state with default bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an input state with custom bindings.
    pub fn with_bindings(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            ..Default::default()
        }
    }

    /// Sample everything gathered since the last frame.
    pub fn poll(&mut self) -> FrameCommands {
        let look = self.mouse.consume();
        self.decoder.decode(&self.keyboard, &self.bindings, look)
    }

    /// Release all keys and drop pending mouse motion.
    pub fn reset(&mut self) {
        self.keyboard.reset();
        self.mouse.recenter();
        self.mouse.consume();
    }
}
