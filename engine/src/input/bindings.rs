//! Input Bindings Module
//!
//! Maps physical keys to logical flight actions, allowing key remapping
//! without touching the simulation.

use std::collections::{HashMap, HashSet};

use super::KeyCode;

/// Logical input actions that can be bound to physical keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Cockpit camera (default: 1)
    FirstPersonCamera,
    /// Chase camera (default: 2)
    ThirdPersonCamera,
    /// Nose up (default: W)
    PitchUp,
    /// Nose down (default: S)
    PitchDown,
    /// Bank and yaw left (default: A)
    TurnLeft,
    /// Bank and yaw right (default: D)
    TurnRight,
    /// Throttle up (default: F)
    Accelerate,
    /// Throttle down (default: G)
    Decelerate,
    /// Drop the bomb (default: Space)
    ReleaseBomb,
    /// Return the bomb to the mount (default: R)
    ResetBomb,
    /// Show/hide collision volumes (default: H)
    ToggleHitboxes,
    /// Quit (default: Escape)
    Exit,
}

/// Maps physical keys to logical actions, supporting customizable key bindings.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    /// Map from physical key to logical action
    key_to_action: HashMap<KeyCode, InputAction>,
    /// Map from logical action to physical key (for reverse lookup and display)
    action_to_key: HashMap<InputAction, KeyCode>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyBindings {
    /// Create a new KeyBindings instance with the default flight layout.
    pub fn new() -> Self {
        let mut bindings = Self {
            key_to_action: HashMap::new(),
            action_to_key: HashMap::new(),
        };

        bindings.bind(KeyCode::Digit1, InputAction::FirstPersonCamera);
        bindings.bind(KeyCode::Digit2, InputAction::ThirdPersonCamera);
        bindings.bind(KeyCode::W, InputAction::PitchUp);
        bindings.bind(KeyCode::S, InputAction::PitchDown);
        bindings.bind(KeyCode::A, InputAction::TurnLeft);
        bindings.bind(KeyCode::D, InputAction::TurnRight);
        bindings.bind(KeyCode::F, InputAction::Accelerate);
        bindings.bind(KeyCode::G, InputAction::Decelerate);
        bindings.bind(KeyCode::Space, InputAction::ReleaseBomb);
        bindings.bind(KeyCode::R, InputAction::ResetBomb);
        bindings.bind(KeyCode::H, InputAction::ToggleHitboxes);
        bindings.bind(KeyCode::Escape, InputAction::Exit);

        bindings
    }

    /// Bind a physical key to a logical action.
    ///
    /// Any previous binding of either the key or the action is removed.
    pub fn bind(&mut self, key: KeyCode, action: InputAction) {
        if let Some(old_action) = self.key_to_action.remove(&key) {
            self.action_to_key.remove(&old_action);
        }
        if let Some(old_key) = self.action_to_key.remove(&action) {
            self.key_to_action.remove(&old_key);
        }

        self.key_to_action.insert(key, action);
        self.action_to_key.insert(action, key);
    }

    /// Remove the binding for a specific action.
    pub fn unbind_action(&mut self, action: InputAction) {
        if let Some(key) = self.action_to_key.remove(&action) {
            self.key_to_action.remove(&key);
        }
    }

    /// Get the action bound to a physical key, if any.
    pub fn get_action(&self, key: KeyCode) -> Option<InputAction> {
        self.key_to_action.get(&key).copied()
    }

    /// Get the key bound to a logical action, if any.
    pub fn get_key(&self, action: InputAction) -> Option<KeyCode> {
        self.action_to_key.get(&action).copied()
    }

    /// Check if an action's key is in the set of held keys.
    pub fn is_action_pressed(&self, action: InputAction, pressed_keys: &HashSet<KeyCode>) -> bool {
        self.action_to_key
            .get(&action)
            .is_some_and(|key| pressed_keys.contains(key))
    }
}
