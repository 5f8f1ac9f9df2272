//! Frame Command Decoder
//!
//! Samples held keys once per frame and produces the [`FrameCommands`] value
//! the simulation consumes. Continuous controls (pitch, turn, throttle) are
//! level-triggered; bomb release, bomb reset and the hitbox toggle fire only
//! on the frame their key goes down.

use super::bindings::{InputAction, KeyBindings};
use super::keyboard::KeyboardState;
use super::mouse::LookDelta;
use crate::camera::CameraMode;
use crate::flight::{FlightControls, PitchCommand, SpeedCommand, TurnCommand};

/// Rising-edge detector comparing this frame's held state to the last one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeTrigger {
    previous: bool,
}

impl EdgeTrigger {
    /// Returns true only when `held` is true and was false last frame.
    pub fn update(&mut self, held: bool) -> bool {
        let fired = held && !self.previous;
        self.previous = held;
        fired
    }
}

/// Everything the pilot asked for in one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameCommands {
    pub flight: FlightControls,
    /// Requested camera, `None` keeps the current one
    pub camera: Option<CameraMode>,
    pub release_bomb: bool,
    pub reset_bomb: bool,
    pub toggle_hitboxes: bool,
    pub exit: bool,
    pub look: LookDelta,
}

/// Stateful decoder owning the previous-frame state for edge triggers.
#[derive(Debug, Clone, Default)]
pub struct CommandDecoder {
    release: EdgeTrigger,
    reset: EdgeTrigger,
    hitboxes: EdgeTrigger,
}

impl CommandDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode one frame of input.
    pub fn decode(&mut self, keyboard: &KeyboardState, bindings: &KeyBindings, look: LookDelta) -> FrameCommands {
        let held = keyboard.held_keys();
        let pressed = |action| bindings.is_action_pressed(action, held);

        let flight = FlightControls {
            turn: TurnCommand::from_keys(pressed(InputAction::TurnLeft), pressed(InputAction::TurnRight)),
            pitch: PitchCommand::from_keys(pressed(InputAction::PitchUp), pressed(InputAction::PitchDown)),
            speed: SpeedCommand::from_keys(pressed(InputAction::Accelerate), pressed(InputAction::Decelerate)),
        };

        // Chase camera wins if both are held
        let camera = if pressed(InputAction::ThirdPersonCamera) {
            Some(CameraMode::ThirdPerson)
        } else if pressed(InputAction::FirstPersonCamera) {
            Some(CameraMode::FirstPerson)
        } else {
            None
        };

        FrameCommands {
            flight,
            camera,
            release_bomb: self.release.update(pressed(InputAction::ReleaseBomb)),
            reset_bomb: self.reset.update(pressed(InputAction::ResetBomb)),
            toggle_hitboxes: self.hitboxes.update(pressed(InputAction::ToggleHitboxes)),
            exit: pressed(InputAction::Exit),
            look,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyCode;

    fn decode_with(decoder: &mut CommandDecoder, keys: &[KeyCode]) -> FrameCommands {
        let mut keyboard = KeyboardState::new();
        for &key in keys {
            keyboard.handle_key(key, true);
        }
        decoder.decode(&keyboard, &KeyBindings::default(), LookDelta::default())
    }

    #[test]
    fn test_edge_trigger_fires_once_per_press() {
        let mut trigger = EdgeTrigger::default();
        assert!(trigger.update(true));
        assert!(!trigger.update(true));
        assert!(!trigger.update(true));
        assert!(!trigger.update(false));
        assert!(trigger.update(true));
    }

    #[test]
    fn test_held_toggle_key_fires_once() {
        let mut decoder = CommandDecoder::new();
        assert!(decode_with(&mut decoder, &[KeyCode::H]).toggle_hitboxes);
        assert!(!decode_with(&mut decoder, &[KeyCode::H]).toggle_hitboxes);
        assert!(!decode_with(&mut decoder, &[]).toggle_hitboxes);
        assert!(decode_with(&mut decoder, &[KeyCode::H]).toggle_hitboxes);
    }

    #[test]
    fn test_flight_controls_decoded() {
        let mut decoder = CommandDecoder::new();
        let commands = decode_with(&mut decoder, &[KeyCode::W, KeyCode::A, KeyCode::F]);
        assert_eq!(commands.flight.pitch, PitchCommand::Up);
        assert_eq!(commands.flight.turn, TurnCommand::Left);
        assert_eq!(commands.flight.speed, SpeedCommand::Accelerate);
        assert!(!commands.release_bomb);
    }

    #[test]
    fn test_camera_select() {
        let mut decoder = CommandDecoder::new();
        assert_eq!(decode_with(&mut decoder, &[KeyCode::Digit2]).camera, Some(CameraMode::ThirdPerson));
        assert_eq!(decode_with(&mut decoder, &[KeyCode::Digit1]).camera, Some(CameraMode::FirstPerson));
        assert_eq!(decode_with(&mut decoder, &[]).camera, None);
    }

    #[test]
    fn test_release_and_reset_are_edge_triggered() {
        let mut decoder = CommandDecoder::new();
        let first = decode_with(&mut decoder, &[KeyCode::Space, KeyCode::R]);
        assert!(first.release_bomb);
        assert!(first.reset_bomb);
        let held = decode_with(&mut decoder, &[KeyCode::Space, KeyCode::R]);
        assert!(!held.release_bomb);
        assert!(!held.reset_bomb);
    }
}
