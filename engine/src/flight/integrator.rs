//! Kinematic Integrator
//!
//! Turns one frame of control commands and the elapsed time into attitude,
//! speed and position updates for the aircraft.
//!
//! A frame is split in two so the dampers can run in between:
//!
//! ```ignore
//! let outcome = integrator::apply_controls(&mut aircraft, &tuning, &controls, dt);
//! RollDamper.apply(&mut aircraft, &tuning, outcome, dt);
//! SpeedGovernor.apply(&mut aircraft, &tuning, outcome, dt);
//! integrator::advance(&mut aircraft, dt);
//! ```

use super::aircraft::{AircraftState, FlightTuning};

/// Yaw command for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TurnCommand {
    #[default]
    None,
    Left,
    Right,
}

impl TurnCommand {
    /// +1 for Left, -1 for Right, 0 for None.
    pub fn direction(self) -> f32 {
        match self {
            TurnCommand::None => 0.0,
            TurnCommand::Left => 1.0,
            TurnCommand::Right => -1.0,
        }
    }

    /// Resolve held left/right keys; both held cancel out.
    pub fn from_keys(left: bool, right: bool) -> Self {
        match (left, right) {
            (true, false) => TurnCommand::Left,
            (false, true) => TurnCommand::Right,
            _ => TurnCommand::None,
        }
    }
}

/// Pitch command for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PitchCommand {
    #[default]
    None,
    /// Nose up (pitch decreases)
    Up,
    /// Nose down (pitch increases)
    Down,
}

impl PitchCommand {
    pub fn from_keys(up: bool, down: bool) -> Self {
        match (up, down) {
            (true, false) => PitchCommand::Up,
            (false, true) => PitchCommand::Down,
            _ => PitchCommand::None,
        }
    }
}

/// Throttle override for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SpeedCommand {
    #[default]
    None,
    Accelerate,
    Decelerate,
}

impl SpeedCommand {
    pub fn from_keys(accelerate: bool, decelerate: bool) -> Self {
        match (accelerate, decelerate) {
            (true, false) => SpeedCommand::Accelerate,
            (false, true) => SpeedCommand::Decelerate,
            _ => SpeedCommand::None,
        }
    }
}

/// Flight controls decoded for a single frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlightControls {
    pub turn: TurnCommand,
    pub pitch: PitchCommand,
    pub speed: SpeedCommand,
}

/// What the pilot did this frame, handed to the dampers as a value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlOutcome {
    /// A turn command was applied this frame
    pub turning: bool,
    /// An accelerate or decelerate command was applied this frame
    pub speed_overridden: bool,
}

/// Apply pitch, turn and throttle commands to the aircraft.
///
/// Roll is clamped to `[-roll_limit, roll_limit]` after the turn update and
/// speed to the aircraft's limits after the throttle update. Position is not
/// touched; call [`advance`] once the dampers have run.
pub fn apply_controls(
    aircraft: &mut AircraftState,
    tuning: &FlightTuning,
    controls: &FlightControls,
    dt: f32,
) -> ControlOutcome {
    let mut outcome = ControlOutcome::default();

    match controls.pitch {
        PitchCommand::Up => aircraft.attitude.pitch -= tuning.pitch_rate * dt,
        PitchCommand::Down => aircraft.attitude.pitch += tuning.pitch_rate * dt,
        PitchCommand::None => {}
    }

    if controls.turn != TurnCommand::None {
        outcome.turning = true;
        let direction = controls.turn.direction();
        let attitude = &mut aircraft.attitude;
        attitude.yaw += tuning.yaw_rate * direction * dt;
        attitude.roll = (attitude.roll - tuning.roll_rate * direction * dt)
            .clamp(-tuning.roll_limit, tuning.roll_limit);
    }

    match controls.speed {
        SpeedCommand::Accelerate => {
            outcome.speed_overridden = true;
            aircraft.speed = (aircraft.speed + tuning.accel_rate * dt).min(aircraft.limits.max);
        }
        SpeedCommand::Decelerate => {
            outcome.speed_overridden = true;
            aircraft.speed = (aircraft.speed - tuning.accel_rate * dt).max(aircraft.limits.min);
        }
        SpeedCommand::None => {}
    }

    outcome
}

/// Move the aircraft along its current forward vector.
pub fn advance(aircraft: &mut AircraftState, dt: f32) {
    aircraft.position += aircraft.forward() * aircraft.speed * dt;
}
