//! Flight Module
//!
//! Arcade flight model for the player aircraft. No aerodynamics: the aircraft
//! flies wherever its nose points at its current airspeed.
//!
//! # Unit System
//!
//! - Angles in degrees
//! - Angular rates in degrees/second
//! - Distances in world units, speeds in units/second
//!
//! # Frame Order
//!
//! [`FlightModel::step`] runs the pieces in the order the rest of the
//! simulation relies on: controls, roll damper, speed governor, then position.
//!
//! # Submodules
//!
//! - [`attitude`] - Yaw/pitch/roll and the rotation they describe
//! - [`aircraft`] - Aircraft state, speed limits and tuning
//! - [`integrator`] - Per-frame control commands and kinematic integration
//! - [`governor`] - Roll damper and speed governor

pub mod aircraft;
pub mod attitude;
pub mod governor;
pub mod integrator;

pub use aircraft::{AircraftState, FlightTuning, SpeedLimits};
pub use attitude::Attitude;
pub use governor::{RollDamper, SpeedGovernor, approach};
pub use integrator::{
    ControlOutcome, FlightControls, PitchCommand, SpeedCommand, TurnCommand, advance,
    apply_controls,
};

/// Runs one frame of the flight model.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlightModel {
    pub tuning: FlightTuning,
    roll_damper: RollDamper,
    speed_governor: SpeedGovernor,
}

impl FlightModel {
    pub fn new(tuning: FlightTuning) -> Self {
        Self {
            tuning,
            ..Default::default()
        }
    }

    /// Update attitude, speed and position for one frame of `dt` seconds.
    pub fn step(&self, aircraft: &mut AircraftState, controls: &FlightControls, dt: f32) -> ControlOutcome {
        let outcome = apply_controls(aircraft, &self.tuning, controls, dt);
        self.roll_damper.apply(aircraft, &self.tuning, outcome, dt);
        self.speed_governor.apply(aircraft, &self.tuning, outcome, dt);
        advance(aircraft, dt);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_turn_frame_skips_roll_damping() {
        let model = FlightModel::default();
        let mut aircraft = AircraftState::new(Vec3::ZERO, Attitude::LEVEL, SpeedLimits::default());
        let controls = FlightControls {
            turn: TurnCommand::Left,
            ..Default::default()
        };
        model.step(&mut aircraft, &controls, 0.5);
        // Full roll rate, no damping on the same frame
        assert!((aircraft.attitude.roll + 10.0).abs() < 1e-5);

        model.step(&mut aircraft, &FlightControls::default(), 0.5);
        // Damped back by 16 deg/s * 0.5 s
        assert!((aircraft.attitude.roll + 2.0).abs() < 1e-5);
    }
}
