//! Roll Damper and Speed Governor
//!
//! Both relax a quantity toward a setpoint at a constant rate whenever the
//! pilot is not actively driving it, and never step past the setpoint.

use super::aircraft::{AircraftState, FlightTuning};
use super::integrator::ControlOutcome;

/// Move `value` toward `target` by at most `step`, without crossing it.
#[inline]
pub fn approach(value: f32, target: f32, step: f32) -> f32 {
    if value > target {
        (value - step).max(target)
    } else if value < target {
        (value + step).min(target)
    } else {
        value
    }
}

/// Levels the wings when no turn command was given this frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct RollDamper;

impl RollDamper {
    /// Returns true if the damper acted this frame.
    pub fn apply(
        &self,
        aircraft: &mut AircraftState,
        tuning: &FlightTuning,
        outcome: ControlOutcome,
        dt: f32,
    ) -> bool {
        if outcome.turning {
            return false;
        }
        let roll = &mut aircraft.attitude.roll;
        *roll = approach(*roll, 0.0, tuning.damped_roll_rate() * dt);
        true
    }
}

/// Returns airspeed to cruise when the throttle is left alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpeedGovernor;

impl SpeedGovernor {
    /// Returns true if the governor acted this frame.
    pub fn apply(
        &self,
        aircraft: &mut AircraftState,
        tuning: &FlightTuning,
        outcome: ControlOutcome,
        dt: f32,
    ) -> bool {
        if outcome.speed_overridden {
            return false;
        }
        let cruise = aircraft.limits.cruise;
        aircraft.speed = approach(aircraft.speed, cruise, tuning.relax_rate() * dt);
        true
    }
}
