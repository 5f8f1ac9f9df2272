//! Aircraft State
//!
//! Position, attitude and airspeed of the player aircraft, plus the tuning
//! constants the integrator and dampers read each frame.

use glam::Vec3;

use super::attitude::Attitude;

/// Airspeed bounds and the cruise setpoint (world units per second).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedLimits {
    pub cruise: f32,
    pub min: f32,
    pub max: f32,
}

impl Default for SpeedLimits {
    fn default() -> Self {
        Self {
            cruise: 50.0,
            min: 30.0,
            max: 80.0,
        }
    }
}

impl SpeedLimits {
    /// Clamp a speed into `[min, max]`. Inverted limits resolve to `max`.
    #[inline]
    pub fn clamp(&self, speed: f32) -> f32 {
        speed.max(self.min).min(self.max)
    }
}

/// Rates and factors that shape how the aircraft responds to controls.
///
/// Angular rates are in degrees per second, `accel_rate` in units/s².
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightTuning {
    pub yaw_rate: f32,
    pub pitch_rate: f32,
    pub roll_rate: f32,
    /// Maximum bank angle in either direction (degrees)
    pub roll_limit: f32,
    pub accel_rate: f32,
    /// Fraction of `roll_rate` used to level the wings when not turning
    pub roll_damping_factor: f32,
    /// Fraction of `accel_rate` used to return to cruise when not overridden
    pub speed_relax_factor: f32,
}

impl Default for FlightTuning {
    fn default() -> Self {
        Self {
            yaw_rate: 20.0,
            pitch_rate: 20.0,
            roll_rate: 20.0,
            roll_limit: 45.0,
            accel_rate: 10.0,
            roll_damping_factor: 0.8,
            speed_relax_factor: 0.5,
        }
    }
}

impl FlightTuning {
    /// Rate at which the roll damper levels the wings (degrees/s).
    pub fn damped_roll_rate(&self) -> f32 {
        self.roll_rate * self.roll_damping_factor
    }

    /// Rate at which the speed governor returns to cruise (units/s²).
    pub fn relax_rate(&self) -> f32 {
        self.accel_rate * self.speed_relax_factor
    }
}

/// Authoritative aircraft state, mutated once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AircraftState {
    /// World-space position
    pub position: Vec3,
    pub attitude: Attitude,
    /// Current airspeed, always within `limits`
    pub speed: f32,
    pub limits: SpeedLimits,
}

impl Default for AircraftState {
    fn default() -> Self {
        Self::new(Vec3::new(60.0, 400.0, 8000.0), Attitude::LEVEL, SpeedLimits::default())
    }
}

impl AircraftState {
    /// Spawn an aircraft flying at cruise speed.
    pub fn new(position: Vec3, attitude: Attitude, limits: SpeedLimits) -> Self {
        Self {
            position,
            attitude,
            speed: limits.clamp(limits.cruise),
            limits,
        }
    }

    /// Normalized direction of travel.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        self.attitude.forward()
    }

    /// Current velocity (forward * speed).
    pub fn velocity(&self) -> Vec3 {
        self.forward() * self.speed
    }

    /// World position of a point fixed to the airframe.
    pub fn local_to_world(&self, local: Vec3) -> Vec3 {
        self.position + self.attitude.rotate_offset(local)
    }
}
