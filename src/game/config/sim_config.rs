//! Simulation Configuration
//!
//! Every tunable of the bomb run in one place. `Default` reproduces the
//! shipped scene; a JSON file can override any subset of fields.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::camera::CameraRigConfig;
use crate::flight::{AircraftState, Attitude, FlightTuning, SpeedLimits};
use crate::physics::{BallisticsConfig, Bomb, TargetVolume};

/// Player aircraft: spawn pose, speed envelope and control rates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AircraftConfig {
    /// World-space spawn position
    pub start_position: Vec3,
    /// Spawn heading (degrees)
    pub start_yaw: f32,
    pub cruise_speed: f32,
    pub min_speed: f32,
    pub max_speed: f32,
    /// Throttle rate (units/s²)
    pub accel_rate: f32,
    /// Degrees per second
    pub yaw_rate: f32,
    pub pitch_rate: f32,
    pub roll_rate: f32,
    /// Maximum bank angle (degrees)
    pub roll_limit: f32,
    pub roll_damping_factor: f32,
    pub speed_relax_factor: f32,
    /// Uniform scale of the aircraft model
    pub mesh_scale: f32,
}

impl Default for AircraftConfig {
    fn default() -> Self {
        Self {
            start_position: Vec3::new(60.0, 400.0, 8000.0),
            start_yaw: 0.0,
            cruise_speed: 50.0,
            min_speed: 30.0,
            max_speed: 80.0,
            accel_rate: 10.0,
            yaw_rate: 20.0,
            pitch_rate: 20.0,
            roll_rate: 20.0,
            roll_limit: 45.0,
            roll_damping_factor: 0.8,
            speed_relax_factor: 0.5,
            mesh_scale: 0.2,
        }
    }
}

impl AircraftConfig {
    pub fn limits(&self) -> SpeedLimits {
        SpeedLimits {
            cruise: self.cruise_speed,
            min: self.min_speed,
            max: self.max_speed,
        }
    }

    pub fn tuning(&self) -> FlightTuning {
        FlightTuning {
            yaw_rate: self.yaw_rate,
            pitch_rate: self.pitch_rate,
            roll_rate: self.roll_rate,
            roll_limit: self.roll_limit,
            accel_rate: self.accel_rate,
            roll_damping_factor: self.roll_damping_factor,
            speed_relax_factor: self.speed_relax_factor,
        }
    }

    /// Aircraft at its spawn pose, flying at cruise speed.
    pub fn spawn(&self) -> AircraftState {
        AircraftState::new(
            self.start_position,
            Attitude::new(self.start_yaw, 0.0, 0.0),
            self.limits(),
        )
    }
}

/// The droppable bomb.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BombConfig {
    /// Mount point in aircraft-local coordinates
    pub mount_offset: Vec3,
    /// Vertical acceleration (negative = down)
    pub gravity: f32,
    /// Collision sphere radius
    pub hit_radius: f32,
    pub mesh_scale: f32,
}

impl Default for BombConfig {
    fn default() -> Self {
        Self {
            mount_offset: Vec3::new(0.0, -0.5, 1.8),
            gravity: -9.81,
            hit_radius: 0.3,
            mesh_scale: 5.0,
        }
    }
}

impl BombConfig {
    pub fn ballistics(&self) -> BallisticsConfig {
        BallisticsConfig::with_vertical_gravity(self.gravity)
    }

    pub fn spawn(&self) -> Bomb {
        Bomb::new(self.mount_offset, self.hit_radius)
    }
}

/// The target ship and its collision box.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    /// Ship model origin and hitbox centre
    pub center: Vec3,
    pub half_extents: Vec3,
    pub mesh_scale: f32,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            center: Vec3::new(0.0, -5.0, 0.0),
            half_extents: Vec3::new(15.0, 10.0, 100.0),
            mesh_scale: 60.0,
        }
    }
}

impl TargetConfig {
    pub fn volume(&self) -> TargetVolume {
        TargetVolume::new(self.center, self.half_extents)
    }
}

/// Explosion effect shown at the detonation point.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplosionConfig {
    pub scale: f32,
    /// Added to the detonation point when drawing
    pub offset: Vec3,
}

impl Default for ExplosionConfig {
    fn default() -> Self {
        Self {
            scale: 5.0,
            offset: Vec3::new(0.0, -10.0, 0.0),
        }
    }
}

/// Camera rig. Angles in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub cockpit_offset: Vec3,
    pub chase_offset: Vec3,
    /// Degrees per pixel
    pub mouse_sensitivity: f32,
    pub look_pitch_limit: f32,
    pub fov: f32,
    pub min_fov: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        let rig = CameraRigConfig::default();
        Self {
            cockpit_offset: rig.cockpit_offset,
            chase_offset: rig.chase_offset,
            mouse_sensitivity: rig.sensitivity,
            look_pitch_limit: rig.pitch_limit,
            fov: rig.max_fov,
            min_fov: rig.min_fov,
            near: rig.near,
            far: rig.far,
        }
    }
}

impl CameraConfig {
    pub fn rig(&self) -> CameraRigConfig {
        CameraRigConfig {
            cockpit_offset: self.cockpit_offset,
            chase_offset: self.chase_offset,
            sensitivity: self.mouse_sensitivity,
            pitch_limit: self.look_pitch_limit,
            max_fov: self.fov,
            min_fov: self.min_fov,
            near: self.near,
            far: self.far,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "Dive Bomber".to_string(),
        }
    }
}

impl WindowConfig {
    pub fn aspect(&self) -> f32 {
        self.width.max(1) as f32 / self.height.max(1) as f32
    }
}

/// Central configuration for the whole bomb run.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub aircraft: AircraftConfig,
    pub bomb: BombConfig,
    pub target: TargetConfig,
    pub explosion: ExplosionConfig,
    pub camera: CameraConfig,
    pub window: WindowConfig,
}

impl SimConfig {
    /// Parse a JSON document and validate it. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the cross-field constraints the simulation relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let a = &self.aircraft;
        if !(a.min_speed <= a.cruise_speed && a.cruise_speed <= a.max_speed) {
            return Err(ConfigError::invalid(format!(
                "aircraft speeds must satisfy min <= cruise <= max (got {} / {} / {})",
                a.min_speed, a.cruise_speed, a.max_speed
            )));
        }
        if a.min_speed < 0.0 {
            return Err(ConfigError::invalid("aircraft.min_speed must not be negative"));
        }
        for (name, rate) in [
            ("accel_rate", a.accel_rate),
            ("yaw_rate", a.yaw_rate),
            ("pitch_rate", a.pitch_rate),
            ("roll_rate", a.roll_rate),
        ] {
            if !(rate > 0.0) {
                return Err(ConfigError::invalid(format!("aircraft.{name} must be positive (got {rate})")));
            }
        }
        // A negative factor would push roll and speed away from their setpoints
        for (name, factor) in [
            ("roll_damping_factor", a.roll_damping_factor),
            ("speed_relax_factor", a.speed_relax_factor),
        ] {
            if !(factor.is_finite() && factor >= 0.0) {
                return Err(ConfigError::invalid(format!(
                    "aircraft.{name} must be finite and not negative (got {factor})"
                )));
            }
        }
        if !(a.roll_limit > 0.0 && a.roll_limit <= 90.0) {
            return Err(ConfigError::invalid(format!(
                "aircraft.roll_limit must be in (0, 90] (got {})",
                a.roll_limit
            )));
        }
        if !(self.bomb.hit_radius > 0.0) {
            return Err(ConfigError::invalid("bomb.hit_radius must be positive"));
        }
        if self.target.half_extents.min_element() <= 0.0 {
            return Err(ConfigError::invalid("target.half_extents must be positive on every axis"));
        }
        let c = &self.camera;
        if !(c.near > 0.0 && c.near < c.far) {
            return Err(ConfigError::invalid(format!(
                "camera planes must satisfy 0 < near < far (got {} / {})",
                c.near, c.far
            )));
        }
        if !(c.min_fov > 0.0 && c.min_fov <= c.fov && c.fov < 180.0) {
            return Err(ConfigError::invalid("camera fov must satisfy 0 < min_fov <= fov < 180"));
        }
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::invalid("window size must be non-zero"));
        }
        Ok(())
    }
}
