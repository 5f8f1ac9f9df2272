//! Aircraft Camera Rig
//!
//! A camera bolted to the airframe: either in the cockpit or behind the tail.
//! Mouse look adds yaw/pitch offsets relative to the aircraft, scroll zooms by
//! narrowing the field of view.

use glam::{Mat4, Quat, Vec3};

use crate::flight::AircraftState;
use crate::input::LookDelta;

/// Which mount point the camera sits on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CameraMode {
    /// In the cockpit
    #[default]
    FirstPerson,
    /// Behind and above the tail
    ThirdPerson,
}

/// Tunables for the rig. Angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRigConfig {
    /// Cockpit eye point in aircraft-local coordinates
    pub cockpit_offset: Vec3,
    /// Chase eye point in aircraft-local coordinates
    pub chase_offset: Vec3,
    /// Degrees of look rotation per pixel of mouse motion
    pub sensitivity: f32,
    /// Limit for the look pitch offset in either direction
    pub pitch_limit: f32,
    /// Widest (default) vertical field of view
    pub max_fov: f32,
    /// Narrowest field of view reachable by zooming
    pub min_fov: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraRigConfig {
    fn default() -> Self {
        Self {
            cockpit_offset: Vec3::new(0.0, 0.9, -0.45),
            chase_offset: Vec3::new(0.0, 1.8, 10.0),
            sensitivity: 0.05,
            pitch_limit: 89.0,
            max_fov: 45.0,
            min_fov: 1.0,
            near: 0.1,
            far: 8000.0,
        }
    }
}

/// Camera pose derived from the aircraft each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub eye: Vec3,
    pub front: Vec3,
    pub up: Vec3,
}

impl CameraPose {
    /// Right-handed view matrix.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.eye, self.front, self.up)
    }
}

#[derive(Debug, Clone)]
pub struct CameraRig {
    pub config: CameraRigConfig,
    pub mode: CameraMode,
    /// Look yaw relative to the airframe (degrees)
    pub yaw_offset: f32,
    /// Look pitch relative to the airframe (degrees, clamped)
    pub pitch_offset: f32,
    /// Current vertical field of view (degrees)
    pub fov: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new(CameraRigConfig::default())
    }
}

impl CameraRig {
    pub fn new(config: CameraRigConfig) -> Self {
        Self {
            config,
            mode: CameraMode::FirstPerson,
            yaw_offset: 0.0,
            pitch_offset: 0.0,
            fov: config.max_fov,
        }
    }

    /// Switch mount point. Returns true if the mode changed.
    pub fn set_mode(&mut self, mode: CameraMode) -> bool {
        let changed = self.mode != mode;
        self.mode = mode;
        changed
    }

    /// Apply one frame of mouse look and scroll zoom.
    pub fn apply_look(&mut self, look: &LookDelta) {
        let limit = self.config.pitch_limit;
        self.yaw_offset += look.dx * self.config.sensitivity;
        self.pitch_offset = (self.pitch_offset + look.dy * self.config.sensitivity).clamp(-limit, limit);
        self.fov = (self.fov - look.scroll).clamp(self.config.min_fov, self.config.max_fov);
    }

    /// Eye offset for the current mode, in aircraft-local coordinates.
    pub fn mount_offset(&self) -> Vec3 {
        match self.mode {
            CameraMode::FirstPerson => self.config.cockpit_offset,
            CameraMode::ThirdPerson => self.config.chase_offset,
        }
    }

    /// Camera rotation: aircraft rotation followed by the look offsets.
    pub fn rotation(&self, aircraft: &AircraftState) -> Quat {
        aircraft.attitude.rotation()
            * Quat::from_rotation_y(self.yaw_offset.to_radians())
            * Quat::from_rotation_x(self.pitch_offset.to_radians())
    }

    pub fn pose(&self, aircraft: &AircraftState) -> CameraPose {
        let rotation = self.rotation(aircraft);
        CameraPose {
            eye: aircraft.local_to_world(self.mount_offset()),
            front: (rotation * Vec3::NEG_Z).normalize(),
            up: (rotation * Vec3::Y).normalize(),
        }
    }

    /// Right-handed perspective projection for a viewport of the given aspect ratio.
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov.to_radians(), aspect, self.config.near, self.config.far)
    }
}
