//! Aircraft Attitude
//!
//! Yaw/pitch/roll Euler angles in degrees and the rotation they describe.
//!
//! The rotation is composed in a fixed order: yaw about world Y, then pitch
//! about X with the sign inverted, then roll about Z with the sign inverted.
//! With this convention a positive pitch puts the nose down and a negative
//! roll banks the aircraft into a left turn.

use glam::{Mat4, Quat, Vec3};

/// Local forward axis of an unrotated aircraft.
pub const LOCAL_FORWARD: Vec3 = Vec3::NEG_Z;

/// Local up axis of an unrotated aircraft.
pub const LOCAL_UP: Vec3 = Vec3::Y;

/// Euler attitude in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Attitude {
    /// Heading around world Y (degrees, unbounded)
    pub yaw: f32,
    /// Nose up/down (degrees, unbounded, positive = nose down)
    pub pitch: f32,
    /// Bank angle (degrees)
    pub roll: f32,
}

impl Attitude {
    pub const LEVEL: Self = Self {
        yaw: 0.0,
        pitch: 0.0,
        roll: 0.0,
    };

    pub fn new(yaw: f32, pitch: f32, roll: f32) -> Self {
        Self { yaw, pitch, roll }
    }

    /// Rotation taking aircraft-local vectors to world space.
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw.to_radians())
            * Quat::from_rotation_x((-self.pitch).to_radians())
            * Quat::from_rotation_z((-self.roll).to_radians())
    }

    /// Rotation as a 4x4 matrix (no translation).
    pub fn rotation_matrix(&self) -> Mat4 {
        Mat4::from_quat(self.rotation())
    }

    /// Normalized world-space direction the nose points in.
    pub fn forward(&self) -> Vec3 {
        (self.rotation() * LOCAL_FORWARD).normalize()
    }

    /// Normalized world-space up direction of the airframe.
    pub fn up(&self) -> Vec3 {
        (self.rotation() * LOCAL_UP).normalize()
    }

    /// Transforms an aircraft-local offset into a world-space offset.
    pub fn rotate_offset(&self, local: Vec3) -> Vec3 {
        self.rotation() * local
    }
}
