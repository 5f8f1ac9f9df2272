//! Camera Module
//!
//! Camera rig attached to the player aircraft.
//! This module is window-system agnostic - it only deals with camera state and math.

pub mod rig;

pub use rig::{CameraMode, CameraPose, CameraRig, CameraRigConfig};
