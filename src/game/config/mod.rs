//! Config Module
//!
//! Centralized configuration for the bomb run: aircraft, bomb, target,
//! camera and window parameters.

pub mod error;
pub mod sim_config;

pub use error::ConfigError;
pub use sim_config::{
    AircraftConfig, BombConfig, CameraConfig, ExplosionConfig, SimConfig, TargetConfig,
    WindowConfig,
};
