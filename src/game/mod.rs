//! Game Module
//!
//! The dive-bomber scene built on the engine modules: configuration, the
//! per-frame simulation and the draw list it produces.

pub mod bomb_run;
pub mod config;
pub mod scene;

pub use bomb_run::{BombRun, ExplosionDisplay, FrameReport, HitCounter};
pub use config::{ConfigError, SimConfig};
pub use scene::{SceneBuilder, SceneFrame};
