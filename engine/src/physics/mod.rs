//! Physics module
//!
//! Bomb ballistics and the collision test used to score hits. Built on glam
//! math only, no external physics library.
//!
//! # Unit System
//!
//! - Distances in world units
//! - Velocities in units/s
//! - Accelerations in units/s²
//!
//! # Submodules
//!
//! - [`types`] - Core mathematical types re-exported from glam
//! - [`ballistics`] - Bomb state machine and free-fall integration
//! - [`collision`] - Sphere-vs-AABB test and the static target volume

pub mod ballistics;
pub mod collision;
pub mod types;

pub use ballistics::{BallisticsConfig, Bomb, BombEvent, BombPhase};
pub use collision::{TargetVolume, closest_point_on_aabb, sphere_aabb_intersect};
pub use types::{Mat4, Quat, Vec3};
