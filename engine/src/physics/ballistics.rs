//! Ballistics simulation for the aircraft's bomb
//!
//! The bomb is a two-phase state machine. While [`BombPhase::Attached`] it rides
//! a fixed mount point under the aircraft and copies its attitude. Once
//! released it falls freely under gravity with the velocity the aircraft had at
//! the moment of release. No air drag.
//!
//! # Example
//!
//! ```ignore
//! use dive_bomber_engine::physics::ballistics::{Bomb, BallisticsConfig};
//! use glam::Vec3;
//!
//! let config = BallisticsConfig::default();
//! let mut bomb = Bomb::new(Vec3::new(0.0, -0.5, 1.8), 0.3);
//! bomb.follow(&aircraft);
//! bomb.release(&aircraft);
//! let event = bomb.update(&aircraft, &config, &ship, dt);
//! ```

use glam::Vec3;

use super::collision::TargetVolume;
use crate::flight::{AircraftState, Attitude};

/// Configuration for the ballistics environment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallisticsConfig {
    /// Gravity acceleration vector (units/s²).
    /// Earth default: Vec3::new(0.0, -9.81, 0.0)
    pub gravity: Vec3,
}

impl Default for BallisticsConfig {
    fn default() -> Self {
        Self {
            gravity: Vec3::new(0.0, -9.81, 0.0),
        }
    }
}

impl BallisticsConfig {
    /// Create a config with vertical gravity `g` (negative pulls down).
    pub fn with_vertical_gravity(g: f32) -> Self {
        Self {
            gravity: Vec3::new(0.0, g, 0.0),
        }
    }
}

/// Which phase of its life the bomb is in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BombPhase {
    /// Carried under the aircraft
    #[default]
    Attached,
    /// Falling freely
    Released,
}

/// Result of advancing the bomb by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BombEvent {
    /// Still on the mount
    Carried,
    /// Falling, no new contact this frame
    Falling,
    /// First contact with the target since release
    Hit {
        /// Bomb position at the moment of contact
        position: Vec3,
    },
}

/// The droppable bomb.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bomb {
    pub phase: BombPhase,
    /// World-space position
    pub position: Vec3,
    /// Copy of the aircraft attitude while attached, frozen once released
    pub attitude: Attitude,
    /// Zero while attached
    pub velocity: Vec3,
    /// Sticky until the next reset
    pub hit: bool,
    /// Radius of the collision sphere
    pub hit_radius: f32,
    /// Mount point in aircraft-local coordinates
    pub mount_offset: Vec3,
}

impl Default for Bomb {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, -0.5, 1.8), 0.3)
    }
}

impl Bomb {
    /// Create an attached bomb. Call [`Bomb::follow`] to place it on an aircraft.
    pub fn new(mount_offset: Vec3, hit_radius: f32) -> Self {
        Self {
            phase: BombPhase::Attached,
            position: Vec3::ZERO,
            attitude: Attitude::LEVEL,
            velocity: Vec3::ZERO,
            hit: false,
            hit_radius,
            mount_offset,
        }
    }

    #[inline]
    pub fn is_attached(&self) -> bool {
        self.phase == BombPhase::Attached
    }

    /// Snap the bomb to the aircraft mount point. Ignored once released.
    pub fn follow(&mut self, aircraft: &AircraftState) {
        if !self.is_attached() {
            return;
        }
        self.position = aircraft.local_to_world(self.mount_offset);
        self.attitude = aircraft.attitude;
    }

    /// Drop the bomb.
    ///
    /// The exit velocity is the aircraft's forward vector times its speed at
    /// this instant. Returns false, with no effect, if already released.
    pub fn release(&mut self, aircraft: &AircraftState) -> bool {
        if !self.is_attached() {
            return false;
        }
        self.follow(aircraft);
        self.phase = BombPhase::Released;
        self.velocity = aircraft.velocity();
        true
    }

    /// Return the bomb to the mount, clearing velocity and the hit flag.
    pub fn reset(&mut self) {
        self.phase = BombPhase::Attached;
        self.velocity = Vec3::ZERO;
        self.hit = false;
    }

    /// Integrate free fall over `dt`. No effect while attached.
    ///
    /// Semi-implicit Euler: velocity is updated before position.
    pub fn integrate(&mut self, config: &BallisticsConfig, dt: f32) {
        if self.is_attached() {
            return;
        }
        self.velocity += config.gravity * dt;
        self.position += self.velocity * dt;
    }

    /// Test the bomb against `target`, latching the hit flag on first contact.
    ///
    /// Returns the contact position only on the frame the flag goes from false
    /// to true.
    pub fn check_hit(&mut self, target: &TargetVolume) -> Option<Vec3> {
        if self.is_attached() || self.hit {
            return None;
        }
        if target.intersects_sphere(self.position, self.hit_radius) {
            self.hit = true;
            return Some(self.position);
        }
        None
    }

    /// Advance the bomb by one frame.
    pub fn update(
        &mut self,
        aircraft: &AircraftState,
        config: &BallisticsConfig,
        target: &TargetVolume,
        dt: f32,
    ) -> BombEvent {
        match self.phase {
            BombPhase::Attached => {
                self.follow(aircraft);
                BombEvent::Carried
            }
            BombPhase::Released => {
                self.integrate(config, dt);
                match self.check_hit(target) {
                    Some(position) => BombEvent::Hit { position },
                    None => BombEvent::Falling,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flight::SpeedLimits;

    fn aircraft_at(position: Vec3) -> AircraftState {
        AircraftState::new(position, Attitude::LEVEL, SpeedLimits::default())
    }

    #[test]
    fn test_ballistics_config_default() {
        let config = BallisticsConfig::default();
        assert_eq!(config.gravity.y, -9.81);
        assert_eq!(BallisticsConfig::with_vertical_gravity(-1.6).gravity, Vec3::new(0.0, -1.6, 0.0));
    }

    #[test]
    fn test_bomb_default_is_attached() {
        let bomb = Bomb::default();
        assert!(bomb.is_attached());
        assert_eq!(bomb.velocity, Vec3::ZERO);
        assert!(!bomb.hit);
    }

    #[test]
    fn test_attached_bomb_tracks_mount_point() {
        let mut aircraft = aircraft_at(Vec3::new(10.0, 100.0, 0.0));
        aircraft.attitude = Attitude::new(90.0, 0.0, 0.0);
        let mut bomb = Bomb::new(Vec3::new(0.0, -0.5, 2.0), 0.3);
        bomb.follow(&aircraft);
        // Local +Z (tail) maps to world +X after a 90 degree yaw
        assert!(bomb.position.abs_diff_eq(Vec3::new(12.0, 99.5, 0.0), 1e-4), "{:?}", bomb.position);
        assert_eq!(bomb.attitude, aircraft.attitude);
    }

    #[test]
    fn test_release_snapshots_velocity() {
        let mut aircraft = aircraft_at(Vec3::ZERO);
        aircraft.speed = 60.0;
        let mut bomb = Bomb::default();
        assert!(bomb.release(&aircraft));
        assert_eq!(bomb.phase, BombPhase::Released);
        assert!(bomb.velocity.abs_diff_eq(Vec3::new(0.0, 0.0, -60.0), 1e-4));

        // A second release is ignored
        aircraft.speed = 80.0;
        assert!(!bomb.release(&aircraft));
        assert!(bomb.velocity.abs_diff_eq(Vec3::new(0.0, 0.0, -60.0), 1e-4));
    }

    #[test]
    fn test_released_bomb_ignores_aircraft() {
        let mut aircraft = aircraft_at(Vec3::ZERO);
        let mut bomb = Bomb::default();
        bomb.release(&aircraft);
        let frozen = bomb.attitude;
        aircraft.attitude = Attitude::new(45.0, 10.0, -30.0);
        aircraft.position = Vec3::splat(500.0);
        bomb.follow(&aircraft);
        assert_eq!(bomb.attitude, frozen);
        assert!(bomb.position.length() < 5.0);
    }

    #[test]
    fn test_integrate_applies_gravity() {
        let config = BallisticsConfig::default();
        let mut bomb = Bomb::default();
        bomb.phase = BombPhase::Released;
        bomb.integrate(&config, 0.5);
        assert!((bomb.velocity.y + 4.905).abs() < 1e-4);
        assert!((bomb.position.y + 2.4525).abs() < 1e-4);
    }

    #[test]
    fn test_integrate_noop_while_attached() {
        let mut bomb = Bomb::default();
        bomb.integrate(&BallisticsConfig::default(), 1.0);
        assert_eq!(bomb.velocity, Vec3::ZERO);
        assert_eq!(bomb.position, Vec3::ZERO);
    }

    #[test]
    fn test_hit_is_edge_triggered() {
        let target = TargetVolume::new(Vec3::ZERO, Vec3::splat(10.0));
        let mut bomb = Bomb::default();
        bomb.phase = BombPhase::Released;
        bomb.position = Vec3::new(0.0, 5.0, 0.0);
        assert_eq!(bomb.check_hit(&target), Some(Vec3::new(0.0, 5.0, 0.0)));
        assert!(bomb.hit);
        assert_eq!(bomb.check_hit(&target), None);
        assert!(bomb.hit);
    }

    #[test]
    fn test_attached_bomb_never_hits() {
        let target = TargetVolume::new(Vec3::ZERO, Vec3::splat(10.0));
        let mut bomb = Bomb::default();
        assert_eq!(bomb.check_hit(&target), None);
        assert!(!bomb.hit);
    }

    #[test]
    fn test_reset_clears_flight_state() {
        let mut bomb = Bomb::default();
        bomb.phase = BombPhase::Released;
        bomb.velocity = Vec3::new(3.0, -400.0, 12.0);
        bomb.hit = true;
        bomb.reset();
        assert!(bomb.is_attached());
        assert_eq!(bomb.velocity, Vec3::ZERO);
        assert!(!bomb.hit);
    }

    #[test]
    fn test_update_reports_phase() {
        let aircraft = aircraft_at(Vec3::new(0.0, 100.0, 0.0));
        let config = BallisticsConfig::default();
        let target = TargetVolume::new(Vec3::ZERO, Vec3::ONE);
        let mut bomb = Bomb::default();
        assert_eq!(bomb.update(&aircraft, &config, &target, 0.1), BombEvent::Carried);
        bomb.release(&aircraft);
        assert_eq!(bomb.update(&aircraft, &config, &target, 0.1), BombEvent::Falling);
    }
}
