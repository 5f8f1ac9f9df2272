//! Bomb Run
//!
//! The whole simulation for one player: aircraft, bomb, target ship, hit
//! counter and camera. [`BombRun::step`] advances everything by one frame.
//!
//! # Frame Order
//!
//! 1. Camera mode and mouse look
//! 2. Flight model (controls, roll damper, speed governor, position)
//! 3. Bomb release, then reset, against the updated aircraft
//! 4. Bomb follow or free fall, then the hit test
//! 5. Hit counter and explosion marker
//!
//! # Example
//!
//! ```ignore
//! let mut run = BombRun::new(SimConfig::default());
//! let report = run.step(dt, &input.poll());
//! if report.hit.is_some() {
//!     window.set_title(&run.title());
//! }
//! ```

use glam::Vec3;
use tracing::{debug, info};

use super::config::{ConfigError, SimConfig};
use crate::camera::{CameraMode, CameraRig};
use crate::flight::{AircraftState, ControlOutcome, FlightModel};
use crate::input::FrameCommands;
use crate::physics::{BallisticsConfig, Bomb, BombEvent, TargetVolume};

/// Number of distinct bomb hits since startup. Never decreases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitCounter {
    count: u32,
}

impl HitCounter {
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Count one hit and return the new total.
    pub fn record(&mut self) -> u32 {
        self.count = self.count.saturating_add(1);
        self.count
    }
}

/// Explosion marker. Once shown it stays until the next hit moves it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ExplosionDisplay {
    pub visible: bool,
    /// Detonation point (bomb position at contact)
    pub position: Vec3,
}

impl ExplosionDisplay {
    pub fn trigger(&mut self, position: Vec3) {
        self.visible = true;
        self.position = position;
    }
}

/// What happened during one [`BombRun::step`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameReport {
    pub controls: ControlOutcome,
    pub released: bool,
    pub reset: bool,
    /// Contact point, on the frame a new hit was scored
    pub hit: Option<Vec3>,
    pub camera_changed: bool,
    pub exit_requested: bool,
}

/// Simulation state for the dive-bomber scene.
#[derive(Debug, Clone)]
pub struct BombRun {
    pub config: SimConfig,
    pub flight: FlightModel,
    pub aircraft: AircraftState,
    pub bomb: Bomb,
    pub ballistics: BallisticsConfig,
    pub target: TargetVolume,
    pub hits: HitCounter,
    pub explosion: ExplosionDisplay,
    pub show_hitboxes: bool,
    pub camera: CameraRig,
}

impl Default for BombRun {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}

impl BombRun {
    /// Validate `config` and build a run from it.
    pub fn try_new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Build a run without validating `config`.
    ///
    /// Configs from [`SimConfig::load`] or [`SimConfig::from_json_str`] are
    /// already validated. Use [`BombRun::try_new`] for hand-built ones: an
    /// unchecked config can break the speed and roll limits.
    pub fn new(config: SimConfig) -> Self {
        let aircraft = config.aircraft.spawn();
        let mut bomb = config.bomb.spawn();
        bomb.follow(&aircraft);

        Self {
            flight: FlightModel::new(config.aircraft.tuning()),
            aircraft,
            bomb,
            ballistics: config.bomb.ballistics(),
            target: config.target.volume(),
            hits: HitCounter::default(),
            explosion: ExplosionDisplay::default(),
            show_hitboxes: false,
            camera: CameraRig::new(config.camera.rig()),
            config,
        }
    }

    /// Advance the simulation by `dt` seconds.
    pub fn step(&mut self, dt: f32, commands: &FrameCommands) -> FrameReport {
        let mut report = FrameReport {
            exit_requested: commands.exit,
            ..Default::default()
        };

        if let Some(mode) = commands.camera {
            report.camera_changed = self.camera.set_mode(mode);
            if report.camera_changed {
                debug!(?mode, "camera mode changed");
            }
        }
        self.camera.apply_look(&commands.look);

        if commands.toggle_hitboxes {
            self.show_hitboxes = !self.show_hitboxes;
            debug!(visible = self.show_hitboxes, "hitboxes toggled");
        }

        report.controls = self.flight.step(&mut self.aircraft, &commands.flight, dt);

        // Release before reset: pressing both in one frame leaves the bomb attached
        if commands.release_bomb && self.bomb.release(&self.aircraft) {
            report.released = true;
            debug!(
                position = ?self.bomb.position,
                velocity = ?self.bomb.velocity,
                "bomb released"
            );
        }
        if commands.reset_bomb {
            self.bomb.reset();
            report.reset = true;
            debug!("bomb reset");
        }

        if let BombEvent::Hit { position } =
            self.bomb.update(&self.aircraft, &self.ballistics, &self.target, dt)
        {
            let total = self.hits.record();
            self.explosion.trigger(position);
            report.hit = Some(position);
            info!(total, ?position, "Hit Target!");
        }

        report
    }

    pub fn camera_mode(&self) -> CameraMode {
        self.camera.mode
    }

    /// Window title with the current hit count.
    pub fn title(&self) -> String {
        format!("{} - Hit: {}", self.config.window.title, self.hits.count())
    }
}
