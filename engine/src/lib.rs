//! Dive Bomber Engine Library
//!
//! Flight, ballistics and collision core for a dive-bomber simulation.
//! Nothing in here talks to a GPU: each frame ends in a draw list that any
//! backend implementing [`render::Renderer`] can consume.
//!
//! # Modules
//!
//! - [`flight`] - Arcade flight model for the player aircraft
//! - [`physics`] - Bomb ballistics and sphere/box collision
//! - [`input`] - Platform-agnostic keyboard and mouse handling
//! - [`camera`] - Cockpit and chase camera rig
//! - [`render`] - Draw-list types and renderer hand-off
//! - [`time`] - Frame delta timing
//! - [`game`] - The bomb run itself, its configuration and scene builder
//!
//! # Example
//!
//! ```ignore
//! use dive_bomber_engine::game::{BombRun, SceneBuilder, SimConfig};
//! use dive_bomber_engine::input::{InputState, KeyCode};
//! use dive_bomber_engine::render::RecordingRenderer;
//!
//! let mut run = BombRun::new(SimConfig::default());
//! let mut input = InputState::new();
//! let scene = SceneBuilder::default();
//! let mut renderer = RecordingRenderer::new();
//!
//! input.keyboard.handle_key(KeyCode::Space, true);
//! run.step(1.0 / 60.0, &input.poll());
//! scene.build(&run).submit(&mut renderer);
//! ```

pub mod camera;
pub mod flight;
pub mod input;
pub mod physics;
pub mod render;
pub mod time;

// Game-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

pub use camera::{CameraMode, CameraRig};
pub use flight::{AircraftState, Attitude, FlightModel};
pub use input::{FrameCommands, InputState, KeyCode, KeyboardState};
pub use physics::{Bomb, TargetVolume, sphere_aabb_intersect};
pub use time::FrameClock;
