//! Dive Bomber
//!
//! Opens a window, feeds keyboard and mouse input into the bomb run and
//! submits each frame's draw list to a logging renderer.
//!
//! Run with: cargo run --bin dive_bomber -- --config bomber.json
//!
//! Controls:
//! - W/S: Pitch up/down
//! - A/D: Turn left/right (banks into the turn)
//! - F/G: Accelerate/decelerate
//! - Space: Release bomb
//! - R: Reset bomb
//! - H: Toggle hitboxes
//! - 1/2: Cockpit/chase camera
//! - Mouse: Look around, scroll to zoom
//! - ESC: Exit
//!
//! Set `RUST_LOG=trace` to see every draw.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode as WinitKey, PhysicalKey};
use winit::window::{Window, WindowAttributes, WindowId};

use dive_bomber_engine::game::{BombRun, SceneBuilder, SimConfig};
use dive_bomber_engine::input::{InputState, KeyCode};
use dive_bomber_engine::render::TracingRenderer;
use dive_bomber_engine::time::FrameClock;

/// Pixels per scroll line for touchpads reporting pixel deltas.
const PIXELS_PER_LINE: f64 = 40.0;

#[derive(Parser, Debug)]
#[command(name = "dive_bomber", about = "Fly over the ship and drop the bomb on it")]
struct Cli {
    /// JSON config file; missing fields keep their defaults
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn map_key(key: WinitKey) -> KeyCode {
    match key {
        WinitKey::KeyA => KeyCode::A,
        WinitKey::KeyD => KeyCode::D,
        WinitKey::KeyF => KeyCode::F,
        WinitKey::KeyG => KeyCode::G,
        WinitKey::KeyH => KeyCode::H,
        WinitKey::KeyR => KeyCode::R,
        WinitKey::KeyS => KeyCode::S,
        WinitKey::KeyW => KeyCode::W,
        WinitKey::Space => KeyCode::Space,
        WinitKey::Digit1 => KeyCode::Digit1,
        WinitKey::Digit2 => KeyCode::Digit2,
        WinitKey::ArrowUp => KeyCode::ArrowUp,
        WinitKey::ArrowDown => KeyCode::ArrowDown,
        WinitKey::ArrowLeft => KeyCode::ArrowLeft,
        WinitKey::ArrowRight => KeyCode::ArrowRight,
        WinitKey::Escape => KeyCode::Escape,
        _ => KeyCode::Unknown,
    }
}

struct AppState {
    window: Window,
    run: BombRun,
    input: InputState,
    scene: SceneBuilder,
    renderer: TracingRenderer,
    clock: FrameClock,
    start: Instant,
    shown_hits: Option<u32>,
}

impl AppState {
    fn new(window: Window, config: SimConfig) -> Self {
        let scene = SceneBuilder::new(config.window.aspect());
        Self {
            window,
            run: BombRun::new(config),
            input: InputState::new(),
            scene,
            renderer: TracingRenderer::default(),
            clock: FrameClock::new(),
            start: Instant::now(),
            shown_hits: None,
        }
    }

    /// Run one frame. Returns false when the pilot asked to quit.
    fn update(&mut self) -> bool {
        let dt = self.clock.tick(self.start.elapsed().as_secs_f64());
        let commands = self.input.poll();
        let report = self.run.step(dt, &commands);

        self.scene.build(&self.run).submit(&mut self.renderer);

        let hits = self.run.hits.count();
        if self.shown_hits != Some(hits) {
            self.window.set_title(&self.run.title());
            self.shown_hits = Some(hits);
        }

        !report.exit_requested
    }
}

struct App {
    config: SimConfig,
    state: Option<AppState>,
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        let window_config = &self.config.window;
        let window_attrs = WindowAttributes::default()
            .with_title(window_config.title.clone())
            .with_inner_size(PhysicalSize::new(window_config.width, window_config.height));

        match event_loop.create_window(window_attrs) {
            Ok(window) => {
                info!(
                    width = window_config.width,
                    height = window_config.height,
                    "window created"
                );
                window.request_redraw();
                self.state = Some(AppState::new(window, self.config.clone()));
            }
            Err(err) => {
                tracing::error!(%err, "failed to create window");
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(state) = &mut self.state else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                state.scene.resize(new_size.width, new_size.height);
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: key_state,
                        ..
                    },
                ..
            } => {
                state
                    .input
                    .keyboard
                    .handle_key(map_key(key), key_state == ElementState::Pressed);
            }
            WindowEvent::CursorMoved { position, .. } => {
                state.input.mouse.handle_cursor(position.x, position.y);
            }
            WindowEvent::CursorLeft { .. } => {
                state.input.mouse.recenter();
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => (pos.y / PIXELS_PER_LINE) as f32,
                };
                state.input.mouse.handle_scroll(lines);
            }
            WindowEvent::Focused(false) => {
                state.input.reset();
            }
            WindowEvent::RedrawRequested => {
                if !state.update() {
                    event_loop.exit();
                    return;
                }
                state.window.request_redraw();
            }
            _ => {}
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => SimConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => SimConfig::default(),
    };
    config.validate().context("validating config")?;
    info!(config = ?cli.config, "starting dive bomber");

    let event_loop = EventLoop::new().context("creating event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App {
        config,
        state: None,
    };
    event_loop.run_app(&mut app).context("running event loop")?;
    Ok(())
}
