//! Render Module
//!
//! Draw-list types handed from the simulation to an external renderer.
//! No graphics API lives here; backends implement [`Renderer`].

pub mod instancing;
pub mod renderer;

pub use instancing::MeshInstance;
pub use renderer::{
    DrawItem, GREEN, Material, MeshHandle, RED, RecordingRenderer, Renderer, TracingRenderer,
    WHITE, YELLOW,
};
