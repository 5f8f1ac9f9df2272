//! Renderer hand-off
//!
//! The simulation never draws. It hands every frame's draw list to something
//! implementing [`Renderer`], which is free to use any graphics backend.

use glam::{Mat4, Vec3};

use super::instancing::MeshInstance;

/// Named mesh a draw refers to. Backends map these to loaded models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshHandle {
    Aircraft,
    Bomb,
    Ship,
    Explosion,
    /// Unit cube with corners at ±0.5
    HitboxBox,
    /// Unit sphere
    HitboxSphere,
}

impl MeshHandle {
    pub fn name(self) -> &'static str {
        match self {
            MeshHandle::Aircraft => "aircraft",
            MeshHandle::Bomb => "bomb",
            MeshHandle::Ship => "ship",
            MeshHandle::Explosion => "explosion",
            MeshHandle::HitboxBox => "hitbox_box",
            MeshHandle::HitboxSphere => "hitbox_sphere",
        }
    }
}

/// How a mesh should be shaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Material {
    /// The mesh's own textures
    #[default]
    Textured,
    /// Unlit lines in the draw's tint colour
    Wireframe,
}

pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
pub const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
pub const GREEN: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
pub const YELLOW: [f32; 4] = [1.0, 1.0, 0.0, 1.0];

/// One mesh to draw this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawItem {
    pub mesh: MeshHandle,
    pub material: Material,
    /// World transform (translation * rotation * scale)
    pub transform: Mat4,
    pub tint: [f32; 4],
}

impl DrawItem {
    pub fn textured(mesh: MeshHandle, transform: Mat4) -> Self {
        Self {
            mesh,
            material: Material::Textured,
            transform,
            tint: WHITE,
        }
    }

    pub fn wireframe(mesh: MeshHandle, transform: Mat4, tint: [f32; 4]) -> Self {
        Self {
            mesh,
            material: Material::Wireframe,
            transform,
            tint,
        }
    }

    /// World-space origin of the mesh.
    pub fn translation(&self) -> Vec3 {
        self.transform.w_axis.truncate()
    }

    pub fn instance(&self) -> MeshInstance {
        MeshInstance::new(self.transform, self.tint)
    }
}

/// Sink for draw calls.
///
/// `begin_frame` receives the camera matrices before any `draw`.
pub trait Renderer {
    fn begin_frame(&mut self, _view: Mat4, _projection: Mat4) {}

    fn draw(&mut self, item: &DrawItem);

    fn end_frame(&mut self) {}
}

/// Keeps the last frame's draws in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    pub view: Mat4,
    pub projection: Mat4,
    pub items: Vec<DrawItem>,
    pub frames: u64,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// First draw of the given mesh, if any.
    pub fn find(&self, mesh: MeshHandle) -> Option<&DrawItem> {
        self.items.iter().find(|item| item.mesh == mesh)
    }

    pub fn count(&self, mesh: MeshHandle) -> usize {
        self.items.iter().filter(|item| item.mesh == mesh).count()
    }

    /// Draw list packed for upload.
    pub fn instances(&self) -> Vec<MeshInstance> {
        self.items.iter().map(DrawItem::instance).collect()
    }
}

impl Renderer for RecordingRenderer {
    fn begin_frame(&mut self, view: Mat4, projection: Mat4) {
        self.view = view;
        self.projection = projection;
        self.items.clear();
    }

    fn draw(&mut self, item: &DrawItem) {
        self.items.push(*item);
    }

    fn end_frame(&mut self) {
        self.frames += 1;
    }
}

/// Logs every draw at trace level. Useful when no GPU backend is attached.
#[derive(Debug, Clone, Default)]
pub struct TracingRenderer {
    draws: usize,
    pub frames: u64,
}

impl Renderer for TracingRenderer {
    fn begin_frame(&mut self, _view: Mat4, _projection: Mat4) {
        self.draws = 0;
    }

    fn draw(&mut self, item: &DrawItem) {
        self.draws += 1;
        tracing::trace!(
            mesh = item.mesh.name(),
            material = ?item.material,
            position = ?item.translation(),
            "draw"
        );
    }

    fn end_frame(&mut self) {
        self.frames += 1;
        tracing::trace!(frame = self.frames, draws = self.draws, "frame submitted");
    }
}
