//! Scene Builder
//!
//! Turns the simulation state into a renderer-agnostic draw list. Every
//! transform is translation * rotation * scale.
//!
//! Model alignment corrections (the meshes were authored facing other axes):
//! - Aircraft: flight rotation, then 180° about Y
//! - Bomb: bomb attitude, then 90° about Y
//! - Ship: 90° about Y

use glam::{Mat4, Quat, Vec3};

use super::bomb_run::BombRun;
use crate::render::{DrawItem, GREEN, MeshHandle, RED, Renderer, YELLOW};

/// Yaw correction applied to the aircraft mesh (degrees).
pub const AIRCRAFT_MESH_YAW: f32 = 180.0;
/// Yaw correction applied to the bomb mesh (degrees).
pub const BOMB_MESH_YAW: f32 = 90.0;
/// Yaw correction applied to the ship mesh (degrees).
pub const SHIP_MESH_YAW: f32 = 90.0;

/// One frame ready for a [`Renderer`].
#[derive(Debug, Clone, PartialEq)]
pub struct SceneFrame {
    pub view: Mat4,
    pub projection: Mat4,
    pub items: Vec<DrawItem>,
}

impl SceneFrame {
    /// Hand the frame to a renderer.
    pub fn submit<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        renderer.begin_frame(self.view, self.projection);
        for item in &self.items {
            renderer.draw(item);
        }
        renderer.end_frame();
    }

    pub fn find(&self, mesh: MeshHandle) -> Option<&DrawItem> {
        self.items.iter().find(|item| item.mesh == mesh)
    }
}

/// Builds [`SceneFrame`]s for a given viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneBuilder {
    pub aspect: f32,
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self { aspect: 800.0 / 600.0 }
    }
}

fn yaw(degrees: f32) -> Quat {
    Quat::from_rotation_y(degrees.to_radians())
}

impl SceneBuilder {
    pub fn new(aspect: f32) -> Self {
        Self { aspect }
    }

    /// Track a window resize. Zero-sized viewports keep the old aspect.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    pub fn build(&self, run: &BombRun) -> SceneFrame {
        let config = &run.config;
        let mut items = Vec::with_capacity(6);

        items.push(DrawItem::textured(
            MeshHandle::Aircraft,
            Mat4::from_scale_rotation_translation(
                Vec3::splat(config.aircraft.mesh_scale),
                run.aircraft.attitude.rotation() * yaw(AIRCRAFT_MESH_YAW),
                run.aircraft.position,
            ),
        ));

        items.push(DrawItem::textured(
            MeshHandle::Bomb,
            Mat4::from_scale_rotation_translation(
                Vec3::splat(config.bomb.mesh_scale),
                run.bomb.attitude.rotation() * yaw(BOMB_MESH_YAW),
                run.bomb.position,
            ),
        ));

        items.push(DrawItem::textured(
            MeshHandle::Ship,
            Mat4::from_scale_rotation_translation(
                Vec3::splat(config.target.mesh_scale),
                yaw(SHIP_MESH_YAW),
                config.target.center,
            ),
        ));

        if run.explosion.visible {
            items.push(DrawItem::textured(
                MeshHandle::Explosion,
                Mat4::from_scale_rotation_translation(
                    Vec3::splat(config.explosion.scale),
                    Quat::IDENTITY,
                    run.explosion.position + config.explosion.offset,
                ),
            ));
        }

        if run.show_hitboxes {
            // Unit cube spans ±0.5, so scale by the full size
            items.push(DrawItem::wireframe(
                MeshHandle::HitboxBox,
                Mat4::from_translation(run.target.center) * Mat4::from_scale(run.target.size()),
                RED,
            ));
            let tint = if run.bomb.hit { GREEN } else { YELLOW };
            items.push(DrawItem::wireframe(
                MeshHandle::HitboxSphere,
                Mat4::from_translation(run.bomb.position)
                    * Mat4::from_scale(Vec3::splat(run.bomb.hit_radius)),
                tint,
            ));
        }

        let pose = run.camera.pose(&run.aircraft);
        SceneFrame {
            view: pose.view_matrix(),
            projection: run.camera.projection_matrix(self.aspect),
            items,
        }
    }
}
