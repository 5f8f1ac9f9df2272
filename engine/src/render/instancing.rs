//! GPU Instance Data
//!
//! Plain-old-data layout of one draw call, ready to be copied into a vertex
//! or storage buffer by whatever backend draws the scene.

use bytemuck::{Pod, Zeroable};
use glam::Mat4;

/// Instance data for a single mesh draw.
///
/// Layout (80 bytes total, 16-byte aligned for GPU compatibility):
/// - model: mat4x4<f32> (64 bytes) - Column-major world transform
/// - tint:  vec4<f32>   (16 bytes) - RGBA multiplier (wireframe colour)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct MeshInstance {
    pub model: [[f32; 4]; 4],
    pub tint: [f32; 4],
}

static_assertions::assert_eq_size!(MeshInstance, [u8; 80]);

impl Default for MeshInstance {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY, [1.0, 1.0, 1.0, 1.0])
    }
}

impl MeshInstance {
    pub fn new(model: Mat4, tint: [f32; 4]) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            tint,
        }
    }

    /// World transform back as a matrix.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_mesh_instance_bytes() {
        let instance = MeshInstance::default();
        let bytes: &[u8] = bytemuck::bytes_of(&instance);
        assert_eq!(bytes.len(), 80);

        let back: &MeshInstance = bytemuck::from_bytes(bytes);
        assert_eq!(*back, instance);
    }

    #[test]
    fn test_model_matrix_preserved() {
        let model = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        let instance = MeshInstance::new(model, [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(instance.model_matrix(), model);
        // Column-major: translation in the last column
        assert_eq!(instance.model[3], [1.0, 2.0, 3.0, 1.0]);
    }

    #[test]
    fn test_cast_slice_of_instances() {
        let instances = vec![MeshInstance::default(); 3];
        let bytes: &[u8] = bytemuck::cast_slice(&instances);
        assert_eq!(bytes.len(), 240);
    }
}
