//! Collision detection module
//!
//! Discrete sphere-vs-AABB testing for the bomb against its target.
//!
//! # Closest-Point Test
//!
//! The sphere centre is clamped onto the box one axis at a time. The clamped
//! point is the point of the box nearest to the centre, so the sphere touches
//! the box exactly when that point lies strictly inside the sphere.
//!
//! # Example
//!
//! ```ignore
//! use dive_bomber_engine::physics::collision::{sphere_aabb_intersect, TargetVolume};
//! use glam::Vec3;
//!
//! let ship = TargetVolume::new(Vec3::new(0.0, -5.0, 0.0), Vec3::new(15.0, 10.0, 100.0));
//! if ship.intersects_sphere(bomb_position, 0.3) {
//!     println!("Hit!");
//! }
//! ```

use glam::Vec3;

/// Returns the point inside the box `[aabb_min, aabb_max]` closest to `point`.
///
/// Points already inside the box are returned unchanged.
#[inline]
pub fn closest_point_on_aabb(point: Vec3, aabb_min: Vec3, aabb_max: Vec3) -> Vec3 {
    point.clamp(aabb_min, aabb_max)
}

/// Tests a sphere against an axis-aligned box given by centre and half-extents.
///
/// # Arguments
///
/// * `sphere_center` - Centre of the sphere in world space
/// * `sphere_radius` - Radius of the sphere
/// * `box_center` - Centre of the box in world space
/// * `box_half_extents` - Half the box size along each axis (all components >= 0)
///
/// # Returns
///
/// `true` when the distance from the sphere centre to the closest point of the
/// box is strictly less than the radius. A sphere that only touches the box
/// surface is not a hit.
pub fn sphere_aabb_intersect(
    sphere_center: Vec3,
    sphere_radius: f32,
    box_center: Vec3,
    box_half_extents: Vec3,
) -> bool {
    let closest = closest_point_on_aabb(
        sphere_center,
        box_center - box_half_extents,
        box_center + box_half_extents,
    );
    sphere_center.distance(closest) < sphere_radius
}

/// Static axis-aligned volume that the bomb is scored against.
///
/// The volume never moves or rotates once the scene is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetVolume {
    /// World-space centre of the box
    pub center: Vec3,
    /// Half the box size along each world axis
    pub half_extents: Vec3,
}

impl TargetVolume {
    pub fn new(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            center,
            half_extents: half_extents.abs(),
        }
    }

    /// Minimum corner of the box.
    pub fn min(&self) -> Vec3 {
        self.center - self.half_extents
    }

    /// Maximum corner of the box.
    pub fn max(&self) -> Vec3 {
        self.center + self.half_extents
    }

    /// Full box size along each axis.
    pub fn size(&self) -> Vec3 {
        self.half_extents * 2.0
    }

    /// Returns true if a sphere at `center` with `radius` overlaps the volume.
    pub fn intersects_sphere(&self, center: Vec3, radius: f32) -> bool {
        sphere_aabb_intersect(center, radius, self.center, self.half_extents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_far_from_box_misses() {
        // Clamped point is (0, 0, 4), three units away
        assert!(!sphere_aabb_intersect(
            Vec3::ZERO,
            1.0,
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::ONE,
        ));
    }

    #[test]
    fn test_sphere_on_box_face_hits() {
        // Centre lies on the near face, clamped point is the centre itself
        assert!(sphere_aabb_intersect(
            Vec3::new(0.0, 0.0, 4.0),
            1.0,
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::ONE,
        ));
    }

    #[test]
    fn test_tangent_sphere_is_not_a_hit() {
        // Distance to the face is exactly the radius
        assert!(!sphere_aabb_intersect(
            Vec3::new(0.0, 0.0, 3.0),
            1.0,
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::ONE,
        ));
    }

    #[test]
    fn test_sphere_near_box_corner() {
        let center = Vec3::new(1.5, 1.5, 1.5);
        // Corner (1, 1, 1) is sqrt(0.75) ~= 0.866 away
        assert!(sphere_aabb_intersect(center, 0.9, Vec3::ZERO, Vec3::ONE));
        assert!(!sphere_aabb_intersect(center, 0.8, Vec3::ZERO, Vec3::ONE));
    }

    #[test]
    fn test_sphere_inside_box_hits() {
        assert!(sphere_aabb_intersect(
            Vec3::new(0.2, -0.3, 0.1),
            0.01,
            Vec3::ZERO,
            Vec3::ONE,
        ));
    }

    #[test]
    fn test_closest_point_clamps_per_axis() {
        let p = closest_point_on_aabb(
            Vec3::new(5.0, 0.5, -3.0),
            Vec3::splat(-1.0),
            Vec3::splat(1.0),
        );
        assert_eq!(p, Vec3::new(1.0, 0.5, -1.0));
    }

    #[test]
    fn test_target_volume_bounds() {
        let ship = TargetVolume::new(Vec3::new(0.0, -5.0, 0.0), Vec3::new(15.0, 10.0, 100.0));
        assert_eq!(ship.min(), Vec3::new(-15.0, -15.0, -100.0));
        assert_eq!(ship.max(), Vec3::new(15.0, 5.0, 100.0));
        assert_eq!(ship.size(), Vec3::new(30.0, 20.0, 200.0));
    }

    #[test]
    fn test_target_volume_sphere_query() {
        let ship = TargetVolume::new(Vec3::new(0.0, -5.0, 0.0), Vec3::new(15.0, 10.0, 100.0));
        assert!(ship.intersects_sphere(Vec3::new(0.0, 5.2, 0.0), 0.3));
        assert!(!ship.intersects_sphere(Vec3::new(0.0, 5.4, 0.0), 0.3));
    }
}
