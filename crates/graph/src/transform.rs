//! Local transform for scene nodes.
//!
//! This module provides the [`Transform`] struct for representing the
//! position, rotation, and scale of a node relative to its parent.
//! Composition into world space is the node hierarchy's job; a
//! `Transform` only answers for its own local matrix.
//!
//! # Example
//!
//! ```
//! use scenery_graph::Transform;
//! use glam::Vec3;
//!
//! let transform = Transform::new().with_position(Vec3::new(1.0, 2.0, 3.0));
//!
//! let local = transform.local_matrix();
//! assert_eq!(local.transform_point3(Vec3::ZERO), Vec3::new(1.0, 2.0, 3.0));
//! ```

use glam::{Mat4, Quat, Vec3};

/// A local translation/rotation/scale, expressed in the parent's
/// coordinate space.
#[derive(Clone, Debug)]
pub struct Transform {
    /// Position relative to the parent node
    pub position: Vec3,
    /// Rotation as a quaternion
    pub rotation: Quat,
    /// Scale factor
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Create an identity transform.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transform with only a position.
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }

    /// Create a transform with the given position.
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Create a transform with the given rotation.
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Create a transform with the given scale.
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Get the local transformation matrix.
    ///
    /// This is a pure query: scale is applied first, then rotation, then
    /// translation. World-space composition with ancestor transforms
    /// happens during traversal, not here.
    pub fn local_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx_eq_vec3(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPSILON
    }

    #[test]
    fn test_transform_default() {
        let t = Transform::default();
        assert_eq!(t.position, Vec3::ZERO);
        assert_eq!(t.rotation, Quat::IDENTITY);
        assert_eq!(t.scale, Vec3::ONE);
        assert_eq!(t.local_matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn test_transform_builder() {
        let t = Transform::new()
            .with_position(Vec3::new(1.0, 2.0, 3.0))
            .with_scale(Vec3::splat(2.0));

        assert_eq!(t.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(t.scale, Vec3::splat(2.0));
        assert_eq!(t.rotation, Quat::IDENTITY);
    }

    #[test]
    fn test_local_matrix_translation() {
        let t = Transform::from_position(Vec3::new(1.0, 2.0, 3.0));
        let expected = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(t.local_matrix(), expected);
    }

    #[test]
    fn test_local_matrix_applies_scale_before_rotation() {
        // Scale along X, then rotate 90 degrees around Y: the scaled X
        // axis must end up on -Z.
        let t = Transform::new()
            .with_rotation(Quat::from_rotation_y(std::f32::consts::FRAC_PI_2))
            .with_scale(Vec3::new(2.0, 1.0, 1.0));

        let p = t.local_matrix().transform_point3(Vec3::X);
        assert!(
            approx_eq_vec3(p, Vec3::new(0.0, 0.0, -2.0)),
            "Expected (0, 0, -2), got {:?}",
            p
        );
    }
}
