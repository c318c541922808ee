//! Uniform buffer data handed to drawables.
//!
//! The render traversal assembles one [`NodeUbo`] per drawn node. The
//! structure uses `#[repr(C)]` for a predictable memory layout and
//! implements `bytemuck::Pod` and `bytemuck::Zeroable` so drawable
//! implementations can upload it byte-for-byte.
//!
//! # Example
//!
//! ```
//! use scenery_graph::NodeUbo;
//! use glam::Mat4;
//!
//! let ubo = NodeUbo::new(Mat4::IDENTITY, Mat4::IDENTITY, Mat4::IDENTITY, Mat4::IDENTITY);
//!
//! // Convert to bytes for GPU upload
//! let bytes: &[u8] = bytemuck::bytes_of(&ubo);
//! assert_eq!(bytes.len(), NodeUbo::size());
//! ```

use bytemuck::{Pod, Zeroable};
use glam::Mat4;

/// Per-node uniform data delivered to [`Drawable::draw`].
///
/// Bundles the finished world-space matrices a drawable needs to issue
/// its draw calls.
///
/// # Memory Layout (std140)
///
/// | Offset | Size | Field |
/// |--------|------|-------|
/// | 0      | 64   | mvp |
/// | 64     | 64   | model_view |
/// | 128    | 64   | normal_matrix |
/// | 192    | 64   | model |
///
/// Total size: 256 bytes
///
/// [`Drawable::draw`]: crate::Drawable::draw
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Pod, Zeroable)]
pub struct NodeUbo {
    /// World-space projection-view-model matrix.
    pub mvp: Mat4,
    /// World-space model-view matrix.
    pub model_view: Mat4,
    /// Normal matrix inherited from the root render call.
    ///
    /// The traversal forwards this matrix unchanged rather than
    /// recomputing it per node, so under hierarchical rotation or
    /// non-uniform scale it is only exact at the root's own transform.
    pub normal_matrix: Mat4,
    /// World model matrix (node space to world space).
    pub model: Mat4,
}

impl NodeUbo {
    /// Creates a uniform block from finished matrices.
    #[inline]
    pub fn new(mvp: Mat4, model_view: Mat4, normal_matrix: Mat4, model: Mat4) -> Self {
        Self {
            mvp,
            model_view,
            normal_matrix,
            model,
        }
    }

    /// Returns the size of this structure in bytes.
    ///
    /// This is useful when creating uniform buffers.
    #[inline]
    pub const fn size() -> usize {
        std::mem::size_of::<Self>()
    }
}

/// Computes a normal matrix from a model matrix.
///
/// The normal matrix is the transpose of the inverse of the model
/// matrix, which transforms normal vectors correctly when the model
/// matrix contains non-uniform scaling. Callers use it to seed the root
/// render call; the traversal itself never recomputes it.
///
/// # Non-invertible matrices
///
/// If the model matrix is not invertible (e.g., contains zero scale),
/// the identity matrix is returned as a fallback to avoid NaN/Inf values
/// propagating to shaders.
#[inline]
pub fn compute_normal_matrix(model: Mat4) -> Mat4 {
    // Check if matrix is invertible by checking determinant
    // Use a small epsilon to handle floating-point precision issues
    const EPSILON: f32 = 1e-6;
    let det = model.determinant();

    if det.abs() < EPSILON {
        // Matrix is not invertible (e.g., zero scale)
        // Return identity as a safe fallback
        Mat4::IDENTITY
    } else {
        model.inverse().transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use std::mem::{align_of, size_of};

    #[test]
    fn test_node_ubo_size() {
        // 4 Mat4 (4 * 64) = 256 bytes
        assert_eq!(size_of::<NodeUbo>(), 256);
        assert_eq!(NodeUbo::size(), 256);
    }

    #[test]
    fn test_node_ubo_alignment() {
        // Must be 4-byte aligned at minimum (float alignment)
        assert!(align_of::<NodeUbo>() >= 4);
    }

    #[test]
    fn test_node_ubo_new() {
        let mvp = Mat4::from_translation(Vec3::new(1.0, 0.0, 0.0));
        let model_view = Mat4::from_translation(Vec3::new(0.0, 2.0, 0.0));
        let normal_matrix = Mat4::from_scale(Vec3::new(1.0, 2.0, 1.0));
        let model = Mat4::from_translation(Vec3::new(0.0, 0.0, 3.0));

        let ubo = NodeUbo::new(mvp, model_view, normal_matrix, model);

        assert_eq!(ubo.mvp, mvp);
        assert_eq!(ubo.model_view, model_view);
        assert_eq!(ubo.normal_matrix, normal_matrix);
        assert_eq!(ubo.model, model);
    }

    #[test]
    fn test_node_ubo_bytemuck_cast() {
        let ubo = NodeUbo::default();
        let bytes: &[u8] = bytemuck::bytes_of(&ubo);
        assert_eq!(bytes.len(), NodeUbo::size());
    }

    #[test]
    fn test_compute_normal_matrix_identity() {
        assert_eq!(compute_normal_matrix(Mat4::IDENTITY), Mat4::IDENTITY);
    }

    #[test]
    fn test_compute_normal_matrix_non_uniform_scale() {
        let model = Mat4::from_scale(Vec3::new(1.0, 2.0, 1.0));
        let expected = model.inverse().transpose();
        assert_eq!(compute_normal_matrix(model), expected);
    }

    #[test]
    fn test_compute_normal_matrix_non_invertible() {
        // Zero scale makes the matrix non-invertible
        let normal = compute_normal_matrix(Mat4::from_scale(Vec3::ZERO));

        // Should return identity matrix as fallback, not NaN
        assert_eq!(normal, Mat4::IDENTITY);

        let cols = [normal.x_axis, normal.y_axis, normal.z_axis, normal.w_axis];
        for col in cols {
            assert!(!col.x.is_nan());
            assert!(!col.y.is_nan());
            assert!(!col.z.is_nan());
            assert!(!col.w.is_nan());
        }
    }
}
