//! Drawable contract consumed by the scene graph.

use crate::ubo::NodeUbo;

/// A renderable payload attached to a scene node.
///
/// The node hands `draw` the finished world-space matrices and does not
/// inspect the outcome. Shader binding, buffer management, and the draw
/// calls themselves are entirely the implementor's concern; the scene
/// graph only composes matrices and dispatches.
pub trait Drawable {
    /// Issue draw calls using the node's world-space matrices.
    fn draw(&self, ubo: &NodeUbo);
}
