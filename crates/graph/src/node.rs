//! Scene-graph nodes and the recursive render traversal.
//!
//! A [`SceneNode`] owns a local [`Transform`], optionally references a
//! shared [`Drawable`], and owns an ordered list of children. Rendering
//! is a single recursive operation: compose the inherited world matrix
//! with the local transform, dispatch to the drawable, recurse.

use std::cell::{Ref, RefCell};
use std::rc::{Rc, Weak};

use glam::Mat4;

use crate::drawable::Drawable;
use crate::transform::Transform;
use crate::ubo::NodeUbo;

/// A node in the scene graph.
///
/// Ownership flows parent to child: each node holds strong handles to
/// its children and a weak back-reference to its parent, so dropping the
/// last external handle to a subtree root drops the whole subtree. The
/// children sequence is append-only; insertion order is render order.
///
/// A node's transform and drawable are fixed for its lifetime. A node
/// without a drawable is a pure grouping/pivot node.
pub struct SceneNode {
    /// Local transform, owned exclusively by this node.
    transform: Transform,
    /// Shared drawable payload, if any.
    drawable: Option<Rc<dyn Drawable>>,
    /// Non-owning back-reference to the parent node.
    parent: Weak<SceneNode>,
    /// Children in registration order.
    children: RefCell<Vec<Rc<SceneNode>>>,
}

impl SceneNode {
    /// Create a node and register it with its parent.
    ///
    /// If `parent` is given, the new node is appended as the last entry
    /// of that parent's children sequence; this append is the only
    /// mutation the children sequence ever undergoes. There is no
    /// detach or reparent operation, so a node can never become its own
    /// ancestor through this API.
    pub fn new(
        drawable: Option<Rc<dyn Drawable>>,
        transform: Transform,
        parent: Option<&Rc<SceneNode>>,
    ) -> Rc<SceneNode> {
        let node = Rc::new(SceneNode {
            transform,
            drawable,
            parent: parent.map_or_else(Weak::new, Rc::downgrade),
            children: RefCell::new(Vec::new()),
        });

        if let Some(parent) = parent {
            parent.children.borrow_mut().push(Rc::clone(&node));
        }

        node
    }

    /// Local transform of this node.
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Drawable payload, if any.
    pub fn drawable(&self) -> Option<&Rc<dyn Drawable>> {
        self.drawable.as_ref()
    }

    /// Parent node, or `None` for a root.
    pub fn parent(&self) -> Option<Rc<SceneNode>> {
        self.parent.upgrade()
    }

    /// Children in registration order.
    pub fn children(&self) -> Ref<'_, [Rc<SceneNode>]> {
        Ref::map(self.children.borrow(), Vec::as_slice)
    }

    /// Number of children.
    pub fn child_count(&self) -> usize {
        self.children.borrow().len()
    }

    /// Render this node and its subtree.
    ///
    /// The arguments are the accumulated matrices of the parent chain,
    /// down to but not including this node: the combined
    /// projection-view-model matrix, the combined model-view matrix, the
    /// normal matrix, and the accumulated world model matrix. At a root
    /// call the first three come from the camera and `world` is `None`
    /// (or an ambient transform supplied by the caller).
    ///
    /// The node's world model matrix is `inherited * local`, so child
    /// coordinates are expressed in parent space. The normal matrix is
    /// forwarded to the whole subtree unchanged. If a drawable is
    /// present it is invoked with the composed matrices; otherwise the
    /// node draws nothing but its children are still visited, in
    /// registration order.
    ///
    /// Traversal is a pre-order depth-first walk that visits every node
    /// of the subtree exactly once. It mutates no node state and
    /// produces no value beyond the drawables' side effects.
    pub fn render(&self, mvp: Mat4, model_view: Mat4, normal_matrix: Mat4, world: Option<Mat4>) {
        let local = self.transform.local_matrix();

        let world_model = match world {
            Some(inherited) => inherited * local,
            None => local,
        };
        let world_mvp = mvp * world_model;
        let world_model_view = model_view * world_model;

        if let Some(drawable) = &self.drawable {
            drawable.draw(&NodeUbo::new(
                world_mvp,
                world_model_view,
                normal_matrix,
                world_model,
            ));
        }

        for child in self.children.borrow().iter() {
            child.render(world_mvp, world_model_view, normal_matrix, Some(world_model));
        }
    }
}
