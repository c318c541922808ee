//! Scene-graph demo - Main Entry Point
//!
//! Builds a small orbit hierarchy (sun, planet, moon) and renders it for
//! a fixed number of frames, reporting every draw through the log. This
//! binary is plumbing around the graph crate: it owns the render loop
//! and the camera, neither of which belongs to the scene graph itself.

use std::rc::Rc;

use anyhow::Result;
use glam::{Quat, Vec3};
use tracing::{debug, info};

use scenery_core::FrameClock;
use scenery_graph::camera::{Camera, Projection};
use scenery_graph::ubo::compute_normal_matrix;
use scenery_graph::{Drawable, NodeUbo, SceneNode, Transform};

mod config;

use config::DemoConfig;

/// Drawable that reports each draw call through the log.
struct TraceMesh {
    name: &'static str,
}

impl TraceMesh {
    fn shared(name: &'static str) -> Rc<dyn Drawable> {
        Rc::new(Self { name })
    }
}

impl Drawable for TraceMesh {
    fn draw(&self, ubo: &NodeUbo) {
        let position = ubo.model.w_axis.truncate();
        debug!(
            "{} at ({:.2}, {:.2}, {:.2})",
            self.name, position.x, position.y, position.z
        );
    }
}

/// Build the orbit hierarchy for one frame.
///
/// Node transforms are fixed for their lifetime, so each frame
/// constructs the tree for its own orbit angles.
fn build_scene(config: &DemoConfig, angle: f32) -> Rc<SceneNode> {
    let root = SceneNode::new(None, Transform::new(), None);

    SceneNode::new(
        Some(TraceMesh::shared("sun")),
        Transform::new().with_scale(Vec3::splat(2.0)),
        Some(&root),
    );

    let orbit = SceneNode::new(
        None,
        Transform::new().with_rotation(Quat::from_rotation_y(angle)),
        Some(&root),
    );
    let planet = SceneNode::new(
        Some(TraceMesh::shared("planet")),
        Transform::from_position(Vec3::new(config.orbit_radius, 0.0, 0.0)),
        Some(&orbit),
    );

    // The moon circles the planet three times per planet orbit.
    let moon_orbit = SceneNode::new(
        None,
        Transform::new().with_rotation(Quat::from_rotation_y(angle * 3.0)),
        Some(&planet),
    );
    SceneNode::new(
        Some(TraceMesh::shared("moon")),
        Transform::from_position(Vec3::new(config.orbit_radius * 0.35, 0.0, 0.0))
            .with_scale(Vec3::splat(0.25)),
        Some(&moon_orbit),
    );

    root
}

fn main() -> Result<()> {
    // Initialize logging
    scenery_core::init_logging()?;

    let config = DemoConfig::from_env()?;
    info!("Starting scene-graph demo: {:?}", config);

    let mut camera = Camera::new();
    camera.eye = Vec3::new(0.0, 6.0, 12.0);
    camera.projection = Projection::Perspective {
        fov_y: config.fov_y_deg.to_radians(),
        aspect: 16.0 / 9.0,
        near: 0.1,
        far: 100.0,
    };

    let view = camera.view_matrix();
    let projection_view = camera.view_projection_matrix();
    let normal_matrix = compute_normal_matrix(view);

    let mut clock = FrameClock::new();
    for _ in 0..config.frames {
        let tick = clock.tick();
        let angle = tick.elapsed_secs() * std::f32::consts::FRAC_PI_4;

        let scene = build_scene(&config, angle);
        scene.render(projection_view, view, normal_matrix, None);

        info!(
            "frame {} rendered (dt {:.3} ms)",
            tick.index,
            tick.delta_secs() * 1000.0
        );
    }

    info!("Rendered {} frames, shutting down", clock.frame_count());
    Ok(())
}
