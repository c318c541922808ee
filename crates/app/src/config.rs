//! Demo configuration from environment variables.

use std::str::FromStr;

use scenery_core::{Error, Result};

/// Configuration for the demo scene.
///
/// Every field falls back to a default when its `SCENERY_*` variable is
/// unset; a present but unparsable value is a [`Error::Config`].
#[derive(Clone, Debug)]
pub struct DemoConfig {
    /// Number of frames to render (`SCENERY_FRAMES`).
    pub frames: u32,
    /// Vertical field of view in degrees (`SCENERY_FOV_DEG`).
    pub fov_y_deg: f32,
    /// Orbit radius of the planet around the pivot (`SCENERY_ORBIT_RADIUS`).
    pub orbit_radius: f32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            frames: 8,
            fov_y_deg: 45.0,
            orbit_radius: 4.0,
        }
    }
}

impl DemoConfig {
    /// Read the configuration from the environment.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        if let Some(frames) = read_var("SCENERY_FRAMES")? {
            config.frames = frames;
        }
        if let Some(fov_y_deg) = read_var("SCENERY_FOV_DEG")? {
            config.fov_y_deg = fov_y_deg;
        }
        if let Some(orbit_radius) = read_var("SCENERY_ORBIT_RADIUS")? {
            config.orbit_radius = orbit_radius;
        }
        Ok(config)
    }
}

fn read_var<T: FromStr>(name: &str) -> Result<Option<T>> {
    match std::env::var(name) {
        Ok(value) => value
            .parse()
            .map(Some)
            .map_err(|_| Error::Config(format!("invalid value for {}: '{}'", name, value))),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(Error::Config(format!("{}: {}", name, e))),
    }
}
