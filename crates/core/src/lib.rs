//! Core utilities for the scenery workspace.
//!
//! This crate provides the foundational pieces shared by the other crates:
//! - Error types and result aliases
//! - Logging initialization
//! - Frame timing for render loops

mod clock;
mod error;
mod logging;

pub use clock::{FrameClock, FrameTick};
pub use error::{Error, Result};
pub use logging::init_logging;
