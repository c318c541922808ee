//! Error types for the workspace.

use thiserror::Error;

/// Error type for the ambient surface of the workspace.
///
/// The scene graph itself has no failure modes: rendering a well-formed
/// tree cannot fail, and an absent drawable is a valid grouping node, not
/// an error. Errors only arise around the graph, in configuration and
/// logging setup.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// Logging initialization errors
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Result type alias using the workspace's [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;
