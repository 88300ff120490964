//! Error types for scene loading and SVG export

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading a scene description
#[derive(Error, Debug)]
pub enum SceneError {
    /// The scene is not valid JSON or does not match the expected layout
    #[error("Invalid scene description: {0}")]
    Json(#[from] serde_json::Error),

    /// An explicit bounding box must list all eight corners
    #[error("Object '{object}' has a bounding box with {corners} corners, expected 8")]
    InvalidBoundBox {
        /// Name of the offending object.
        object: String,
        /// Number of corners found.
        corners: usize,
    },
}

/// Errors that abort an export
#[derive(Error, Debug)]
pub enum ExportError {
    /// No visible curve object matched the selection mode
    #[error("Nothing to export: no curve objects with geometry in the selection")]
    NothingToExport,

    /// Viewport projection was requested but the scene carries no view matrix
    #[error("Viewport projection requested but no view matrix is available")]
    MissingViewMatrix,

    /// Scale must be a finite positive number of pixels per unit
    #[error("Invalid scale {0}: expected a finite value greater than zero")]
    InvalidScale(f64),

    /// Writing the output document failed
    #[error("Failed to write '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
