//! # bezier2svg
//!
//! A Rust library for exporting 3D Bezier curve scenes to 2D SVG documents.
//!
//! Curve control points are projected along one of the six global axes, or
//! through a viewport view matrix, rescaled to pixels and written as SVG
//! `M`/`C` path commands with one layer per curve object.
//!
//! ## Example
//!
//! ```rust,ignore
//! use bezier2svg::export::{ExportOptions, ProjectionAxis, export_scene, parse_scene};
//!
//! let content = std::fs::read_to_string("scene.json").unwrap();
//! let scene = parse_scene(&content).unwrap();
//! let options = ExportOptions {
//!     projection: ProjectionAxis::PosZ,
//!     ..Default::default()
//! };
//! let report = export_scene(&scene, &options).unwrap();
//! std::fs::write("output.svg", report.svg).unwrap();
//! ```

pub mod error;
pub mod export;
pub mod logging;

// Re-export commonly used items
pub use error::{ExportError, SceneError};
pub use export::{
    ExportOptions, ExportReport, ProjectionAxis, Scene, export_scene, export_to_file, parse_scene,
};
