//! Bezier curve to SVG export
//!
//! The export runs in four steps:
//! 1. Select the visible curve objects (optionally only the selected ones)
//! 2. Resolve the projection matrix and measure the projected canvas bounds
//! 3. Serialize every spline of every object to `M`/`C` path commands
//! 4. Wrap one layer per object with a non-empty path in an SVG document

pub mod bounds;
pub mod path;
pub mod projection;
pub mod scene;
pub mod svg;
pub mod types;

use crate::error::ExportError;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

pub use bounds::{Bounds, Canvas, canvas_bounds, projected_bounds};
pub use path::{object_path_data, spline_path_data};
pub use projection::{ProjectionAxis, Projector, project_point};
pub use scene::parse_scene;
pub use svg::{LayerStyle, document_to_svg};
pub use types::*;

/// Options for an export run
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Only export objects flagged as selected (default: true)
    pub selection_only: bool,
    /// Projection used for the whole export (default: viewport)
    pub projection: ProjectionAxis,
    /// Pixels per scene unit (default: 100)
    pub scale: f64,
    pub style: LayerStyle,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            selection_only: true,
            projection: ProjectionAxis::Viewport,
            scale: 100.0,
            style: LayerStyle::default(),
        }
    }
}

/// Result of an export containing the SVG string
#[derive(Debug, Clone)]
pub struct ExportReport {
    pub svg: String,
    pub document: SvgDocument,
    /// One entry per spline that could not be exported
    pub warnings: Vec<String>,
}

/// Objects taking part in the export, in scene order
pub fn select_objects<'a>(scene: &'a Scene, selection_only: bool) -> Vec<&'a CurveObject> {
    scene
        .objects
        .iter()
        .filter(|ob| ob.kind == ObjectKind::Curve && ob.visible)
        .filter(|ob| !selection_only || ob.selected)
        .collect()
}

/// Build the SVG document for a scene
pub fn export_scene(scene: &Scene, options: &ExportOptions) -> Result<ExportReport, ExportError> {
    if !options.scale.is_finite() || options.scale <= 0.0 {
        return Err(ExportError::InvalidScale(options.scale));
    }

    let objects = select_objects(scene, options.selection_only);
    if objects.is_empty() {
        return Err(ExportError::NothingToExport);
    }
    debug!(
        objects = objects.len(),
        projection = %options.projection,
        "exporting curve objects"
    );

    let projection = options.projection.matrix(scene.view_matrix.as_ref())?;
    let canvas = canvas_bounds(&objects, &projection)?;
    let projector = Projector::new(projection, canvas.origin, options.scale);

    let mut document = SvgDocument::new(
        canvas.size.x * options.scale,
        canvas.size.y * options.scale,
    );
    let mut warnings = Vec::new();

    for object in &objects {
        let d = object_path_data(object, &projector, &mut warnings);
        if d.is_empty() {
            debug!(object = %object.name, "no path data, layer skipped");
            continue;
        }
        document.new_layer(object.name.as_str(), d);
    }

    let svg = document_to_svg(&document, &options.style);
    info!(
        layers = document.layers.len(),
        warnings = warnings.len(),
        width = document.width,
        height = document.height,
        "export finished"
    );

    Ok(ExportReport {
        svg,
        document,
        warnings,
    })
}

/// Export a scene and write the SVG to `output`
pub fn export_to_file(
    scene: &Scene,
    options: &ExportOptions,
    output: impl AsRef<Path>,
) -> Result<ExportReport, ExportError> {
    let report = export_scene(scene, options)?;
    let output = output.as_ref();

    fs::write(output, &report.svg).map_err(|source| ExportError::Io {
        path: output.to_path_buf(),
        source,
    })?;

    info!(path = %output.display(), "wrote SVG");
    Ok(report)
}
