use super::projection::project_point;
use super::types::CurveObject;
use crate::error::ExportError;
use nalgebra::{Matrix4, Point2, Vector2};
use tracing::debug;

/// Bounding box in projected (pre-scale) coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    pub fn from_point(x: f64, y: f64) -> Self {
        Self::new(x, y, x, y)
    }

    pub fn include(&mut self, x: f64, y: f64) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Document placement derived from the projected bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    /// Top-left corner: `(min_x, max_y)`
    pub origin: Point2<f64>,
    pub size: Vector2<f64>,
}

impl From<Bounds> for Canvas {
    fn from(b: Bounds) -> Self {
        Self {
            origin: Point2::new(b.min_x, b.max_y),
            size: Vector2::new(b.width(), b.height()),
        }
    }
}

/// Projected bounds of every bounding-box corner of every object
pub fn projected_bounds(objects: &[&CurveObject], projection: &Matrix4<f64>) -> Option<Bounds> {
    let mut bounds: Option<Bounds> = None;

    for object in objects {
        for corner in &object.bound_box {
            let p = project_point(projection, &object.matrix_world, corner);
            match &mut bounds {
                None => bounds = Some(Bounds::from_point(p.x, p.y)),
                Some(b) => b.include(p.x, p.y),
            }
        }
    }

    bounds
}

/// Canvas covering all objects; fails when there is nothing to measure
pub fn canvas_bounds(
    objects: &[&CurveObject],
    projection: &Matrix4<f64>,
) -> Result<Canvas, ExportError> {
    let bounds = projected_bounds(objects, projection).ok_or(ExportError::NothingToExport)?;
    debug!(?bounds, "projected canvas bounds");
    Ok(bounds.into())
}
