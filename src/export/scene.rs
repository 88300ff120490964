//! Scene description loading
//!
//! The scene is a JSON document listing curve objects with their world
//! transforms and spline data, plus the optional viewport view matrix.
//! Matrices are written row by row, points as `[x, y, z]`.

use super::types::{
    BezierPoint, CurveObject, ObjectKind, Scene, Spline, SplineKind, spline_bound_box,
};
use crate::error::SceneError;
use nalgebra::{Matrix4, Point3};
use serde::Deserialize;
use tracing::debug;

type RawMatrix = [[f64; 4]; 4];
type RawPoint = [f64; 3];

const IDENTITY: RawMatrix = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

#[derive(Debug, Deserialize)]
struct RawScene {
    #[serde(default)]
    view_matrix: Option<RawMatrix>,
    #[serde(default)]
    objects: Vec<RawObject>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum RawObjectKind {
    Curve,
    Mesh,
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
struct RawObject {
    name: String,
    #[serde(default = "default_object_kind")]
    kind: RawObjectKind,
    #[serde(default = "default_true")]
    visible: bool,
    #[serde(default)]
    selected: bool,
    #[serde(default = "default_matrix")]
    matrix_world: RawMatrix,
    #[serde(default)]
    bound_box: Option<Vec<RawPoint>>,
    #[serde(default)]
    splines: Vec<RawSpline>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum RawSplineKind {
    Bezier,
    Poly,
    Nurbs,
}

#[derive(Debug, Deserialize)]
struct RawSpline {
    #[serde(default = "default_spline_kind")]
    kind: RawSplineKind,
    #[serde(default)]
    cyclic: bool,
    #[serde(default)]
    bezier_points: Vec<RawBezierPoint>,
}

#[derive(Debug, Deserialize)]
struct RawBezierPoint {
    co: RawPoint,
    handle_left: RawPoint,
    handle_right: RawPoint,
}

fn default_object_kind() -> RawObjectKind {
    RawObjectKind::Curve
}

fn default_spline_kind() -> RawSplineKind {
    RawSplineKind::Bezier
}

fn default_true() -> bool {
    true
}

fn default_matrix() -> RawMatrix {
    IDENTITY
}

fn matrix(rows: &RawMatrix) -> Matrix4<f64> {
    Matrix4::from_row_slice(rows.as_flattened())
}

fn point(p: &RawPoint) -> Point3<f64> {
    Point3::new(p[0], p[1], p[2])
}

fn convert_spline(raw: RawSpline) -> Spline {
    let kind = match raw.kind {
        RawSplineKind::Bezier => SplineKind::Bezier,
        RawSplineKind::Poly => SplineKind::Poly,
        RawSplineKind::Nurbs => SplineKind::Nurbs,
    };

    Spline {
        kind,
        cyclic: raw.cyclic,
        bezier_points: raw
            .bezier_points
            .iter()
            .map(|p| BezierPoint::new(point(&p.co), point(&p.handle_left), point(&p.handle_right)))
            .collect(),
    }
}

fn convert_object(raw: RawObject) -> Result<CurveObject, SceneError> {
    let kind = match raw.kind {
        RawObjectKind::Curve => ObjectKind::Curve,
        RawObjectKind::Mesh => ObjectKind::Mesh,
        RawObjectKind::Other => ObjectKind::Other,
    };

    let splines: Vec<Spline> = raw.splines.into_iter().map(convert_spline).collect();

    let bound_box = match raw.bound_box {
        Some(corners) if corners.len() != 8 => {
            return Err(SceneError::InvalidBoundBox {
                object: raw.name,
                corners: corners.len(),
            });
        }
        Some(corners) => corners.iter().map(point).collect(),
        None => spline_bound_box(&splines),
    };

    Ok(CurveObject {
        name: raw.name,
        kind,
        visible: raw.visible,
        selected: raw.selected,
        matrix_world: matrix(&raw.matrix_world),
        bound_box,
        splines,
    })
}

/// Parse a JSON scene description
pub fn parse_scene(content: &str) -> Result<Scene, SceneError> {
    let raw: RawScene = serde_json::from_str(content)?;

    let objects = raw
        .objects
        .into_iter()
        .map(convert_object)
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        objects = objects.len(),
        has_view_matrix = raw.view_matrix.is_some(),
        "parsed scene"
    );

    Ok(Scene {
        view_matrix: raw.view_matrix.as_ref().map(matrix),
        objects,
    })
}
