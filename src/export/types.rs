use nalgebra::{Matrix4, Point3};

/// Bezier control point with independent incoming/outgoing handles
#[derive(Debug, Clone, PartialEq)]
pub struct BezierPoint {
    pub co: Point3<f64>,
    /// Handle for the curve arriving at this point
    pub handle_left: Point3<f64>,
    /// Handle for the curve leaving this point
    pub handle_right: Point3<f64>,
}

impl BezierPoint {
    pub fn new(co: Point3<f64>, handle_left: Point3<f64>, handle_right: Point3<f64>) -> Self {
        Self {
            co,
            handle_left,
            handle_right,
        }
    }

    /// Point whose handles sit on the point itself (straight segments)
    pub fn corner(co: Point3<f64>) -> Self {
        Self::new(co, co, co)
    }
}

/// Spline representation as stored by the modelling host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplineKind {
    #[default]
    Bezier,
    Poly,
    Nurbs,
}

/// Ordered run of Bezier points, optionally closed
#[derive(Debug, Clone, PartialEq)]
pub struct Spline {
    pub kind: SplineKind,
    pub cyclic: bool,
    pub bezier_points: Vec<BezierPoint>,
}

impl Spline {
    pub fn bezier(bezier_points: Vec<BezierPoint>, cyclic: bool) -> Self {
        Self {
            kind: SplineKind::Bezier,
            cyclic,
            bezier_points,
        }
    }

    /// True when the spline carries Bezier points the serializer can use
    pub fn is_exportable(&self) -> bool {
        self.kind == SplineKind::Bezier && !self.bezier_points.is_empty()
    }
}

/// Scene object type; only curves are exported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ObjectKind {
    #[default]
    Curve,
    Mesh,
    Other,
}

/// Scene object with its world transform and spline data
#[derive(Debug, Clone)]
pub struct CurveObject {
    pub name: String,
    pub kind: ObjectKind,
    pub visible: bool,
    pub selected: bool,
    pub matrix_world: Matrix4<f64>,
    /// Local-space bounding box corners
    pub bound_box: Vec<Point3<f64>>,
    pub splines: Vec<Spline>,
}

impl CurveObject {
    /// Visible, selected curve with an identity transform and a bounding box
    /// derived from its splines
    pub fn new(name: impl Into<String>, splines: Vec<Spline>) -> Self {
        let bound_box = spline_bound_box(&splines);
        Self {
            name: name.into(),
            kind: ObjectKind::Curve,
            visible: true,
            selected: true,
            matrix_world: Matrix4::identity(),
            bound_box,
            splines,
        }
    }

    pub fn with_matrix_world(mut self, matrix_world: Matrix4<f64>) -> Self {
        self.matrix_world = matrix_world;
        self
    }
}

/// The eight corners of the axis-aligned box around every point and handle
/// of the Bezier splines. Empty when there are no points.
pub fn spline_bound_box(splines: &[Spline]) -> Vec<Point3<f64>> {
    let mut points = splines
        .iter()
        .filter(|s| s.kind == SplineKind::Bezier)
        .flat_map(|s| s.bezier_points.iter())
        .flat_map(|p| [p.co, p.handle_left, p.handle_right]);

    let Some(first) = points.next() else {
        return Vec::new();
    };

    let (min, max) = points.fold((first, first), |(min, max), p| {
        (min.inf(&p), max.sup(&p))
    });

    box_corners(&min, &max)
}

/// Corners of the box spanned by `min` and `max`, in the host's order
pub fn box_corners(min: &Point3<f64>, max: &Point3<f64>) -> Vec<Point3<f64>> {
    vec![
        Point3::new(min.x, min.y, min.z),
        Point3::new(min.x, min.y, max.z),
        Point3::new(min.x, max.y, max.z),
        Point3::new(min.x, max.y, min.z),
        Point3::new(max.x, min.y, min.z),
        Point3::new(max.x, min.y, max.z),
        Point3::new(max.x, max.y, max.z),
        Point3::new(max.x, max.y, min.z),
    ]
}

/// Input scene for an export run
#[derive(Debug, Clone, Default)]
pub struct Scene {
    /// World-to-view matrix of the active viewport, if there is one
    pub view_matrix: Option<Matrix4<f64>>,
    pub objects: Vec<CurveObject>,
}

/// Named path group in the output document
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub title: String,
    pub path: String,
}

/// Output document before rendering
#[derive(Debug, Clone, PartialEq)]
pub struct SvgDocument {
    pub width: f64,
    pub height: f64,
    pub layers: Vec<Layer>,
}

impl SvgDocument {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            layers: Vec::new(),
        }
    }

    pub fn new_layer(&mut self, title: impl Into<String>, path: impl Into<String>) -> &Layer {
        self.layers.push(Layer {
            title: title.into(),
            path: path.into(),
        });
        &self.layers[self.layers.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spline_bound_box_includes_handles() {
        let spline = Spline::bezier(
            vec![
                BezierPoint::new(
                    Point3::new(0.0, 0.0, 0.0),
                    Point3::new(-1.0, 0.0, 0.0),
                    Point3::new(1.0, 2.0, 0.0),
                ),
                BezierPoint::corner(Point3::new(3.0, 0.0, -1.0)),
            ],
            false,
        );

        let corners = spline_bound_box(&[spline]);
        assert_eq!(corners.len(), 8);
        assert_eq!(corners[0], Point3::new(-1.0, 0.0, -1.0));
        assert_eq!(corners[6], Point3::new(3.0, 2.0, 0.0));
    }

    #[test]
    fn test_spline_bound_box_empty() {
        assert!(spline_bound_box(&[]).is_empty());
        assert!(spline_bound_box(&[Spline::bezier(vec![], true)]).is_empty());
    }

    #[test]
    fn test_non_bezier_spline_not_exportable() {
        let mut spline = Spline::bezier(vec![BezierPoint::corner(Point3::origin())], false);
        assert!(spline.is_exportable());
        spline.kind = SplineKind::Poly;
        assert!(!spline.is_exportable());
    }
}
