//! Projection of 3D scene points into SVG pixel space

use crate::error::ExportError;
use clap::ValueEnum;
use nalgebra::{Matrix4, Point2, Point3};
use std::fmt;

/// Viewing direction used to flatten the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ProjectionAxis {
    #[value(name = "x")]
    PosX,
    #[value(name = "-x")]
    NegX,
    #[value(name = "y")]
    PosY,
    #[value(name = "-y")]
    NegY,
    #[value(name = "z")]
    PosZ,
    #[value(name = "-z")]
    NegZ,
    /// Live viewport view matrix supplied by the scene
    #[default]
    Viewport,
}

impl ProjectionAxis {
    pub const AXES: [ProjectionAxis; 6] = [
        ProjectionAxis::PosX,
        ProjectionAxis::NegX,
        ProjectionAxis::PosY,
        ProjectionAxis::NegY,
        ProjectionAxis::PosZ,
        ProjectionAxis::NegZ,
    ];

    /// Resolve the projection matrix. Viewport projection needs `view`.
    pub fn matrix(self, view: Option<&Matrix4<f64>>) -> Result<Matrix4<f64>, ExportError> {
        #[rustfmt::skip]
        let m = match self {
            ProjectionAxis::NegX => Matrix4::new(
                0.0, -1.0, 0.0, 0.0,
                0.0, 0.0, 1.0, 0.0,
                -1.0, 0.0, 0.0, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ),
            ProjectionAxis::PosX => Matrix4::new(
                0.0, 1.0, 0.0, 0.0,
                0.0, 0.0, 1.0, 0.0,
                1.0, 0.0, 0.0, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ),
            ProjectionAxis::NegY => Matrix4::new(
                1.0, 0.0, 0.0, 0.0,
                0.0, 0.0, 1.0, 0.0,
                0.0, -1.0, 0.0, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ),
            ProjectionAxis::PosY => Matrix4::new(
                -1.0, 0.0, 0.0, 0.0,
                0.0, 0.0, 1.0, 0.0,
                0.0, 1.0, 0.0, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ),
            ProjectionAxis::NegZ => Matrix4::new(
                1.0, 0.0, 0.0, 0.0,
                0.0, -1.0, 0.0, 0.0,
                0.0, 0.0, -1.0, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ),
            ProjectionAxis::PosZ => Matrix4::identity(),
            ProjectionAxis::Viewport => *view.ok_or(ExportError::MissingViewMatrix)?,
        };
        Ok(m)
    }
}

impl fmt::Display for ProjectionAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProjectionAxis::PosX => "X",
            ProjectionAxis::NegX => "-X",
            ProjectionAxis::PosY => "Y",
            ProjectionAxis::NegY => "-Y",
            ProjectionAxis::PosZ => "Z",
            ProjectionAxis::NegZ => "-Z",
            ProjectionAxis::Viewport => "Viewport",
        };
        f.write_str(name)
    }
}

/// Apply `projection * world` to a point without perspective divide
pub fn project_point(
    projection: &Matrix4<f64>,
    world: &Matrix4<f64>,
    point: &Point3<f64>,
) -> Point3<f64> {
    let p = projection * (world * point.to_homogeneous());
    Point3::new(p.x, p.y, p.z)
}

/// Maps object-local points to document coordinates
#[derive(Debug, Clone)]
pub struct Projector {
    projection: Matrix4<f64>,
    origin: Point2<f64>,
    scale: f64,
}

impl Projector {
    /// `origin` is the projected top-left corner of the canvas
    pub fn new(projection: Matrix4<f64>, origin: Point2<f64>, scale: f64) -> Self {
        Self {
            projection,
            origin,
            scale,
        }
    }

    pub fn projection(&self) -> &Matrix4<f64> {
        &self.projection
    }

    /// Project, shift to the canvas origin, scale and flip Y
    pub fn project(&self, world: &Matrix4<f64>, point: &Point3<f64>) -> Point2<f64> {
        let p = project_point(&self.projection, world, point);
        Point2::new(
            (p.x - self.origin.x) * self.scale,
            -(p.y - self.origin.y) * self.scale,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn project_axis(axis: ProjectionAxis, p: Point3<f64>) -> Point3<f64> {
        let m = axis.matrix(None).unwrap();
        project_point(&m, &Matrix4::identity(), &p)
    }

    #[test]
    fn test_axis_projections() {
        let p = Point3::new(1.0, 2.0, 3.0);
        let cases = [
            (ProjectionAxis::PosZ, (1.0, 2.0)),
            (ProjectionAxis::NegZ, (1.0, -2.0)),
            (ProjectionAxis::PosX, (2.0, 3.0)),
            (ProjectionAxis::NegX, (-2.0, 3.0)),
            (ProjectionAxis::PosY, (-1.0, 3.0)),
            (ProjectionAxis::NegY, (1.0, 3.0)),
        ];

        for (axis, (x, y)) in cases {
            let q = project_axis(axis, p);
            assert_relative_eq!(q.x, x);
            assert_relative_eq!(q.y, y);
        }
    }

    #[test]
    fn test_viewport_requires_view_matrix() {
        assert!(matches!(
            ProjectionAxis::Viewport.matrix(None),
            Err(ExportError::MissingViewMatrix)
        ));

        let view = Matrix4::new_translation(&nalgebra::Vector3::new(1.0, 0.0, 0.0));
        let m = ProjectionAxis::Viewport.matrix(Some(&view)).unwrap();
        assert_eq!(m, view);
    }

    #[test]
    fn test_world_transform_applied_before_projection() {
        let world = Matrix4::new_translation(&nalgebra::Vector3::new(0.0, 5.0, 0.0));
        let m = ProjectionAxis::PosX.matrix(None).unwrap();
        let q = project_point(&m, &world, &Point3::origin());
        assert_relative_eq!(q.x, 5.0);
        assert_relative_eq!(q.y, 0.0);
    }

    #[test]
    fn test_projector_flips_and_scales() {
        let projector = Projector::new(Matrix4::identity(), Point2::new(-1.0, 2.0), 10.0);
        let p = projector.project(&Matrix4::identity(), &Point3::new(0.0, 1.0, 7.0));
        assert_relative_eq!(p.x, 10.0);
        assert_relative_eq!(p.y, 10.0);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(ProjectionAxis::NegY.to_string(), "-Y");
        assert_eq!(ProjectionAxis::default().to_string(), "Viewport");
    }
}
