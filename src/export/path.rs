use super::projection::Projector;
use super::types::{BezierPoint, CurveObject, Spline};
use nalgebra::{Matrix4, Point2, Point3};
use tracing::warn;

/// Format a number with 11 fractional digits, treating -0 as 0
fn f(n: f64) -> String {
    let n = if n == 0.0 { 0.0 } else { n };
    format!("{:5.11}", n)
}

fn move_to(p: Point2<f64>) -> String {
    format!("M {} {} \n", f(p.x), f(p.y))
}

fn curve_to(c0: Point2<f64>, c1: Point2<f64>, p: Point2<f64>) -> String {
    format!(
        "C {} {}, {} {}, {} {} \n",
        f(c0.x),
        f(c0.y),
        f(c1.x),
        f(c1.y),
        f(p.x),
        f(p.y)
    )
}

/// Cubic segment from `start` to `end` using the outgoing handle of `start`
/// and the incoming handle of `end`
fn segment<P>(project: &P, start: &BezierPoint, end: &BezierPoint) -> String
where
    P: Fn(&Point3<f64>) -> Point2<f64>,
{
    curve_to(
        project(&start.handle_right),
        project(&end.handle_left),
        project(&end.co),
    )
}

/// Generate SVG path data for one spline.
///
/// Returns `None` for splines the serializer cannot express (non-Bezier or
/// without points).
pub fn spline_path_data<P>(spline: &Spline, project: P) -> Option<String>
where
    P: Fn(&Point3<f64>) -> Point2<f64>,
{
    if !spline.is_exportable() {
        return None;
    }

    let points = &spline.bezier_points;
    let first = &points[0];
    let last = &points[points.len() - 1];

    let mut d = move_to(project(&first.co));
    for pair in points.windows(2) {
        d.push_str(&segment(&project, &pair[0], &pair[1]));
    }

    if spline.cyclic {
        d.push_str(&segment(&project, last, first));
    }

    Some(d)
}

/// Concatenated path data of every spline of an object.
///
/// Skipped splines produce one warning each, both logged and pushed to `log`.
pub fn object_path_data(
    object: &CurveObject,
    projector: &Projector,
    log: &mut Vec<String>,
) -> String {
    let world: &Matrix4<f64> = &object.matrix_world;
    let project = |p: &Point3<f64>| projector.project(world, p);

    let mut d = String::new();
    for spline in &object.splines {
        match spline_path_data(spline, &project) {
            Some(spline_d) => d.push_str(&spline_d),
            None => {
                let message = format!("Non-bezier curve not exported in object: {}", object.name);
                warn!("{}", message);
                log.push(message);
            }
        }
    }
    d
}
