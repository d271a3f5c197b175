//! Planar curve families and the fixed spiral evaluated by the grader.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Planar point produced by evaluating a curve parameterization.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    x: f64,
    y: f64,
}

impl CurvePoint {
    /// Creates a point from cartesian coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Horizontal coordinate of the point.
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Vertical coordinate of the point.
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Vector pointing from `origin` to this point.
    #[must_use]
    pub fn displacement_from(&self, origin: CurvePoint) -> Displacement {
        Displacement {
            dx: self.x - origin.x,
            dy: self.y - origin.y,
        }
    }
}

/// Difference vector between two curve points.
///
/// Consecutive displacements of a sampled traversal act as discrete
/// velocities; their differences act as discrete accelerations.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Displacement {
    dx: f64,
    dy: f64,
}

impl Displacement {
    /// Horizontal component of the displacement.
    #[must_use]
    pub const fn dx(&self) -> f64 {
        self.dx
    }

    /// Vertical component of the displacement.
    #[must_use]
    pub const fn dy(&self) -> f64 {
        self.dy
    }

    /// Euclidean norm of the displacement.
    #[must_use]
    pub fn norm(&self) -> f64 {
        (self.dx * self.dx + self.dy * self.dy).sqrt()
    }

    /// Component-wise difference between this displacement and `earlier`.
    #[must_use]
    pub fn change_from(&self, earlier: Displacement) -> Displacement {
        Displacement {
            dx: self.dx - earlier.dx,
            dy: self.dy - earlier.dy,
        }
    }
}

/// Planar curve evaluated over scalar parameters.
pub trait Curve {
    /// Evaluates the curve at the provided parameter.
    fn point_at(&self, t: f64) -> CurvePoint;

    /// Evaluates every parameter in order, yielding an index-aligned point
    /// sequence of the same length.
    fn sample(&self, params: &[f64]) -> Vec<CurvePoint> {
        params.iter().map(|&t| self.point_at(t)).collect()
    }
}

/// The fixed spiral graded by the assessor.
///
/// Defined over the unit parameter interval as
/// `radius(t) = 3t + 1`, `x(t) = cos(π − πt)·radius(t)`,
/// `y(t) = sin(πt)·radius(t)`, sweeping from `(-1, 0)` out to `(4, 0)`.
/// The formula is total: parameters outside `[0, 1]` still produce
/// geometrically valid samples, they just leave the intended arc.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Spiral;

impl Curve for Spiral {
    fn point_at(&self, t: f64) -> CurvePoint {
        let radius = t * 3.0 + 1.0;
        CurvePoint {
            x: (PI - t * PI).cos() * radius,
            y: (t * PI).sin() * radius,
        }
    }
}

/// Straight segment interpolated between two endpoints over `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    start: CurvePoint,
    end: CurvePoint,
}

impl Line {
    /// Creates a segment between the provided endpoints.
    #[must_use]
    pub const fn new(start: CurvePoint, end: CurvePoint) -> Self {
        Self { start, end }
    }
}

impl Curve for Line {
    fn point_at(&self, t: f64) -> CurvePoint {
        CurvePoint {
            x: self.start.x + t * (self.end.x - self.start.x),
            y: self.start.y + t * (self.end.y - self.start.y),
        }
    }
}

/// Axis-aligned ellipse; a circle when both radii match.
///
/// The parameter is interpreted directly as the angle in radians, so the
/// unit interval traces roughly the first 57° of arc.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipse {
    center: CurvePoint,
    radius_x: f64,
    radius_y: f64,
}

impl Ellipse {
    /// Creates an ellipse centered at `center` with the provided radii.
    #[must_use]
    pub const fn new(center: CurvePoint, radius_x: f64, radius_y: f64) -> Self {
        Self {
            center,
            radius_x,
            radius_y,
        }
    }
}

impl Curve for Ellipse {
    fn point_at(&self, t: f64) -> CurvePoint {
        CurvePoint {
            x: self.center.x + self.radius_x * t.cos(),
            y: self.center.y + self.radius_y * t.sin(),
        }
    }
}

/// Rejection raised when a parameter sequence cannot be evaluated.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum EvaluateError {
    /// A parameter is NaN or infinite and has no point on the curve.
    #[error("evaluation point at index {index} is not finite: {value}")]
    NonFinite {
        /// Position of the offending parameter within the input.
        index: usize,
        /// The non-finite value that was submitted.
        value: f64,
    },
}

/// Maps a parameter sequence onto the fixed [`Spiral`].
///
/// The output has the same length and ordering as the input and is
/// deterministic: equal inputs produce bit-identical points. Range is not
/// enforced here; only finiteness is checked, once, at this boundary.
pub fn evaluate_curve(eval_pts: &[f64]) -> Result<Vec<CurvePoint>, EvaluateError> {
    ensure_finite(eval_pts)?;
    Ok(Spiral.sample(eval_pts))
}

/// Rejects the first NaN or infinite entry in the sequence.
pub(crate) fn ensure_finite(eval_pts: &[f64]) -> Result<(), EvaluateError> {
    for (index, &value) in eval_pts.iter().enumerate() {
        if !value.is_finite() {
            return Err(EvaluateError::NonFinite { index, value });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spiral_starts_on_inner_radius() {
        let points = evaluate_curve(&[0.0]).expect("finite input");
        assert_eq!(points.len(), 1);
        assert!((points[0].x() - (-1.0)).abs() < 1e-12);
        assert!(points[0].y().abs() < 1e-12);
    }

    #[test]
    fn spiral_ends_on_outer_radius() {
        let points = evaluate_curve(&[1.0]).expect("finite input");
        assert!((points[0].x() - 4.0).abs() < 1e-12);
        // sin(π) is not exactly zero in floating point.
        assert!(points[0].y().abs() < 1e-12);
    }

    #[test]
    fn spiral_midpoint_sits_atop_the_origin() {
        let point = Spiral.point_at(0.5);
        assert!(point.x().abs() < 1e-12);
        assert!((point.y() - 2.5).abs() < 1e-12);
    }

    #[test]
    fn evaluation_preserves_length_and_order() {
        let params = [0.0, 0.25, 0.5, 0.75, 1.0];
        let points = evaluate_curve(&params).expect("finite input");
        assert_eq!(points.len(), params.len());
        for (&t, point) in params.iter().zip(&points) {
            let expected = Spiral.point_at(t);
            assert_eq!(point, &expected);
        }
    }

    #[test]
    fn evaluation_is_bit_identical_across_calls() {
        let params = [0.0, 0.1, 0.37, 0.91, 1.0];
        let first = evaluate_curve(&params).expect("finite input");
        let second = evaluate_curve(&params).expect("finite input");
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.x().to_bits(), b.x().to_bits());
            assert_eq!(a.y().to_bits(), b.y().to_bits());
        }
    }

    #[test]
    fn out_of_range_parameters_are_still_evaluated() {
        let points = evaluate_curve(&[-0.5, 1.5]).expect("finite input");
        assert_eq!(points.len(), 2);
        assert!(points[0].x().is_finite() && points[1].y().is_finite());
    }

    #[test]
    fn non_finite_parameters_are_rejected() {
        let error = evaluate_curve(&[0.0, f64::NAN, 1.0]).expect_err("NaN must be rejected");
        match error {
            EvaluateError::NonFinite { index, value } => {
                assert_eq!(index, 1);
                assert!(value.is_nan());
            }
        }
    }

    #[test]
    fn line_interpolates_between_endpoints() {
        let line = Line::new(CurvePoint::new(0.0, 0.0), CurvePoint::new(2.0, -4.0));
        let mid = line.point_at(0.5);
        assert!((mid.x() - 1.0).abs() < 1e-12);
        assert!((mid.y() - (-2.0)).abs() < 1e-12);
    }

    #[test]
    fn ellipse_parameter_is_an_angle() {
        let circle = Ellipse::new(CurvePoint::new(1.0, 1.0), 2.0, 2.0);
        let start = circle.point_at(0.0);
        assert!((start.x() - 3.0).abs() < 1e-12);
        assert!((start.y() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn displacement_norm_is_euclidean() {
        let from = CurvePoint::new(1.0, 2.0);
        let to = CurvePoint::new(4.0, 6.0);
        let displacement = to.displacement_from(from);
        assert!((displacement.norm() - 5.0).abs() < 1e-12);
        assert!((displacement.dx() - 3.0).abs() < 1e-12);
        assert!((displacement.dy() - 4.0).abs() < 1e-12);
    }
}
