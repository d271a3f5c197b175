#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure discretization system that plans constraint-satisfying traversals.
//!
//! Given any [`Curve`], the sampler produces a parameter sequence whose
//! motion profile stays under the discrete acceleration limit while the
//! duplicated endpoints pin both boundary velocities to exactly zero. The
//! output of [`CurveSampler::discretize`] for the fixed spiral passes the
//! core assessor at the default limit.

use spiral_grader_core::{Curve, MotionProfile, ACCELERATION_LIMIT};

/// Adaptive bisection sampler for planar curves.
///
/// Starts from the coarsest admissible traversal and repeatedly refines
/// the point triple with the worst acceleration: the wider of the triple's
/// two parameter intervals is split at its midpoint. Refinement stops once
/// the whole profile fits under the limit or the refinement budget runs
/// out. Splitting the globally worst triple (rather than subdividing
/// segments in isolation) is what guarantees the finished sequence passes
/// the same global check the assessor applies.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveSampler {
    acceleration_limit: f64,
    max_refinements: usize,
}

impl CurveSampler {
    /// Creates a sampler targeting the provided acceleration limit.
    #[must_use]
    pub const fn new(acceleration_limit: f64, max_refinements: usize) -> Self {
        Self {
            acceleration_limit,
            max_refinements,
        }
    }

    /// Acceleration bound the produced traversal must satisfy.
    #[must_use]
    pub const fn acceleration_limit(&self) -> f64 {
        self.acceleration_limit
    }

    /// Produces a parameter sequence over `[0, 1]` for the curve.
    ///
    /// The sequence always starts with a duplicated 0 and ends with a
    /// duplicated 1, so its boundary velocities are exactly zero
    /// regardless of how far refinement proceeded.
    #[must_use]
    pub fn discretize<C: Curve>(&self, curve: &C) -> Vec<f64> {
        let mut params = vec![0.0, 0.0, 0.5, 1.0, 1.0];
        for _ in 0..self.max_refinements {
            let profile = MotionProfile::from_points(&curve.sample(&params));
            let Some(peak) = profile.peak_acceleration() else {
                break;
            };
            if peak.magnitude <= self.acceleration_limit {
                break;
            }
            // The peak triple spans params[i..=i+2]; split its wider side.
            let i = peak.index;
            let left = params[i + 1] - params[i];
            let right = params[i + 2] - params[i + 1];
            if left >= right {
                params.insert(i + 1, 0.5 * (params[i] + params[i + 1]));
            } else {
                params.insert(i + 2, 0.5 * (params[i + 1] + params[i + 2]));
            }
        }
        params
    }
}

impl Default for CurveSampler {
    fn default() -> Self {
        Self {
            acceleration_limit: ACCELERATION_LIMIT,
            max_refinements: 20_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spiral_grader_core::{
        assess_answer, assess_curve, CurvePoint, Ellipse, Line, Spiral, Tier,
    };

    #[test]
    fn spiral_discretization_passes_assessment() {
        let params = CurveSampler::default().discretize(&Spiral);
        let assessment = assess_answer(&params).expect("sampler output must satisfy constraints");
        assert_eq!(assessment.score(), params.len());
        assert_eq!(assessment.tier(), Tier::Good);
    }

    #[test]
    fn tighter_limits_spend_more_points() {
        let coarse = CurveSampler::default().discretize(&Spiral);
        let fine = CurveSampler::new(0.02, 20_000).discretize(&Spiral);
        assert!(fine.len() > coarse.len());

        // Still graded against the fixed 0.1 bound, so the finer traversal
        // passes as well, just with a worse tier.
        let assessment = assess_answer(&fine).expect("finer traversal still passes");
        assert_eq!(assessment.tier(), Tier::Baseline);
        assert!(assessment.score() > 100);
    }

    #[test]
    fn endpoints_are_duplicated_for_zero_boundary_velocity() {
        let params = CurveSampler::default().discretize(&Spiral);
        assert_eq!(params[0], 0.0);
        assert_eq!(params[1], 0.0);
        assert_eq!(params[params.len() - 2], 1.0);
        assert_eq!(params[params.len() - 1], 1.0);
    }

    #[test]
    fn discretization_is_monotonic() {
        let params = CurveSampler::default().discretize(&Spiral);
        for pair in params.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn straight_segments_work_with_the_generic_assessor() {
        let line = Line::new(CurvePoint::new(0.0, 0.0), CurvePoint::new(1.0, 1.0));
        let sampler = CurveSampler::default();
        let params = sampler.discretize(&line);
        let assessment = assess_curve(&line, &params).expect("line traversal passes");
        assert_eq!(assessment.score(), params.len());
    }

    #[test]
    fn ellipse_arcs_work_with_the_generic_assessor() {
        let ellipse = Ellipse::new(CurvePoint::new(1.0, 1.0), 3.0, 2.0);
        let params = CurveSampler::default().discretize(&ellipse);
        let assessment = assess_curve(&ellipse, &params).expect("ellipse traversal passes");
        assert_eq!(assessment.score(), params.len());
    }

    #[test]
    fn profile_actually_fits_under_the_requested_limit() {
        let sampler = CurveSampler::new(0.05, 20_000);
        let params = sampler.discretize(&Spiral);
        let profile = MotionProfile::from_points(&Spiral.sample(&params));
        let peak = profile.peak_acceleration().expect("profile has triples");
        assert!(peak.magnitude <= sampler.acceleration_limit());
    }
}
