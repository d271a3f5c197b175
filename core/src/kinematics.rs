//! Discrete motion quantities derived from a sampled traversal.

use crate::curve::{CurvePoint, Displacement};

/// Default relative tolerance for [`is_close`] comparisons.
pub const REL_TOLERANCE: f64 = 1e-5;

/// Default absolute tolerance for [`is_close`] comparisons.
pub const ABS_TOLERANCE: f64 = 1e-8;

/// Explicit floating-point closeness comparator.
///
/// Uses the asymmetric `|a − b| ≤ abs_tol + rel_tol·|b|` form so that a
/// comparison against zero collapses to the absolute tolerance alone.
/// The defaults [`REL_TOLERANCE`] and [`ABS_TOLERANCE`] reproduce the
/// conventional "allclose" semantics.
#[must_use]
pub fn is_close(a: f64, b: f64, rel_tol: f64, abs_tol: f64) -> bool {
    (a - b).abs() <= abs_tol + rel_tol * b.abs()
}

/// Location and magnitude of the largest discrete acceleration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AccelerationPeak {
    /// Index of the point triple that produced the peak; the first triple
    /// wins when several share the same magnitude.
    pub index: usize,
    /// Euclidean norm of the peak second difference.
    pub magnitude: f64,
}

/// Finite-difference velocity and acceleration profile of a point sequence.
///
/// Velocities are the norms of consecutive displacements (length `n − 1`);
/// accelerations are the norms of consecutive displacement *vectors*
/// differenced again (length `n − 2`). Differencing the vectors rather
/// than the speed scalars keeps direction changes visible to the
/// acceleration bound.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MotionProfile {
    displacements: Vec<Displacement>,
    velocities: Vec<f64>,
    accelerations: Vec<f64>,
}

impl MotionProfile {
    /// Builds the profile for an ordered point sequence.
    #[must_use]
    pub fn from_points(points: &[CurvePoint]) -> Self {
        let displacements: Vec<Displacement> = points
            .windows(2)
            .map(|pair| pair[1].displacement_from(pair[0]))
            .collect();
        let velocities = displacements.iter().map(Displacement::norm).collect();
        let accelerations = displacements
            .windows(2)
            .map(|pair| pair[1].change_from(pair[0]).norm())
            .collect();
        Self {
            displacements,
            velocities,
            accelerations,
        }
    }

    /// Discrete velocity magnitudes, one per consecutive point pair.
    #[must_use]
    pub fn velocities(&self) -> &[f64] {
        &self.velocities
    }

    /// Discrete acceleration magnitudes, one per consecutive point triple.
    #[must_use]
    pub fn accelerations(&self) -> &[f64] {
        &self.accelerations
    }

    /// Velocity of the first traversal step, if any step exists.
    #[must_use]
    pub fn start_velocity(&self) -> Option<f64> {
        self.velocities.first().copied()
    }

    /// Velocity of the final traversal step, if any step exists.
    #[must_use]
    pub fn final_velocity(&self) -> Option<f64> {
        self.velocities.last().copied()
    }

    /// Largest acceleration together with the triple that produced it.
    ///
    /// Returns `None` for sequences shorter than three points, which have
    /// no second difference and therefore no acceleration to bound.
    #[must_use]
    pub fn peak_acceleration(&self) -> Option<AccelerationPeak> {
        let mut peak: Option<AccelerationPeak> = None;
        for (index, &magnitude) in self.accelerations.iter().enumerate() {
            let beats_current = peak.map_or(true, |current| magnitude > current.magnitude);
            if beats_current {
                peak = Some(AccelerationPeak { index, magnitude });
            }
        }
        peak
    }

    /// Displacement vectors between consecutive points.
    #[must_use]
    pub fn displacements(&self) -> &[Displacement] {
        &self.displacements
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(coords: &[(f64, f64)]) -> Vec<CurvePoint> {
        coords
            .iter()
            .map(|&(x, y)| CurvePoint::new(x, y))
            .collect()
    }

    #[test]
    fn uniform_steps_carry_no_acceleration() {
        let profile =
            MotionProfile::from_points(&points(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]));
        assert_eq!(profile.velocities(), &[1.0, 1.0, 1.0]);
        assert_eq!(profile.accelerations(), &[0.0, 0.0]);
    }

    #[test]
    fn direction_changes_register_as_acceleration() {
        // Constant speed but a right-angle turn: the scalar speeds match,
        // the displacement vectors do not.
        let profile = MotionProfile::from_points(&points(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]));
        assert_eq!(profile.velocities(), &[1.0, 1.0]);
        let peak = profile.peak_acceleration().expect("one triple");
        assert!((peak.magnitude - std::f64::consts::SQRT_2).abs() < 1e-12);
        assert_eq!(peak.index, 0);
    }

    #[test]
    fn peak_prefers_the_first_of_equal_triples() {
        let profile = MotionProfile::from_points(&points(&[
            (0.0, 0.0),
            (1.0, 0.0),
            (3.0, 0.0),
            (4.0, 0.0),
            (6.0, 0.0),
        ]));
        // Accelerations are [1, 1, 1]; the refinement loop in the sampler
        // relies on the earliest triple winning the tie.
        let peak = profile.peak_acceleration().expect("triples exist");
        assert_eq!(peak.index, 0);
        assert!((peak.magnitude - 1.0).abs() < 1e-12);
    }

    #[test]
    fn short_sequences_have_empty_profiles() {
        let pair = MotionProfile::from_points(&points(&[(0.0, 0.0), (2.0, 0.0)]));
        assert_eq!(pair.velocities().len(), 1);
        assert!(pair.accelerations().is_empty());
        assert_eq!(pair.peak_acceleration(), None);

        let single = MotionProfile::from_points(&points(&[(0.0, 0.0)]));
        assert_eq!(single.start_velocity(), None);
        assert_eq!(single.final_velocity(), None);
    }

    #[test]
    fn closeness_against_zero_uses_the_absolute_tolerance() {
        assert!(is_close(5e-9, 0.0, REL_TOLERANCE, ABS_TOLERANCE));
        assert!(!is_close(5e-8, 0.0, REL_TOLERANCE, ABS_TOLERANCE));
    }

    #[test]
    fn closeness_scales_with_the_reference_value() {
        assert!(is_close(1000.0, 1000.005, REL_TOLERANCE, ABS_TOLERANCE));
        assert!(!is_close(1000.005, 0.005, REL_TOLERANCE, ABS_TOLERANCE));
    }
}
