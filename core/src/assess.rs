//! Validation and scoring of spiral traversal parameterizations.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::curve::{ensure_finite, Curve, EvaluateError, Spiral};
use crate::kinematics::{is_close, MotionProfile, ABS_TOLERANCE, REL_TOLERANCE};

/// Largest discrete acceleration a passing traversal may exhibit.
pub const ACCELERATION_LIMIT: f64 = 0.1;

/// Coarse taxonomy for assessment failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input is not a usable numeric sequence.
    InputType,
    /// A parameter falls outside the unit interval.
    Range,
    /// An endpoint or boundary velocity requirement is violated.
    Boundary,
    /// The acceleration bound is exceeded.
    KinematicLimit,
}

/// Rejections raised while validating a parameterization.
///
/// Checks run in a fixed order and the first violation wins; callers never
/// see more than one error per submission even when several conditions are
/// violated at once.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum AssessmentError {
    /// The parameter sequence contains no values at all.
    #[error("cannot assess an empty parameter sequence")]
    EmptyInput,
    /// A parameter is NaN or infinite.
    #[error("evaluation point at index {index} is not finite: {value}")]
    NonFiniteParameter {
        /// Position of the offending parameter.
        index: usize,
        /// The non-finite value that was submitted.
        value: f64,
    },
    /// A parameter is below the unit interval.
    #[error("cannot evaluate negative evaluation point {value} (index {index})")]
    NegativeParameter {
        /// Position of the offending parameter.
        index: usize,
        /// The negative value that was submitted.
        value: f64,
    },
    /// A parameter is above the unit interval.
    #[error("cannot evaluate evaluation point > 1: {value} (index {index})")]
    ParameterAboveOne {
        /// Position of the offending parameter.
        index: usize,
        /// The out-of-range value that was submitted.
        value: f64,
    },
    /// The sequence does not begin exactly at 0 and end exactly at 1.
    #[error("eval points must start with 0 and end with 1 (got {first} and {last})")]
    MisplacedEndpoints {
        /// First submitted parameter.
        first: f64,
        /// Last submitted parameter.
        last: f64,
    },
    /// The traversal does not begin at rest.
    #[error("you gotta start at zero velocity, not: {velocity}")]
    StartVelocity {
        /// Magnitude of the first traversal step.
        velocity: f64,
    },
    /// The traversal does not end at rest.
    #[error("you gotta end at zero velocity, not: {velocity}")]
    FinalVelocity {
        /// Magnitude of the final traversal step.
        velocity: f64,
    },
    /// The discrete acceleration bound is exceeded somewhere.
    #[error("max acceleration {max_acceleration} exceeds threshold {limit}")]
    AccelerationExceeded {
        /// Largest second-difference norm found in the traversal.
        max_acceleration: f64,
        /// The fixed bound that was violated.
        limit: f64,
    },
}

impl AssessmentError {
    /// Taxonomy bucket for the failure.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyInput | Self::NonFiniteParameter { .. } => ErrorKind::InputType,
            Self::NegativeParameter { .. } | Self::ParameterAboveOne { .. } => ErrorKind::Range,
            Self::MisplacedEndpoints { .. }
            | Self::StartVelocity { .. }
            | Self::FinalVelocity { .. } => ErrorKind::Boundary,
            Self::AccelerationExceeded { .. } => ErrorKind::KinematicLimit,
        }
    }
}

impl From<EvaluateError> for AssessmentError {
    fn from(error: EvaluateError) -> Self {
        match error {
            EvaluateError::NonFinite { index, value } => {
                Self::NonFiniteParameter { index, value }
            }
        }
    }
}

/// Qualitative score bucket reported to the caller.
///
/// Variants are declared best-first so the derived ordering agrees with
/// "fewer points is never a worse tier".
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Tier {
    /// Fewer than 25 points; beyond the best known solution.
    Superhuman,
    /// Exactly 25 points; the best solution known to the exercise.
    Optimal,
    /// 26 to 38 points.
    Exceptional,
    /// 39 to 100 points.
    Good,
    /// More than 100 points; roughly what naive sampling produces.
    Baseline,
}

impl Tier {
    /// Buckets a point-count score, evaluated high to low.
    #[must_use]
    pub fn for_score(score: usize) -> Self {
        if score > 100 {
            Self::Baseline
        } else if score > 38 {
            Self::Good
        } else if score > 25 {
            Self::Exceptional
        } else if score == 25 {
            Self::Optimal
        } else {
            Self::Superhuman
        }
    }

    /// Human-readable verdict for the tier.
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Self::Baseline => "In the ballpark of the example code. We can go faster!",
            Self::Good => "Pretty nice! You are well on your way!",
            Self::Exceptional => "Exceptional! You should be very proud!",
            Self::Optimal => "Optimal! (So far as I know...)",
            Self::Superhuman => {
                "Better than what I thought possible?! I'd love to hear how you did this!"
            }
        }
    }
}

/// Structured outcome of a successful assessment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    score: usize,
    tier: Tier,
}

impl Assessment {
    /// Number of points the traversal spent; lower is better.
    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// Qualitative bucket awarded to the score.
    #[must_use]
    pub const fn tier(&self) -> Tier {
        self.tier
    }

    /// Verdict text associated with the awarded tier.
    #[must_use]
    pub fn message(&self) -> &'static str {
        self.tier.message()
    }
}

impl fmt::Display for Assessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "You used {} points... that's... ", self.score)?;
        f.write_str(self.message())
    }
}

/// Validates and scores a parameterization of the fixed spiral.
///
/// The primary grading entry point; see [`assess_curve`] for the check
/// order. Equivalent to `assess_curve(&Spiral, eval_pts)`.
pub fn assess_answer(eval_pts: &[f64]) -> Result<Assessment, AssessmentError> {
    assess_curve(&Spiral, eval_pts)
}

/// Validates and scores a parameterization of an arbitrary curve.
///
/// Checks run in order and short-circuit on the first violation:
/// non-empty, all finite, all ≥ 0, all ≤ 1, endpoints exactly 0 and 1,
/// then the kinematic checks on the derived point sequence: start velocity
/// ≈ 0, final velocity ≈ 0, and max acceleration within
/// [`ACCELERATION_LIMIT`]. Velocity closeness uses [`is_close`] with the
/// default tolerances, so against zero the effective bound is
/// [`ABS_TOLERANCE`].
pub fn assess_curve<C: Curve>(curve: &C, eval_pts: &[f64]) -> Result<Assessment, AssessmentError> {
    if eval_pts.is_empty() {
        return Err(AssessmentError::EmptyInput);
    }
    ensure_finite(eval_pts)?;
    if let Some((index, &value)) = eval_pts.iter().enumerate().find(|(_, &value)| value < 0.0) {
        return Err(AssessmentError::NegativeParameter { index, value });
    }
    if let Some((index, &value)) = eval_pts.iter().enumerate().find(|(_, &value)| value > 1.0) {
        return Err(AssessmentError::ParameterAboveOne { index, value });
    }
    let first = eval_pts[0];
    let last = eval_pts[eval_pts.len() - 1];
    if first != 0.0 || last != 1.0 {
        return Err(AssessmentError::MisplacedEndpoints { first, last });
    }

    let points = curve.sample(eval_pts);
    let profile = MotionProfile::from_points(&points);
    if let Some(velocity) = profile.start_velocity() {
        if !is_close(velocity, 0.0, REL_TOLERANCE, ABS_TOLERANCE) {
            return Err(AssessmentError::StartVelocity { velocity });
        }
    }
    if let Some(velocity) = profile.final_velocity() {
        if !is_close(velocity, 0.0, REL_TOLERANCE, ABS_TOLERANCE) {
            return Err(AssessmentError::FinalVelocity { velocity });
        }
    }
    if let Some(peak) = profile.peak_acceleration() {
        if peak.magnitude > ACCELERATION_LIMIT {
            return Err(AssessmentError::AccelerationExceeded {
                max_acceleration: peak.magnitude,
                limit: ACCELERATION_LIMIT,
            });
        }
    }

    let score = eval_pts.len();
    Ok(Assessment {
        score,
        tier: Tier::for_score(score),
    })
}
