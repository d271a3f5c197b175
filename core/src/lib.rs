#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core scoring contracts for the Spiral Grader.
//!
//! This crate grades caller-supplied parameterizations of a fixed planar
//! spiral. [`evaluate_curve`] maps parameters to points on the spiral, and
//! [`assess_answer`] validates a parameterization against the kinematic
//! constraints (zero boundary velocity, bounded discrete acceleration)
//! before awarding a point-count score and a qualitative [`Tier`]. Both
//! entry points are pure: no state outlives a call, and equal inputs
//! produce bit-identical outputs.

mod assess;
mod curve;
mod kinematics;

pub use assess::{
    assess_answer, assess_curve, Assessment, AssessmentError, ErrorKind, Tier,
    ACCELERATION_LIMIT,
};
pub use curve::{
    evaluate_curve, Curve, CurvePoint, Displacement, Ellipse, EvaluateError, Line, Spiral,
};
pub use kinematics::{is_close, AccelerationPeak, MotionProfile, ABS_TOLERANCE, REL_TOLERANCE};
