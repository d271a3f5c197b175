#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared presentation contracts for Spiral Grader display adapters.
//!
//! Scoring never depends on any of this: backends receive a finished
//! [`CurvePresentation`] and their failures are reported but discarded by
//! [`evaluate_curve_visualized`], so an unavailable display surface can
//! never change the evaluated points or a later assessment.

use anyhow::Result as AnyResult;
use glam::Vec2;
use spiral_grader_core::{evaluate_curve, CurvePoint, EvaluateError};
use thiserror::Error;

/// RGBA color used when presenting frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red channel intensity in the range 0.0..=1.0.
    pub red: f32,
    /// Green channel intensity in the range 0.0..=1.0.
    pub green: f32,
    /// Blue channel intensity in the range 0.0..=1.0.
    pub blue: f32,
    /// Alpha channel intensity in the range 0.0..=1.0.
    pub alpha: f32,
}

impl Color {
    /// Creates a new color from floating point channels.
    #[must_use]
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates an opaque color from byte RGB values.
    #[must_use]
    pub const fn from_rgb_u8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
            alpha: 1.0,
        }
    }

    /// Returns a new color lightened towards white by the provided amount.
    #[must_use]
    pub fn lighten(self, amount: f32) -> Self {
        let amount = amount.clamp(0.0, 1.0);

        Self {
            red: lighten_channel(self.red, amount),
            green: lighten_channel(self.green, amount),
            blue: lighten_channel(self.blue, amount),
            alpha: self.alpha,
        }
    }
}

fn lighten_channel(channel: f32, amount: f32) -> f32 {
    channel + (1.0 - channel) * amount
}

/// Axis-aligned extent of a polyline in curve space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveBounds {
    min: Vec2,
    max: Vec2,
}

impl CurveBounds {
    /// Computes the extent of the provided polyline.
    ///
    /// An empty polyline yields the unit box around the origin so a
    /// presentation can still be constructed and shown blank.
    #[must_use]
    pub fn of(polyline: &[Vec2]) -> Self {
        let Some((first, rest)) = polyline.split_first() else {
            return Self {
                min: Vec2::splat(-0.5),
                max: Vec2::splat(0.5),
            };
        };
        let mut min = *first;
        let mut max = *first;
        for point in rest {
            min = min.min(*point);
            max = max.max(*point);
        }
        Self { min, max }
    }

    /// Lower-left corner of the extent.
    #[must_use]
    pub const fn min(&self) -> Vec2 {
        self.min
    }

    /// Upper-right corner of the extent.
    #[must_use]
    pub const fn max(&self) -> Vec2 {
        self.max
    }

    /// Width and height of the extent.
    #[must_use]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Center point of the extent.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        0.5 * (self.min + self.max)
    }
}

/// Errors that can occur when constructing presentation descriptors.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum RenderingError {
    /// The target surface has no drawable area.
    #[error("viewport must have positive dimensions (received {width}x{height})")]
    EmptyViewport {
        /// Provided surface width in pixels.
        width: f32,
        /// Provided surface height in pixels.
        height: f32,
    },
}

/// Aspect-preserving projection from curve space onto a pixel surface.
///
/// Curve space is y-up, screen space is y-down; the projection flips the
/// vertical axis and centers the curve inside the margins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    scale: f32,
    screen_center: Vec2,
    world_center: Vec2,
}

impl Viewport {
    /// Fits the provided bounds into a `width` by `height` surface,
    /// keeping `margin` pixels free on every side.
    pub fn fit(
        bounds: CurveBounds,
        width: f32,
        height: f32,
        margin: f32,
    ) -> Result<Self, RenderingError> {
        if width <= 0.0 || height <= 0.0 {
            return Err(RenderingError::EmptyViewport { width, height });
        }
        let usable = Vec2::new(
            (width - 2.0 * margin).max(1.0),
            (height - 2.0 * margin).max(1.0),
        );
        let size = bounds.size().max(Vec2::splat(f32::EPSILON));
        let scale = (usable.x / size.x).min(usable.y / size.y);
        Ok(Self {
            scale,
            screen_center: Vec2::new(width * 0.5, height * 0.5),
            world_center: bounds.center(),
        })
    }

    /// Projects a curve-space position into pixel coordinates.
    #[must_use]
    pub fn to_screen(&self, world: Vec2) -> Vec2 {
        let centered = world - self.world_center;
        Vec2::new(
            self.screen_center.x + centered.x * self.scale,
            self.screen_center.y - centered.y * self.scale,
        )
    }

    /// Pixels per curve-space unit after fitting.
    #[must_use]
    pub const fn scale(&self) -> f32 {
        self.scale
    }
}

/// Everything a backend needs to draw one evaluated curve.
#[derive(Clone, Debug, PartialEq)]
pub struct CurvePresentation {
    window_title: String,
    background: Color,
    stroke: Color,
    marker: Color,
    polyline: Vec<Vec2>,
}

impl CurvePresentation {
    /// Background drawn behind the curve.
    pub const BACKGROUND: Color = Color::from_rgb_u8(16, 16, 24);
    /// Stroke used for the polyline joining the samples.
    pub const STROKE: Color = Color::from_rgb_u8(96, 160, 255);

    /// Builds a presentation for an evaluated point sequence.
    #[must_use]
    pub fn from_points(points: &[CurvePoint]) -> Self {
        let polyline = points
            .iter()
            .map(|point| Vec2::new(point.x() as f32, point.y() as f32))
            .collect();
        Self {
            window_title: String::from("Spiral Grader"),
            background: Self::BACKGROUND,
            stroke: Self::STROKE,
            marker: Self::STROKE.lighten(0.4),
            polyline,
        }
    }

    /// Replaces the window title shown by windowed backends.
    #[must_use]
    pub fn with_window_title<T>(mut self, title: T) -> Self
    where
        T: Into<String>,
    {
        self.window_title = title.into();
        self
    }

    /// Title windowed backends should display.
    #[must_use]
    pub fn window_title(&self) -> &str {
        &self.window_title
    }

    /// Background color for the frame.
    #[must_use]
    pub const fn background(&self) -> Color {
        self.background
    }

    /// Stroke color for the polyline.
    #[must_use]
    pub const fn stroke(&self) -> Color {
        self.stroke
    }

    /// Fill color for the per-sample markers.
    #[must_use]
    pub const fn marker(&self) -> Color {
        self.marker
    }

    /// Curve samples in evaluation order.
    #[must_use]
    pub fn polyline(&self) -> &[Vec2] {
        &self.polyline
    }

    /// Extent of the polyline in curve space.
    #[must_use]
    pub fn bounds(&self) -> CurveBounds {
        CurveBounds::of(&self.polyline)
    }
}

/// Display surface capable of presenting an evaluated curve.
pub trait RenderingBackend {
    /// Presents the curve until the surface is dismissed.
    fn present(self, presentation: CurvePresentation) -> AnyResult<()>;
}

/// Evaluates the fixed spiral and shows the result on `backend`.
///
/// This is the "visualize" flavor of `evaluate_curve`: the points are
/// computed first and returned unconditionally; a presentation failure is
/// reported on stderr and otherwise ignored.
pub fn evaluate_curve_visualized<B>(
    eval_pts: &[f64],
    backend: B,
) -> Result<Vec<CurvePoint>, EvaluateError>
where
    B: RenderingBackend,
{
    let points = evaluate_curve(eval_pts)?;
    if let Err(error) = backend.present(CurvePresentation::from_points(&points)) {
        eprintln!("curve presentation failed: {error:#}");
    }
    Ok(points)
}
