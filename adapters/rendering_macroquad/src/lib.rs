#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Macroquad-backed plotting surface for the Spiral Grader.
//!
//! Macroquad's optional audio stack depends on native ALSA development
//! libraries, which are unavailable in containerised CI environments, so
//! we depend on macroquad without its default `audio` feature.
//!
//! The backend opens a window, draws the evaluated polyline with
//! per-sample markers, and returns once the window is dismissed with
//! Escape or Q. It is presentation-only: nothing here feeds back into
//! evaluation or scoring.

use anyhow::Result;
use glam::Vec2;
use macroquad::input::{is_key_pressed, KeyCode};
use spiral_grader_rendering::{Color, CurvePresentation, RenderingBackend, Viewport};

/// Margin kept free around the curve, in pixels.
const FRAME_MARGIN: f32 = 48.0;

/// Interactive plotting surface backed by a macroquad window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MacroquadBackend {
    window_width: i32,
    window_height: i32,
}

impl MacroquadBackend {
    /// Creates a backend with the default 800x600 window.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            window_width: 0,
            window_height: 0,
        }
    }

    /// Overrides the initial window dimensions.
    #[must_use]
    pub const fn with_window_size(mut self, width: i32, height: i32) -> Self {
        self.window_width = width;
        self.window_height = height;
        self
    }

    fn window_size(&self) -> (i32, i32) {
        let width = if self.window_width > 0 {
            self.window_width
        } else {
            800
        };
        let height = if self.window_height > 0 {
            self.window_height
        } else {
            600
        };
        (width, height)
    }
}

impl RenderingBackend for MacroquadBackend {
    fn present(self, presentation: CurvePresentation) -> Result<()> {
        let (window_width, window_height) = self.window_size();
        let config = macroquad::window::Conf {
            window_title: presentation.window_title().to_owned(),
            window_width,
            window_height,
            ..macroquad::window::Conf::default()
        };

        macroquad::Window::from_config(config, async move {
            let background = to_macroquad_color(presentation.background());
            let stroke = to_macroquad_color(presentation.stroke());
            let marker = to_macroquad_color(presentation.marker());
            let bounds = presentation.bounds();

            loop {
                if is_key_pressed(KeyCode::Escape) || is_key_pressed(KeyCode::Q) {
                    break;
                }

                macroquad::window::clear_background(background);

                // Refit every frame so window resizes keep the curve centered.
                let fitted = Viewport::fit(
                    bounds,
                    macroquad::window::screen_width(),
                    macroquad::window::screen_height(),
                    FRAME_MARGIN,
                );
                if let Ok(viewport) = fitted {
                    draw_polyline(presentation.polyline(), &viewport, stroke, marker);
                }

                macroquad::window::next_frame().await;
            }
        });

        Ok(())
    }
}

fn draw_polyline(
    polyline: &[Vec2],
    viewport: &Viewport,
    stroke: macroquad::color::Color,
    marker: macroquad::color::Color,
) {
    let radius = marker_radius(viewport.scale());
    for pair in polyline.windows(2) {
        let start = viewport.to_screen(pair[0]);
        let end = viewport.to_screen(pair[1]);
        macroquad::shapes::draw_line(start.x, start.y, end.x, end.y, 2.0, stroke);
    }
    for point in polyline {
        let center = viewport.to_screen(*point);
        macroquad::shapes::draw_circle(center.x, center.y, radius, marker);
    }
}

/// Marker radius scaled with the projection, clamped so dense traversals
/// stay legible and sparse ones do not balloon.
fn marker_radius(scale: f32) -> f32 {
    (scale * 0.02).clamp(2.0, 6.0)
}

fn to_macroquad_color(color: Color) -> macroquad::color::Color {
    macroquad::color::Color::new(color.red, color.green, color.blue, color.alpha)
}
