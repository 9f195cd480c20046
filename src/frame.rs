use std::f32::consts::TAU;

use crate::canvas::{Canvas, StrokeStyle};
use crate::config::Config;
use crate::geometry::PerimeterPolygon;

/// How the polygon outline returns to its first vertex
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClosingStyle {
    /// v0, v1, ..., v(n-1), v0
    Explicit,
    /// v0, v1, ..., v(n-1), v0, v1: walks two extra indices modulo n
    Wraparound,
}

/// Paints one complete frame: clear, guide circle, polygon outline.
#[derive(Clone, Debug)]
pub struct FrameRenderer {
    polygon: PerimeterPolygon,
    width: f32,
    height: f32,
    guide: StrokeStyle,
    outline: StrokeStyle,
    closing: ClosingStyle,
}

impl FrameRenderer {
    pub fn new(config: &Config) -> Self {
        Self {
            polygon: PerimeterPolygon::from_config(config),
            width: config.logical_width,
            height: config.logical_height,
            guide: config.guide,
            outline: config.outline,
            closing: config.closing,
        }
    }

    pub fn polygon(&self) -> &PerimeterPolygon {
        &self.polygon
    }

    /// Redraw from scratch with an `n`-sided polygon
    pub fn draw(&self, canvas: &mut impl Canvas, sides: usize) {
        canvas.clear_rect(0.0, 0.0, self.width, self.height);

        canvas.begin_path();
        self.guide.apply(canvas);
        canvas.arc(self.polygon.center(), self.polygon.limit_radius(), 0.0, TAU);
        canvas.stroke();

        if sides < 3 {
            return;
        }
        let points = self.polygon.vertices(sides);

        canvas.begin_path();
        self.outline.apply(canvas);
        canvas.move_to(points[0]);
        match self.closing {
            ClosingStyle::Explicit => {
                for &point in &points[1..] {
                    canvas.line_to(point);
                }
                canvas.line_to(points[0]);
            }
            ClosingStyle::Wraparound => {
                for i in 1..sides + 2 {
                    canvas.line_to(points[i % sides]);
                }
            }
        }
        canvas.stroke();
    }
}
