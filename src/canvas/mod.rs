//! Abstract 2D drawing surface modelled on the HTML canvas context.
//!
//! The frame renderer only talks to [`Canvas`], so any backend that can
//! stroke paths (the GPU tessellator here, a software rasterizer, an SVG
//! writer) can display the animation.

mod stroke;

pub use stroke::StrokeCanvas;

use crate::geometry::Point;

/// Straight RGBA colour, components in [0, 1]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Stroke colour and width (in logical units)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f32,
}

impl StrokeStyle {
    pub const fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }

    pub fn apply(&self, canvas: &mut impl Canvas) {
        canvas.set_stroke_color(self.color);
        canvas.set_line_width(self.width);
    }
}

/// Path-based drawing primitives.
///
/// Points are mapped through the current transform when they are added to
/// the path, and `stroke` scales the line width by the same transform.
pub trait Canvas {
    fn reset_transform(&mut self);
    /// Multiply the current transform by a uniform scale
    fn scale(&mut self, factor: f32);
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    fn begin_path(&mut self);
    fn move_to(&mut self, point: Point);
    fn line_to(&mut self, point: Point);
    /// Clockwise (y down) arc; joins the current point to the arc start
    fn arc(&mut self, center: Point, radius: f32, start_angle: f32, end_angle: f32);
    fn close_path(&mut self);
    fn set_line_width(&mut self, width: f32);
    fn set_stroke_color(&mut self, color: Color);
    fn stroke(&mut self);
}
