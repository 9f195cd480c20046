use std::f32::consts::TAU;

use super::{Canvas, Color};
use crate::geometry::Point;
use crate::gpu::Vertex;

/// Segments used to flatten a full circle
const ARC_SEGMENTS: f32 = 128.0;

#[derive(Clone, Debug, Default)]
struct Subpath {
    points: Vec<Point>,
    closed: bool,
}

/// Canvas backend that tessellates strokes into triangles for the GPU.
///
/// Every stroked segment becomes a quad (two triangles) of the line width,
/// in device pixels with the origin top-left. Vertices accumulate until
/// `clear_rect` drops them or [`StrokeCanvas::clear`] is called.
#[derive(Clone, Debug)]
pub struct StrokeCanvas {
    scale: f32,
    line_width: f32,
    color: Color,
    subpaths: Vec<Subpath>,
    vertices: Vec<Vertex>,
}

impl Default for StrokeCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl StrokeCanvas {
    pub fn new() -> Self {
        Self {
            scale: 1.0,
            line_width: 1.0,
            color: Color::BLACK,
            subpaths: Vec::new(),
            vertices: Vec::new(),
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[cfg(test)]
    pub fn current_scale(&self) -> f32 {
        self.scale
    }

    /// Drop all batched geometry
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    fn to_device(&self, point: Point) -> Point {
        point * self.scale
    }

    fn push_device_point(&mut self, point: Point) {
        match self.subpaths.last_mut() {
            Some(subpath) if !subpath.closed => subpath.points.push(point),
            Some(closed) => {
                // A closed subpath hands its start point to the next one
                let start = closed.points[0];
                self.subpaths.push(Subpath {
                    points: vec![start, point],
                    closed: false,
                });
            }
            None => self.subpaths.push(Subpath {
                points: vec![point],
                closed: false,
            }),
        }
    }

    fn push_segment(&mut self, from: Point, to: Point, half_width: f32) {
        let delta = to - from;
        let length = from.distance(to);
        if length <= f32::EPSILON {
            return;
        }
        let normal = Point::new(-delta.y / length, delta.x / length) * half_width;
        let color = self.color.to_array();
        let corners = [
            from + normal,
            from - normal,
            to + normal,
            to + normal,
            from - normal,
            to - normal,
        ];
        self.vertices
            .extend(corners.iter().map(|p| Vertex::new([p.x, p.y], color)));
    }
}

impl Canvas for StrokeCanvas {
    fn reset_transform(&mut self) {
        self.scale = 1.0;
    }

    fn scale(&mut self, factor: f32) {
        self.scale *= factor;
    }

    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let min = self.to_device(Point::new(x, y));
        let max = self.to_device(Point::new(x + width, y + height));

        // Any triangle touching the rect goes, even if it spills outside
        let overlaps = |triangle: &[Vertex]| {
            let xs = triangle.iter().map(|v| v.position[0]);
            let ys = triangle.iter().map(|v| v.position[1]);
            let (lo_x, hi_x) = xs.fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), x| {
                (lo.min(x), hi.max(x))
            });
            let (lo_y, hi_y) = ys.fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), y| {
                (lo.min(y), hi.max(y))
            });
            hi_x >= min.x && lo_x <= max.x && hi_y >= min.y && lo_y <= max.y
        };

        let kept: Vec<Vertex> = self
            .vertices
            .chunks_exact(3)
            .filter(|triangle| !overlaps(*triangle))
            .flatten()
            .copied()
            .collect();
        self.vertices = kept;
    }

    fn begin_path(&mut self) {
        self.subpaths.clear();
    }

    fn move_to(&mut self, point: Point) {
        let point = self.to_device(point);
        self.subpaths.push(Subpath {
            points: vec![point],
            closed: false,
        });
    }

    fn line_to(&mut self, point: Point) {
        let point = self.to_device(point);
        self.push_device_point(point);
    }

    fn arc(&mut self, center: Point, radius: f32, start_angle: f32, end_angle: f32) {
        let sweep = (end_angle - start_angle).clamp(-TAU, TAU);
        let segments = (ARC_SEGMENTS * sweep.abs() / TAU).ceil().max(1.0) as usize;

        for i in 0..=segments {
            let angle = start_angle + sweep * i as f32 / segments as f32;
            let (sin, cos) = angle.sin_cos();
            let point = self.to_device(center + Point::new(radius * cos, radius * sin));
            if i == 0 && self.subpaths.is_empty() {
                self.subpaths.push(Subpath {
                    points: vec![point],
                    closed: false,
                });
            } else {
                self.push_device_point(point);
            }
        }
    }

    fn close_path(&mut self) {
        if let Some(subpath) = self.subpaths.last_mut() {
            subpath.closed = true;
        }
    }

    fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.color = color;
    }

    fn stroke(&mut self) {
        let half_width = self.line_width * self.scale / 2.0;
        let subpaths = std::mem::take(&mut self.subpaths);

        for subpath in &subpaths {
            for pair in subpath.points.windows(2) {
                self.push_segment(pair[0], pair[1], half_width);
            }
            if subpath.closed && subpath.points.len() > 2 {
                let last = subpath.points[subpath.points.len() - 1];
                self.push_segment(last, subpath.points[0], half_width);
            }
        }

        // Stroking does not consume the path
        self.subpaths = subpaths;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(canvas: &mut StrokeCanvas) {
        canvas.begin_path();
        canvas.move_to(Point::new(10.0, 10.0));
        canvas.line_to(Point::new(20.0, 10.0));
        canvas.line_to(Point::new(20.0, 20.0));
        canvas.line_to(Point::new(10.0, 20.0));
    }

    #[test]
    fn test_six_vertices_per_segment() {
        let mut canvas = StrokeCanvas::new();
        square(&mut canvas);
        canvas.stroke();
        assert_eq!(canvas.vertices().len(), 3 * 6);
    }

    #[test]
    fn test_close_path_adds_closing_edge() {
        let mut canvas = StrokeCanvas::new();
        square(&mut canvas);
        canvas.close_path();
        canvas.stroke();
        assert_eq!(canvas.vertices().len(), 4 * 6);
    }

    #[test]
    fn test_zero_length_segments_skipped() {
        let mut canvas = StrokeCanvas::new();
        canvas.begin_path();
        canvas.move_to(Point::new(5.0, 5.0));
        canvas.line_to(Point::new(5.0, 5.0));
        canvas.stroke();
        assert!(canvas.vertices().is_empty());
    }

    #[test]
    fn test_quad_has_line_width() {
        let mut canvas = StrokeCanvas::new();
        canvas.set_line_width(4.0);
        canvas.set_stroke_color(Color::rgba(1.0, 0.0, 0.0, 0.5));
        canvas.begin_path();
        canvas.move_to(Point::new(0.0, 10.0));
        canvas.line_to(Point::new(100.0, 10.0));
        canvas.stroke();

        let ys: Vec<f32> = canvas.vertices().iter().map(|v| v.position[1]).collect();
        let min = ys.iter().cloned().fold(f32::INFINITY, f32::min);
        let max = ys.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
        assert!((min - 8.0).abs() < 1e-5);
        assert!((max - 12.0).abs() < 1e-5);
        assert!(canvas
            .vertices()
            .iter()
            .all(|v| v.color == [1.0, 0.0, 0.0, 0.5]));
    }

    #[test]
    fn test_transform_scales_points_and_width() {
        let mut canvas = StrokeCanvas::new();
        canvas.scale(2.0);
        canvas.set_line_width(1.0);
        canvas.begin_path();
        canvas.move_to(Point::new(0.0, 10.0));
        canvas.line_to(Point::new(50.0, 10.0));
        canvas.stroke();

        let xs: Vec<f32> = canvas.vertices().iter().map(|v| v.position[0]).collect();
        assert!(xs.iter().any(|&x| (x - 100.0).abs() < 1e-4));
        let ys: Vec<f32> = canvas.vertices().iter().map(|v| v.position[1]).collect();
        assert!(ys.iter().all(|&y| (y - 20.0).abs() <= 1.0 + 1e-4));

        canvas.reset_transform();
        assert_eq!(canvas.current_scale(), 1.0);
    }

    #[test]
    fn test_scale_accumulates() {
        let mut canvas = StrokeCanvas::new();
        canvas.scale(2.0);
        canvas.scale(1.5);
        assert_eq!(canvas.current_scale(), 3.0);
    }

    #[test]
    fn test_clear_rect_drops_enclosed_geometry() {
        let mut canvas = StrokeCanvas::new();
        square(&mut canvas);
        canvas.stroke();
        canvas.begin_path();
        canvas.move_to(Point::new(200.0, 200.0));
        canvas.line_to(Point::new(300.0, 200.0));
        canvas.stroke();
        assert_eq!(canvas.vertices().len(), 4 * 6);

        canvas.clear_rect(0.0, 0.0, 100.0, 100.0);
        assert_eq!(canvas.vertices().len(), 6);
        assert!(canvas.vertices().iter().all(|v| v.position[0] >= 200.0));
    }

    #[test]
    fn test_clear_rect_drops_straddling_geometry() {
        let mut canvas = StrokeCanvas::new();
        canvas.begin_path();
        canvas.move_to(Point::new(50.0, 50.0));
        canvas.line_to(Point::new(150.0, 50.0));
        canvas.stroke();
        assert_eq!(canvas.vertices().len(), 6);

        // Segment starts inside and ends outside the cleared region
        canvas.clear_rect(0.0, 0.0, 100.0, 100.0);
        assert!(canvas.vertices().is_empty());
    }

    #[test]
    fn test_clear_rect_uses_transform() {
        let mut canvas = StrokeCanvas::new();
        canvas.scale(2.0);
        square(&mut canvas);
        canvas.stroke();
        // Logical 0..25 covers device 0..50, which holds the whole square
        canvas.clear_rect(0.0, 0.0, 25.0, 25.0);
        assert!(canvas.vertices().is_empty());
    }

    #[test]
    fn test_full_circle_arc() {
        let mut canvas = StrokeCanvas::new();
        canvas.begin_path();
        canvas.arc(Point::new(50.0, 50.0), 10.0, 0.0, TAU);
        canvas.stroke();
        assert_eq!(canvas.vertices().len(), 128 * 6);

        let center = Point::new(50.0, 50.0);
        for v in canvas.vertices() {
            let d = Point::new(v.position[0], v.position[1]).distance(center);
            assert!((d - 10.0).abs() <= 0.5 + 1e-3);
        }
    }

    #[test]
    fn test_arc_joins_current_point() {
        let mut canvas = StrokeCanvas::new();
        canvas.begin_path();
        canvas.move_to(Point::new(0.0, 0.0));
        canvas.arc(Point::new(50.0, 50.0), 10.0, 0.0, TAU / 4.0);
        canvas.stroke();
        // One joining segment plus 32 arc segments
        assert_eq!(canvas.vertices().len(), 33 * 6);
    }

    #[test]
    fn test_line_after_close_starts_at_subpath_start() {
        let mut canvas = StrokeCanvas::new();
        square(&mut canvas);
        canvas.close_path();
        canvas.line_to(Point::new(10.0, 40.0));
        canvas.stroke();
        // 4 closed-square edges plus (10,10) -> (10,40)
        assert_eq!(canvas.vertices().len(), 5 * 6);
    }

    #[test]
    fn test_clear_drops_everything() {
        let mut canvas = StrokeCanvas::new();
        square(&mut canvas);
        canvas.stroke();
        canvas.clear();
        assert!(canvas.vertices().is_empty());
    }
}
