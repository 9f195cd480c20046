use std::f32::consts::{PI, TAU};

use super::Point;
use crate::config::Config;

/// Regular polygons sharing one fixed perimeter, centred on a point.
///
/// The circumradius is chosen per vertex count so that a hexagon and a
/// 100-gon have the same perimeter rather than the same radius. As `n`
/// grows the shape approaches a circle of circumference `perimeter`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PerimeterPolygon {
    perimeter: f32,
    center: Point,
}

impl PerimeterPolygon {
    pub fn new(perimeter: f32, center: Point) -> Self {
        Self { perimeter, center }
    }

    /// Polygon centred on the logical canvas with the configured perimeter
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.perimeter_target(),
            Point::new(config.logical_width / 2.0, config.logical_height / 2.0),
        )
    }

    pub fn perimeter(&self) -> f32 {
        self.perimeter
    }

    pub fn center(&self) -> Point {
        self.center
    }

    /// Circumradius of the regular `n`-gon whose perimeter is the target.
    /// `n` may be fractional.
    pub fn radius(&self, n: f32) -> f32 {
        self.perimeter / (2.0 * n * (PI / n).sin())
    }

    /// Radius of the limiting circle (n -> infinity)
    pub fn limit_radius(&self) -> f32 {
        self.perimeter / TAU
    }

    /// Vertex `k` of an `n`-gon; vertex 0 points straight up
    pub fn vertex(&self, n: usize, k: usize) -> Point {
        let radius = self.radius(n as f32);
        let theta = TAU * k as f32 / n as f32;
        let (sin, cos) = theta.sin_cos();
        self.center + Point::new(radius * sin, -radius * cos)
    }

    pub fn vertices(&self, n: usize) -> Vec<Point> {
        (0..n).map(|k| self.vertex(n, k)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn polygon() -> PerimeterPolygon {
        PerimeterPolygon::from_config(&Config::default())
    }

    #[test]
    fn test_radius_preserves_perimeter() {
        let polygon = polygon();
        let mut rng = StdRng::seed_from_u64(7);
        let samples = (6..=100)
            .map(|n| n as f32)
            .chain((0..200).map(|_| rng.gen_range(6.0f32..=100.0)));

        for n in samples {
            let perimeter = polygon.radius(n) * 2.0 * n * (PI / n).sin();
            let error = (perimeter - polygon.perimeter()).abs() / polygon.perimeter();
            assert!(error < 1e-5, "n = {}: perimeter {}", n, perimeter);
        }
    }

    #[test]
    fn test_hexagon_scenario() {
        let polygon = polygon();
        // R(6) = perimeter / (12 * sin(π/6)) = perimeter / 6
        assert!((polygon.radius(6.0) - 233.83).abs() < 0.05);

        let top = polygon.vertex(6, 0);
        assert!((top.x - 400.0).abs() < 1e-3);
        assert!((top.y - 66.17).abs() < 0.05, "y = {}", top.y);
    }

    #[test]
    fn test_vertices_equidistant_and_evenly_spaced() {
        let polygon = polygon();
        let center = polygon.center();
        for n in 3..=100 {
            let vertices = polygon.vertices(n);
            assert_eq!(vertices.len(), n);

            let radius = polygon.radius(n as f32);
            let spacing = TAU / n as f32;
            for (k, v) in vertices.iter().enumerate() {
                assert!((v.distance(center) - radius).abs() < 1e-2, "n = {}, k = {}", n, k);

                // Angle measured clockwise from straight up
                let offset = *v - center;
                let angle = offset.x.atan2(-offset.y).rem_euclid(TAU);
                let expected = spacing * k as f32;
                let diff = (angle - expected).abs();
                assert!(diff < 1e-3 || (TAU - diff) < 1e-3, "n = {}, k = {}", n, k);
            }
        }
    }

    #[test]
    fn test_edges_sum_to_perimeter() {
        let polygon = polygon();
        for n in [3, 6, 17, 100] {
            let vertices = polygon.vertices(n);
            let total: f32 = (0..n)
                .map(|k| vertices[k].distance(vertices[(k + 1) % n]))
                .sum();
            assert!((total - polygon.perimeter()).abs() < 0.1, "n = {}: {}", n, total);
        }
    }

    #[test]
    fn test_approaches_limit_circle() {
        let polygon = polygon();
        assert!(polygon.radius(6.0) > polygon.limit_radius());
        assert!((polygon.radius(100.0) - polygon.limit_radius()).abs() < 0.5);
        assert!((polygon.limit_radius() - 223.29).abs() < 0.05);
    }
}
