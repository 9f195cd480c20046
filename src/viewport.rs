use crate::canvas::Canvas;
use crate::config::Config;

/// Physical window size and the uniform scale that fits the logical canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    scale: f32,
}

impl Viewport {
    /// Largest scale that keeps the whole logical canvas visible without
    /// distorting it. A collapsed window clamps to `config.min_scale`.
    pub fn fit(width: u32, height: u32, config: &Config) -> Self {
        let scale_x = width as f32 / config.logical_width;
        let scale_y = height as f32 / config.logical_height;
        let scale = scale_x.min(scale_y);
        let scale = if scale.is_finite() {
            scale.max(config.min_scale)
        } else {
            config.min_scale
        };

        Self {
            width,
            height,
            scale,
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Replace whatever transform the canvas carries with this scale
    pub fn apply(&self, canvas: &mut impl Canvas) {
        canvas.reset_transform();
        canvas.scale(self.scale);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::StrokeCanvas;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_exact_fit() {
        let viewport = Viewport::fit(800, 600, &Config::default());
        assert_eq!(viewport.scale(), 1.0);
    }

    #[test]
    fn test_limited_by_narrow_axis() {
        let config = Config::default();
        // Wide window: height limits
        assert_eq!(Viewport::fit(1920, 600, &config).scale(), 1.0);
        // Tall window: width limits
        assert_eq!(Viewport::fit(400, 1200, &config).scale(), 0.5);
    }

    #[test]
    fn test_scale_is_min_of_axes() {
        let config = Config::default();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let width = rng.gen_range(1..4000u32);
            let height = rng.gen_range(1..4000u32);
            let viewport = Viewport::fit(width, height, &config);
            let expected = (width as f32 / 800.0).min(height as f32 / 600.0);
            assert_eq!(viewport.scale(), expected.max(config.min_scale));
        }
    }

    #[test]
    fn test_collapsed_window_clamps() {
        let config = Config::default();
        let viewport = Viewport::fit(0, 600, &config);
        assert!(viewport.is_empty());
        assert_eq!(viewport.scale(), config.min_scale);

        let viewport = Viewport::fit(0, 0, &config);
        assert_eq!(viewport.scale(), config.min_scale);
    }

    #[test]
    fn test_apply_resets_previous_transform() {
        let config = Config::default();
        let mut canvas = StrokeCanvas::new();
        Viewport::fit(1600, 1200, &config).apply(&mut canvas);
        assert_eq!(canvas.current_scale(), 2.0);
        Viewport::fit(400, 300, &config).apply(&mut canvas);
        assert_eq!(canvas.current_scale(), 0.5);
    }
}
