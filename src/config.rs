use std::time::Duration;

use crate::animation::StepFunction;
use crate::canvas::{Color, StrokeStyle};
use crate::error::ConfigError;
use crate::frame::ClosingStyle;
use crate::geometry::PerimeterPolygon;

/// Logical canvas dimensions (all geometry lives in this space)
pub const LOGICAL_WIDTH: f32 = 800.0;
pub const LOGICAL_HEIGHT: f32 = 600.0;

/// Fraction of the inscribed-triangle perimeter used as the perimeter target
pub const SCALING_FACTOR: f32 = 0.9;

/// Vertex count bounds of the oscillation
pub const N_MIN: u32 = 6;
pub const N_MAX: u32 = 100;

// ============================================
// Timing
// ============================================

/// Delay between ticks while the polygon is growing or shrinking
pub const FAST_INTERVAL: Duration = Duration::from_millis(20);

/// Slower tick used by the relaxed preset
pub const RELAXED_INTERVAL: Duration = Duration::from_millis(50);

/// Rest at the bottom of the oscillation (n == n_min)
pub const PAUSE_INTERVAL: Duration = Duration::from_millis(1000);

// ============================================
// Step function coefficients
// ============================================

/// step(n) = SQRT_OFFSET + SQRT_K * sqrt(n)
pub const SQRT_OFFSET: f32 = -0.35;
pub const SQRT_K: f32 = 0.5;

/// step(n) = POWER_K * n^POWER_P
pub const POWER_K: f32 = 0.2;
pub const POWER_P: f32 = 0.5;

/// step(n) = LOG_K * ln(n)
pub const LOG_K: f32 = 0.1;

// ============================================
// Styling
// ============================================

/// Faint reference circle (the n -> infinity limit)
pub const GUIDE_COLOR: Color = Color::rgba(214.0 / 255.0, 206.0 / 255.0, 210.0 / 255.0, 0.7);
pub const GUIDE_WIDTH: f32 = 1.0;

pub const OUTLINE_COLOR: Color = Color::BLACK;
pub const OUTLINE_WIDTH: f32 = 1.0;
pub const RELAXED_OUTLINE_WIDTH: f32 = 2.0;

pub const BACKGROUND_COLOR: Color = Color::WHITE;

/// Lower bound for the display scale when the viewport collapses
pub const MIN_SCALE: f32 = 1e-3;

/// Environment variable selecting a configuration preset
pub const PRESET_ENV: &str = "PULSE_PRESET";

/// Runtime configuration for the oscillator and its rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub logical_width: f32,
    pub logical_height: f32,
    pub scaling_factor: f32,
    pub n_min: u32,
    pub n_max: u32,
    pub fast_interval: Duration,
    pub pause_interval: Duration,
    pub step: StepFunction,
    pub guide: StrokeStyle,
    pub outline: StrokeStyle,
    pub background: Color,
    pub closing: ClosingStyle,
    pub min_scale: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logical_width: LOGICAL_WIDTH,
            logical_height: LOGICAL_HEIGHT,
            scaling_factor: SCALING_FACTOR,
            n_min: N_MIN,
            n_max: N_MAX,
            fast_interval: FAST_INTERVAL,
            pause_interval: PAUSE_INTERVAL,
            step: StepFunction::SquareRoot {
                offset: SQRT_OFFSET,
                k: SQRT_K,
            },
            guide: StrokeStyle::new(GUIDE_COLOR, GUIDE_WIDTH),
            outline: StrokeStyle::new(OUTLINE_COLOR, OUTLINE_WIDTH),
            background: BACKGROUND_COLOR,
            closing: ClosingStyle::Explicit,
            min_scale: MIN_SCALE,
        }
    }
}

impl Config {
    /// Slower, heavier variant: 50ms ticks, 2px outline, wraparound closing
    pub fn relaxed() -> Self {
        Self {
            fast_interval: RELAXED_INTERVAL,
            outline: StrokeStyle::new(OUTLINE_COLOR, RELAXED_OUTLINE_WIDTH),
            closing: ClosingStyle::Wraparound,
            ..Self::default()
        }
    }

    /// Look up a preset by name
    pub fn preset(name: &str) -> Result<Self, ConfigError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "" | "default" => Ok(Self::default()),
            "relaxed" => Ok(Self::relaxed()),
            _ => Err(ConfigError::UnknownPreset(name.to_owned())),
        }
    }

    /// Select a preset from `PULSE_PRESET`, falling back to the default
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(PRESET_ENV) {
            Ok(name) => Self::preset(&name),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Perimeter shared by every rendered polygon: the scaled perimeter of
    /// the equilateral triangle inscribed in the largest centred circle.
    pub fn perimeter_target(&self) -> f32 {
        let radius = self.logical_width.min(self.logical_height) / 2.0;
        self.scaling_factor * 3.0 * 3.0_f32.sqrt() * radius
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.logical_width > 0.0 && self.logical_height > 0.0) {
            return Err(ConfigError::EmptyCanvas {
                width: self.logical_width,
                height: self.logical_height,
            });
        }
        if !(self.scaling_factor > 0.0) {
            return Err(ConfigError::NonPositiveScaling(self.scaling_factor));
        }
        if self.n_min < 3 {
            return Err(ConfigError::TooFewSides(self.n_min));
        }
        if self.n_max <= self.n_min {
            return Err(ConfigError::EmptyRange {
                min: self.n_min,
                max: self.n_max,
            });
        }
        // The fewest-sided polygon has the largest radius; its stroke must stay
        // inside the logical canvas so clearing the canvas removes all of it.
        let reach = PerimeterPolygon::from_config(self).radius(self.n_min as f32)
            + self.outline.width.max(self.guide.width) / 2.0;
        let limit = self.logical_width.min(self.logical_height) / 2.0;
        if reach > limit {
            return Err(ConfigError::PolygonOverflow {
                n_min: self.n_min,
                reach,
                limit,
            });
        }
        // Every strategy is monotonic in n, so the endpoints bound the range.
        for at in [self.n_min as f32, self.n_max as f32] {
            if !(self.step.apply(at) > 0.0) {
                return Err(ConfigError::NonPositiveStep {
                    step: self.step,
                    at,
                });
            }
        }
        if self.fast_interval.is_zero() {
            return Err(ConfigError::ZeroInterval("fast"));
        }
        if self.pause_interval.is_zero() {
            return Err(ConfigError::ZeroInterval("pause"));
        }
        if !(self.min_scale > 0.0) {
            return Err(ConfigError::NonPositiveMinScale(self.min_scale));
        }
        Ok(())
    }
}
