use super::StepFunction;
use crate::config::Config;

/// Which way the vertex count is currently moving
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Growing,
    Shrinking,
}

impl Direction {
    pub fn sign(self) -> f32 {
        match self {
            Direction::Growing => 1.0,
            Direction::Shrinking => -1.0,
        }
    }
}

/// Fractional vertex count bouncing between `n_min` and `n_max`.
///
/// `n` is kept fractional so slow step functions still make progress; only
/// `floor(n)` is ever drawn.
#[derive(Clone, Debug)]
pub struct Oscillator {
    n: f32,
    direction: Direction,
    min: f32,
    max: f32,
    step: StepFunction,
}

impl Oscillator {
    pub fn new(n_min: u32, n_max: u32, step: StepFunction) -> Self {
        Self {
            n: n_min as f32,
            direction: Direction::Growing,
            min: n_min as f32,
            max: n_max as f32,
            step,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.n_min, config.n_max, config.step)
    }

    /// Back to the bottom of the cycle, growing
    pub fn reset(&mut self) {
        self.n = self.min;
        self.direction = Direction::Growing;
    }

    pub fn n(&self) -> f32 {
        self.n
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Vertex count to draw for the current state
    pub fn sides(&self) -> usize {
        self.n.floor() as usize
    }

    pub fn at_minimum(&self) -> bool {
        self.n == self.min
    }

    /// Run one tick: returns the vertex count to draw for this tick, then
    /// moves `n` one step and bounces off whichever bound it crossed.
    pub fn advance(&mut self) -> usize {
        let sides = self.sides();
        self.n += self.direction.sign() * self.step.apply(self.n);

        if self.n <= self.min {
            self.n = self.min;
            self.direction = Direction::Growing;
        }
        if self.n >= self.max {
            self.n = self.max;
            self.direction = Direction::Shrinking;
        }

        sides
    }
}
