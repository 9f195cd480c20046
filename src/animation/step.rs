/// How far `n` moves in one tick, as a function of the current `n`.
///
/// All strategies grow with `n`, so the polygon speeds up as it gains
/// vertices and slows down as it loses them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StepFunction {
    /// `offset + k * sqrt(n)`
    SquareRoot { offset: f32, k: f32 },
    /// `k * n^p`
    PowerLaw { k: f32, p: f32 },
    /// `k * ln(n)`
    Logarithmic { k: f32 },
}

impl StepFunction {
    pub fn apply(&self, n: f32) -> f32 {
        match *self {
            Self::SquareRoot { offset, k } => offset + k * n.sqrt(),
            Self::PowerLaw { k, p } => k * n.powf(p),
            Self::Logarithmic { k } => k * n.ln(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::SquareRoot { .. } => "square-root",
            Self::PowerLaw { .. } => "power-law",
            Self::Logarithmic { .. } => "logarithmic",
        }
    }
}
