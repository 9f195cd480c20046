mod driver;
mod oscillator;
mod step;

pub use driver::Driver;
pub use oscillator::{Direction, Oscillator};
pub use step::StepFunction;
