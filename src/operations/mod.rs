mod generate;
mod sweep;

pub use generate::{GenerateAirfoil, GeneratedAirfoil};
pub use sweep::{ParameterSweep, SweepAxis, SweepCase, SweepOutcome, SweepReport};
