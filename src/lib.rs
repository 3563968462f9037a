pub mod config;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod parsec;
pub mod validation;

pub use config::GeneratorConfig;
pub use error::{AirfoilError, Result};
pub use operations::{GenerateAirfoil, GeneratedAirfoil, ParameterSweep};
pub use parsec::ParsecParams;
