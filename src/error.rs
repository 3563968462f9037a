use thiserror::Error;

use crate::parsec::Surface;

/// Top-level error type for airfoil generation.
#[derive(Debug, Error, PartialEq)]
pub enum AirfoilError {
    #[error(transparent)]
    Solver(#[from] SolverError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

/// Errors raised while solving a coefficient system.
#[derive(Debug, Error, PartialEq)]
pub enum SolverError {
    #[error("singular matrix: pivot {pivot:e} in column {column} is below tolerance")]
    Singular { column: usize, pivot: f64 },

    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("{surface} surface coefficients are not finite")]
    NonFiniteSolution { surface: Surface },
}

/// Errors related to generator inputs and settings.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigurationError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("parameter {parameter} is not finite ({value})")]
    NonFinite { parameter: &'static str, value: f64 },

    #[error("invalid chord sampling: {0}")]
    InvalidSampling(String),

    #[error("sweep axis for {0} has no values")]
    EmptyAxis(&'static str),
}

/// Convenience type alias for results using [`AirfoilError`].
pub type Result<T> = std::result::Result<T, AirfoilError>;
