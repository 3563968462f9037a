use crate::error::SolverError;
use crate::math::Vector6;

use super::EXPONENTS;

/// One surface of a PARSEC airfoil: `y(x) = Σ c_i · x^((2i-1)/2)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfacePolynomial {
    coefficients: Vector6,
}

impl SurfacePolynomial {
    /// Creates a polynomial from `c_1..c_6`.
    #[must_use]
    pub fn new(coefficients: Vector6) -> Self {
        Self { coefficients }
    }

    /// Builds a polynomial from a coefficient slice.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::DimensionMismatch`] unless the slice holds
    /// exactly six values.
    pub fn from_slice(coefficients: &[f64]) -> Result<Self, SolverError> {
        if coefficients.len() != EXPONENTS.len() {
            return Err(SolverError::DimensionMismatch {
                expected: EXPONENTS.len(),
                found: coefficients.len(),
            });
        }
        Ok(Self::new(Vector6::from_column_slice(coefficients)))
    }

    /// Returns `c_1..c_6`.
    #[must_use]
    pub fn coefficients(&self) -> &Vector6 {
        &self.coefficients
    }

    /// Returns `true` if every coefficient is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.coefficients.iter().all(|c| c.is_finite())
    }

    /// Evaluates the surface height at chordwise position `x`.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        // Horner in x on top of the shared sqrt(x) factor.
        let sqrt_x = x.sqrt();
        let sum = self
            .coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, &c| acc * x + c);
        sum * sqrt_x
    }

    /// First derivative `dy/dx`. Unbounded at `x = 0`.
    #[must_use]
    pub fn slope(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .zip(EXPONENTS)
            .map(|(&c, p)| c * p * x.powf(p - 1.0))
            .sum()
    }

    /// Second derivative `d²y/dx²`. Unbounded at `x = 0`.
    #[must_use]
    pub fn curvature(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .zip(EXPONENTS)
            .map(|(&c, p)| c * p * (p - 1.0) * x.powf(p - 2.0))
            .sum()
    }
}
