//! PARSEC parameterization: parameters, boundary-condition systems and the
//! half-integer power polynomial describing each surface.

mod params;
mod polynomial;
mod system;

pub use params::{ParamRange, ParameterBounds, ParsecParam, ParsecParams};
pub use polynomial::SurfacePolynomial;
pub use system::{build_matrix, build_rhs, CoefficientSystems, SurfaceSystem};

/// Exponents of the PARSEC basis `x^(1/2), x^(3/2), .., x^(11/2)`.
pub const EXPONENTS: [f64; 6] = [0.5, 1.5, 2.5, 3.5, 4.5, 5.5];

/// Which side of the airfoil a system or polynomial describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    Upper,
    Lower,
}

impl std::fmt::Display for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Upper => f.write_str("upper"),
            Self::Lower => f.write_str("lower"),
        }
    }
}
