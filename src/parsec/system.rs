use crate::error::SolverError;
use crate::math::{self, Matrix6, Vector6};

use super::{ParsecParams, Surface, SurfacePolynomial, EXPONENTS};

/// Builds the coefficient matrices of the upper and lower surfaces.
///
/// Both share one row layout and differ only in the crest location:
///
/// | row | condition              |
/// |-----|------------------------|
/// | 0   | `y(1)`                 |
/// | 1   | `y(x_crest)`           |
/// | 2   | `y'(1)`                |
/// | 3   | `y'(x_crest) = 0`      |
/// | 4   | `y''(x_crest)`         |
/// | 5   | leading-edge radius    |
///
/// No range checks happen here; a crest at `x = 0` yields infinite entries
/// that the solver reports as singular.
#[must_use]
pub fn build_matrix(x_up: f64, x_lo: f64) -> (Matrix6, Matrix6) {
    (surface_matrix(x_up), surface_matrix(x_lo))
}

fn surface_matrix(x_crest: f64) -> Matrix6 {
    let mut m = Matrix6::zeros();
    for (j, &p) in EXPONENTS.iter().enumerate() {
        m[(0, j)] = 1.0;
        m[(1, j)] = x_crest.powf(p);
        m[(2, j)] = p;
        m[(3, j)] = p * x_crest.powf(p - 1.0);
        m[(4, j)] = p * (p - 1.0) * x_crest.powf(p - 2.0);
    }
    m[(5, 0)] = 1.0;
    m
}

/// Builds the right-hand sides matching [`build_matrix`] row for row.
///
/// The trailing-edge slope rows use `tan(a_te + b_te)` on the upper surface
/// and `tan(a_te - b_te)` on the lower one (angles in degrees). The two
/// signs are not interchangeable.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn build_rhs(
    r_le: f64,
    y_up: f64,
    d2y_up: f64,
    y_lo: f64,
    d2y_lo: f64,
    dy_te: f64,
    y_te: f64,
    a_te: f64,
    b_te: f64,
) -> (Vector6, Vector6) {
    let te = SharedConditions {
        r_le,
        dy_te,
        y_te,
        a_te,
        b_te,
    };
    (
        surface_rhs(Surface::Upper, y_up, d2y_up, &te),
        surface_rhs(Surface::Lower, y_lo, d2y_lo, &te),
    )
}

/// Conditions shared by both surfaces.
struct SharedConditions {
    r_le: f64,
    dy_te: f64,
    y_te: f64,
    a_te: f64,
    b_te: f64,
}

impl SharedConditions {
    fn of(params: &ParsecParams) -> Self {
        Self {
            r_le: params.r_le,
            dy_te: params.dy_te,
            y_te: params.y_te,
            a_te: params.a_te,
            b_te: params.b_te,
        }
    }
}

fn surface_rhs(
    surface: Surface,
    y_crest: f64,
    d2y_crest: f64,
    te: &SharedConditions,
) -> Vector6 {
    let sign = match surface {
        Surface::Upper => 1.0,
        Surface::Lower => -1.0,
    };
    Vector6::new(
        te.y_te + sign * te.dy_te / 2.0,
        y_crest,
        (te.a_te + sign * te.b_te).to_radians().tan(),
        0.0,
        d2y_crest,
        sign * (2.0 * te.r_le).sqrt(),
    )
}

/// The linear system `matrix * c = rhs` of one surface.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceSystem {
    pub surface: Surface,
    pub matrix: Matrix6,
    pub rhs: Vector6,
}

impl SurfaceSystem {
    /// Builds the upper-surface system from `params`.
    #[must_use]
    pub fn upper(params: &ParsecParams) -> Self {
        Self {
            surface: Surface::Upper,
            matrix: surface_matrix(params.x_up),
            rhs: surface_rhs(
                Surface::Upper,
                params.y_up,
                params.d2y_up,
                &SharedConditions::of(params),
            ),
        }
    }

    /// Builds the lower-surface system from `params`.
    #[must_use]
    pub fn lower(params: &ParsecParams) -> Self {
        Self {
            surface: Surface::Lower,
            matrix: surface_matrix(params.x_lo),
            rhs: surface_rhs(
                Surface::Lower,
                params.y_lo,
                params.d2y_lo,
                &SharedConditions::of(params),
            ),
        }
    }

    /// Solves for the six coefficients of this surface.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Singular`] if the matrix is not invertible.
    pub fn solve(&self) -> Result<SurfacePolynomial, SolverError> {
        math::solve(&self.matrix, &self.rhs).map(SurfacePolynomial::new)
    }
}

/// Upper and lower systems built from the same parameter snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientSystems {
    pub upper: SurfaceSystem,
    pub lower: SurfaceSystem,
}

impl CoefficientSystems {
    /// Creates both surface systems from one parameter snapshot.
    #[must_use]
    pub fn new(params: &ParsecParams) -> Self {
        Self {
            upper: SurfaceSystem::upper(params),
            lower: SurfaceSystem::lower(params),
        }
    }

    /// Solves both systems.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Singular`] if either matrix is not invertible.
    pub fn solve(&self) -> Result<(SurfacePolynomial, SurfacePolynomial), SolverError> {
        Ok((self.upper.solve()?, self.lower.solve()?))
    }
}
