use crate::config::GeneratorConfig;
use crate::error::{Result, SolverError};
use crate::geometry::{generate_curve, AirfoilProfile};
use crate::parsec::{CoefficientSystems, ParsecParams, Surface, SurfacePolynomial};
use crate::validation::{ShapeDefect, ShapeValidator};

/// A solved and sampled airfoil together with its shape verdict.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedAirfoil {
    /// The parameters the airfoil was built from.
    pub params: ParsecParams,
    pub upper: SurfacePolynomial,
    pub lower: SurfacePolynomial,
    pub profile: AirfoilProfile,
    /// First failed shape check, `None` if the shape is plausible.
    pub defect: Option<ShapeDefect>,
}

impl GeneratedAirfoil {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.defect.is_none()
    }
}

/// Generates one airfoil from a PARSEC parameter set.
pub struct GenerateAirfoil<'a> {
    params: ParsecParams,
    config: &'a GeneratorConfig,
}

impl<'a> GenerateAirfoil<'a> {
    /// Creates a new `GenerateAirfoil` operation.
    #[must_use]
    pub fn new(params: ParsecParams, config: &'a GeneratorConfig) -> Self {
        Self { params, config }
    }

    /// Builds and solves both surface systems, samples the curves and runs
    /// the shape checks.
    ///
    /// A shape that fails the checks is still returned, with
    /// [`GeneratedAirfoil::defect`] set.
    ///
    /// # Errors
    ///
    /// - [`ConfigurationError`](crate::error::ConfigurationError) if a
    ///   parameter is not finite, violates the configured bounds, or the
    ///   sampling is invalid.
    /// - [`SolverError::Singular`] if a surface system cannot be inverted.
    /// - [`SolverError::NonFiniteSolution`] if the solved coefficients are
    ///   not finite (for example a negative leading-edge radius).
    pub fn execute(&self) -> Result<GeneratedAirfoil> {
        let params = self.params;
        params.check_finite()?;
        if let Some(bounds) = &self.config.bounds {
            bounds.check(&params)?;
        }

        let (upper, lower) = CoefficientSystems::new(&params).solve()?;
        for (surface, poly) in [(Surface::Upper, &upper), (Surface::Lower, &lower)] {
            if !poly.is_finite() {
                return Err(SolverError::NonFiniteSolution { surface }.into());
            }
        }
        tracing::debug!(
            upper = ?upper.coefficients().as_slice(),
            lower = ?lower.coefficients().as_slice(),
            "solved PARSEC coefficients"
        );

        let profile = generate_curve(&upper, &lower, &self.config.sampling)?;
        let defect = ShapeValidator::new(self.config.thresholds)
            .check(
                &profile.x,
                &profile.upper,
                &profile.lower,
                params.y_up,
                params.y_lo,
            )
            .err();
        if let Some(defect) = &defect {
            tracing::warn!(%defect, ?params, "airfoil shape rejected");
        }

        Ok(GeneratedAirfoil {
            params,
            upper,
            lower,
            profile,
            defect,
        })
    }
}
