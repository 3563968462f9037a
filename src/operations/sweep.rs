use rayon::prelude::*;

use crate::config::GeneratorConfig;
use crate::error::{ConfigurationError, Result};
use crate::parsec::{ParsecParam, ParsecParams};

use super::{GenerateAirfoil, GeneratedAirfoil};

/// One swept parameter and the values it takes.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepAxis {
    pub param: ParsecParam,
    pub values: Vec<f64>,
}

/// A single combination of a sweep grid.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepCase {
    /// Swept values, formatted with six decimals and joined by spaces.
    pub label: String,
    pub params: ParsecParams,
}

/// The result of one sweep case. Failures stay local to their case.
#[derive(Debug)]
pub struct SweepOutcome {
    pub case: SweepCase,
    pub result: Result<GeneratedAirfoil>,
}

/// All outcomes of a sweep, in grid order.
#[derive(Debug, Default)]
pub struct SweepReport {
    pub outcomes: Vec<SweepOutcome>,
}

impl SweepReport {
    #[must_use]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Generated airfoils that passed every shape check.
    pub fn valid(&self) -> impl Iterator<Item = (&SweepCase, &GeneratedAirfoil)> {
        self.generated().filter(|(_, a)| a.is_valid())
    }

    /// Generated airfoils rejected by a shape check.
    pub fn invalid(&self) -> impl Iterator<Item = (&SweepCase, &GeneratedAirfoil)> {
        self.generated().filter(|(_, a)| !a.is_valid())
    }

    /// Cases that could not be generated at all.
    pub fn failed(&self) -> impl Iterator<Item = &SweepOutcome> {
        self.outcomes.iter().filter(|o| o.result.is_err())
    }

    fn generated(&self) -> impl Iterator<Item = (&SweepCase, &GeneratedAirfoil)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok().map(|a| (&o.case, a)))
    }
}

/// Generates one airfoil per combination of a parameter grid.
///
/// Every combination is an independent task on the rayon pool; the call
/// returns once all of them have finished.
pub struct ParameterSweep {
    base: ParsecParams,
    axes: Vec<SweepAxis>,
    config: GeneratorConfig,
}

impl ParameterSweep {
    /// Creates a sweep around `base` with no axes yet.
    #[must_use]
    pub fn new(base: ParsecParams, config: GeneratorConfig) -> Self {
        Self {
            base,
            axes: Vec::new(),
            config,
        }
    }

    /// Adds an axis. Earlier axes vary slowest.
    #[must_use]
    pub fn vary(mut self, param: ParsecParam, values: impl Into<Vec<f64>>) -> Self {
        self.axes.push(SweepAxis {
            param,
            values: values.into(),
        });
        self
    }

    #[must_use]
    pub fn axes(&self) -> &[SweepAxis] {
        &self.axes
    }

    /// Expands the grid into its cases.
    ///
    /// Without axes the grid holds the base parameters alone, labelled `base`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::EmptyAxis`] if an axis has no values.
    pub fn cases(&self) -> std::result::Result<Vec<SweepCase>, ConfigurationError> {
        let mut grid: Vec<(Vec<f64>, ParsecParams)> = vec![(Vec::new(), self.base)];
        for axis in &self.axes {
            if axis.values.is_empty() {
                return Err(ConfigurationError::EmptyAxis(axis.param.name()));
            }
            grid = grid
                .into_iter()
                .flat_map(|(swept, params)| {
                    axis.values.iter().map(move |&value| {
                        let mut swept = swept.clone();
                        swept.push(value);
                        (swept, params.with(axis.param, value))
                    })
                })
                .collect();
        }

        Ok(grid
            .into_iter()
            .map(|(swept, params)| SweepCase {
                label: label(&swept),
                params,
            })
            .collect())
    }

    /// Runs every case in parallel and collects the outcomes in grid order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::EmptyAxis`] if the grid cannot be
    /// expanded. Errors of individual cases are logged and kept in their
    /// [`SweepOutcome`].
    pub fn execute(&self) -> Result<SweepReport> {
        let cases = self.cases()?;
        tracing::debug!(cases = cases.len(), "dispatching parameter sweep");

        let outcomes = cases
            .into_par_iter()
            .map(|case| {
                let result = GenerateAirfoil::new(case.params, &self.config).execute();
                if let Err(error) = &result {
                    tracing::warn!(
                        label = %case.label,
                        params = ?case.params,
                        %error,
                        "airfoil generation failed"
                    );
                }
                SweepOutcome { case, result }
            })
            .collect();

        Ok(SweepReport { outcomes })
    }
}

fn label(swept: &[f64]) -> String {
    if swept.is_empty() {
        return "base".to_owned();
    }
    swept
        .iter()
        .map(|v| format!("{v:.6}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{AirfoilError, SolverError};

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn reference() -> ParsecParams {
        ParsecParams::new(
            0.06, 0.34, 0.39, 0.09, -0.287, -0.088, 0.0, 0.0, 0.05, -30.0, 0.0,
        )
    }

    fn trailing_edge_sweep() -> ParameterSweep {
        ParameterSweep::new(reference(), GeneratorConfig::default())
            .vary(ParsecParam::TrailingEdgeAngle, [-30.0, -22.5, -17.5, -10.0, -5.0, 0.0, 5.0])
            .vary(ParsecParam::TrailingEdgeOffset, [-0.3, -0.1, 0.0, 0.05])
            .vary(ParsecParam::LowerCrestCurvature, [0.0, 0.3, 0.6])
    }

    #[test]
    fn grid_is_cartesian_product_in_order() {
        let cases = trailing_edge_sweep().cases().unwrap();
        assert_eq!(cases.len(), 7 * 4 * 3);
        assert_eq!(cases[0].label, "-30.000000 -0.300000 0.000000");
        assert_eq!(cases[1].label, "-30.000000 -0.300000 0.300000");
        assert_eq!(cases[3].label, "-30.000000 -0.100000 0.000000");
        let last = cases.last().unwrap();
        assert_eq!(last.label, "5.000000 0.050000 0.600000");
        assert!((last.params.a_te - 5.0).abs() < 1e-12);
        assert!((last.params.y_te - 0.05).abs() < 1e-12);
        assert!((last.params.d2y_lo - 0.6).abs() < 1e-12);
        // Unswept parameters keep their base value.
        assert!((last.params.x_up - 0.34).abs() < 1e-12);
    }

    #[test]
    fn no_axes_runs_base_only() {
        let cases = ParameterSweep::new(reference(), GeneratorConfig::default())
            .cases()
            .unwrap();
        assert_eq!(cases.len(), 1);
        assert_eq!(cases[0].label, "base");
        assert_eq!(cases[0].params, reference());
    }

    #[test]
    fn empty_axis_is_rejected() {
        let sweep = ParameterSweep::new(reference(), GeneratorConfig::default())
            .vary(ParsecParam::TrailingEdgeAngle, Vec::<f64>::new());
        let err = sweep.execute().unwrap_err();
        assert_eq!(
            err,
            AirfoilError::Configuration(ConfigurationError::EmptyAxis("a_te"))
        );
    }

    #[test]
    fn every_case_produces_an_outcome() {
        init_tracing();
        let sweep = trailing_edge_sweep();
        let report = sweep.execute().unwrap();
        assert_eq!(report.len(), 84);
        assert_eq!(report.failed().count(), 0);
        assert_eq!(report.valid().count() + report.invalid().count(), 84);
        for (outcome, case) in report.outcomes.iter().zip(sweep.cases().unwrap()) {
            assert_eq!(outcome.case, case);
        }
    }

    #[test]
    fn default_sweep_yields_valid_airfoils() {
        let report = trailing_edge_sweep().execute().unwrap();
        assert!(report.valid().count() > 0);
        assert!(report
            .valid()
            .any(|(case, _)| case.label == "-30.000000 0.050000 0.000000"));
    }

    #[test]
    fn parallel_results_match_sequential_generation() {
        let sweep = trailing_edge_sweep();
        let report = sweep.execute().unwrap();
        let config = GeneratorConfig::default();
        for outcome in &report.outcomes {
            let expected = GenerateAirfoil::new(outcome.case.params, &config)
                .execute()
                .unwrap();
            assert_eq!(outcome.result.as_ref().unwrap(), &expected);
        }
    }

    #[test]
    fn failing_case_does_not_abort_siblings() {
        init_tracing();
        let report = ParameterSweep::new(reference(), GeneratorConfig::default())
            .vary(ParsecParam::UpperCrestX, [0.3, 1.0, 0.4])
            .execute()
            .unwrap();
        assert_eq!(report.len(), 3);
        let failed: Vec<_> = report.failed().collect();
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].case.label, "1.000000");
        assert!(matches!(
            failed[0].result,
            Err(AirfoilError::Solver(SolverError::Singular { .. }))
        ));
        assert!(report.outcomes[0].result.is_ok());
        assert!(report.outcomes[2].result.is_ok());
    }
}
