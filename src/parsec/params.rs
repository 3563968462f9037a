use crate::error::ConfigurationError;

/// Identifies one of the eleven PARSEC parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParsecParam {
    LeadingEdgeRadius,
    UpperCrestX,
    LowerCrestX,
    UpperCrestY,
    UpperCrestCurvature,
    LowerCrestY,
    LowerCrestCurvature,
    TrailingEdgeThickness,
    TrailingEdgeOffset,
    TrailingEdgeAngle,
    TrailingEdgeWedge,
}

impl ParsecParam {
    /// All parameters, in constructor order.
    pub const ALL: [Self; 11] = [
        Self::LeadingEdgeRadius,
        Self::UpperCrestX,
        Self::LowerCrestX,
        Self::UpperCrestY,
        Self::UpperCrestCurvature,
        Self::LowerCrestY,
        Self::LowerCrestCurvature,
        Self::TrailingEdgeThickness,
        Self::TrailingEdgeOffset,
        Self::TrailingEdgeAngle,
        Self::TrailingEdgeWedge,
    ];

    /// Short field name used in errors and log output.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::LeadingEdgeRadius => "r_le",
            Self::UpperCrestX => "x_up",
            Self::LowerCrestX => "x_lo",
            Self::UpperCrestY => "y_up",
            Self::UpperCrestCurvature => "d2y_up",
            Self::LowerCrestY => "y_lo",
            Self::LowerCrestCurvature => "d2y_lo",
            Self::TrailingEdgeThickness => "dy_te",
            Self::TrailingEdgeOffset => "y_te",
            Self::TrailingEdgeAngle => "a_te",
            Self::TrailingEdgeWedge => "b_te",
        }
    }
}

/// The eleven PARSEC shape parameters of one airfoil.
///
/// Lengths are chord-normalized; the two trailing-edge angles are in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsecParams {
    /// Leading-edge radius.
    pub r_le: f64,
    /// Chordwise location of the upper crest.
    pub x_up: f64,
    /// Chordwise location of the lower crest.
    pub x_lo: f64,
    /// Height of the upper crest.
    pub y_up: f64,
    /// Curvature of the upper surface at its crest.
    pub d2y_up: f64,
    /// Height of the lower crest.
    pub y_lo: f64,
    /// Curvature of the lower surface at its crest.
    pub d2y_lo: f64,
    /// Trailing-edge thickness.
    pub dy_te: f64,
    /// Mean height of the trailing edge.
    pub y_te: f64,
    /// Trailing-edge direction angle, degrees.
    pub a_te: f64,
    /// Trailing-edge wedge angle, degrees.
    pub b_te: f64,
}

impl ParsecParams {
    /// Creates a parameter set. Arguments follow the conventional PARSEC
    /// ordering: `R_LE, Xu, Xl, Yu, d2Yu, Yl, d2Yl, ΔY_TE, Y_TE, α_TE, β_TE`.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        r_le: f64,
        x_up: f64,
        x_lo: f64,
        y_up: f64,
        d2y_up: f64,
        y_lo: f64,
        d2y_lo: f64,
        dy_te: f64,
        y_te: f64,
        a_te: f64,
        b_te: f64,
    ) -> Self {
        Self {
            r_le,
            x_up,
            x_lo,
            y_up,
            d2y_up,
            y_lo,
            d2y_lo,
            dy_te,
            y_te,
            a_te,
            b_te,
        }
    }

    /// Returns the value of a single parameter.
    #[must_use]
    pub fn get(&self, param: ParsecParam) -> f64 {
        match param {
            ParsecParam::LeadingEdgeRadius => self.r_le,
            ParsecParam::UpperCrestX => self.x_up,
            ParsecParam::LowerCrestX => self.x_lo,
            ParsecParam::UpperCrestY => self.y_up,
            ParsecParam::UpperCrestCurvature => self.d2y_up,
            ParsecParam::LowerCrestY => self.y_lo,
            ParsecParam::LowerCrestCurvature => self.d2y_lo,
            ParsecParam::TrailingEdgeThickness => self.dy_te,
            ParsecParam::TrailingEdgeOffset => self.y_te,
            ParsecParam::TrailingEdgeAngle => self.a_te,
            ParsecParam::TrailingEdgeWedge => self.b_te,
        }
    }

    /// Returns a copy with one parameter replaced.
    #[must_use]
    pub fn with(mut self, param: ParsecParam, value: f64) -> Self {
        let slot = match param {
            ParsecParam::LeadingEdgeRadius => &mut self.r_le,
            ParsecParam::UpperCrestX => &mut self.x_up,
            ParsecParam::LowerCrestX => &mut self.x_lo,
            ParsecParam::UpperCrestY => &mut self.y_up,
            ParsecParam::UpperCrestCurvature => &mut self.d2y_up,
            ParsecParam::LowerCrestY => &mut self.y_lo,
            ParsecParam::LowerCrestCurvature => &mut self.d2y_lo,
            ParsecParam::TrailingEdgeThickness => &mut self.dy_te,
            ParsecParam::TrailingEdgeOffset => &mut self.y_te,
            ParsecParam::TrailingEdgeAngle => &mut self.a_te,
            ParsecParam::TrailingEdgeWedge => &mut self.b_te,
        };
        *slot = value;
        self
    }

    /// Rejects NaN and infinite values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::NonFinite`] naming the first offending parameter.
    pub fn check_finite(&self) -> Result<(), ConfigurationError> {
        for param in ParsecParam::ALL {
            let value = self.get(param);
            if !value.is_finite() {
                return Err(ConfigurationError::NonFinite {
                    parameter: param.name(),
                    value,
                });
            }
        }
        Ok(())
    }
}

/// Allowed interval for one parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRange {
    pub min: f64,
    pub max: f64,
    /// Whether the endpoints themselves are excluded.
    pub open: bool,
}

impl ParamRange {
    #[must_use]
    pub fn closed(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            open: false,
        }
    }

    #[must_use]
    pub fn open(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            open: true,
        }
    }

    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        if self.open {
            value > self.min && value < self.max
        } else {
            value >= self.min && value <= self.max
        }
    }
}

/// Optional physical range checks applied before generation.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterBounds {
    ranges: Vec<(ParsecParam, ParamRange)>,
}

impl Default for ParameterBounds {
    /// `R_LE >= 0` and both crest locations strictly inside the chord.
    fn default() -> Self {
        Self {
            ranges: vec![
                (
                    ParsecParam::LeadingEdgeRadius,
                    ParamRange::closed(0.0, f64::INFINITY),
                ),
                (ParsecParam::UpperCrestX, ParamRange::open(0.0, 1.0)),
                (ParsecParam::LowerCrestX, ParamRange::open(0.0, 1.0)),
            ],
        }
    }
}

impl ParameterBounds {
    /// Default bounds plus the trailing-edge envelope that produces usable
    /// shapes for the reference crest settings.
    #[must_use]
    pub fn design_envelope() -> Self {
        Self::default()
            .with_range(ParsecParam::TrailingEdgeAngle, ParamRange::closed(-30.0, 5.0))
            .with_range(ParsecParam::TrailingEdgeOffset, ParamRange::closed(-0.3, 0.1))
            .with_range(ParsecParam::LowerCrestCurvature, ParamRange::closed(0.0, 0.6))
    }

    /// Adds or replaces the range for `param`.
    #[must_use]
    pub fn with_range(mut self, param: ParsecParam, range: ParamRange) -> Self {
        self.ranges.retain(|(p, _)| *p != param);
        self.ranges.push((param, range));
        self
    }

    /// Returns the range configured for `param`, if any.
    #[must_use]
    pub fn range(&self, param: ParsecParam) -> Option<&ParamRange> {
        self.ranges.iter().find(|(p, _)| *p == param).map(|(_, r)| r)
    }

    /// Checks every configured range against `params`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::ParameterOutOfRange`] for the first
    /// parameter outside its range.
    pub fn check(&self, params: &ParsecParams) -> Result<(), ConfigurationError> {
        for (param, range) in &self.ranges {
            let value = params.get(*param);
            if !range.contains(value) {
                return Err(ConfigurationError::ParameterOutOfRange {
                    parameter: param.name(),
                    value,
                    min: range.min,
                    max: range.max,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn reference() -> ParsecParams {
        ParsecParams::new(
            0.06, 0.34, 0.39, 0.09, -0.287, -0.088, 0.0, 0.0, 0.05, -30.0, 0.0,
        )
    }

    #[test]
    fn get_and_with_agree_for_every_param() {
        let p = reference();
        for (i, param) in ParsecParam::ALL.into_iter().enumerate() {
            let value = 100.0 + f64::from(u32::try_from(i).unwrap());
            let q = p.with(param, value);
            assert!((q.get(param) - value).abs() < 1e-12, "{}", param.name());
            // Everything else untouched.
            for other in ParsecParam::ALL.into_iter().filter(|o| *o != param) {
                assert!((q.get(other) - p.get(other)).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn finite_params_pass() {
        assert!(reference().check_finite().is_ok());
    }

    #[test]
    fn nan_param_is_reported_by_name() {
        let p = reference().with(ParsecParam::LowerCrestY, f64::NAN);
        let err = p.check_finite().unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::NonFinite {
                parameter: "y_lo",
                ..
            }
        ));
    }

    #[test]
    fn default_bounds_accept_reference() {
        assert!(ParameterBounds::default().check(&reference()).is_ok());
        assert!(ParameterBounds::design_envelope().check(&reference()).is_ok());
    }

    #[test]
    fn crest_on_chord_end_is_out_of_range() {
        let p = reference().with(ParsecParam::UpperCrestX, 1.0);
        let err = ParameterBounds::default().check(&p).unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::ParameterOutOfRange {
                parameter: "x_up",
                value: 1.0,
                min: 0.0,
                max: 1.0,
            }
        );
    }

    #[test]
    fn negative_radius_is_out_of_range() {
        let p = reference().with(ParsecParam::LeadingEdgeRadius, -0.01);
        assert!(ParameterBounds::default().check(&p).is_err());
    }

    #[test]
    fn envelope_rejects_steep_trailing_edge() {
        let p = reference().with(ParsecParam::TrailingEdgeAngle, -45.0);
        assert!(ParameterBounds::default().check(&p).is_ok());
        assert!(ParameterBounds::design_envelope().check(&p).is_err());
    }

    #[test]
    fn with_range_replaces_existing() {
        let bounds = ParameterBounds::default()
            .with_range(ParsecParam::UpperCrestX, ParamRange::closed(0.0, 1.0));
        assert_eq!(bounds.range(ParsecParam::UpperCrestX), Some(&ParamRange::closed(0.0, 1.0)));
        let p = reference().with(ParsecParam::UpperCrestX, 1.0);
        assert!(bounds.check(&p).is_ok());
    }
}
