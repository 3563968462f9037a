use crate::error::ConfigurationError;
use crate::math::Point3;
use crate::parsec::SurfacePolynomial;

use super::ChordSampling;

/// Upper and lower surface ordinates over one shared chordwise sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct AirfoilProfile {
    /// Chordwise positions, strictly increasing.
    pub x: Vec<f64>,
    /// Upper-surface height at each `x`.
    pub upper: Vec<f64>,
    /// Lower-surface height at each `x`.
    pub lower: Vec<f64>,
}

impl AirfoilProfile {
    /// Number of chordwise stations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Returns the closed contour in the plane `z = 0`.
    ///
    /// Points run from the upper trailing edge forward to the leading edge,
    /// then aft along the lower surface to its trailing edge. The leading
    /// edge appears once.
    #[must_use]
    pub fn outline(&self) -> Vec<Point3> {
        let n = self.len().min(self.upper.len()).min(self.lower.len());
        if n == 0 {
            return Vec::new();
        }
        let mut points = Vec::with_capacity(2 * n - 1);
        points.extend(
            (0..n)
                .rev()
                .map(|i| Point3::new(self.x[i], self.upper[i], 0.0)),
        );
        points.extend((1..n).map(|i| Point3::new(self.x[i], self.lower[i], 0.0)));
        points
    }

    /// Local thickness `upper - lower` at each station.
    #[must_use]
    pub fn thickness(&self) -> Vec<f64> {
        self.upper
            .iter()
            .zip(&self.lower)
            .map(|(u, l)| u - l)
            .collect()
    }
}

/// Evaluates both surfaces on the samples produced by `sampling`.
///
/// # Errors
///
/// Returns [`ConfigurationError::InvalidSampling`] if `sampling` cannot
/// produce a valid sequence.
pub fn generate_curve(
    upper: &SurfacePolynomial,
    lower: &SurfacePolynomial,
    sampling: &ChordSampling,
) -> Result<AirfoilProfile, ConfigurationError> {
    let x = sampling.samples()?;
    let y_upper = x.iter().map(|&xi| upper.evaluate(xi)).collect();
    let y_lower = x.iter().map(|&xi| lower.evaluate(xi)).collect();
    Ok(AirfoilProfile {
        x,
        upper: y_upper,
        lower: y_lower,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::parsec::{CoefficientSystems, ParsecParams};

    fn reference() -> ParsecParams {
        ParsecParams::new(
            0.06, 0.34, 0.39, 0.09, -0.287, -0.088, 0.0, 0.0, 0.05, -30.0, 0.0,
        )
    }

    fn reference_profile(sampling: &ChordSampling) -> AirfoilProfile {
        let (up, lo) = CoefficientSystems::new(&reference()).solve().unwrap();
        generate_curve(&up, &lo, sampling).unwrap()
    }

    #[test]
    fn surfaces_share_samples() {
        let profile = reference_profile(&ChordSampling::default());
        assert_eq!(profile.upper.len(), profile.len());
        assert_eq!(profile.lower.len(), profile.len());
        assert!(profile.x[0].abs() < f64::EPSILON);
        assert!((profile.x[profile.len() - 1] - 1.0).abs() < f64::EPSILON);
        assert!(profile.upper.iter().chain(&profile.lower).all(|y| y.is_finite()));
    }

    #[test]
    fn surfaces_meet_at_leading_edge() {
        let profile = reference_profile(&ChordSampling::default());
        assert!(profile.upper[0].abs() < 1e-12);
        assert!(profile.lower[0].abs() < 1e-12);
    }

    #[test]
    fn trailing_edge_matches_target() {
        let p = reference();
        let profile = reference_profile(&ChordSampling::Uniform { points: 21 });
        let last = profile.len() - 1;
        assert!((profile.upper[last] - p.y_te).abs() < 1e-9);
        assert!((profile.lower[last] - p.y_te).abs() < 1e-9);
    }

    #[test]
    fn generation_is_deterministic() {
        let a = reference_profile(&ChordSampling::default());
        let b = reference_profile(&ChordSampling::default());
        assert_eq!(a, b);
    }

    #[test]
    fn invalid_sampling_propagates() {
        let (up, lo) = CoefficientSystems::new(&reference()).solve().unwrap();
        let err = generate_curve(&up, &lo, &ChordSampling::Cosine { points: 1 }).unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidSampling(_)));
    }

    #[test]
    fn outline_is_selig_ordered() {
        let profile = AirfoilProfile {
            x: vec![0.0, 0.5, 1.0],
            upper: vec![0.0, 0.1, 0.01],
            lower: vec![0.0, -0.05, -0.01],
        };
        let pts = profile.outline();
        assert_eq!(pts.len(), 5);
        let expected = [
            (1.0, 0.01),
            (0.5, 0.1),
            (0.0, 0.0),
            (0.5, -0.05),
            (1.0, -0.01),
        ];
        for (p, (x, y)) in pts.iter().zip(expected) {
            assert!((p.x - x).abs() < 1e-12 && (p.y - y).abs() < 1e-12);
            assert!(p.z.abs() < 1e-12);
        }
    }

    #[test]
    fn outline_of_empty_profile_is_empty() {
        let profile = AirfoilProfile {
            x: vec![],
            upper: vec![],
            lower: vec![],
        };
        assert!(profile.is_empty());
        assert!(profile.outline().is_empty());
    }

    #[test]
    fn thickness_is_pointwise_difference() {
        let profile = AirfoilProfile {
            x: vec![0.0, 0.5, 1.0],
            upper: vec![0.0, 0.1, 0.01],
            lower: vec![0.0, -0.05, -0.01],
        };
        let t = profile.thickness();
        assert!((t[1] - 0.15).abs() < 1e-12);
        assert!((t[2] - 0.02).abs() < 1e-12);
    }
}
