use crate::geometry::ChordSampling;
use crate::parsec::ParameterBounds;
use crate::validation::ShapeThresholds;

/// Settings shared by every airfoil generated in a request or sweep.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneratorConfig {
    /// Chordwise sample distribution.
    pub sampling: ChordSampling,
    /// Limits used by the shape checks.
    pub thresholds: ShapeThresholds,
    /// Range checks applied to the parameters. `None` accepts any finite value.
    pub bounds: Option<ParameterBounds>,
}

impl GeneratorConfig {
    /// Replaces the chordwise sample distribution.
    #[must_use]
    pub fn with_sampling(mut self, sampling: ChordSampling) -> Self {
        self.sampling = sampling;
        self
    }

    /// Replaces the shape-check limits.
    #[must_use]
    pub fn with_thresholds(mut self, thresholds: ShapeThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Enables range checks against `bounds`.
    #[must_use]
    pub fn with_bounds(mut self, bounds: ParameterBounds) -> Self {
        self.bounds = Some(bounds);
        self
    }
}
