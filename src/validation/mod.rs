//! Plausibility checks on a sampled airfoil.
//!
//! A rejected shape is a normal outcome, not an error: the checks return a
//! [`ShapeDefect`] describing the first rule that failed.

use thiserror::Error;

/// Heuristic limits used by [`ShapeValidator`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeThresholds {
    /// Fraction of the samples counted as the front section.
    pub front_fraction: f64,
    /// The lower front minimum must reach at least this share of the lower
    /// back minimum (by magnitude).
    pub lower_dominance: f64,
    /// Upper surface may rise to at most this multiple of `y_up`.
    pub upper_overshoot: f64,
    /// Lower front section may dip to at most this multiple of `|y_lo|`.
    pub lower_overshoot: f64,
}

impl Default for ShapeThresholds {
    fn default() -> Self {
        Self {
            front_fraction: 0.4,
            lower_dominance: 0.5,
            upper_overshoot: 1.5,
            lower_overshoot: 1.5,
        }
    }
}

/// The first shape rule a sampled airfoil violates.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeDefect {
    #[error("sample counts differ: x={x}, upper={upper}, lower={lower}")]
    LengthMismatch {
        x: usize,
        upper: usize,
        lower: usize,
    },

    #[error("upper surface peaks aft: front max {front_max} < back max {back_max}")]
    AftUpperCrest { front_max: f64, back_max: f64 },

    #[error("surfaces touch at interior sample {index}")]
    SurfaceContact { index: usize },

    #[error("lower crest too shallow: front min {front_min} against back min {back_min}")]
    WeakLowerCrest { front_min: f64, back_min: f64 },

    #[error("upper surface reaches {max}, above limit {limit}")]
    UpperOvershoot { max: f64, limit: f64 },

    #[error("lower surface reaches {min}, beyond limit {limit}")]
    LowerOvershoot { min: f64, limit: f64 },
}

/// Applies the shape rules in a fixed order, stopping at the first failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShapeValidator {
    thresholds: ShapeThresholds,
}

impl ShapeValidator {
    #[must_use]
    pub fn new(thresholds: ShapeThresholds) -> Self {
        Self { thresholds }
    }

    #[must_use]
    pub fn thresholds(&self) -> &ShapeThresholds {
        &self.thresholds
    }

    /// Runs all checks.
    ///
    /// # Errors
    ///
    /// Returns the [`ShapeDefect`] of the first failing rule:
    ///
    /// 1. `x`, `upper` and `lower` have the same length.
    /// 2. The upper front section holds the upper maximum.
    /// 3. No interior sample (excluding the first and the last two) has
    ///    `upper == lower`.
    /// 4. The lower front minimum is at least `lower_dominance` times the
    ///    lower back minimum, by magnitude.
    /// 5. The upper maximum is at most `upper_overshoot * y_up`.
    /// 6. The lower front minimum is at most `lower_overshoot * |y_lo|`, by
    ///    magnitude.
    pub fn check(
        &self,
        x: &[f64],
        upper: &[f64],
        lower: &[f64],
        y_up: f64,
        y_lo: f64,
    ) -> Result<(), ShapeDefect> {
        let n = x.len();
        if upper.len() != n || lower.len() != n {
            return Err(ShapeDefect::LengthMismatch {
                x: n,
                upper: upper.len(),
                lower: lower.len(),
            });
        }

        let split = self.split_index(n);

        let (upper_front, upper_back) = upper.split_at(split);
        let front_max = max(upper_front);
        let back_max = max(upper_back);
        if front_max < back_max {
            return Err(ShapeDefect::AftUpperCrest {
                front_max,
                back_max,
            });
        }

        // Exact equality: the surfaces may only meet at the trailing edge.
        #[allow(clippy::float_cmp)]
        let contact = (1..n.saturating_sub(2)).find(|&i| upper[i] == lower[i]);
        if let Some(index) = contact {
            return Err(ShapeDefect::SurfaceContact { index });
        }

        let (lower_front, lower_back) = lower.split_at(split);
        let front_min = min(lower_front);
        let back_min = min(lower_back);
        if front_min.abs() < back_min.abs() * self.thresholds.lower_dominance {
            return Err(ShapeDefect::WeakLowerCrest {
                front_min,
                back_min,
            });
        }

        let upper_max = max(upper);
        let upper_limit = self.thresholds.upper_overshoot * y_up;
        if upper_max > upper_limit {
            return Err(ShapeDefect::UpperOvershoot {
                max: upper_max,
                limit: upper_limit,
            });
        }

        let lower_limit = (self.thresholds.lower_overshoot * y_lo).abs();
        if front_min.abs() > lower_limit {
            return Err(ShapeDefect::LowerOvershoot {
                min: front_min,
                limit: lower_limit,
            });
        }

        Ok(())
    }

    /// Runs all checks and logs the reason for a rejection.
    #[must_use]
    pub fn is_valid(&self, x: &[f64], upper: &[f64], lower: &[f64], y_up: f64, y_lo: f64) -> bool {
        match self.check(x, upper, lower, y_up, y_lo) {
            Ok(()) => true,
            Err(defect) => {
                tracing::warn!(%defect, "airfoil shape rejected");
                false
            }
        }
    }

    /// Index separating the front section from the back section.
    fn split_index(&self, n: usize) -> usize {
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            clippy::cast_precision_loss
        )]
        let split = (self.thresholds.front_fraction * n as f64).floor().max(0.0) as usize;
        split.min(n)
    }
}

/// Validates with the default thresholds.
#[must_use]
pub fn validate(x: &[f64], upper: &[f64], lower: &[f64], y_up: f64, y_lo: f64) -> bool {
    ShapeValidator::default().is_valid(x, upper, lower, y_up, y_lo)
}

/// Maximum of a slice; `-inf` when empty.
fn max(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// Minimum of a slice; `+inf` when empty.
fn min(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, f64::min)
}
