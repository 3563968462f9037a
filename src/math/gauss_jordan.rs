use nalgebra::{SMatrix, SVector};

use crate::error::SolverError;

use super::PIVOT_EPSILON;

/// Inverts a square matrix by Gauss-Jordan elimination with partial pivoting.
///
/// Every row operation that reduces `matrix` to the identity is replayed on
/// an identity matrix, which ends up holding the inverse. In each column the
/// remaining row with the largest magnitude is chosen as pivot, which keeps
/// the elimination stable when entries span several orders of magnitude.
///
/// # Errors
///
/// Returns [`SolverError::Singular`] if the best pivot of some column is
/// below [`PIVOT_EPSILON`] or is not finite.
pub fn invert<const N: usize>(
    matrix: &SMatrix<f64, N, N>,
) -> Result<SMatrix<f64, N, N>, SolverError> {
    let mut a = *matrix;
    let mut inverse = SMatrix::<f64, N, N>::identity();

    for col in 0..N {
        let mut pivot_row = col;
        let mut pivot_abs = a[(col, col)].abs();
        for row in (col + 1)..N {
            let candidate = a[(row, col)].abs();
            if candidate > pivot_abs {
                pivot_abs = candidate;
                pivot_row = row;
            }
        }

        if !pivot_abs.is_finite() || pivot_abs < PIVOT_EPSILON {
            return Err(SolverError::Singular {
                column: col,
                pivot: pivot_abs,
            });
        }

        if pivot_row != col {
            a.swap_rows(col, pivot_row);
            inverse.swap_rows(col, pivot_row);
        }

        let pivot = a[(col, col)];
        for j in 0..N {
            a[(col, j)] /= pivot;
            inverse[(col, j)] /= pivot;
        }

        // Clear the column above and below the pivot.
        for row in 0..N {
            if row == col {
                continue;
            }
            let factor = a[(row, col)];
            for j in 0..N {
                let (a_pivot, inv_pivot) = (a[(col, j)], inverse[(col, j)]);
                a[(row, j)] -= factor * a_pivot;
                inverse[(row, j)] -= factor * inv_pivot;
            }
        }
    }

    Ok(inverse)
}

/// Standard matrix-vector product `inverse * rhs`.
#[must_use]
pub fn multiply<const N: usize>(
    inverse: &SMatrix<f64, N, N>,
    rhs: &SVector<f64, N>,
) -> SVector<f64, N> {
    inverse * rhs
}

/// Solves `matrix * x = rhs` through the explicit inverse.
///
/// # Errors
///
/// Returns [`SolverError::Singular`] if `matrix` cannot be inverted.
pub fn solve<const N: usize>(
    matrix: &SMatrix<f64, N, N>,
    rhs: &SVector<f64, N>,
) -> Result<SVector<f64, N>, SolverError> {
    let inverse = invert(matrix)?;
    Ok(multiply(&inverse, rhs))
}
