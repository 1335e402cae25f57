//! Dense matrix algebra: norms, products, condition number.

use crate::direct::gauss_jordan_inverse;
use crate::error::{NumericsError, Result};
use crate::parallel::parallel_map_indexed;
use ndarray::{Array1, Array2};

/// Return `n` if `a` is square.
pub(crate) fn ensure_square(a: &Array2<f64>) -> Result<usize> {
    let (rows, cols) = a.dim();
    if rows != cols {
        return Err(NumericsError::NotSquare { rows, cols });
    }
    Ok(rows)
}

pub(crate) fn ensure_len(v: &Array1<f64>, expected: usize) -> Result<()> {
    if v.len() != expected {
        return Err(NumericsError::DimensionMismatch {
            expected,
            got: v.len(),
        });
    }
    Ok(())
}

/// `f64::max` that keeps NaN instead of discarding it, for use as a fold step
pub(crate) fn nan_max(acc: f64, v: f64) -> f64 {
    if v.is_nan() || v > acc { v } else { acc }
}

fn ensure_same_shape(a: &Array2<f64>, b: &Array2<f64>) -> Result<()> {
    if a.nrows() != b.nrows() {
        return Err(NumericsError::DimensionMismatch {
            expected: a.nrows(),
            got: b.nrows(),
        });
    }
    if a.ncols() != b.ncols() {
        return Err(NumericsError::DimensionMismatch {
            expected: a.ncols(),
            got: b.ncols(),
        });
    }
    Ok(())
}

/// n×n identity matrix
pub fn identity(n: usize) -> Array2<f64> {
    Array2::eye(n)
}

/// Infinity norm: the largest row sum of absolute values.
///
/// An empty matrix has norm 0. A NaN entry makes the norm NaN.
pub fn infinity_norm(a: &Array2<f64>) -> f64 {
    a.rows()
        .into_iter()
        .map(|row| row.iter().map(|v| v.abs()).sum::<f64>())
        .fold(0.0, nan_max)
}

/// Condition number `‖A‖∞ · ‖A⁻¹‖∞`.
///
/// The inverse comes from Gauss-Jordan elimination, so a singular matrix
/// surfaces as [`NumericsError::SingularMatrix`].
pub fn condition_number(a: &Array2<f64>) -> Result<f64> {
    let inverse = gauss_jordan_inverse(a)?;
    Ok(infinity_norm(a) * infinity_norm(&inverse))
}

/// Matrix product `A·B`.
pub fn multiply(a: &Array2<f64>, b: &Array2<f64>) -> Result<Array2<f64>> {
    if a.ncols() != b.nrows() {
        return Err(NumericsError::DimensionMismatch {
            expected: a.ncols(),
            got: b.nrows(),
        });
    }

    let (m, p) = (a.nrows(), b.ncols());
    let rows = parallel_map_indexed(m, |i| {
        let a_row = a.row(i);
        (0..p)
            .map(|j| a_row.dot(&b.column(j)))
            .collect::<Vec<f64>>()
    });

    let mut product = Array2::zeros((m, p));
    for (i, row) in rows.into_iter().enumerate() {
        product.row_mut(i).assign(&Array1::from(row));
    }
    Ok(product)
}

/// Matrix-vector product `A·v`.
pub fn multiply_vector(a: &Array2<f64>, v: &Array1<f64>) -> Result<Array1<f64>> {
    ensure_len(v, a.ncols())?;
    Ok(a.rows().into_iter().map(|row| row.dot(v)).collect())
}

/// Element-wise difference `A - B`.
pub fn subtract(a: &Array2<f64>, b: &Array2<f64>) -> Result<Array2<f64>> {
    ensure_same_shape(a, b)?;
    Ok(a - b)
}

/// Largest absolute element-wise difference between two matrices of equal shape.
///
/// NaN anywhere in either operand yields NaN, so `< tol` checks fail.
pub fn max_abs_difference(a: &Array2<f64>, b: &Array2<f64>) -> Result<f64> {
    ensure_same_shape(a, b)?;
    Ok(a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, nan_max))
}
