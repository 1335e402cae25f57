//! Gaussian elimination with partial pivoting
//!
//! Forward elimination picks, for each column, the remaining row with the
//! largest absolute entry as pivot, then back substitution recovers `x`.

use super::swap_rows;
use crate::algebra::{ensure_len, ensure_square};
use crate::error::{NumericsError, Result};
use ndarray::{Array1, Array2};

/// Solve Ax = b by Gaussian elimination with partial pivoting.
///
/// Works on copies of `a` and `b`; the caller's data is left untouched.
/// Fails with [`NumericsError::SingularMatrix`] on a zero pivot.
pub fn gauss_solve(a: &Array2<f64>, b: &Array1<f64>) -> Result<Array1<f64>> {
    let n = ensure_square(a)?;
    ensure_len(b, n)?;

    let mut m = a.clone();
    let mut rhs = b.clone();

    for i in 0..n {
        // Find pivot
        let mut max_val = m[[i, i]].abs();
        let mut max_row = i;
        for k in (i + 1)..n {
            let val = m[[k, i]].abs();
            if val > max_val {
                max_val = val;
                max_row = k;
            }
        }

        if max_row != i {
            log::debug!("gauss: swapping rows {i} and {max_row}");
            swap_rows(&mut m, i, max_row);
            rhs.swap(i, max_row);
        }

        let pivot = m[[i, i]];
        if pivot == 0.0 {
            return Err(NumericsError::SingularMatrix { pivot: i });
        }

        for k in (i + 1)..n {
            let factor = m[[k, i]] / pivot;
            rhs[k] -= factor * rhs[i];
            for j in i..n {
                m[[k, j]] -= factor * m[[i, j]];
            }
        }
    }

    // Back substitution
    let mut x = Array1::zeros(n);
    for i in (0..n).rev() {
        let mut sum = 0.0;
        for j in (i + 1)..n {
            sum += m[[i, j]] * x[j];
        }
        x[i] = (rhs[i] - sum) / m[[i, i]];
    }

    Ok(x)
}
