//! Matrix inversion
//!
//! - [`gauss_jordan_inverse`]: elimination on `[A | I]`, swapping rows only
//!   when a diagonal entry is exactly zero.
//! - [`lu_inverse`]: decompose once, then solve against each basis vector.

use super::lu::lu_decompose;
use super::swap_rows;
use crate::algebra::ensure_square;
use crate::error::{NumericsError, Result};
use crate::parallel::{PARALLEL_MIN_ITEMS, is_parallel_available, try_parallel_map_indexed};
use ndarray::{Array1, Array2};

/// Invert `a` by Gauss-Jordan elimination.
///
/// Fails with [`NumericsError::SingularMatrix`] when a zero diagonal entry
/// has no non-zero replacement below it.
pub fn gauss_jordan_inverse(a: &Array2<f64>) -> Result<Array2<f64>> {
    let n = ensure_square(a)?;

    let mut m = a.clone();
    let mut inv = Array2::eye(n);

    for i in 0..n {
        if m[[i, i]] == 0.0 {
            let replacement = ((i + 1)..n).find(|&k| m[[k, i]] != 0.0);
            match replacement {
                Some(k) => {
                    log::debug!("gauss-jordan: swapping rows {i} and {k}");
                    swap_rows(&mut m, i, k);
                    swap_rows(&mut inv, i, k);
                }
                None => return Err(NumericsError::SingularMatrix { pivot: i }),
            }
        }

        let diag = m[[i, i]];
        for j in 0..n {
            m[[i, j]] /= diag;
            inv[[i, j]] /= diag;
        }

        for k in 0..n {
            if k == i {
                continue;
            }
            let factor = m[[k, i]];
            if factor == 0.0 {
                continue;
            }
            for j in 0..n {
                m[[k, j]] -= factor * m[[i, j]];
                inv[[k, j]] -= factor * inv[[i, j]];
            }
        }
    }

    Ok(inv)
}

/// Invert `a` through a single Doolittle decomposition.
///
/// Column `i` of the inverse is the solution of `LUx = e_i`. Inherits the
/// no-pivoting limitation of [`lu_decompose`](super::lu_decompose).
pub fn lu_inverse(a: &Array2<f64>) -> Result<Array2<f64>> {
    let factors = lu_decompose(a)?;
    let n = factors.n();
    log::debug!(
        "lu_inverse: solving {n} columns ({})",
        if is_parallel_available() && n >= PARALLEL_MIN_ITEMS {
            "parallel"
        } else {
            "sequential"
        }
    );

    let columns = try_parallel_map_indexed(n, |i| {
        let mut e = Array1::zeros(n);
        e[i] = 1.0;
        factors.solve(&e)
    })?;

    let mut inv = Array2::zeros((n, n));
    for (i, col) in columns.iter().enumerate() {
        inv.column_mut(i).assign(col);
    }
    Ok(inv)
}
