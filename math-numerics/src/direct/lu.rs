//! LU decomposition
//!
//! Two factorizations are provided:
//! - [`lu_decompose`]: pivot-free Doolittle scheme returning explicit L and U.
//!   A zero leading minor makes it fail even when the matrix is invertible;
//!   that limitation is reported, not worked around.
//! - [`lu_factorize_pivoted`]: partial pivoting with compact storage, for
//!   matrices the Doolittle scheme cannot handle.

use super::swap_rows;
use super::triangular::{back_substitute, forward_substitute};
use crate::algebra::{ensure_len, ensure_square};
use crate::error::{NumericsError, Result};
use ndarray::{Array1, Array2};

/// Explicit L and U factors with L unit lower triangular and U upper triangular
#[derive(Debug, Clone, PartialEq)]
pub struct LuFactors {
    /// Unit lower-triangular factor
    pub l: Array2<f64>,
    /// Upper-triangular factor
    pub u: Array2<f64>,
}

impl LuFactors {
    /// Matrix dimension
    pub fn n(&self) -> usize {
        self.l.nrows()
    }

    /// Solve Ax = b using the pre-computed factors
    pub fn solve(&self, b: &Array1<f64>) -> Result<Array1<f64>> {
        let y = forward_substitute(&self.l, b)?;
        back_substitute(&self.u, &y)
    }

    /// Multiply the factors back together
    pub fn reconstruct(&self) -> Array2<f64> {
        self.l.dot(&self.u)
    }
}

/// Doolittle LU decomposition without pivoting.
///
/// For each column j, the U entries on and above the diagonal are computed
/// first, then the L entries below it are scaled by `U[j][j]`. Fails with
/// [`NumericsError::SingularMatrix`] as soon as a diagonal entry of U is zero.
pub fn lu_decompose(a: &Array2<f64>) -> Result<LuFactors> {
    let n = ensure_square(a)?;

    let mut l = Array2::eye(n);
    let mut u = Array2::zeros((n, n));

    for j in 0..n {
        for i in 0..=j {
            let mut sum = 0.0;
            for k in 0..i {
                sum += u[[k, j]] * l[[i, k]];
            }
            u[[i, j]] = a[[i, j]] - sum;
        }

        let u_jj = u[[j, j]];
        if u_jj == 0.0 {
            return Err(NumericsError::SingularMatrix { pivot: j });
        }

        for i in (j + 1)..n {
            let mut sum = 0.0;
            for k in 0..j {
                sum += u[[k, j]] * l[[i, k]];
            }
            l[[i, j]] = (a[[i, j]] - sum) / u_jj;
        }
    }

    Ok(LuFactors { l, u })
}

/// LU factorization with partial pivoting
///
/// Stores L and U in one matrix along with the row permutation, so that
/// `L·U = P·A`. Only [`lu_factorize_pivoted`] builds one, and the fields are
/// read-only so the factors, permutation and swap count stay consistent.
#[derive(Debug, Clone)]
pub struct PivotedLu {
    /// Combined L and U matrices (L is unit lower triangular, stored below diagonal)
    lu: Array2<f64>,
    /// `perm[i]` is the original row now in position `i`
    perm: Vec<usize>,
    /// Number of row exchanges performed
    swaps: usize,
    n: usize,
}

impl PivotedLu {
    /// Compact storage: strict lower part is L, upper part including the diagonal is U
    pub fn lu(&self) -> &Array2<f64> {
        &self.lu
    }

    /// `perm()[i]` is the original row now in position `i`
    pub fn perm(&self) -> &[usize] {
        &self.perm
    }

    /// Number of row exchanges performed
    pub fn swaps(&self) -> usize {
        self.swaps
    }

    /// Matrix dimension
    pub fn n(&self) -> usize {
        self.n
    }

    /// Solve Ax = b using the pre-computed factorization
    pub fn solve(&self, b: &Array1<f64>) -> Result<Array1<f64>> {
        ensure_len(b, self.n)?;

        // Apply row permutation: x = Pb
        let mut x: Array1<f64> = self.perm.iter().map(|&p| b[p]).collect();

        // Forward substitution: Ly = Pb
        for i in 0..self.n {
            for j in 0..i {
                let l_ij = self.lu[[i, j]];
                x[i] -= l_ij * x[j];
            }
        }

        // Backward substitution: Ux = y
        for i in (0..self.n).rev() {
            for j in (i + 1)..self.n {
                let u_ij = self.lu[[i, j]];
                x[i] -= u_ij * x[j];
            }
            x[i] /= self.lu[[i, i]];
        }

        Ok(x)
    }

    /// Determinant of the factored matrix
    pub fn determinant(&self) -> f64 {
        let diag: f64 = (0..self.n).map(|i| self.lu[[i, i]]).product();
        if self.swaps % 2 == 0 { diag } else { -diag }
    }

    /// Split the compact storage into explicit L and U factors of P·A
    pub fn factors(&self) -> LuFactors {
        let n = self.n;
        let l = Array2::from_shape_fn((n, n), |(i, j)| match i.cmp(&j) {
            std::cmp::Ordering::Greater => self.lu[[i, j]],
            std::cmp::Ordering::Equal => 1.0,
            std::cmp::Ordering::Less => 0.0,
        });
        let u = Array2::from_shape_fn((n, n), |(i, j)| if i <= j { self.lu[[i, j]] } else { 0.0 });
        LuFactors { l, u }
    }
}

/// Compute LU factorization with partial pivoting
pub fn lu_factorize_pivoted(a: &Array2<f64>) -> Result<PivotedLu> {
    let n = ensure_square(a)?;

    let mut lu = a.clone();
    let mut perm: Vec<usize> = (0..n).collect();
    let mut swaps = 0;

    for k in 0..n {
        // Find pivot
        let mut max_val = lu[[k, k]].abs();
        let mut max_row = k;

        for i in (k + 1)..n {
            let val = lu[[i, k]].abs();
            if val > max_val {
                max_val = val;
                max_row = i;
            }
        }

        if max_val == 0.0 {
            return Err(NumericsError::SingularMatrix { pivot: k });
        }

        if max_row != k {
            swap_rows(&mut lu, k, max_row);
            perm.swap(k, max_row);
            swaps += 1;
        }

        // Compute multipliers and eliminate
        let pivot = lu[[k, k]];
        for i in (k + 1)..n {
            let mult = lu[[i, k]] / pivot;
            lu[[i, k]] = mult;

            for j in (k + 1)..n {
                let update = mult * lu[[k, j]];
                lu[[i, j]] -= update;
            }
        }
    }

    Ok(PivotedLu { lu, perm, swaps, n })
}
