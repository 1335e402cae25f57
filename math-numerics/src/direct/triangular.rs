//! Forward and back substitution for triangular factors

use crate::algebra::{ensure_len, ensure_square};
use crate::error::{NumericsError, Result};
use ndarray::{Array1, Array2};

/// Solve Ly = b for unit lower-triangular L.
///
/// The diagonal of `l` is taken to be 1 and is never read, so no division
/// happens here.
pub fn forward_substitute(l: &Array2<f64>, b: &Array1<f64>) -> Result<Array1<f64>> {
    let n = ensure_square(l)?;
    ensure_len(b, n)?;

    let mut y = Array1::zeros(n);
    for i in 0..n {
        let mut sum = 0.0;
        for j in 0..i {
            sum += l[[i, j]] * y[j];
        }
        y[i] = b[i] - sum;
    }
    Ok(y)
}

/// Solve Ux = y for upper-triangular U.
///
/// Fails with [`NumericsError::SingularMatrix`] if a diagonal entry is zero.
pub fn back_substitute(u: &Array2<f64>, y: &Array1<f64>) -> Result<Array1<f64>> {
    let n = ensure_square(u)?;
    ensure_len(y, n)?;

    let mut x = Array1::zeros(n);
    for i in (0..n).rev() {
        let u_ii = u[[i, i]];
        if u_ii == 0.0 {
            return Err(NumericsError::SingularMatrix { pivot: i });
        }
        let mut sum = 0.0;
        for j in (i + 1)..n {
            sum += u[[i, j]] * x[j];
        }
        x[i] = (y[i] - sum) / u_ii;
    }
    Ok(x)
}

/// Solve (LU)x = b given the two triangular factors
pub fn lu_solve(l: &Array2<f64>, u: &Array2<f64>, b: &Array1<f64>) -> Result<Array1<f64>> {
    if l.dim() != u.dim() {
        return Err(NumericsError::DimensionMismatch {
            expected: l.nrows(),
            got: u.nrows(),
        });
    }
    let y = forward_substitute(l, b)?;
    back_substitute(u, &y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_forward_substitute_ignores_diagonal() {
        let l = array![[7.0, 0.0, 0.0], [2.0, 7.0, 0.0], [1.0, 3.0, 7.0]];
        let b = array![1.0, 4.0, 10.0];

        let y = forward_substitute(&l, &b).unwrap();
        assert_eq!(y, array![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_back_substitute() {
        let u = array![[2.0, 1.0, 1.0], [0.0, 4.0, 2.0], [0.0, 0.0, 5.0]];
        let y = array![7.0, 14.0, 15.0];

        let x = back_substitute(&u, &y).unwrap();
        assert_relative_eq!(x[2], 3.0);
        assert_relative_eq!(x[1], 2.0);
        assert_relative_eq!(x[0], 1.0);
    }

    #[test]
    fn test_back_substitute_zero_diagonal() {
        let u = array![[1.0, 1.0], [0.0, 0.0]];
        let err = back_substitute(&u, &array![1.0, 1.0]).unwrap_err();
        assert!(matches!(err, NumericsError::SingularMatrix { pivot: 1 }));
    }

    #[test]
    fn test_lu_solve_shape_mismatch() {
        let l = Array2::eye(2);
        let u = Array2::eye(3);
        assert!(
            lu_solve(&l, &u, &array![1.0, 2.0])
                .unwrap_err()
                .is_dimension_error()
        );
        assert!(
            lu_solve(&l, &l, &array![1.0, 2.0, 3.0])
                .unwrap_err()
                .is_dimension_error()
        );
    }
}
