//! Direct solvers for dense linear systems
//!
//! This module provides direct (non-iterative) solvers:
//! - [`gauss_solve`]: Gaussian elimination with partial pivoting
//! - [`lu_decompose`]: Doolittle LU without pivoting, plus [`lu_factorize_pivoted`]
//! - [`lu_solve`]: forward/back substitution on L and U
//! - [`gauss_jordan_inverse`] and [`lu_inverse`]: matrix inversion

mod gauss;
mod inverse;
mod lu;
mod triangular;

pub use gauss::gauss_solve;
pub use inverse::{gauss_jordan_inverse, lu_inverse};
pub use lu::{LuFactors, PivotedLu, lu_decompose, lu_factorize_pivoted};
pub use triangular::{back_substitute, forward_substitute, lu_solve};

use ndarray::Array2;

/// Exchange rows `i` and `j` in place
pub(crate) fn swap_rows(m: &mut Array2<f64>, i: usize, j: usize) {
    if i == j {
        return;
    }
    for col in 0..m.ncols() {
        m.swap([i, col], [j, col]);
    }
}
