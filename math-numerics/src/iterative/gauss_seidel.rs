//! Gauss-Seidel iteration
//!
//! Same update formula as Jacobi, but components already updated in the
//! current sweep (j < i) are used immediately.

use super::{IterativeSolution, Sweep, solve_stationary};
use crate::config::IterativeConfig;
use crate::error::Result;
use ndarray::{Array1, Array2};

/// Sequential-update sweep
#[derive(Debug, Clone, Copy, Default)]
pub struct GaussSeidel;

impl Sweep for GaussSeidel {
    fn name(&self) -> &'static str {
        "Gauss-Seidel"
    }

    fn sweep(
        &self,
        a: &Array2<f64>,
        b: &Array1<f64>,
        prev: &Array1<f64>,
        next: &mut Array1<f64>,
    ) {
        next.assign(prev);
        let n = b.len();
        for i in 0..n {
            let mut sum = 0.0;
            for j in 0..n {
                if j != i {
                    // next[j] is this sweep's value for j < i and the previous one for j > i
                    sum += a[[i, j]] * next[j];
                }
            }
            next[i] = (b[i] - sum) / a[[i, i]];
        }
    }
}

/// Solve Ax = b with Gauss-Seidel iteration starting from the zero vector
pub fn gauss_seidel(
    a: &Array2<f64>,
    b: &Array1<f64>,
    config: &IterativeConfig,
) -> Result<IterativeSolution> {
    gauss_seidel_with_guess(a, b, &Array1::zeros(b.len()), config)
}

/// Solve Ax = b with Gauss-Seidel iteration starting from `x0`
pub fn gauss_seidel_with_guess(
    a: &Array2<f64>,
    b: &Array1<f64>,
    x0: &Array1<f64>,
    config: &IterativeConfig,
) -> Result<IterativeSolution> {
    solve_stationary(&GaussSeidel, a, b, x0, config)
}
