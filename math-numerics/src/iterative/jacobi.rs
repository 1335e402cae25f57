//! Jacobi iteration
//!
//! Every component of the new iterate is computed from the previous iterate
//! only: `x_new[i] = (b[i] - Σ_{j≠i} A[i][j]·x_old[j]) / A[i][i]`.

use super::{IterativeSolution, Sweep, solve_stationary};
use crate::config::IterativeConfig;
use crate::error::Result;
use ndarray::{Array1, Array2};

/// Simultaneous-update sweep
#[derive(Debug, Clone, Copy, Default)]
pub struct Jacobi;

impl Sweep for Jacobi {
    fn name(&self) -> &'static str {
        "Jacobi"
    }

    fn sweep(
        &self,
        a: &Array2<f64>,
        b: &Array1<f64>,
        prev: &Array1<f64>,
        next: &mut Array1<f64>,
    ) {
        let n = b.len();
        for i in 0..n {
            let mut sum = 0.0;
            for j in 0..n {
                if j != i {
                    sum += a[[i, j]] * prev[j];
                }
            }
            next[i] = (b[i] - sum) / a[[i, i]];
        }
    }
}

/// Solve Ax = b with Jacobi iteration starting from the zero vector
pub fn jacobi(
    a: &Array2<f64>,
    b: &Array1<f64>,
    config: &IterativeConfig,
) -> Result<IterativeSolution> {
    jacobi_with_guess(a, b, &Array1::zeros(b.len()), config)
}

/// Solve Ax = b with Jacobi iteration starting from `x0`
pub fn jacobi_with_guess(
    a: &Array2<f64>,
    b: &Array1<f64>,
    x0: &Array1<f64>,
    config: &IterativeConfig,
) -> Result<IterativeSolution> {
    solve_stationary(&Jacobi, a, b, x0, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_single_sweep_uses_previous_iterate_only() {
        let a = array![[4.0, 2.0, 0.0], [2.0, 10.0, 4.0], [0.0, 4.0, 5.0]];
        let b = array![2.0, 6.0, 5.0];
        let prev = Array1::zeros(3);
        let mut next = Array1::zeros(3);

        Jacobi.sweep(&a, &b, &prev, &mut next);

        assert_relative_eq!(next[0], 0.5);
        assert_relative_eq!(next[1], 0.6);
        assert_relative_eq!(next[2], 1.0);
    }

    #[test]
    fn test_jacobi_diagonal_system_converges_immediately() {
        let a = array![[2.0, 0.0], [0.0, 4.0]];
        let b = array![2.0, 8.0];

        let solution = jacobi(&a, &b, &IterativeConfig::default()).unwrap();
        assert!(solution.converged);
        assert_eq!(solution.iterations, 2);
        assert_eq!(solution.x, array![1.0, 2.0]);
    }

    #[test]
    fn test_jacobi_with_exact_guess() {
        let a = array![[2.0, 0.0], [0.0, 4.0]];
        let b = array![2.0, 8.0];

        let solution =
            jacobi_with_guess(&a, &b, &array![1.0, 2.0], &IterativeConfig::default()).unwrap();
        assert!(solution.converged);
        assert_eq!(solution.iterations, 1);
        assert_eq!(solution.max_change, 0.0);
    }
}
