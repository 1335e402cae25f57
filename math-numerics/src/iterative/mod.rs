//! Stationary iterative solvers for linear systems
//!
//! This module provides the classical splitting methods:
//! - [`jacobi`]: simultaneous update from the previous iterate
//! - [`gauss_seidel`]: sequential update reusing fresh components
//!
//! Both refuse to start unless the matrix is strictly diagonally dominant
//! (see [`check_diagonal_dominance`]), and both stop when the largest
//! component change between iterates falls below the configured tolerance
//! or the iteration ceiling is reached.

mod dominance;
mod gauss_seidel;
mod jacobi;

pub use dominance::{check_diagonal_dominance, is_diagonally_dominant};
pub use gauss_seidel::{GaussSeidel, gauss_seidel, gauss_seidel_with_guess};
pub use jacobi::{Jacobi, jacobi, jacobi_with_guess};

use crate::algebra::{ensure_len, ensure_square, nan_max};
use crate::config::IterativeConfig;
use crate::error::{NumericsError, Result};
use ndarray::{Array1, Array2};

/// One sweep of a stationary iterative method.
///
/// Implementations write the next iterate into `next` given the previous
/// iterate `prev`. The driver guarantees that `a` is square, strictly
/// diagonally dominant (so every `A[i][i]` is non-zero) and that all vectors
/// have matching length.
pub trait Sweep {
    /// Method name used in log output
    fn name(&self) -> &'static str;

    /// Compute the next iterate
    fn sweep(
        &self,
        a: &Array2<f64>,
        b: &Array1<f64>,
        prev: &Array1<f64>,
        next: &mut Array1<f64>,
    );
}

/// Iterative solver result
#[derive(Debug, Clone)]
pub struct IterativeSolution {
    /// Solution vector
    pub x: Array1<f64>,
    /// Number of sweeps performed
    pub iterations: usize,
    /// Largest component change in the final sweep
    pub max_change: f64,
    /// Whether the change fell below the tolerance before the iteration ceiling
    pub converged: bool,
}

/// Run a stationary method until successive iterates agree to within
/// `config.tolerance` (max-norm), or `config.max_iterations` sweeps.
///
/// Returns [`NumericsError::NotDominant`] without iterating if the dominance
/// check fails, and [`NumericsError::NonFinite`] as soon as a sweep yields NaN
/// or an infinite component. Hitting the ceiling is not an error: the last
/// iterate is returned with `converged == false`.
pub fn solve_stationary<S>(
    method: &S,
    a: &Array2<f64>,
    b: &Array1<f64>,
    x0: &Array1<f64>,
    config: &IterativeConfig,
) -> Result<IterativeSolution>
where
    S: Sweep + ?Sized,
{
    config.validate()?;
    let n = ensure_square(a)?;
    ensure_len(b, n)?;
    ensure_len(x0, n)?;
    check_diagonal_dominance(a)?;

    let mut x = x0.clone();
    let mut next = x0.clone();
    let mut max_change = f64::INFINITY;

    for iter in 0..config.max_iterations {
        method.sweep(a, b, &x, &mut next);

        max_change = x
            .iter()
            .zip(next.iter())
            .map(|(old, new)| (new - old).abs())
            .fold(0.0, nan_max);
        if !max_change.is_finite() {
            log::warn!("{} diverged at iteration {}", method.name(), iter + 1);
            return Err(NumericsError::NonFinite { iteration: iter + 1 });
        }
        std::mem::swap(&mut x, &mut next);

        if config.print_interval > 0 && (iter + 1) % config.print_interval == 0 {
            log::info!(
                "{} iteration {}: max change = {:.6e}",
                method.name(),
                iter + 1,
                max_change
            );
        }

        if max_change < config.tolerance {
            return Ok(IterativeSolution {
                x,
                iterations: iter + 1,
                max_change,
                converged: true,
            });
        }
    }

    log::warn!(
        "{} did not converge in {} iterations (max change {:.6e}, tolerance {:.1e})",
        method.name(),
        config.max_iterations,
        max_change,
        config.tolerance
    );
    Ok(IterativeSolution {
        x,
        iterations: config.max_iterations,
        max_change,
        converged: false,
    })
}
