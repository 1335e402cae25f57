//! Dense linear solvers and point interpolation
//!
//! This crate provides small, self-contained numerical kernels over
//! `ndarray` matrices and vectors. Every operation borrows its inputs, works
//! on private copies and returns either a result or a typed
//! [`NumericsError`], so all of them can be called concurrently.
//!
//! # Features
//!
//! - **Direct Solvers**: Gaussian elimination with partial pivoting, Doolittle
//!   LU (plus a pivoted variant), forward/back substitution
//! - **Inversion**: Gauss-Jordan and LU-based (decompose once, solve n times)
//! - **Iterative Solvers**: Jacobi and Gauss-Seidel with a diagonal-dominance
//!   gate, max-norm stopping rule and an iteration ceiling
//! - **Interpolation**: linear, quadratic (Vandermonde) and Lagrange
//! - **Algebra**: infinity norm, condition number, products
//!
//! # Example
//!
//! ```
//! use math_numerics::{IterativeConfig, gauss_seidel, gauss_solve};
//! use ndarray::array;
//!
//! let a = array![[4.0, 2.0, 0.0], [2.0, 10.0, 4.0], [0.0, 4.0, 5.0]];
//! let b = array![2.0, 6.0, 5.0];
//!
//! let direct = gauss_solve(&a, &b)?;
//! let iterative = gauss_seidel(&a, &b, &IterativeConfig::default())?;
//! assert!(iterative.converged);
//! assert!((direct[1] - iterative.x[1]).abs() < 1e-2);
//! # Ok::<(), math_numerics::NumericsError>(())
//! ```

pub mod algebra;
pub mod config;
pub mod direct;
pub mod error;
pub mod interpolation;
pub mod iterative;
pub mod parallel;

// Re-export main types
pub use config::IterativeConfig;
pub use error::{NumericsError, Result};
pub use interpolation::{LinearFit, Point};

// Re-export direct solvers
pub use direct::{
    LuFactors, PivotedLu, back_substitute, forward_substitute, gauss_jordan_inverse, gauss_solve,
    lu_decompose, lu_factorize_pivoted, lu_inverse, lu_solve,
};

// Re-export iterative solvers
pub use iterative::{
    GaussSeidel, IterativeSolution, Jacobi, Sweep, check_diagonal_dominance, gauss_seidel,
    gauss_seidel_with_guess, is_diagonally_dominant, jacobi, jacobi_with_guess, solve_stationary,
};

// Re-export algebra
pub use algebra::{
    condition_number, identity, infinity_norm, max_abs_difference, multiply, multiply_vector,
    subtract,
};
