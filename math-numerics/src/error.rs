//! Error types for the numerical kernels.
//!
//! Every kernel fails fast with one of these variants instead of returning
//! NaN/Inf or a partially computed result.

use thiserror::Error;

/// Errors that can occur in the solvers, interpolators and matrix algebra.
#[derive(Debug, Error)]
pub enum NumericsError {
    /// A zero pivot was met during elimination, decomposition or inversion.
    #[error("matrix is singular: zero pivot at step {pivot}")]
    SingularMatrix {
        /// Row/column index of the zero pivot
        pivot: usize,
    },

    /// Two interpolation points share the same x-coordinate.
    #[error("degenerate input: interpolation points share x = {x}")]
    DegenerateInput {
        /// The repeated x value
        x: f64,
    },

    /// The iteration matrix is not strictly diagonally dominant.
    #[error("matrix is not diagonally dominant (row {row}); convergence is not guaranteed")]
    NotDominant {
        /// First row failing the dominance test
        row: usize,
    },

    /// An iterate stopped being finite (NaN or infinite input, or overflow).
    #[error("iteration produced a non-finite value at sweep {iteration}")]
    NonFinite {
        /// 1-based sweep at which the non-finite value appeared
        iteration: usize,
    },

    /// Operand sizes are incompatible.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Expected length
        expected: usize,
        /// Actual length provided
        got: usize,
    },

    /// A square matrix was required.
    #[error("matrix must be square, got {rows}x{cols}")]
    NotSquare {
        /// Number of rows
        rows: usize,
        /// Number of columns
        cols: usize,
    },

    /// Solver configuration is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Reading or writing a configuration file failed.
    #[error("configuration I/O error: {0}")]
    ConfigIo(#[from] std::io::Error),

    /// A configuration file could not be parsed.
    #[error("configuration parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

/// A specialized `Result` type for numerical operations.
pub type Result<T> = std::result::Result<T, NumericsError>;

impl NumericsError {
    /// Returns `true` if a zero pivot was encountered.
    pub fn is_singular(&self) -> bool {
        matches!(self, NumericsError::SingularMatrix { .. })
    }

    /// Returns `true` for interpolation points with coinciding x values.
    pub fn is_degenerate(&self) -> bool {
        matches!(self, NumericsError::DegenerateInput { .. })
    }

    /// Returns `true` if an iterative solver refused to start.
    pub fn is_not_dominant(&self) -> bool {
        matches!(self, NumericsError::NotDominant { .. })
    }

    /// Returns `true` if an iterate became NaN or infinite.
    pub fn is_non_finite(&self) -> bool {
        matches!(self, NumericsError::NonFinite { .. })
    }

    /// Returns `true` if this is a shape error.
    ///
    /// This includes `DimensionMismatch` and `NotSquare`.
    pub fn is_dimension_error(&self) -> bool {
        matches!(
            self,
            NumericsError::DimensionMismatch { .. } | NumericsError::NotSquare { .. }
        )
    }

    /// Returns `true` if this is a configuration-related error.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            NumericsError::InvalidConfig(_)
                | NumericsError::ConfigIo(_)
                | NumericsError::ConfigParse(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NumericsError::SingularMatrix { pivot: 2 };
        assert_eq!(err.to_string(), "matrix is singular: zero pivot at step 2");

        let err = NumericsError::DimensionMismatch {
            expected: 3,
            got: 4,
        };
        assert_eq!(err.to_string(), "dimension mismatch: expected 3, got 4");
    }

    #[test]
    fn test_degenerate_display() {
        let err = NumericsError::DegenerateInput { x: 2.0 };
        assert!(err.to_string().contains("x = 2"));
    }

    #[test]
    fn test_non_finite() {
        let err = NumericsError::NonFinite { iteration: 4 };
        assert_eq!(
            err.to_string(),
            "iteration produced a non-finite value at sweep 4"
        );
        assert!(err.is_non_finite());
        assert!(!err.is_singular());
    }

    #[test]
    fn test_is_dimension_error() {
        let dim_err = NumericsError::NotSquare { rows: 2, cols: 3 };
        let singular = NumericsError::SingularMatrix { pivot: 0 };

        assert!(dim_err.is_dimension_error());
        assert!(!singular.is_dimension_error());
        assert!(singular.is_singular());
    }

    #[test]
    fn test_is_config_error() {
        let cfg = NumericsError::InvalidConfig("tolerance".into());
        let dominant = NumericsError::NotDominant { row: 1 };

        assert!(cfg.is_config_error());
        assert!(!dominant.is_config_error());
        assert!(dominant.is_not_dominant());
    }
}
