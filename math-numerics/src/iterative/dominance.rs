//! Strict row diagonal dominance

use crate::algebra::ensure_square;
use crate::error::{NumericsError, Result};
use ndarray::Array2;
use std::cmp::Ordering;

/// First row `i` where `|A[i][i]| > Σ_{j≠i} |A[i][j]|` does not hold, if any.
/// A NaN on either side counts as a failure.
fn first_non_dominant_row(a: &Array2<f64>) -> Option<usize> {
    a.rows().into_iter().enumerate().find_map(|(i, row)| {
        let off_diag: f64 = row
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .map(|(_, v)| v.abs())
            .sum();
        match row[i].abs().partial_cmp(&off_diag) {
            Some(Ordering::Greater) => None,
            _ => Some(i),
        }
    })
}

/// Check whether every row of a square matrix is strictly diagonally dominant.
///
/// Non-square matrices are never dominant.
pub fn is_diagonally_dominant(a: &Array2<f64>) -> bool {
    a.is_square() && first_non_dominant_row(a).is_none()
}

/// Like [`is_diagonally_dominant`], but reports the first failing row as
/// [`NumericsError::NotDominant`].
pub fn check_diagonal_dominance(a: &Array2<f64>) -> Result<()> {
    ensure_square(a)?;
    match first_non_dominant_row(a) {
        Some(row) => Err(NumericsError::NotDominant { row }),
        None => Ok(()),
    }
}
