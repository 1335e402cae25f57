//! Point interpolation: linear, quadratic and Lagrange.
//!
//! The quadratic and Lagrange interpolants through the same three points are
//! the same polynomial, so each can be used to cross-check the other.

use crate::direct::gauss_solve;
use crate::error::{NumericsError, Result};
use ndarray::{Array1, array};

/// A sample `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Abscissa; must differ between the points of one interpolant
    pub x: f64,
    /// Sampled value at `x`
    pub y: f64,
}

impl Point {
    /// Create a new sample
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Reject point sets where two x-values coincide
fn ensure_distinct_x(points: &[Point]) -> Result<()> {
    for (i, p) in points.iter().enumerate() {
        if points[i + 1..].iter().any(|q| q.x == p.x) {
            return Err(NumericsError::DegenerateInput { x: p.x });
        }
    }
    Ok(())
}

/// Straight line `y = slope·x + intercept` through two points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    /// Rise over run between the two points
    pub slope: f64,
    /// Value of the line at `x = 0`
    pub intercept: f64,
}

impl LinearFit {
    /// Evaluate the line at `x`
    pub fn eval(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Fit the line through two points.
///
/// A vertical line (both x equal) cannot be written as `y = m·x + b` and
/// yields [`NumericsError::DegenerateInput`].
pub fn linear_fit(points: &[Point; 2]) -> Result<LinearFit> {
    ensure_distinct_x(points)?;
    let [p0, p1] = points;
    let slope = (p1.y - p0.y) / (p1.x - p0.x);
    Ok(LinearFit {
        slope,
        intercept: p0.y - slope * p0.x,
    })
}

/// Linear interpolation through two points, evaluated at `x`
pub fn linear(points: &[Point; 2], x: f64) -> Result<f64> {
    Ok(linear_fit(points)?.eval(x))
}

/// Coefficients `[a, b, c]` of `a·x² + b·x + c` through three points.
///
/// Solves the Vandermonde system with rows `[xᵢ², xᵢ, 1]` by Gaussian
/// elimination.
pub fn quadratic_coefficients(points: &[Point; 3]) -> Result<[f64; 3]> {
    ensure_distinct_x(points)?;
    let [p0, p1, p2] = points;
    let vandermonde = array![
        [p0.x * p0.x, p0.x, 1.0],
        [p1.x * p1.x, p1.x, 1.0],
        [p2.x * p2.x, p2.x, 1.0],
    ];
    let rhs: Array1<f64> = array![p0.y, p1.y, p2.y];

    let coeffs = gauss_solve(&vandermonde, &rhs)?;
    Ok([coeffs[0], coeffs[1], coeffs[2]])
}

/// Quadratic interpolation through three points, evaluated at `x`
pub fn polynomial(points: &[Point; 3], x: f64) -> Result<f64> {
    let [a, b, c] = quadratic_coefficients(points)?;
    Ok(a * x * x + b * x + c)
}

/// Lagrange interpolation through three points, evaluated at `x`.
///
/// `Lᵢ(x) = Π_{j≠i} (x - xⱼ) / (xᵢ - xⱼ)` and the result is `Σ yᵢ·Lᵢ(x)`.
pub fn lagrange(points: &[Point; 3], x: f64) -> Result<f64> {
    ensure_distinct_x(points)?;
    let [p0, p1, p2] = points;

    let l0 = ((x - p1.x) * (x - p2.x)) / ((p0.x - p1.x) * (p0.x - p2.x));
    let l1 = ((x - p0.x) * (x - p2.x)) / ((p1.x - p0.x) * (p1.x - p2.x));
    let l2 = ((x - p0.x) * (x - p1.x)) / ((p2.x - p0.x) * (p2.x - p1.x));

    Ok(p0.y * l0 + p1.y * l1 + p2.y * l2)
}
