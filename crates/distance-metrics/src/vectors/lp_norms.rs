//! Lp-norms between two vectors of reals.
//!
//! These functions assume their inputs have been validated: both slices hold
//! finite values and have the same length. Sums start from `+0.0`, so empty
//! vectors are at distance `0` rather than `-0`.

use core::cmp::Ordering;

use super::utils::abs_diff_iter;

/// Euclidean distance, the square root of the sum of squared differences.
pub fn euclidean(x: &[f64], y: &[f64]) -> f64 {
    abs_diff_iter(x, y).map(|v| v * v).fold(0.0, |acc, v| acc + v).sqrt()
}

/// Manhattan distance, the sum of absolute differences.
pub fn manhattan(x: &[f64], y: &[f64]) -> f64 {
    abs_diff_iter(x, y).fold(0.0, |acc, v| acc + v)
}

/// Chebyshev distance, the largest absolute difference.
///
/// Returns `None` for empty vectors.
pub fn chebyshev(x: &[f64], y: &[f64]) -> Option<f64> {
    abs_diff_iter(x, y).max_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Less))
}

/// General Lp-norm: the `p`th root of the sum of the `p`th powers of the
/// absolute differences.
pub fn minkowski(x: &[f64], y: &[f64], p: f64) -> f64 {
    abs_diff_iter(x, y)
        .map(|v| v.powf(p))
        .fold(0.0, |acc, v| acc + v)
        .powf(p.recip())
}
