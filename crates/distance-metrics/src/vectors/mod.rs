//! Distance functions for numeric vectors.
//!
//! Each function validates its operands with
//! [`validate_numeric_pair`](crate::validation::validate_numeric_pair) before
//! computing anything, so an error is returned instead of a distance whenever
//! an element is non-numeric or the vectors differ in length.

pub(crate) mod lp_norms;
mod utils;

use crate::{validation::numeric_pair, DistanceError, Element, Minkowski};

/// Euclidean distance between two vectors.
///
/// Also known as the L2-norm, the Euclidean distance is defined as the square
/// root of the sum of the squares of the differences between the
/// corresponding elements of the two vectors.
///
/// # Arguments
///
/// * `x` - The first slice of `Element`s.
/// * `y` - The second slice of `Element`s.
///
/// # Errors
///
/// * If either vector holds a non-numeric element.
/// * If the vectors differ in length.
///
/// # Examples
///
/// ```
/// use distance_metrics::euclidean;
///
/// let x = [1.0, 2.0, 3.0];
/// let y = [4.0, 5.0, 6.0];
///
/// let distance = euclidean(&x, &y).unwrap();
///
/// assert!((distance - 27.0_f64.sqrt()).abs() <= f64::EPSILON);
/// ```
pub fn euclidean<T: Element>(x: &[T], y: &[T]) -> Result<f64, DistanceError> {
    let (x, y) = numeric_pair(x, y)?;
    Ok(lp_norms::euclidean(&x, &y))
}

/// Manhattan distance between two vectors.
///
/// Also known as the L1-norm or the taxicab distance, the Manhattan distance is
/// defined as the sum of the absolute differences between the corresponding
/// elements of the two vectors.
///
/// # Arguments
///
/// * `x` - The first slice of `Element`s.
/// * `y` - The second slice of `Element`s.
///
/// # Errors
///
/// * If either vector holds a non-numeric element.
/// * If the vectors differ in length.
///
/// # Examples
///
/// ```
/// use distance_metrics::manhattan;
///
/// let distance = manhattan(&[3, 4, 2, 1], &[0, 5, 6, 9]).unwrap();
///
/// assert!((distance - 16.0).abs() <= f64::EPSILON);
/// ```
pub fn manhattan<T: Element>(x: &[T], y: &[T]) -> Result<f64, DistanceError> {
    let (x, y) = numeric_pair(x, y)?;
    Ok(lp_norms::manhattan(&x, &y))
}

/// Chebyshev distance between two vectors.
///
/// Also known as the L∞-norm, the Chebyshev distance is defined as the maximum
/// absolute difference between the corresponding elements of the two vectors.
///
/// # Arguments
///
/// * `x` - The first slice of `Element`s.
/// * `y` - The second slice of `Element`s.
///
/// # Errors
///
/// * If either vector holds a non-numeric element.
/// * If the vectors differ in length.
/// * If the vectors are empty, since the maximum of nothing is undefined.
///
/// # Examples
///
/// ```
/// use distance_metrics::chebyshev;
///
/// let distance = chebyshev(&[3, 4, 2, 1], &[0, 5, 6, 9]).unwrap();
///
/// assert!((distance - 8.0).abs() <= f64::EPSILON);
/// ```
pub fn chebyshev<T: Element>(x: &[T], y: &[T]) -> Result<f64, DistanceError> {
    let (x, y) = numeric_pair(x, y)?;
    lp_norms::chebyshev(&x, &y).ok_or(DistanceError::EmptyInput)
}

/// Minkowski distance of the given order between two vectors.
///
/// The Lp-norm is defined as the pth root of the sum of the pth powers of
/// the absolute differences between the corresponding elements of the two
/// vectors. Orders `1` and `2` give the Manhattan and Euclidean distances and
/// an infinite order gives the Chebyshev distance.
///
/// # Arguments
///
/// * `x` - The first slice of `Element`s.
/// * `y` - The second slice of `Element`s.
/// * `order` - The order `p` of the norm.
///
/// # Errors
///
/// * If `order` is not positive. This is checked before the vectors.
/// * If either vector holds a non-numeric element.
/// * If the vectors differ in length.
///
/// # Examples
///
/// ```
/// use distance_metrics::minkowski;
///
/// let distance = minkowski(&[0, 5, 6, 9], &[3, 4, 2, 1], 3.0).unwrap();
///
/// assert!((distance - 604.0_f64.cbrt()).abs() <= 1e-12);
/// ```
pub fn minkowski<T: Element>(x: &[T], y: &[T], order: f64) -> Result<f64, DistanceError> {
    let metric = Minkowski::new(order)?;
    let (x, y) = numeric_pair(x, y)?;
    metric.compute_reals(&x, &y)
}
