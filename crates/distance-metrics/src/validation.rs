//! Checks that two operands are comparable before any distance is computed.
//!
//! Every metric in this crate runs its operands through one of these checks,
//! so the formulas themselves never see malformed input.

use crate::{DistanceError, Element};

/// Checks that two vectors hold only numeric elements and are of equal size.
///
/// The elements of `x` are scanned in order, then those of `y`, and the first
/// non-numeric element is reported. The lengths are compared after the scan.
///
/// # Arguments
///
/// * `x` - The first slice of `Element`s.
/// * `y` - The second slice of `Element`s.
///
/// # Errors
///
/// * `DistanceError::NonNumeric` if any element does not denote a finite real.
/// * `DistanceError::IncompatibleLength` if the slices differ in length.
///
/// # Examples
///
/// ```
/// use distance_metrics::{validation::validate_numeric_pair, DistanceError};
///
/// assert!(validate_numeric_pair(&[1.0, 2.0], &[3.0, 4.0]).is_ok());
/// assert_eq!(
///     validate_numeric_pair(&[1, 2, 3], &[1, 2, 3, 4]),
///     Err(DistanceError::IncompatibleLength(3, 4))
/// );
/// ```
pub fn validate_numeric_pair<T: Element>(x: &[T], y: &[T]) -> Result<(), DistanceError> {
    numeric_pair(x, y).map(|_| ())
}

/// Checks that two strings have the same number of characters.
///
/// # Errors
///
/// * `DistanceError::IncompatibleLength` if the strings differ in length.
pub fn validate_string_pair(x: &str, y: &str) -> Result<(), DistanceError> {
    let (n1, n2) = (x.chars().count(), y.chars().count());
    if n1 == n2 {
        Ok(())
    } else {
        Err(DistanceError::IncompatibleLength(n1, n2))
    }
}

/// Validates a pair of vectors and returns the real values they denote.
pub(crate) fn numeric_pair<T: Element>(x: &[T], y: &[T]) -> Result<(Vec<f64>, Vec<f64>), DistanceError> {
    let (x, y) = (reals(x)?, reals(y)?);
    if x.len() == y.len() {
        Ok((x, y))
    } else {
        Err(DistanceError::IncompatibleLength(x.len(), y.len()))
    }
}

/// Converts each element to a real, stopping at the first non-numeric one.
fn reals<T: Element>(v: &[T]) -> Result<Vec<f64>, DistanceError> {
    v.iter()
        .map(|item| item.as_real().ok_or_else(|| DistanceError::NonNumeric(item.to_string())))
        .collect()
}
