//! Distance functions for strings.

use crate::{validation::validate_string_pair, DistanceError};

/// Hamming distance between two strings.
///
/// The Hamming distance is defined as the number of positions at which two
/// strings of equal length differ. Positions are counted in characters, not
/// bytes.
///
/// # Arguments
///
/// * `x` - The first string.
/// * `y` - The second string.
///
/// # Errors
///
/// * If the strings have different lengths.
///
/// # Examples
///
/// ```
/// use distance_metrics::hamming;
///
/// assert_eq!(hamming("1011101", "1001001"), Ok(2));
/// assert_eq!(hamming("chemistry", "dentistry"), Ok(4));
/// assert!(hamming("australopitecus", "bird").is_err());
/// ```
pub fn hamming(x: &str, y: &str) -> Result<usize, DistanceError> {
    validate_string_pair(x, y)?;
    Ok(mismatches(x, y))
}

/// Counts the positions at which two strings of equal length differ.
pub(crate) fn mismatches(x: &str, y: &str) -> usize {
    x.chars().zip(y.chars()).filter(|(a, b)| a != b).count()
}
