//! The Hamming metric over strings.

use crate::{strings, DistanceError, Operand, Pair};

use super::Metric;

/// Number of positions at which two strings differ.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Hamming;

impl Metric for Hamming {
    fn name(&self) -> String {
        "hamming".to_string()
    }

    fn prepare(&self, x: &Operand, y: &Operand) -> Result<Pair, DistanceError> {
        Pair::text(x, y)
    }

    #[allow(clippy::cast_precision_loss)]
    fn measure(&self, pair: &Pair) -> Result<f64, DistanceError> {
        let (x, y) = pair.texts()?;
        Ok(strings::mismatches(x, y) as f64)
    }
}
