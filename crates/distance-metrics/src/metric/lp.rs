//! The Euclidean, Manhattan and Chebyshev metrics.

use crate::{vectors::lp_norms, DistanceError, Operand, Pair};

use super::Metric;

/// L2-norm.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Euclidean;

impl Metric for Euclidean {
    fn name(&self) -> String {
        "euclidean".to_string()
    }

    fn prepare(&self, x: &Operand, y: &Operand) -> Result<Pair, DistanceError> {
        Pair::numeric(x, y)
    }

    fn measure(&self, pair: &Pair) -> Result<f64, DistanceError> {
        let (x, y) = pair.vectors()?;
        Ok(lp_norms::euclidean(x, y))
    }
}

/// L1-norm.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Manhattan;

impl Metric for Manhattan {
    fn name(&self) -> String {
        "manhattan".to_string()
    }

    fn prepare(&self, x: &Operand, y: &Operand) -> Result<Pair, DistanceError> {
        Pair::numeric(x, y)
    }

    fn measure(&self, pair: &Pair) -> Result<f64, DistanceError> {
        let (x, y) = pair.vectors()?;
        Ok(lp_norms::manhattan(x, y))
    }
}

/// L∞-norm.
///
/// Unlike the other vector metrics, this one rejects empty vectors during
/// validation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Chebyshev;

impl Metric for Chebyshev {
    fn name(&self) -> String {
        "chebyshev".to_string()
    }

    fn prepare(&self, x: &Operand, y: &Operand) -> Result<Pair, DistanceError> {
        let pair = Pair::numeric(x, y)?;
        if pair.is_empty() {
            Err(DistanceError::EmptyInput)
        } else {
            Ok(pair)
        }
    }

    fn measure(&self, pair: &Pair) -> Result<f64, DistanceError> {
        let (x, y) = pair.vectors()?;
        lp_norms::chebyshev(x, y).ok_or(DistanceError::EmptyInput)
    }
}
