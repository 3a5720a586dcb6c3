//! The Minkowski metric, parameterized by its order.

use serde::{Deserialize, Serialize};

use crate::{vectors::lp_norms, DistanceError, Operand, Pair};

use super::Metric;

/// General Lp-norm of a fixed order `p`.
///
/// The order must be positive. Orders in `(0, 1)` are computed by the
/// general formula, though they do not satisfy the triangle inequality.
/// Orders `1` and `2` are computed as the Manhattan and Euclidean
/// distances, and an infinite order as the Chebyshev distance. Every other
/// order uses the general formula
///
/// `D = (SUM(|x_i - y_i|^p))^(1/p)`
///
/// # Examples
///
/// ```
/// use distance_metrics::{DistanceError, Metric, Minkowski, Operand};
///
/// let metric = Minkowski::new(3.0)?;
/// let x = Operand::from([0, 5, 6, 9]);
/// let y = Operand::from([3, 4, 2, 1]);
///
/// let distance = metric.compute(&x, &y)?;
/// assert!((distance - 604.0_f64.cbrt()).abs() <= 1e-12);
///
/// assert!(Minkowski::new(0.0).is_err());
/// assert!(Minkowski::new(-1.0).is_err());
/// # Ok::<(), DistanceError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMinkowski")]
pub struct Minkowski {
    /// The order `p` of the norm.
    order: f64,
}

/// The unchecked form of `Minkowski` read by deserializers.
#[derive(Deserialize)]
struct RawMinkowski {
    /// The order `p` of the norm.
    order: f64,
}

impl Minkowski {
    /// Creates a Minkowski metric of the given order.
    ///
    /// # Errors
    ///
    /// * If `order` is not positive, including `NaN`.
    pub fn new(order: f64) -> Result<Self, DistanceError> {
        if order > 0.0 {
            Ok(Self { order })
        } else {
            Err(DistanceError::InvalidOrder(order))
        }
    }

    /// The order `p` of the norm.
    #[must_use]
    pub const fn order(&self) -> f64 {
        self.order
    }

    /// Computes the distance between two validated vectors of reals.
    #[allow(clippy::float_cmp)]
    pub(crate) fn compute_reals(&self, x: &[f64], y: &[f64]) -> Result<f64, DistanceError> {
        if self.order == 1.0 {
            Ok(lp_norms::manhattan(x, y))
        } else if self.order == 2.0 {
            Ok(lp_norms::euclidean(x, y))
        } else if self.order == f64::INFINITY {
            lp_norms::chebyshev(x, y).ok_or(DistanceError::EmptyInput)
        } else {
            Ok(lp_norms::minkowski(x, y, self.order))
        }
    }
}

impl TryFrom<f64> for Minkowski {
    type Error = DistanceError;

    fn try_from(order: f64) -> Result<Self, Self::Error> {
        Self::new(order)
    }
}

impl TryFrom<RawMinkowski> for Minkowski {
    type Error = DistanceError;

    fn try_from(raw: RawMinkowski) -> Result<Self, Self::Error> {
        Self::new(raw.order)
    }
}

impl Metric for Minkowski {
    fn name(&self) -> String {
        format!("minkowski:{}", self.order)
    }

    fn prepare(&self, x: &Operand, y: &Operand) -> Result<Pair, DistanceError> {
        let pair = Pair::numeric(x, y)?;
        if self.order.is_infinite() && pair.is_empty() {
            Err(DistanceError::EmptyInput)
        } else {
            Ok(pair)
        }
    }

    fn measure(&self, pair: &Pair) -> Result<f64, DistanceError> {
        let (x, y) = pair.vectors()?;
        self.compute_reals(x, y)
    }
}
