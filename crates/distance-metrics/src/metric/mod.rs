//! Provides the `Metric` trait and the `Algorithm` enum over the distance
//! functions of this crate.

mod hamming;
mod lp;
mod minkowski;

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{DistanceError, Operand, Pair};

pub use hamming::Hamming;
pub use lp::{Chebyshev, Euclidean, Manhattan};
pub use minkowski::Minkowski;

/// A `Metric` checks that two `Operand`s are comparable and deterministically
/// produces a non-negative distance between them.
///
/// Implementors provide `prepare`, which validates the operands and converts
/// them into a [`Pair`], and `measure`, which computes the distance of a
/// prepared `Pair`. A `Pair` can be measured any number of times, and by
/// other metrics, without being validated again.
pub trait Metric: core::fmt::Debug + Send + Sync {
    /// Returns the name of the `Metric` as a String.
    fn name(&self) -> String;

    /// Validates the operands and converts them for `measure`.
    ///
    /// # Errors
    ///
    /// * If the operands are of the wrong kind, hold non-numeric elements,
    ///   differ in length, or are empty where the metric is undefined.
    fn prepare(&self, x: &Operand, y: &Operand) -> Result<Pair, DistanceError>;

    /// Returns the distance between the operands of a prepared `Pair`.
    ///
    /// # Errors
    ///
    /// * If the pair was prepared by a metric over a different kind of
    ///   operand, or is empty where this metric is undefined.
    fn measure(&self, pair: &Pair) -> Result<f64, DistanceError>;

    /// Checks that the operands can be compared under this metric.
    ///
    /// # Errors
    ///
    /// * If `prepare` fails.
    fn validate(&self, x: &Operand, y: &Operand) -> Result<(), DistanceError> {
        self.prepare(x, y).map(|_| ())
    }

    /// Validates the operands and returns their distance.
    ///
    /// # Errors
    ///
    /// * If the operands cannot be compared under this metric.
    fn compute(&self, x: &Operand, y: &Operand) -> Result<f64, DistanceError> {
        self.measure(&self.prepare(x, y)?)
    }
}

/// The distance algorithms provided by this crate.
///
/// An `Algorithm` can be read from configuration, either from its name (see
/// the `FromStr` implementation) or with `serde`:
///
/// ```
/// use distance_metrics::{Algorithm, DistanceError, Minkowski};
///
/// let algorithm: Algorithm = "minkowski:3".parse()?;
/// assert_eq!(algorithm, Algorithm::Minkowski(Minkowski::new(3.0)?));
/// assert_eq!(algorithm.to_string(), "minkowski:3");
///
/// assert_eq!("manhattan".parse::<Algorithm>()?, Algorithm::Manhattan);
/// assert!("cosine".parse::<Algorithm>().is_err());
/// # Ok::<(), DistanceError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "algorithm", rename_all = "lowercase")]
pub enum Algorithm {
    /// L2-norm.
    Euclidean,
    /// L1-norm.
    Manhattan,
    /// L∞-norm.
    Chebyshev,
    /// Lp-norm of a given order.
    Minkowski(Minkowski),
    /// Positional mismatches between strings.
    Hamming,
}

impl Algorithm {
    /// Returns the `Metric` this algorithm dispatches to.
    fn metric(&self) -> &dyn Metric {
        match self {
            Self::Euclidean => &Euclidean,
            Self::Manhattan => &Manhattan,
            Self::Chebyshev => &Chebyshev,
            Self::Minkowski(m) => m,
            Self::Hamming => &Hamming,
        }
    }

    /// Creates a Minkowski algorithm of the given order.
    ///
    /// # Errors
    ///
    /// * If `order` is not positive.
    pub fn minkowski(order: f64) -> Result<Self, DistanceError> {
        Minkowski::new(order).map(Self::Minkowski)
    }
}

impl Metric for Algorithm {
    fn name(&self) -> String {
        self.metric().name()
    }

    fn prepare(&self, x: &Operand, y: &Operand) -> Result<Pair, DistanceError> {
        self.metric().prepare(x, y)
    }

    fn measure(&self, pair: &Pair) -> Result<f64, DistanceError> {
        self.metric().measure(pair)
    }
}

impl From<Minkowski> for Algorithm {
    fn from(m: Minkowski) -> Self {
        Self::Minkowski(m)
    }
}

impl core::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Parses an `Algorithm` from its name.
///
/// The name can be one of:
///     - "euclidean": L2-norm.
///     - "manhattan": L1-norm.
///     - "chebyshev": L∞-norm.
///     - "hamming": Hamming distance between strings.
///     - "minkowski:<p>": Lp-norm of order `p`, e.g. "minkowski:3".
///
/// Names are matched case-insensitively.
impl FromStr for Algorithm {
    type Err = DistanceError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let lowered = name.trim().to_lowercase();
        match lowered.as_str() {
            "euclidean" => Ok(Self::Euclidean),
            "manhattan" => Ok(Self::Manhattan),
            "chebyshev" => Ok(Self::Chebyshev),
            "hamming" => Ok(Self::Hamming),
            _ => match lowered.split_once(':') {
                Some(("minkowski", order)) => {
                    let order = order
                        .trim()
                        .parse::<f64>()
                        .map_err(|_| DistanceError::UnknownAlgorithm(name.to_string()))?;
                    Self::minkowski(order)
                }
                _ => Err(DistanceError::UnknownAlgorithm(name.to_string())),
            },
        }
    }
}
