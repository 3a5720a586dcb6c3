//! A reusable session binding a selected algorithm to a pair of operands.

use crate::{Algorithm, DistanceError, Metric, Operand, Pair};

/// Computes distances with a selected `Metric` over a stored pair of operands.
///
/// The metric and the data can be replaced independently and in any order,
/// e.g. to compute the same data under several algorithms or several data
/// pairs under one algorithm.
///
/// # Examples
///
/// ```
/// use distance_metrics::{Algorithm, Distance, DistanceError};
///
/// let mut session = Distance::new(Algorithm::Euclidean);
/// let distance = session.set_data([1, 2], [3, 4])?.distance()?;
/// assert!((distance - 8.0_f64.sqrt()).abs() <= f64::EPSILON);
///
/// let distance = session.set_algorithm(Algorithm::Manhattan).distance()?;
/// assert!((distance - 4.0).abs() <= f64::EPSILON);
///
/// let distance = session
///     .set_algorithm(Algorithm::Hamming)
///     .set_data("electric", "tectonic")?
///     .distance()?;
/// assert!((distance - 6.0).abs() <= f64::EPSILON);
/// # Ok::<(), DistanceError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Distance<M: Metric = Algorithm> {
    /// The selected metric.
    metric: M,
    /// The operands, once a valid pair has been set.
    data: Option<Data>,
}

/// A stored pair of operands and their converted form.
#[derive(Clone, Debug)]
struct Data {
    /// The first operand, as given.
    x: Operand,
    /// The second operand, as given.
    y: Operand,
    /// The operands after validation and conversion.
    pair: Pair,
}

impl<M: Metric> Distance<M> {
    /// Creates a session with the given metric and no data.
    pub const fn new(metric: M) -> Self {
        Self { metric, data: None }
    }

    /// The selected metric.
    pub const fn algorithm(&self) -> &M {
        &self.metric
    }

    /// The stored operands, if any.
    pub fn data(&self) -> Option<(&Operand, &Operand)> {
        self.data.as_ref().map(|data| (&data.x, &data.y))
    }

    /// Replaces the selected metric. The stored data is kept and is not
    /// validated against the new metric until a distance is computed, at
    /// which point its already converted form is measured.
    pub fn set_algorithm(&mut self, metric: M) -> &mut Self {
        self.metric = metric;
        self
    }

    /// Validates a pair of operands with the selected metric and stores them.
    ///
    /// # Errors
    ///
    /// * If the operands cannot be compared under the selected metric. The
    ///   previously stored data, if any, is left unchanged.
    pub fn set_data(&mut self, x: impl Into<Operand>, y: impl Into<Operand>) -> Result<&mut Self, DistanceError> {
        self.set_optional_data(Some(x.into()), Some(y.into()))
    }

    /// Like [`set_data`](Self::set_data), but a missing operand on either side
    /// makes the call a no-op: nothing is validated, the stored data is kept
    /// and no error is returned.
    ///
    /// # Errors
    ///
    /// * If both operands are present and cannot be compared under the
    ///   selected metric. The previously stored data is left unchanged.
    pub fn set_optional_data(&mut self, x: Option<Operand>, y: Option<Operand>) -> Result<&mut Self, DistanceError> {
        if let (Some(x), Some(y)) = (x, y) {
            let pair = self.metric.prepare(&x, &y)?;
            self.data = Some(Data { x, y, pair });
        }
        Ok(self)
    }

    /// Forgets the stored operands.
    pub fn clear_data(&mut self) -> &mut Self {
        self.data = None;
        self
    }

    /// Computes the distance between the stored operands with the selected
    /// metric.
    ///
    /// # Errors
    ///
    /// * `DistanceError::NoData` if no valid pair of operands has been set.
    /// * If the metric was changed after the data was set and the data cannot
    ///   be compared under the new metric.
    pub fn distance(&self) -> Result<f64, DistanceError> {
        let data = self.data.as_ref().ok_or(DistanceError::NoData)?;
        self.metric.measure(&data.pair)
    }
}
