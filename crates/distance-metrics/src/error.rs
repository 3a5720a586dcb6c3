//! The error type shared by every distance computation.

/// Reasons a distance could not be computed.
///
/// Every fallible operation in this crate returns this type. Errors are never
/// recovered from internally.
#[derive(Debug, Clone, PartialEq)]
pub enum DistanceError {
    /// A vector element does not denote a finite real number. Carries the
    /// offending element as text.
    NonNumeric(String),
    /// The two operands have different lengths.
    IncompatibleLength(usize, usize),
    /// An operand is of the wrong kind for the selected metric, e.g. a vector
    /// given to the Hamming distance.
    InvalidType {
        /// The kind of operand the metric accepts.
        expected: &'static str,
        /// The kind of operand that was supplied.
        found: &'static str,
    },
    /// The Minkowski order is not positive.
    InvalidOrder(f64),
    /// A distance was requested before any operands were set.
    NoData,
    /// The metric is undefined for empty operands.
    EmptyInput,
    /// An algorithm name could not be recognized.
    UnknownAlgorithm(String),
}

impl std::fmt::Display for DistanceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonNumeric(item) => {
                write!(f, "vectors must contain numeric data, non-numeric item found: {item}")
            }
            Self::IncompatibleLength(n1, n2) => write!(f, "operands must be of equal size: n1={n1}, n2={n2}"),
            Self::InvalidType { expected, found } => write!(f, "expected {expected} operands, found {found}"),
            Self::InvalidOrder(order) => write!(f, "invalid Minkowski order: {order}"),
            Self::NoData => write!(f, "no data has been set"),
            Self::EmptyInput => write!(f, "distance is undefined for empty operands"),
            Self::UnknownAlgorithm(name) => write!(f, "{name} is not defined as a distance algorithm"),
        }
    }
}

impl std::error::Error for DistanceError {}
