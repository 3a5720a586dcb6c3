//! One side of an operand pair.

use serde::{Deserialize, Serialize};

use crate::{
    validation::{numeric_pair, validate_string_pair},
    DistanceError, Scalar,
};

/// An operand for a distance computation: either a numeric vector or a
/// string.
///
/// Vector metrics accept only `Vector` operands and the Hamming distance
/// accepts only `Text` operands. Whether the elements of a `Vector` are
/// actually numeric is checked during validation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Operand {
    /// A vector of elements.
    Vector(Vec<Scalar>),
    /// A string of characters.
    Text(String),
}

impl Operand {
    /// The name of this kind of operand, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Vector(_) => "vector",
            Self::Text(_) => "text",
        }
    }

    /// The number of elements, or of characters for text.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Vector(v) => v.len(),
            Self::Text(s) => s.chars().count(),
        }
    }

    /// Whether the operand holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Vector(v) => v.is_empty(),
            Self::Text(s) => s.is_empty(),
        }
    }

    /// Returns the elements of a `Vector` operand.
    ///
    /// # Errors
    ///
    /// * If the operand is `Text`.
    pub fn as_vector(&self) -> Result<&[Scalar], DistanceError> {
        match self {
            Self::Vector(v) => Ok(v),
            Self::Text(_) => Err(DistanceError::InvalidType {
                expected: "vector",
                found: self.kind(),
            }),
        }
    }

    /// Returns the string of a `Text` operand.
    ///
    /// # Errors
    ///
    /// * If the operand is a `Vector`.
    pub fn as_text(&self) -> Result<&str, DistanceError> {
        match self {
            Self::Text(s) => Ok(s),
            Self::Vector(_) => Err(DistanceError::InvalidType {
                expected: "text",
                found: self.kind(),
            }),
        }
    }
}

impl From<&str> for Operand {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Operand {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl<T: Into<Scalar>> From<Vec<T>> for Operand {
    fn from(v: Vec<T>) -> Self {
        Self::Vector(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<Scalar>> From<&[T]> for Operand {
    fn from(v: &[T]) -> Self {
        Self::Vector(v.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<Scalar>, const N: usize> From<[T; N]> for Operand {
    fn from(v: [T; N]) -> Self {
        Self::Vector(v.into_iter().map(Into::into).collect())
    }
}

/// A pair of operands that passed validation, converted once so that
/// distances can be computed from it any number of times.
///
/// A `Pair` can only be built through [`Pair::numeric`] or [`Pair::text`],
/// so both sides always have the same length and vectors hold only finite
/// reals.
#[derive(Clone, Debug, PartialEq)]
pub struct Pair(Sides);

/// The converted operands of a `Pair`.
#[derive(Clone, Debug, PartialEq)]
enum Sides {
    /// Two vectors of reals.
    Vectors(Vec<f64>, Vec<f64>),
    /// Two strings.
    Texts(String, String),
}

impl Pair {
    /// Validates two vector operands and converts their elements to reals.
    ///
    /// # Errors
    ///
    /// * If either operand is `Text`.
    /// * If either vector holds a non-numeric element.
    /// * If the vectors differ in length.
    pub fn numeric(x: &Operand, y: &Operand) -> Result<Self, DistanceError> {
        let (x, y) = numeric_pair(x.as_vector()?, y.as_vector()?)?;
        Ok(Self(Sides::Vectors(x, y)))
    }

    /// Validates two text operands.
    ///
    /// # Errors
    ///
    /// * If either operand is a `Vector`.
    /// * If the strings differ in length.
    pub fn text(x: &Operand, y: &Operand) -> Result<Self, DistanceError> {
        let (x, y) = (x.as_text()?, y.as_text()?);
        validate_string_pair(x, y)?;
        Ok(Self(Sides::Texts(x.to_string(), y.to_string())))
    }

    /// The name of the kind of operands held, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self.0 {
            Sides::Vectors(..) => "vector",
            Sides::Texts(..) => "text",
        }
    }

    /// Whether both sides are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match &self.0 {
            Sides::Vectors(x, _) => x.is_empty(),
            Sides::Texts(x, _) => x.is_empty(),
        }
    }

    /// Returns the two vectors of reals.
    ///
    /// # Errors
    ///
    /// * If the pair holds text.
    pub fn vectors(&self) -> Result<(&[f64], &[f64]), DistanceError> {
        match &self.0 {
            Sides::Vectors(x, y) => Ok((x, y)),
            Sides::Texts(..) => Err(DistanceError::InvalidType {
                expected: "vector",
                found: self.kind(),
            }),
        }
    }

    /// Returns the two strings.
    ///
    /// # Errors
    ///
    /// * If the pair holds vectors.
    pub fn texts(&self) -> Result<(&str, &str), DistanceError> {
        match &self.0 {
            Sides::Texts(x, y) => Ok((x, y)),
            Sides::Vectors(..) => Err(DistanceError::InvalidType {
                expected: "text",
                found: self.kind(),
            }),
        }
    }
}
