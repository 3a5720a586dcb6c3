//! A `Scalar` is an element of a dynamically built vector.

use serde::{Deserialize, Serialize};

use super::Element;

/// A vector element that is either a real number or a piece of text.
///
/// Text elements are numeric when they parse as a finite real number, so
/// `[Scalar::from(2), Scalar::from("a")]` holds one numeric and one
/// non-numeric element.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// A real number.
    Real(f64),
    /// A piece of text.
    Symbol(String),
}

impl Element for Scalar {
    fn as_real(&self) -> Option<f64> {
        match self {
            Self::Real(v) => v.as_real(),
            Self::Symbol(s) => s.as_real(),
        }
    }
}

impl core::fmt::Display for Scalar {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Real(v) => write!(f, "{v}"),
            Self::Symbol(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Self::Symbol(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Self::Symbol(s)
    }
}

macro_rules! impl_scalar_from {
    ($($ty:ty),*) => {
        $(
            #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
            impl From<$ty> for Scalar {
                fn from(v: $ty) -> Self {
                    Self::Real(v as f64)
                }
            }
        )*
    }
}

impl_scalar_from!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl From<f32> for Scalar {
    fn from(v: f32) -> Self {
        Self::Real(f64::from(v))
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}
