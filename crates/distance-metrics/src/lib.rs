#![deny(clippy::correctness)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::pedantic,
    clippy::nursery,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::cast_lossless
)]
#![doc = include_str!("../README.md")]

mod distance;
mod error;
pub mod metric;
pub mod number;
mod operand;
pub mod strings;
pub mod validation;
pub mod vectors;

pub use distance::Distance;
pub use error::DistanceError;
pub use metric::{Algorithm, Chebyshev, Euclidean, Hamming, Manhattan, Metric, Minkowski};
pub use number::{Element, Scalar};
pub use operand::{Operand, Pair};
pub use strings::hamming;
pub use vectors::{chebyshev, euclidean, manhattan, minkowski};

/// The version of the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
