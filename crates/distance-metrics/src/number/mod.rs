//! The `Element` trait is used to represent values that may denote real
//! numbers.
//!
//! We provide implementations for the following types:
//!
//! * All primitive unsigned integers: `u8`, `u16`, `u32`, `u64`, `u128`, `usize`.
//! * All primitive signed integers: `i8`, `i16`, `i32`, `i64`, `i128`, `isize`.
//! * All primitive floating point numbers: `f32`, `f64`.
//! * Text: `str` and `String`, which denote a number when they parse as one.
//! * [`Scalar`], for vectors that mix numbers and text.

mod _element;
mod _scalar;

pub use _element::Element;
pub use _scalar::Scalar;
