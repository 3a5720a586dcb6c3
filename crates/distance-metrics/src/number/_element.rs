//! An `Element` is one item of a numeric vector.
//!
//! Distances are computed over the real values denoted by `Element`s. An
//! element that does not denote a finite real number is rejected during
//! validation.

use core::fmt::Display;

/// A value which may denote a finite real number.
pub trait Element: Display {
    /// Returns the real number this element denotes, or `None` if it is not
    /// numeric.
    fn as_real(&self) -> Option<f64>;

    /// Whether this element denotes a finite real number.
    fn is_numeric(&self) -> bool {
        self.as_real().is_some()
    }
}

impl<T: Element + ?Sized> Element for &T {
    fn as_real(&self) -> Option<f64> {
        (**self).as_real()
    }
}

impl Element for f32 {
    fn as_real(&self) -> Option<f64> {
        self.is_finite().then(|| f64::from(*self))
    }
}

impl Element for f64 {
    fn as_real(&self) -> Option<f64> {
        self.is_finite().then_some(*self)
    }
}

impl Element for str {
    fn as_real(&self) -> Option<f64> {
        self.trim().parse::<f64>().ok().filter(|v| v.is_finite())
    }
}

impl Element for String {
    fn as_real(&self) -> Option<f64> {
        self.as_str().as_real()
    }
}

macro_rules! impl_element_int {
    ($($ty:ty),*) => {
        $(
            #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
            impl Element for $ty {
                fn as_real(&self) -> Option<f64> {
                    Some(*self as f64)
                }
            }
        )*
    }
}

impl_element_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
