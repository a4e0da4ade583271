//! # Traits
//!
//! Operands of mixed arithmetic and comparison. Plain integers, floats and big integers are never
//! combined with a `Rational` directly; they are first turned into one, after which the same
//! exact rules apply as between two rationals.
use std::borrow::Cow;

use crate::Integer;
use crate::error::Result;
use crate::rational::Rational;

/// Anything that can be converted into a `Rational`.
///
/// Conversion may fail, for example for floats that are not finite. References to rationals are
/// borrowed instead of cloned.
pub trait IntoRational<'a> {
    /// Convert the value.
    ///
    /// # Errors
    ///
    /// `Error::InvalidArgument` when the value has no rational equivalent.
    fn into_rational(self) -> Result<Cow<'a, Rational>>;
}

impl<'a> IntoRational<'a> for Rational {
    fn into_rational(self) -> Result<Cow<'a, Rational>> {
        Ok(Cow::Owned(self))
    }
}

impl<'a> IntoRational<'a> for &'a Rational {
    fn into_rational(self) -> Result<Cow<'a, Rational>> {
        Ok(Cow::Borrowed(self))
    }
}

impl<'a> IntoRational<'a> for Integer {
    fn into_rational(self) -> Result<Cow<'a, Rational>> {
        Ok(Cow::Owned(Rational::from(self)))
    }
}

impl<'a> IntoRational<'a> for &Integer {
    fn into_rational(self) -> Result<Cow<'a, Rational>> {
        Ok(Cow::Owned(Rational::from(self)))
    }
}

macro_rules! exact {
    ($($primitive:ty),*) => {
        $(
            impl<'a> IntoRational<'a> for $primitive {
                fn into_rational(self) -> Result<Cow<'a, Rational>> {
                    Ok(Cow::Owned(Rational::from(self)))
                }
            }
        )*
    }
}
exact!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! floating {
    ($($primitive:ty),*) => {
        $(
            impl<'a> IntoRational<'a> for $primitive {
                fn into_rational(self) -> Result<Cow<'a, Rational>> {
                    Rational::try_from(self).map(Cow::Owned)
                }
            }
        )*
    }
}
floating!(f32, f64);
