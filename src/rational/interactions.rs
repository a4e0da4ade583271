//! # Interactions with other number types
//!
//! Operators and comparisons between a `Rational` and a primitive number or a big integer, in both
//! operand orders. The other operand is first converted into a `Rational`, after which the
//! operation is the one between two rationals.
//!
//! Floats that are not finite can't be converted. Operators panic on them; comparisons treat them
//! as incomparable, so `==` is `false` and `partial_cmp` is `None`. Use the `checked_*` methods
//! and [`Rational::compare`] to get an error instead.
use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use crate::Integer;
use crate::rational::Rational;
use crate::rational::field::or_panic;
use crate::traits::IntoRational;

/// Convert the operand of an operator.
///
/// # Panics
///
/// When the operand is a float that is not finite.
fn operand<'a>(value: impl IntoRational<'a>) -> Rational {
    or_panic(value.into_rational()).into_owned()
}

macro_rules! define_operator {
    ($other:ty, $trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident) => {
        impl $trait<$other> for Rational {
            type Output = Rational;

            fn $method(self, rhs: $other) -> Self::Output {
                $trait::$method(self, operand(rhs))
            }
        }

        impl $trait<$other> for &Rational {
            type Output = Rational;

            fn $method(self, rhs: $other) -> Self::Output {
                $trait::$method(self, operand(rhs))
            }
        }

        impl $trait<Rational> for $other {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Self::Output {
                $trait::$method(operand(self), rhs)
            }
        }

        impl $trait<&Rational> for $other {
            type Output = Rational;

            fn $method(self, rhs: &Rational) -> Self::Output {
                $trait::$method(operand(self), rhs)
            }
        }

        impl $assign_trait<$other> for Rational {
            fn $assign_method(&mut self, rhs: $other) {
                $assign_trait::$assign_method(self, operand(rhs))
            }
        }
    }
}

macro_rules! define_field {
    ($other:ty) => {
        define_operator!($other, Add, add, AddAssign, add_assign);
        define_operator!($other, Sub, sub, SubAssign, sub_assign);
        define_operator!($other, Mul, mul, MulAssign, mul_assign);
        define_operator!($other, Div, div, DivAssign, div_assign);
    }
}

macro_rules! define_compare {
    ($other:ty) => {
        impl PartialEq<$other> for Rational {
            fn eq(&self, other: &$other) -> bool {
                match (*other).into_rational() {
                    Ok(other) => self == &*other,
                    Err(_) => false,
                }
            }
        }

        impl PartialEq<Rational> for $other {
            fn eq(&self, other: &Rational) -> bool {
                other == self
            }
        }

        impl PartialOrd<$other> for Rational {
            fn partial_cmp(&self, other: &$other) -> Option<Ordering> {
                (*other).into_rational()
                    .ok()
                    .map(|other| self.cmp(&other))
            }
        }

        impl PartialOrd<Rational> for $other {
            fn partial_cmp(&self, other: &Rational) -> Option<Ordering> {
                other.partial_cmp(self).map(Ordering::reverse)
            }
        }
    }
}

macro_rules! define_interactions {
    ($($primitive:ty),*) => {
        $(
            define_field!($primitive);
            define_compare!($primitive);
        )*
    }
}

define_interactions!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

define_field!(Integer);
define_field!(&Integer);

impl PartialEq<Integer> for Rational {
    fn eq(&self, other: &Integer) -> bool {
        self.is_integer() && &self.numerator == other
    }
}

impl PartialEq<Rational> for Integer {
    fn eq(&self, other: &Rational) -> bool {
        other == self
    }
}

impl PartialOrd<Integer> for Rational {
    fn partial_cmp(&self, other: &Integer) -> Option<Ordering> {
        // The denominator is positive
        Some(self.numerator.cmp(&(other * &self.denominator)))
    }
}

impl PartialOrd<Rational> for Integer {
    fn partial_cmp(&self, other: &Rational) -> Option<Ordering> {
        other.partial_cmp(self).map(Ordering::reverse)
    }
}
