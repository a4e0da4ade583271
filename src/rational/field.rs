//! # Field operations
//!
//! Addition, subtraction, multiplication and division between rationals. Each operation works on
//! canonical operands `a/b` and `c/d` and normalizes its result. The operators are implemented for
//! every combination of owned values and references.
//!
//! Division by zero has no result. The `checked_*` methods report it as an error, the `Div` and
//! `DivAssign` operators panic, like they do for integers.
use num_traits::Zero;

use crate::error::{Error, Result};
use crate::rational::Rational;
use crate::traits::IntoRational;

impl Rational {
    fn plus(&self, rhs: &Self) -> Self {
        if self.denominator == rhs.denominator {
            return Self::reduced(&self.numerator + &rhs.numerator, self.denominator.clone());
        }

        Self::reduced(
            &self.numerator * &rhs.denominator + &rhs.numerator * &self.denominator,
            &self.denominator * &rhs.denominator,
        )
    }

    fn minus(&self, rhs: &Self) -> Self {
        if self.denominator == rhs.denominator {
            return Self::reduced(&self.numerator - &rhs.numerator, self.denominator.clone());
        }

        Self::reduced(
            &self.numerator * &rhs.denominator - &rhs.numerator * &self.denominator,
            &self.denominator * &rhs.denominator,
        )
    }

    fn times(&self, rhs: &Self) -> Self {
        Self::reduced(
            &self.numerator * &rhs.numerator,
            &self.denominator * &rhs.denominator,
        )
    }

    fn divided_by(&self, rhs: &Self) -> Result<Self> {
        if rhs.numerator.is_zero() {
            return Err(Error::division_by_zero());
        }

        // The sign of the new denominator is fixed by normalization
        Ok(Self::reduced(
            &self.numerator * &rhs.denominator,
            &self.denominator * &rhs.numerator,
        ))
    }

    /// Add anything that can be converted to a rational.
    ///
    /// # Errors
    ///
    /// `Error::InvalidArgument` if `rhs` can't be converted.
    pub fn checked_add<'a>(&self, rhs: impl IntoRational<'a>) -> Result<Self> {
        Ok(self.plus(&*rhs.into_rational()?))
    }

    /// Subtract anything that can be converted to a rational.
    ///
    /// # Errors
    ///
    /// `Error::InvalidArgument` if `rhs` can't be converted.
    pub fn checked_sub<'a>(&self, rhs: impl IntoRational<'a>) -> Result<Self> {
        Ok(self.minus(&*rhs.into_rational()?))
    }

    /// Multiply with anything that can be converted to a rational.
    ///
    /// # Errors
    ///
    /// `Error::InvalidArgument` if `rhs` can't be converted.
    pub fn checked_mul<'a>(&self, rhs: impl IntoRational<'a>) -> Result<Self> {
        Ok(self.times(&*rhs.into_rational()?))
    }

    /// Divide by anything that can be converted to a rational.
    ///
    /// The divisor is converted before it is checked for zero, so `0` and `0.0` are treated the
    /// same.
    ///
    /// # Errors
    ///
    /// * `Error::InvalidArgument` if `rhs` can't be converted.
    /// * `Error::Domain` if `rhs` is zero.
    pub fn checked_div<'a>(&self, rhs: impl IntoRational<'a>) -> Result<Self> {
        self.divided_by(&*rhs.into_rational()?)
    }

    /// In place version of [`Rational::checked_add`]. On error, `self` is unchanged.
    ///
    /// # Errors
    ///
    /// See [`Rational::checked_add`].
    pub fn checked_add_assign<'a>(&mut self, rhs: impl IntoRational<'a>) -> Result<()> {
        *self = self.checked_add(rhs)?;
        Ok(())
    }

    /// In place version of [`Rational::checked_sub`]. On error, `self` is unchanged.
    ///
    /// # Errors
    ///
    /// See [`Rational::checked_sub`].
    pub fn checked_sub_assign<'a>(&mut self, rhs: impl IntoRational<'a>) -> Result<()> {
        *self = self.checked_sub(rhs)?;
        Ok(())
    }

    /// In place version of [`Rational::checked_mul`]. On error, `self` is unchanged.
    ///
    /// # Errors
    ///
    /// See [`Rational::checked_mul`].
    pub fn checked_mul_assign<'a>(&mut self, rhs: impl IntoRational<'a>) -> Result<()> {
        *self = self.checked_mul(rhs)?;
        Ok(())
    }

    /// In place version of [`Rational::checked_div`]. On error, `self` is unchanged.
    ///
    /// # Errors
    ///
    /// See [`Rational::checked_div`].
    pub fn checked_div_assign<'a>(&mut self, rhs: impl IntoRational<'a>) -> Result<()> {
        *self = self.checked_div(rhs)?;
        Ok(())
    }
}

/// Unwrap the result of an operator that has no way to return an error.
pub(super) fn or_panic<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(error) => panic!("{}", error),
    }
}

/// Implement an operator for all combinations of owned values and references, given the version
/// on two references.
macro_rules! forward_binary {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $implementation:expr) => {
        impl $trait<&Rational> for &Rational {
            type Output = Rational;

            fn $method(self, rhs: &Rational) -> Self::Output {
                $implementation(self, rhs)
            }
        }

        impl $trait<Rational> for &Rational {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Self::Output {
                $implementation(self, &rhs)
            }
        }

        impl $trait<&Rational> for Rational {
            type Output = Rational;

            fn $method(self, rhs: &Rational) -> Self::Output {
                $implementation(&self, rhs)
            }
        }

        impl $trait<Rational> for Rational {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Self::Output {
                $implementation(&self, &rhs)
            }
        }

        impl $assign_trait<&Rational> for Rational {
            fn $assign_method(&mut self, rhs: &Rational) {
                *self = $implementation(self, rhs);
            }
        }

        impl $assign_trait<Rational> for Rational {
            fn $assign_method(&mut self, rhs: Rational) {
                *self = $implementation(self, &rhs);
            }
        }
    }
}

mod add {
    use std::iter::Sum;
    use std::ops::{Add, AddAssign};

    use num_traits::Zero;

    use crate::rational::Rational;

    forward_binary!(Add, add, AddAssign, add_assign, Rational::plus);

    impl Sum for Rational {
        fn sum<I: Iterator<Item=Self>>(iter: I) -> Self {
            iter.fold(Self::zero(), |total, item| total + item)
        }
    }

    impl<'r> Sum<&'r Rational> for Rational {
        fn sum<I: Iterator<Item=&'r Rational>>(iter: I) -> Self {
            iter.fold(Self::zero(), |total, item| total + item)
        }
    }
}

mod sub {
    use std::ops::{Sub, SubAssign};

    use crate::rational::Rational;

    forward_binary!(Sub, sub, SubAssign, sub_assign, Rational::minus);
}

mod mul {
    use std::iter::Product;
    use std::ops::{Mul, MulAssign};

    use num_traits::One;

    use crate::rational::Rational;

    forward_binary!(Mul, mul, MulAssign, mul_assign, Rational::times);

    impl Product for Rational {
        fn product<I: Iterator<Item=Self>>(iter: I) -> Self {
            iter.fold(Self::one(), |total, item| total * item)
        }
    }

    impl<'r> Product<&'r Rational> for Rational {
        fn product<I: Iterator<Item=&'r Rational>>(iter: I) -> Self {
            iter.fold(Self::one(), |total, item| total * item)
        }
    }
}

mod div {
    use std::ops::{Div, DivAssign};

    use crate::rational::Rational;
    use crate::rational::field::or_panic;

    /// # Panics
    ///
    /// When `rhs` is zero.
    fn divide(lhs: &Rational, rhs: &Rational) -> Rational {
        or_panic(lhs.divided_by(rhs))
    }

    forward_binary!(Div, div, DivAssign, div_assign, divide);
}

mod neg {
    use std::ops::Neg;

    use crate::rational::Rational;

    impl Neg for Rational {
        type Output = Self;

        fn neg(self) -> Self::Output {
            Self { numerator: -self.numerator, denominator: self.denominator, }
        }
    }

    impl Neg for &Rational {
        type Output = Rational;

        fn neg(self) -> Self::Output {
            Rational { numerator: -&self.numerator, denominator: self.denominator.clone(), }
        }
    }
}
