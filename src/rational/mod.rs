//! # Rational numbers
//!
//! A fraction of two arbitrary precision integers. Every value is kept in canonical form: the
//! denominator is positive, numerator and denominator have no common factor and zero is stored as
//! `0/1`. Because that form is unique, equality and hashing can look at the two integers directly.
use num_integer::Integer as _;
use num_traits::{One, Signed, Zero};

use crate::Integer;
use crate::error::{Error, Result};

mod compare;
mod field;
mod float;
mod interactions;
mod macros;

/// An exact rational number.
///
/// Construct one from a numerator and denominator with [`Rational::new`], from an integer with
/// `From` or from a finite float with `TryFrom`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Rational {
    numerator: Integer,
    denominator: Integer,
}

/// Reduce a fraction to canonical form.
///
/// The denominator should not be zero.
fn normalize(mut numerator: Integer, mut denominator: Integer) -> (Integer, Integer) {
    debug_assert!(!denominator.is_zero());

    if denominator.is_negative() {
        numerator = -numerator;
        denominator = -denominator;
    }

    if numerator.is_zero() {
        return (numerator, Integer::one());
    }

    let gcd = numerator.gcd(&denominator);
    if !gcd.is_one() {
        numerator /= &gcd;
        denominator /= &gcd;
    }

    (numerator, denominator)
}

impl Rational {
    /// Create a new instance from a numerator and a denominator.
    ///
    /// The fraction is reduced and the sign moved to the numerator.
    ///
    /// # Errors
    ///
    /// `Error::InvalidArgument` if the denominator is zero, regardless of the numerator.
    pub fn new(numerator: impl Into<Integer>, denominator: impl Into<Integer>) -> Result<Self> {
        let denominator = denominator.into();
        if denominator.is_zero() {
            return Err(Error::zero_denominator());
        }

        Ok(Self::reduced(numerator.into(), denominator))
    }

    /// Normalize a pair of which the denominator is known not to be zero.
    pub(crate) fn reduced(numerator: Integer, denominator: Integer) -> Self {
        let (numerator, denominator) = normalize(numerator, denominator);
        Self { numerator, denominator, }
    }

    /// The numerator, carrying the sign of the value.
    pub fn numerator(&self) -> &Integer {
        &self.numerator
    }

    /// The denominator, always positive.
    pub fn denominator(&self) -> &Integer {
        &self.denominator
    }

    /// Take the value apart into its numerator and denominator.
    pub fn into_parts(self) -> (Integer, Integer) {
        (self.numerator, self.denominator)
    }

    /// Whether the denominator is one.
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    /// Whether the value is strictly larger than zero.
    pub fn is_positive(&self) -> bool {
        self.numerator.is_positive()
    }

    /// Whether the value is strictly smaller than zero.
    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    /// The absolute value.
    pub fn abs(&self) -> Self {
        Self { numerator: self.numerator.abs(), denominator: self.denominator.clone(), }
    }

    /// `-1`, `0` or `1`, depending on the sign of the value.
    pub fn signum(&self) -> Self {
        Self::from(self.numerator.signum())
    }

    /// The multiplicative inverse.
    ///
    /// # Errors
    ///
    /// `Error::Domain` if the value is zero.
    pub fn checked_recip(&self) -> Result<Self> {
        if self.numerator.is_zero() {
            Err(Error::division_by_zero())
        } else if self.numerator.is_negative() {
            // Already coprime, only the sign needs to move
            Ok(Self { numerator: -&self.denominator, denominator: -&self.numerator, })
        } else {
            Ok(Self { numerator: self.denominator.clone(), denominator: self.numerator.clone(), })
        }
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

mod creation {
    use num_traits::{FromPrimitive, One};

    use crate::Integer;
    use crate::error::{Error, Result};
    use crate::rational::Rational;
    use crate::rational::float::{Decompose, decompose};

    impl From<Integer> for Rational {
        fn from(value: Integer) -> Self {
            Self { numerator: value, denominator: Integer::one(), }
        }
    }

    impl From<&Integer> for Rational {
        fn from(value: &Integer) -> Self {
            Self::from(value.clone())
        }
    }

    macro_rules! from_integer {
        ($($primitive:ty),*) => {
            $(
                impl From<$primitive> for Rational {
                    fn from(value: $primitive) -> Self {
                        Self::from(Integer::from(value))
                    }
                }
            )*
        }
    }
    from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

    fn from_float<F: Decompose>(value: F) -> Result<Rational> {
        let (numerator, doublings) = decompose(value)?;
        let denominator = Integer::one() << doublings;

        Ok(Rational::reduced(numerator, denominator))
    }

    impl TryFrom<f64> for Rational {
        type Error = Error;

        /// Exact value of a finite float.
        fn try_from(value: f64) -> Result<Self> {
            from_float(value)
        }
    }

    impl TryFrom<f32> for Rational {
        type Error = Error;

        /// Exact value of a finite float.
        fn try_from(value: f32) -> Result<Self> {
            from_float(value)
        }
    }

    impl FromPrimitive for Rational {
        fn from_i64(n: i64) -> Option<Self> {
            Some(Self::from(n))
        }

        fn from_u64(n: u64) -> Option<Self> {
            Some(Self::from(n))
        }

        fn from_i128(n: i128) -> Option<Self> {
            Some(Self::from(n))
        }

        fn from_u128(n: u128) -> Option<Self> {
            Some(Self::from(n))
        }

        fn from_f32(n: f32) -> Option<Self> {
            Self::try_from(n).ok()
        }

        fn from_f64(n: f64) -> Option<Self> {
            Self::try_from(n).ok()
        }
    }
}

mod conversion {
    use num_traits::ToPrimitive;

    use crate::Integer;
    use crate::rational::Rational;
    use crate::rational::float::to_f64;

    impl Rational {
        /// Closest `f64` to this value.
        ///
        /// Rounds to nearest, ties to even. Values too large for an `f64` become an infinity, values
        /// too close to zero become a (signed) zero. Any rational created from a finite float
        /// converts back to exactly that float.
        pub fn to_f64(&self) -> f64 {
            to_f64(&self.numerator, &self.denominator)
        }

        /// Integer part, rounding towards zero.
        pub fn trunc(&self) -> Integer {
            &self.numerator / &self.denominator
        }
    }

    impl ToPrimitive for Rational {
        fn to_i64(&self) -> Option<i64> {
            self.trunc().to_i64()
        }

        fn to_u64(&self) -> Option<u64> {
            self.trunc().to_u64()
        }

        fn to_i128(&self) -> Option<i128> {
            self.trunc().to_i128()
        }

        fn to_u128(&self) -> Option<u128> {
            self.trunc().to_u128()
        }

        fn to_f64(&self) -> Option<f64> {
            Some(Rational::to_f64(self))
        }
    }
}

mod identities {
    use num_traits::{One, Zero};

    use crate::Integer;
    use crate::rational::Rational;

    impl Zero for Rational {
        fn zero() -> Self {
            Self { numerator: Integer::zero(), denominator: Integer::one(), }
        }

        fn is_zero(&self) -> bool {
            self.numerator.is_zero()
        }
    }

    impl One for Rational {
        fn one() -> Self {
            Self { numerator: Integer::one(), denominator: Integer::one(), }
        }

        fn is_one(&self) -> bool {
            self.numerator.is_one() && self.denominator.is_one()
        }
    }
}
