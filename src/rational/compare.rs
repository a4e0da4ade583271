//! # Ordering
//!
//! Rationals are compared by cross multiplication in integer arithmetic, so the order is exact no
//! matter how large the operands are.
use std::cmp::Ordering;

use crate::error::Result;
use crate::rational::Rational;
use crate::traits::IntoRational;

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.denominator == other.denominator {
            return self.numerator.cmp(&other.numerator);
        }

        // Denominators are positive, so multiplying by them keeps the order
        let lhs = &self.numerator * &other.denominator;
        let rhs = &other.numerator * &self.denominator;
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Rational {
    /// Compare with anything that can be converted to a rational.
    ///
    /// # Errors
    ///
    /// `Error::InvalidArgument` if `other` can't be converted.
    pub fn compare<'a>(&self, other: impl IntoRational<'a>) -> Result<Ordering> {
        Ok(self.cmp(&*other.into_rational()?))
    }
}
