//! # Floating point conversions
//!
//! Every finite binary float is a fraction with a power of two as its denominator. Going in, that
//! fraction is found by doubling until the value is integral, which is exact. Going out, the
//! quotient is rounded once to the precision the result has at its magnitude.
use std::cmp::Ordering;
use std::fmt::Display;

use log::{debug, trace};
use num_bigint::BigUint;
use num_integer::Integer as _;
use num_traits::{Float, FromPrimitive, Signed, ToPrimitive, Zero};

use crate::Integer;
use crate::error::{Error, Result};

/// Floats that can be split into an integer and a power of two.
pub(crate) trait Decompose: Float + Display {
    /// Number of doublings after which every finite value is integral.
    ///
    /// The smallest positive subnormal is `2^-MAX_DOUBLINGS`.
    const MAX_DOUBLINGS: u32;
}

impl Decompose for f32 {
    const MAX_DOUBLINGS: u32 = 149;
}

impl Decompose for f64 {
    const MAX_DOUBLINGS: u32 = 1074;
}

/// Write a finite float as `numerator / 2^doublings`.
///
/// The result is not necessarily reduced.
///
/// # Errors
///
/// `Error::InvalidArgument` if the value is NaN or infinite.
pub(crate) fn decompose<F: Decompose>(value: F) -> Result<(Integer, u32)> {
    if !value.is_finite() {
        debug!("Rejecting non-finite float {}", value);
        return Err(Error::not_finite(value));
    }

    let mut scaled = value;
    let mut doublings = 0;
    // Multiplication by two is exact and can't overflow before the value is integral
    while scaled.fract() != F::zero() && doublings < F::MAX_DOUBLINGS {
        scaled = scaled + scaled;
        doublings += 1;
    }
    debug_assert!(scaled.fract() == F::zero());

    let numerator = scaled.to_f64()
        .and_then(Integer::from_f64)
        .ok_or_else(|| Error::not_finite(value))?;
    trace!("Decomposed float {} as {} / 2^{}", value, numerator, doublings);

    Ok((numerator, doublings))
}

/// Closest `f64` to `numerator / denominator`.
///
/// The denominator should be positive.
pub(crate) fn to_f64(numerator: &Integer, denominator: &Integer) -> f64 {
    debug_assert!(denominator.is_positive());

    if numerator.is_zero() {
        return 0_f64;
    }

    if let (Some(numerator), Some(denominator)) = (exact_f64(numerator), exact_f64(denominator)) {
        // A single IEEE division is correctly rounded
        return numerator / denominator;
    }

    let magnitude = divide_rounded(numerator.magnitude(), denominator.magnitude());
    if numerator.is_negative() {
        -magnitude
    } else {
        magnitude
    }
}

/// The `f64` with the same value, if there is one that can be found without rounding.
fn exact_f64(value: &Integer) -> Option<f64> {
    if value.bits() <= u64::from(f64::MANTISSA_DIGITS) {
        value.to_f64()
    } else {
        None
    }
}

/// Correctly rounded quotient of two positive integers.
fn divide_rounded(numerator: &BigUint, denominator: &BigUint) -> f64 {
    // 2^exponent <= numerator / denominator < 2^(exponent + 1)
    let mut exponent = numerator.bits() as i64 - denominator.bits() as i64;
    if compare_scaled(numerator, denominator, exponent) == Ordering::Less {
        exponent -= 1;
    }
    if exponent >= i64::from(f64::MAX_EXP) {
        return f64::INFINITY;
    }

    // Value of the least significant bit the result can hold, smaller for normal values
    let mantissa_digits = i64::from(f64::MANTISSA_DIGITS);
    let unit = (exponent - (mantissa_digits - 1))
        .max(i64::from(f64::MIN_EXP) - mantissa_digits);

    let (scaled_numerator, scaled_denominator) = if unit < 0 {
        (numerator << (-unit) as u64, denominator.clone())
    } else {
        (numerator.clone(), denominator << unit as u64)
    };
    let (mut quotient, remainder) = scaled_numerator.div_rem(&scaled_denominator);
    let round_up = match (remainder << 1_u32).cmp(&scaled_denominator) {
        Ordering::Less => false,
        Ordering::Equal => quotient.is_odd(),
        Ordering::Greater => true,
    };
    if round_up {
        quotient += 1_u32;
    }

    // At most 2^53, so exactly representable
    let mantissa = quotient.to_f64().unwrap_or(f64::INFINITY);
    scale_by_power_of_two(mantissa, unit)
}

/// Compare `numerator` with `denominator * 2^exponent`.
fn compare_scaled(numerator: &BigUint, denominator: &BigUint, exponent: i64) -> Ordering {
    if exponent < 0 {
        (numerator << (-exponent) as u64).cmp(denominator)
    } else {
        numerator.cmp(&(denominator << exponent as u64))
    }
}

/// Compute `value * 2^exponent`, exact whenever the result is representable.
fn scale_by_power_of_two(mut value: f64, mut exponent: i64) -> f64 {
    const STEP: i64 = 1000;

    while exponent > STEP {
        value *= power_of_two(STEP);
        exponent -= STEP;
    }
    while exponent < -STEP {
        value *= power_of_two(-STEP);
        exponent += STEP;
    }

    value * power_of_two(exponent)
}

/// A normal `f64` power of two.
fn power_of_two(exponent: i64) -> f64 {
    debug_assert!((-1022..=1023).contains(&exponent));

    f64::from_bits(((exponent + 1023) as u64) << 52)
}
