//! Randomized properties, checked against `num_rational` as an independent implementation.
//!
//! The generator is seeded, so failures reproduce.
use num_bigint::Sign;
use num_integer::Integer as _;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use exact_rational::{Integer, Rational};

mod test;

pub const SEED: u64 = 0x7261_7469_6f6e_616c;
pub const EXPERIMENTS: usize = 1_000;

pub fn rng() -> StdRng {
    StdRng::seed_from_u64(SEED)
}

/// A signed integer of up to 192 bits, biased towards small magnitudes.
pub fn random_integer(rng: &mut impl Rng) -> Integer {
    let length = rng.gen_range(1..=24);
    let mut bytes = vec![0_u8; length];
    rng.fill_bytes(&mut bytes);
    let sign = if rng.gen_bool(0.5) { Sign::Minus } else { Sign::Plus };

    Integer::from_bytes_le(sign, &bytes)
}

pub fn random_pair(rng: &mut impl Rng) -> (Integer, Integer) {
    let numerator = random_integer(rng);
    loop {
        let denominator = random_integer(rng);
        if !denominator.is_zero() {
            return (numerator, denominator);
        }
    }
}

pub fn random_rational(rng: &mut impl Rng) -> Rational {
    let (numerator, denominator) = random_pair(rng);
    Rational::new(numerator, denominator).unwrap()
}

/// A finite `f64` with an exponent drawn uniformly, so subnormals and values close to the maximum
/// are as likely as values close to one.
pub fn random_f64(rng: &mut impl Rng) -> f64 {
    let sign = u64::from(rng.gen_bool(0.5)) << 63;
    let exponent = rng.gen_range(0_u64..0x7ff) << 52;
    let mantissa = rng.next_u64() & ((1 << 52) - 1);

    f64::from_bits(sign | exponent | mantissa)
}

pub fn random_f32(rng: &mut impl Rng) -> f32 {
    let sign = u32::from(rng.gen_bool(0.5)) << 31;
    let exponent = rng.gen_range(0_u32..0xff) << 23;
    let mantissa = rng.next_u32() & ((1 << 23) - 1);

    f32::from_bits(sign | exponent | mantissa)
}

pub fn oracle(value: &Rational) -> BigRational {
    BigRational::new(value.numerator().clone(), value.denominator().clone())
}

pub fn matches_oracle(value: &Rational, expected: &BigRational) -> bool {
    value.numerator() == expected.numer() && value.denominator() == expected.denom()
}

/// Positive denominator without a common factor, which also forces `0/1` for zero.
pub fn is_canonical(value: &Rational) -> bool {
    value.denominator().is_positive() && value.numerator().gcd(value.denominator()).is_one()
}
