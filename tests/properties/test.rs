use std::collections::hash_map::RandomState;
use std::hash::BuildHasher;

use itertools::Itertools;
use num_rational::BigRational;
use num_traits::Zero;
use rand::Rng;

use exact_rational::{Error, Integer, Rational};

use crate::properties::{
    EXPERIMENTS, is_canonical, matches_oracle, oracle, random_f32, random_f64, random_integer,
    random_pair, random_rational, rng,
};

#[test]
fn canonical_form() {
    let mut rng = rng();
    for _ in 0..EXPERIMENTS {
        let (numerator, denominator) = random_pair(&mut rng);
        let x = Rational::new(numerator.clone(), denominator.clone()).unwrap();

        assert!(is_canonical(&x), "{} / {} became {:?}", numerator, denominator, x);
        assert!(matches_oracle(&x, &BigRational::new(numerator, denominator)));
    }
}

#[test]
fn zero_denominator() {
    let mut rng = rng();
    for _ in 0..EXPERIMENTS {
        let numerator = random_integer(&mut rng);
        assert!(matches!(Rational::new(numerator, 0), Err(Error::InvalidArgument(_))));
    }
    assert!(matches!(Rational::new(0, 0), Err(Error::InvalidArgument(_))));
}

#[test]
fn arithmetic() {
    let mut rng = rng();
    for _ in 0..EXPERIMENTS {
        let a = random_rational(&mut rng);
        let b = random_rational(&mut rng);
        let (oracle_a, oracle_b) = (oracle(&a), oracle(&b));

        let results = [
            (&a + &b, &oracle_a + &oracle_b),
            (&a - &b, &oracle_a - &oracle_b),
            (&a * &b, &oracle_a * &oracle_b),
        ];
        for (result, expected) in results {
            assert!(is_canonical(&result));
            assert!(matches_oracle(&result, &expected), "{} and {} gave {}", a, b, result);
        }

        if b.is_zero() {
            assert!(matches!(a.checked_div(&b), Err(Error::Domain(_))));
        } else {
            let quotient = &a / &b;
            assert!(is_canonical(&quotient));
            assert!(matches_oracle(&quotient, &(&oracle_a / &oracle_b)));
        }
    }
}

#[test]
fn commutativity() {
    let mut rng = rng();
    let values = (0..30).map(|_| random_rational(&mut rng)).collect_vec();

    for (a, b) in values.iter().cartesian_product(&values) {
        assert_eq!(a + b, b + a);
        assert_eq!(a * b, b * a);
    }
}

#[test]
fn inverses() {
    let mut rng = rng();
    for _ in 0..EXPERIMENTS {
        let a = random_rational(&mut rng);
        let b = random_rational(&mut rng);

        assert_eq!(&(&a + &b) - &b, a);
        assert_eq!(&a - &a, Rational::zero());
        assert_eq!(-(-&a), a);
        if !b.is_zero() {
            assert_eq!(&(&a * &b) / &b, a);
            assert_eq!(b.checked_recip().unwrap() * &b, Rational::from(1));
        }
    }
}

#[test]
fn total_order() {
    let mut rng = rng();
    let mut values = (0..15).map(|_| random_rational(&mut rng)).collect_vec();
    // Make sure equal pairs occur
    values.push(values[0].clone());
    values.push(Rational::zero());

    for (a, b) in values.iter().cartesian_product(&values) {
        let holding = [a < b, a == b, a > b].into_iter().filter(|&holds| holds).count();
        assert_eq!(holding, 1);
        assert_eq!(a.cmp(b), oracle(a).cmp(&oracle(b)));
        assert_eq!(a.cmp(b), b.cmp(a).reverse());
    }

    for ((a, b), c) in values.iter().cartesian_product(&values).cartesian_product(&values) {
        if a <= b && b <= c {
            assert!(a <= c);
        }
    }
}

#[test]
fn f64_round_trip() {
    let mut rng = rng();
    for _ in 0..10 * EXPERIMENTS {
        let value = random_f64(&mut rng);
        let x = Rational::try_from(value).unwrap();

        assert!(is_canonical(&x));
        assert_eq!(x.to_f64().to_bits(), if value == 0_f64 { 0 } else { value.to_bits() });
        assert_eq!(x.is_integer(), value.fract() == 0_f64);
        assert!(x == value);
    }
}

#[test]
fn f32_round_trip() {
    let mut rng = rng();
    for _ in 0..10 * EXPERIMENTS {
        let value = random_f32(&mut rng);
        let x = Rational::try_from(value).unwrap();

        assert!(is_canonical(&x));
        assert_eq!(x, Rational::try_from(f64::from(value)).unwrap());
        assert_eq!(x.to_f64(), f64::from(value));
    }
}

/// No other `f64` is closer to the value than the one it converts to.
#[test]
fn to_f64_nearest() {
    let mut rng = rng();
    for _ in 0..EXPERIMENTS {
        let x = random_rational(&mut rng).abs();
        if x.is_zero() {
            continue;
        }

        let value = x.to_f64();
        assert!(value.is_finite() && value > 0_f64);
        let distance = (&x - Rational::try_from(value).unwrap()).abs();
        for neighbour in [f64::from_bits(value.to_bits() - 1), f64::from_bits(value.to_bits() + 1)] {
            let other = (&x - Rational::try_from(neighbour).unwrap()).abs();
            assert!(distance <= other, "{} converted to {}, but {} is closer", x, value, neighbour);
        }
    }
}

#[test]
fn to_f64_monotone() {
    let mut rng = rng();
    let values = (0..EXPERIMENTS).map(|_| random_rational(&mut rng)).sorted().collect_vec();

    for (smaller, larger) in values.iter().tuple_windows() {
        assert!(smaller.to_f64() <= larger.to_f64());
    }
}

#[test]
fn text_round_trip() {
    let mut rng = rng();
    for _ in 0..EXPERIMENTS {
        let x = random_rational(&mut rng);
        let text = x.to_string();

        assert_eq!(text.parse::<Rational>().unwrap(), x);
        assert_eq!(text.contains('/'), !x.is_integer());
    }
}

#[test]
fn mixed_operands() {
    let mut rng = rng();
    for _ in 0..EXPERIMENTS {
        let x = random_rational(&mut rng);
        let k = rng.gen_range(-1_000_000_i64..=1_000_000);
        let value = random_f64(&mut rng);
        let exact = Rational::try_from(value).unwrap();

        assert_eq!(&x + k, &x + Rational::from(k));
        assert_eq!(k - &x, Rational::from(k) - &x);
        assert_eq!(&x * Integer::from(k), &x * Rational::from(k));
        assert_eq!(&x + value, &x + &exact);
        assert_eq!(value * &x, &exact * &x);

        assert_eq!(x.partial_cmp(&k), Some(x.cmp(&Rational::from(k))));
        assert_eq!(x.partial_cmp(&value), Some(x.cmp(&exact)));
        assert_eq!(x.compare(value), Ok(x.cmp(&exact)));
    }
}

#[test]
fn hash_agrees_with_eq() {
    let state = RandomState::new();
    let mut rng = rng();
    for _ in 0..EXPERIMENTS {
        let (numerator, denominator) = random_pair(&mut rng);
        let factor = Integer::from(rng.gen_range(1_i64..1_000_000)) * if rng.gen_bool(0.5) { 1 } else { -1 };

        let x = Rational::new(numerator.clone(), denominator.clone()).unwrap();
        let y = Rational::new(numerator * &factor, denominator * &factor).unwrap();
        assert_eq!(x, y);
        assert_eq!(state.hash_one(&x), state.hash_one(&y));
    }
}
