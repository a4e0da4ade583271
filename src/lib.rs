//! # Exact rational numbers
//!
//! Fractions of arbitrary precision integers, always stored in lowest terms with a positive
//! denominator. Arithmetic, comparison and conversion from floating point values are exact; only
//! the conversion back to `f64` rounds.
//!
//! ```
//! use exact_rational::Rational;
//!
//! let half = Rational::new(4, 8).unwrap();
//! let third = Rational::new(1, 3).unwrap();
//!
//! assert_eq!((&half + &third).to_string(), "5/6");
//! assert_eq!(Rational::try_from(2.75).unwrap(), Rational::new(11, 4).unwrap());
//! assert!(half < 0.75);
//! ```
#![warn(missing_docs)]

pub use num_bigint::BigInt as Integer;

pub use crate::error::{Error, ParseError, Result};
pub use crate::io::Scanner;
pub use crate::rational::Rational;
pub use crate::traits::IntoRational;

pub mod error;
pub mod io;
pub mod rational;
pub mod traits;

#[cfg(feature = "serde")]
mod serialization;
