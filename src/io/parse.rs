//! # Number parsing
//!
//! Reading rational numbers from text of the form `numerator[/denominator]`, where both parts are
//! decimal integers with an optional sign.
use num_traits::Zero;

use crate::Integer;
use crate::error::{Error, ParseError, Result};
use crate::rational::Rational;

/// Intermediate form of a read number, before it is checked and normalized.
#[derive(Eq, PartialEq, Clone, Debug)]
pub(crate) struct Raw {
    pub(crate) numerator: Integer,
    pub(crate) denominator: Option<Integer>,
    /// Number of bytes that were read.
    pub(crate) length: usize,
}

#[derive(Eq, PartialEq, Clone, Debug)]
enum Sign {
    Positive,
    Negative,
}

impl Raw {
    /// Read the longest prefix of `text` that matches the grammar.
    ///
    /// Text that follows a complete number is left alone, it is up to the caller to decide whether
    /// that is acceptable.
    ///
    /// # Errors
    ///
    /// When `text` doesn't start with an integer, or when a `/` is not followed by one. The error
    /// position is relative to the start of `text`.
    pub(crate) fn read(text: &str) -> std::result::Result<Self, ParseError> {
        let (numerator, numerator_length) = read_integer(text, "numerator")?;

        match text[numerator_length..].strip_prefix('/') {
            None => Ok(Self { numerator, denominator: None, length: numerator_length, }),
            Some(rest) => {
                let start = numerator_length + 1;
                let (denominator, denominator_length) = read_integer(rest, "denominator")
                    .map_err(|error| error.shifted(start))?;

                Ok(Self {
                    numerator,
                    denominator: Some(denominator),
                    length: start + denominator_length,
                })
            },
        }
    }
}

impl TryFrom<Raw> for Rational {
    type Error = Error;

    fn try_from(value: Raw) -> Result<Self> {
        let Raw { numerator, denominator, .. } = value;

        match denominator {
            None => Ok(Rational::from(numerator)),
            Some(denominator) => Rational::new(numerator, denominator),
        }
    }
}

/// Read a sign followed by at least one ascii digit.
///
/// # Return value
///
/// The value and the number of bytes it took.
fn read_integer(text: &str, number_part: &str) -> std::result::Result<(Integer, usize), ParseError> {
    let (sign, sign_length) = match text.as_bytes().first() {
        Some(b'-') => (Sign::Negative, 1),
        Some(b'+') => (Sign::Positive, 1),
        _ => (Sign::Positive, 0),
    };

    let digits = &text[sign_length..];
    let digit_count = digits.bytes().take_while(u8::is_ascii_digit).count();
    if digit_count == 0 {
        return Err(ParseError::new(format!("Expected the digits of the {}", number_part), sign_length));
    }

    let magnitude = Integer::parse_bytes(digits[..digit_count].as_bytes(), 10)
        .ok_or_else(|| ParseError::new(
            format!("Failed to parse {} \"{}\"", number_part, &digits[..digit_count]),
            sign_length,
        ))?;
    let value = match sign {
        Sign::Positive => magnitude,
        Sign::Negative if magnitude.is_zero() => magnitude,
        Sign::Negative => -magnitude,
    };

    Ok((value, sign_length + digit_count))
}
