//! # Reading and writing of rational numbers
//!
//! Rationals are written as `numerator/denominator` in decimal, or as just the numerator when the
//! value is an integer. Reading accepts the same format, with an optional `+` or `-` sign on both
//! parts and a denominator that may be omitted. A number read from text is normalized like any
//! other, so `"-6/-9"` reads as `2/3`.
//!
//! Single values are read with [`str::parse`]. A [`Scanner`] reads a sequence of
//! whitespace-separated values from one text.
use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::error::{Error, ParseError, Result};
use crate::io::parse::Raw;
use crate::rational::Rational;

mod parse;

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator())
        } else {
            write!(f, "{}/{}", self.numerator(), self.denominator())
        }
    }
}

impl FromStr for Rational {
    type Err = Error;

    /// Read a rational number that spans the entire text.
    ///
    /// Surrounding whitespace is not accepted.
    fn from_str(text: &str) -> Result<Self> {
        let raw = Raw::read(text)?;
        if raw.length < text.len() {
            return Err(ParseError::new(
                format!("Unexpected text \"{}\" after the number", &text[raw.length..]),
                raw.length,
            ).into());
        }

        Rational::try_from(raw)
    }
}

/// Reads consecutive rationals from a text.
///
/// Values may be preceded by any amount of whitespace. When a value can't be read, the scanner
/// stays at the start of the offending token and enters a failed state in which all reads fail,
/// until it is [`clear`](Scanner::clear)ed. The token can then be inspected through
/// [`remainder`](Scanner::remainder) or passed over with [`skip_token`](Scanner::skip_token).
///
/// As an iterator, the scanner yields values until the text is exhausted and stops after the
/// first error.
///
/// ```
/// use exact_rational::{Rational, Scanner};
///
/// let mut scanner = Scanner::new("1/2 -3 x");
/// assert_eq!(scanner.read().unwrap(), Rational::new(1, 2).unwrap());
/// assert_eq!(scanner.read().unwrap(), Rational::from(-3));
/// assert!(scanner.read().is_err());
/// assert!(scanner.is_failed());
/// assert_eq!(scanner.remainder(), "x");
/// ```
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct Scanner<'a> {
    text: &'a str,
    /// Byte offset of the first character not yet consumed.
    position: usize,
    failed: bool,
}

impl<'a> Scanner<'a> {
    /// Create a scanner positioned at the start of `text`.
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self { text, position: 0, failed: false, }
    }

    /// Read the next value.
    ///
    /// Leading whitespace is consumed, also when the read fails.
    ///
    /// # Errors
    ///
    /// * `Error::Parse` when the scanner is in a failed state, when only whitespace remains or when
    /// the text at the current position is not a rational number.
    /// * `Error::InvalidArgument` when the value that was read has a zero denominator.
    ///
    /// After any error, the scanner is in a failed state.
    pub fn read(&mut self) -> Result<Rational> {
        if self.failed {
            return Err(ParseError::new("Reading from a failed scanner", self.position).into());
        }

        let start = self.position + whitespace_length(self.remainder());
        self.position = start;
        let text = &self.text[start..];
        if text.is_empty() {
            return self.fail(ParseError::new("Unexpected end of input", start).into());
        }

        let result = Raw::read(text)
            .map_err(|error| Error::from(error.shifted(start)))
            .and_then(|raw| {
                let length = raw.length;
                Rational::try_from(raw).map(|value| (value, length))
            });
        match result {
            Ok((value, length)) => {
                self.position = start + length;
                Ok(value)
            },
            Err(error) => self.fail(error),
        }
    }

    fn fail(&mut self, error: Error) -> Result<Rational> {
        debug!("Failed to read a rational at byte {}: {}", self.position, error);
        self.failed = true;
        Err(error)
    }

    /// Whether a previous read failed.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        self.failed
    }

    /// Leave the failed state, without moving.
    pub fn clear(&mut self) {
        self.failed = false;
    }

    /// Whether only whitespace remains.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.remainder().trim_start().is_empty()
    }

    /// Move past the next whitespace-delimited token, regardless of its contents.
    ///
    /// This doesn't leave the failed state.
    ///
    /// # Return value
    ///
    /// The token that was skipped, empty if only whitespace remained.
    pub fn skip_token(&mut self) -> &'a str {
        let start = self.position + whitespace_length(self.remainder());
        let rest = &self.text[start..];
        let length = rest.find(char::is_whitespace).unwrap_or(rest.len());
        self.position = start + length;

        &rest[..length]
    }

    /// Byte offset of the first character not yet consumed.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// The text that is not yet consumed.
    #[must_use]
    pub fn remainder(&self) -> &'a str {
        &self.text[self.position..]
    }
}

impl Iterator for Scanner<'_> {
    type Item = Result<Rational>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.is_exhausted() {
            None
        } else {
            Some(self.read())
        }
    }
}

fn whitespace_length(text: &str) -> usize {
    text.len() - text.trim_start().len()
}
