//! # Error reporting
//!
//! A collection of types describing the problems that can be encountered while creating, combining
//! or reading rational numbers.
use std::error::Error as StdError;
use std::fmt;
use std::fmt::Display;

/// Result of the fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// An `Error` is created when an operation has no rational result.
///
/// Nothing is modified when an operation fails: operands and receivers keep the value they had
/// before the call.
#[derive(Eq, PartialEq, Clone, Debug)]
pub enum Error {
    /// A value was provided that can't be turned into a rational number.
    ///
    /// This is the case for a zero denominator and for floats that are not finite. The contained
    /// `String` is a message for the end user.
    InvalidArgument(String),
    /// Division by a rational number with value zero.
    ///
    /// The contained `String` is a message for the end user.
    Domain(String),
    /// Text could not be read as a rational number.
    Parse(ParseError),
}

impl Error {
    pub(crate) fn zero_denominator() -> Self {
        Error::InvalidArgument("Denominator can't be zero.".to_string())
    }

    pub(crate) fn not_finite(value: impl Display) -> Self {
        Error::InvalidArgument(format!("Float value {} is not finite.", value))
    }

    pub(crate) fn division_by_zero() -> Self {
        Error::Domain("Division by a rational with value zero.".to_string())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidArgument(message) => write!(f, "InvalidArgument: {}", message),
            Error::Domain(message) => write!(f, "DomainError: {}", message),
            Error::Parse(error) => error.fmt(f),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::InvalidArgument(_) | Error::Domain(_) => None,
            Error::Parse(error) => Some(error),
        }
    }
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Error::Parse(error)
    }
}

/// A `ParseError` describes text that doesn't match the `numerator[/denominator]` grammar.
///
/// It points at the byte at which reading went wrong. Everything before that byte was well formed.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct ParseError {
    description: String,
    position: usize,
}

impl ParseError {
    /// Create a new `ParseError`.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    /// * `position`: Byte offset of the offending token.
    pub fn new(description: impl Into<String>, position: usize) -> Self {
        Self { description: description.into(), position, }
    }

    /// Human readable description of the problem.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Byte offset of the token that could not be read.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Move the position by `offset` bytes, used when the parsed text was a slice of a larger one.
    pub(crate) fn shifted(self, offset: usize) -> Self {
        Self { position: self.position + offset, ..self }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ParseError: {} (at byte {})", self.description, self.position)
    }
}

impl StdError for ParseError {}
