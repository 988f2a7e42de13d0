use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// A fraction was built with a zero denominator.
    InvalidArgument,
    /// Attempted to divide by a zero fraction.
    DivideByZero,
    /// The reduced result doesn't fit into 32 bits.
    Overflow,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument => write!(f, "Invalid argument"),
            Self::DivideByZero => write!(f, "Division by zero"),
            Self::Overflow => write!(f, "Rational overflow: expected 32-bits terms"),
        }
    }
}

impl std::error::Error for Error {}

/// Reason why a text could not be read as a fraction.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// The text doesn't look like `P/Q`.
    Syntax(String),
    /// The text is well-formed but `Q` is zero.
    ZeroDenominator,
    /// Some content remains after the fraction.
    Trailing(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax(text) => write!(f, "expected a fraction `P/Q`, got `{text}`"),
            Self::ZeroDenominator => write!(f, "fraction has a zero denominator"),
            Self::Trailing(rest) => write!(f, "unexpected content after fraction: `{rest}`"),
        }
    }
}

impl std::error::Error for ParseError {}
