use std::fmt;

use crate::parser::Rule;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// The input doesn't follow the `Y-M-D` layout.
    MalformedDate {
        text: String,
        source: Option<Box<pest::error::Error<Rule>>>,
    },
    /// The month is outside of `1..=12`.
    InvalidMonth(i32),
    /// The day is outside of `1..=31`.
    InvalidDay(i32),
}

impl Error {
    pub(crate) fn malformed(text: &str) -> Self {
        Self::MalformedDate { text: text.to_string(), source: None }
    }

    /// Check if the text could not be read as a date at all.
    ///
    /// ```
    /// use calendar_date::DateValue;
    ///
    /// assert!(DateValue::parse("abcd").unwrap_err().is_malformed());
    /// assert!(!DateValue::parse("2017-13-01").unwrap_err().is_malformed());
    /// ```
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedDate { .. })
    }

    /// Check if the text was well-formed but holds an out-of-range month or
    /// day.
    ///
    /// ```
    /// use calendar_date::DateValue;
    ///
    /// assert!(DateValue::parse("2017-13-01").unwrap_err().is_invalid());
    /// assert!(DateValue::new(2017, 1, 32).unwrap_err().is_invalid());
    /// ```
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::InvalidMonth(_) | Self::InvalidDay(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedDate { text, .. } => write!(f, "Wrong date format: {text}"),
            Self::InvalidMonth(month) => write!(f, "Month value is invalid: {month}"),
            Self::InvalidDay(day) => write!(f, "Day value is invalid: {day}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MalformedDate { source: Some(pest_err), .. } => Some(pest_err.as_ref()),
            _ => None,
        }
    }
}
