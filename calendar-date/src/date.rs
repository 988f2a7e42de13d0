use std::fmt::{Debug, Display};
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Accepted range for months.
pub const MONTH_RANGE: RangeInclusive<i32> = 1..=12;

/// Accepted range for days, whatever the month is.
pub const DAY_RANGE: RangeInclusive<i32> = 1..=31;

/// A year+month+day struct with range-checked month and day.
///
/// There is no calendar check beyond these ranges: `2023-02-31` is a valid
/// value. Dates are ordered by year, then month, then day.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DateValue {
    year: i32,
    month: u8,
    day: u8,
}

impl DateValue {
    /// Create a new date, this will fail if the month is not in `1..=12` or
    /// if the day is not in `1..=31`. Any year is accepted.
    ///
    /// ```
    /// use calendar_date::DateValue;
    ///
    /// assert!(DateValue::new(2017, 1, 1).is_ok());
    /// assert!(DateValue::new(-44, 3, 15).is_ok());
    /// assert!(DateValue::new(2017, 13, 1).is_err()); // month is out of bound
    /// assert!(DateValue::new(2017, 1, 0).is_err()); // day is out of bound
    /// ```
    pub fn new(year: i32, month: i32, day: i32) -> Result<Self> {
        if !MONTH_RANGE.contains(&month) {
            return Err(Error::InvalidMonth(month));
        }

        if !DAY_RANGE.contains(&day) {
            return Err(Error::InvalidDay(day));
        }

        Ok(Self {
            year,
            month: month.try_into().expect("month was range-checked"),
            day: day.try_into().expect("day was range-checked"),
        })
    }

    /// Parse a date written as `Y-M-D`.
    ///
    /// Each field is a run of digits with an optional leading sign, fields
    /// are separated by a single `-`. Month and day are then range-checked
    /// as in [`DateValue::new`].
    ///
    /// ```
    /// use calendar_date::DateValue;
    ///
    /// assert_eq!(DateValue::parse("2017-01-01"), DateValue::new(2017, 1, 1));
    /// assert_eq!(DateValue::parse("+1-+2-+3"), DateValue::new(1, 2, 3));
    /// assert!(DateValue::parse("2017-13-01").unwrap_err().is_invalid());
    /// assert!(DateValue::parse("2017/01/01").unwrap_err().is_malformed());
    /// ```
    #[inline]
    pub fn parse(data: &str) -> Result<Self> {
        crate::parser::parse(data)
    }

    /// Get the year, which may be zero or negative.
    ///
    /// ```
    /// use calendar_date::DateValue;
    ///
    /// let date = DateValue::parse("-5-06-07").unwrap();
    /// assert_eq!(date.year(), -5);
    /// ```
    #[inline]
    pub fn year(self) -> i32 {
        self.year
    }

    /// Get the month, in `1..=12`.
    #[inline]
    pub fn month(self) -> u8 {
        self.month
    }

    /// Get the day of the month, in `1..=31`.
    #[inline]
    pub fn day(self) -> u8 {
        self.day
    }
}

impl FromStr for DateValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Display for DateValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl Debug for DateValue {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::result::Result<(), std::fmt::Error> {
        write!(f, "{self}")
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<DateValue> for chrono::NaiveDate {
    type Error = ();

    /// Fails for days that don't exist in the calendar, such as `2023-02-30`.
    #[inline]
    fn try_from(date: DateValue) -> std::result::Result<Self, Self::Error> {
        chrono::NaiveDate::from_ymd_opt(date.year, date.month.into(), date.day.into()).ok_or(())
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::NaiveDate> for DateValue {
    #[inline]
    fn from(date: chrono::NaiveDate) -> DateValue {
        use chrono::Datelike;

        Self {
            year: date.year(),
            month: date.month().try_into().expect("invalid NaiveDate"),
            day: date.day().try_into().expect("invalid NaiveDate"),
        }
    }
}

#[cfg(feature = "fuzzing")]
impl<'a> arbitrary::Arbitrary<'a> for DateValue {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(Self {
            year: u.arbitrary()?,
            month: u.int_in_range(1..=12)?,
            day: u.int_in_range(1..=31)?,
        })
    }
}
