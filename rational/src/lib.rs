#![doc = include_str!("../README.md")]

#[macro_use]
extern crate pest_derive;

pub mod error;

mod parser;

#[cfg(test)]
mod tests;

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

pub use error::{Error, ParseError, Result};

/// An exact fraction `numerator / denominator`.
///
/// The fraction is always stored in lowest terms with a positive denominator,
/// which makes zero uniquely represented as `0/1`.
#[derive(Clone, Copy)]
pub struct Rational {
    num: i32,
    den: i32,
}

impl Rational {
    /// The fraction `0/1`.
    pub const ZERO: Self = Self { num: 0, den: 1 };

    /// The fraction `1/1`.
    pub const ONE: Self = Self { num: 1, den: 1 };

    /// Build a fraction and reduce it to its canonical form. This fails with
    /// [`Error::InvalidArgument`] if the denominator is zero.
    ///
    /// ```
    /// use rational::{Error, Rational};
    ///
    /// let r = Rational::new(8, 12).unwrap();
    /// assert_eq!((r.numerator(), r.denominator()), (2, 3));
    ///
    /// let r = Rational::new(4, -6).unwrap();
    /// assert_eq!((r.numerator(), r.denominator()), (-2, 3));
    ///
    /// assert_eq!(Rational::new(0, 15), Ok(Rational::ZERO));
    /// assert_eq!(Rational::new(1, 0), Err(Error::InvalidArgument));
    /// ```
    ///
    /// The only other failure is [`Error::Overflow`], when the sign can't be
    /// moved to the numerator as for `i32::MIN / -1`.
    pub fn new(numerator: i32, denominator: i32) -> Result<Self> {
        if denominator == 0 {
            return Err(Error::InvalidArgument);
        }

        Self::reduce(numerator.into(), denominator.into())
    }

    /// Reduce a fraction computed with 64-bits intermediates. The
    /// denominator must not be zero.
    fn reduce(num: i64, den: i64) -> Result<Self> {
        debug_assert_ne!(den, 0);
        let divisor = i64::try_from(gcd(num.unsigned_abs(), den.unsigned_abs()))
            .map_err(|_| Error::Overflow)?;

        let (mut num, mut den) = (num / divisor, den / divisor);

        if den < 0 {
            num = -num;
            den = -den;
        }

        Ok(Self {
            num: num.try_into().map_err(|_| Error::Overflow)?,
            den: den.try_into().map_err(|_| Error::Overflow)?,
        })
    }

    /// Get the numerator of the reduced fraction, which holds the sign.
    #[inline]
    pub fn numerator(self) -> i32 {
        self.num
    }

    /// Get the denominator of the reduced fraction, which is always
    /// positive.
    #[inline]
    pub fn denominator(self) -> i32 {
        self.den
    }

    /// Check if this fraction is `0/1`.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.num == 0
    }

    /// Read a fraction written as `P/Q` at the start of the text. Blanks
    /// before each token are skipped and content after the fraction is
    /// ignored.
    ///
    /// Any failure, including a zero denominator, results in `None` so that
    /// the caller can keep its previous value.
    ///
    /// ```
    /// use rational::Rational;
    ///
    /// assert_eq!(Rational::parse("5/7"), Some(Rational::new(5, 7).unwrap()));
    /// assert_eq!(Rational::parse("10/8 3/4"), Some(Rational::new(5, 4).unwrap()));
    /// assert_eq!(Rational::parse(""), None);
    /// assert_eq!(Rational::parse("1*2"), None);
    /// assert_eq!(Rational::parse("1/"), None);
    /// assert_eq!(Rational::parse("/4"), None);
    /// ```
    #[inline]
    pub fn parse(data: &str) -> Option<Self> {
        Self::parse_prefix(data).map(|(rational, _)| rational)
    }

    /// Read a fraction at the start of the text and return it with the
    /// unread remaining text.
    ///
    /// ```
    /// use rational::Rational;
    ///
    /// let (r, rest) = Rational::parse_prefix(" 5 / 7 and more").unwrap();
    /// assert_eq!(r, Rational::new(5, 7).unwrap());
    /// assert_eq!(rest, " and more");
    /// ```
    #[inline]
    pub fn parse_prefix(data: &str) -> Option<(Self, &str)> {
        parser::parse_prefix(data).ok()
    }

    /// Iterate over the fractions written in a text, separated by blanks.
    /// The iteration stops at the first item that can't be read.
    ///
    /// ```
    /// use rational::Rational;
    ///
    /// let values: Vec<_> = Rational::read_all("5/7 10/8 oops 1/2").collect();
    /// assert_eq!(values, [Rational::new(5, 7).unwrap(), Rational::new(5, 4).unwrap()]);
    /// ```
    #[inline]
    pub fn read_all(data: &str) -> ReadRationals<'_> {
        ReadRationals { rest: Some(data) }
    }

    /// Add two fractions, failing with [`Error::Overflow`] if the reduced
    /// result doesn't fit into 32 bits.
    ///
    /// ```
    /// use rational::{Error, Rational};
    ///
    /// let a = Rational::new(2, 3).unwrap();
    /// let b = Rational::new(4, 3).unwrap();
    /// assert_eq!(a.checked_add(b), Rational::new(2, 1));
    ///
    /// let max = Rational::from(i32::MAX);
    /// assert_eq!(max.checked_add(Rational::ONE), Err(Error::Overflow));
    /// ```
    pub fn checked_add(self, rhs: Self) -> Result<Self> {
        let (a, b, c, d) = self.widen(rhs);
        Self::reduce(a * d + c * b, b * d)
    }

    /// Subtract two fractions, failing with [`Error::Overflow`] if the
    /// reduced result doesn't fit into 32 bits.
    pub fn checked_sub(self, rhs: Self) -> Result<Self> {
        let (a, b, c, d) = self.widen(rhs);
        Self::reduce(a * d - c * b, b * d)
    }

    /// Multiply two fractions, failing with [`Error::Overflow`] if the
    /// reduced result doesn't fit into 32 bits.
    pub fn checked_mul(self, rhs: Self) -> Result<Self> {
        let (a, b, c, d) = self.widen(rhs);
        Self::reduce(a * c, b * d)
    }

    /// Divide two fractions, failing with [`Error::DivideByZero`] if `rhs`
    /// is zero.
    ///
    /// ```
    /// use rational::{Error, Rational};
    ///
    /// let a = Rational::new(5, 4).unwrap();
    /// let b = Rational::new(15, 8).unwrap();
    /// assert_eq!(a.checked_div(b), Rational::new(2, 3));
    /// assert_eq!(a.checked_div(Rational::ZERO), Err(Error::DivideByZero));
    /// ```
    pub fn checked_div(self, rhs: Self) -> Result<Self> {
        if rhs.is_zero() {
            return Err(Error::DivideByZero);
        }

        let (a, b, c, d) = self.widen(rhs);
        Self::reduce(a * d, b * c)
    }

    /// Terms of both operands as 64-bits integers, products of two of them
    /// can't overflow.
    #[inline]
    fn widen(self, rhs: Self) -> (i64, i64, i64, i64) {
        (
            self.num.into(),
            self.den.into(),
            rhs.num.into(),
            rhs.den.into(),
        )
    }
}

/// Euclid's algorithm, `gcd(0, 0)` is `1` to keep it usable as a divisor.
fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }

    a.max(1)
}

impl Default for Rational {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<i32> for Rational {
    #[inline]
    fn from(num: i32) -> Self {
        Self { num, den: 1 }
    }
}

// Denominators are positive, so cross products compare like the fractions.
impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b, c, d) = self.widen(*other);
        (a * d).cmp(&(c * b))
    }
}

impl PartialOrd for Rational {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Rational {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Rational {}

impl Hash for Rational {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Equal fractions share the same reduced terms.
        self.num.hash(state);
        self.den.hash(state);
    }
}

macro_rules! impl_operator {
    ( $trait: ident, $method: ident, $checked: ident, $verb: literal ) => {
        impl $trait for Rational {
            type Output = Self;

            /// Panics if the result overflows, or on a division by zero.
            #[inline]
            fn $method(self, rhs: Self) -> Self {
                self.$checked(rhs)
                    .unwrap_or_else(|err| panic!("failed to {} {self} and {rhs}: {err}", $verb))
            }
        }
    };
}

impl_operator!(Add, add, checked_add, "add");
impl_operator!(Sub, sub, checked_sub, "subtract");
impl_operator!(Mul, mul, checked_mul, "multiply");
impl_operator!(Div, div, checked_div, "divide");

impl Neg for Rational {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self * Rational::from(-1)
    }
}

impl FromStr for Rational {
    type Err = ParseError;

    /// Contrary to [`Rational::parse`], the whole text must be consumed,
    /// except for trailing blanks.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (rational, rest) = parser::parse_prefix(s)?;

        if !rest.trim().is_empty() {
            return Err(ParseError::Trailing(rest.to_string()));
        }

        Ok(rational)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

#[cfg(feature = "fuzzing")]
impl<'a> arbitrary::Arbitrary<'a> for Rational {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        Self::new(u.arbitrary()?, u.arbitrary()?).map_err(|_| arbitrary::Error::IncorrectFormat)
    }
}

/// Iterator over blank-separated fractions of a text, see
/// [`Rational::read_all`].
#[derive(Clone, Debug)]
pub struct ReadRationals<'a> {
    rest: Option<&'a str>,
}

impl<'a> ReadRationals<'a> {
    /// The text that has not been read yet, or `None` once a malformed item
    /// was found.
    pub fn remainder(&self) -> Option<&'a str> {
        self.rest
    }
}

impl Iterator for ReadRationals<'_> {
    type Item = Rational;

    fn next(&mut self) -> Option<Self::Item> {
        let Some((rational, rest)) = Rational::parse_prefix(self.rest?) else {
            self.rest = None;
            return None;
        };

        self.rest = Some(rest);
        Some(rational)
    }
}

impl std::iter::FusedIterator for ReadRationals<'_> {}
