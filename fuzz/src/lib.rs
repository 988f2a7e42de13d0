//! Development module that shares the fuzzing logic between unit tests and
//! the actual fuzzing.

use arbitrary::Arbitrary;

use calendar_date::DateValue;
use rational::{Error, Rational};

pub use event_log::fuzzing::{run_fuzz_store, Data as StoreData};

/// A fuzzing example for fractions
#[derive(Arbitrary, Clone, Debug)]
pub struct RationalData {
    pub lhs: Rational,
    pub rhs: Rational,
    pub text: String,
}

/// Parse a date and check that its formatted form reads back as the same
/// date. Returns `true` if the example should be kept in corpus.
pub fn run_fuzz_date(text: &str) -> bool {
    let Ok(date) = DateValue::parse(text) else {
        return false;
    };

    assert!((1..=12).contains(&date.month()), "{text} gave {date:?}");
    assert!((1..=31).contains(&date.day()), "{text} gave {date:?}");

    let formatted = date.to_string();

    assert_eq!(
        DateValue::parse(&formatted).ok(),
        Some(date),
        "{text} was formatted as {formatted}",
    );

    true
}

fn assert_canonical(value: Rational) {
    assert!(value.denominator() > 0, "{value:?}");

    if value.numerator() == 0 {
        assert_eq!(value.denominator(), 1);
    }

    let (mut a, mut b) = (value.numerator().unsigned_abs(), value.denominator().unsigned_abs());

    while b != 0 {
        (a, b) = (b, a % b);
    }

    assert!(a == 1 || value.numerator() == 0, "{value:?} is not reduced");
}

/// Check that arithmetic and parsing keep fractions canonical. Returns `true`
/// if the example should be kept in corpus.
pub fn run_fuzz_rational(data: RationalData) -> bool {
    let RationalData { lhs, rhs, text } = data;

    if let Some(parsed) = Rational::parse(&text) {
        assert_canonical(parsed);
        assert_eq!(parsed.to_string().parse::<Rational>(), Ok(parsed));
    }

    let results = [
        lhs.checked_add(rhs),
        lhs.checked_sub(rhs),
        lhs.checked_mul(rhs),
        lhs.checked_div(rhs),
    ];

    for value in results.iter().flatten() {
        assert_canonical(*value);
    }

    if let (Ok(sum), Ok(diff)) = (&results[0], &results[1]) {
        if let Ok(back) = sum.checked_sub(rhs) {
            assert_eq!(back, lhs);
        }

        assert_eq!(sum.cmp(diff), rhs.cmp(&Rational::ZERO));
    }

    match &results[3] {
        Err(Error::DivideByZero) => assert!(rhs.is_zero()),
        Err(_) => assert!(!rhs.is_zero()),
        Ok(quotient) => {
            if let Ok(back) = quotient.checked_mul(rhs) {
                assert_eq!(back, lhs);
            }
        }
    }

    assert_eq!(lhs < rhs, rhs > lhs);
    true
}
