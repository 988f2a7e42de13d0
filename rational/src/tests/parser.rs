use super::r;
use crate::{ParseError, Rational};

#[test]
fn parse_simple() {
    assert_eq!(Rational::parse("5/7"), Some(r(5, 7)));
    assert_eq!(Rational::parse("10/8"), Some(r(5, 4)));
    assert_eq!(Rational::parse("-6/8"), Some(r(-3, 4)));
    assert_eq!(Rational::parse("+6/-8"), Some(r(-3, 4)));
}

#[test]
fn parse_skips_leading_blanks() {
    assert_eq!(Rational::parse("  5/7"), Some(r(5, 7)));
    assert_eq!(Rational::parse("5 /\t7"), Some(r(5, 7)));
    assert_eq!(Rational::parse("\n5/7"), Some(r(5, 7)));
}

#[test]
fn parse_ignores_trailing_content() {
    assert_eq!(Rational::parse("5/7 10/8"), Some(r(5, 7)));
    assert_eq!(Rational::parse("5/7abc"), Some(r(5, 7)));
}

#[test]
fn parse_failures() {
    for raw in ["", "   ", "1*2", "1/", "/4", "a/b", "1 2", "1/ /2", "- 1/2", "1/0"] {
        assert_eq!(Rational::parse(raw), None, "`{raw}` should not be parsed");
    }
}

#[test]
fn parse_overflow_fails() {
    assert_eq!(Rational::parse("2147483648/1"), None);
    assert_eq!(Rational::parse("-2147483648/-1"), None);
    assert_eq!(Rational::parse("-2147483648/1"), Some(Rational::from(i32::MIN)));
}

#[test]
fn failed_parse_keeps_previous_value() {
    let mut values = [Rational::default(); 3];

    for (value, raw) in values.iter_mut().zip(["1*2", "1/", "/4"]) {
        if let Some(parsed) = Rational::parse(raw) {
            *value = parsed;
        }
    }

    assert_eq!(values, [Rational::ZERO; 3]);
}

#[test]
fn read_chained_values() {
    let mut reader = Rational::read_all("5/7 10/8");
    let mut r1 = Rational::default();
    let mut r2 = Rational::default();

    for target in [&mut r1, &mut r2] {
        if let Some(value) = reader.next() {
            *target = value;
        }
    }

    assert_eq!((r1, r2), (r(5, 7), r(5, 4)));

    // The text is exhausted, further reads don't touch the values.
    for target in [&mut r1, &mut r2] {
        if let Some(value) = reader.next() {
            *target = value;
        }
    }

    assert_eq!((r1, r2), (r(5, 7), r(5, 4)));
    assert_eq!(reader.remainder(), None);
}

#[test]
fn read_stops_at_first_malformed_value() {
    let mut reader = Rational::read_all("1/2 3/0 5/6");
    assert_eq!(reader.next(), Some(r(1, 2)));
    assert_eq!(reader.next(), None);
    assert_eq!(reader.next(), None);
}

#[test]
fn from_str_requires_whole_text() {
    assert_eq!("5/7".parse::<Rational>(), Ok(r(5, 7)));
    assert_eq!(" 5/7 \n".parse::<Rational>(), Ok(r(5, 7)));
    assert_eq!("5/0".parse::<Rational>(), Err(ParseError::ZeroDenominator));
    assert_eq!(
        "5/7 10/8".parse::<Rational>(),
        Err(ParseError::Trailing(" 10/8".to_string())),
    );
    assert!(matches!("five/7".parse::<Rational>(), Err(ParseError::Syntax(_))));
}
