use pest::iterators::Pair;
use pest::Parser;

use crate::error::{Error, ParseError};
use crate::Rational;

#[derive(Parser)]
#[grammar = "grammar.pest"]
struct RationalParser;

/// Read a fraction at the beginning of `data` and return it along with the
/// remaining unread text.
pub(crate) fn parse_prefix(data: &str) -> Result<(Rational, &str), ParseError> {
    let rational_pair = RationalParser::parse(Rule::input_rational, data)
        .map_err(|_| {
            #[cfg(feature = "log")]
            log::debug!(input = data; "rejected malformed fraction");

            ParseError::Syntax(data.to_string())
        })?
        .next()
        .expect("grammar error: no rational found");

    let end = rational_pair.as_span().end();
    let rational = build_rational(rational_pair, data)?;
    Ok((rational, &data[end..]))
}

fn unexpected_token<T>(token: Rule, parent: Rule) -> T {
    unreachable!("Grammar error: found `{token:?}` inside of `{parent:?}`")
}

fn build_rational(pair: Pair<Rule>, data: &str) -> Result<Rational, ParseError> {
    assert_eq!(pair.as_rule(), Rule::rational);
    let mut pairs = pair.into_inner();

    let numerator = build_term(
        pairs.next().expect("grammar error: missing numerator"),
        Rule::numerator,
        data,
    )?;

    let denominator = build_term(
        pairs.next().expect("grammar error: missing denominator"),
        Rule::denominator,
        data,
    )?;

    Rational::new(numerator, denominator).map_err(|err| {
        #[cfg(feature = "log")]
        log::debug!(input = data; "rejected fraction: {err}");

        match err {
            Error::InvalidArgument => ParseError::ZeroDenominator,
            Error::DivideByZero | Error::Overflow => ParseError::Syntax(data.to_string()),
        }
    })
}

fn build_term(pair: Pair<Rule>, expected: Rule, data: &str) -> Result<i32, ParseError> {
    if pair.as_rule() != expected {
        return unexpected_token(pair.as_rule(), Rule::rational);
    }

    pair.as_str().parse().map_err(|_| {
        #[cfg(feature = "log")]
        log::debug!(input = data, term = pair.as_str(); "fraction term overflows");

        ParseError::Syntax(data.to_string())
    })
}
