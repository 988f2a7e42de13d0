use pest::iterators::Pair;
use pest::Parser;

use crate::date::DateValue;
use crate::error::{Error, Result};

#[derive(Parser)]
#[grammar = "grammar.pest"]
struct DateParser;

/// Parse a date written as `Y-M-D`, each field possibly signed.
pub fn parse(data: &str) -> Result<DateValue> {
    let date_pair = DateParser::parse(Rule::input_date, data)
        .map_err(|pest_err| {
            #[cfg(feature = "log")]
            log::debug!(input = data; "rejected malformed date");

            Error::MalformedDate {
                text: data.to_string(),
                source: Some(Box::new(pest_err)),
            }
        })?
        .next()
        .expect("grammar error: no date found");

    let (year, month, day) = build_date(date_pair, data)?;
    DateValue::new(year, month, day)
}

fn unexpected_token<T>(token: Rule, parent: Rule) -> T {
    unreachable!("Grammar error: found `{token:?}` inside of `{parent:?}`")
}

fn build_date(pair: Pair<Rule>, data: &str) -> Result<(i32, i32, i32)> {
    assert_eq!(pair.as_rule(), Rule::date);
    let mut year = None;
    let mut month = None;
    let mut day = None;

    for pair in pair.into_inner() {
        let field = match pair.as_rule() {
            Rule::year => &mut year,
            Rule::month => &mut month,
            Rule::day => &mut day,
            other => unexpected_token(other, Rule::date),
        };

        *field = Some(build_number(pair, data)?);
    }

    Ok((
        year.expect("grammar error: missing year"),
        month.expect("grammar error: missing month"),
        day.expect("grammar error: missing day"),
    ))
}

fn build_number(pair: Pair<Rule>, data: &str) -> Result<i32> {
    // `str::parse` accepts both signs.
    pair.as_str().parse().map_err(|_| {
        #[cfg(feature = "log")]
        log::debug!(input = data, field = pair.as_str(); "date field overflows");

        Error::malformed(data)
    })
}
