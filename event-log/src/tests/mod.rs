mod store;

#[cfg(feature = "fuzzing")]
mod fuzzing;

#[macro_export]
macro_rules! date {
    ( $date: expr ) => {{
        use calendar_date::DateValue;
        DateValue::parse($date).expect("invalid date literal")
    }};
}

/// Run a script and collect all of its output.
fn run_script(script: &str) -> Vec<String> {
    let mut store = crate::EventStore::new();

    script
        .lines()
        .flat_map(|line| crate::run_line(&mut store, line))
        .collect()
}
