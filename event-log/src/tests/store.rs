use std::collections::BTreeSet;

use calendar_date::Error;

use crate::{date, EventStore};

#[test]
fn add_is_idempotent() {
    let mut store = EventStore::new();
    assert!(store.add_event(date!("2017-01-01"), "x"));
    assert!(!store.add_event(date!("2017-01-01"), "x"));
    assert!(store.add_event(date!("2017-01-01"), "X"));
    assert_eq!(store.find(date!("2017-01-01")).len(), 2);
}

#[test]
fn delete_event_twice() -> Result<(), Error> {
    let mut store = EventStore::new();
    let date = "2017-01-01".parse()?;
    store.add_event(date, "x");
    assert!(store.delete_event(date, "x"));
    assert!(!store.delete_event(date, "x"));
    Ok(())
}

#[test]
fn delete_event_has_no_side_effect() {
    let mut store = EventStore::new();
    assert!(!store.delete_event(date!("2017-01-01"), "x"));
    assert!(store.is_empty());

    store.add_event(date!("2017-01-01"), "y");
    assert!(!store.delete_event(date!("2017-01-01"), "x"));
    assert!(!store.delete_event(date!("2017-01-02"), "y"));
    assert_eq!(store.len(), 1);
}

#[test]
fn emptied_date_stays_in_store() {
    let mut store = EventStore::new();
    store.add_event(date!("2017-01-01"), "x");
    store.delete_event(date!("2017-01-01"), "x");

    assert_eq!(store.dates().collect::<Vec<_>>(), [date!("2017-01-01")]);
    assert_eq!(store.dump().count(), 0);
    assert_eq!(store.delete_date(date!("2017-01-01")), 0);
    assert!(store.is_empty());
}

#[test]
fn delete_date_counts_events() {
    let mut store = EventStore::new();
    store.add_event(date!("2017-01-01"), "a");
    store.add_event(date!("2017-01-01"), "b");
    store.add_event(date!("2017-01-02"), "c");

    assert_eq!(store.delete_date(date!("2017-01-01")), 2);
    assert!(store.find(date!("2017-01-01")).is_empty());
    assert_eq!(store.find(date!("2017-01-02")).len(), 1);
    assert_eq!(store.delete_date(date!("2018-01-01")), 0);
}

#[test]
fn find_is_read_only() {
    let store = EventStore::new();
    assert!(store.find(date!("2017-01-01")).is_empty());
    assert!(store.is_empty());
}

#[test]
fn find_sorts_events() {
    let mut store = EventStore::new();

    for event in ["c", "a", "b", "a"] {
        store.add_event(date!("2017-01-01"), event);
    }

    let expected: BTreeSet<_> = ["a", "b", "c"].map(String::from).into();
    assert_eq!(store.find(date!("2017-01-01")), &expected);
}

#[test]
fn dump_order() {
    let mut store = EventStore::new();
    store.add_event(date!("2017-01-01"), "b");
    store.add_event(date!("-1-12-31"), "z");
    store.add_event(date!("2017-01-01"), "a");
    store.add_event(date!("2016-12-31"), "c");

    assert_eq!(
        store.dump().collect::<Vec<_>>(),
        [
            (date!("-1-12-31"), "z"),
            (date!("2016-12-31"), "c"),
            (date!("2017-01-01"), "a"),
            (date!("2017-01-01"), "b"),
        ],
    );

    // Dump is computed from the current state on each call.
    store.delete_date(date!("2016-12-31"));
    assert_eq!(store.dump().count(), 3);
}

#[test]
fn display_dump() {
    let mut store = EventStore::new();
    store.add_event(date!("1-2-3"), "birth");
    store.add_event(date!("2017-11-07"), "meeting");
    assert_eq!(store.to_string(), "0001-02-03 birth\n2017-11-07 meeting\n");
}
