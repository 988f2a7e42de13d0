//! Fuzzing logic shared between unit tests and the `fuzz` crate.

use std::fmt::Debug;

use arbitrary::Arbitrary;

use calendar_date::DateValue;

use crate::{run_line, EventStore};

/// An operation to perform on the store
#[derive(Arbitrary, Clone, Debug)]
pub enum Operation {
    Add(DateValue, String),
    DeleteEvent(DateValue, String),
    DeleteDate(DateValue),
    Find(DateValue),
    Line(String),
}

/// A fuzzing example
#[derive(Arbitrary, Clone)]
pub struct Data {
    pub operations: Vec<Operation>,
}

impl Debug for Data {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(&self.operations).finish()
    }
}

/// Run operations on a store and on a naive list of pairs, then check that
/// both agree. Returns `true` if the example should be kept in corpus.
pub fn run_fuzz_store(data: Data) -> bool {
    if data.operations.is_empty() {
        return false;
    }

    let mut store = EventStore::new();
    let mut model: Vec<(DateValue, String)> = Vec::new();

    for operation in data.operations {
        match operation {
            Operation::Add(date, event) => {
                let expected = !model.iter().any(|(d, e)| *d == date && *e == event);

                if expected {
                    model.push((date, event.clone()));
                }

                assert_eq!(store.add_event(date, event), expected);
            }
            Operation::DeleteEvent(date, event) => {
                let len_before = model.len();
                model.retain(|(d, e)| *d != date || *e != event);
                assert_eq!(store.delete_event(date, &event), model.len() < len_before);
            }
            Operation::DeleteDate(date) => {
                let len_before = model.len();
                model.retain(|(d, _)| *d != date);
                assert_eq!(store.delete_date(date), len_before - model.len());
            }
            Operation::Find(date) => {
                let mut expected: Vec<_> = model
                    .iter()
                    .filter(|(d, _)| *d == date)
                    .map(|(_, e)| e.as_str())
                    .collect();

                expected.sort_unstable();
                let found: Vec<_> = store.find(date).iter().map(String::as_str).collect();
                assert_eq!(found, expected);
            }
            Operation::Line(line) => {
                // Only read-only commands, so that the model stays in sync.
                if matches!(line.split_whitespace().next(), Some("Add" | "Del")) {
                    continue;
                }

                run_line(&mut store, &line);
            }
        }
    }

    let mut expected: Vec<_> = model.iter().map(|(d, e)| (*d, e.as_str())).collect();
    expected.sort_unstable();
    assert_eq!(store.dump().collect::<Vec<_>>(), expected);
    true
}
