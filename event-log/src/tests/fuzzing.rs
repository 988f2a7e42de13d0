use arbitrary::{Arbitrary, Unstructured};

use crate::date;
use crate::fuzzing::{run_fuzz_store, Data, Operation};

#[test]
fn no_fuzz_without_operations() {
    assert!(!run_fuzz_store(Data { operations: Vec::new() }));
}

#[test]
fn fuzz_mixed_operations() {
    let operations = vec![
        Operation::Add(date!("2017-01-01"), "a".to_string()),
        Operation::Add(date!("2017-01-01"), "a".to_string()),
        Operation::Add(date!("2016-01-01"), "b".to_string()),
        Operation::Line("Print".to_string()),
        Operation::Line(" Del 2016-01-01".to_string()),
        Operation::DeleteEvent(date!("2017-01-01"), "a".to_string()),
        Operation::Find(date!("2017-01-01")),
        Operation::DeleteDate(date!("2016-01-01")),
        Operation::Find(date!("2016-01-01")),
    ];

    assert!(run_fuzz_store(Data { operations }));
}

#[test]
fn fuzz_arbitrary_bytes() {
    let raw: Vec<u8> = (0..=255).cycle().take(4096).collect();
    let mut u = Unstructured::new(&raw);

    if let Ok(data) = Data::arbitrary(&mut u) {
        run_fuzz_store(data);
    }
}
