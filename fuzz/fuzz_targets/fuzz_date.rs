#![no_main]
use fuzz::run_fuzz_date;
use libfuzzer_sys::{fuzz_target, Corpus};

fuzz_target!(|data: &str| -> Corpus {
    if run_fuzz_date(data) {
        Corpus::Keep
    } else {
        Corpus::Reject
    }
});
