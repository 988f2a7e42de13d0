#![no_main]
use fuzz::{run_fuzz_store, StoreData};
use libfuzzer_sys::{fuzz_target, Corpus};

fuzz_target!(|data: StoreData| -> Corpus {
    if run_fuzz_store(data) {
        Corpus::Keep
    } else {
        Corpus::Reject
    }
});
