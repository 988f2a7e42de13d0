#![no_main]
use fuzz::{run_fuzz_rational, RationalData};
use libfuzzer_sys::{fuzz_target, Corpus};

fuzz_target!(|data: RationalData| -> Corpus {
    if run_fuzz_rational(data) {
        Corpus::Keep
    } else {
        Corpus::Reject
    }
});
