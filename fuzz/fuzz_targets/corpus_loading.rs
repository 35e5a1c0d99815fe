//! Fuzz target for corpus parsing.
//!
//! Arbitrary bytes must either load or fail with an error. Never panic.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(corpus) = fuzzqa::load_corpus(data) {
        for record in &corpus {
            let _ = record.id.to_string();
        }
    }
});
