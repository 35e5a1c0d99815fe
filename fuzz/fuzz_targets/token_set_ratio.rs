// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for token-set similarity.
//!
//! The score must stay in [0, 100], be symmetric, and ignore word order. Any
//! panic on odd Unicode (combining marks, wide chars, stray whitespace) is a
//! bug too.

#![no_main]

use arbitrary::Arbitrary;
use fuzzqa::{levenshtein_distance, normalize, ratio, token_set_ratio};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct PairInput {
    a: String,
    b: String,
}

fn cap(s: &str) -> String {
    s.chars().take(64).collect()
}

fuzz_target!(|input: PairInput| {
    let a = normalize(Some(&cap(&input.a)));
    let b = normalize(Some(&cap(&input.b)));

    let score = token_set_ratio(&a, &b);
    assert!((0.0..=100.0).contains(&score), "score {} out of range", score);
    assert_eq!(score, token_set_ratio(&b, &a), "asymmetric for {:?} / {:?}", a, b);

    let mut reversed: Vec<&str> = a.split_whitespace().collect();
    reversed.reverse();
    assert_eq!(score, token_set_ratio(&reversed.join(" "), &b));

    let r = ratio(&a, &b);
    assert!((0.0..=100.0).contains(&r));

    let distance = levenshtein_distance(&a, &b);
    assert_eq!(distance, levenshtein_distance(&b, &a));
    assert!(distance <= a.chars().count().max(b.chars().count()));
});
