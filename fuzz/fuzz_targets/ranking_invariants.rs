// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the full search path.
//!
//! Whatever the corpus and parameters, a successful response never returns a
//! hit under the threshold, never exceeds the page size, shows each page
//! newest first, and reports `total_pages` from the match count.

#![no_main]

use arbitrary::Arbitrary;
use fuzzqa::{total_pages, FaqRecord, FaqSearcher, SearchConfig, SearchRequest};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Entry {
    title: String,
    description: String,
    day: Option<u8>,
}

#[derive(Debug, Arbitrary)]
struct SearchInput {
    entries: Vec<Entry>,
    query: String,
    page: u8,
    page_size: u8,
    title_weight: f64,
    description_weight: f64,
    threshold: f64,
    boost: f64,
    max_results: u8,
}

fuzz_target!(|input: SearchInput| {
    let corpus: Vec<FaqRecord> = input
        .entries
        .iter()
        .take(64)
        .enumerate()
        .map(|(i, entry)| {
            let record = FaqRecord::new(i as i64, &entry.title, &entry.description);
            match entry.day {
                Some(day) => match fuzzqa::parse_timestamp(&format!("2023-01-{:02}", day % 28 + 1)) {
                    Some(ts) => record.with_updated(ts),
                    None => record,
                },
                None => record,
            }
        })
        .collect();

    let config = SearchConfig {
        max_results: input.max_results.max(1) as usize,
        ..SearchConfig::default()
    };
    let request = SearchRequest::new("fuzz", input.query.chars().take(64).collect::<String>())
        .page(input.page as usize)
        .page_size(input.page_size as usize)
        .weights(input.title_weight, input.description_weight)
        .threshold(input.threshold)
        .containment_boost(input.boost);

    let Ok(response) = FaqSearcher::new(config).search(&corpus, &request) else {
        return;
    };

    if request.query.trim().is_empty() {
        assert!(response.is_empty());
        return;
    }

    assert!(response.hits.len() <= request.page_size);
    assert_eq!(response.total_pages, total_pages(response.total_matched, request.page_size));
    for hit in &response.hits {
        assert!(hit.composite_score >= request.threshold);
    }
    for pair in response.hits.windows(2) {
        assert!(pair[0].updated >= pair[1].updated);
    }
});
