//! Pagination over the capped ranking, and the recency pass within a page.

use crate::common::{at_day, hit_ids, make_record, numbered_corpus, sample_faq};
use fuzzqa::{FaqSearcher, SearchConfig, SearchRequest};

fn capped_searcher(max_results: usize) -> FaqSearcher {
    FaqSearcher::new(SearchConfig {
        max_results,
        ..SearchConfig::default()
    })
}

#[test]
fn test_pages_partition_the_ranking() {
    let corpus = numbered_corpus(7);
    let searcher = FaqSearcher::default();
    let request = SearchRequest::new("ks", "topic").page_size(3);

    let pages: Vec<Vec<String>> = (1..=3)
        .map(|page| {
            let response = searcher
                .search_at(&corpus, &request.clone().page(page), at_day(10))
                .unwrap();
            assert_eq!(response.total_pages, 3);
            hit_ids(&response)
        })
        .collect();

    assert_eq!(pages[0], vec!["0", "1", "2"]);
    assert_eq!(pages[1], vec!["3", "4", "5"]);
    assert_eq!(pages[2], vec!["6"]);
}

#[test]
fn test_total_pages_counts_matches_before_cap() {
    let corpus = numbered_corpus(10);
    let searcher = capped_searcher(4);
    let request = SearchRequest::new("ks", "topic").page_size(3);

    let first = searcher.search_at(&corpus, &request, at_day(10)).unwrap();
    assert_eq!(first.total_matched, 10);
    assert_eq!(first.total_pages, 4);
    assert_eq!(hit_ids(&first), vec!["0", "1", "2"]);

    let second = searcher
        .search_at(&corpus, &request.clone().page(2), at_day(10))
        .unwrap();
    assert_eq!(hit_ids(&second), vec!["3"]);

    // Pages past the cap are advertised but empty.
    let third = searcher
        .search_at(&corpus, &request.page(3), at_day(10))
        .unwrap();
    assert!(third.is_empty());
    assert_eq!(third.total_pages, 4);
}

#[test]
fn test_page_past_the_end_is_empty() {
    let response = FaqSearcher::default()
        .search_at(
            &sample_faq(),
            &SearchRequest::new("ks", "reset password").page(50),
            at_day(10),
        )
        .unwrap();
    assert!(response.is_empty());
    assert_eq!(response.page, 50);
    assert_eq!(response.total_pages, 1);
    assert_eq!(response.total_matched, 5);
}

#[test]
fn test_page_is_shown_newest_first() {
    // Relevance: 1 > 2 > 3. Recency: 3 newest, then 1, then 2.
    let corpus = vec![
        make_record(1, "cancel order", "").with_updated(at_day(5)),
        make_record(2, "cancel my order", "").with_updated(at_day(2)),
        make_record(3, "order cancellation policy", "").with_updated(at_day(9)),
    ];
    let request = SearchRequest::new("ks", "cancel order").page_size(3);
    let response = FaqSearcher::default()
        .search_at(&corpus, &request, at_day(10))
        .unwrap();

    assert_eq!(hit_ids(&response), vec!["3", "1", "2"]);
    let stamps: Vec<_> = response.hits.iter().map(|h| h.updated).collect();
    assert!(stamps.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn test_recency_does_not_cross_page_boundaries() {
    // The newest record ranks last, so it stays on the last page.
    let corpus = vec![
        make_record(1, "cancel order", "").with_updated(at_day(1)),
        make_record(2, "cancel my order", "").with_updated(at_day(2)),
        make_record(3, "order cancellation policy", "").with_updated(at_day(9)),
    ];
    let request = SearchRequest::new("ks", "cancel order").page_size(2);
    let response = FaqSearcher::default()
        .search_at(&corpus, &request, at_day(10))
        .unwrap();
    assert_eq!(hit_ids(&response), vec!["2", "1"]);
}

#[test]
fn test_missing_timestamp_is_now() {
    let corpus = vec![
        make_record(1, "cancel order", "").with_updated(at_day(3)),
        make_record(2, "cancel an order", ""),
    ];
    let request = SearchRequest::new("ks", "cancel order").page_size(2);
    let response = FaqSearcher::default()
        .search_at(&corpus, &request, at_day(20))
        .unwrap();

    assert_eq!(hit_ids(&response), vec!["2", "1"]);
    assert_eq!(response.hits[0].updated, at_day(20));
}
