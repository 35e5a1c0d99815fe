//! Ranking: threshold, relevance order, ties, and the result cap.

use crate::common::{at_day, hit_ids, make_record, numbered_corpus, sample_faq};
use fuzzqa::{FaqSearcher, SearchConfig, SearchRequest};

#[test]
fn test_threshold_is_inclusive() {
    let corpus = sample_faq();
    // "billing" scores exactly 120 against record 2 (both fields contain it).
    let at = SearchRequest::new("ks", "billing").threshold(120.0);
    let above = SearchRequest::new("ks", "billing").threshold(120.5);

    let searcher = FaqSearcher::default();
    let hit = searcher.search_at(&corpus, &at, at_day(10)).unwrap();
    assert_eq!(hit_ids(&hit), vec!["2"]);
    assert!((hit.hits[0].composite_score - 120.0).abs() < 1e-9);

    let miss = searcher.search_at(&corpus, &above, at_day(10)).unwrap();
    assert!(miss.is_empty());
    assert_eq!(miss.total_matched, 0);
}

#[test]
fn test_every_hit_clears_threshold() {
    let corpus = sample_faq();
    for threshold in [0.0, 30.0, 40.0, 60.0, 100.0] {
        let request = SearchRequest::new("ks", "reset password").threshold(threshold);
        let response = FaqSearcher::default()
            .search_at(&corpus, &request, at_day(10))
            .unwrap();
        for hit in &response.hits {
            assert!(
                hit.composite_score >= threshold,
                "hit {} scored {} under threshold {}",
                hit.id,
                hit.composite_score,
                threshold
            );
        }
    }
}

#[test]
fn test_relevance_order_across_pages() {
    // Same timestamp everywhere, so the recency pass keeps relevance order.
    let corpus: Vec<_> = sample_faq()
        .into_iter()
        .map(|r| r.with_updated(at_day(1)))
        .collect();
    let request = SearchRequest::new("ks", "reset password").page_size(1);
    let searcher = FaqSearcher::default();

    let mut scores = Vec::new();
    for page in 1..=5 {
        let response = searcher
            .search_at(&corpus, &request.clone().page(page), at_day(10))
            .unwrap();
        assert_eq!(response.hits.len(), 1);
        scores.push(response.hits[0].composite_score);
    }
    assert!(scores.windows(2).all(|w| w[0] >= w[1]), "{:?}", scores);
}

#[test]
fn test_ties_keep_corpus_order() {
    let corpus = numbered_corpus(6);
    let request = SearchRequest::new("ks", "topic").page_size(6);
    let response = FaqSearcher::default()
        .search_at(&corpus, &request, at_day(10))
        .unwrap();
    assert_eq!(hit_ids(&response), vec!["0", "1", "2", "3", "4", "5"]);
    assert!(response
        .hits
        .iter()
        .all(|hit| hit.composite_score == response.hits[0].composite_score));
}

#[test]
fn test_cap_keeps_best_results() {
    let corpus = vec![
        make_record(1, "shipping times", "").with_updated(at_day(1)),
        make_record(2, "shipping", "").with_updated(at_day(1)),
        make_record(3, "returns and shipping costs", "").with_updated(at_day(1)),
        make_record(4, "gift cards", "").with_updated(at_day(1)),
    ];
    let config = SearchConfig {
        max_results: 2,
        ..SearchConfig::default()
    };
    let request = SearchRequest::from_config(&config, "ks", "shipping").threshold(70.0);
    let response = FaqSearcher::new(config)
        .search_at(&corpus, &request, at_day(10))
        .unwrap();

    // Three records mention shipping; the cap keeps the top two.
    assert_eq!(response.total_matched, 3);
    assert_eq!(response.hits.len(), 2);
    let ids = hit_ids(&response);
    assert!(!ids.contains(&"4".to_string()));
    for hit in &response.hits {
        assert!(hit.composite_score >= 80.0);
    }
}

#[test]
fn test_weights_are_normalized() {
    let corpus = sample_faq();
    let searcher = FaqSearcher::default();
    let base = SearchRequest::new("ks", "delete account");

    let a = searcher
        .search_at(&corpus, &base.clone().weights(0.6, 0.4), at_day(10))
        .unwrap();
    let b = searcher
        .search_at(&corpus, &base.weights(3.0, 2.0), at_day(10))
        .unwrap();

    assert_eq!(hit_ids(&a), hit_ids(&b));
    for (x, y) in a.hits.iter().zip(&b.hits) {
        assert!((x.composite_score - y.composite_score).abs() < 1e-9);
    }
}

#[test]
fn test_title_only_weighting() {
    let corpus = sample_faq();
    let request = SearchRequest::new("ks", "reset password")
        .weights(1.0, 0.0)
        .page_size(5);
    let response = FaqSearcher::default()
        .search_at(&corpus, &request, at_day(10))
        .unwrap();
    for hit in &response.hits {
        assert!((hit.composite_score - hit.title_score - hit.containment_boost).abs() < 1e-9);
    }
}

#[test]
fn test_huge_weights_still_score_fields() {
    let corpus = sample_faq();
    let request = SearchRequest::new("ks", "billing")
        .weights(f64::MAX, f64::MAX)
        .threshold(50.0);
    let response = FaqSearcher::default()
        .search_at(&corpus, &request, at_day(10))
        .unwrap();
    assert_eq!(hit_ids(&response), vec!["2"]);
    assert!((response.hits[0].composite_score - 120.0).abs() < 1e-9);
}
