//! Edge cases: empty inputs, absent fields, invalid parameters.

use crate::common::{at_day, hit_ids, make_record, sample_faq};
use fuzzqa::{search, FaqId, FaqRecord, FaqSearcher, SearchError, SearchRequest};

#[test]
fn test_empty_corpus() {
    let response = search(&[], &SearchRequest::new("ks", "anything")).unwrap();
    assert!(response.is_empty());
    assert_eq!(response.total_matched, 0);
    assert_eq!(response.total_pages, 0);
}

#[test]
fn test_whitespace_query_is_blank() {
    for query in ["", "   ", "\t\n"] {
        let response = search(&sample_faq(), &SearchRequest::new("ks", query)).unwrap();
        assert!(response.is_empty(), "query {:?} returned hits", query);
        assert_eq!(response.total_pages, 0);
    }
}

#[test]
fn test_blank_query_skips_parameter_checks() {
    let request = SearchRequest::new("ks", " ")
        .page(0)
        .page_size(0)
        .weights(-1.0, f64::NAN);
    assert!(search(&sample_faq(), &request).is_ok());
}

#[test]
fn test_record_without_text_scores_zero() {
    let corpus = vec![FaqRecord {
        id: FaqId::Number(9),
        ..FaqRecord::default()
    }];
    let response = FaqSearcher::default()
        .search_at(&corpus, &SearchRequest::new("ks", "refund"), at_day(10))
        .unwrap();

    // Threshold 0 is inclusive, so a zero score still matches.
    assert_eq!(hit_ids(&response), vec!["9"]);
    let hit = &response.hits[0];
    assert_eq!(hit.title_score, 0.0);
    assert_eq!(hit.description_score, 0.0);
    assert_eq!(hit.composite_score, 0.0);
    assert_eq!(hit.title, "");
    assert_eq!(hit.updated, at_day(10));
}

#[test]
fn test_query_case_and_padding_are_ignored() {
    let corpus = sample_faq();
    let searcher = FaqSearcher::default();
    let plain = searcher
        .search_at(&corpus, &SearchRequest::new("ks", "refund policy"), at_day(10))
        .unwrap();
    let shouty = searcher
        .search_at(&corpus, &SearchRequest::new("ks", "  REFUND Policy "), at_day(10))
        .unwrap();
    assert_eq!(plain, shouty);
}

#[test]
fn test_output_keeps_original_case() {
    let corpus = vec![make_record(1, "How Do I Contact SUPPORT?", "Email Us.")];
    let response = search(&corpus, &SearchRequest::new("ks", "contact support")).unwrap();
    assert_eq!(response.hits[0].title, "How Do I Contact SUPPORT?");
    assert_eq!(response.hits[0].description, "Email Us.");
}

#[test]
fn test_negative_threshold_admits_everything() {
    let corpus = sample_faq();
    let request = SearchRequest::new("ks", "zzzz").threshold(-1.0);
    let response = search(&corpus, &request).unwrap();
    assert_eq!(response.total_matched, corpus.len());
}

#[test]
fn test_invalid_weights() {
    for (title, description) in [(0.0, 0.0), (-0.5, 1.0), (f64::INFINITY, 1.0), (f64::NAN, 0.4)] {
        let request = SearchRequest::new("ks", "refund").weights(title, description);
        let err = search(&sample_faq(), &request).unwrap_err();
        assert!(
            matches!(err, SearchError::InvalidWeights { .. }),
            "weights ({}, {}) gave {:?}",
            title,
            description,
            err
        );
    }
}

#[test]
fn test_invalid_pagination() {
    let err = search(&sample_faq(), &SearchRequest::new("ks", "refund").page(0)).unwrap_err();
    assert!(matches!(
        err,
        SearchError::InvalidPagination { page: 0, page_size: 30 }
    ));
    let err = search(&sample_faq(), &SearchRequest::new("ks", "refund").page_size(0)).unwrap_err();
    assert!(matches!(err, SearchError::InvalidPagination { page: 1, page_size: 0 }));
}

#[test]
fn test_invalid_boost() {
    for boost in [-5.0, f64::NAN, f64::INFINITY] {
        let request = SearchRequest::new("ks", "refund").containment_boost(boost);
        let err = search(&sample_faq(), &request).unwrap_err();
        assert!(matches!(
            err,
            SearchError::InvalidParameter { name: "containment_boost", .. }
        ));
    }
}

#[test]
fn test_zero_boost_disables_containment_bonus() {
    let corpus = sample_faq();
    let request = SearchRequest::new("ks", "billing").containment_boost(0.0);
    let response = search(&corpus, &request).unwrap();
    assert!(response.hits.iter().all(|hit| hit.containment_boost == 0.0));
    assert!(response.hits.iter().all(|hit| hit.composite_score <= 100.0));
}

#[test]
fn test_error_messages_name_the_problem() {
    let err = search(&sample_faq(), &SearchRequest::new("ks", "refund").page(0)).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("page"), "{}", message);
}
