// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search entry point.
//!
//! ```text
//! query ──normalize──┐
//!                    ├─ score_corpus ─ rank ─ slice page ─ project ─ recency sort
//! corpus (borrowed) ─┘
//! ```
//!
//! `FaqSearcher` holds configuration and a page slicer, nothing else. It never
//! mutates the corpus, so any number of threads can search the same slice at
//! once.

use chrono::{DateTime, Utc};
use tracing::{debug, trace, Level};

use crate::config::SearchConfig;
use crate::error::{Result, SearchError};
use crate::scoring::{rank, score_corpus, PreparedQuery};
use crate::search::assemble::assemble;
use crate::search::paginate::{OffsetSlicer, PageSlicer};
use crate::types::{FaqRecord, SearchRequest, SearchResponse};

/// Fuzzy FAQ searcher.
///
/// The searcher's config only sets the result cap directly. Weights,
/// threshold, boost and page size are read from each `SearchRequest`; use
/// [`FaqSearcher::request`] to seed a request from this searcher's config.
///
/// # Example
///
/// ```
/// use fuzzqa::{FaqRecord, FaqSearcher, SearchConfig, SearchRequest};
///
/// let corpus = vec![FaqRecord::new("faq-1", "How to reset my password?", "")];
/// let searcher = FaqSearcher::new(SearchConfig::default());
/// let response = searcher
///     .search(&corpus, &SearchRequest::new("support", "reset password"))
///     .unwrap();
/// assert_eq!(response.hits.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct FaqSearcher<S = OffsetSlicer> {
    config: SearchConfig,
    slicer: S,
}

impl FaqSearcher<OffsetSlicer> {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            slicer: OffsetSlicer,
        }
    }
}

impl Default for FaqSearcher<OffsetSlicer> {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl<S: PageSlicer> FaqSearcher<S> {
    /// Use a custom page slicer.
    pub fn with_slicer(config: SearchConfig, slicer: S) -> Self {
        Self { config, slicer }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// A page-1 request carrying this searcher's weights, threshold, boost
    /// and page size.
    pub fn request(&self, keyspace: impl Into<String>, query: impl Into<String>) -> SearchRequest {
        SearchRequest::from_config(&self.config, keyspace, query)
    }

    /// Search `corpus`, stamping records without a timestamp with the current
    /// time.
    pub fn search(&self, corpus: &[FaqRecord], request: &SearchRequest) -> Result<SearchResponse> {
        self.search_at(corpus, request, Utc::now())
    }

    /// Search with an explicit "now", for reproducible responses.
    ///
    /// A blank query returns an empty response before any validation or
    /// scoring happens.
    pub fn search_at(
        &self,
        corpus: &[FaqRecord],
        request: &SearchRequest,
        now: DateTime<Utc>,
    ) -> Result<SearchResponse> {
        if request.query.trim().is_empty() {
            debug!(keyspace = %request.keyspace, "blank query, returning empty response");
            return Ok(SearchResponse::empty(
                request.keyspace.clone(),
                request.page,
                request.page_size,
            ));
        }

        validate(request)?;
        let query = PreparedQuery::from_request(request)?;
        debug!(
            keyspace = %request.keyspace,
            query = query.text(),
            title_weight = query.weights().title(),
            description_weight = query.weights().description(),
            corpus = corpus.len(),
            "scoring corpus"
        );

        let scores = score_corpus(&query, corpus);
        if tracing::enabled!(Level::TRACE) {
            for (position, breakdown) in scores.iter().enumerate() {
                trace!(position, composite = breakdown.composite, "scored");
            }
        }

        let ranking = rank(corpus, &scores, request.threshold, self.config.max_results);
        debug!(
            matched = ranking.matched,
            kept = ranking.results.len(),
            cap = self.config.max_results,
            "ranked"
        );
        if ranking.matched > ranking.results.len() {
            debug!(
                dropped = ranking.matched - ranking.results.len(),
                "result cap reached"
            );
        }

        let response = assemble(
            &self.slicer,
            &request.keyspace,
            request.page,
            request.page_size,
            &ranking,
            now,
        );
        debug!(
            page = response.page,
            hits = response.hits.len(),
            total_pages = response.total_pages,
            "page assembled"
        );
        Ok(response)
    }
}

fn validate(request: &SearchRequest) -> Result<()> {
    if request.page == 0 || request.page_size == 0 {
        return Err(SearchError::InvalidPagination {
            page: request.page,
            page_size: request.page_size,
        });
    }
    if !request.threshold.is_finite() {
        return Err(SearchError::InvalidParameter {
            name: "threshold",
            value: request.threshold,
        });
    }
    Ok(())
}

/// Search with the default configuration and page slicer.
pub fn search(corpus: &[FaqRecord], request: &SearchRequest) -> Result<SearchResponse> {
    FaqSearcher::default().search(corpus, request)
}
