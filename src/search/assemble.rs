// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning a ranking into the response envelope.
//!
//! Two behaviors here look odd and are intentional:
//!
//! - **Recency within the page.** The page is cut from the relevance-ordered
//!   list, then re-sorted by `updated` (newest first). Users see the most
//!   relevant page of entries, presented newest first.
//! - **Page count from the pre-cap total.** `total_pages` counts every match
//!   above the threshold, including ones the cap dropped, so trailing pages
//!   can come back empty.

use chrono::{DateTime, Utc};

use crate::scoring::{RankedResult, Ranking};
use crate::search::paginate::{total_pages, PageSlicer};
use crate::types::{FaqHit, SearchResponse};

/// Project a ranked record into its output shape.
///
/// Text comes from the record as stored, not the normalized copy used for
/// scoring. A missing timestamp becomes `now`.
pub fn project(result: &RankedResult<'_>, now: DateTime<Utc>) -> FaqHit {
    let record = result.record;
    FaqHit {
        id: record.id.clone(),
        category: record.category.clone().unwrap_or_default(),
        title: record.title.clone().unwrap_or_default(),
        description: record.description.clone().unwrap_or_default(),
        comment: record.comment.clone().unwrap_or_default(),
        attachments: record.attachments.clone(),
        updated_by: record.updated_by.clone().unwrap_or_default(),
        updated: record.updated.unwrap_or(now),
        ai_off: record.ai_off,
        title_score: result.scores.title,
        description_score: result.scores.description,
        containment_boost: result.scores.containment_boost,
        composite_score: result.scores.composite,
    }
}

/// Newest first. Stable, so equal timestamps keep relevance order.
pub fn sort_by_recency(hits: &mut [FaqHit]) {
    hits.sort_by(|a, b| b.updated.cmp(&a.updated));
}

/// Build the response for one page of `ranking`.
pub fn assemble<S: PageSlicer>(
    slicer: &S,
    keyspace: &str,
    page: usize,
    page_size: usize,
    ranking: &Ranking<'_>,
    now: DateTime<Utc>,
) -> SearchResponse {
    let window = slicer.slice(&ranking.results, page, page_size);
    let mut hits: Vec<FaqHit> = window.iter().map(|result| project(result, now)).collect();
    sort_by_recency(&mut hits);

    SearchResponse {
        keyspace: keyspace.to_string(),
        page,
        page_size,
        total_pages: total_pages(ranking.matched, page_size),
        total_matched: ranking.matched,
        hits,
    }
}
