// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: threshold, order, cap.
//!
//! Order is composite score descending. Equal scores keep corpus order, so the
//! same corpus and query always rank identically no matter how many threads
//! computed the scores.
//!
//! The cap keeps at most `max_results` entries. Anything past it is dropped
//! even if it clears the threshold: a deliberate recall-for-bounded-work
//! tradeoff, not an accident. `Ranking::matched` still reports the full
//! pre-cap count, which is what page counts are computed from.

use crate::types::{FaqRecord, ScoreBreakdown};
use std::cmp::Ordering;

/// A record that cleared the threshold, with its scores.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedResult<'a> {
    /// Index of the record in the corpus; the tiebreaker.
    pub position: usize,
    pub record: &'a FaqRecord,
    pub scores: ScoreBreakdown,
}

/// Output of `rank`.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking<'a> {
    /// Records with composite ≥ threshold, before the cap.
    pub matched: usize,
    /// Top `min(matched, cap)` results, best first.
    pub results: Vec<RankedResult<'a>>,
}

/// Compare two ranked results for ordering.
///
/// Sort order:
/// 1. **Composite score** - descending
/// 2. **Corpus position** - ascending, so ties keep input order
///
/// Total over finite scores, which makes the unstable selection in `rank`
/// deterministic.
pub fn compare_ranked(a: &RankedResult<'_>, b: &RankedResult<'_>) -> Ordering {
    b.scores
        .composite
        .total_cmp(&a.scores.composite)
        .then_with(|| a.position.cmp(&b.position))
}

/// Filter by `threshold` (inclusive), sort, and keep the best `cap`.
///
/// `scores[i]` must belong to `corpus[i]`.
pub fn rank<'a>(
    corpus: &'a [FaqRecord],
    scores: &[ScoreBreakdown],
    threshold: f64,
    cap: usize,
) -> Ranking<'a> {
    debug_assert_eq!(corpus.len(), scores.len());

    let mut results: Vec<RankedResult<'a>> = corpus
        .iter()
        .zip(scores)
        .enumerate()
        .filter(|(_, (_, scores))| scores.composite >= threshold)
        .map(|(position, (record, scores))| RankedResult {
            position,
            record,
            scores: *scores,
        })
        .collect();

    let matched = results.len();

    if cap == 0 {
        results.clear();
    } else if results.len() > cap {
        // Partition the top `cap` to the front before sorting only those.
        results.select_nth_unstable_by(cap - 1, compare_ranked);
        results.truncate(cap);
    }
    results.sort_by(compare_ranked);

    Ranking { matched, results }
}
