// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind a composite score.
//!
//! ```text
//! composite = w_title × sim(query, title)
//!           + w_description × sim(query, description)
//!           + boost   (if the query appears verbatim in either field)
//! ```
//!
//! Weights are normalized so `w_title + w_description = 1`, which keeps the
//! weighted part in `[0, 100]`. The boost is added on top and never clamped:
//! an exact substring hit is meant to outrank any purely fuzzy one.
//!
//! Scores are written to a fresh vector parallel to the corpus. Records are
//! only ever borrowed, so concurrent queries over the same corpus cannot see
//! each other's scores.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::{Result, SearchError};
use crate::fuzzy::token_set_ratio;
use crate::types::{FaqRecord, ScoreBreakdown, SearchRequest};
use crate::utils::normalize;

/// Title/description weights, normalized to sum to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    title: f64,
    description: f64,
}

impl Weights {
    /// Normalize raw weights. Both must be finite and non-negative with a
    /// positive sum.
    ///
    /// Both are divided by the larger one first, so two finite weights whose
    /// sum overflows still normalize to a pair summing to 1.
    pub fn normalized(title: f64, description: f64) -> Result<Self> {
        let valid = title.is_finite()
            && description.is_finite()
            && title >= 0.0
            && description >= 0.0
            && title + description > 0.0;
        if !valid {
            return Err(SearchError::InvalidWeights { title, description });
        }
        let scale = title.max(description);
        let (title, description) = (title / scale, description / scale);
        let total = title + description;
        Ok(Self {
            title: title / total,
            description: description / total,
        })
    }

    pub fn title(&self) -> f64 {
        self.title
    }

    pub fn description(&self) -> f64 {
        self.description
    }
}

/// A query normalized once and paired with the knobs that score it.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedQuery {
    text: String,
    weights: Weights,
    boost: f64,
}

impl PreparedQuery {
    pub fn new(query: &str, weights: Weights, boost: f64) -> Result<Self> {
        if !boost.is_finite() || boost < 0.0 {
            return Err(SearchError::InvalidParameter {
                name: "containment_boost",
                value: boost,
            });
        }
        Ok(Self {
            text: normalize(Some(query)),
            weights,
            boost,
        })
    }

    pub fn from_request(request: &SearchRequest) -> Result<Self> {
        let weights = Weights::normalized(request.title_weight, request.description_weight)?;
        Self::new(&request.query, weights, request.containment_boost)
    }

    /// The normalized query text.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn weights(&self) -> Weights {
        self.weights
    }

    pub fn boost(&self) -> f64 {
        self.boost
    }
}

/// `boost` if the query is a literal substring of either field, else 0.
///
/// All three strings must already be normalized. An empty query is not
/// considered contained anywhere.
pub fn containment_boost(query: &str, title: &str, description: &str, boost: f64) -> f64 {
    if !query.is_empty() && (title.contains(query) || description.contains(query)) {
        boost
    } else {
        0.0
    }
}

/// Weighted similarity plus boost. No upper clamp.
pub fn composite_score(weights: Weights, title_sim: f64, description_sim: f64, boost: f64) -> f64 {
    weights.title * title_sim + weights.description * description_sim + boost
}

/// Score one record against a prepared query.
pub fn score_record(query: &PreparedQuery, record: &FaqRecord) -> ScoreBreakdown {
    let title = normalize(record.title.as_deref());
    let description = normalize(record.description.as_deref());

    let title_sim = token_set_ratio(&query.text, &title);
    let description_sim = token_set_ratio(&query.text, &description);
    let boost = containment_boost(&query.text, &title, &description, query.boost);

    ScoreBreakdown {
        title: title_sim,
        description: description_sim,
        containment_boost: boost,
        composite: composite_score(query.weights, title_sim, description_sim, boost),
    }
}

/// Score every record. `result[i]` belongs to `corpus[i]`.
///
/// Records are independent, so this is a parallel map. The indexed collect
/// keeps corpus order regardless of how work is split across threads.
#[cfg(feature = "parallel")]
pub fn score_corpus(query: &PreparedQuery, corpus: &[FaqRecord]) -> Vec<ScoreBreakdown> {
    corpus
        .par_iter()
        .map(|record| score_record(query, record))
        .collect()
}

/// Sequential version for builds without rayon.
#[cfg(not(feature = "parallel"))]
pub fn score_corpus(query: &PreparedQuery, corpus: &[FaqRecord]) -> Vec<ScoreBreakdown> {
    corpus
        .iter()
        .map(|record| score_record(query, record))
        .collect()
}
