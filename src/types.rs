// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The records that go in and the response that comes out.
//!
//! Field names on the wire follow the FAQ store's JSON shape (`faq_title`,
//! `ai_off`, `_id`, ...). Rust-side names say what the field holds.
//!
//! # Defaults (never errors)
//!
//! | Field        | Absent / null becomes |
//! |--------------|-----------------------|
//! | text fields  | `None` (scored as "") |
//! | `attachments`| empty list            |
//! | `ai_off`     | `false`               |
//! | `updated`    | `None`, then "now" at projection time |
//!
//! A timestamp that is present but unparseable is an error: guessing a date
//! would silently reorder the recency pass.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::config::SearchConfig;

/// FAQ identifier. Stores use either integers or strings; both round-trip
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FaqId {
    Number(i64),
    Text(String),
}

impl Default for FaqId {
    fn default() -> Self {
        FaqId::Text(String::new())
    }
}

impl fmt::Display for FaqId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FaqId::Number(n) => write!(f, "{}", n),
            FaqId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for FaqId {
    fn from(id: i64) -> Self {
        FaqId::Number(id)
    }
}

impl From<&str> for FaqId {
    fn from(id: &str) -> Self {
        FaqId::Text(id.to_string())
    }
}

/// One corpus entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FaqRecord {
    #[serde(rename = "faq_id", default, deserialize_with = "null_as_default")]
    pub id: FaqId,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(rename = "faq_title", alias = "title", default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub attachments: Vec<String>,
    #[serde(default)]
    pub updated_by: Option<String>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub updated: Option<DateTime<Utc>>,
    /// Suppresses automated answering for this entry.
    #[serde(default, deserialize_with = "null_as_default")]
    pub ai_off: bool,
}

impl FaqRecord {
    /// Record with just an id, title and description; everything else absent.
    pub fn new(id: impl Into<FaqId>, title: &str, description: &str) -> Self {
        Self {
            id: id.into(),
            title: Some(title.to_string()),
            description: Some(description.to_string()),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    pub fn with_updated(mut self, updated: DateTime<Utc>) -> Self {
        self.updated = Some(updated);
        self
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts RFC 3339, naive date-times (taken as UTC), and bare dates.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    parse_timestamp(raw)
        .map(Some)
        .ok_or_else(|| serde::de::Error::custom(format!("unrecognized timestamp: {:?}", raw)))
}

/// Parse a timestamp the way corpus files write them.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Per-record scores. Similarities are in `[0, 100]`; the composite is not
/// clamped, so a containment boost can push it past 100.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoreBreakdown {
    pub title: f64,
    pub description: f64,
    pub containment_boost: f64,
    pub composite: f64,
}

/// Everything one search call needs besides the corpus.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    /// Opaque tenant/keyspace tag, echoed in the response.
    pub keyspace: String,
    pub query: String,
    /// 1-based.
    pub page: usize,
    pub page_size: usize,
    pub title_weight: f64,
    pub description_weight: f64,
    /// Inclusive lower bound on the composite score.
    pub threshold: f64,
    pub containment_boost: f64,
}

impl SearchRequest {
    /// Request for page 1 using the default configuration.
    pub fn new(keyspace: impl Into<String>, query: impl Into<String>) -> Self {
        Self::from_config(&SearchConfig::default(), keyspace, query)
    }

    /// Request for page 1 seeded from `config`.
    pub fn from_config(
        config: &SearchConfig,
        keyspace: impl Into<String>,
        query: impl Into<String>,
    ) -> Self {
        Self {
            keyspace: keyspace.into(),
            query: query.into(),
            page: 1,
            page_size: config.page_size,
            title_weight: config.title_weight,
            description_weight: config.description_weight,
            threshold: config.threshold,
            containment_boost: config.containment_boost,
        }
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn weights(mut self, title: f64, description: f64) -> Self {
        self.title_weight = title;
        self.description_weight = description;
        self
    }

    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn containment_boost(mut self, boost: f64) -> Self {
        self.containment_boost = boost;
        self
    }
}

/// One projected result as returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqHit {
    #[serde(rename = "_id")]
    pub id: FaqId,
    pub category: String,
    pub title: String,
    pub description: String,
    pub comment: String,
    pub attachments: Vec<String>,
    pub updated_by: String,
    pub updated: DateTime<Utc>,
    pub ai_off: bool,
    #[serde(rename = "scores_title")]
    pub title_score: f64,
    #[serde(rename = "scores_description")]
    pub description_score: f64,
    pub containment_boost: f64,
    pub composite_score: f64,
}

/// The response envelope for one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub keyspace: String,
    pub page: usize,
    #[serde(rename = "total_items")]
    pub page_size: usize,
    pub total_pages: usize,
    /// Matches above the threshold, counted before the result cap.
    #[serde(rename = "total_items_all")]
    pub total_matched: usize,
    #[serde(rename = "faq_data")]
    pub hits: Vec<FaqHit>,
}

impl SearchResponse {
    /// Response with no hits, used for blank queries.
    pub fn empty(keyspace: impl Into<String>, page: usize, page_size: usize) -> Self {
        Self {
            keyspace: keyspace.into(),
            page,
            page_size,
            total_pages: 0,
            total_matched: 0,
            hits: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}
