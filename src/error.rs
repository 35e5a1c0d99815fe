// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors surfaced by the search engine and its loaders.
//!
//! Missing record fields are never errors: they default and scoring proceeds.
//! Everything here is a caller mistake (bad weights, bad paging) or a corpus
//! that cannot be read at all.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    /// Weights cannot be normalized to sum to 1.
    #[error("invalid weights: title={title}, description={description} (need non-negative values with a positive sum)")]
    InvalidWeights { title: f64, description: f64 },

    /// Page numbers are 1-based and page sizes must be positive.
    #[error("invalid pagination: page={page}, page_size={page_size} (both must be >= 1)")]
    InvalidPagination { page: usize, page_size: usize },

    /// A scalar search parameter is out of range.
    #[error("invalid parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// A corpus entry could not be turned into a record.
    #[error("malformed record at index {index}: {source}")]
    MalformedRecord {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("corpus is not a JSON array of records: {0}")]
    CorpusFormat(#[source] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = SearchError> = std::result::Result<T, E>;
