//! Fuzzy FAQ search: rank question/answer records against a free-text query.
//!
//! Queries are misspelled, reordered, or partial, so exact matching is not
//! enough. Each record's title and description are compared to the query with
//! a token-set ratio, blended into one composite score, then filtered, ranked,
//! capped, and paginated.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  utils.rs   │────▶│   fuzzy/     │────▶│  scoring/    │────▶│  search/    │
//! │ (normalize) │     │ (levenshtein,│     │ (composite,  │     │ (engine,    │
//! │             │     │  token_set)  │     │  rank, cap)  │     │  paginate,  │
//! └─────────────┘     └──────────────┘     └──────────────┘     │  assemble)  │
//!                                                               └─────────────┘
//! ```
//!
//! Every stage is a pure function of the query and a borrowed corpus. Scores
//! are kept in a vector parallel to the corpus, never written onto records,
//! so concurrent searches over the same corpus need no coordination.
//!
//! # Ordering
//!
//! Results are ranked by composite score (ties keep corpus order), capped at
//! `max_results`, and sliced into a page. The page itself is then shown
//! newest-first by `updated`. `total_pages` is computed from the match count
//! before the cap.
//!
//! # Usage
//!
//! ```
//! use fuzzqa::{search, FaqRecord, SearchRequest};
//!
//! let corpus = vec![
//!     FaqRecord::new("a", "How to reset my password?", "Follow these steps."),
//!     FaqRecord::new("b", "What is the refund policy?", "Refunds within 30 days."),
//! ];
//! let request = SearchRequest::new("support", "refund polcy").threshold(50.0);
//! let response = search(&corpus, &request).unwrap();
//! assert_eq!(response.hits[0].title, "What is the refund policy?");
//! ```

pub mod config;
pub mod corpus;
pub mod error;
pub mod fuzzy;
pub mod scoring;
pub mod search;
pub mod testing;
mod types;
mod utils;

// Re-exports for public API
pub use config::SearchConfig;
pub use corpus::{load_corpus, load_corpus_file};
pub use error::{Result, SearchError};
pub use fuzzy::{levenshtein_distance, ratio, token_set_ratio};
pub use scoring::{
    compare_ranked, composite_score, containment_boost, rank, score_corpus, score_record,
    PreparedQuery, RankedResult, Ranking, Weights,
};
pub use search::{search, total_pages, FaqSearcher, OffsetSlicer, PageSlicer};
pub use types::{
    parse_timestamp, FaqHit, FaqId, FaqRecord, ScoreBreakdown, SearchRequest, SearchResponse,
};
pub use utils::normalize;
