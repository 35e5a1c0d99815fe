//! Search configuration: the knobs a deployment sets once.
//!
//! Defaults reproduce the FAQ service's behavior: title weighted 0.6 against
//! description 0.4, no threshold, a 20-point containment boost, 30 results per
//! page and a cap of three pages.
//!
//! ```json
//! {
//!   "title_weight": 0.7,
//!   "description_weight": 0.3,
//!   "threshold": 40.0,
//!   "containment_boost": 20.0,
//!   "page_size": 10,
//!   "max_results": 50
//! }
//! ```
//!
//! Every key is optional. Unknown keys are rejected so a typo does not
//! silently fall back to a default.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Result, SearchError};
use crate::scoring::Weights;

pub const DEFAULT_TITLE_WEIGHT: f64 = 0.6;
pub const DEFAULT_DESCRIPTION_WEIGHT: f64 = 0.4;
pub const DEFAULT_THRESHOLD: f64 = 0.0;
pub const DEFAULT_CONTAINMENT_BOOST: f64 = 20.0;
pub const DEFAULT_PAGE_SIZE: usize = 30;

/// Ranked results kept before pagination: three default pages.
///
/// Anything past the cap is dropped regardless of score. That trades recall
/// on very permissive queries for bounded work and memory per call.
pub const DEFAULT_MAX_RESULTS: usize = 3 * DEFAULT_PAGE_SIZE;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    pub title_weight: f64,
    pub description_weight: f64,
    pub threshold: f64,
    pub containment_boost: f64,
    pub page_size: usize,
    pub max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            title_weight: DEFAULT_TITLE_WEIGHT,
            description_weight: DEFAULT_DESCRIPTION_WEIGHT,
            threshold: DEFAULT_THRESHOLD,
            containment_boost: DEFAULT_CONTAINMENT_BOOST,
            page_size: DEFAULT_PAGE_SIZE,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

impl SearchConfig {
    /// Load and validate a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: SearchConfig = serde_json::from_str(content)
            .map_err(|e| SearchError::Config(format!("invalid config JSON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations no request could succeed with.
    pub fn validate(&self) -> Result<()> {
        Weights::normalized(self.title_weight, self.description_weight)?;
        if !self.threshold.is_finite() {
            return Err(SearchError::InvalidParameter {
                name: "threshold",
                value: self.threshold,
            });
        }
        if !self.containment_boost.is_finite() || self.containment_boost < 0.0 {
            return Err(SearchError::InvalidParameter {
                name: "containment_boost",
                value: self.containment_boost,
            });
        }
        if self.page_size == 0 {
            return Err(SearchError::Config("page_size must be at least 1".to_string()));
        }
        if self.max_results == 0 {
            return Err(SearchError::Config("max_results must be at least 1".to_string()));
        }
        Ok(())
    }
}
