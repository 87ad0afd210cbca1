use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default fraction of documents above which a term is dropped from the TF-IDF vocabulary
pub const DEFAULT_MAX_DF: f64 = 0.85;
/// Default number of keywords / phrases returned
pub const DEFAULT_TOP_N: usize = 10;

/// Extraction parameters
///
/// Deserializable so a host application can load it from its own config source.
/// Missing fields fall back to the defaults.
///
/// # Examples
/// ```
/// use keyword_extractor::ExtractorConfig;
/// let config = ExtractorConfig::default().with_max_df(0.5).with_top_n(5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Terms present in more than `max_df * doc_num` documents are pruned.
    /// Must be in `(0, 1]`.
    pub max_df: f64,
    /// Number of results per ranking
    pub top_n: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_df: DEFAULT_MAX_DF,
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl ExtractorConfig {
    pub fn with_max_df(mut self, max_df: f64) -> Self {
        self.max_df = max_df;
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Check every parameter range
    pub fn validate(&self) -> Result<()> {
        validate_max_df(self.max_df)
    }
}

/// `max_df` must be a finite fraction in `(0, 1]`
pub fn validate_max_df(max_df: f64) -> Result<()> {
    if max_df.is_finite() && max_df > 0.0 && max_df <= 1.0 {
        Ok(())
    } else {
        Err(Error::Configuration(format!(
            "max_df must be in (0, 1], got {max_df}"
        )))
    }
}
