//! Numbered source references attached to research text

use serde::{Deserialize, Serialize};

/// A numbered reference to a source URL, cited inline as `[n]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    /// 1-based position in the caller-supplied URL list
    pub number: usize,
    pub url: String,
    /// URL host without a leading "www."
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}
