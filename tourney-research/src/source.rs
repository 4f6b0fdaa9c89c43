//! The research-service boundary
//!
//! Everything behind [`ResearchSource`] (HTTP, credentials, timeouts) is supplied by the
//! caller. The engine only ever sees a resolved [`ResearchAnswer`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tourney_core::TourneyResult;

/// A system/user prompt pair sent to the research service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchPrompt {
    pub system: String,
    pub user: String,
}

/// Free text returned by the research service plus its ordered citation URLs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchAnswer {
    pub content: String,
    #[serde(default)]
    pub citations: Vec<String>,
}

impl ResearchAnswer {
    pub fn new(content: impl Into<String>, citations: Vec<String>) -> Self {
        Self {
            content: content.into(),
            citations,
        }
    }
}

/// Something that can answer a research prompt
///
/// Implementations must report a missing configuration as `TourneyError::Config` and a
/// non-success response as `TourneyError::Upstream`, never as an empty answer.
#[async_trait]
pub trait ResearchSource: Send + Sync {
    async fn ask(&self, prompt: &ResearchPrompt) -> TourneyResult<ResearchAnswer>;
}
