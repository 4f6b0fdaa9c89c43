//! Perplexity chat-completions configuration and wire envelope
//!
//! These types describe what goes over the wire to the answer service and what comes
//! back. Sending the request is left to the [`ResearchSource`](crate::ResearchSource)
//! implementation, which posts [`ChatCompletionRequest`] to [`ResearchConfig::endpoint`]
//! with [`ResearchConfig::bearer_token`] as the `Authorization` header and hands the body
//! to [`CompletionResponse::from_json`].

use serde::{Deserialize, Serialize};
use tourney_core::{TourneyError, TourneyResult};

use crate::source::{ResearchAnswer, ResearchPrompt};

pub const PERPLEXITY_API_URL: &str = "https://api.perplexity.ai/chat/completions";

const DEFAULT_MODEL: &str = "sonar-pro";
const DEFAULT_RECENCY: &str = "week";
const DEFAULT_TEMPERATURE: f32 = 0.2;
const DEFAULT_TOP_P: f32 = 0.9;

/// Research service settings
#[derive(Debug, Clone, PartialEq)]
pub struct ResearchConfig {
    pub api_key: String,
    pub endpoint: String,
    pub model: String,
    pub temperature: f32,
    pub top_p: f32,
    /// Perplexity `search_recency_filter` ("day", "week", "month", ...)
    pub recency: String,
}

impl ResearchConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: PERPLEXITY_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            top_p: DEFAULT_TOP_P,
            recency: DEFAULT_RECENCY.to_string(),
        }
    }

    /// Load configuration from environment variables
    ///
    /// Expects:
    /// - PERPLEXITY_API_KEY: API key (required)
    /// - PERPLEXITY_MODEL: model name (optional, defaults to sonar-pro)
    /// - PERPLEXITY_RECENCY: search recency filter (optional, defaults to week)
    pub fn from_env() -> TourneyResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with a custom variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> TourneyResult<Self> {
        let api_key = lookup("PERPLEXITY_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| TourneyError::config("PERPLEXITY_API_KEY is not configured"))?;

        let mut config = Self::new(api_key);
        if let Some(model) = lookup("PERPLEXITY_MODEL").filter(|m| !m.is_empty()) {
            config.model = model;
        }
        if let Some(recency) = lookup("PERPLEXITY_RECENCY").filter(|r| !r.is_empty()) {
            config.recency = recency;
        }
        Ok(config)
    }

    /// Value for the `Authorization` header
    pub fn bearer_token(&self) -> String {
        format!("Bearer {}", self.api_key)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Request body for the chat-completions endpoint
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub top_p: f32,
    pub return_images: bool,
    pub return_related_questions: bool,
    pub search_recency_filter: String,
    pub stream: bool,
}

impl ChatCompletionRequest {
    pub fn new(config: &ResearchConfig, prompt: &ResearchPrompt) -> Self {
        Self {
            model: config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: prompt.system.clone(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt.user.clone(),
                },
            ],
            temperature: config.temperature,
            top_p: config.top_p,
            return_images: false,
            return_related_questions: false,
            search_recency_filter: config.recency.clone(),
            stream: false,
        }
    }
}

/// Response body of the chat-completions endpoint
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<CompletionChoice>,
    #[serde(default)]
    pub citations: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompletionChoice {
    #[serde(default)]
    pub message: Option<CompletionMessage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompletionMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl CompletionResponse {
    /// Parse a response body
    pub fn from_json(body: &str) -> TourneyResult<Self> {
        serde_json::from_str(body)
            .map_err(|e| TourneyError::api(format!("Failed to parse research response: {}", e)))
    }

    /// First choice's content (empty when absent) and the citation URLs
    pub fn into_answer(self) -> ResearchAnswer {
        let content = self
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .unwrap_or_default();

        ResearchAnswer::new(content, self.citations)
    }
}

/// Error for a non-success HTTP status from the research service
pub fn upstream_error(status: u16, body: &str) -> TourneyError {
    TourneyError::upstream(status, format!("Perplexity API error: {} - {}", status, body))
}
