//! Extraction engine for tournament research answers
//!
//! Turns the free text returned by a sports research service into typed data: a
//! bracket of rounds and matchups, a win recommendation, and citation-linked display
//! markup. Every function here is pure and never fails on malformed text; the weakest
//! outcome is a placeholder bracket or an absent recommendation.

pub mod bracket;
pub mod citations;
pub mod datetime;
pub mod matchup;
pub mod perplexity;
pub mod prompts;
pub mod recommendation;
pub mod round_header;
pub mod source;

pub use bracket::{assemble_bracket, extract_rounds, ExtractionStrategy};
pub use citations::{build_citations, format_research, FormattedResearch};
pub use datetime::{extract_schedule, Schedule};
pub use matchup::parse_matchup_line;
pub use perplexity::{ChatCompletionRequest, CompletionResponse, ResearchConfig};
pub use prompts::{bracket_prompt, matchup_prompt};
pub use recommendation::extract_recommendation;
pub use round_header::{classify_round_header, RoundHeader, RoundStage};
pub use source::{ResearchAnswer, ResearchPrompt, ResearchSource};
