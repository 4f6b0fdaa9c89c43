//! Research service for bracket discovery and matchup analysis
//!
//! This service validates requests, builds prompts, asks the research source, and runs
//! the extraction engine over the answer. Source and validation failures are returned
//! as errors; text that cannot be parsed never is.

use std::sync::Arc;

use tourney_core::{
    BracketResponse, MatchupRequest, MatchupResponse, TourneyResult, TournamentRequest,
};
use tourney_research::{
    assemble_bracket, bracket_prompt, extract_recommendation, format_research, matchup_prompt,
    ResearchSource,
};
use tracing::{info, instrument};

/// Service for tournament and matchup research
#[derive(Clone)]
pub struct ResearchService {
    source: Arc<dyn ResearchSource>,
}

impl ResearchService {
    pub fn new(source: Arc<dyn ResearchSource>) -> Self {
        Self { source }
    }

    /// Find the bracket of a tournament
    #[instrument(skip(self))]
    pub async fn research_tournament(
        &self,
        request: &TournamentRequest,
    ) -> TourneyResult<BracketResponse> {
        request.validate()?;

        let prompt = bracket_prompt(&request.sport, &request.tournament);
        let answer = self.source.ask(&prompt).await?;

        let bracket = assemble_bracket(&answer.content, &request.sport, &request.tournament);
        let formatted = format_research(&answer.content, &answer.citations);

        info!(
            "Found {} rounds with {} matchups for {}",
            bracket.rounds.len(),
            bracket.total_matchups(),
            request.tournament
        );

        Ok(BracketResponse {
            research: formatted.research,
            bracket,
        })
    }

    /// Research a single matchup and derive a pick
    #[instrument(skip(self))]
    pub async fn research_matchup(
        &self,
        request: &MatchupRequest,
    ) -> TourneyResult<MatchupResponse> {
        request.validate()?;

        let prompt = matchup_prompt(request);
        let answer = self.source.ask(&prompt).await?;

        let formatted = format_research(&answer.content, &answer.citations);
        let recommendation =
            extract_recommendation(&answer.content, &request.team1, &request.team2);

        info!(
            citations = formatted.citations.len(),
            has_recommendation = recommendation.is_some(),
            "Researched {} vs {}",
            request.team1,
            request.team2
        );

        Ok(MatchupResponse {
            research: formatted.research,
            citations: formatted.citations,
            recommendation,
        })
    }
}
