//! Request and response envelopes for bracket and matchup research

use serde::{Deserialize, Serialize};

use crate::bracket::Bracket;
use crate::citation::Citation;
use crate::error::{TourneyError, TourneyResult};
use crate::recommendation::Recommendation;

/// Request to find the bracket of a tournament
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentRequest {
    pub sport: String,
    pub tournament: String,
}

impl TournamentRequest {
    pub fn new(sport: impl Into<String>, tournament: impl Into<String>) -> Self {
        Self {
            sport: sport.into(),
            tournament: tournament.into(),
        }
    }

    pub fn validate(&self) -> TourneyResult<()> {
        require(&self.sport, "Sport is required")?;
        require(&self.tournament, "Tournament name is required")
    }
}

/// Request to research a single matchup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchupRequest {
    pub team1: String,
    pub team2: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sport: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tournament: Option<String>,
}

impl MatchupRequest {
    pub fn new(team1: impl Into<String>, team2: impl Into<String>) -> Self {
        Self {
            team1: team1.into(),
            team2: team2.into(),
            sport: None,
            tournament: None,
        }
    }

    pub fn with_context(mut self, sport: impl Into<String>, tournament: impl Into<String>) -> Self {
        self.sport = Some(sport.into());
        self.tournament = Some(tournament.into());
        self
    }

    pub fn validate(&self) -> TourneyResult<()> {
        require(&self.team1, "Team 1 is required")?;
        require(&self.team2, "Team 2 is required")
    }

    /// " in the {tournament} {sport}" when both are known, otherwise empty
    pub fn context_phrase(&self) -> String {
        match (self.sport.as_deref(), self.tournament.as_deref()) {
            (Some(sport), Some(tournament)) if !sport.is_empty() && !tournament.is_empty() => {
                format!(" in the {} {}", tournament, sport)
            }
            _ => String::new(),
        }
    }
}

fn require(value: &str, message: &str) -> TourneyResult<()> {
    if value.trim().is_empty() {
        return Err(TourneyError::validation(message));
    }
    Ok(())
}

/// Formatted research text plus the bracket extracted from it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketResponse {
    pub research: String,
    pub bracket: Bracket,
}

/// Formatted research text, its citations, and the pick if one could be derived
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchupResponse {
    pub research: String,
    pub citations: Vec<Citation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<Recommendation>,
}
