//! Prompts for bracket discovery and matchup research

use tourney_core::MatchupRequest;

use crate::source::ResearchPrompt;

pub const SYSTEM_PROMPT: &str = "You are a sports research assistant. Provide accurate, \
well-sourced information about sports tournaments, teams, and matchups. Be concise but \
comprehensive.";

/// Ask for the current bracket, one round header followed by its matchup lines
pub fn bracket_prompt(sport: &str, tournament: &str) -> ResearchPrompt {
    let user = format!(
        r#"Find the current bracket/lineup for the {tournament} {sport} tournament. Search for the latest official bracket announcements, matchups, seeds, and participating teams. List each round and the matchups within each round. For each matchup, include the scheduled date and time if available. Format: Round Name followed by matchups in "Team A vs Team B - Date, Time" format (e.g., "Ohio State vs Oregon - January 1, 2025, 5:00 PM ET")."#,
        tournament = tournament,
        sport = sport,
    );

    ResearchPrompt {
        system: SYSTEM_PROMPT.to_string(),
        user,
    }
}

/// Ask for a matchup breakdown ending in a machine-readable prediction block
pub fn matchup_prompt(request: &MatchupRequest) -> ResearchPrompt {
    let user = format!(
        r#"Research the matchup between {team1} and {team2}{context}. Provide:
1) Recent performance stats and records for both teams
2) Head-to-head history (recent games if any)
3) Key player injuries or availability issues
4) Expert predictions and betting lines if available
5) Recent news affecting either team

After your analysis, you MUST provide a prediction in exactly this format at the end:

PREDICTION:
Winner: [exact team name - must be either "{team1}" or "{team2}"]
Confidence: [number 1-100]
Rationale: [one sentence explaining your pick]

Base your prediction on the data you found. Be decisive."#,
        team1 = request.team1,
        team2 = request.team2,
        context = request.context_phrase(),
    );

    ResearchPrompt {
        system: SYSTEM_PROMPT.to_string(),
        user,
    }
}
