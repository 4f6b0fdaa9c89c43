//! Bracket data structures: rounds of head-to-head matchups

use serde::{Deserialize, Serialize};

/// A tournament bracket as extracted from research text
///
/// `tournament` and `sport` are always the caller-supplied values; they are never
/// derived from the parsed text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bracket {
    pub tournament: String,
    pub sport: String,
    /// Rounds in the order they were discovered in the source text
    pub rounds: Vec<Round>,
}

impl Bracket {
    pub fn new(tournament: impl Into<String>, sport: impl Into<String>, rounds: Vec<Round>) -> Self {
        Self {
            tournament: tournament.into(),
            sport: sport.into(),
            rounds,
        }
    }

    /// The first matchup of the first round, where a prediction walk-through starts
    pub fn first_matchup(&self) -> Option<&Matchup> {
        self.rounds.first().and_then(|r| r.matchups.first())
    }

    /// Total number of matchups across all rounds
    pub fn total_matchups(&self) -> usize {
        self.rounds.iter().map(|r| r.matchups.len()).sum()
    }
}

/// One stage of a tournament
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    /// Cleaned round label (e.g., "Round of 16", "Quarterfinals")
    pub round_name: String,
    pub matchups: Vec<Matchup>,
}

impl Round {
    pub fn new(round_name: impl Into<String>, matchups: Vec<Matchup>) -> Self {
        Self {
            round_name: round_name.into(),
            matchups,
        }
    }
}

/// A single head-to-head pairing
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Matchup {
    pub team1: String,
    pub team2: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed1: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed2: Option<u32>,

    /// Scheduled date as written in the source (e.g., "January 1, 2025")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Scheduled time as written in the source (e.g., "5:00 PM ET")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<String>,
}

impl Matchup {
    /// Unseeded, unscheduled pairing
    pub fn new(team1: impl Into<String>, team2: impl Into<String>) -> Self {
        Self {
            team1: team1.into(),
            team2: team2.into(),
            ..Default::default()
        }
    }

    pub fn with_seeds(mut self, seed1: Option<u32>, seed2: Option<u32>) -> Self {
        self.seed1 = seed1;
        self.seed2 = seed2;
        self
    }

    pub fn with_schedule(mut self, date: Option<String>, time: Option<String>) -> Self {
        self.date = date;
        self.time = time;
        self
    }
}
