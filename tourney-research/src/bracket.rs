//! Bracket assembly from free-form research text
//!
//! The primary pass walks the text line by line: a round header opens a round and
//! matchup lines under it are collected. A round that closes with no matchups is
//! dropped. If that yields nothing, a loose "X vs Y" scan over the whole text is tried,
//! and if that also fails a fixed placeholder round is returned, so callers always get
//! at least one round to work with.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tourney_core::{Bracket, Matchup, Round};
use tracing::{debug, info, warn};

use crate::datetime::extract_schedule;
use crate::matchup::{is_valid_team_name, parse_matchup_line};
use crate::round_header::classify_round_header;

/// Round name used by both fallbacks
pub const FALLBACK_ROUND_NAME: &str = "First Round";

/// Maximum matchups taken by the loose scan
pub const MAX_LOOSE_MATCHUPS: usize = 16;

static LOOSE_VS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[A-Za-z]+(?:\s+[A-Za-z]+)*\s+(?:vs\.?|versus|v\.)\s+[A-Za-z]+(?:\s+[A-Za-z]+)*")
        .expect("Invalid loose matchup regex")
});

static LOOSE_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s+(?:vs\.?|versus|v\.)\s+").expect("Invalid loose separator regex")
});

/// Which strategy produced the rounds of a bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionStrategy {
    /// Round headers followed by matchup lines
    Structured,
    /// Loose "X vs Y" occurrences anywhere in the text
    LooseScan,
    /// Nothing recognisable; fixed two-matchup round
    Placeholder,
}

/// Build a bracket from `content`; `tournament` and `sport` are passed through untouched
pub fn assemble_bracket(content: &str, sport: &str, tournament: &str) -> Bracket {
    let (rounds, strategy) = extract_rounds(content);
    let bracket = Bracket::new(tournament, sport, rounds);

    info!(
        strategy = ?strategy,
        rounds = bracket.rounds.len(),
        matchups = bracket.total_matchups(),
        "Assembled bracket for {}",
        tournament
    );

    bracket
}

/// Run the primary pass and, if needed, the two fallbacks
///
/// Never returns an empty list.
pub fn extract_rounds(content: &str) -> (Vec<Round>, ExtractionStrategy) {
    debug!("Parsing bracket from content length: {}", content.len());

    let rounds = parse_structured_rounds(content);
    if !rounds.is_empty() {
        return (rounds, ExtractionStrategy::Structured);
    }

    if let Some(round) = scan_loose_matchups(content) {
        debug!("No round headers found, using {} loose matchups", round.matchups.len());
        return (vec![round], ExtractionStrategy::LooseScan);
    }

    warn!("No rounds parsed, using placeholder bracket");
    (vec![placeholder_round()], ExtractionStrategy::Placeholder)
}

/// Assembler state while walking the lines
#[derive(Debug)]
enum AssemblerState {
    NoRound,
    InRound { label: String, matchups: Vec<Matchup> },
}

impl AssemblerState {
    /// Close the open round, emitting it only if it collected a matchup
    fn close(self, rounds: &mut Vec<Round>) {
        if let AssemblerState::InRound { label, matchups } = self {
            if matchups.is_empty() {
                debug!("Discarding round with no matchups: {}", label);
            } else {
                rounds.push(Round::new(label, matchups));
            }
        }
    }

    fn step(self, line: &str, rounds: &mut Vec<Round>) -> Self {
        if let Some(header) = classify_round_header(line) {
            self.close(rounds);
            return AssemblerState::InRound {
                label: header.label,
                matchups: Vec::new(),
            };
        }

        match self {
            AssemblerState::NoRound => AssemblerState::NoRound,
            AssemblerState::InRound { label, mut matchups } => {
                if let Some(matchup) = parse_matchup_line(line) {
                    let schedule = extract_schedule(line);
                    matchups.push(matchup.with_schedule(schedule.date, schedule.time));
                }
                AssemblerState::InRound { label, matchups }
            }
        }
    }
}

/// Primary line-by-line pass
pub fn parse_structured_rounds(content: &str) -> Vec<Round> {
    let mut rounds = Vec::new();

    let state = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .fold(AssemblerState::NoRound, |state, line| state.step(line, &mut rounds));
    state.close(&mut rounds);

    rounds
}

/// First fallback: loose "X vs Y" pairs anywhere in the text, as a single round
///
/// A run may span line breaks and hold more than one separator; only the text on
/// either side of its first separator is used.
pub fn scan_loose_matchups(content: &str) -> Option<Round> {
    let matchups: Vec<Matchup> = LOOSE_VS
        .find_iter(content)
        .take(MAX_LOOSE_MATCHUPS)
        .filter_map(|run| {
            let mut parts = LOOSE_SEPARATOR.splitn(run.as_str(), 3);
            let team1 = parts.next()?.trim();
            let team2 = parts.next()?.trim();
            (is_valid_team_name(team1) && is_valid_team_name(team2) && team1 != team2)
                .then(|| Matchup::new(team1, team2))
        })
        .collect();

    if matchups.is_empty() {
        None
    } else {
        Some(Round::new(FALLBACK_ROUND_NAME, matchups))
    }
}

/// Second fallback: a fixed round so the bracket is never empty
pub fn placeholder_round() -> Round {
    Round::new(
        FALLBACK_ROUND_NAME,
        vec![Matchup::new("Team A", "Team B"), Matchup::new("Team C", "Team D")],
    )
}
