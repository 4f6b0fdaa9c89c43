//! Round header classification
//!
//! A line is a round header when it mentions one of a fixed vocabulary of tournament
//! stage names. Patterns are tried top-down and the first hit wins, so the order of
//! [`ROUND_VOCABULARY`] decides which stage a line like "Conference Semifinals" gets.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Which vocabulary entry classified a header line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundStage {
    FirstRound,
    /// "Round of 64", "Round of 16", ...
    RoundOf,
    RoundOne,
    SecondRound,
    SweetSixteen,
    EliteEight,
    FinalFour,
    Championship,
    Semifinals,
    Quarterfinals,
    WildCard,
    Divisional,
    ConferenceFinals,
    /// League-branded finals such as the NBA Finals
    LeagueFinals,
    SuperBowl,
    OpeningRound,
    EasternConference,
    WesternConference,
    Playoffs,
}

/// Ordered (pattern, stage) table; matching is case-insensitive
pub const ROUND_VOCABULARY: &[(&str, RoundStage)] = &[
    (r"first\s*round", RoundStage::FirstRound),
    (r"round\s*of\s*(\d+)", RoundStage::RoundOf),
    (r"round\s*1", RoundStage::RoundOne),
    (r"second\s*round", RoundStage::SecondRound),
    (r"sweet\s*(?:16|sixteen)", RoundStage::SweetSixteen),
    (r"elite\s*(?:8|eight)", RoundStage::EliteEight),
    (r"final\s*four", RoundStage::FinalFour),
    (r"championship", RoundStage::Championship),
    (r"semifinals?", RoundStage::Semifinals),
    (r"quarterfinals?", RoundStage::Quarterfinals),
    (r"wild\s*card", RoundStage::WildCard),
    (r"divisional", RoundStage::Divisional),
    (r"conference\s*(?:finals?|semifinals?)", RoundStage::ConferenceFinals),
    (r"nba\s*finals?", RoundStage::LeagueFinals),
    (r"super\s*bowl", RoundStage::SuperBowl),
    (r"opening\s*round", RoundStage::OpeningRound),
    (r"eastern\s*conference", RoundStage::EasternConference),
    (r"western\s*conference", RoundStage::WesternConference),
    (r"playoffs", RoundStage::Playoffs),
];

static ROUND_PATTERNS: LazyLock<Vec<(Regex, RoundStage)>> = LazyLock::new(|| {
    ROUND_VOCABULARY
        .iter()
        .map(|(pattern, stage)| {
            let regex = Regex::new(&format!("(?i){}", pattern)).expect("Invalid round pattern");
            (regex, *stage)
        })
        .collect()
});

static LEADING_MARKERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[*#\-:\s]+").expect("Invalid marker regex"));

static ORDINAL_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s*").expect("Invalid ordinal regex"));

static EMPHASIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[*#]+").expect("Invalid emphasis regex"));

/// A line recognised as the start of a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundHeader {
    pub stage: RoundStage,
    /// The line with list markers, numbering and emphasis removed
    pub label: String,
}

/// Classify `line` as a round header, or `None` if no stage name appears in it
pub fn classify_round_header(line: &str) -> Option<RoundHeader> {
    let stage = ROUND_PATTERNS
        .iter()
        .find(|(regex, _)| regex.is_match(line))
        .map(|(_, stage)| *stage)?;

    Some(RoundHeader {
        stage,
        label: clean_round_label(line),
    })
}

fn clean_round_label(line: &str) -> String {
    let label = LEADING_MARKERS.replace(line, "");
    let label = ORDINAL_PREFIX.replace(label.trim(), "");
    EMPHASIS.replace_all(&label, "").trim().to_string()
}
