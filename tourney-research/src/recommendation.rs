//! Winner recommendation extraction
//!
//! The research prompt asks the service to finish with a block like
//!
//! ```text
//! PREDICTION:
//! Winner: Duke
//! Confidence: 85
//! Rationale: Better depth.
//! ```
//!
//! When that block is missing, a weaker pick is derived from "favored"-style phrasing
//! near one of the team names.

use std::sync::LazyLock;

use regex::Regex;
use tourney_core::Recommendation;
use tracing::debug;

/// Confidence used when the prediction block has no `Confidence:` line
pub const DEFAULT_CONFIDENCE: u8 = 70;

/// Confidence assigned to a pick derived from favored-style phrasing
pub const SENTIMENT_CONFIDENCE: u8 = 60;

/// Characters inspected on each side of a favored-style phrase
pub const SENTIMENT_WINDOW: usize = 100;

pub const DEFAULT_RATIONALE: &str =
    "Based on overall analysis of recent performance and matchup factors.";

pub const SENTIMENT_RATIONALE: &str = "Based on expert analysis indicating this team is favored.";

static PREDICTION_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)PREDICTION:.*?Winner:\s*([^\r\n]+)").expect("Invalid prediction regex")
});

static CONFIDENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Confidence:\s*(-?\d+)").expect("Invalid confidence regex"));

static RATIONALE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Rationale:\s*([^\r\n]+)").expect("Invalid rationale regex"));

static WINNER_TRAILING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[*#\-:.,!]+$").expect("Invalid winner cleanup regex"));

static FAVORED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)favou?red|expected to win|likely to win|should win|projected winner")
        .expect("Invalid favored regex")
});

/// Derive a recommendation for `team1` vs `team2` from research text
///
/// A `PREDICTION:` block always takes precedence; the favored-phrase heuristic only
/// runs when there is no such block.
pub fn extract_recommendation(content: &str, team1: &str, team2: &str) -> Option<Recommendation> {
    if let Some(caps) = PREDICTION_BLOCK.captures(content) {
        let (Some(block), Some(winner)) = (caps.get(0), caps.get(1)) else {
            return None;
        };
        // Confidence and rationale are read from the block onward
        return Some(parse_prediction_block(
            &content[block.start()..],
            winner.as_str(),
            team1,
            team2,
        ));
    }

    favored_pick(content, team1, team2)
}

fn parse_prediction_block(
    block: &str,
    raw_winner: &str,
    team1: &str,
    team2: &str,
) -> Recommendation {
    let winner = clean_winner(raw_winner);

    let confidence = CONFIDENCE
        .captures(block)
        .and_then(|caps| caps.get(1))
        .map(|m| parse_confidence(m.as_str()))
        .unwrap_or(DEFAULT_CONFIDENCE);

    let rationale = RATIONALE
        .captures(block)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|r| !r.is_empty())
        .unwrap_or_else(|| DEFAULT_RATIONALE.to_string());

    Recommendation {
        winner: normalize_winner(&winner, team1, team2),
        confidence,
        rationale,
    }
}

fn clean_winner(raw: &str) -> String {
    let winner = raw.replace("**", "");
    WINNER_TRAILING.replace(winner.trim(), "").trim().to_string()
}

/// Clamp a signed integer string into 0..=100; overlong digit runs saturate
pub fn parse_confidence(raw: &str) -> u8 {
    let value = raw.parse::<i64>().unwrap_or(if raw.starts_with('-') {
        i64::MIN
    } else {
        i64::MAX
    });
    value.clamp(0, 100) as u8
}

/// Map an extracted winner onto one of the two team names
///
/// Matches when either string contains the other, ignoring case; `team1` is checked
/// first. When one team name is contained in the other ("Ohio" and "Ohio State") the
/// first team checked wins. An unmatched winner is returned unchanged.
pub fn normalize_winner(winner: &str, team1: &str, team2: &str) -> String {
    let winner_lower = winner.to_lowercase();
    let matches = |team: &str| {
        let team_lower = team.to_lowercase();
        !team_lower.is_empty()
            && (winner_lower.contains(&team_lower) || team_lower.contains(&winner_lower))
    };

    if matches(team1) {
        team1.to_string()
    } else if matches(team2) {
        team2.to_string()
    } else {
        winner.to_string()
    }
}

fn favored_pick(content: &str, team1: &str, team2: &str) -> Option<Recommendation> {
    let phrase = FAVORED.find(content)?;
    let window = surrounding_window(content, phrase.start(), SENTIMENT_WINDOW).to_lowercase();

    let winner = [team1, team2]
        .into_iter()
        .find(|team| !team.is_empty() && window.contains(&team.to_lowercase()))?;

    debug!("Derived pick from favored phrasing: {}", winner);

    Some(Recommendation {
        winner: winner.to_string(),
        confidence: SENTIMENT_CONFIDENCE,
        rationale: SENTIMENT_RATIONALE.to_string(),
    })
}

/// Up to `radius` characters before and after byte offset `at`
fn surrounding_window(content: &str, at: usize, radius: usize) -> &str {
    let start = content[..at]
        .char_indices()
        .rev()
        .nth(radius - 1)
        .map(|(idx, _)| idx)
        .unwrap_or(0);
    let end = content[at..]
        .char_indices()
        .nth(radius)
        .map(|(idx, _)| at + idx)
        .unwrap_or(content.len());
    &content[start..end]
}
