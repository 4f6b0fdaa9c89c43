//! Head-to-head matchup line parsing

use std::sync::LazyLock;

use regex::{Captures, Regex};
use tourney_core::Matchup;

/// Longest team name accepted, in characters
pub const MAX_TEAM_NAME_LEN: usize = 50;

/// Matchup forms in precedence order. Every pattern captures
/// (seed1, team1, seed2, team2); seeds are optional groups.
static MATCHUP_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // "(1) Duke vs (16) Mercer"
        r"(?i)\((\d+)\)\s*([A-Za-z0-9\s.\-']+?)\s+(?:vs\.?|versus|v\.)\s+\((\d+)\)\s*([A-Za-z0-9\s.\-']+)",
        // "#1 Duke vs #16 Mercer", "Chiefs at Bills", "Celtics @ Heat"
        r"(?i)(?:#?(\d+)\s+)?([A-Za-z0-9\s.\-']+?)\s+(?:vs\.?|versus|v\.|at|@)\s+(?:#?(\d+)\s+)?([A-Za-z0-9\s.\-']+)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("Invalid matchup pattern"))
    .collect()
});

static TRAILING_PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[*#\-:]+$").expect("Invalid punctuation regex"));

static LIST_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:-+\s*|\d+\.\s+)").expect("Invalid list marker regex"));

/// A spaced hyphen starts the "- date, time" suffix of a schedule line
static SCHEDULE_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+-.*$").expect("Invalid schedule suffix regex"));

/// Parse `line` as a pairing of two teams with optional seeds
///
/// Returns `None` when no pattern matches or when either cleaned name fails
/// [`is_valid_team_name`]. Date and time are left unset; see
/// [`crate::datetime::extract_schedule`].
pub fn parse_matchup_line(line: &str) -> Option<Matchup> {
    let caps = MATCHUP_PATTERNS.iter().find_map(|re| re.captures(line))?;

    let team1 = clean_team_name(&LIST_MARKER.replace(capture(&caps, 2)?.trim(), ""));
    let team2 = clean_team_name(&SCHEDULE_SUFFIX.replace(capture(&caps, 4)?, ""));

    if !is_valid_team_name(&team1) || !is_valid_team_name(&team2) || team1 == team2 {
        return None;
    }

    Some(Matchup::new(team1, team2).with_seeds(seed(&caps, 1), seed(&caps, 3)))
}

/// Trim and strip trailing markdown/punctuation (`*#-:`)
pub fn clean_team_name(raw: &str) -> String {
    TRAILING_PUNCTUATION.replace(raw.trim(), "").trim().to_string()
}

/// A team name is usable when it has more than one and at most
/// [`MAX_TEAM_NAME_LEN`] characters
pub fn is_valid_team_name(name: &str) -> bool {
    let len = name.chars().count();
    len > 1 && len <= MAX_TEAM_NAME_LEN
}

fn capture<'t>(caps: &Captures<'t>, idx: usize) -> Option<&'t str> {
    caps.get(idx).map(|m| m.as_str())
}

fn seed(caps: &Captures<'_>, idx: usize) -> Option<u32> {
    capture(caps, idx).and_then(|s| s.parse().ok())
}
