//! Date and time extraction from a single schedule line

use std::sync::LazyLock;

use regex::Regex;

static DATE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // "January 5, 2025", "March 20-21"
        r"(?i)\b((?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{1,2}(?:-\d{1,2})?(?:,?\s*\d{4})?)\b",
        // "Jan. 5, 2025", "Sept 9"
        r"(?i)\b((?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Sept|Oct|Nov|Dec)\.?\s+\d{1,2}(?:-\d{1,2})?(?:,?\s*\d{4})?)\b",
        // "1/5/2025", "01-05-25", "3/21"
        r"\b(\d{1,2}[/\-]\d{1,2}(?:[/\-]\d{2,4})?)\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("Invalid date pattern"))
    .collect()
});

static TIME_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // "5:00 PM ET", "7:30pm", "12:00"
        r"(?i)\b(\d{1,2}:\d{2}\s*(?:AM|PM|a\.m\.|p\.m\.)?(?:\s*(?:EST|PST|CST|MST|ET|PT|CT|MT|Eastern|Pacific))?)\b",
        // "5 PM ET", "3pm"
        r"(?i)\b(\d{1,2}\s*(?:AM|PM|a\.m\.|p\.m\.)(?:\s*(?:EST|PST|CST|MST|ET|PT|CT|MT|Eastern|Pacific))?)\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("Invalid time pattern"))
    .collect()
});

/// Optional date and time found on a line; each is independent of the other
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    pub date: Option<String>,
    pub time: Option<String>,
}

/// Pull a date and a time out of `line`
///
/// When the line has a dash-family separator (`-`, `–`, `—`) only the text after the
/// first one is searched, so team names and seeds before it cannot be mistaken for a
/// numeric date. Later dashes in that text are read as `-`.
pub fn extract_schedule(line: &str) -> Schedule {
    let suffix = after_separator(line);
    let search_text = suffix.as_deref().unwrap_or(line);

    Schedule {
        date: first_capture(&DATE_PATTERNS, search_text),
        time: first_capture(&TIME_PATTERNS, search_text),
    }
}

fn is_dash(c: char) -> bool {
    matches!(c, '-' | '–' | '—')
}

fn after_separator(line: &str) -> Option<String> {
    let (idx, sep) = line.char_indices().find(|(_, c)| is_dash(*c))?;
    let rest: String = line[idx + sep.len_utf8()..]
        .chars()
        .map(|c| if is_dash(c) { '-' } else { c })
        .collect();
    (!rest.is_empty()).then_some(rest)
}

fn first_capture(patterns: &[Regex], text: &str) -> Option<String> {
    patterns
        .iter()
        .find_map(|re| re.captures(text))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}
