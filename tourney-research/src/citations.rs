//! Citation records and display markup for research text
//!
//! Research answers arrive as markdown-ish prose with inline `[n]` markers that refer
//! to the n-th URL of the answer's citation list. Rendering turns paragraphs and line
//! breaks into markup, converts `**bold**`/`*italic*`, and links each marker to its URL.
//! Rendering already-rendered text leaves it unchanged.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tourney_core::Citation;
use url::Url;

const FALLBACK_SOURCE: &str = "Source";

static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").expect("Invalid bold regex"));

static ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^*]+)\*").expect("Invalid italic regex"));

/// Rendered research text and the citations it links to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedResearch {
    pub research: String,
    pub citations: Vec<Citation>,
}

/// Build citations for `urls` and render `content` with linked markers
pub fn format_research(content: &str, urls: &[String]) -> FormattedResearch {
    let research = link_citation_markers(&render_markup(content), urls);

    FormattedResearch {
        research,
        citations: build_citations(urls),
    }
}

/// Number `urls` from 1 in the order given
pub fn build_citations(urls: &[String]) -> Vec<Citation> {
    urls.iter()
        .enumerate()
        .map(|(idx, url)| {
            let number = idx + 1;
            Citation {
                number,
                url: url.clone(),
                source: Some(source_name(url)),
                title: Some(format!("Reference {}", number)),
            }
        })
        .collect()
}

/// Host of `url` without a leading "www.", or "Source" when it has none
pub fn source_name(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_string))
        .map(|host| host.strip_prefix("www.").map(str::to_string).unwrap_or(host))
        .unwrap_or_else(|| FALLBACK_SOURCE.to_string())
}

/// Paragraphs, line breaks and emphasis
///
/// Blank paragraphs are dropped and blank input renders to an empty string.
///
/// Text that is already rendered is returned as is, so emphasis never reaches the
/// `href` of a linked marker.
pub fn render_markup(content: &str) -> String {
    if is_rendered(content) {
        return content.to_string();
    }

    let normalized = content.replace("\r\n", "\n");
    let paragraphs: Vec<&str> = normalized
        .split("\n\n")
        .map(|p| p.trim_matches('\n'))
        .filter(|p| !p.trim().is_empty())
        .collect();
    if paragraphs.is_empty() {
        return String::new();
    }
    let body = format!("<p>{}</p>", paragraphs.join("</p><p>").replace('\n', "<br>"));

    let body = BOLD.replace_all(&body, "<strong>$1</strong>");
    ITALIC.replace_all(&body, "<em>$1</em>").into_owned()
}

fn is_rendered(content: &str) -> bool {
    content.starts_with("<p>") && content.ends_with("</p>") && !content.contains('\n')
}

/// Replace `[n]` markers with links to `urls[n - 1]`
///
/// Numbers are processed from the highest down to 1, and markers that are already
/// the text of a link are left alone.
pub fn link_citation_markers(html: &str, urls: &[String]) -> String {
    (1..=urls.len()).rev().fold(html.to_string(), |text, number| {
        let marker = format!("[{}]", number);
        let link = citation_link(number, &urls[number - 1]);
        replace_unlinked(&text, &marker, &link)
    })
}

fn citation_link(number: usize, url: &str) -> String {
    format!(
        r#"<sup><a href="{}" target="_blank" rel="noopener noreferrer">[{}]</a></sup>"#,
        url.replace('"', "%22"),
        number
    )
}

fn replace_unlinked(text: &str, marker: &str, replacement: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find(marker) {
        let after = &rest[pos + marker.len()..];
        out.push_str(&rest[..pos]);
        if after.starts_with("</a>") {
            out.push_str(marker);
        } else {
            out.push_str(replacement);
        }
        rest = after;
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls() -> Vec<String> {
        vec!["https://www.espn.com/a".to_string(), "https://si.com/b".to_string()]
    }

    #[test]
    fn test_build_citations() {
        let citations = build_citations(&urls());
        assert_eq!(citations.len(), 2);
        assert_eq!(citations[0].number, 1);
        assert_eq!(citations[0].source.as_deref(), Some("espn.com"));
        assert_eq!(citations[0].title.as_deref(), Some("Reference 1"));
        assert_eq!(citations[1].number, 2);
        assert_eq!(citations[1].source.as_deref(), Some("si.com"));
        assert_eq!(citations[1].url, "https://si.com/b");
    }

    #[test]
    fn test_source_name_fallback() {
        assert_eq!(source_name("not a url"), "Source");
        assert_eq!(source_name("mailto:someone@example.com"), "Source");
        assert_eq!(source_name("https://stats.www.ncaa.com/x"), "stats.www.ncaa.com");
    }

    #[test]
    fn test_render_paragraphs_and_breaks() {
        let rendered = render_markup("Intro line\nsecond line\n\nNext paragraph");
        assert_eq!(rendered, "<p>Intro line<br>second line</p><p>Next paragraph</p>");
    }

    #[test]
    fn test_empty_paragraphs_are_collapsed() {
        let rendered = render_markup("One\n\n\n\n\nTwo\r\n\r\n");
        assert_eq!(rendered, "<p>One</p><p>Two</p>");
        assert_eq!(render_markup("  \n\n "), "");
    }

    #[test]
    fn test_render_emphasis() {
        let rendered = render_markup("**Duke** is *heavily* favored");
        assert_eq!(rendered, "<p><strong>Duke</strong> is <em>heavily</em> favored</p>");
    }

    #[test]
    fn test_markers_are_linked() {
        let formatted = format_research("Duke leads [1] and Mercer trails [2].", &urls());
        assert!(formatted.research.contains(
            r#"<a href="https://www.espn.com/a" target="_blank" rel="noopener noreferrer">[1]</a>"#
        ));
        assert!(formatted.research.contains(r#"<a href="https://si.com/b""#));
        assert_eq!(formatted.citations.len(), 2);
    }

    #[test]
    fn test_multi_digit_markers_do_not_collide() {
        let urls: Vec<String> = (1..=10).map(|i| format!("https://example.com/{}", i)).collect();
        let html = link_citation_markers("see [10] and [1]", &urls);
        assert!(html.contains(r#"href="https://example.com/10" target="_blank" rel="noopener noreferrer">[10]</a>"#));
        assert!(html.contains(r#"href="https://example.com/1" target="_blank" rel="noopener noreferrer">[1]</a>"#));
        assert_eq!(html.matches("<sup>").count(), 2);
    }

    #[test]
    fn test_markers_without_url_are_kept() {
        let html = link_citation_markers("claim [3]", &urls());
        assert_eq!(html, "claim [3]");
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let content = "**Duke** vs Mercer [1]\n\nKentucky *should* win [2] [10]";
        let once = format_research(content, &urls());
        let twice = format_research(&once.research, &urls());
        assert_eq!(once.research, twice.research);
        assert_eq!(once.research.matches("<p>").count(), 2);
        assert_eq!(once.research.matches("<sup>").count(), 2);

        let starred: Vec<String> = vec!["https://x.com/a*b".to_string(), "https://y.com/c*d".to_string()];
        let once = format_research("Duke [1] and Mercer [2]", &starred);
        let twice = format_research(&once.research, &starred);
        assert_eq!(once.research, twice.research);
        assert!(twice.research.contains(r#"href="https://x.com/a*b""#));
        assert!(twice.research.contains(r#"href="https://y.com/c*d""#));
        assert!(!twice.research.contains("<em>"));
    }

    #[test]
    fn test_no_urls() {
        let formatted = format_research("Nothing cited [1]", &[]);
        assert!(formatted.citations.is_empty());
        assert_eq!(formatted.research, "<p>Nothing cited [1]</p>");
    }
}
