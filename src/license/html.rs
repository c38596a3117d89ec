use std::sync::LazyLock;

use regex::Regex;

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("valid url regex"));

static HTML_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<!doctype|<html").expect("valid html regex"));

static CANONICAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)rel=["']canonical["'][^>]*href=["']([^"']+)["']"#)
        .expect("valid canonical regex")
});

/// Whether `text` looks like an HTML document rather than license text.
pub fn looks_like_html(text: &str) -> bool {
    HTML_RE.is_match(text)
}

/// First bare `http(s)://` URL in `text`, up to the next whitespace.
pub fn first_url(text: &str) -> Option<&str> {
    URL_RE.find(text).map(|m| m.as_str())
}

/// URL from a `rel="canonical" ... href="..."` link tag.
pub fn canonical_url(html: &str) -> Option<&str> {
    CANONICAL_RE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// The canonical link if the page declares one, else the first bare URL.
pub fn url_from_html(html: &str) -> Option<&str> {
    canonical_url(html).or_else(|| first_url(html))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_markers() {
        assert!(looks_like_html("<!DOCTYPE html><html></html>"));
        assert!(looks_like_html("  <HTML lang=\"en\">"));
        assert!(!looks_like_html("Apache License\nVersion 2.0"));
        assert!(!looks_like_html("see <b>LICENSE</b>"));
    }

    #[test]
    fn test_first_url_stops_at_whitespace() {
        assert_eq!(
            first_url("See https://www.apache.org/licenses/LICENSE-2.0.txt for details"),
            Some("https://www.apache.org/licenses/LICENSE-2.0.txt")
        );
        assert_eq!(first_url("no link here"), None);
        assert_eq!(first_url("ftp://example.com"), None);
    }

    #[test]
    fn test_canonical_preferred() {
        let page = r#"<!doctype html><html><head>
<link href="https://cdn.example.com/style.css" rel="stylesheet">
<link rel="canonical" href="https://opensource.org/license/mit/">
</head></html>"#;
        assert_eq!(canonical_url(page), Some("https://opensource.org/license/mit/"));
        assert_eq!(url_from_html(page), Some("https://opensource.org/license/mit/"));
    }

    #[test]
    fn test_canonical_single_quotes_case_insensitive() {
        let page = "<LINK REL='Canonical' HREF='https://example.org/license'>";
        assert_eq!(canonical_url(page), Some("https://example.org/license"));
    }

    #[test]
    fn test_falls_back_to_first_url() {
        let page = r#"<html><a href="https://example.org/terms">terms</a></html>"#;
        assert_eq!(canonical_url(page), None);
        // Bare URL match runs to the next whitespace, quotes and markup included.
        assert_eq!(
            url_from_html(page),
            Some(r#"https://example.org/terms">terms</a></html>"#)
        );
        assert_eq!(url_from_html("<html><body>none</body></html>"), None);
    }
}
