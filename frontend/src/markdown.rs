use std::sync::LazyLock;

use regex::Regex;

static BOLD: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").ok());

/// Converts a backend Markdown reply into HTML for `inner_html`.
pub fn render(text: &str) -> String {
    #[cfg(feature = "commonmark")]
    {
        commonmark(text)
    }
    #[cfg(not(feature = "commonmark"))]
    {
        bold_only(text)
    }
}

/// CommonMark with the GitHub extensions the backend's tables and lists use.
/// Raw HTML in the source is emitted as text.
#[cfg(feature = "commonmark")]
pub fn commonmark(text: &str) -> String {
    use pulldown_cmark::{html, Event, Options, Parser};

    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;
    let events = Parser::new_ext(text, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut out = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut out, events);
    out
}

/// Minimal formatting used when the CommonMark renderer is compiled out.
#[cfg_attr(feature = "commonmark", allow(dead_code))]
pub fn bold_only(text: &str) -> String {
    match BOLD.as_ref() {
        Some(re) => re.replace_all(text, "<strong>$1</strong>").into_owned(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_only_wraps_every_pair() {
        assert_eq!(
            bold_only("**Retainer**: 50k, **Hourly**: 5k"),
            "<strong>Retainer</strong>: 50k, <strong>Hourly</strong>: 5k"
        );
    }

    #[test]
    fn bold_only_leaves_unpaired_markers() {
        assert_eq!(bold_only("**open"), "**open");
    }

    #[cfg(feature = "commonmark")]
    #[test]
    fn commonmark_renders_lists_and_tables() {
        let html = commonmark("1. One\n2. Two\n\n| Fee | INR |\n|---|---|\n| Flat | 10k |\n");
        assert!(html.contains("<ol>"));
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>Flat</td>"));
    }

    #[cfg(feature = "commonmark")]
    #[test]
    fn commonmark_escapes_raw_html() {
        let html = commonmark("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
