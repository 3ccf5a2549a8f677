//! Output-boundary handling for template payloads.
//!
//! Catalogs can be loaded from user files, so payloads are untrusted once
//! they leave the view layer. HTML output goes through an allow-list
//! sanitizer; terminal output has control characters removed.

use std::borrow::Cow;
use std::collections::{HashMap, HashSet};

use pulldown_cmark::{Options, Parser, html};

const ALLOWED_TAGS: &[&str] = &[
    "p", "br", "em", "strong", "del", "code", "pre", "blockquote", "ul", "ol", "li", "a", "h1",
    "h2", "h3", "h4", "table", "thead", "tbody", "tr", "th", "td",
];

/// Render a template payload as sanitized HTML.
///
/// Payloads that open with a tag are cleaned as HTML; anything else is
/// parsed as markdown first.
#[must_use]
pub fn render_template_html(content: &str) -> String {
    if looks_like_html(content) {
        sanitizer().clean(content).to_string()
    } else {
        sanitizer().clean(&markdown_to_html(content)).to_string()
    }
}

/// Remove control characters other than newline and tab.
///
/// Keeps escape sequences in catalog text from reaching a terminal.
#[must_use]
pub fn strip_control_chars(text: &str) -> Cow<'_, str> {
    let unsafe_char = |c: char| c.is_control() && c != '\n' && c != '\t';
    if text.chars().any(unsafe_char) {
        Cow::Owned(text.chars().filter(|&c| !unsafe_char(c)).collect())
    } else {
        Cow::Borrowed(text)
    }
}

fn markdown_to_html(input: &str) -> String {
    let parser = Parser::new_ext(input, Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH);
    let mut out = String::with_capacity(input.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

fn sanitizer() -> ammonia::Builder<'static> {
    let mut builder = ammonia::Builder::default();
    builder
        .tags(ALLOWED_TAGS.iter().copied().collect())
        .tag_attributes(HashMap::from([("a", HashSet::from(["href"]))]));
    builder
}

/// A payload is HTML when its first non-blank character opens a tag.
fn looks_like_html(input: &str) -> bool {
    let mut chars = input.trim_start().chars();
    chars.next() == Some('<')
        && chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '!')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markdown_payload_renders_headings_and_tables() {
        let html = render_template_html("# Title\n\n| A | B |\n| --- | --- |\n| 1 | 2 |\n");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>2</td>"));
    }

    #[test]
    fn html_payload_drops_scripts_and_handlers() {
        let html = render_template_html("<p onclick=\"x()\">Hi<script>alert(1)</script></p>");
        assert_eq!(html, "<p>Hi</p>");
    }

    #[test]
    fn markdown_with_inline_script_is_cleaned() {
        let html = render_template_html("**Parties**\n\n<script>alert(1)</script>\n");
        assert!(html.contains("<strong>Parties</strong>"));
        assert!(!html.contains("script"));
    }

    #[test]
    fn markdown_links_drop_script_urls() {
        let html = render_template_html("[Link](javascript:alert(1))");
        assert!(html.contains("Link"));
        assert!(!html.contains("javascript:"));
    }

    #[test]
    fn links_keep_href_only() {
        let html = render_template_html("<a href=\"https://example.com\" style=\"x\">ok</a>");
        assert!(html.contains("href=\"https://example.com\""));
        assert!(!html.contains("style"));
    }

    #[test]
    fn html_detection_needs_a_leading_tag() {
        assert!(looks_like_html("  <p>Hello</p>"));
        assert!(looks_like_html("<!doctype html>"));
        assert!(!looks_like_html("2 < 3 > 1"));
        assert!(!looks_like_html("**bold** <em>text</em>"));
        assert!(!looks_like_html(""));
    }

    #[test]
    fn control_characters_are_stripped() {
        let cleaned = strip_control_chars("a\u{1b}[2J\tb\n\u{7}c\u{9b}");
        assert_eq!(cleaned, "a[2J\tb\nc");
        assert!(matches!(strip_control_chars("plain\ntext"), Cow::Borrowed(_)));
    }
}
