//! Tolerant element extraction over raw HTML.
//!
//! Structured head-tag lookups go through `scraper` selectors; the img/a
//! scans work on the raw document text so downstream auditors can report the
//! original opening tag and its byte position. Matching is case-insensitive
//! and tolerant of attribute order and quoting style. A non-match is a
//! normal, expected outcome, never an error.

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashMap;
use std::sync::OnceLock;

/// One raw opening tag (`<img ...>` or `<a ...>`) with its byte offset in
/// the source document.
#[derive(Debug, Clone, Copy)]
pub struct RawTag<'a> {
    pub raw: &'a str,
    pub offset: usize,
}

impl RawTag<'_> {
    /// 1-based line number of the tag in the source document.
    pub fn line_number(&self, html: &str) -> usize {
        html.as_bytes()[..self.offset]
            .iter()
            .filter(|b| **b == b'\n')
            .count()
            + 1
    }
}

pub struct PageExtractor;

impl PageExtractor {
    /// First `<title>` element, trimmed. Returns `Some("")` when the tag
    /// exists but has no text; presence and emptiness are distinct outcomes
    /// for the scorers.
    pub fn extract_title(html: &Html) -> Option<String> {
        static SELECTOR: OnceLock<Selector> = OnceLock::new();
        let selector = SELECTOR.get_or_init(|| Selector::parse("title").unwrap());
        html.select(selector)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
    }

    /// Content of the first `<meta name="..." content="...">` where both
    /// attributes sit on the same tag instance.
    pub fn extract_meta(html: &Html, name: &str) -> Option<String> {
        let selector = Selector::parse(&format!("meta[name='{}' i][content]", name)).ok()?;
        html.select(&selector)
            .next()
            .and_then(|el| el.value().attr("content"))
            .map(|s| s.trim().to_string())
    }

    /// Content of the first OpenGraph meta tag, e.g. `extract_og(html, "title")`
    /// for `<meta property="og:title" content="...">`.
    pub fn extract_og(html: &Html, property: &str) -> Option<String> {
        let selector =
            Selector::parse(&format!("meta[property='og:{}' i][content]", property)).ok()?;
        html.select(&selector)
            .next()
            .and_then(|el| el.value().attr("content"))
            .map(|s| s.trim().to_string())
    }

    /// Occurrence counts of (h1, h2, h3).
    pub fn heading_counts(html: &Html) -> (usize, usize, usize) {
        static H1: OnceLock<Selector> = OnceLock::new();
        static H2: OnceLock<Selector> = OnceLock::new();
        static H3: OnceLock<Selector> = OnceLock::new();
        let h1 = H1.get_or_init(|| Selector::parse("h1").unwrap());
        let h2 = H2.get_or_init(|| Selector::parse("h2").unwrap());
        let h3 = H3.get_or_init(|| Selector::parse("h3").unwrap());

        (
            html.select(h1).count(),
            html.select(h2).count(),
            html.select(h3).count(),
        )
    }

    /// Every `<img ...>` opening tag in document order.
    pub fn image_tags(html: &str) -> Vec<RawTag<'_>> {
        static RE: OnceLock<Regex> = OnceLock::new();
        let re = RE.get_or_init(|| Regex::new(r"(?i)<img\b[^>]*>").unwrap());
        re.find_iter(html)
            .map(|m| RawTag {
                raw: m.as_str(),
                offset: m.start(),
            })
            .collect()
    }

    /// Every `<a ...>` opening tag in document order.
    pub fn anchor_tags(html: &str) -> Vec<RawTag<'_>> {
        static RE: OnceLock<Regex> = OnceLock::new();
        let re = RE.get_or_init(|| Regex::new(r"(?i)<a\b[^>]*>").unwrap());
        re.find_iter(html)
            .map(|m| RawTag {
                raw: m.as_str(),
                offset: m.start(),
            })
            .collect()
    }

    /// Attributes of a single raw opening tag, parsed tolerantly. Names come
    /// back lowercased; bare attributes map to the empty string, matching
    /// how browsers read them.
    pub fn tag_attributes(raw: &str) -> HashMap<String, String> {
        let fragment = Html::parse_fragment(raw);
        let mut attrs = HashMap::new();
        // The fragment parser may synthesize html/head/body wrappers around
        // the tag; skip those and read the first real element.
        if let Some(el) = fragment
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .find(|el| !matches!(el.value().name(), "html" | "head" | "body"))
        {
            for (name, value) in el.value().attrs() {
                attrs.insert(name.to_string(), value.to_string());
            }
        }
        attrs
    }

    /// Character count of the document with every tag stripped, trimmed.
    /// Used by the content-length heuristic.
    pub fn visible_text_length(html: &str) -> usize {
        static RE: OnceLock<Regex> = OnceLock::new();
        let re = RE.get_or_init(|| Regex::new(r"<[^>]*>").unwrap());
        re.replace_all(html, "").trim().chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_meta_regardless_of_attribute_order_and_quoting() {
        let html = Html::parse_document(
            r#"<head><meta content='first match' name="description"></head>"#,
        );
        assert_eq!(
            PageExtractor::extract_meta(&html, "description").as_deref(),
            Some("first match")
        );
    }

    #[test]
    fn meta_requires_content_on_the_same_tag() {
        // name and content on separate tags must not be merged
        let html = Html::parse_document(
            r#"<head>
                <meta name="description">
                <meta name="description" content="real one">
            </head>"#,
        );
        assert_eq!(
            PageExtractor::extract_meta(&html, "description").as_deref(),
            Some("real one")
        );
    }

    #[test]
    fn meta_name_matching_is_case_insensitive() {
        let html =
            Html::parse_document(r#"<head><META NAME="Description" CONTENT="hi"></head>"#);
        assert_eq!(
            PageExtractor::extract_meta(&html, "description").as_deref(),
            Some("hi")
        );
    }

    #[test]
    fn title_presence_and_emptiness_are_distinct() {
        let html = Html::parse_document("<head><title>  </title></head>");
        assert_eq!(PageExtractor::extract_title(&html).as_deref(), Some(""));

        let html = Html::parse_document("<head></head>");
        assert_eq!(PageExtractor::extract_title(&html), None);
    }

    #[test]
    fn raw_tag_scan_returns_full_opening_tags_with_offsets() {
        let html = "<p>x</p>\n<img src=\"a.png\" alt='pic'>\n<a href=\"/x\">link</a>";
        let imgs = PageExtractor::image_tags(html);
        assert_eq!(imgs.len(), 1);
        assert_eq!(imgs[0].raw, "<img src=\"a.png\" alt='pic'>");
        assert_eq!(imgs[0].line_number(html), 2);

        let anchors = PageExtractor::anchor_tags(html);
        assert_eq!(anchors.len(), 1);
        assert_eq!(anchors[0].raw, "<a href=\"/x\">");
        assert_eq!(anchors[0].line_number(html), 3);
    }

    #[test]
    fn tag_attributes_handles_bare_and_quoted_attributes() {
        let attrs = PageExtractor::tag_attributes("<img SRC='a.png' alt>");
        assert_eq!(attrs.get("src").map(String::as_str), Some("a.png"));
        assert_eq!(attrs.get("alt").map(String::as_str), Some(""));
        assert!(!attrs.contains_key("href"));
    }

    #[test]
    fn visible_text_length_strips_tags() {
        let html = "<html><body><h1>abc</h1><p>defg</p></body></html>";
        assert_eq!(PageExtractor::visible_text_length(html), 7);
    }

    #[test]
    fn extraction_tolerates_malformed_input() {
        let html = Html::parse_document("<<<not html>>> <meta name='description'");
        assert_eq!(PageExtractor::extract_meta(&html, "description"), None);
        assert!(PageExtractor::image_tags("<img never closed").is_empty());
    }
}
