//! Head-Tag Scorer - evaluates the seven head-level SEO signals.
//!
//! Pure function over the document text. Each field is scored independently
//! with no cross-field interaction; an absent or malformed tag yields the
//! zero-score "missing" branch rather than an error.

use crate::analyzer::types::{FieldResult, HeadSeoReport};
use crate::extractor::PageExtractor;
use scraper::Html;

const TITLE_MAX_LEN: usize = 60;
const DESCRIPTION_MAX_LEN: usize = 160;

/// Score the head-level SEO signals of `html`.
///
/// Total over all inputs: an empty document yields seven "missing" fields.
pub fn analyze_head(html: &str) -> HeadSeoReport {
    let document = Html::parse_document(html);

    HeadSeoReport {
        title: score_title(&document),
        meta_description: score_meta_description(&document),
        meta_keywords: score_meta_keywords(&document),
        og_title: score_og_text(&document, "title", "OG title"),
        og_description: score_og_text(&document, "description", "OG description"),
        og_image: score_og_presence(&document, "image", "OG image"),
        og_url: score_og_presence(&document, "url", "OG URL"),
    }
}

fn score_title(document: &Html) -> FieldResult {
    match PageExtractor::extract_title(document) {
        None => FieldResult::missing("Title tag is missing"),
        Some(title) => {
            let len = title.chars().count();
            let (score, message) = if len == 0 {
                (0, "Title is empty".to_string())
            } else if len <= TITLE_MAX_LEN {
                (
                    100,
                    format!("Title is present and optimal length ({} characters)", len),
                )
            } else {
                (
                    50,
                    format!(
                        "Title is too long ({} characters, recommended: {} or less)",
                        len, TITLE_MAX_LEN
                    ),
                )
            };
            FieldResult {
                score,
                message,
                value: title,
            }
        }
    }
}

fn score_meta_description(document: &Html) -> FieldResult {
    match PageExtractor::extract_meta(document, "description") {
        None => FieldResult::missing("Meta description tag is missing"),
        Some(desc) => {
            let len = desc.chars().count();
            let (score, message) = if len == 0 {
                (0, "Meta description is empty".to_string())
            } else if len <= DESCRIPTION_MAX_LEN {
                (
                    100,
                    format!(
                        "Meta description is present and optimal length ({} characters)",
                        len
                    ),
                )
            } else {
                (
                    50,
                    format!(
                        "Meta description is too long ({} characters, recommended: {} or less)",
                        len, DESCRIPTION_MAX_LEN
                    ),
                )
            };
            FieldResult {
                score,
                message,
                value: desc,
            }
        }
    }
}

fn score_meta_keywords(document: &Html) -> FieldResult {
    match PageExtractor::extract_meta(document, "keywords") {
        None => FieldResult::missing("Meta keywords tag is missing"),
        Some(keywords) if keywords.is_empty() => FieldResult {
            score: 0,
            message: "Meta keywords are empty".to_string(),
            value: keywords,
        },
        Some(keywords) => {
            let count = keywords.split(',').count();
            FieldResult {
                score: 100,
                message: format!("Meta keywords are present ({} keywords)", count),
                value: keywords,
            }
        }
    }
}

/// Binary OG check whose presence message reports the content length
/// (og:title, og:description).
fn score_og_text(document: &Html, property: &str, label: &str) -> FieldResult {
    match PageExtractor::extract_og(document, property) {
        Some(value) if !value.is_empty() => FieldResult {
            score: 100,
            message: format!("{} is present ({} characters)", label, value.chars().count()),
            value,
        },
        _ => FieldResult::missing(format!("{} (og:{}) is missing", label, property)),
    }
}

/// Binary OG check without a length in the presence message (og:image,
/// og:url - URLs are not length-scored).
fn score_og_presence(document: &Html, property: &str, label: &str) -> FieldResult {
    match PageExtractor::extract_og(document, property) {
        Some(value) if !value.is_empty() => FieldResult {
            score: 100,
            message: format!("{} is present", label),
            value,
        },
        _ => FieldResult::missing(format!("{} (og:{}) is missing", label, property)),
    }
}
