//! Full-Page SEO Scorer - weighted page-level scoring with remote delegation.
//!
//! Scoring first attempts one POST to the configured external scoring
//! service and normalizes whatever shape it answers with. Any failure of
//! that call (transport, non-2xx, unusable body) is logged and silently
//! converted into the deterministic local heuristics, so callers always
//! receive a valid report and never an error. There is no retry and no
//! caller-visible difference between the two paths.

use crate::analyzer::types::{CategoryScore, Grade, SeoScoreReport};
use crate::config::ScorerConfig;
use crate::error::{Result, ScoringError};
use crate::extractor::PageExtractor;
use scraper::Html;
use serde_json::Value;
use std::collections::BTreeMap;

const TITLE_MAX_LEN: usize = 60;
const DESCRIPTION_MAX_LEN: usize = 160;

// Field aliases accepted from the external service, tried in order.
const SCORE_ALIASES: &[&str] = &["score", "seoScore"];
const DETAILS_ALIASES: &[&str] = &["details", "analysis"];
const RECOMMENDATION_ALIASES: &[&str] = &["recommendations", "suggestions"];

/// Full-page SEO scorer with external delegation and local fallback.
pub struct SeoScorer {
    client: reqwest::Client,
    config: ScorerConfig,
}

impl SeoScorer {
    pub fn new(config: ScorerConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Score `html`, preferring the external service and falling back to
    /// [`score_local`]. Infallible by design.
    pub async fn score(&self, html: &str) -> SeoScoreReport {
        tracing::debug!(
            "Delegating SEO scoring to external service: {}",
            self.config.endpoint
        );
        match self.fetch_remote(html).await {
            Ok(report) => report,
            Err(e) => {
                tracing::warn!(
                    "External SEO scoring failed, falling back to local heuristics: {}",
                    e
                );
                score_local(html)
            }
        }
    }

    async fn fetch_remote(&self, html: &str) -> Result<SeoScoreReport> {
        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&serde_json::json!({ "html": html }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScoringError::Status(status.as_u16()));
        }

        let body: Value = response.json().await?;
        normalize_remote(&body)
    }
}

impl Default for SeoScorer {
    fn default() -> Self {
        Self::new(ScorerConfig::default())
    }
}

/// First alias field with a non-null value in `body`. A present-but-null
/// alias does not shadow a later one.
fn first_alias<'a>(body: &'a Value, aliases: &[&str]) -> Option<&'a Value> {
    aliases
        .iter()
        .filter_map(|key| body.get(*key))
        .find(|v| !v.is_null())
}

/// Normalize an external response into report shape. A numeric score under
/// one of the alias names is required; everything else is optional, with
/// the grade derived locally when absent.
fn normalize_remote(body: &Value) -> Result<SeoScoreReport> {
    let raw_score = first_alias(body, SCORE_ALIASES)
        .and_then(Value::as_f64)
        .ok_or(ScoringError::MissingScore)?;
    let score = raw_score.round().clamp(0.0, 100.0) as u8;

    let grade = body
        .get("grade")
        .and_then(Value::as_str)
        .and_then(Grade::parse)
        .unwrap_or_else(|| Grade::from_score(score));

    let details = first_alias(body, DETAILS_ALIASES)
        .and_then(Value::as_object)
        .map(|map| {
            map.iter()
                .map(|(key, entry)| {
                    let category = CategoryScore {
                        score: entry
                            .get("score")
                            .and_then(Value::as_f64)
                            .map(|s| s.round().clamp(0.0, 100.0) as u8)
                            .unwrap_or(0),
                        message: entry
                            .get("message")
                            .and_then(Value::as_str)
                            .unwrap_or_default()
                            .to_string(),
                    };
                    (key.clone(), category)
                })
                .collect()
        })
        .unwrap_or_default();

    let recommendations = first_alias(body, RECOMMENDATION_ALIASES)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Ok(SeoScoreReport {
        score,
        grade,
        details,
        recommendations,
    })
}

/// Deterministic local scoring over six weighted categories.
///
/// Category weights: title 15, meta description 15, headings 20 (15 for the
/// H1 structure plus 5 when any H2/H3 exists), images 15, links 10,
/// content 15. The sum is clipped at 100.
pub fn score_local(html: &str) -> SeoScoreReport {
    let document = Html::parse_document(html);
    let mut details = BTreeMap::new();
    let mut recommendations = Vec::new();

    // Title (max 15)
    let (title_score, title_message) = match PageExtractor::extract_title(&document) {
        None => {
            recommendations.push("Add a title tag".to_string());
            (0, "Title tag is missing".to_string())
        }
        Some(title) if title.is_empty() => {
            recommendations.push("Add a descriptive title tag".to_string());
            (0, "Title tag is missing or empty".to_string())
        }
        Some(title) if title.chars().count() <= TITLE_MAX_LEN => {
            (15, "Title tag is present and optimal length".to_string())
        }
        Some(_) => {
            recommendations.push("Title tag should be 60 characters or less".to_string());
            (10, "Title tag is too long".to_string())
        }
    };
    details.insert(
        "title".to_string(),
        CategoryScore {
            score: title_score,
            message: title_message,
        },
    );

    // Meta description (max 15)
    let (desc_score, desc_message) = match PageExtractor::extract_meta(&document, "description") {
        None => {
            recommendations.push("Add a meta description tag".to_string());
            (0, "Meta description is missing".to_string())
        }
        Some(desc) if desc.is_empty() => {
            recommendations.push("Add a meta description".to_string());
            (0, "Meta description is missing or empty".to_string())
        }
        Some(desc) if desc.chars().count() <= DESCRIPTION_MAX_LEN => {
            (15, "Meta description is present and optimal length".to_string())
        }
        Some(_) => {
            recommendations.push("Meta description should be 160 characters or less".to_string());
            (10, "Meta description is too long".to_string())
        }
    };
    details.insert(
        "metaDescription".to_string(),
        CategoryScore {
            score: desc_score,
            message: desc_message,
        },
    );

    // Headings (max 20): 15 for the H1 structure, +5 when any H2/H3 exists.
    // Recommendations come from the H1 branches only.
    let (h1_count, h2_count, h3_count) = PageExtractor::heading_counts(&document);
    let (mut headings_score, headings_message) = match h1_count {
        1 => (15, "Proper heading structure (1 H1 tag)".to_string()),
        0 => {
            recommendations.push("Add an H1 heading tag".to_string());
            (5, "No H1 tag found".to_string())
        }
        _ => {
            recommendations.push("Use only one H1 tag per page".to_string());
            (10, "Multiple H1 tags found".to_string())
        }
    };
    if h2_count > 0 || h3_count > 0 {
        headings_score += 5;
    }
    details.insert(
        "headings".to_string(),
        CategoryScore {
            score: headings_score,
            message: headings_message,
        },
    );

    // Images (max 15): a page without images is neutral, not penalized.
    let images = PageExtractor::image_tags(html);
    let (images_score, images_message) = if images.is_empty() {
        (0, "No images found".to_string())
    } else {
        let with_alt = images
            .iter()
            .filter(|tag| {
                PageExtractor::tag_attributes(tag.raw)
                    .get("alt")
                    .map(|alt| !alt.trim().is_empty())
                    .unwrap_or(false)
            })
            .count();
        let alt_percentage = with_alt as f64 / images.len() as f64 * 100.0;
        let rounded = alt_percentage.round() as u32;

        if with_alt == images.len() {
            (15, "All images have alt text".to_string())
        } else {
            recommendations.push(format!(
                "Add alt text to all images ({}% currently have alt text)",
                rounded
            ));
            let score = if alt_percentage >= 50.0 { 10 } else { 5 };
            (score, format!("{}% of images have alt text", rounded))
        }
    };
    details.insert(
        "images".to_string(),
        CategoryScore {
            score: images_score,
            message: images_message,
        },
    );

    // Links (max 10)
    let link_count = PageExtractor::anchor_tags(html)
        .iter()
        .filter(|tag| {
            PageExtractor::tag_attributes(tag.raw)
                .get("href")
                .map(|href| !href.trim().is_empty())
                .unwrap_or(false)
        })
        .count();
    let (links_score, links_message) = if link_count > 0 {
        (10, format!("{} links found", link_count))
    } else {
        recommendations.push("Add internal and external links".to_string());
        (0, "No links found".to_string())
    };
    details.insert(
        "links".to_string(),
        CategoryScore {
            score: links_score,
            message: links_message,
        },
    );

    // Content length (max 15)
    let content_length = PageExtractor::visible_text_length(html);
    let (content_score, content_message) = if content_length > 300 {
        (15, "Sufficient content length".to_string())
    } else if content_length > 100 {
        recommendations.push("Add more content to improve SEO".to_string());
        (10, "Content could be longer".to_string())
    } else {
        recommendations.push("Add more content (at least 300 words recommended)".to_string());
        (5, "Content is too short".to_string())
    };
    details.insert(
        "content".to_string(),
        CategoryScore {
            score: content_score,
            message: content_message,
        },
    );

    let total: u32 = details.values().map(|c| c.score as u32).sum();
    let score = total.min(100) as u8;

    SeoScoreReport {
        score,
        grade: Grade::from_score(score),
        details,
        recommendations,
    }
}
