//! Report value types shared by the analyzers.
//!
//! Every report is created fresh per analysis call, owned by the caller and
//! never mutated after return. All types serialize losslessly to the JSON
//! shapes the consuming UI expects (camelCase keys, plain data).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One scored head-tag signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldResult {
    /// 0, 50 or 100 depending on the field's tiering
    pub score: u8,
    pub message: String,
    /// Trimmed extracted content; empty when the tag is absent
    pub value: String,
}

impl FieldResult {
    pub(crate) fn missing(message: impl Into<String>) -> Self {
        Self {
            score: 0,
            message: message.into(),
            value: String::new(),
        }
    }
}

/// Fixed-shape report over the seven head-level SEO signals.
///
/// Always contains exactly these seven fields, even when the corresponding
/// tag is absent (score 0 in that case).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadSeoReport {
    pub title: FieldResult,
    pub meta_description: FieldResult,
    pub meta_keywords: FieldResult,
    pub og_title: FieldResult,
    pub og_description: FieldResult,
    pub og_image: FieldResult,
    pub og_url: FieldResult,
}

/// Letter grade derived from a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn from_score(score: u8) -> Self {
        match score {
            90.. => Self::A,
            80..=89 => Self::B,
            70..=79 => Self::C,
            60..=69 => Self::D,
            _ => Self::F,
        }
    }

    pub(crate) fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "A" | "a" => Some(Self::A),
            "B" | "b" => Some(Self::B),
            "C" | "c" => Some(Self::C),
            "D" | "d" => Some(Self::D),
            "F" | "f" => Some(Self::F),
            _ => None,
        }
    }
}

/// Score and message for one page-level category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub score: u8,
    #[serde(default)]
    pub message: String,
}

/// Aggregate full-page SEO report, whether normalized from the external
/// scoring service or computed by the local fallback heuristics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoScoreReport {
    /// Sum of category sub-scores, clipped at 100
    pub score: u8,
    pub grade: Grade,
    pub details: BTreeMap<String, CategoryScore>,
    pub recommendations: Vec<String>,
}

/// Impact classification of one audit finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

/// Kind of element an audit finding originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Image,
    Anchor,
}

/// One integrity or accessibility defect found on an element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditIssue {
    /// Deterministic sequential id ("issue-1", "issue-2", ...)
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ElementKind,
    pub tag: String,
    /// Offending attribute name
    pub attribute: String,
    /// Attribute value as written, empty when the attribute is absent
    pub value: String,
    pub issue: String,
    pub severity: Severity,
    /// The raw opening tag the finding originates from
    pub line_context: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_number: Option<usize>,
}

/// Per-element-kind tallies. `issues` counts distinct elements with at
/// least one finding, not findings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementTally {
    pub total: usize,
    pub issues: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditBreakdown {
    pub anchors: ElementTally,
    pub images: ElementTally,
}

/// Aggregate link and attribute audit report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkAuditReport {
    pub total_elements: usize,
    pub total_issues: usize,
    pub critical: usize,
    pub warning: usize,
    pub info: usize,
    pub issues: Vec<AuditIssue>,
    pub breakdown: AuditBreakdown,
    /// Wall-clock scan duration in milliseconds; observability only
    pub scan_time: f64,
}
