//! HTML document quality analysis engine.
//!
//! Takes the serialized markup of one rendered page and produces structured,
//! scored audit reports: head-tag completeness, an aggregate SEO score with
//! letter grade and recommendations, and a link/image attribute audit. The
//! engine never fetches content, never persists results and never checks
//! URL reachability; callers supply the HTML and own the reports.

pub mod analyzer;
pub mod config;
pub mod error;
pub mod extractor;

pub use analyzer::{
    analyze_head, audit_links, score_local, AuditIssue, Grade, HeadSeoReport, LinkAuditReport,
    SeoScoreReport, SeoScorer, Severity,
};
pub use config::ScorerConfig;
