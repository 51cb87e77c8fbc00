//! Document quality analyzers.
//!
//! Three audits over a raw HTML document:
//! - **Head-Tag Scorer**: the seven head-level SEO signals
//! - **Full-Page SEO Scorer**: weighted page-level categories, delegating to
//!   an external scoring service with a deterministic local fallback
//! - **Link & Attribute Auditor**: anchor/image integrity and accessibility
//!
//! All analyzers are value-in/value-out over the document text, so
//! concurrent invocations across documents need no coordination.

mod head_seo;
mod link_audit;
mod seo_score;
mod types;

pub use head_seo::analyze_head;
pub use link_audit::audit_links;
pub use seo_score::{score_local, SeoScorer};
pub use types::*;
