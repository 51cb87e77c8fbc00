use serde::Deserialize;

/// Placeholder endpoint used when no scoring service is configured.
/// Requests against it fail and the scorer falls back to local heuristics.
pub const DEFAULT_SCORING_ENDPOINT: &str = "https://api.example.com/seo/analyze";

/// Configuration for the full-page SEO scorer.
///
/// Passed explicitly into [`SeoScorer`](crate::analyzer::SeoScorer) so the
/// analyzers stay pure and testable; the library never reads environment
/// state itself.
#[derive(Debug, Clone, Deserialize)]
pub struct ScorerConfig {
    /// URL of the external scoring service (POST `{ "html": ... }`)
    pub endpoint: String,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_SCORING_ENDPOINT.to_string(),
        }
    }
}

impl ScorerConfig {
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}
