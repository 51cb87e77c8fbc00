//! Link & Attribute Auditor - structural integrity scan over anchors and images.
//!
//! Classifies attribute defects by severity without any network access: no
//! reachability check is ever made against a discovered URL. Apart from the
//! recorded scan duration the report is fully deterministic.

use crate::analyzer::types::{
    AuditBreakdown, AuditIssue, ElementKind, ElementTally, LinkAuditReport, Severity,
};
use crate::extractor::{PageExtractor, RawTag};
use std::time::Instant;

/// Accumulates issues and tallies during one scan.
#[derive(Default)]
struct ScanState {
    issues: Vec<AuditIssue>,
}

impl ScanState {
    fn push(
        &mut self,
        kind: ElementKind,
        tag: &RawTag<'_>,
        html: &str,
        attribute: &str,
        value: &str,
        issue: &str,
        severity: Severity,
    ) {
        let id = format!("issue-{}", self.issues.len() + 1);
        self.issues.push(AuditIssue {
            id,
            kind,
            tag: match kind {
                ElementKind::Image => "img".to_string(),
                ElementKind::Anchor => "a".to_string(),
            },
            attribute: attribute.to_string(),
            value: value.to_string(),
            issue: issue.to_string(),
            severity,
            line_context: tag.raw.to_string(),
            line_number: Some(tag.line_number(html)),
        });
    }
}

/// Scan every `<img>` and `<a>` occurrence in `html` and report attribute
/// defects. Pure text audit; severity reflects impact on accessibility or
/// functionality.
pub fn audit_links(html: &str) -> LinkAuditReport {
    let start = Instant::now();

    let images = PageExtractor::image_tags(html);
    let anchors = PageExtractor::anchor_tags(html);

    let mut state = ScanState::default();
    let mut images_with_issues = 0usize;
    let mut anchors_with_issues = 0usize;

    for tag in &images {
        let before = state.issues.len();
        audit_image(&mut state, tag, html);
        if state.issues.len() > before {
            images_with_issues += 1;
        }
    }

    for tag in &anchors {
        let before = state.issues.len();
        audit_anchor(&mut state, tag, html);
        if state.issues.len() > before {
            anchors_with_issues += 1;
        }
    }

    let critical = count_severity(&state.issues, Severity::Critical);
    let warning = count_severity(&state.issues, Severity::Warning);
    let info = count_severity(&state.issues, Severity::Info);
    let scan_time = start.elapsed().as_secs_f64() * 1000.0;

    tracing::debug!(
        "Link audit complete: {} elements, {} issues ({} critical, {} warning, {} info) in {:.2}ms",
        images.len() + anchors.len(),
        state.issues.len(),
        critical,
        warning,
        info,
        scan_time
    );

    LinkAuditReport {
        total_elements: images.len() + anchors.len(),
        total_issues: state.issues.len(),
        critical,
        warning,
        info,
        breakdown: AuditBreakdown {
            anchors: ElementTally {
                total: anchors.len(),
                issues: anchors_with_issues,
            },
            images: ElementTally {
                total: images.len(),
                issues: images_with_issues,
            },
        },
        issues: state.issues,
        scan_time,
    }
}

fn audit_image(state: &mut ScanState, tag: &RawTag<'_>, html: &str) {
    let attrs = PageExtractor::tag_attributes(tag.raw);

    match attrs.get("src") {
        None => state.push(
            ElementKind::Image,
            tag,
            html,
            "src",
            "",
            "Image is missing a src attribute",
            Severity::Critical,
        ),
        Some(src) if src.trim().is_empty() => state.push(
            ElementKind::Image,
            tag,
            html,
            "src",
            src,
            "Image has an empty src attribute",
            Severity::Critical,
        ),
        Some(_) => {}
    }

    // role="presentation" / aria-hidden="true" mark an image as decorative;
    // those are allowed an empty alt. Values match case-insensitively like
    // the rest of the attribute handling.
    let is_decorative = attrs
        .get("role")
        .is_some_and(|v| v.trim().eq_ignore_ascii_case("presentation"))
        || attrs
            .get("aria-hidden")
            .is_some_and(|v| v.trim().eq_ignore_ascii_case("true"));

    match attrs.get("alt") {
        None => state.push(
            ElementKind::Image,
            tag,
            html,
            "alt",
            "",
            "Image is missing an alt attribute",
            Severity::Critical,
        ),
        Some(alt) if alt.trim().is_empty() && !is_decorative => state.push(
            ElementKind::Image,
            tag,
            html,
            "alt",
            alt,
            "Image has an empty alt attribute on a non-decorative image",
            Severity::Warning,
        ),
        Some(_) => {}
    }
}

fn audit_anchor(state: &mut ScanState, tag: &RawTag<'_>, html: &str) {
    let attrs = PageExtractor::tag_attributes(tag.raw);

    match attrs.get("href") {
        None => state.push(
            ElementKind::Anchor,
            tag,
            html,
            "href",
            "",
            "Anchor has no href attribute",
            Severity::Warning,
        ),
        Some(href) => {
            let trimmed = href.trim();
            if trimmed.is_empty() {
                state.push(
                    ElementKind::Anchor,
                    tag,
                    html,
                    "href",
                    href,
                    "Anchor has an empty href attribute",
                    Severity::Warning,
                );
            } else if trimmed == "#" {
                state.push(
                    ElementKind::Anchor,
                    tag,
                    html,
                    "href",
                    href,
                    "Anchor href is a placeholder (#)",
                    Severity::Warning,
                );
            } else if trimmed.to_lowercase().starts_with("javascript:") {
                state.push(
                    ElementKind::Anchor,
                    tag,
                    html,
                    "href",
                    href,
                    "Anchor uses a javascript: pseudo-URL",
                    Severity::Info,
                );
            }
        }
    }
}

fn count_severity(issues: &[AuditIssue], severity: Severity) -> usize {
    issues.iter().filter(|i| i.severity == severity).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invariants(report: &LinkAuditReport) {
        assert_eq!(
            report.critical + report.warning + report.info,
            report.total_issues
        );
        assert_eq!(report.total_issues, report.issues.len());
        assert_eq!(
            report.breakdown.anchors.total + report.breakdown.images.total,
            report.total_elements
        );
    }

    #[test]
    fn image_without_alt_is_one_critical_image_issue() {
        let report = audit_links(r#"<body><img src="a.png"></body>"#);

        assert_eq!(report.total_issues, 1);
        assert_eq!(report.critical, 1);
        let issue = &report.issues[0];
        assert_eq!(issue.kind, ElementKind::Image);
        assert_eq!(issue.attribute, "alt");
        assert_eq!(issue.severity, Severity::Critical);
        assert_eq!(issue.line_context, r#"<img src="a.png">"#);
        assert_invariants(&report);
    }

    #[test]
    fn empty_alt_on_non_decorative_image_is_a_warning() {
        let report = audit_links(r#"<img src="a.png" alt="">"#);
        assert_eq!(report.warning, 1);
        assert_eq!(report.critical, 0);
        assert_eq!(report.issues[0].attribute, "alt");
    }

    #[test]
    fn decorative_images_may_have_empty_alt() {
        let report = audit_links(r#"<img src="a.png" alt="" role="presentation">"#);
        assert_eq!(report.total_issues, 0);

        let report = audit_links(r#"<img src="a.png" alt="" aria-hidden="true">"#);
        assert_eq!(report.total_issues, 0);
    }

    #[test]
    fn decorative_markers_match_case_insensitively() {
        let report = audit_links(r#"<img src="a.png" alt="" role="Presentation">"#);
        assert_eq!(report.total_issues, 0);

        let report = audit_links(r#"<img src="a.png" alt="" aria-hidden="TRUE">"#);
        assert_eq!(report.total_issues, 0);

        // unrelated role values stay flagged
        let report = audit_links(r#"<img src="a.png" alt="" role="img">"#);
        assert_eq!(report.warning, 1);
    }

    #[test]
    fn missing_and_empty_src_are_critical() {
        let report = audit_links(r#"<img alt="pic"><img src="" alt="pic2">"#);
        assert_eq!(report.critical, 2);
        assert!(report.issues.iter().all(|i| i.attribute == "src"));
        assert_invariants(&report);
    }

    #[test]
    fn anchor_href_defects_are_warnings_and_javascript_is_info() {
        let html = r##"<body>
            <a>no href</a>
            <a href="">empty</a>
            <a href="#">placeholder</a>
            <a href="JavaScript:void(0)">js</a>
            <a href="/fine">ok</a>
        </body>"##;
        let report = audit_links(html);

        assert_eq!(report.warning, 3);
        assert_eq!(report.info, 1);
        assert_eq!(report.critical, 0);
        assert_eq!(report.total_elements, 5);
        assert_eq!(report.breakdown.anchors.total, 5);
        assert_eq!(report.breakdown.anchors.issues, 4);
        assert_invariants(&report);
    }

    #[test]
    fn breakdown_counts_distinct_elements_not_findings() {
        // One image missing both src and alt: two findings, one element.
        let report = audit_links("<img>");
        assert_eq!(report.total_issues, 2);
        assert_eq!(report.breakdown.images.total, 1);
        assert_eq!(report.breakdown.images.issues, 1);
        assert_invariants(&report);
    }

    #[test]
    fn clean_document_reports_totals_with_no_issues() {
        let html = r#"<body><img src="a.png" alt="pic"><a href="/x">link</a></body>"#;
        let report = audit_links(html);

        assert_eq!(report.total_elements, 2);
        assert_eq!(report.total_issues, 0);
        assert_eq!(report.breakdown.images.issues, 0);
        assert_eq!(report.breakdown.anchors.issues, 0);
        assert_invariants(&report);
    }

    #[test]
    fn issue_ids_are_deterministic_and_line_numbers_are_recorded() {
        let html = "<p>pad</p>\n<img>\n<a href=\"#\">x</a>";
        let first = audit_links(html);
        let second = audit_links(html);

        assert_eq!(first.issues, second.issues);
        assert_eq!(first.issues[0].id, "issue-1");
        assert_eq!(first.issues[0].line_number, Some(2));
        let anchor_issue = first
            .issues
            .iter()
            .find(|i| i.kind == ElementKind::Anchor)
            .unwrap();
        assert_eq!(anchor_issue.line_number, Some(3));
    }

    #[test]
    fn empty_input_yields_an_empty_report() {
        let report = audit_links("");
        assert_eq!(report.total_elements, 0);
        assert_eq!(report.total_issues, 0);
        assert_invariants(&report);
    }
}
