//! Rendering of audit results as human-readable text.
//!
//! The output is either a single completeness line, or a count line
//! followed by a pretty-printed JSON dump of the gaps. Devanagari text is
//! rendered literally; `serde_json` never escapes non-ASCII characters.

use crate::audit::AuditReport;
use anyhow::{Context, Result};

/// Render `report` to the text the tool prints on standard output.
///
/// The returned string has no trailing newline; the caller decides how to
/// emit it.
pub fn render(report: &AuditReport) -> Result<String> {
    if report.is_complete() {
        return Ok(format!(
            "All {} entries have Hindi translations.",
            report.total
        ));
    }

    let dump = serde_json::to_string_pretty(&report.missing)
        .context("Failed to serialize missing entries")?;

    Ok(format!(
        "Missing translations for {} entries:\n{}",
        report.missing_count(),
        dump
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::MissingEntry;

    // ==================== Rendering Tests ====================

    #[test]
    fn test_render_complete_report() {
        let report = AuditReport {
            total: 38,
            missing: Vec::new(),
        };

        let text = render(&report).expect("render");
        assert_eq!(text, "All 38 entries have Hindi translations.");
    }

    #[test]
    fn test_render_complete_report_has_no_dump() {
        let report = AuditReport {
            total: 5,
            missing: Vec::new(),
        };

        let text = render(&report).expect("render");
        assert!(!text.contains('['));
        assert!(!text.contains('{'));
    }

    #[test]
    fn test_render_incomplete_report() {
        let report = AuditReport {
            total: 2,
            missing: vec![MissingEntry {
                index: 0,
                name: "Wilt".to_string(),
                missing_fields: vec!["cause_hi"],
            }],
        };

        let text = render(&report).expect("render");
        assert!(text.starts_with("Missing translations for 1 entries:\n"));
        assert!(text.contains(r#""index": 0"#));
        assert!(text.contains(r#""name": "Wilt""#));
        assert!(text.contains(r#""cause_hi""#));
    }

    #[test]
    fn test_render_uses_two_space_indent() {
        let report = AuditReport {
            total: 1,
            missing: vec![MissingEntry {
                index: 0,
                name: "Wilt".to_string(),
                missing_fields: vec!["name_hi"],
            }],
        };

        let text = render(&report).expect("render");
        assert!(text.contains("\n  {"));
        assert!(text.contains("\n    \"index\": 0"));
    }

    #[test]
    fn test_render_keeps_devanagari_literal() {
        let report = AuditReport {
            total: 1,
            missing: vec![MissingEntry {
                index: 0,
                name: "विल्ट".to_string(),
                missing_fields: vec!["cure_hi"],
            }],
        };

        let text = render(&report).expect("render");
        assert!(text.contains("विल्ट"));
        assert!(!text.contains("\\u"));
    }
}
