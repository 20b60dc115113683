//! Output formatting utilities

use crate::application::{ExportReport, RemapReport};

/// Format an export report for display
pub fn format_export_report(report: &ExportReport) -> String {
    let mut output = format!(
        "Exported taxonomy from {} document(s): {} tag(s), {} category(ies).",
        report.scanned, report.tag_count, report.category_count
    );
    if report.skipped > 0 {
        output.push_str(&format!(
            "\nSkipped {} document(s) without readable front matter.",
            report.skipped
        ));
    }
    output
}

/// Format a remap report for display
pub fn format_remap_report(report: &RemapReport) -> String {
    let mut output = format!(
        "Updated {} of {} document(s).",
        report.changed, report.scanned
    );
    if report.skipped > 0 {
        output.push_str(&format!(
            "\nSkipped {} document(s) without readable front matter.",
            report.skipped
        ));
    }
    output
}

/// Format remap per-file failures as a warning block for stderr.
/// Empty when there were no failures.
pub fn format_remap_failures(report: &RemapReport) -> String {
    if report.failures.is_empty() {
        return String::new();
    }

    let mut output = format!(
        "Warning: {} document(s) could not be updated:\n",
        report.failures.len()
    );
    for failure in &report.failures {
        output.push_str(&format!("  {}: {}\n", failure.filename, failure.reason));
    }
    output.push_str("The registry was still updated; fix these files and re-run the remap.");
    output
}

/// Format a list of registry terms for display
pub fn format_term_list(terms: &[String]) -> String {
    if terms.is_empty() {
        return "No terms registered".to_string();
    }

    let mut output = String::new();
    for term in terms {
        output.push_str(&format!("{}\n", term));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::remap_taxonomy::RemapFailure;

    #[test]
    fn test_format_export_report() {
        let report = ExportReport {
            scanned: 5,
            skipped: 0,
            tag_count: 3,
            category_count: 1,
        };
        let output = format_export_report(&report);
        assert!(output.contains("5 document(s)"));
        assert!(output.contains("3 tag(s)"));
        assert!(output.contains("1 category(ies)"));
        assert!(!output.contains("Skipped"));
    }

    #[test]
    fn test_format_export_report_with_skips() {
        let report = ExportReport {
            scanned: 5,
            skipped: 2,
            tag_count: 3,
            category_count: 0,
        };
        let output = format_export_report(&report);
        assert!(output.contains("Skipped 2 document(s)"));
    }

    #[test]
    fn test_format_remap_report() {
        let report = RemapReport {
            scanned: 4,
            changed: 2,
            skipped: 0,
            failures: vec![],
        };
        let output = format_remap_report(&report);
        assert_eq!(output, "Updated 2 of 4 document(s).");
    }

    #[test]
    fn test_format_remap_failures_empty() {
        let report = RemapReport::default();
        assert_eq!(format_remap_failures(&report), "");
    }

    #[test]
    fn test_format_remap_failures_lists_paths() {
        let report = RemapReport {
            scanned: 3,
            changed: 1,
            skipped: 0,
            failures: vec![RemapFailure {
                filename: "posts/a.md".to_string(),
                reason: "permission denied".to_string(),
            }],
        };
        let output = format_remap_failures(&report);
        assert!(output.contains("Warning: 1 document(s)"));
        assert!(output.contains("posts/a.md: permission denied"));
        assert!(output.contains("registry was still updated"));
    }

    #[test]
    fn test_format_term_list() {
        let terms = vec!["personal".to_string(), "work".to_string()];
        assert_eq!(format_term_list(&terms), "personal\nwork\n");
    }

    #[test]
    fn test_format_empty_term_list() {
        assert_eq!(format_term_list(&[]), "No terms registered");
    }
}
