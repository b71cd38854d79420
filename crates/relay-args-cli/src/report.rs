//! Rendering of a [`ValidationReport`] for terminal and tooling consumers.
//!
//! Output is deterministic: fragments sorted lexicographically, issues
//! within a fragment in emission order, locations displayed 1-based.

use anyhow::Result;
use colored::Colorize;
use relay_args_validator::{ValidationIssue, ValidationReport};
use std::fmt::Write;

pub fn render_human(report: &ValidationReport) -> String {
    let mut out = String::new();

    if report.issues.is_empty() {
        let _ = writeln!(
            out,
            "{} ({} fragment(s) checked)",
            "✓ No issues found".green(),
            report.summary.fragments_checked
        );
        return out;
    }

    for (fragment_name, issues) in report.issues_by_fragment() {
        let _ = writeln!(out, "\n{}", fragment_name.bold());
        for issue in issues {
            let _ = writeln!(
                out,
                "  {} {} {}",
                format_location(issue).dimmed(),
                format!("{}:", issue.severity).red().bold(),
                issue.message
            );
        }
    }

    let _ = writeln!(
        out,
        "\n{}",
        format!(
            "✗ {} issue(s) in {} fragment(s) ({} fragment(s) checked)",
            report.summary.total_issues,
            report.summary.fragments_with_issues,
            report.summary.fragments_checked
        )
        .red()
        .bold()
    );

    out
}

pub fn render_json(report: &ValidationReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Display a 0-indexed location as 1-based `line:column`
fn format_location(issue: &ValidationIssue) -> String {
    issue.location.map_or_else(
        || "-".to_string(),
        |location| format!("{}:{}", location.line + 1, location.column + 1),
    )
}
