//! Rendering helpers (markdown and plain text) for projlint reports.

use projlint_types::report::ProjlintReport;
use projlint_types::result::RuleStatus;

pub fn render_report_md(report: &ProjlintReport) -> String {
    let mut out = String::new();
    out.push_str("# projlint report\n\n");
    out.push_str(&format!("- Root: `{}`\n", report.root));
    out.push_str(&format!(
        "- Verdict: **{}**\n",
        status_label(report.verdict.status)
    ));
    out.push_str(&format!(
        "- Results: {} failed, {} warned, {} passed\n",
        report.verdict.counts.failed, report.verdict.counts.warned, report.verdict.counts.passed
    ));
    out.push_str(&format!(
        "- Entries scanned: {}\n",
        report.verdict.counts.scanned
    ));
    if let Some(caps) = &report.capabilities
        && caps.partial
    {
        out.push_str(&format!(
            "- Partial: yes ({} entries skipped)\n",
            caps.skipped.len()
        ));
    }
    out.push('\n');

    out.push_str("## Findings\n\n");
    let findings: Vec<_> = report
        .results
        .iter()
        .filter(|r| r.status != RuleStatus::Pass)
        .collect();
    if findings.is_empty() {
        out.push_str("_No findings._\n");
    } else {
        for result in findings {
            out.push_str(&format!(
                "- **{}** `{}` `{}`: {}\n",
                status_label(result.status),
                result.rule,
                result.path,
                result.message
            ));
        }
    }
    out.push('\n');

    if let Some(caps) = &report.capabilities {
        out.push_str("## Rules\n\n");
        if caps.rules.is_empty() {
            out.push_str("_No rules evaluated._\n");
        } else {
            for rule in &caps.rules {
                out.push_str(&format!("- `{}`\n", rule));
            }
        }
        out.push('\n');

        if !caps.skipped.is_empty() {
            out.push_str("## Skipped entries\n\n");
            for skipped in &caps.skipped {
                out.push_str(&format!("- `{}`: {}\n", skipped.path, skipped.reason));
            }
            out.push('\n');
        }
    }

    out
}

/// The human-readable report `check` prints to stdout.
pub fn render_report_text(report: &ProjlintReport) -> String {
    let mut out = String::new();

    for result in &report.results {
        if result.status == RuleStatus::Pass {
            continue;
        }
        out.push_str(&format!(
            "{:<4} {:<22} {}: {}\n",
            status_label_upper(result.status),
            result.rule,
            result.path,
            result.message
        ));
    }

    if let Some(caps) = &report.capabilities {
        for skipped in &caps.skipped {
            out.push_str(&format!("SKIP {}: {}\n", skipped.path, skipped.reason));
        }
    }

    out.push_str(&format!(
        "{}: {} failed, {} warned, {} passed ({} entries scanned)\n",
        status_label(report.verdict.status),
        report.verdict.counts.failed,
        report.verdict.counts.warned,
        report.verdict.counts.passed,
        report.verdict.counts.scanned
    ));

    out
}

fn status_label(s: RuleStatus) -> &'static str {
    match s {
        RuleStatus::Pass => "pass",
        RuleStatus::Warn => "warn",
        RuleStatus::Fail => "fail",
    }
}

fn status_label_upper(s: RuleStatus) -> &'static str {
    match s {
        RuleStatus::Pass => "PASS",
        RuleStatus::Warn => "WARN",
        RuleStatus::Fail => "FAIL",
    }
}
