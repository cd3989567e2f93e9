//! Core check pipeline, extracted from the CLI.
//!
//! The entry point is I/O-agnostic: the tree under check arrives through
//! the `TreeSource` port and artifacts leave through the `WritePort`.

use crate::ports::{TreeSource, WritePort};
use crate::settings::CheckSettings;
use anyhow::Context;
use chrono::{DateTime, Utc};
use projlint_render::render_report_md;
use projlint_rules::{Evaluation, NamingConfig, RuleEngine, RulePolicy, TreeView};
use projlint_scan::{ScanError, ScanOutcome};
use projlint_types::report::{
    ProjlintReport, ReportCapabilities, ReportCounts, ReportRunInfo, ReportToolInfo, ReportVerdict,
};
use projlint_types::result::RuleStatus;
use projlint_types::wire::ReportV1;
use std::collections::BTreeSet;
use tracing::debug;

/// Error type for pipeline results.  Exit code 2 = invalid root, 1 = rule failures.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error(transparent)]
    InvalidRoot(#[from] ScanError),
    #[error("{0:#}")]
    Internal(#[from] anyhow::Error),
}

/// Outcome of `run_check`.
#[derive(Debug)]
pub struct CheckOutcome {
    pub report: ProjlintReport,

    /// True when at least one result failed; callers map this to exit code 1.
    pub failed: bool,
}

/// Run the check pipeline. Returns the report and the fail marker.
///
/// The caller is responsible for writing artifacts to disk (via `WritePort`)
/// or the convenience `write_report_artifacts` helper.
pub fn run_check(
    settings: &CheckSettings,
    source: &dyn TreeSource,
    tool: ReportToolInfo,
) -> Result<CheckOutcome, CheckError> {
    let started = Utc::now();

    let naming = NamingConfig::new(&settings.root_config, &settings.exempt)
        .context("compile exempt patterns")?;
    let policy = RulePolicy {
        allow: settings.allow.clone(),
        deny: settings.deny.clone(),
        severity: settings.severity.clone(),
    };

    let scan = source.scan_tree()?;
    debug!(
        records = scan.records.len(),
        skipped = scan.skipped.len(),
        "tree scanned"
    );

    let engine = RuleEngine::new();
    let evaluation = engine.evaluate(
        &TreeView {
            records: &scan.records,
            naming: &naming,
        },
        &policy,
    );

    let report = build_report(tool, started, source.root().as_str(), &evaluation, &scan);
    let failed = report
        .results
        .iter()
        .any(|r| r.status == RuleStatus::Fail);

    Ok(CheckOutcome { report, failed })
}

/// Write the report artifacts to the output directory.
pub fn write_report_artifacts(
    report: &ProjlintReport,
    out_dir: &camino::Utf8Path,
    writer: &dyn WritePort,
) -> anyhow::Result<()> {
    writer.create_dir_all(out_dir)?;

    let wire = ReportV1::from(report);
    let report_json = serde_json::to_string_pretty(&wire).context("serialize report")?;
    writer.write_file(&out_dir.join("report.json"), report_json.as_bytes())?;

    let report_md = render_report_md(report);
    writer.write_file(&out_dir.join("report.md"), report_md.as_bytes())?;

    Ok(())
}

// ── report helpers (extracted from CLI) ──────────────────────────────────

fn build_report(
    tool: ReportToolInfo,
    started: DateTime<Utc>,
    root: &str,
    evaluation: &Evaluation,
    scan: &ScanOutcome,
) -> ProjlintReport {
    let mut counts = ReportCounts {
        scanned: scan.records.len() as u64,
        ..ReportCounts::default()
    };
    let mut failed_rules = BTreeSet::new();
    let mut warned_rules = BTreeSet::new();
    for result in &evaluation.results {
        match result.status {
            RuleStatus::Pass => counts.passed += 1,
            RuleStatus::Warn => {
                counts.warned += 1;
                warned_rules.insert(result.rule.clone());
            }
            RuleStatus::Fail => {
                counts.failed += 1;
                failed_rules.insert(result.rule.clone());
            }
        }
    }

    let partial = !scan.skipped.is_empty();
    let status = if counts.failed > 0 {
        RuleStatus::Fail
    } else if counts.warned > 0 || partial {
        RuleStatus::Warn
    } else {
        RuleStatus::Pass
    };

    let mut reasons: Vec<String> = failed_rules.into_iter().collect();
    reasons.extend(warned_rules);
    if partial {
        reasons.push("partial_scan".to_string());
    }

    let ended = Utc::now();
    ProjlintReport {
        schema: projlint_types::schema::PROJLINT_REPORT_V1.to_string(),
        tool,
        run: ReportRunInfo {
            started_at: started.to_rfc3339(),
            ended_at: Some(ended.to_rfc3339()),
            duration_ms: Some((ended - started).num_milliseconds().max(0) as u64),
        },
        root: root.to_string(),
        verdict: ReportVerdict {
            status,
            counts,
            reasons,
        },
        results: evaluation.results.clone(),
        capabilities: Some(ReportCapabilities {
            rules: evaluation.rules.clone(),
            partial,
            skipped: scan.skipped.clone(),
        }),
        data: Some(serde_json::json!({
            "projlint": {
                "scan": {
                    "records": scan.records.len(),
                    "skipped": scan.skipped.len(),
                }
            }
        })),
    }
}
