use serde::{Deserialize, Serialize};

use crate::result::{RuleResult, RuleStatus};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjlintReport {
    pub schema: String,
    pub tool: ReportToolInfo,
    pub run: ReportRunInfo,

    /// The scanned root as given on the command line.
    pub root: String,

    pub verdict: ReportVerdict,

    #[serde(default)]
    pub results: Vec<RuleResult>,

    /// Capabilities block for "No Green By Omission" pattern.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<ReportCapabilities>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportToolInfo {
    pub name: String,
    pub version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRunInfo {
    pub started_at: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportVerdict {
    pub status: RuleStatus,
    pub counts: ReportCounts,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reasons: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportCounts {
    pub passed: u64,
    pub warned: u64,
    pub failed: u64,

    /// Entries the scanner recorded, including the root itself.
    pub scanned: u64,
}

/// Capabilities block for "No Green By Omission" pattern.
///
/// A clean verdict only means something if the reader can see which rules
/// ran and which parts of the tree the scanner could not reach.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportCapabilities {
    /// Rule ids that were evaluated in this run.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<String>,

    /// True if some entries could not be scanned.
    #[serde(default)]
    pub partial: bool,

    /// Entries the scanner had to skip.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedEntry>,
}

/// Record of an entry the scanner could not process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedEntry {
    pub path: String,
    pub reason: String,
}
