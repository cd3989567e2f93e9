use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

/// Outcome of one rule for one path.
///
/// A rule that finds nothing to complain about yields a single `pass`
/// result at path `.`; a rule with findings yields one result per finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleResult {
    /// Stable rule identifier, e.g. `ordinal-prefix`.
    pub rule: String,

    /// Path the result refers to, relative to the scanned root.
    pub path: Utf8PathBuf,

    pub status: RuleStatus,

    /// Human-readable explanation of the finding.
    pub message: String,

    /// Stable identity for this finding, for diffing runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleStatus {
    Pass,
    Warn,
    Fail,
}
